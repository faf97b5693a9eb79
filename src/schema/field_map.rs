//! The structural checker for record-shaped mappings.
//!
//! A [`FieldMap`] declares a fixed set of named fields, each with its own
//! checker. Declared fields are visited in declaration order; undeclared
//! input fields are dropped from the output without complaint.

use indexmap::{IndexMap, IndexSet};

use super::checker::Checker;
use super::error::ValidationError;
use super::path::Path;
use super::value::{Mapping, Value};

static NOTHING: Value = Value::Nothing;

/// Field name to checker declarations for a [`FieldMap`].
#[derive(Debug, Default)]
pub struct Fields(IndexMap<String, Box<dyn Checker>>);

impl Fields {
    /// Creates an empty declaration set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, replacing any earlier checker for it.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, checker: impl Checker + 'static) -> Self {
        self.0.insert(name.into(), Box::new(checker));
        self
    }

    /// Returns the checker declared for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&dyn Checker> {
        self.0.get(name).map(|checker| &**checker)
    }

    /// Returns `true` when `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Iterates the declarations in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Checker)> {
        self.0
            .iter()
            .map(|(name, checker)| (name.as_str(), &**checker))
    }
}

impl<S: Into<String>> FromIterator<(S, Box<dyn Checker>)> for Fields {
    fn from_iter<I: IntoIterator<Item = (S, Box<dyn Checker>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, checker)| (name.into(), checker))
                .collect(),
        )
    }
}

/// Field names that may be absent from the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Optional(IndexSet<String>);

impl Optional {
    /// Creates an empty set: every declared field is required.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `name` may be absent.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }
}

impl<S: Into<String>> FromIterator<S> for Optional {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Accepts a mapping with a fixed set of named fields.
#[derive(Debug)]
pub struct FieldMap {
    fields: Fields,
    optional: Optional,
}

/// Returns a structural checker over `fields`.
///
/// For each declared field:
///
/// - present: its value is coerced at `path.<name>`;
/// - absent and optional: the field is omitted from the output;
/// - absent and required: its checker still runs on [`Value::Nothing`], so
///   `any()` tolerates the gap while typed checkers report
///   `expected ..., got nothing`.
#[must_use]
pub const fn field_map(fields: Fields, optional: Optional) -> FieldMap {
    FieldMap { fields, optional }
}

impl FieldMap {
    /// The declared fields.
    #[must_use]
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }
}

impl Checker for FieldMap {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let Value::Mapping(entries) = value else {
            return Err(ValidationError::new("map", value.clone(), path.clone()));
        };
        let mut out = Mapping::with_capacity(self.fields.0.len());
        for (name, checker) in self.fields.iter() {
            let key = Value::from(name);
            let field = match entries.get(&key) {
                Some(field) => field,
                None if self.optional.contains(name) => continue,
                None => &NOTHING,
            };
            let coerced = checker.coerce(field, &path.field(name))?;
            out.insert(key, coerced);
        }
        Ok(Value::Mapping(out))
    }
}

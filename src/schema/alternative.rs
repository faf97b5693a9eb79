//! Checkers that select one of several alternative shapes.
//!
//! [`OneOf`] tries each option in declaration order. [`FieldMapSet`] is a
//! discriminated union over [`FieldMap`] candidates: it reads one selector
//! field first and only then coerces the whole mapping with the chosen
//! candidate. Errors raised by rejected options are discarded.

use super::checker::Checker;
use super::error::{SchemaError, ValidationError};
use super::field_map::FieldMap;
use super::path::Path;
use super::value::Value;

/// Accepts a value if any option accepts it.
#[derive(Debug)]
pub struct OneOf {
    options: Vec<Box<dyn Checker>>,
}

/// Returns a checker yielding the first successful option's coercion.
///
/// When every option fails the result is an `unsupported value` error at
/// the current path; the options' own errors are not reported.
#[must_use]
pub const fn one_of(options: Vec<Box<dyn Checker>>) -> OneOf {
    OneOf { options }
}

impl Checker for OneOf {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        for (index, option) in self.options.iter().enumerate() {
            match option.coerce(value, path) {
                Ok(coerced) => return Ok(coerced),
                Err(error) => tracing::trace!(%path, option = index, %error, "option rejected"),
            }
        }
        Err(ValidationError::unsupported(path.clone()))
    }
}

/// A discriminated union of [`FieldMap`] checkers keyed by a selector field.
#[derive(Debug)]
pub struct FieldMapSet {
    selector: String,
    candidates: Vec<FieldMap>,
}

/// Builds a discriminated union over `candidates`, selected by the value of
/// the `selector` field.
///
/// The first candidate whose selector checker accepts the raw selector value
/// is chosen, and the whole mapping is then coerced with it (the selector
/// field included).
///
/// # Errors
///
/// Returns [`SchemaError::MissingSelector`] if any candidate declares no
/// checker for `selector`.
///
/// # Examples
///
///     use shapecheck::schema::{Fields, Optional, constant, field_map, field_map_set, int};
///
///     let circle = field_map(
///         Fields::new().with("shape", constant("circle")).with("r", int()),
///         Optional::new(),
///     );
///     let union = field_map_set("shape", vec![circle]);
///     assert!(union.is_ok());
///
///     let unkeyed = field_map(Fields::new().with("r", int()), Optional::new());
///     assert!(field_map_set("shape", vec![unkeyed]).is_err());
pub fn field_map_set(
    selector: impl Into<String>,
    candidates: Vec<FieldMap>,
) -> Result<FieldMapSet, SchemaError> {
    let selector_name = selector.into();
    if let Some(missing) = candidates
        .iter()
        .position(|candidate| !candidate.fields().contains(&selector_name))
    {
        return Err(SchemaError::MissingSelector {
            selector: selector_name,
            candidate: missing,
        });
    }
    Ok(FieldMapSet {
        selector: selector_name,
        candidates,
    })
}

impl FieldMapSet {
    /// Finds the first candidate whose selector checker accepts `raw`.
    fn select(&self, raw: &Value, path: &Path) -> Option<&FieldMap> {
        self.candidates.iter().enumerate().find_map(|(index, candidate)| {
            let checker = candidate.fields().get(&self.selector)?;
            match checker.coerce(raw, path) {
                Ok(_) => {
                    tracing::trace!(%path, candidate = index, "selector matched");
                    Some(candidate)
                }
                Err(error) => {
                    tracing::trace!(%path, candidate = index, %error, "selector rejected");
                    None
                }
            }
        })
    }
}

impl Checker for FieldMapSet {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let Value::Mapping(entries) = value else {
            return Err(ValidationError::new("map", value.clone(), path.clone()));
        };
        let selector_path = path.field(&self.selector);
        let Some(raw) = entries.get(&Value::from(self.selector.as_str())) else {
            return Err(ValidationError::new(
                "supported selector",
                Value::Nothing,
                selector_path,
            ));
        };
        self.select(raw, path).map_or_else(
            || {
                Err(ValidationError::new(
                    "supported selector",
                    raw.clone(),
                    selector_path,
                ))
            },
            |candidate| candidate.coerce(value, path),
        )
    }
}

#[cfg(test)]
#[path = "alternative_tests.rs"]
mod tests;

//! The checker abstraction shared by every validation rule.

use std::fmt;
use std::sync::Arc;

use super::error::ValidationError;
use super::path::Path;
use super::value::Value;

/// A composable rule that validates a [`Value`] and returns its coerced
/// form.
///
/// Checkers are immutable once built. `coerce` is a pure function of its
/// arguments, so one schema may serve any number of coercions, including
/// from several threads at once.
pub trait Checker: fmt::Debug + Send + Sync {
    /// Validates `value` found at `path` and returns its coerced form.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] anchored at `path`, or at a descendant
    /// of it for composite checkers, describing the first mismatch.
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError>;

    /// Boxes the checker for use in heterogeneous collections.
    #[must_use]
    fn boxed(self) -> Box<dyn Checker>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        (**self).coerce(value, path)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        (**self).coerce(value, path)
    }
}

/// Coerces a whole value tree with `checker`, starting at the root path.
///
/// # Errors
///
/// Returns the [`ValidationError`] produced by the first mismatch.
///
/// # Examples
///
///     use shapecheck::schema::{Value, coerce, int, list};
///
///     let schema = list(int());
///     let input = Value::Sequence(vec![Value::Int8(1), Value::Int32(2)]);
///     let output = coerce(&schema, &input).unwrap();
///     assert_eq!(output, Value::Sequence(vec![Value::Int64(1), Value::Int64(2)]));
pub fn coerce<C: Checker + ?Sized>(checker: &C, value: &Value) -> Result<Value, ValidationError> {
    checker.coerce(value, &Path::root()).inspect_err(|error| {
        tracing::debug!(%error, kind = error.kind().as_str(), "value rejected by schema");
    })
}

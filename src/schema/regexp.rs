//! Syntactic validation of regular expression strings using `regex`.
//!
//! [`SimpleRegexp`] only checks that a string compiles; the compiled
//! program is discarded and never matched against anything.

use super::checker::Checker;
use super::error::ValidationError;
use super::path::Path;
use super::value::Value;

/// Accepts strings that compile as regular expressions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleRegexp;

/// Returns a checker for regular expression strings.
///
/// The accepted dialect is the `regex` crate's syntax: no backreferences or
/// look-around, linear-time matching.
#[must_use]
pub const fn simple_regexp() -> SimpleRegexp {
    SimpleRegexp
}

impl Checker for SimpleRegexp {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let Value::String(pattern) = value else {
            return Err(ValidationError::new(
                "regexp string",
                value.clone(),
                path.clone(),
            ));
        };
        if let Err(error) = regex::Regex::new(pattern) {
            tracing::trace!(%path, %error, "pattern does not compile");
            return Err(ValidationError::new(
                "valid regexp",
                value.clone(),
                path.clone(),
            ));
        }
        Ok(value.clone())
    }
}

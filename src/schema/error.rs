//! Error types for schema construction and value coercion.

use std::borrow::Cow;

use super::path::Path;
use super::value::Value;

/// Errors raised while assembling a schema, before any value is checked.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A `FieldMapSet` candidate declares no checker for the selector field.
    #[error("field map set candidate {candidate} has no checker for selector field '{selector}'")]
    MissingSelector {
        /// The selector field name.
        selector: String,
        /// Zero-based position of the offending candidate.
        candidate: usize,
    },
}

/// Stable classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No accepted shape matched the value.
    Unsupported,
    /// A value was required but absent.
    Missing,
    /// A value was present but had the wrong shape.
    Mismatch,
}

impl ErrorKind {
    /// Returns the stable, machine-readable code string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unsupported => "schema.unsupported_value",
            Self::Missing => "schema.missing_value",
            Self::Mismatch => "schema.type_mismatch",
        }
    }
}

/// The first point at which a value failed to match its schema.
///
/// Renders as one of:
///
/// - `<path>: unsupported value`
/// - `<path>: expected <description>, got nothing`
/// - `<path>: expected <description>, got <value>`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {}", describe(.expected.as_deref(), .got))]
pub struct ValidationError {
    expected: Option<Cow<'static, str>>,
    got: Box<Value>,
    path: Path,
}

impl ValidationError {
    /// Creates a mismatch error: `expected` was wanted, `got` was found.
    #[must_use]
    pub fn new(expected: impl Into<Cow<'static, str>>, got: Value, path: Path) -> Self {
        Self {
            expected: Some(expected.into()),
            got: Box::new(got),
            path,
        }
    }

    /// Creates an error reporting that no accepted shape matched at `path`.
    #[must_use]
    pub fn unsupported(path: Path) -> Self {
        Self {
            expected: None,
            got: Box::new(Value::Nothing),
            path,
        }
    }

    /// Description of what was expected, or `None` for unsupported values.
    #[must_use]
    pub fn expected(&self) -> Option<&str> {
        self.expected.as_deref()
    }

    /// The offending value; [`Value::Nothing`] when it was absent.
    #[must_use]
    pub fn got(&self) -> &Value {
        &self.got
    }

    /// Where in the value tree the mismatch occurred.
    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Classifies the error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match (&self.expected, self.got.as_ref()) {
            (None, _) => ErrorKind::Unsupported,
            (Some(_), Value::Nothing) => ErrorKind::Missing,
            (Some(_), _) => ErrorKind::Mismatch,
        }
    }
}

fn describe(expected: Option<&str>, got: &Value) -> String {
    match (expected, got) {
        (None, _) => "unsupported value".to_owned(),
        (Some(want), Value::Nothing) => format!("expected {want}, got nothing"),
        (Some(want), value) => format!("expected {want}, got {value}"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::unsupported(
        ValidationError::unsupported(Path::root().field("a")),
        ".a: unsupported value",
        ErrorKind::Unsupported
    )]
    #[case::missing(
        ValidationError::new("bool", Value::Nothing, Path::root().field("a")),
        ".a: expected bool, got nothing",
        ErrorKind::Missing
    )]
    #[case::mismatch(
        ValidationError::new("int", Value::from("x"), Path::root().index(1)),
        r#"[1]: expected int, got "x""#,
        ErrorKind::Mismatch
    )]
    fn renders_each_form(
        #[case] error: ValidationError,
        #[case] message: &str,
        #[case] kind: ErrorKind,
    ) {
        assert_eq!(error.to_string(), message);
        assert_eq!(error.kind(), kind);
    }

    #[test]
    fn root_errors_have_an_empty_path_prefix() {
        let error = ValidationError::new("map", Value::Int64(1), Path::root());
        assert_eq!(error.to_string(), ": expected map, got 1");
    }

    #[test]
    fn missing_selector_names_the_candidate() {
        let error = SchemaError::MissingSelector {
            selector: "kind".to_owned(),
            candidate: 1,
        };
        assert_eq!(
            error.to_string(),
            "field map set candidate 1 has no checker for selector field 'kind'"
        );
    }

    #[test]
    fn kind_codes_are_stable() {
        assert_eq!(ErrorKind::Unsupported.as_str(), "schema.unsupported_value");
        assert_eq!(ErrorKind::Missing.as_str(), "schema.missing_value");
        assert_eq!(ErrorKind::Mismatch.as_str(), "schema.type_mismatch");
    }
}

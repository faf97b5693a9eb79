//! Leaf checkers for scalar values.
//!
//! The numeric checkers normalize width: every accepted integer becomes a
//! [`Value::Int64`] and every accepted float a [`Value::Float64`]. The
//! remaining leaves return their input unchanged.

use super::checker::Checker;
use super::error::ValidationError;
use super::path::Path;
use super::value::Value;

/// Accepts every value, including absence, and returns it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Any;

/// Returns a checker that never fails.
#[must_use]
pub const fn any() -> Any {
    Any
}

impl Checker for Any {
    fn coerce(&self, value: &Value, _path: &Path) -> Result<Value, ValidationError> {
        Ok(value.clone())
    }
}

/// Accepts only values deep-equal to a fixed constant.
#[derive(Debug, Clone)]
pub struct Const {
    value: Value,
}

/// Returns a checker that accepts exactly `value`.
///
/// Comparison is structural and tag-sensitive, so `Const(Int64(1))` rejects
/// `Int32(1)`.
#[must_use]
pub fn constant(value: impl Into<Value>) -> Const {
    Const {
        value: value.into(),
    }
}

impl Checker for Const {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        if *value == self.value {
            return Ok(value.clone());
        }
        Err(ValidationError::new(
            self.value.to_string(),
            value.clone(),
            path.clone(),
        ))
    }
}

/// Accepts booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct Bool;

/// Returns a checker that accepts boolean values only.
#[must_use]
pub const fn boolean() -> Bool {
    Bool
}

impl Checker for Bool {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        match value {
            Value::Bool(_) => Ok(value.clone()),
            other => Err(ValidationError::new("bool", other.clone(), path.clone())),
        }
    }
}

/// Accepts integers of any width and widens them to 64 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

/// Returns a checker that accepts any integer as a [`Value::Int64`].
#[must_use]
pub const fn int() -> Int {
    Int
}

impl Checker for Int {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let widened = match *value {
            Value::Int8(v) => i64::from(v),
            Value::Int16(v) => i64::from(v),
            Value::Int32(v) => i64::from(v),
            Value::Int64(v) => v,
            _ => return Err(ValidationError::new("int", value.clone(), path.clone())),
        };
        Ok(Value::Int64(widened))
    }
}

/// Accepts floats of any precision and widens them to 64 bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

/// Returns a checker that accepts any float as a [`Value::Float64`].
///
/// Integers are not floats and are rejected.
#[must_use]
pub const fn float() -> Float {
    Float
}

impl Checker for Float {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let widened = match *value {
            Value::Float32(v) => f64::from(v),
            Value::Float64(v) => v,
            _ => return Err(ValidationError::new("float", value.clone(), path.clone())),
        };
        Ok(Value::Float64(widened))
    }
}

/// Accepts strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Str;

/// Returns a checker that accepts string values only.
#[must_use]
pub const fn string() -> Str {
    Str
}

impl Checker for Str {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        match value {
            Value::String(_) => Ok(value.clone()),
            other => Err(ValidationError::new("string", other.clone(), path.clone())),
        }
    }
}

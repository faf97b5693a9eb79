//! Checkers for homogeneous sequences and mappings.

use super::checker::Checker;
use super::error::ValidationError;
use super::path::Path;
use super::value::{Mapping, Value};

/// Accepts a sequence whose every element satisfies one checker.
#[derive(Debug)]
pub struct List {
    elem: Box<dyn Checker>,
}

/// Returns a checker for sequences of `elem`.
///
/// Elements are checked in order at `path[i]`; the first failure aborts the
/// whole list.
#[must_use]
pub fn list(elem: impl Checker + 'static) -> List {
    List {
        elem: Box::new(elem),
    }
}

impl Checker for List {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let Value::Sequence(items) = value else {
            return Err(ValidationError::new("list", value.clone(), path.clone()));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.elem.coerce(item, &path.index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Sequence)
    }
}

/// Accepts a mapping whose keys and values each satisfy one checker.
#[derive(Debug)]
pub struct Map {
    key: Box<dyn Checker>,
    value: Box<dyn Checker>,
}

/// Returns a checker for mappings from `key` to `value`.
///
/// Keys are checked at the mapping's own path and values at `path.<key>`.
/// Two input keys that coerce to the same output key are rejected with
/// `expected unique key`.
#[must_use]
pub fn map(key: impl Checker + 'static, value: impl Checker + 'static) -> Map {
    Map {
        key: Box::new(key),
        value: Box::new(value),
    }
}

impl Checker for Map {
    fn coerce(&self, value: &Value, path: &Path) -> Result<Value, ValidationError> {
        let Value::Mapping(entries) = value else {
            return Err(ValidationError::new("map", value.clone(), path.clone()));
        };
        let mut out = Mapping::with_capacity(entries.len());
        for (key, item) in entries {
            let new_key = self.key.coerce(key, path)?;
            let item_path = path.key(key.key_label());
            let new_item = self.value.coerce(item, &item_path)?;
            if out.contains_key(&new_key) {
                return Err(ValidationError::new("unique key", new_key, item_path));
            }
            out.insert(new_key, new_item);
        }
        Ok(Value::Mapping(out))
    }
}

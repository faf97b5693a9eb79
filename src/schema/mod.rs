//! Composable checkers for dynamically-typed value trees.
//!
//! A schema is built once from checker constructors ([`any`], [`int`],
//! [`list`], [`field_map`], [`one_of`], ...) and then applied to decoded
//! [`Value`] trees with [`coerce`]. A successful coercion returns a new tree
//! with numbers normalized to 64 bits and undeclared record fields dropped;
//! a failure returns a [`ValidationError`] naming the first mismatch and
//! its [`Path`].

mod alternative;
mod checker;
mod collection;
mod error;
mod field_map;
mod path;
mod regexp;
mod scalar;
mod value;

pub use alternative::{FieldMapSet, OneOf, field_map_set, one_of};
pub use checker::{Checker, coerce};
pub use collection::{List, Map, list, map};
pub use error::{ErrorKind, SchemaError, ValidationError};
pub use field_map::{FieldMap, Fields, Optional, field_map};
pub use path::{Path, Segment};
pub use regexp::{SimpleRegexp, simple_regexp};
pub use scalar::{Any, Bool, Const, Float, Int, Str, any, boolean, constant, float, int, string};
pub use value::{Mapping, Value};

//! `shapecheck` — schema checkers that validate and coerce value trees of
//! dynamically-discovered shape.
//!
//! Decoded documents (YAML, JSON, plist-like formats) arrive as generic
//! [`schema::Value`] trees. A schema assembled from composable checkers walks
//! such a tree, verifies its shape, normalizes scalars, and returns either
//! the coerced tree or a path-qualified error for the first mismatch.

/// Checker constructors, the value and path models, and error types.
pub mod schema;

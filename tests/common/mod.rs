//! Shared test helpers for integration tests.

use shapecheck::schema::{
    Checker, FieldMap, Fields, Optional, Value, boolean, constant, field_map, field_map_set,
    float, int, list, map, one_of, simple_regexp, string,
};

/// Loads a fixture file from the `tests/fixtures/` directory.
///
/// # Panics
///
/// Panics if the file cannot be read.
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{name}"))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// Decodes a YAML fixture into a value tree.
///
/// # Panics
///
/// Panics if the file cannot be read or is not valid YAML.
pub fn load_value(name: &str) -> Value {
    let yaml = load_fixture(name);
    serde_saphyr::from_str(&yaml)
        .unwrap_or_else(|e| panic!("failed to decode fixture {name}: {e}"))
}

/// Schema for the service descriptors under `tests/fixtures/`.
///
/// # Panics
///
/// Panics if the backend union is malformed.
pub fn service_schema() -> FieldMap {
    let route = field_map(
        Fields::new().with("path", simple_regexp()).with(
            "methods",
            list(one_of(vec![
                constant("GET").boxed(),
                constant("POST").boxed(),
                constant("PUT").boxed(),
            ])),
        ),
        Optional::new(),
    );
    let http = field_map(
        Fields::new()
            .with("kind", constant("http"))
            .with("url", string())
            .with("timeout", one_of(vec![int().boxed(), float().boxed()])),
        Optional::from_iter(["timeout"]),
    );
    let fixed = field_map(
        Fields::new()
            .with("kind", constant("static"))
            .with("root", string()),
        Optional::new(),
    );
    let backend = field_map_set("kind", vec![http, fixed])
        .unwrap_or_else(|e| panic!("backend union is malformed: {e}"));

    field_map(
        Fields::new()
            .with("name", string())
            .with("port", int())
            .with("debug", boolean())
            .with("weight", float())
            .with("tags", list(string()))
            .with("env", map(string(), string()))
            .with("routes", list(route))
            .with("backend", backend),
        Optional::from_iter(["debug", "weight", "tags", "env", "routes"]),
    )
}

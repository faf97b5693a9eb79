//! Behaviour-driven tests for coercing decoded service descriptors.
//!
//! These tests use `rstest` parameterization to express Given/When/Then
//! acceptance criteria over the YAML fixtures in `tests/fixtures/`.

mod common;

use common::{load_value, service_schema};
use rstest::rstest;
use shapecheck::schema::{ErrorKind, Path, Segment, Value, coerce};

fn field<'a>(record: &'a Value, name: &str) -> Option<&'a Value> {
    record.as_mapping()?.get(&Value::from(name))
}

// ── Given valid descriptors, coercion succeeds ──────────────────────

#[rstest]
#[case::full("valid_service.yaml")]
#[case::minimal("valid_service_minimal.yaml")]
fn given_a_valid_descriptor_when_coerced_then_it_succeeds(#[case] fixture: &str) {
    let result = coerce(&service_schema(), &load_value(fixture));
    assert!(
        result.is_ok(),
        "expected {fixture} to coerce, got: {:?}",
        result.err()
    );
}

#[test]
fn full_descriptor_is_normalized() {
    let output = coerce(&service_schema(), &load_value("valid_service.yaml"))
        .expect("should coerce");

    assert_eq!(field(&output, "name"), Some(&Value::from("billing")));
    assert_eq!(field(&output, "port"), Some(&Value::Int64(8080)));
    assert_eq!(field(&output, "debug"), Some(&Value::Bool(false)));
    assert_eq!(field(&output, "weight"), Some(&Value::Float64(0.75)));
    assert_eq!(
        field(&output, "tags"),
        Some(&Value::from_iter(["internal", "payments"]))
    );
    let backend = field(&output, "backend").expect("backend should be present");
    assert_eq!(field(backend, "kind"), Some(&Value::from("http")));
    assert_eq!(field(backend, "timeout"), Some(&Value::Int64(30)));
}

#[test]
fn undeclared_fields_are_dropped() {
    let output = coerce(&service_schema(), &load_value("valid_service.yaml"))
        .expect("should coerce");
    assert!(field(&output, "annotations").is_none());
}

#[test]
fn absent_optional_fields_are_omitted() {
    let output = coerce(&service_schema(), &load_value("valid_service_minimal.yaml"))
        .expect("should coerce");
    let record = output.as_mapping().expect("output should be a mapping");
    let keys: Vec<String> = record.keys().map(Value::key_label).collect();
    assert_eq!(keys, ["name", "port", "backend"]);
}

#[rstest]
#[case::full("valid_service.yaml")]
#[case::minimal("valid_service_minimal.yaml")]
fn coerced_output_is_a_fixed_point(#[case] fixture: &str) {
    let schema = service_schema();
    let once = coerce(&schema, &load_value(fixture)).expect("should coerce");
    let twice = coerce(&schema, &once).expect("coerced output should still match");
    assert_eq!(once, twice);
}

// ── Given invalid descriptors, coercion fails at the mismatch ───────

#[rstest]
#[case::port_type("invalid_port_type.yaml", ".port", ErrorKind::Mismatch)]
#[case::missing_name("invalid_missing_name.yaml", ".name", ErrorKind::Missing)]
#[case::backend_kind("invalid_backend_kind.yaml", ".backend.kind", ErrorKind::Mismatch)]
#[case::missing_backend_kind(
    "invalid_missing_backend_kind.yaml",
    ".backend.kind",
    ErrorKind::Missing
)]
#[case::route_regexp("invalid_route_regexp.yaml", ".routes[1].path", ErrorKind::Mismatch)]
#[case::route_method(
    "invalid_route_method.yaml",
    ".routes[0].methods[1]",
    ErrorKind::Unsupported
)]
#[case::env_value("invalid_env_value.yaml", ".env.REGION", ErrorKind::Mismatch)]
#[case::timeout("invalid_timeout.yaml", ".backend.timeout", ErrorKind::Unsupported)]
fn given_an_invalid_descriptor_when_coerced_then_the_error_is_located(
    #[case] fixture: &str,
    #[case] expected_path: &str,
    #[case] expected_kind: ErrorKind,
) {
    let result = coerce(&service_schema(), &load_value(fixture));
    let Err(error) = result else {
        panic!("expected {fixture} to fail coercion");
    };
    assert_eq!(error.path().to_string(), expected_path);
    assert_eq!(
        error.kind(),
        expected_kind,
        "unexpected error kind for {fixture}: {error}"
    );
}

#[test]
fn route_errors_carry_structured_segments() {
    let Err(error) = coerce(&service_schema(), &load_value("invalid_route_regexp.yaml")) else {
        panic!("fixture should fail");
    };
    let expected = Path::root().field("routes").index(1).field("path");
    assert_eq!(error.path(), &expected);
    assert_eq!(
        error.path().segments(),
        [
            Segment::Field("routes".to_owned()),
            Segment::Index(1),
            Segment::Field("path".to_owned()),
        ]
    );
}

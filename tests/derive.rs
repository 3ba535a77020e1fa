//! Coverage for `#[derive(Formattable)]`: struct field omission on
//! `None`, unknown-key tolerance, and fieldless enum name dispatch.

use symbolic_json::facade::utf8;
use symbolic_json::Formattable;

#[derive(Debug, Clone, PartialEq, Formattable)]
struct Waypoint {
    lat: f64,
    lon: f64,
    label: Option<String>,
}

#[test]
fn optional_field_is_omitted_when_absent() {
    let value = Waypoint { lat: 1.5, lon: -2.5, label: None };
    let encoded = utf8::to_string(&value).unwrap();
    assert_eq!(encoded, r#"{"lat":1.5,"lon":-2.5}"#);
}

#[test]
fn optional_field_is_written_when_present() {
    let value = Waypoint { lat: 1.5, lon: -2.5, label: Some("camp".to_string()) };
    let encoded = utf8::to_string(&value).unwrap();
    assert_eq!(encoded, r#"{"lat":1.5,"lon":-2.5,"label":"camp"}"#);
}

#[test]
fn struct_round_trips_through_facade() {
    let value = Waypoint { lat: 12.0, lon: 34.0, label: Some("base".to_string()) };
    let encoded = utf8::to_string(&value).unwrap();
    let decoded: Waypoint = utf8::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn unknown_keys_are_skipped_on_read() {
    let json = r#"{"lat":1.0,"extra":{"nested":[1,2,3]},"lon":2.0}"#;
    let decoded: Waypoint = utf8::from_str(json).unwrap();
    assert_eq!(decoded, Waypoint { lat: 1.0, lon: 2.0, label: None });
}

#[test]
fn missing_required_field_is_an_error() {
    let err = utf8::from_str::<Waypoint>(r#"{"lat":1.0}"#).unwrap_err();
    assert_eq!(err.kind, symbolic_json::JsonErrorKind::UnexpectedEnd);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Formattable)]
enum Direction {
    North,
    East,
    South,
    West,
}

#[test]
fn enum_serializes_as_declared_name() {
    let encoded = utf8::to_string(&Direction::East).unwrap();
    assert_eq!(encoded, r#""East""#);
}

#[test]
fn enum_round_trips_in_a_sequence() {
    let value = vec![Direction::North, Direction::West, Direction::South];
    let encoded = utf8::to_string(&value).unwrap();
    let decoded: Vec<Direction> = utf8::from_str(&encoded).unwrap();
    assert_eq!(decoded, value);
}

#[test]
fn enum_rejects_unknown_name() {
    let err = utf8::from_str::<Direction>(r#""Northwest""#).unwrap_err();
    assert_eq!(err.kind, symbolic_json::JsonErrorKind::InvalidEnumName);
}

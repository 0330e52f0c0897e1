//! Integration tests for the term-listing pipeline
//!
//! Tests the full path from a request (as the REST layer would bind it)
//! through encoder resolution, range filtering, and pattern rewriting.

use termlens::{EncoderRegistry, TermEncoder, TermLensError, TermLister, TermsRequest};

fn dictionary() -> Vec<&'static str> {
    // Dictionary order, as an index would iterate it
    vec!["apple", "middle_v1", "nose", "peach_v2", "zoo"]
}

#[test]
fn test_range_and_rewrite_together() {
    let registry = EncoderRegistry::default();
    let request = TermsRequest::new("text")
        .with_range("m..p")
        .with_pattern(r"(\w+)_v(\d+)/$1");

    let lister = TermLister::new(&registry, &request).unwrap();
    // "middle_v1" is in [m, p) and matches; "nose" is in range but does not
    // match the regex; "peach_v2" sorts at or above "p" and is excluded by
    // the exclusive upper bound
    assert_eq!(lister.list(dictionary()), vec!["middle"]);
}

#[test]
fn test_defaults_echo_the_dictionary() {
    let registry = EncoderRegistry::default();
    let lister = TermLister::new(&registry, &TermsRequest::new("keyword")).unwrap();
    assert_eq!(lister.list(dictionary()), dictionary());
}

#[test]
fn test_point_range_request() {
    let registry = EncoderRegistry::default();
    let request = TermsRequest::new("keyword").with_range("nose");
    let lister = TermLister::new(&registry, &request).unwrap();
    assert_eq!(lister.list(dictionary()), vec!["nose"]);
}

#[test]
fn test_rewrite_with_escaped_dollar_and_slash() {
    let registry = EncoderRegistry::default();
    // Regex "(\w+)_v(\d+)" with template "$2//$1 costs $$" (literal slash,
    // literal dollar)
    let request = TermsRequest::new("keyword").with_pattern(r"(\w+)_v(\d+)/$2//$1 costs $$");
    let lister = TermLister::new(&registry, &request).unwrap();
    assert_eq!(
        lister.list(dictionary()),
        vec!["1/middle costs $", "2/peach costs $"]
    );
}

#[test]
fn test_request_binding_from_json() {
    let body = serde_json::json!({
        "field_type": "keyword",
        "range": "m..p",
        "limit": 1
    });
    let request: TermsRequest = serde_json::from_value(body).unwrap();
    assert_eq!(request.field_type, "keyword");
    assert_eq!(request.pattern, None);

    let registry = EncoderRegistry::default();
    let lister = TermLister::new(&registry, &request).unwrap();
    assert_eq!(lister.list(dictionary()), vec!["middle_v1"]);
}

#[test]
fn test_request_serde_roundtrip() {
    let request = TermsRequest::new("long")
        .with_range("0..100")
        .with_pattern("x/y")
        .with_limit(10);
    let json = serde_json::to_string(&request).unwrap();
    let back: TermsRequest = serde_json::from_str(&json).unwrap();
    assert_eq!(back.field_type, "long");
    assert_eq!(back.range.as_deref(), Some("0..100"));
    assert_eq!(back.pattern.as_deref(), Some("x/y"));
    assert_eq!(back.limit, Some(10));
}

#[test]
fn test_validation_failures_before_any_iteration() {
    let registry = EncoderRegistry::default();

    let unknown = TermLister::new(&registry, &TermsRequest::new("geo_point")).unwrap_err();
    assert!(unknown.is_validation_error());
    assert_eq!(unknown.to_string(), "Unknown field type: geo_point");

    let malformed = TermLister::new(
        &registry,
        &TermsRequest::new("keyword").with_range("a..b..c"),
    )
    .unwrap_err();
    assert!(matches!(malformed, TermLensError::MalformedRange(_)));

    let bad_regex = TermLister::new(
        &registry,
        &TermsRequest::new("keyword").with_pattern("[unclosed/x"),
    )
    .unwrap_err();
    assert!(matches!(bad_regex, TermLensError::InvalidPattern(_)));
}

#[test]
fn test_custom_registry_substitution() {
    let mut registry = EncoderRegistry::empty();
    registry.register("timestamp", TermEncoder::Date);

    let request = TermsRequest::new("timestamp").with_range("1000..3000");
    let lister = TermLister::new(&registry, &request).unwrap();
    assert_eq!(lister.list(["500", "1000", "2999", "3000"]), vec!["1000", "2999"]);

    // Builtin names are absent from the custom registry
    assert!(TermLister::new(&registry, &TermsRequest::new("keyword")).is_err());
}

#[test]
fn test_long_dictionary_numeric_order() {
    let registry = EncoderRegistry::default();
    let request = TermsRequest::new("long").with_range("-10..10");
    let lister = TermLister::new(&registry, &request).unwrap();
    // Textual order would put "-100" next to "-10"; encoded order is numeric
    assert_eq!(
        lister.list(["-100", "-10", "-1", "0", "9", "10", "100"]),
        vec!["-10", "-1", "0", "9"]
    );
}

#[test]
fn test_limit_applies_after_filtering() {
    let registry = EncoderRegistry::default();
    let request = TermsRequest::new("keyword")
        .with_pattern(r"(\w+)_v\d+/$1")
        .with_limit(1);
    let lister = TermLister::new(&registry, &request).unwrap();
    // The limit counts reported terms, not scanned ones
    assert_eq!(lister.list(dictionary()), vec!["middle"]);
}

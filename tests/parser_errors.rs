// Parser error path tests
// These systematically test unhappy paths of the notation

use wpp_core::error::{ParserError, WppError};
use wpp_core::parse;

fn parser_error(source: &str) -> ParserError {
    match parse(source) {
        Err(WppError::Parser(err)) => err,
        other => panic!("Expected parser error for {source:?}, got {other:?}"),
    }
}

#[test]
fn test_parser_error_empty_input() {
    assert!(matches!(parser_error(""), ParserError::NoGroups { .. }));
}

#[test]
fn test_parser_error_missing_closing_brace() {
    let err = parser_error(r#"[Person("Alice"){ age("30")"#);
    assert!(matches!(err, ParserError::NoGroups { .. }));
}

#[test]
fn test_parser_error_missing_type_clause() {
    let err = parser_error(r#"[{ age("30") }]"#);
    assert!(matches!(err, ParserError::NoType { index: 0, .. }));
}

#[test]
fn test_parser_error_stray_closing_brace() {
    let err = parser_error("}");
    assert!(matches!(err, ParserError::NoType { index: 0, .. }));
}

#[test]
fn test_parser_error_type_without_parens() {
    let err = parser_error(r#"[Person{ age("30") }]"#);
    match err {
        ParserError::BadAttribute { clause, .. } => assert_eq!(clause, "Person"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn test_parser_error_multiple_names() {
    let err = parser_error(r#"[A("a"){}] [Twins("Castor"+"Pollux"){}]"#);
    assert!(matches!(
        err,
        ParserError::TypeHasMultipleNames { index: 1, count: 2, .. }
    ));
}

#[test]
fn test_parser_error_nested_parentheses() {
    let err = parser_error(r#"[P("p"){ a(b("c")) }]"#);
    assert!(matches!(err, ParserError::BadAttribute { .. }));
}

#[test]
fn test_parser_error_bracket_in_property_name() {
    let err = parser_error(r#"[P("p"){ a[0]("c") }]"#);
    assert!(matches!(err, ParserError::BadAttribute { .. }));
}

#[test]
fn test_parser_unterminated_attribute_is_ignored() {
    let doc = parse(r#"[P("p"){ ok("1") dangling }]"#).unwrap();
    assert_eq!(doc.nodes[0].properties.len(), 1);
}

#[test]
fn test_parser_empty_name_is_valid() {
    let doc = parse("[Person(){}]").unwrap();
    assert_eq!(doc.nodes[0].node_type.as_deref(), Some("Person"));
    assert_eq!(doc.nodes[0].name.as_deref(), Some(""));
}

#[test]
fn test_parser_error_span_points_into_source() {
    let err = parser_error(r#"[P("p"){ ok("1") bad) }]"#);
    match err {
        ParserError::BadAttribute { span, clause, .. } => {
            assert_eq!(clause, "bad)");
            assert!(span.offset() > 0);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

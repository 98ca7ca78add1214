//! Integration tests for end-to-end parsing.
//!
//! These tests drive the public API from raw text through the lexer and
//! parser to the rendered expression tree.

use pratt::{
    ast::{ast::Expr, expressions::BinaryExpr},
    errors::errors::ErrorImpl,
    get_line_at_position,
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::{parse, Parser},
};
use pretty_assertions::assert_eq;

#[test]
fn test_sample_expression() {
    let expr = parse("1 + 2 + 3 + 4 * 5 - 6").unwrap();
    assert_eq!(expr.to_string(), "((((1 + 2) + 3) + (4 * 5)) - 6)");
}

#[test]
fn test_single_numbers() {
    for n in [0_i64, 1, 9, 10, 42, 1000, 65535, 4294967296, i64::MAX] {
        let expr = parse(&n.to_string()).unwrap();
        assert_eq!(expr.to_string(), n.to_string());
    }
}

#[test]
fn test_whitespace_invariance() {
    let expected = parse("1+2*3-4*5*6+7").unwrap().to_string();

    let variants = [
        "1 + 2 * 3 - 4 * 5 * 6 + 7",
        "  1\t+\t2 *3-  4 * 5*6 + 7  ",
        "1\n+\n2\n*\n3\n-\n4\n*\n5\n*\n6\n+\n7\n",
        "\r\n1 +2\r\n* 3 -4 *5 * 6+ 7",
    ];

    for source in variants {
        assert_eq!(parse(source).unwrap().to_string(), expected);
    }
    assert_eq!(expected, "(((1 + (2 * 3)) - ((4 * 5) * 6)) + 7)");
}

#[test]
fn test_long_left_chain() {
    let source = (1..=20).map(|n| n.to_string()).collect::<Vec<_>>().join(" - ");
    let expr = parse(&source).unwrap();

    let mut expected = String::from("1");
    for n in 2..=20 {
        expected = format!("({} - {})", expected, n);
    }
    assert_eq!(expr.to_string(), expected);
}

#[test]
fn test_parser_over_explicit_lexer() {
    let mut parser = Parser::new(Lexer::new("8 * 9 + 10"));
    let expr = parser.parse_expression().unwrap();

    let root = expr.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(root.operator.kind, TokenKind::Plus);
    assert_eq!(root.left.to_string(), "(8 * 9)");
    assert_eq!(expr.get_span().start.0, 0);
    assert_eq!(expr.get_span().end.0, 10);
}

#[test]
fn test_tokenize_sample() {
    let rendered: Vec<String> = tokenize("12 * 3").iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, vec!["<Number,12>", "<Star,*>", "<Number,3>", "<EOF,>"]);
}

#[test]
fn test_failures_are_reported() {
    let cases: [(&str, &str, u32); 6] = [
        ("+", "MissingPrefixHandler", 0),
        ("", "MissingPrefixHandler", 0),
        ("3 *", "MissingPrefixHandler", 3),
        ("3 * ?", "IllegalCharacter", 4),
        ("3 4", "UnexpectedToken", 2),
        ("18446744073709551616", "NumberParseError", 0),
    ];

    for (source, name, position) in cases {
        let error = parse(source).unwrap_err();
        assert_eq!(error.get_error_name(), name, "source: {:?}", source);
        assert_eq!(error.get_position().0, position, "source: {:?}", source);
    }
}

#[test]
fn test_error_message_and_location() {
    let source = "1 + 2\n  * * 3";
    let error = parse(source).unwrap_err();

    assert!(matches!(
        error.get_kind(),
        ErrorImpl::MissingPrefixHandler { kind: TokenKind::Star, .. }
    ));
    assert_eq!(
        error.to_string(),
        "no prefix handler for token kind Star: \"*\" at position 10"
    );

    let (line, text, column) = get_line_at_position(source, error.get_position().0).unwrap();
    assert_eq!(line, 2);
    assert_eq!(text, "  * * 3");
    assert_eq!(column, 4);
}

#[test]
fn test_long_chain_renders_and_drops() {
    let terms = 200_000;
    let source = vec!["1"; terms].join(" + ");

    let expr = parse(&source).unwrap();
    let rendered = expr.to_string();

    assert!(rendered.starts_with(&"(".repeat(terms - 1)));
    assert!(rendered.ends_with("1 + 1) + 1)"));
    assert_eq!(rendered.len(), (terms - 1) * 2 + source.len());

    drop(expr);
}

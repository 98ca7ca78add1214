//! Unit tests for expression rendering.

use crate::{
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::{
    ast::{Expr, ExprType, ExprWrapper},
    expressions::{BinaryExpr, NumberExpr},
};

fn span(start: u32, end: u32) -> Span {
    Span {
        start: Position(start),
        end: Position(end),
    }
}

fn number(value: i64) -> ExprWrapper {
    ExprWrapper::new(NumberExpr {
        value,
        span: span(0, 0),
    })
}

fn binary(left: ExprWrapper, op: &str, kind: TokenKind, right: ExprWrapper) -> ExprWrapper {
    ExprWrapper::new(BinaryExpr {
        left,
        operator: Token {
            kind,
            value: op.to_string(),
            span: span(0, 0),
        },
        right,
        span: span(0, 0),
    })
}

#[test]
fn test_number_renders_value() {
    assert_eq!(number(42).to_string(), "42");
    assert_eq!(number(-7).to_string(), "-7");
}

#[test]
fn test_binary_renders_parenthesized() {
    let expr = binary(
        binary(number(1), "+", TokenKind::Plus, number(2)),
        "*",
        TokenKind::Star,
        number(3),
    );

    assert_eq!(expr.to_string(), "((1 + 2) * 3)");
    assert_eq!(expr.get_expr_type(), ExprType::Binary);
}

#[test]
fn test_downcast_and_clone() {
    let expr = binary(number(4), "-", TokenKind::Dash, number(5));
    let copy = expr.clone();

    let binary = copy.downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(binary.operator.kind, TokenKind::Dash);
    assert_eq!(binary.left.downcast_ref::<NumberExpr>().unwrap().value, 4);
    assert!(binary.right.downcast_ref::<BinaryExpr>().is_none());
    assert_eq!(copy.to_string(), expr.to_string());
}

#[test]
fn test_take_children_leaves_numbers_behind() {
    let mut expr = binary(
        binary(number(1), "+", TokenKind::Plus, number(2)),
        "*",
        TokenKind::Star,
        number(3),
    );

    let children = expr.take_children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].to_string(), "(1 + 2)");
    assert_eq!(children[1].to_string(), "3");
    assert_eq!(expr.to_string(), "(0 * 0)");
    assert!(number(5).take_children().is_empty());
}

#[test]
fn test_deep_tree_renders_and_drops() {
    let depth = 100_000;
    let mut expr = number(0);
    for n in 1..=depth {
        expr = binary(expr, "-", TokenKind::Dash, number(n));
    }

    let rendered = expr.to_string();
    assert!(rendered.starts_with(&"(".repeat(depth as usize)));
    assert!(rendered.ends_with(" - 100000)"));
    assert_eq!(rendered.matches(')').count(), depth as usize);

    drop(expr);
}

use std::{
    any::Any,
    fmt::{self, Display},
    mem,
};

use crate::{lexer::tokens::Token, Span};

use super::ast::{Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

// OPERATIONS

/// Binary Expression
/// Represents a binary operation (e.g., `1 + 2`, `3 * 4`) in the AST.
///
/// Rendering and dropping walk the tree with a heap stack, so a chain of
/// any length is safe to print and free.
#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
    fn take_children(&mut self) -> Vec<ExprWrapper> {
        let left_leaf = leaf(*self.left.get_span());
        let right_leaf = leaf(*self.right.get_span());

        vec![
            mem::replace(&mut self.left, left_leaf),
            mem::replace(&mut self.right, right_leaf),
        ]
    }
}

fn leaf(span: Span) -> ExprWrapper {
    ExprWrapper::new(NumberExpr { value: 0, span })
}

impl Drop for BinaryExpr {
    fn drop(&mut self) {
        if self.left.get_expr_type() == ExprType::Number && self.right.get_expr_type() == ExprType::Number {
            return;
        }

        let mut pending = self.take_children();
        while let Some(mut expr) = pending.pop() {
            if expr.get_expr_type() == ExprType::Binary {
                pending.extend(expr.take_children());
            }
        }
    }
}

enum Piece<'e> {
    Expr(&'e dyn Expr),
    Text(&'e str),
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Expr(self as &dyn Expr)];

        while let Some(piece) = pending.pop() {
            let expr = match piece {
                Piece::Text(text) => {
                    f.write_str(text)?;
                    continue;
                }
                Piece::Expr(expr) => expr,
            };

            match expr.as_any().downcast_ref::<BinaryExpr>() {
                Some(binary) => {
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Expr(&binary.right));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Text(&binary.operator.value));
                    pending.push(Piece::Text(" "));
                    pending.push(Piece::Expr(&binary.left));
                    pending.push(Piece::Text("("));
                }
                None => Display::fmt(expr, f)?,
            }
        }

        Ok(())
    }
}

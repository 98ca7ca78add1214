use std::{
    any::Any,
    fmt::{Debug, Display},
    ops::Deref,
};

use crate::Span;

/// Expression Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum ExprType {
    Number,
    Binary,
}

/// Expression Trait
///
/// Defines the behavior of all expression types in the AST. `Display`
/// renders the expression fully parenthesized, e.g. `((1 + 2) * 3)`.
pub trait Expr: Debug + Display {
    /// Returns the type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
    /// Moves the child expressions out, leaving leaves in their place.
    /// Used to tear down deep trees without recursion.
    fn take_children(&mut self) -> Vec<ExprWrapper> {
        vec![]
    }
}

/// Expression Wrapper
///
/// Owns exactly one expression node; children of a node are owned the
/// same way, so a parsed expression is always a strict tree.
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expr: T) -> Self {
        ExprWrapper(Box::new(expr))
    }

    /// Returns the inner expression as `T`, if it is one.
    pub fn downcast_ref<T: Expr + 'static>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.0.clone_wrapper()
    }
}

impl Display for ExprWrapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
    fn take_children(&mut self) -> Vec<ExprWrapper> {
        self.0.take_children()
    }
}

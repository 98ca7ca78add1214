use std::collections::HashMap;

use crate::{ast::ast::ExprWrapper, errors::errors::Error, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// How strongly an operator holds on to its operands. Higher binds tighter.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub struct BindingPower(pub i32);

impl BindingPower {
    /// Floor value, also used for every kind without an entry.
    pub const LOWEST: BindingPower = BindingPower(0);
    pub const ADDITIVE: BindingPower = BindingPower(10);
    pub const MULTIPLICATIVE: BindingPower = BindingPower(30);

    /// One step weaker than `self`.
    pub fn loosened(self) -> BindingPower {
        BindingPower(self.0 - 1)
    }
}

/// Grouping of a chain of operators sharing one binding power.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a - b - c` is `a - (b - c)`
    Right,
}

pub type NUDHandler = fn(&mut Parser<'_>) -> Result<ExprWrapper, Error>;
pub type LEDHandler = fn(&mut Parser<'_>, ExprWrapper, BindingPower) -> Result<ExprWrapper, Error>;

pub fn create_token_lookups(parser: &mut Parser<'_>) {
    // Additive and multiplicative
    parser.led(TokenKind::Plus, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::ADDITIVE, Associativity::Left, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::MULTIPLICATIVE, Associativity::Left, parse_binary_expr);

    // Literals
    parser.nud(TokenKind::Number, parse_primary_expr);
}

// Lookup tables inside parser struct, so it's easier
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
pub type AssociativityLookup = HashMap<TokenKind, Associativity>;

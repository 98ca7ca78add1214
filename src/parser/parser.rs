//! Parser implementation for building the expression tree.
//!
//! This module contains the main Parser struct. It maintains lookup
//! tables for:
//! - NUD (null denotation) handlers for prefix positions
//! - LED (left denotation) handlers for infix operators
//! - Binding powers and associativity of the infix operators

use std::{collections::HashMap, mem};

use log::trace;

use crate::{
    ast::ast::ExprWrapper,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position, Span, MK_TOKEN,
};

use super::{
    expr::parse_expr,
    lookups::{
        create_token_lookups, Associativity, AssociativityLookup, BPLookup, BindingPower,
        LEDHandler, LEDLookup, NUDHandler, NUDLookup,
    },
};

/// The main parser structure that maintains parsing state.
///
/// `current` and `peek` always hold the next two unconsumed tokens;
/// [`Parser::advance`] shifts `peek` into `current` and pulls a fresh
/// token from the lexer. The lookup tables are filled in by
/// [`Parser::new`] and only read afterwards.
pub struct Parser<'a> {
    /// Token source, read one token at a time
    lexer: Lexer<'a>,
    /// The token being parsed
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Lookup table for null denotation (prefix) handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding powers (precedence)
    binding_power_lookup: BPLookup,
    /// Lookup table for operator associativity
    associativity_lookup: AssociativityLookup,
}

impl<'a> Parser<'a> {
    /// Creates a new Parser reading from `lexer`, with `current` and
    /// `peek` already loaded.
    pub fn new(lexer: Lexer<'a>) -> Self {
        let start = lexer.get_position();
        let empty = MK_TOKEN!(TokenKind::EOF, String::new(), Span { start, end: start });

        let mut parser = Parser {
            lexer,
            current: empty.clone(),
            peek: empty,
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            associativity_lookup: HashMap::new(),
        };

        parser.advance();
        parser.advance();
        create_token_lookups(&mut parser);

        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    /// Returns the lookahead token.
    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    /// Shifts `peek` into `current`, reads a new `peek` and returns the
    /// token that was current.
    pub fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        let peek = mem::replace(&mut self.peek, next);
        let previous = mem::replace(&mut self.current, peek);

        trace!("advanced: current {}, peek {}", self.current, self.peek);
        previous
    }

    /// Binding power of `kind`, or [`BindingPower::LOWEST`] if it has none.
    pub fn binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::LOWEST)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    pub fn associativity(&self, kind: TokenKind) -> Option<Associativity> {
        self.associativity_lookup.get(&kind).copied()
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for a token.
    pub(super) fn led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        associativity: Associativity,
        led_fn: LEDHandler,
    ) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.associativity_lookup.insert(kind, associativity);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    pub(super) fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Parses the rest of the input as a single expression.
    ///
    /// Fails if the input does not start with a number, if an operator is
    /// missing its right operand, or if anything other than end of input
    /// follows the expression. Inputs longer than [`MAX_INPUT_LEN`] are
    /// rejected up front.
    pub fn parse_expression(&mut self) -> Result<ExprWrapper, Error> {
        check_input_len(self.lexer.source_len())?;

        let expr = parse_expr(self, BindingPower::LOWEST)?;

        match self.peek.kind {
            TokenKind::EOF => Ok(expr),
            TokenKind::Illegal => Err(Error::new(
                ErrorImpl::IllegalCharacter {
                    token: self.peek.value.clone(),
                },
                self.peek.span.start,
            )),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.peek.value.clone(),
                },
                self.peek.span.start,
            )),
        }
    }
}

/// Largest input whose byte offsets all fit in a [`Position`].
pub const MAX_INPUT_LEN: usize = u32::MAX as usize;

pub(super) fn check_input_len(len: usize) -> Result<(), Error> {
    if len > MAX_INPUT_LEN {
        return Err(Error::new(ErrorImpl::InputTooLarge { len }, Position(u32::MAX)));
    }

    Ok(())
}

/// Parses `source` into an expression tree.
///
/// This is the main entry point: it wires a lexer to a fresh parser and
/// parses the whole input.
pub fn parse(source: &str) -> Result<ExprWrapper, Error> {
    let mut parser = Parser::new(Lexer::new(source));
    parser.parse_expression()
}

use std::iter::FusedIterator;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind};

/// Consumes the `usize` bytes a pattern matched. `None` means the match
/// produced no token (whitespace) and scanning should continue.
pub type PatternHandler = fn(&mut Lexer<'_>, usize) -> Option<Token>;

pub struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Every pattern is anchored, so a match always starts at the scan offset.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        Pattern { regex: Regex::new("^[0-9]+").unwrap(), handler: number_handler },
        Pattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        Pattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        Pattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
    ];
}

/// Pull-based scanner over a borrowed input.
///
/// Each call to [`Lexer::next_token`] consumes exactly one token. Once the
/// input is exhausted every further call returns the EOF token.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, pos: 0 }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Position of the scan offset. Offsets past `u32::MAX` saturate;
    /// [`crate::parser::parser::Parser::parse_expression`] rejects such
    /// inputs before parsing.
    pub fn get_position(&self) -> Position {
        Position(u32::try_from(self.pos).unwrap_or(u32::MAX))
    }

    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The byte at the scan offset, if any.
    pub(crate) fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    pub(crate) fn remainder(&self) -> &'a str {
        let source = self.source;
        &source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token {
        loop {
            if self.at_eof() {
                let end = self.get_position();
                return MK_TOKEN!(TokenKind::EOF, String::new(), Span { start: end, end });
            }

            if let Some(token) = self.scan() {
                trace!("scanned {} at {}", token, token.span.start.0);
                return token;
            }
        }
    }

    fn scan(&mut self) -> Option<Token> {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(matched) = pattern.regex.find(remaining) {
                return (pattern.handler)(self, matched.end());
            }
        }

        illegal_handler(self)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to, but not including, EOF.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer<'_> {}

fn skip_handler(lexer: &mut Lexer<'_>, len: usize) -> Option<Token> {
    lexer.advance_n(len);
    None
}

fn number_handler(lexer: &mut Lexer<'_>, len: usize) -> Option<Token> {
    let start = lexer.get_position();
    let matched = lexer.remainder()[..len].to_string();
    lexer.advance_n(len);

    Some(MK_TOKEN!(TokenKind::Number, matched, Span { start, end: lexer.get_position() }))
}

// Consumes a whole character so multi-byte input never splits.
fn illegal_handler(lexer: &mut Lexer<'_>) -> Option<Token> {
    let c = lexer.remainder().chars().next()?;
    let start = lexer.get_position();
    lexer.advance_n(c.len_utf8());

    Some(MK_TOKEN!(TokenKind::Illegal, format!("'{}'", c), Span { start, end: lexer.get_position() }))
}

/// Scans all of `source`, ending with the EOF token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is_eof();
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}

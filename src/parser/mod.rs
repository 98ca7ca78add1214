//! Parser module for building the expression tree.
//!
//! A Pratt parser: each token kind maps to an optional NUD (null
//! denotation, prefix) handler, an optional LED (left denotation, infix)
//! handler and a binding power. `*` binds tighter than `+` and `-`, and
//! operators of equal binding power group to the left.
//!
//! The parser pulls tokens from the lexer on demand, keeping exactly two
//! of them buffered: the current token and one token of lookahead.

pub mod expr;
pub mod lookups;
pub mod parser;

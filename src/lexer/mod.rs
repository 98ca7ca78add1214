//! Lexical analysis.
//!
//! Converts an input string into tokens one at a time:
//!
//! - Whitespace (space, tab, carriage return, newline) is skipped
//! - `+`, `-` and `*` become operator tokens
//! - A run of decimal digits becomes a single number token
//! - Anything else becomes an illegal token and scanning carries on

pub mod lexer;
pub mod tokens;

//! Utility macros for the scanner.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a pattern handler for single-character operators
//!
//! These macros keep the pattern table in the lexer readable.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's literal text
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a pattern handler for a fixed operator.
///
/// The generated handler emits a token of the given kind whose literal is
/// `$value`, and advances the lexer past it.
///
/// # Example
///
/// ```ignore
/// Pattern {
///     regex: Regex::new("^\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _len: usize| -> Option<Token> {
            let start = lexer.get_position();
            lexer.advance_n($value.len());
            Some(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start,
                    end: lexer.get_position(),
                }
            ))
        }
    };
}

use log::debug;

use crate::{
    ast::{
        ast::{Expr, ExprWrapper},
        expressions::{BinaryExpr, NumberExpr},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{
    lookups::{Associativity, BindingPower},
    parser::Parser,
};

/// Parses one expression, continuing for as long as the next operator
/// binds tighter than `bp`.
///
/// On return `current` is the last token of the expression.
pub fn parse_expr(parser: &mut Parser<'_>, bp: BindingPower) -> Result<ExprWrapper, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(missing_prefix_error(parser));
    };

    let mut left = nud(parser)?;
    let mut bp = bp;

    // A right-associative operator at our own level must nest inside us.
    let peek_kind = parser.peek_token().kind;
    if bp == parser.peek_binding_power() && parser.associativity(peek_kind) == Some(Associativity::Right) {
        bp = bp.loosened();
    }

    // While LED and current BP is less than BP of the next token, continue parsing lhs
    while bp < parser.peek_binding_power() {
        let token_kind = parser.peek_token().kind;
        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken { token: parser.peek_token().value.clone() },
                parser.peek_token().span.start,
            ));
        };

        let operator_bp = parser.binding_power(token_kind);
        debug!("{} binds at {:?} over threshold {:?}", token_kind, operator_bp, bp);

        parser.advance();
        left = led(parser, left, operator_bp)?;
    }

    Ok(left)
}

fn missing_prefix_error(parser: &Parser<'_>) -> Error {
    let token = parser.current_token();

    let error = match token.kind {
        TokenKind::Illegal => ErrorImpl::IllegalCharacter { token: token.value.clone() },
        kind => ErrorImpl::MissingPrefixHandler { kind, token: token.value.clone() },
    };

    Error::new(error, token.span.start)
}

pub fn parse_primary_expr(parser: &mut Parser<'_>) -> Result<ExprWrapper, Error> {
    let token = parser.current_token();

    match token.kind {
        TokenKind::Number => match token.value.parse::<i64>() {
            Ok(value) => Ok(ExprWrapper::new(NumberExpr { value, span: token.span })),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value.clone() },
                token.span.start,
            )),
        },
        _ => Err(missing_prefix_error(parser)),
    }
}

pub fn parse_binary_expr(parser: &mut Parser<'_>, left: ExprWrapper, bp: BindingPower) -> Result<ExprWrapper, Error> {
    let operator_token = parser.advance();

    let right = parse_expr(parser, bp)?;

    Ok(ExprWrapper::new(BinaryExpr {
        span: Span {
            start: left.get_span().start,
            end: right.get_span().end,
        },
        left,
        operator: operator_token,
        right,
    }))
}

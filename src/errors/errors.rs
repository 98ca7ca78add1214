use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at position {}", .position.0)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::MissingPrefixHandler { .. } => "MissingPrefixHandler",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::InputTooLarge { .. } => "InputTooLarge",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { token } => ErrorTip::Suggestion(format!(
                "Illegal character {}, only digits, `+`, `-` and `*` are allowed",
                token
            )),
            ErrorImpl::MissingPrefixHandler { kind: TokenKind::EOF, .. } => {
                ErrorTip::Suggestion(String::from("Input ended where a number was expected"))
            }
            ErrorImpl::MissingPrefixHandler { token, .. } => {
                ErrorTip::Suggestion(format!("Expected a number, found `{}`", token))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken { .. } => ErrorTip::None,
            ErrorImpl::InputTooLarge { len } => ErrorTip::Suggestion(format!(
                "Input is {} bytes, at most {} are supported",
                len,
                u32::MAX
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character {token}")]
    IllegalCharacter { token: String },
    #[error("no prefix handler for token kind {kind}: {token:?}")]
    MissingPrefixHandler { kind: TokenKind, token: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token after expression: {token:?}")]
    UnexpectedToken { token: String },
    #[error("input of {len} bytes is too large")]
    InputTooLarge { len: usize },
}

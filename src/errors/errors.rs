use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// Failure of a lexing or parsing call, anchored at a source position.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input contains a span that matches no lexical rule.
    Lex,
    /// The token stream does not match the grammar.
    Parse,
    /// The source stream could not be read.
    Io,
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::UnterminatedString
            | ErrorImpl::InvalidEscape { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Parse,
            ErrorImpl::Io { .. } => ErrorKind::Io,
        }
    }

    /// Whether an ordered choice may try its next alternative after this
    /// error. Only a token mismatch can be backtracked over.
    pub fn is_recoverable(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::UnexpectedToken { .. })
    }

    /// The expected token set of a parse error, empty for every other kind.
    pub fn expected(&self) -> &[String] {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { expected, .. } => expected,
            _ => &[],
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidEscape { .. } => "InvalidEscape",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literal is never closed, did you forget a quote?",
            )),
            ErrorImpl::InvalidEscape { sequence } => ErrorTip::Suggestion(format!(
                "Unknown escape sequence `{}` in string literal",
                sequence
            )),
            ErrorImpl::UnexpectedToken { expected, found } => match expected.as_slice() {
                [] => ErrorTip::Suggestion(format!("Unexpected token: `{}`", found)),
                [single] => ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected {}",
                    found, single
                )),
                _ => ErrorTip::Suggestion(format!(
                    "Unexpected token: `{}`, expected one of {}",
                    found,
                    expected.join(", ")
                )),
            },
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the float limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Nesting is limited to {} levels, try splitting the expression",
                limit
            )),
            ErrorImpl::Io { .. } => ErrorTip::None,
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid escape sequence: {sequence:?}")]
    InvalidEscape { sequence: String },
    #[error("unexpected token {found:?} (expected {})", expected.join(" or "))]
    UnexpectedToken { expected: Vec<String>, found: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
    #[error("failed to read source: {message}")]
    Io { message: String },
}

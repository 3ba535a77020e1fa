//! The single error type surfaced by the formatter engine.

use std::borrow::Cow;

/// A failure produced by the formatter engine, carrying the symbol offset
/// at which it was detected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at offset {offset}: {message}")]
pub struct JsonError {
    pub kind: JsonErrorKind,
    pub offset: usize,
    pub message: Cow<'static, str>,
}

impl JsonError {
    pub fn new(kind: JsonErrorKind, offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        JsonError {
            kind,
            offset,
            message: message.into(),
        }
    }

    pub fn unexpected_token(offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(JsonErrorKind::UnexpectedToken, offset, message)
    }

    pub fn unexpected_end(offset: usize) -> Self {
        Self::new(JsonErrorKind::UnexpectedEnd, offset, "input ended before value was complete")
    }

    pub fn invalid_literal(offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(JsonErrorKind::InvalidLiteral, offset, message)
    }

    pub fn out_of_range(offset: usize, message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(JsonErrorKind::OutOfRange, offset, message)
    }
}

/// The kind of failure. See `spec` §7 for the full contract each variant
/// implements.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonErrorKind {
    #[error("unexpected token")]
    UnexpectedToken,
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("invalid literal")]
    InvalidLiteral,
    #[error("invalid enum name")]
    InvalidEnumName,
    #[error("invalid enum value")]
    InvalidEnumValue,
    #[error("nesting limit exceeded")]
    NestingExceeded,
    #[error("value out of range")]
    OutOfRange,
    #[error("operation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, JsonError>;

/// The error type surfaced by the async façade (`async` feature): either
/// the codec failed on a value already fully in memory, or the
/// underlying `AsyncRead`/`AsyncWrite` did.
#[cfg(feature = "async")]
#[derive(thiserror::Error, Debug)]
pub enum FacadeError {
    #[error(transparent)]
    Codec(#[from] JsonError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

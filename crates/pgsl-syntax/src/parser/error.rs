//! Parse error types.

use alloc::string::{String, ToString};

/// Syntax error with the byte position it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Parse error at position {position}: {message}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

pub type ParseResult<T> = Result<T, ParseError>;

pub(crate) fn parse_error(original_input: &str, remaining_input: &str, message: &str) -> ParseError {
    ParseError {
        message: message.to_string(),
        position: original_input.len() - remaining_input.len(),
    }
}

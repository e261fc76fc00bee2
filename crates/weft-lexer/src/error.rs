//! Lexical errors.
//! 词法错误。

use thiserror::Error;

/// A problem found while tokenizing. Errors are collected, not fatal.
/// 词法分析期间发现的问题。错误会被收集，而非致命。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string starting at offset {offset}")]
    UnterminatedString { offset: usize },
}

impl LexError {
    /// Byte offset where the problem starts.
    pub fn offset(&self) -> usize {
        match self {
            LexError::UnexpectedChar { offset, .. } | LexError::UnterminatedString { offset } => {
                *offset
            }
        }
    }
}

//! Lexer configuration.

use serde::{Deserialize, Serialize};

/// Lexer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Emit whitespace tokens instead of skipping them.
    pub keep_whitespace: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keep_whitespace: true,
        }
    }
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit or skip whitespace tokens.
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }
}

//! Interning lexer for Weft.
//! Weft 驻留词法分析器。
//!
//! This crate splits source text into tokens whose text is interned through a
//! [`weft_intern::CharTable`], so equal tokens share one allocation.
//! 本 crate 将源文本切分为 token，并通过 [`weft_intern::CharTable`] 驻留其文本，
//! 使相同的 token 共享同一分配。

mod config;
mod error;
mod lexer;
mod token;

pub use config::LexerConfig;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{EXTRA_OPERATORS, KEYWORDS, Token, TokenKind, is_keyword};

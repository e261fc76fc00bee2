//! Token definitions for the interning lexer.

use std::ops::Range;
use weft_intern::Fragment;

/// A token with its kind, interned text, and byte range in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: Fragment,
    pub range: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: Fragment, range: Range<usize>) -> Self {
        Self { kind, text, range }
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A run of whitespace, newlines included.
    Whitespace,
    Ident,
    Keyword,
    Number,
    /// A quoted literal, quotes included.
    Str,
    Operator,
    /// Grouping and separator punctuation: `( ) { } [ ] ; ,`
    Delimiter,
    /// Markup or template delimiters such as `<!--` or `${`.
    Markup,

    // Special
    Eof,
    Error,
}

impl TokenKind {
    /// Returns true for tokens that carry no syntax.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// Keywords recognized by the lexer. These are registered in the static
/// intern table the first time a lexer is created.
/// 词法分析器识别的关键字。首次创建词法分析器时注册到静态驻留表。
pub const KEYWORDS: &[&str] = &[
    "as", "break", "case", "class", "const", "continue", "default", "do", "else", "enum",
    "extends", "false", "fn", "for", "if", "impl", "import", "in", "interface", "let",
    "match", "new", "null", "package", "pub", "return", "static", "struct", "super",
    "switch", "this", "trait", "true", "type", "var", "void", "while",
];

/// Operators beyond the built-in intern catalog.
pub const EXTRA_OPERATORS: &[&str] = &[">=", ">>", ">>=", "->", "=>", "::"];

/// Returns true if `text` is a keyword.
pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

//! The built-in catalog of well-known fragments.
//! 内置的常用片段目录。
//!
//! These are seeded into the static table before its first use.
//! 这些片段会在静态表首次使用前预先载入。

/// Operators and punctuation common to C-family languages.
pub const OPERATORS: &[&str] = &[
    // Comparison and increment
    "==", "!=", "||", "++", "--",
    "<", "<=", "<<=", "<<", ">", "&", "&&",
    // Compound assignment
    "+=", "-=", "*=", "/=", "&=", "|=", "^=", "%=",
    // Punctuation
    "(", ")", "{", "}", "[", "]", ";", ",", "...", ".",
    // Single-character operators
    "=", "!", "~", "?", ":", "+", "-", "*", "/", "|", "^", "%", "@",
];

/// Delimiters of embedded markup and templating syntaxes.
pub const MARKUP_DELIMITERS: &[&str] = &[
    // Tags and quotes
    "<", ">", "</", "/>", "\"", "'",
    // Declarations
    "<![CDATA[", "]]>", "<!--", "-->", "<!DOCTYPE", "SYSTEM", "PUBLIC", "<?", "?>",
    // Server pages and expression language
    "<%", "%>", "<%=", "<%@", "${",
];

/// Longest run of spaces seeded.
pub const MAX_SPACE_RUN: usize = 15;

/// Deepest indentation (in spaces) seeded after a newline.
pub const MAX_NEWLINE_INDENT: usize = 16;

/// Runs of one to [`MAX_SPACE_RUN`] spaces, then a newline followed by
/// zero to [`MAX_NEWLINE_INDENT`] spaces in steps of two.
/// 一到 [`MAX_SPACE_RUN`] 个空格，然后是换行符加零到 [`MAX_NEWLINE_INDENT`] 个空格（步长为二）。
pub fn whitespace_ladder() -> impl Iterator<Item = String> {
    let spaces = (1..=MAX_SPACE_RUN).map(|n| " ".repeat(n));
    let indents = (0..=MAX_NEWLINE_INDENT)
        .step_by(2)
        .map(|n| format!("\n{}", " ".repeat(n)));
    spaces.chain(indents)
}

/// Every built-in fragment, including the empty string.
pub fn builtin() -> impl Iterator<Item = String> {
    OPERATORS
        .iter()
        .map(|s| s.to_string())
        .chain(whitespace_ladder())
        .chain(MARKUP_DELIMITERS.iter().map(|s| s.to_string()))
        .chain(std::iter::once(String::new()))
}

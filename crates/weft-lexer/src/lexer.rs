//! The interning lexer.
//! 驻留词法分析器。

use crate::config::LexerConfig;
use crate::error::LexError;
use crate::token::{EXTRA_OPERATORS, KEYWORDS, Token, TokenKind, is_keyword};
use std::sync::{LazyLock, Once};
use weft_intern::{CharTable, Fragment, StaticTable, catalog};

static REGISTER_SEEDS: Once = Once::new();

/// Grouping and separator punctuation.
const DELIMITERS: &[&str] = &["(", ")", "{", "}", "[", "]", ";", ","];

/// Every symbol the lexer matches, longest first.
/// 词法分析器匹配的所有符号，最长的在前。
static SYMBOLS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut symbols: Vec<&'static str> = catalog::OPERATORS
        .iter()
        .chain(catalog::MARKUP_DELIMITERS)
        .chain(EXTRA_OPERATORS)
        .copied()
        .filter(|s| s.starts_with(|c: char| !c.is_alphanumeric() && c != '"' && c != '\''))
        .collect();
    symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    symbols.dedup();
    symbols
});

/// Inject the lexer's well-known words into the static intern table.
fn register_seeds() {
    REGISTER_SEEDS.call_once(|| {
        StaticTable::global().register_all(KEYWORDS.iter().chain(EXTRA_OPERATORS));
    });
}

/// The interning lexer.
/// 驻留词法分析器。
///
/// Converts source text into tokens whose text is interned through a
/// [`CharTable`]. Tokens never borrow from the source.
/// 将源文本转换为 token，其文本通过 [`CharTable`] 驻留。token 从不借用源文本。
pub struct Lexer<'src> {
    /// Source text being tokenized
    /// 正在分析的源文本
    source: &'src Fragment,
    /// Table that interns token text
    /// 驻留 token 文本的表
    table: &'src CharTable,
    config: LexerConfig,
    /// Character iterator with position info
    /// 带位置信息的字符迭代器
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current position in source
    /// 当前在源码中的位置
    pos: usize,
    /// Collected errors
    /// 收集的错误
    errors: Vec<LexError>,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer with the default configuration.
    /// 使用默认配置创建新的词法分析器。
    pub fn new(source: &'src Fragment, table: &'src CharTable) -> Self {
        Self::with_config(source, table, LexerConfig::default())
    }

    pub fn with_config(source: &'src Fragment, table: &'src CharTable, config: LexerConfig) -> Self {
        register_seeds();
        Self {
            source,
            table,
            config,
            chars: source.as_str().char_indices().peekable(),
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source and return tokens and errors.
    /// 对整个源代码进行词法分析，返回 token 列表和错误。
    pub fn tokenize(mut self) -> (Vec<Token>, Vec<LexError>) {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            interned = self.table.instance_len(),
            "tokenized source"
        );
        (tokens, self.errors)
    }

    /// Get the next token.
    /// 获取下一个 token。
    fn next_token(&mut self) -> Token {
        loop {
            let start = self.pos;

            // Check for end of file - 检查是否到达文件末尾
            let Some((_, ch)) = self.advance() else {
                return self.token(TokenKind::Eof, start);
            };

            let kind = match ch {
                // Whitespace runs - 空白字符序列
                c if c.is_whitespace() => {
                    self.eat_while(char::is_whitespace);
                    if !self.config.keep_whitespace {
                        continue;
                    }
                    TokenKind::Whitespace
                }

                // Quoted literals - 引号字面量
                '"' | '\'' => self.string_literal(ch, start),

                // Numbers - 数字
                c if c.is_ascii_digit() => self.number(),

                // Identifiers and keywords - 标识符和关键字
                c if c.is_alphabetic() || c == '_' => {
                    self.eat_while(|c| c.is_alphanumeric() || c == '_');
                    if is_keyword(&self.source[start..self.pos]) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Ident
                    }
                }

                _ => self.symbol(ch, start),
            };

            return self.token(kind, start);
        }
    }

    /// Build a token spanning `start..self.pos` with interned text.
    fn token(&self, kind: TokenKind, start: usize) -> Token {
        let range = start..self.pos;
        let text = self.table.intern_range(self.source, range.clone());
        Token::new(kind, text, range)
    }

    /// Advance to the next character.
    /// 前进到下一个字符。
    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.pos = pos + ch.len_utf8();
        }
        result
    }

    /// Peek at the next character without consuming it.
    /// 查看下一个字符但不消耗它。
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, ch)| *ch)
    }

    /// Peek at the nth character ahead.
    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.clone().nth(n).map(|(_, ch)| ch)
    }

    fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if pred(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Scan a quoted literal; the opening quote is already consumed.
    /// 扫描引号字面量；开头的引号已被消耗。
    fn string_literal(&mut self, quote: char, start: usize) -> TokenKind {
        loop {
            match self.advance() {
                Some((_, ch)) if ch == quote => return TokenKind::Str,
                Some((_, '\\')) => {
                    self.advance();
                }
                Some(_) => {}
                None => {
                    self.errors.push(LexError::UnterminatedString { offset: start });
                    return TokenKind::Error;
                }
            }
        }
    }

    /// Scan a number; the first digit is already consumed.
    fn number(&mut self) -> TokenKind {
        self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');

        // Decimal part, but not `1..2` or `1.foo`
        // 小数部分，但不是 `1..2` 或 `1.foo`
        if self.peek_char() == Some('.') && self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            self.eat_while(|c| c.is_ascii_alphanumeric() || c == '_');
        }

        TokenKind::Number
    }

    /// Longest-match a symbol; its first char is already consumed.
    /// 最长匹配一个符号；其首字符已被消耗。
    fn symbol(&mut self, first: char, start: usize) -> TokenKind {
        let rest = &self.source[start..];
        let Some(symbol) = SYMBOLS.iter().copied().find(|s| rest.starts_with(s)) else {
            self.errors.push(LexError::UnexpectedChar {
                ch: first,
                offset: start,
            });
            return TokenKind::Error;
        };

        let end = start + symbol.len();
        while self.pos < end {
            self.advance();
        }

        if DELIMITERS.contains(&symbol) {
            TokenKind::Delimiter
        } else if catalog::OPERATORS.contains(&symbol) || EXTRA_OPERATORS.contains(&symbol) {
            TokenKind::Operator
        } else {
            TokenKind::Markup
        }
    }
}

//! Lexer for tag markup.
//!
//! Converts input text into a sequence of tokens. Offsets count characters
//! (Unicode scalar values), not bytes.

use crate::error::MarkupError;

/// Characters of input shown on each side of a malformed-markup offset.
const CONTEXT_RADIUS: usize = 10;

/// The kind of a [`Token`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Plain text.
    Word,
    /// An opening tag: `<name>`.
    TagOpen,
    /// A closing tag: `</name>`.
    TagClose,
    /// End of the input. Always the last token.
    EndOfInput,
}

/// A token produced by the lexer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    value: Option<String>,
    offset: usize,
}

impl Token {
    fn new(kind: TokenKind, value: impl Into<String>, offset: usize) -> Self {
        Self {
            kind,
            value: Some(value.into()),
            offset,
        }
    }

    /// A plain text token.
    pub fn word(value: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::Word, value, offset)
    }

    /// An opening tag token.
    pub fn tag_open(name: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::TagOpen, name, offset)
    }

    /// A closing tag token.
    pub fn tag_close(name: impl Into<String>, offset: usize) -> Self {
        Self::new(TokenKind::TagClose, name, offset)
    }

    /// The end-of-input marker.
    pub fn end(offset: usize) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            value: None,
            offset,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Text for words, the tag name for tags, `None` at end of input.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Character offset where the token begins in the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

/// Lexer for tag markup.
///
/// The lexer holds no state between calls; every call to [`Lexer::lex`]
/// scans its input from scratch.
///
/// # Examples
///
/// ```
/// use tagstyle::parser::{Lexer, TokenKind};
///
/// let tokens = Lexer::new().lex("<b>Hello</b>").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![TokenKind::TagOpen, TokenKind::Word, TokenKind::TagClose, TokenKind::EndOfInput]
/// );
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Lexer;

impl Lexer {
    /// Create a new lexer.
    pub fn new() -> Self {
        Self
    }

    /// Split `input` into tokens, ending with exactly one `EndOfInput`.
    pub fn lex(&self, input: &str) -> Result<Vec<Token>, MarkupError> {
        Scanner::new(input).run()
    }
}

/// Scanning state for a single `lex` call.
struct Scanner {
    chars: Vec<char>,
    pos: usize,
    tokens: Vec<Token>,
    word: String,
    word_start: Option<usize>,
    tag_name: String,
    tag_start: usize,
    in_open_tag: bool,
    in_close_tag: bool,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            tokens: Vec::new(),
            word: String::new(),
            word_start: None,
            tag_name: String::new(),
            tag_start: 0,
            in_open_tag: false,
            in_close_tag: false,
        }
    }

    fn in_tag(&self) -> bool {
        self.in_open_tag || self.in_close_tag
    }

    /// Peek at the next character without consuming it.
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Advance by one character.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn run(mut self) -> Result<Vec<Token>, MarkupError> {
        while let Some(c) = self.advance() {
            let offset = self.pos - 1;
            match c {
                '<' => self.open_angle(offset)?,
                '>' if self.in_tag() => self.close_angle(),
                _ => self.push_char(c, offset),
            }
        }
        Ok(self.finish())
    }

    fn open_angle(&mut self, offset: usize) -> Result<(), MarkupError> {
        // `\<` is a literal `<`; the backslash is already buffered.
        if offset > 0 && self.chars[offset - 1] == '\\' {
            let buffer = if self.in_tag() {
                &mut self.tag_name
            } else {
                &mut self.word
            };
            buffer.pop();
            buffer.push('<');
            return Ok(());
        }

        if self.in_tag() {
            return Err(MarkupError::MalformedMarkup {
                offset,
                context: self.context(offset),
            });
        }

        self.flush_word();
        self.tag_start = offset;
        if self.peek() == Some('/') {
            self.advance();
            self.in_close_tag = true;
        } else {
            self.in_open_tag = true;
        }
        Ok(())
    }

    fn close_angle(&mut self) {
        let name = std::mem::take(&mut self.tag_name);
        let token = if self.in_open_tag {
            Token::tag_open(name, self.tag_start)
        } else {
            Token::tag_close(name, self.tag_start)
        };
        self.tokens.push(token);
        self.in_open_tag = false;
        self.in_close_tag = false;
    }

    fn push_char(&mut self, c: char, offset: usize) {
        if self.in_tag() {
            self.tag_name.push(c);
        } else {
            self.word_start.get_or_insert(offset);
            self.word.push(c);
        }
    }

    fn flush_word(&mut self) {
        if let Some(start) = self.word_start.take() {
            let word = std::mem::take(&mut self.word);
            self.tokens.push(Token::word(word, start));
        }
    }

    fn finish(mut self) -> Vec<Token> {
        // A tag still open at end of input was never a tag: keep it as text.
        if self.in_tag() {
            let marker = if self.in_close_tag { "</" } else { "<" };
            self.word = format!("{}{}", marker, self.tag_name);
            self.word_start = Some(self.tag_start);
        }
        self.flush_word();
        self.tokens.push(Token::end(self.chars.len()));
        self.tokens
    }

    fn context(&self, offset: usize) -> String {
        let start = offset.saturating_sub(CONTEXT_RADIUS);
        let end = (offset + CONTEXT_RADIUS + 1).min(self.chars.len());
        self.chars[start..end].iter().collect()
    }
}

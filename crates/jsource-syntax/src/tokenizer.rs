//! Splits source text into a flat, lossless token stream.
//!
//! Concatenating the text of every token reproduces the input exactly. Tokenizing never fails:
//! malformed input is left for the construct parsers to report.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Run of characters that are neither whitespace nor separators.
    Word,
    /// One of `{ } ( ) ; , = @`.
    Separator,
    /// A single `\n`.
    Newline,
    /// Run of spaces, tabs and `\r`.
    Whitespace,
    /// `// ...` up to (not including) the line break.
    LineComment,
    /// `/* ... */`, javadoc included. Unterminated comments run to the end of input.
    BlockComment,
    /// String, char or text block literal.
    Literal,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Whitespace or a line break.
    pub fn is_trivia(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::Newline)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.kind, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_separator(&self, separator: char) -> bool {
        self.kind == TokenKind::Separator && self.text.len() == 1 && self.text.starts_with(separator)
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text == word
    }

    /// `/** ... */`, excluding the empty comment `/**/`.
    pub fn is_javadoc(&self) -> bool {
        self.kind == TokenKind::BlockComment
            && self.text.starts_with("/**")
            && !self.text.starts_with("/**/")
    }
}

pub fn is_separator_char(c: char) -> bool {
    matches!(c, '{' | '}' | '(' | ')' | ';' | ',' | '=' | '@')
}

/// Tokenizes `text`. With `literal_aware`, string, char and text block literals become single
/// [`TokenKind::Literal`] tokens so that separators inside them are not structural.
pub fn tokenize(text: &str, literal_aware: bool) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(text, literal_aware).collect();
    tracing::trace!(
        target = "jsource.syntax",
        len = text.len(),
        tokens = tokens.len(),
        literal_aware,
        "tokenized"
    );
    tokens
}

struct Lexer<'a> {
    text: &'a str,
    pos: usize,
    literal_aware: bool,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str, literal_aware: bool) -> Self {
        Lexer {
            text,
            pos: 0,
            literal_aware,
        }
    }

    fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn bump_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn bump_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.peek_char() {
            if !pred(c) {
                break;
            }
            self.bump_char();
        }
    }

    fn at_comment_start(&self) -> bool {
        let rem = self.remaining();
        rem.starts_with("//") || rem.starts_with("/*")
    }

    fn at_literal_start(&self) -> bool {
        self.literal_aware && matches!(self.peek_char(), Some('"' | '\''))
    }

    fn lex_block_comment(&mut self) {
        self.pos += 2;
        match self.remaining().find("*/") {
            Some(end) => self.pos += end + 2,
            None => self.pos = self.text.len(),
        }
    }

    fn lex_text_block(&mut self) {
        self.pos += 3;
        loop {
            let rem = self.remaining();
            if rem.is_empty() {
                return;
            }
            if rem.starts_with("\\") {
                self.bump_char();
                self.bump_char();
                continue;
            }
            if rem.starts_with("\"\"\"") {
                self.pos += 3;
                return;
            }
            self.bump_char();
        }
    }

    /// Quoted literal on a single line. An unterminated literal stops before the line break.
    fn lex_quoted(&mut self, quote: char) {
        self.bump_char();
        while let Some(c) = self.peek_char() {
            match c {
                '\n' => return,
                '\\' => {
                    self.bump_char();
                    if self.peek_char().is_some_and(|next| next != '\n') {
                        self.bump_char();
                    }
                }
                c if c == quote => {
                    self.bump_char();
                    return;
                }
                _ => {
                    self.bump_char();
                }
            }
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        let start = self.pos;
        let ch = self.peek_char()?;

        let kind = match ch {
            '\n' => {
                self.bump_char();
                TokenKind::Newline
            }
            c if c.is_whitespace() => {
                self.bump_while(|c| c.is_whitespace() && c != '\n');
                TokenKind::Whitespace
            }
            '/' if self.remaining().starts_with("//") => {
                self.bump_while(|c| c != '\n');
                TokenKind::LineComment
            }
            '/' if self.remaining().starts_with("/*") => {
                self.lex_block_comment();
                TokenKind::BlockComment
            }
            c if is_separator_char(c) => {
                self.bump_char();
                TokenKind::Separator
            }
            '"' if self.literal_aware && self.remaining().starts_with("\"\"\"") => {
                self.lex_text_block();
                TokenKind::Literal
            }
            '"' | '\'' if self.literal_aware => {
                self.lex_quoted(ch);
                TokenKind::Literal
            }
            _ => {
                self.bump_char();
                while let Some(c) = self.peek_char() {
                    if c.is_whitespace()
                        || is_separator_char(c)
                        || self.at_comment_start()
                        || self.at_literal_start()
                    {
                        break;
                    }
                    self.bump_char();
                }
                TokenKind::Word
            }
        };

        Some(Token::new(kind, &self.text[start..self.pos]))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

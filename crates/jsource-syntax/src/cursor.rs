use std::sync::OnceLock;

use regex::Regex;

use crate::tokenizer::{Token, TokenKind};

/// A plain Java identifier: method, parameter and annotation parameter names.
pub(crate) fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][\w$]*$").expect("valid regex"))
}

/// Read position over a token slice.
#[derive(Debug, Clone)]
pub(crate) struct Cursor<'t> {
    tokens: &'t [Token],
    pos: usize,
}

impl<'t> Cursor<'t> {
    pub(crate) fn new(tokens: &'t [Token], pos: usize) -> Self {
        Cursor { tokens, pos }
    }

    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn tokens(&self) -> &'t [Token] {
        self.tokens
    }

    /// A cursor over the same tokens at `pos`.
    pub(crate) fn at(&self, pos: usize) -> Self {
        Cursor::new(self.tokens, pos)
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'t Token> {
        self.tokens.get(self.pos)
    }

    pub(crate) fn bump(&mut self) -> Option<&'t Token> {
        let token = self.tokens.get(self.pos)?;
        self.pos += 1;
        Some(token)
    }

    /// Skips whitespace and line breaks.
    pub(crate) fn skip_trivia(&mut self) {
        while self.peek().is_some_and(Token::is_trivia) {
            self.pos += 1;
        }
    }

    /// Skips whitespace, line breaks and comments.
    pub(crate) fn skip_trivia_and_comments(&mut self) {
        while self
            .peek()
            .is_some_and(|token| token.is_trivia() || token.is_comment())
        {
            self.pos += 1;
        }
    }

    /// Skips spaces and tabs only.
    pub(crate) fn skip_whitespace(&mut self) {
        while self
            .peek()
            .is_some_and(|token| token.kind == TokenKind::Whitespace)
        {
            self.pos += 1;
        }
    }

    pub(crate) fn at_separator(&self, separator: char) -> bool {
        self.peek().is_some_and(|token| token.is_separator(separator))
    }

    pub(crate) fn at_keyword(&self, keyword: &str) -> bool {
        self.peek().is_some_and(|token| token.is_word(keyword))
    }

    /// Consumes `separator` after optional trivia. Leaves the cursor untouched otherwise.
    pub(crate) fn eat_separator(&mut self, separator: char) -> bool {
        let mut lookahead = self.clone();
        lookahead.skip_trivia();
        if lookahead.at_separator(separator) {
            lookahead.pos += 1;
            *self = lookahead;
            true
        } else {
            false
        }
    }

    /// Consumes `keyword` after optional trivia. Leaves the cursor untouched otherwise.
    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        let mut lookahead = self.clone();
        lookahead.skip_trivia();
        if lookahead.at_keyword(keyword) {
            lookahead.pos += 1;
            *self = lookahead;
            true
        } else {
            false
        }
    }

    /// Collects the tokens up to the separator matching an already consumed `open`.
    ///
    /// On success the cursor sits after the closing separator. Returns `None` when the input
    /// ends first; the cursor is then at the end.
    pub(crate) fn balanced(&mut self, open: char, close: char) -> Option<&'t [Token]> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(token) = self.bump() {
            if token.is_separator(open) {
                depth += 1;
            } else if token.is_separator(close) {
                if depth == 0 {
                    return Some(&self.tokens[start..self.pos - 1]);
                }
                depth -= 1;
            }
        }
        None
    }
}

/// Joins token text, collapsing every whitespace/newline run into one space.
pub(crate) fn collapse(tokens: &[Token]) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for token in tokens {
        if token.is_trivia() {
            pending_space = !out.is_empty();
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push_str(&token.text);
    }
    out
}

/// Splits at top-level `,` separators. Nesting counts parentheses, braces and angle brackets
/// found inside words.
pub(crate) fn split_top_level_commas(tokens: &[Token]) -> Vec<&[Token]> {
    let mut parts = Vec::new();
    let mut depth: isize = 0;
    let mut angle: isize = 0;
    let mut start = 0;
    for (idx, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::Separator => match token.text.as_str() {
                "(" | "{" => depth += 1,
                ")" | "}" => depth -= 1,
                "," if depth <= 0 && angle <= 0 => {
                    parts.push(&tokens[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            },
            TokenKind::Word => angle += angle_delta(&token.text),
            _ => {}
        }
    }
    parts.push(&tokens[start..]);
    parts
}

/// Net `<` minus `>` in a word, ignoring `->`.
pub(crate) fn angle_delta(text: &str) -> isize {
    let text = text.replace("->", "");
    text.matches('<').count() as isize - text.matches('>').count() as isize
}

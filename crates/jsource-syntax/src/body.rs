use crate::javadoc::trim_blank_edges;
use crate::tokenizer::{Token, TokenKind};

struct Piece<'a> {
    kind: TokenKind,
    text: &'a str,
}

impl Piece<'_> {
    fn is_significant(&self) -> bool {
        !matches!(
            self.kind,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment
        ) && !self.text.trim().is_empty()
    }

    fn is_separator(&self, separator: &str) -> bool {
        self.kind == TokenKind::Separator && self.text == separator
    }
}

/// Rebuilds the lines of a `{ ... }` body from the tokens between the braces.
///
/// Each line is trimmed and re-indented with one tab per open brace: the depth drops before a
/// line whose first significant token is `}` and rises after a line whose last significant token
/// is `{`. Interior blank lines are kept as empty strings; blank lines at either end are dropped.
pub(crate) fn body_lines(tokens: &[Token]) -> Vec<String> {
    let mut raw_lines: Vec<Vec<Piece<'_>>> = vec![Vec::new()];
    for token in tokens {
        if token.kind == TokenKind::Newline {
            raw_lines.push(Vec::new());
            continue;
        }
        // Multi-line comments and text blocks continue on fresh lines.
        for (idx, part) in token.text.split('\n').enumerate() {
            if idx > 0 {
                raw_lines.push(Vec::new());
            }
            if let Some(line) = raw_lines.last_mut() {
                line.push(Piece {
                    kind: token.kind,
                    text: part,
                });
            }
        }
    }

    let mut depth = 0usize;
    let mut lines = Vec::with_capacity(raw_lines.len());
    for pieces in raw_lines {
        let text: String = pieces.iter().map(|piece| piece.text).collect();
        let text = text.trim();
        if text.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut significant = pieces.iter().filter(|piece| piece.is_significant());
        let opens_with_close = significant
            .next()
            .is_some_and(|piece| piece.is_separator("}"));
        let ends_with_open = pieces
            .iter()
            .rev()
            .find(|piece| piece.is_significant())
            .is_some_and(|piece| piece.is_separator("{"));

        if opens_with_close {
            depth = depth.saturating_sub(1);
        }
        lines.push(format!("{}{text}", "\t".repeat(depth)));
        if ends_with_open {
            depth += 1;
        }
    }
    trim_blank_edges(&mut lines);
    lines
}

use jsource_model::{MultiLineComment, SingleLineComment};

use crate::cursor::Cursor;
use crate::error::{ConstructKind, ParseError};
use crate::javadoc::trim_blank_edges;
use crate::tokenizer::{Token, TokenKind};
use crate::{ParseOptions, Parsed};

/// `// text`
pub fn parse_single_line(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<SingleLineComment>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    cursor.skip_trivia();
    let token = cursor.bump().filter(|token| token.kind == TokenKind::LineComment);
    let Some(token) = token else {
        return Err(ParseError::single(
            ConstructKind::SingleLineComment,
            "Expected comment to start with '//'!",
        ));
    };
    let node = single_line_from_token(token, options)?;
    Ok(Parsed::new(node, cursor.pos()))
}

/// `/* text */`, javadoc excluded.
pub fn parse_multi_line(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<MultiLineComment>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    cursor.skip_trivia();
    let token = cursor
        .bump()
        .filter(|token| token.kind == TokenKind::BlockComment && !token.is_javadoc());
    let Some(token) = token else {
        return Err(ParseError::single(
            ConstructKind::MultiLineComment,
            "Expected comment to start with '/*'!",
        ));
    };
    let node = multi_line_from_token(token, options)?;
    Ok(Parsed::new(node, cursor.pos()))
}

pub(crate) fn single_line_from_token(
    token: &Token,
    options: &ParseOptions,
) -> Result<SingleLineComment, ParseError> {
    let content = token.text.strip_prefix("//").unwrap_or(&token.text).trim();
    SingleLineComment::builder()
        .editable(options.editable)
        .content(content)
        .build()
        .map_err(|err| ParseError::from_validation(ConstructKind::SingleLineComment, err))
}

/// Lines are trimmed and lose a leading `*`; blank lines at either end are dropped.
pub(crate) fn multi_line_from_token(
    token: &Token,
    options: &ParseOptions,
) -> Result<MultiLineComment, ParseError> {
    let text = token.text.as_str();
    if text.len() < 4 || !text.ends_with("*/") {
        return Err(ParseError::single(
            ConstructKind::MultiLineComment,
            "Failed to find end of comment!",
        ));
    }

    let mut lines: Vec<String> = text[2..text.len() - 2]
        .split('\n')
        .map(|raw| {
            let line = raw.trim();
            line.strip_prefix('*').map(str::trim).unwrap_or(line).to_string()
        })
        .collect();
    trim_blank_edges(&mut lines);

    MultiLineComment::builder()
        .editable(options.editable)
        .content(lines)
        .build()
        .map_err(|err| ParseError::from_validation(ConstructKind::MultiLineComment, err))
}

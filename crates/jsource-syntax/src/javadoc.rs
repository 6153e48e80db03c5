use jsource_model::{Javadoc, JavadocBuilder};

use crate::cursor::Cursor;
use crate::error::{ConstructKind, ParseError};
use crate::tokenizer::Token;
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::Javadoc;

pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Javadoc>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    cursor.skip_trivia();
    let token = match cursor.peek() {
        Some(token) if token.is_javadoc() => token,
        _ => return Err(ParseError::single(KIND, "Expected javadoc to start with '/**'!")),
    };
    cursor.bump();
    let node = from_token(token, options)?;
    Ok(Parsed::new(node, cursor.pos()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Author,
    Version,
    Since,
    Param,
    Return,
    Throws,
}

struct Tag {
    section: Section,
    /// `@param`/`@throws` target.
    target: String,
    text: String,
}

/// Builds a javadoc from one block comment token.
///
/// Content lines come first; known tags (`@author`, `@version`, `@since`, `@param`, `@return`,
/// `@throws`/`@exception`) are lifted into their fields and may continue over several lines.
/// Unknown tags stay in the content.
pub(crate) fn from_token(token: &Token, options: &ParseOptions) -> Result<Javadoc, ParseError> {
    let text = token.text.as_str();
    if !text.starts_with("/**") {
        return Err(ParseError::single(KIND, "Expected javadoc to start with '/**'!"));
    }
    if text.len() < 5 || !text.ends_with("*/") {
        return Err(ParseError::single(KIND, "Failed to find end of javadoc!"));
    }

    let inner = &text[3..text.len() - 2];
    let single_line = !inner.contains('\n');

    let mut content: Vec<String> = Vec::new();
    let mut tags: Vec<Tag> = Vec::new();
    let mut in_tag = false;
    for raw in inner.split('\n') {
        let line = strip_star(raw);
        if let Some(tag) = line.strip_prefix('@').and_then(parse_tag) {
            tags.push(tag);
            in_tag = true;
            continue;
        }
        if line.starts_with('@') {
            in_tag = false;
        }
        match tags.last_mut() {
            Some(tag) if in_tag => {
                if !line.is_empty() {
                    if !tag.text.is_empty() {
                        tag.text.push(' ');
                    }
                    tag.text.push_str(line);
                }
            }
            _ => content.push(line.to_string()),
        }
    }
    trim_blank_edges(&mut content);

    let condensed = single_line && tags.is_empty() && content.len() <= 1;
    let mut builder = JavadocBuilder::default()
        .editable(options.editable)
        .condensed(condensed)
        .content(content);
    for tag in tags {
        builder = match tag.section {
            Section::Author => builder.author(tag.text),
            Section::Version => builder.version(tag.text),
            Section::Since => builder.since(tag.text),
            Section::Param => builder.param(tag.target, tag.text),
            Section::Return => builder.return_val(tag.text),
            Section::Throws => builder.throws(tag.target, tag.text),
        };
    }
    builder
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))
}

fn strip_star(raw: &str) -> &str {
    let line = raw.trim();
    match line.strip_prefix('*') {
        Some(rest) => rest.trim(),
        None => line,
    }
}

fn parse_tag(line: &str) -> Option<Tag> {
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let section = match name {
        "author" => Section::Author,
        "version" => Section::Version,
        "since" => Section::Since,
        "param" => Section::Param,
        "return" => Section::Return,
        "throws" | "exception" => Section::Throws,
        _ => return None,
    };

    let (target, text) = if matches!(section, Section::Param | Section::Throws) {
        match rest.split_once(char::is_whitespace) {
            Some((target, text)) => (target.to_string(), text.trim().to_string()),
            None => (rest.to_string(), String::new()),
        }
    } else {
        (String::new(), rest.to_string())
    };
    Some(Tag {
        section,
        target,
        text,
    })
}

pub(crate) fn trim_blank_edges(lines: &mut Vec<String>) {
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| line.is_empty()).count();
    lines.drain(..leading);
}

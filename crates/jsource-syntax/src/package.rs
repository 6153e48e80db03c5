use jsource_model::PackageDeclaration;

use crate::cursor::Cursor;
use crate::error::{check, ConstructKind, ParseError};
use crate::tokenizer::{Token, TokenKind};
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::PackageDeclaration;

/// `package a.b.c;`
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<PackageDeclaration>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    if !cursor.eat_keyword("package") {
        return Err(ParseError::single(KIND, "Expected 'package' keyword!"));
    }

    let mut messages = Vec::new();
    let name = dotted_name(&mut cursor);
    if name.is_empty() {
        messages.push("Failed to find package name!".to_string());
    }
    if !cursor.eat_separator(';') {
        messages.push("Failed to find ';' after package declaration!".to_string());
    }
    check(KIND, messages)?;

    let node = PackageDeclaration::builder()
        .editable(options.editable)
        .package_name(name)
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

/// Collects a dotted name, allowing whitespace and line breaks around the dots.
///
/// Two words only join when one of them carries the dot, so a missing `;` does not swallow the
/// next line.
pub(crate) fn dotted_name(cursor: &mut Cursor<'_>) -> String {
    let mut name = String::new();
    loop {
        let mut lookahead = cursor.clone();
        lookahead.skip_trivia();
        let Some(token) = lookahead.peek() else {
            break;
        };
        if token.kind != TokenKind::Word {
            break;
        }
        let joins = name.is_empty() || name.ends_with('.') || token.text.starts_with('.');
        if !joins {
            break;
        }
        name.push_str(&token.text);
        lookahead.bump();
        *cursor = lookahead;
    }
    name
}

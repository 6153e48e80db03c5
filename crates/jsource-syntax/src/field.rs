use std::sync::OnceLock;

use jsource_model::Field;
use regex::Regex;

use crate::cursor::{collapse, Cursor};
use crate::error::{check, ConstructKind, ParseError};
use crate::leading::{self, Leading};
use crate::modifiers::{self, Modifiers};
use crate::tokenizer::{Token, TokenKind};
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::Field;

fn field_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^(?P<type>.+?)\s+(?P<name>[A-Za-z_$][\w$]*)\s*(?:=\s*(?P<value>.+))?$")
            .expect("valid regex")
    })
}

/// `[javadoc] [annotations] [modifiers] Type name [= value];`
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Field>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    let leading = leading::collect(&mut cursor, KIND, options)?;
    let modifiers = modifiers::collect(&mut cursor);
    let problems = modifiers.problems.clone();
    let parsed = parse_declaration(cursor, leading, &modifiers, options)
        .map_err(|err| err.prepend(problems.clone()))?;
    check(KIND, problems)?;
    Ok(parsed)
}

/// Everything after the modifiers, up to and including the terminating `;`.
pub(crate) fn parse_declaration(
    mut cursor: Cursor<'_>,
    leading: Leading,
    modifiers: &Modifiers,
    options: &ParseOptions,
) -> Result<Parsed<Field>, ParseError> {
    let mut messages = Vec::new();
    if modifiers.is_abstract {
        messages.push("Fields cannot be abstract!".to_string());
    }

    let start = cursor.pos();
    let mut depth = 0isize;
    let mut terminated = false;
    while let Some(token) = cursor.bump() {
        if token.kind != TokenKind::Separator {
            continue;
        }
        match token.text.as_str() {
            "(" | "{" => depth += 1,
            ")" | "}" => depth -= 1,
            ";" if depth <= 0 => {
                terminated = true;
                break;
            }
            _ => {}
        }
    }
    let end = if terminated { cursor.pos() - 1 } else { cursor.pos() };
    let text_tokens: Vec<Token> = cursor.tokens()[start..end]
        .iter()
        .filter(|token| !token.is_comment())
        .cloned()
        .collect();
    let text = collapse(&text_tokens);

    if !terminated {
        messages.push("Failed to find ';' at end of field!".to_string());
    }
    let captures = field_re().captures(&text);
    if captures.is_none() {
        messages.push(format!(
            "Field does not match '[modifiers] type name [= value]': '{text}'"
        ));
    }
    let captures = match captures {
        Some(captures) if messages.is_empty() => captures,
        _ => return Err(ParseError::new(KIND, messages)),
    };

    let node = Field::builder()
        .editable(options.editable)
        .maybe_javadoc(leading.javadoc)
        .annotations(leading.annotations)
        .visibility(modifiers.visibility)
        .is_static(modifiers.is_static)
        .is_final(modifiers.is_final)
        .field_type(&captures["type"])
        .name(&captures["name"])
        .maybe_value(captures.name("value").map(|value| value.as_str().to_string()))
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

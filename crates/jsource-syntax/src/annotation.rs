use jsource_model::{Annotation, AnnotationParameter};

use crate::cursor::{collapse, identifier_re, split_top_level_commas, Cursor};
use crate::error::{check, ConstructKind, ParseError};
use crate::tokenizer::{Token, TokenKind};
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::Annotation;

/// `@Name`, `@Name(value)` or `@Name(a = x, b = y)`.
///
/// A bare value becomes the `value` parameter. A dotted name is also recorded as the
/// annotation's canonical name.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Annotation>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    if !cursor.eat_separator('@') {
        return Err(ParseError::single(KIND, "Expected annotation to start with '@'!"));
    }

    let mut messages = Vec::new();
    let name = match cursor.peek() {
        Some(token) if token.kind == TokenKind::Word => {
            cursor.bump();
            token.text.clone()
        }
        _ => {
            messages.push("Failed to find annotation name!".to_string());
            String::new()
        }
    };

    let mut parameters = Vec::new();
    let mut lookahead = cursor.clone();
    lookahead.skip_whitespace();
    if lookahead.at_separator('(') {
        lookahead.bump();
        let Some(inner) = lookahead.balanced('(', ')') else {
            messages.push("Didn't find end of parameters".to_string());
            return Err(ParseError::new(KIND, messages));
        };
        cursor = lookahead;
        parameters = parse_parameters(inner, &mut messages);
    }
    check(KIND, messages)?;

    let canonical_name = name.contains('.').then(|| name.clone());
    let mut builder = Annotation::builder()
        .editable(options.editable)
        .name(name)
        .parameters(parameters);
    if let Some(canonical_name) = canonical_name {
        builder = builder.canonical_name(canonical_name);
    }
    let node = builder
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

fn parse_parameters(inner: &[Token], messages: &mut Vec<String>) -> Vec<AnnotationParameter> {
    if inner.iter().all(|token| token.is_trivia()) {
        return Vec::new();
    }

    let mut parameters = Vec::new();
    for (idx, part) in split_top_level_commas(inner).into_iter().enumerate() {
        let assignment = top_level_assignment(part);
        let parsed = match assignment {
            Some(eq) => {
                let name = collapse(&part[..eq]);
                let value = collapse(&part[eq + 1..]);
                (identifier_re().is_match(&name) && !value.is_empty())
                    .then(|| AnnotationParameter::new(name, value))
            }
            None => {
                let value = collapse(part);
                (!value.is_empty()).then(|| AnnotationParameter::value_only(value))
            }
        };
        match parsed {
            Some(parameter) => parameters.push(parameter),
            None => messages.push(format!(
                "Annotation parameter #{} is malformed: '{}'",
                idx + 1,
                collapse(part)
            )),
        }
    }
    parameters
}

/// Index of the first `=` outside nested parentheses and braces that is an assignment. An `=`
/// touching another `=` or an operator word (`!=`, `<=`, `>=`, `==`) belongs to an expression.
fn top_level_assignment(tokens: &[Token]) -> Option<usize> {
    let mut depth = 0isize;
    for (idx, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Separator {
            continue;
        }
        match token.text.as_str() {
            "(" | "{" => depth += 1,
            ")" | "}" => depth -= 1,
            "=" if depth == 0 && !is_operator_part(tokens, idx) => return Some(idx),
            _ => {}
        }
    }
    None
}

fn is_operator_part(tokens: &[Token], idx: usize) -> bool {
    let is_eq = |token: &Token| token.kind == TokenKind::Separator && token.text == "=";
    let before = idx.checked_sub(1).and_then(|prev| tokens.get(prev));
    let after = tokens.get(idx + 1);
    let operator_word = |token: &Token| {
        token.kind == TokenKind::Word && token.text.ends_with(['!', '<', '>', '='])
    };
    before.is_some_and(|token| is_eq(token) || operator_word(token))
        || after.is_some_and(is_eq)
}

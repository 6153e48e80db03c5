use jsource_model::Method;

use crate::body::body_lines;
use crate::cursor::{collapse, identifier_re, split_top_level_commas, Cursor};
use crate::error::{check, ConstructKind, ParseError};
use crate::leading::{self, Leading};
use crate::modifiers::{self, Modifiers};
use crate::tokenizer::{Token, TokenKind};
use crate::types::{parameter_from_tokens, type_text};
use crate::{ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::Method;

/// A method or constructor with its leading javadoc, annotations and modifiers.
///
/// A declaration without a return type (`Test() { }`) is a constructor.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Method>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    let leading = leading::collect(&mut cursor, KIND, options)?;
    let modifiers = modifiers::collect(&mut cursor);
    let problems = modifiers.problems.clone();
    let parsed = parse_declaration(cursor, leading, &modifiers, options)
        .map_err(|err| err.prepend(problems.clone()))?;
    check(KIND, problems)?;
    Ok(parsed)
}

/// Everything after the modifiers: `Type name(params) [throws A, B] { body }` or `... ;`.
pub(crate) fn parse_declaration(
    mut cursor: Cursor<'_>,
    leading: Leading,
    modifiers: &Modifiers,
    options: &ParseOptions,
) -> Result<Parsed<Method>, ParseError> {
    let mut messages = Vec::new();

    cursor.skip_trivia();
    let header_start = cursor.pos();
    while let Some(token) = cursor.peek() {
        let in_header = match token.kind {
            TokenKind::Separator => token.is_separator(','),
            TokenKind::Literal => false,
            _ => true,
        };
        if !in_header {
            break;
        }
        cursor.bump();
    }
    let header: Vec<Token> = cursor.tokens()[header_start..cursor.pos()]
        .iter()
        .filter(|token| !token.is_comment())
        .cloned()
        .collect();
    let header = collapse(&header);
    let (return_type, name) = match header.rsplit_once(' ') {
        Some((return_type, name)) => (Some(return_type.to_string()), name.to_string()),
        None => (None, header.clone()),
    };
    if !identifier_re().is_match(&name) {
        messages.push("Failed to find method name!".to_string());
    }

    if !cursor.at_separator('(') {
        messages.push("Failed to find '(' to start parameter list!".to_string());
        return Err(ParseError::new(KIND, messages));
    }
    cursor.bump();
    let Some(param_tokens) = cursor.balanced('(', ')') else {
        messages.push("Failed to find end of parameter list!".to_string());
        messages.push("Failed to find end of method body!".to_string());
        return Err(ParseError::new(KIND, messages));
    };

    let mut parameters = Vec::new();
    if !param_tokens.iter().all(Token::is_trivia) {
        for (idx, part) in split_top_level_commas(param_tokens).into_iter().enumerate() {
            match parameter_from_tokens(part, options) {
                Ok(parameter) => parameters.push(parameter),
                Err(text) => messages.push(format!(
                    "Parameter #{} is missing a type or name: '{text}'",
                    idx + 1
                )),
            }
        }
    }

    let mut throw_types = Vec::new();
    if cursor.eat_keyword("throws") {
        loop {
            cursor.skip_trivia();
            let throw_type = type_text(&mut cursor);
            if throw_type.is_empty() {
                messages.push("Failed to find type after 'throws'!".to_string());
                break;
            }
            throw_types.push(throw_type);
            if !cursor.eat_separator(',') {
                break;
            }
        }
    }

    // Comments between the header and the body have no slot in the tree.
    cursor.skip_trivia_and_comments();
    let lines = if cursor.at_separator(';') {
        cursor.bump();
        None
    } else if cursor.at_separator('{') {
        cursor.bump();
        match cursor.balanced('{', '}') {
            Some(body) => Some(body_lines(body)),
            None => {
                messages.push("Failed to find end of method body!".to_string());
                None
            }
        }
    } else {
        messages.push("Failed to find end of method body!".to_string());
        None
    };
    check(KIND, messages)?;

    let (return_type, name) = match return_type {
        Some(return_type) => (Some(return_type), Some(name)),
        None => (None, None),
    };
    let node = Method::builder()
        .editable(options.editable)
        .maybe_javadoc(leading.javadoc)
        .annotations(leading.annotations)
        .visibility(modifiers.visibility)
        .is_abstract(modifiers.is_abstract)
        .is_static(modifiers.is_static)
        .is_final(modifiers.is_final)
        .maybe_return_type(return_type)
        .maybe_name(name)
        .parameters(parameters)
        .throw_types(throw_types)
        .maybe_lines(lines)
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

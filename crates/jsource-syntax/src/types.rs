//! Structured generic type expressions: `Base<A, B<C>>[][]` and `T extends Bound`.

use jsource_model::{Parameter, ParameterType, Type, TypeParameter};

use crate::cursor::{angle_delta, collapse, Cursor};
use crate::error::{ConstructKind, ParseError};
use crate::tokenizer::{Token, TokenKind};
use crate::{ParseOptions, Parsed};

/// Token-level entry: consumes one type expression.
///
/// At nesting depth zero the type ends at whitespace; inside `<...>` whitespace, line breaks and
/// commas belong to the type.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Type>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    cursor.skip_trivia();
    let text = type_text(&mut cursor);
    let ty = parse_type_text(&text, options)?;
    Ok(Parsed::new(ty, cursor.pos()))
}

/// Collects the raw text of one type expression, whitespace collapsed.
pub(crate) fn type_text(cursor: &mut Cursor<'_>) -> String {
    let start = cursor.pos();
    let mut depth = 0isize;
    while let Some(token) = cursor.peek() {
        let part_of_type = match token.kind {
            TokenKind::Word => true,
            TokenKind::Whitespace | TokenKind::Newline => depth > 0,
            TokenKind::Separator => depth > 0 && token.is_separator(','),
            _ => false,
        };
        if !part_of_type {
            break;
        }
        if token.kind == TokenKind::Word {
            depth += angle_delta(&token.text);
        }
        cursor.bump();
        if depth <= 0 && token.kind == TokenKind::Word {
            // `Map <K, V>` keeps going when the next word opens type arguments.
            let mut lookahead = cursor.clone();
            lookahead.skip_whitespace();
            match lookahead.peek() {
                Some(next) if next.kind == TokenKind::Word && next.text.starts_with(['<', '[']) => {
                    *cursor = lookahead;
                }
                _ => break,
            }
        }
    }
    collapse(&cursor.tokens()[start..cursor.pos()])
}

pub fn parse_type_text(text: &str, options: &ParseOptions) -> Result<Type, ParseError> {
    let mut scanner = Scanner::new(text);
    let ty = scanner
        .parse_type(options)
        .map_err(|message| ParseError::single(ConstructKind::Type, message))?;
    scanner.skip_spaces();
    if !scanner.rest().is_empty() {
        return Err(ParseError::single(
            ConstructKind::Type,
            format!("Unexpected trailing content in type: '{}'", scanner.rest()),
        ));
    }
    Ok(ty)
}

/// `T` or `T extends Bound`.
pub fn parse_type_parameter_text(
    text: &str,
    options: &ParseOptions,
) -> Result<TypeParameter, ParseError> {
    const KIND: ConstructKind = ConstructKind::TypeParameter;
    let mut scanner = Scanner::new(text);
    let ty = scanner
        .parse_type(options)
        .map_err(|message| ParseError::single(KIND, message))?;
    scanner.skip_spaces();

    let mut extends_type = None;
    if let Some(rest) = scanner.rest().strip_prefix("extends") {
        if !rest.starts_with(char::is_whitespace) {
            return Err(ParseError::single(KIND, format!("Unexpected content: '{}'", scanner.rest())));
        }
        scanner.advance("extends".len());
        scanner.skip_spaces();
        let bound = scanner
            .parse_type(options)
            .map_err(|message| ParseError::single(KIND, message))?;
        extends_type = Some(bound);
        scanner.skip_spaces();
    }
    if !scanner.rest().is_empty() {
        return Err(ParseError::single(
            KIND,
            format!("Unexpected trailing content in type parameter: '{}'", scanner.rest()),
        ));
    }

    let mut builder = TypeParameter::builder().editable(options.editable).ty(ty);
    if let Some(bound) = extends_type {
        builder = builder.extends_type(bound);
    }
    builder
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))
}

/// `Type name`, `Type... name`, or anything unstructured such as `final @Nullable String name`.
///
/// The type is kept structured when it parses as a type expression and raw otherwise.
pub fn parse_parameter_text(text: &str, options: &ParseOptions) -> Result<Parameter, String> {
    let text = text.trim();
    let name_start = text
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_' || *c == '$')
        .last()
        .map(|(idx, _)| idx);
    let Some(name_start) = name_start else {
        return Err(text.to_string());
    };
    let name = &text[name_start..];
    let mut type_text = text[..name_start].trim_end();
    let is_vararg = type_text.ends_with("...");
    if is_vararg {
        type_text = type_text[..type_text.len() - 3].trim_end();
    }
    let separated = is_vararg || text[..name_start].ends_with(char::is_whitespace);
    let name_is_identifier = !name.starts_with(|c: char| c.is_ascii_digit());
    if type_text.is_empty() || !separated || !name_is_identifier {
        return Err(text.to_string());
    }

    let param_type = match parse_type_text(type_text, options) {
        Ok(ty) => ParameterType::Structured(ty),
        Err(_) => ParameterType::Raw(type_text.to_string()),
    };
    Parameter::builder()
        .editable(options.editable)
        .param_type(param_type)
        .name(name)
        .is_vararg(is_vararg)
        .build()
        .map_err(|_| text.to_string())
}

/// Parameter from its token run, used by the method parser.
pub(crate) fn parameter_from_tokens(
    tokens: &[Token],
    options: &ParseOptions,
) -> Result<Parameter, String> {
    parse_parameter_text(&collapse(tokens), options)
}

struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Scanner { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn advance(&mut self, len: usize) {
        self.pos += len;
    }

    fn skip_spaces(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn eat(&mut self, c: char) -> bool {
        self.skip_spaces();
        if self.rest().starts_with(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn parse_type(&mut self, options: &ParseOptions) -> Result<Type, String> {
        self.skip_spaces();
        let rest = self.rest();
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | '?')))
            .unwrap_or(rest.len());
        let base = rest[..len].trim_end_matches('.');
        if base.is_empty() {
            return Err("Failed to find base type!".to_string());
        }
        self.advance(base.len());

        let mut type_parameters = Vec::new();
        if self.eat('<') {
            if !self.eat('>') {
                loop {
                    type_parameters.push(self.parse_type(options)?);
                    if self.eat(',') {
                        continue;
                    }
                    if self.eat('>') {
                        break;
                    }
                    return Err("Failed to find end of type parameters!".to_string());
                }
            }
        }

        let mut array_dimensions = 0;
        while self.eat('[') {
            if !self.eat(']') {
                return Err("Expected ']' after '['!".to_string());
            }
            array_dimensions += 1;
        }

        let canonical_name = base.contains('.').then(|| base.to_string());
        Type::builder()
            .editable(options.editable)
            .base_type(base)
            .maybe_canonical_name(canonical_name)
            .type_parameters(type_parameters)
            .array_dimensions(array_dimensions)
            .build()
            .map_err(|err| err.into_messages().join(" "))
    }
}

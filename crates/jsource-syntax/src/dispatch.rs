//! Decides what a modifier run introduces: a nested class, a field, a method or a static block.

use jsource_model::{Class, Field, Method, StaticCodeBlock};

use crate::body::body_lines;
use crate::cursor::Cursor;
use crate::error::{ConstructKind, ParseError};
use crate::leading::{self, Leading, UNATTACHED};
use crate::modifiers::{self, Modifier, Modifiers};
use crate::tokenizer::{Token, TokenKind};
use crate::{class, field, method, ParseOptions, Parsed};

const UNRESOLVED: &str = "Failed to determine whether this is a class, method or field!";

/// One class body member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Member {
    Class(Class),
    Field(Field),
    Method(Method),
    StaticBlock(StaticCodeBlock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resolved {
    Class,
    StaticBlock,
    Method,
    Field,
}

/// Parses leading javadoc, annotations and modifiers, then the member they introduce.
///
/// Modifier problems (duplicates, several visibilities) are reported together with any problem
/// in the member itself.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Member>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    let leading = leading::collect(&mut cursor, ConstructKind::TypeWithModifiers, options)?;
    parse_member(cursor, leading, options)
}

pub(crate) fn parse_member(
    mut cursor: Cursor<'_>,
    leading: Leading,
    options: &ParseOptions,
) -> Result<Parsed<Member>, ParseError> {
    let modifiers = modifiers::collect(&mut cursor);
    let problems = modifiers.problems.clone();

    let resolved = resolve(&cursor, &modifiers);
    tracing::trace!(
        target = "jsource.syntax",
        resolved = ?resolved,
        modifiers = ?modifiers.list.iter().map(|m| m.keyword()).collect::<Vec<_>>(),
        "dispatching member"
    );

    let result = match resolved {
        Some(Resolved::Class) => class::parse_declaration(cursor, leading, &modifiers, None, options)
            .map(|parsed| parsed.map(Member::Class)),
        Some(Resolved::StaticBlock) => {
            parse_static_block(cursor, &leading, options).map(|parsed| parsed.map(Member::StaticBlock))
        }
        Some(Resolved::Method) => method::parse_declaration(cursor, leading, &modifiers, options)
            .map(|parsed| parsed.map(Member::Method)),
        Some(Resolved::Field) => field::parse_declaration(cursor, leading, &modifiers, options)
            .map(|parsed| parsed.map(Member::Field)),
        None => {
            let mut messages = problems;
            messages.push(UNRESOLVED.to_string());
            return Err(ParseError::new(ConstructKind::TypeWithModifiers, messages));
        }
    };

    match result {
        Ok(parsed) if problems.is_empty() => Ok(parsed),
        Ok(parsed) => Err(ParseError::new(member_kind(&parsed.node), problems)),
        Err(err) => Err(err.prepend(problems)),
    }
}

fn member_kind(member: &Member) -> ConstructKind {
    match member {
        Member::Class(_) => ConstructKind::Class,
        Member::Field(_) => ConstructKind::Field,
        Member::Method(_) => ConstructKind::Method,
        Member::StaticBlock(_) => ConstructKind::TypeWithModifiers,
    }
}

/// Looks ahead without consuming: `class` keyword, a bare `static {`, or the first structural
/// separator (`(` means method; `;` or `=` means field).
fn resolve(cursor: &Cursor<'_>, modifiers: &Modifiers) -> Option<Resolved> {
    let mut lookahead = cursor.clone();
    lookahead.skip_trivia_and_comments();
    if lookahead.at_keyword("class") {
        return Some(Resolved::Class);
    }
    if lookahead.at_separator('{') {
        return modifiers
            .is_only(Modifier::Static)
            .then_some(Resolved::StaticBlock);
    }

    while let Some(token) = lookahead.bump() {
        if token.kind != TokenKind::Separator {
            continue;
        }
        match token.text.as_str() {
            "(" => return Some(Resolved::Method),
            ";" | "=" => return Some(Resolved::Field),
            "{" | "}" => return None,
            _ => {}
        }
    }
    None
}

fn parse_static_block(
    mut cursor: Cursor<'_>,
    leading: &Leading,
    options: &ParseOptions,
) -> Result<Parsed<StaticCodeBlock>, ParseError> {
    const KIND: ConstructKind = ConstructKind::TypeWithModifiers;
    if !leading.is_empty() {
        return Err(ParseError::single(KIND, UNATTACHED));
    }
    cursor.skip_trivia_and_comments();
    if !cursor.eat_separator('{') {
        return Err(ParseError::single(KIND, "Failed to find '{' to start static block!"));
    }
    let Some(body) = cursor.balanced('{', '}') else {
        return Err(ParseError::single(KIND, "Failed to find end of static block!"));
    };
    let node = StaticCodeBlock::builder()
        .editable(options.editable)
        .lines(body_lines(body))
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;
    Ok(Parsed::new(node, cursor.pos()))
}

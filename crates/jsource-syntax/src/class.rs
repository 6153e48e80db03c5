use std::mem;

use jsource_model::{Class, ClassBuilder, ImportStatement, PackageDeclaration};

use crate::cursor::Cursor;
use crate::dispatch::{self, Member};
use crate::error::{check, ConstructKind, ParseError};
use crate::leading::{self, Leading, UNATTACHED};
use crate::modifiers::{self, Modifiers};
use crate::tokenizer::{Token, TokenKind};
use crate::types::type_text;
use crate::{annotation, comment, javadoc, ParseOptions, Parsed};

const KIND: ConstructKind = ConstructKind::Class;

/// Package and imports of a top-level class. Nested classes have none.
#[derive(Debug, Clone, Default)]
pub(crate) struct TopLevel {
    pub(crate) package: Option<PackageDeclaration>,
    pub(crate) imports: Vec<Option<ImportStatement>>,
}

/// A class declaration parsed as a nested class: no package, no imports.
pub fn parse(
    tokens: &[Token],
    start: usize,
    options: &ParseOptions,
) -> Result<Parsed<Class>, ParseError> {
    let mut cursor = Cursor::new(tokens, start);
    let leading = leading::collect(&mut cursor, KIND, options)?;
    let modifiers = modifiers::collect(&mut cursor);
    let problems = modifiers.problems.clone();
    let parsed = parse_declaration(cursor, leading, &modifiers, None, options)
        .map_err(|err| err.prepend(problems.clone()))?;
    check(KIND, problems)?;
    Ok(parsed)
}

/// `class Name [extends Base] [implements A, B] { members }`, starting after the modifiers.
pub(crate) fn parse_declaration(
    mut cursor: Cursor<'_>,
    leading: Leading,
    modifiers: &Modifiers,
    top_level: Option<TopLevel>,
    options: &ParseOptions,
) -> Result<Parsed<Class>, ParseError> {
    let mut messages = Vec::new();

    cursor.skip_trivia_and_comments();
    if !cursor.at_keyword("class") {
        return Err(ParseError::single(KIND, "Expected 'class' keyword!"));
    }
    cursor.bump();

    cursor.skip_trivia();
    let class_name = match cursor.peek() {
        Some(token) if token.kind == TokenKind::Word => {
            cursor.bump();
            token.text.clone()
        }
        _ => {
            messages.push("Failed to find class name!".to_string());
            String::new()
        }
    };

    let mut super_class_name = None;
    if cursor.eat_keyword("extends") {
        cursor.skip_trivia();
        let name = type_text(&mut cursor);
        if name.is_empty() {
            messages.push("Failed to find super class name!".to_string());
        } else {
            super_class_name = Some(name);
        }
    }

    let mut interfaces = Vec::new();
    if cursor.eat_keyword("implements") {
        loop {
            cursor.skip_trivia();
            let name = type_text(&mut cursor);
            if name.is_empty() {
                messages.push("Failed to find interface name!".to_string());
                break;
            }
            interfaces.push(name);
            if !cursor.eat_separator(',') {
                break;
            }
        }
    }

    if !cursor.eat_separator('{') {
        messages.push("Failed to find '{' to start class body!".to_string());
        return Err(ParseError::new(KIND, messages));
    }

    let mut members = Vec::new();
    let mut pending = Leading::default();
    loop {
        cursor.skip_trivia();
        let Some(token) = cursor.peek() else {
            messages.push("Failed to find end of class body!".to_string());
            return Err(ParseError::new(KIND, messages));
        };

        match token.kind {
            TokenKind::LineComment => {
                cursor.bump();
                members.push(BodyElement::SingleLineComment(comment::single_line_from_token(
                    token, options,
                )?));
            }
            TokenKind::BlockComment if token.is_javadoc() => {
                cursor.bump();
                pending.set_javadoc(javadoc::from_token(token, options)?, KIND)?;
            }
            TokenKind::BlockComment => {
                cursor.bump();
                members.push(BodyElement::MultiLineComment(comment::multi_line_from_token(
                    token, options,
                )?));
            }
            TokenKind::Separator if token.is_separator('}') => {
                cursor.bump();
                if !pending.is_empty() {
                    messages.push(UNATTACHED.to_string());
                }
                break;
            }
            TokenKind::Separator if token.is_separator(';') => {
                cursor.bump();
            }
            TokenKind::Separator if token.is_separator('@') => {
                let parsed = annotation::parse(cursor.tokens(), cursor.pos(), options)?;
                cursor = cursor.at(parsed.next);
                pending.annotations.push(parsed.node);
            }
            _ => {
                let parsed = dispatch::parse_member(cursor.clone(), mem::take(&mut pending), options)?;
                cursor = cursor.at(parsed.next);
                members.push(BodyElement::Member(parsed.node));
            }
        }
    }
    check(KIND, messages)?;

    let is_inner_class = top_level.is_none();
    let TopLevel { package, imports } = top_level.unwrap_or_default();
    let mut builder = Class::builder()
        .editable(options.editable)
        .is_inner_class(is_inner_class)
        .maybe_package_declaration(package)
        .import_statements(imports)
        .maybe_javadoc(leading.javadoc)
        .annotations(leading.annotations)
        .visibility(modifiers.visibility)
        .is_abstract(modifiers.is_abstract)
        .is_static(modifiers.is_static)
        .is_final(modifiers.is_final)
        .class_name(class_name)
        .maybe_super_class_name(super_class_name)
        .implements_interface_names(interfaces);
    let member_count = members.len();
    for element in members {
        builder = element.add_to(builder);
    }
    let node = builder
        .build()
        .map_err(|err| ParseError::from_validation(KIND, err))?;

    tracing::trace!(
        target = "jsource.syntax",
        class = node.class_name(),
        members = member_count,
        inner = node.is_inner_class(),
        "parsed class"
    );
    Ok(Parsed::new(node, cursor.pos()))
}

enum BodyElement {
    SingleLineComment(jsource_model::SingleLineComment),
    MultiLineComment(jsource_model::MultiLineComment),
    Member(Member),
}

impl BodyElement {
    fn add_to(self, builder: ClassBuilder) -> ClassBuilder {
        match self {
            BodyElement::SingleLineComment(comment) => builder.single_line_comment(comment),
            BodyElement::MultiLineComment(comment) => builder.multi_line_comment(comment),
            BodyElement::Member(Member::Class(class)) => builder.inner_class(class),
            BodyElement::Member(Member::Field(field)) => builder.field(field),
            BodyElement::Member(Member::Method(method)) => builder.method(method),
            BodyElement::Member(Member::StaticBlock(block)) => builder.static_code_block(block),
        }
    }
}

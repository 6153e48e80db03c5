//! Parser for Java source fragments into the `jsource-model` tree.
//!
//! Text is first split into a lossless token stream ([`tokenizer`]). Each construct has its own
//! module exposing a token-level `parse(tokens, start, options)` that returns the node together
//! with the index of the first unconsumed token. [`Parser`] wraps those into text-level entry
//! points that also reject trailing content.
//!
//! Parsers never stop at the first problem they can recover from: a [`ParseError`] carries every
//! independent message found for the construct, in source order.

pub mod annotation;
mod body;
pub mod class;
pub mod comment;
mod cursor;
pub mod dispatch;
mod error;
pub mod field;
pub mod import;
pub mod javadoc;
mod leading;
pub mod method;
mod modifiers;
pub mod package;
pub mod tokenizer;
pub mod types;

pub use dispatch::Member;
pub use error::{ConstructKind, ParseError};
pub use tokenizer::{tokenize, Token, TokenKind};

use jsource_model::{
    canonical_import_layout, Annotation, Class, Field, ImportStatement, Javadoc, Method,
    MultiLineComment, PackageDeclaration, Parameter, SingleLineComment, Type, TypeParameter,
};
use serde::{Deserialize, Serialize};

use crate::class::TopLevel;
use crate::cursor::Cursor;
use crate::error::check;

/// Knobs for every parser in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParseOptions {
    /// Build editable trees instead of read-only ones.
    pub editable: bool,
    /// Keep string, char and text block literals as single tokens, so braces inside them do not
    /// affect body boundaries.
    pub literal_aware: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            editable: false,
            literal_aware: true,
        }
    }
}

/// A parsed node and the index of the first token after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    pub node: T,
    pub next: usize,
}

impl<T> Parsed<T> {
    pub fn new(node: T, next: usize) -> Self {
        Self { node, next }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            node: f(self.node),
            next: self.next,
        }
    }
}

type TokenParser<T> = fn(&[Token], usize, &ParseOptions) -> Result<Parsed<T>, ParseError>;

/// Text-level entry points sharing one set of [`ParseOptions`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses a compilation unit: optional package, imports, then exactly one top-level class.
    ///
    /// Imports are stored in their canonical layout. A javadoc right before the class belongs to
    /// the class. The tree has no slot for other comments outside the class body, so comments
    /// before the package, between the imports and the class, and after the closing brace are
    /// dropped. Comments inside the class body are kept as members.
    pub fn parse(&self, text: &str) -> Result<Class, ParseError> {
        let tokens = tokenize(text, self.options.literal_aware);
        tracing::debug!(
            target = "jsource.syntax",
            len = text.len(),
            tokens = tokens.len(),
            editable = self.options.editable,
            "parsing compilation unit"
        );
        compilation_unit(&tokens, &self.options)
    }

    pub fn parse_package_declaration(&self, text: &str) -> Result<PackageDeclaration, ParseError> {
        self.complete(text, ConstructKind::PackageDeclaration, package::parse)
    }

    pub fn parse_import_statement(&self, text: &str) -> Result<ImportStatement, ParseError> {
        self.complete(text, ConstructKind::ImportStatement, import::parse)
    }

    pub fn parse_annotation(&self, text: &str) -> Result<Annotation, ParseError> {
        self.complete(text, ConstructKind::Annotation, annotation::parse)
    }

    pub fn parse_javadoc(&self, text: &str) -> Result<Javadoc, ParseError> {
        self.complete(text, ConstructKind::Javadoc, javadoc::parse)
    }

    pub fn parse_single_line_comment(&self, text: &str) -> Result<SingleLineComment, ParseError> {
        self.complete(text, ConstructKind::SingleLineComment, comment::parse_single_line)
    }

    pub fn parse_multi_line_comment(&self, text: &str) -> Result<MultiLineComment, ParseError> {
        self.complete(text, ConstructKind::MultiLineComment, comment::parse_multi_line)
    }

    pub fn parse_field(&self, text: &str) -> Result<Field, ParseError> {
        self.complete(text, ConstructKind::Field, field::parse)
    }

    /// Comments inside the parameter list or between the header and the body are dropped.
    /// Comments inside the body stay in its lines.
    pub fn parse_method(&self, text: &str) -> Result<Method, ParseError> {
        self.complete(text, ConstructKind::Method, method::parse)
    }

    /// Parses a class declaration as a nested class.
    pub fn parse_class(&self, text: &str) -> Result<Class, ParseError> {
        self.complete(text, ConstructKind::Class, class::parse)
    }

    /// Parses whatever member a modifier run introduces.
    pub fn parse_member(&self, text: &str) -> Result<Member, ParseError> {
        self.complete(text, ConstructKind::TypeWithModifiers, dispatch::parse)
    }

    pub fn parse_type(&self, text: &str) -> Result<Type, ParseError> {
        types::parse_type_text(text.trim(), &self.options)
    }

    pub fn parse_type_parameter(&self, text: &str) -> Result<TypeParameter, ParseError> {
        types::parse_type_parameter_text(text.trim(), &self.options)
    }

    pub fn parse_parameter(&self, text: &str) -> Result<Parameter, ParseError> {
        types::parse_parameter_text(text, &self.options).map_err(|text| {
            ParseError::single(
                ConstructKind::Parameter,
                format!("Parameter is missing a type or name: '{text}'"),
            )
        })
    }

    fn complete<T>(
        &self,
        text: &str,
        kind: ConstructKind,
        parse: TokenParser<T>,
    ) -> Result<T, ParseError> {
        let tokens = tokenize(text, self.options.literal_aware);
        let parsed = parse(&tokens, 0, &self.options)?;
        let mut cursor = Cursor::new(&tokens, parsed.next);
        cursor.skip_trivia();
        if !cursor.is_eof() {
            return Err(ParseError::single(kind, "Unexpected trailing content!"));
        }
        Ok(parsed.node)
    }
}

fn compilation_unit(tokens: &[Token], options: &ParseOptions) -> Result<Class, ParseError> {
    let mut cursor = Cursor::new(tokens, 0);
    skip_plain_comments(&mut cursor);

    let mut package = None;
    if cursor.at_keyword("package") {
        let parsed = package::parse(tokens, cursor.pos(), options)?;
        cursor = cursor.at(parsed.next);
        package = Some(parsed.node);
    }

    let mut imports = Vec::new();
    loop {
        let mut lookahead = cursor.clone();
        let mut newlines = 0;
        while let Some(token) = lookahead.peek() {
            if token.kind == TokenKind::Newline {
                newlines += 1;
            } else if !(token.is_trivia() || (token.is_comment() && !token.is_javadoc())) {
                break;
            }
            lookahead.bump();
        }
        if !lookahead.at_keyword("import") {
            break;
        }
        if newlines >= 2 && !imports.is_empty() {
            imports.push(None);
        }
        let parsed = import::parse(tokens, lookahead.pos(), options)?;
        cursor = cursor.at(parsed.next);
        imports.push(Some(parsed.node));
    }
    let imports = canonical_import_layout(&imports);

    skip_plain_comments(&mut cursor);
    let leading = leading::collect(&mut cursor, ConstructKind::Class, options)?;
    let modifiers = modifiers::collect(&mut cursor);
    let problems = modifiers.problems.clone();

    let mut lookahead = cursor.clone();
    lookahead.skip_trivia_and_comments();
    if !lookahead.at_keyword("class") {
        let mut messages = problems;
        messages.push("Expected a class declaration!".to_string());
        return Err(ParseError::new(ConstructKind::CompilationUnit, messages));
    }

    let top_level = TopLevel { package, imports };
    let parsed = class::parse_declaration(cursor, leading, &modifiers, Some(top_level), options)
        .map_err(|err| err.prepend(problems.clone()))?;
    check(ConstructKind::Class, problems)?;

    let mut cursor = Cursor::new(tokens, parsed.next);
    cursor.skip_trivia_and_comments();
    if !cursor.is_eof() {
        return Err(ParseError::single(
            ConstructKind::CompilationUnit,
            "Unexpected trailing content!",
        ));
    }
    Ok(parsed.node)
}

/// Skips trivia and comments, stopping at a javadoc. The skipped comments are not kept.
fn skip_plain_comments(cursor: &mut Cursor<'_>) {
    while cursor
        .peek()
        .is_some_and(|token| token.is_trivia() || (token.is_comment() && !token.is_javadoc()))
    {
        cursor.bump();
    }
}

/// Parses a compilation unit with default options.
pub fn parse(text: &str) -> Result<Class, ParseError> {
    Parser::default().parse(text)
}

pub fn parse_with_options(text: &str, options: ParseOptions) -> Result<Class, ParseError> {
    Parser::new(options).parse(text)
}

pub fn parse_package_declaration(text: &str) -> Result<PackageDeclaration, ParseError> {
    Parser::default().parse_package_declaration(text)
}

pub fn parse_import_statement(text: &str) -> Result<ImportStatement, ParseError> {
    Parser::default().parse_import_statement(text)
}

pub fn parse_annotation(text: &str) -> Result<Annotation, ParseError> {
    Parser::default().parse_annotation(text)
}

pub fn parse_javadoc(text: &str) -> Result<Javadoc, ParseError> {
    Parser::default().parse_javadoc(text)
}

pub fn parse_single_line_comment(text: &str) -> Result<SingleLineComment, ParseError> {
    Parser::default().parse_single_line_comment(text)
}

pub fn parse_multi_line_comment(text: &str) -> Result<MultiLineComment, ParseError> {
    Parser::default().parse_multi_line_comment(text)
}

pub fn parse_field(text: &str) -> Result<Field, ParseError> {
    Parser::default().parse_field(text)
}

pub fn parse_method(text: &str) -> Result<Method, ParseError> {
    Parser::default().parse_method(text)
}

pub fn parse_class(text: &str) -> Result<Class, ParseError> {
    Parser::default().parse_class(text)
}

pub fn parse_member(text: &str) -> Result<Member, ParseError> {
    Parser::default().parse_member(text)
}

pub fn parse_type(text: &str) -> Result<Type, ParseError> {
    Parser::default().parse_type(text)
}

pub fn parse_type_parameter(text: &str) -> Result<TypeParameter, ParseError> {
    Parser::default().parse_type_parameter(text)
}

pub fn parse_parameter(text: &str) -> Result<Parameter, ParseError> {
    Parser::default().parse_parameter(text)
}

#[cfg(test)]
mod tests;

use std::fmt;

use jsource_model::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The construct a parser was working on when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstructKind {
    PackageDeclaration,
    ImportStatement,
    Annotation,
    Javadoc,
    SingleLineComment,
    MultiLineComment,
    Field,
    Method,
    Parameter,
    Type,
    TypeParameter,
    /// Modifier run whose target kind could not be determined.
    TypeWithModifiers,
    Class,
    CompilationUnit,
}

impl ConstructKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ConstructKind::PackageDeclaration => "package declaration",
            ConstructKind::ImportStatement => "import statement",
            ConstructKind::Annotation => "annotation",
            ConstructKind::Javadoc => "javadoc",
            ConstructKind::SingleLineComment => "single line comment",
            ConstructKind::MultiLineComment => "multi line comment",
            ConstructKind::Field => "field",
            ConstructKind::Method => "method",
            ConstructKind::Parameter => "parameter",
            ConstructKind::Type => "type",
            ConstructKind::TypeParameter => "type parameter",
            ConstructKind::TypeWithModifiers => "type with modifiers",
            ConstructKind::Class => "class",
            ConstructKind::CompilationUnit => "compilation unit",
        }
    }
}

impl fmt::Display for ConstructKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every problem found while parsing one construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to parse {kind}:{}", render_messages(.messages))]
pub struct ParseError {
    kind: ConstructKind,
    messages: Vec<String>,
}

impl ParseError {
    pub fn new(kind: ConstructKind, messages: Vec<String>) -> Self {
        Self { kind, messages }
    }

    pub fn single(kind: ConstructKind, message: impl Into<String>) -> Self {
        Self::new(kind, vec![message.into()])
    }

    /// Re-labels a builder failure as a failure to parse `kind`.
    pub fn from_validation(kind: ConstructKind, err: ValidationError) -> Self {
        Self::new(kind, err.into_messages())
    }

    pub fn kind(&self) -> ConstructKind {
        self.kind
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }

    /// Puts `earlier` in front of this error's messages.
    pub(crate) fn prepend(mut self, earlier: Vec<String>) -> Self {
        if !earlier.is_empty() {
            let mut messages = earlier;
            messages.append(&mut self.messages);
            self.messages = messages;
        }
        self
    }
}

fn render_messages(messages: &[String]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str("\n\t");
        out.push_str(message);
    }
    out
}

/// Fails with `kind` when any message was collected.
pub(crate) fn check(kind: ConstructKind, messages: Vec<String>) -> Result<(), ParseError> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ParseError::new(kind, messages))
    }
}

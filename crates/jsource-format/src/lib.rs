//! Canonical text rendering for the `jsource-model` tree.
//!
//! Every node renders through a [`Doc`] (see [`doc`]) so that indentation and line endings are
//! applied in one place. The default [`FormatConfig`] is the canonical form: one tab per nesting
//! level, `\n` line endings and no final newline. Printing a parsed tree and parsing the result
//! again yields an equal tree.

pub mod doc;

mod class;
mod comments;
mod members;

pub use doc::{print, Doc, PrintConfig};
pub use members::MethodText;

use jsource_model::{
    Annotation, Class, CodeElement, Field, ImportStatement, Javadoc, Method, MultiLineComment,
    PackageDeclaration, Parameter, SingleLineComment, StaticCodeBlock, Type, TypeParameter,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    #[default]
    Tabs,
    Spaces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Output layout knobs. The default is the canonical rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatConfig {
    pub indent_style: IndentStyle,
    /// Spaces per nesting level with [`IndentStyle::Spaces`].
    pub indent_width: usize,
    pub newline: LineEnding,
    /// End the output with a line break.
    pub insert_final_newline: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Tabs,
            indent_width: 4,
            newline: LineEnding::Lf,
            insert_final_newline: false,
        }
    }
}

impl FormatConfig {
    pub fn print_config(&self) -> PrintConfig {
        PrintConfig {
            indent_style: self.indent_style,
            indent_width: self.indent_width,
            newline: self.newline.as_str(),
        }
    }

    /// Renders `doc`, appending the final newline when configured.
    pub fn render(&self, doc: Doc<'_>) -> String {
        let mut out = print(doc, self.print_config());
        if self.insert_final_newline && !out.ends_with(self.newline.as_str()) {
            out.push_str(self.newline.as_str());
        }
        out
    }
}

/// Canonical rendering of a node.
pub trait ToText {
    fn to_doc(&self) -> Doc<'_>;

    fn to_text(&self) -> String {
        self.to_text_with(&FormatConfig::default())
    }

    fn to_text_with(&self, config: &FormatConfig) -> String {
        config.render(self.to_doc())
    }
}

macro_rules! impl_to_text {
    ($($node:ty => $render:path),* $(,)?) => {
        $(
            impl ToText for $node {
                fn to_doc(&self) -> Doc<'_> {
                    $render(self)
                }
            }
        )*
    };
}

impl_to_text! {
    PackageDeclaration => class::package_doc,
    ImportStatement => class::import_doc,
    Class => class::class_doc,
    Javadoc => comments::javadoc_doc,
    Annotation => comments::annotation_doc,
    SingleLineComment => comments::single_line_doc,
    MultiLineComment => comments::multi_line_doc,
    StaticCodeBlock => members::static_block_doc,
    Field => members::field_doc,
    Parameter => members::parameter_doc,
    Method => members::standalone_method_doc,
    Type => members::type_doc,
    TypeParameter => members::type_parameter_doc,
}

impl ToText for CodeElement {
    fn to_doc(&self) -> Doc<'_> {
        match self {
            CodeElement::PackageDeclaration(node) => node.to_doc(),
            CodeElement::ImportStatement(node) => node.to_doc(),
            CodeElement::Javadoc(node) => node.to_doc(),
            CodeElement::Annotation(node) => node.to_doc(),
            CodeElement::SingleLineComment(node) => node.to_doc(),
            CodeElement::MultiLineComment(node) => node.to_doc(),
            CodeElement::StaticCodeBlock(node) => node.to_doc(),
            CodeElement::Field(node) => node.to_doc(),
            CodeElement::Parameter(node) => node.to_doc(),
            CodeElement::Method(node) => node.to_doc(),
            CodeElement::Class(node) => node.to_doc(),
            CodeElement::Type(node) => node.to_doc(),
            CodeElement::TypeParameter(node) => node.to_doc(),
        }
    }
}

#[cfg(test)]
mod tests;

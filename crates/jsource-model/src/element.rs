use serde::{Deserialize, Serialize};

use crate::{
    Annotation, Class, Field, ImportStatement, Javadoc, Method, MultiLineComment, Node, NodeKind,
    PackageDeclaration, Parameter, SingleLineComment, StaticCodeBlock, Type, TypeParameter,
};

/// Any node of the tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "node")]
pub enum CodeElement {
    PackageDeclaration(PackageDeclaration),
    ImportStatement(ImportStatement),
    Javadoc(Javadoc),
    Annotation(Annotation),
    SingleLineComment(SingleLineComment),
    MultiLineComment(MultiLineComment),
    StaticCodeBlock(StaticCodeBlock),
    Field(Field),
    Parameter(Parameter),
    Method(Method),
    Class(Class),
    Type(Type),
    TypeParameter(TypeParameter),
}

macro_rules! for_each_element {
    ($value:expr, $node:ident => $body:expr) => {
        match $value {
            CodeElement::PackageDeclaration($node) => $body,
            CodeElement::ImportStatement($node) => $body,
            CodeElement::Javadoc($node) => $body,
            CodeElement::Annotation($node) => $body,
            CodeElement::SingleLineComment($node) => $body,
            CodeElement::MultiLineComment($node) => $body,
            CodeElement::StaticCodeBlock($node) => $body,
            CodeElement::Field($node) => $body,
            CodeElement::Parameter($node) => $body,
            CodeElement::Method($node) => $body,
            CodeElement::Class($node) => $body,
            CodeElement::Type($node) => $body,
            CodeElement::TypeParameter($node) => $body,
        }
    };
}

impl CodeElement {
    pub fn kind(&self) -> NodeKind {
        fn kind_of<N: Node>(_: &N) -> NodeKind {
            N::KIND
        }
        for_each_element!(self, node => kind_of(node))
    }

    pub fn is_editable(&self) -> bool {
        for_each_element!(self, node => node.is_editable())
    }

    pub fn validate(&self) -> Result<(), crate::ValidationError> {
        for_each_element!(self, node => node.validate())
    }

    pub fn to_editable(&self) -> Self {
        for_each_element!(self, node => node.to_editable().into())
    }

    pub fn to_read_only(&self) -> Self {
        for_each_element!(self, node => node.to_read_only().into())
    }
}

macro_rules! impl_from_node {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for CodeElement {
                fn from(node: $variant) -> Self {
                    CodeElement::$variant(node)
                }
            }
        )*
    };
}

impl_from_node!(
    PackageDeclaration,
    ImportStatement,
    Javadoc,
    Annotation,
    SingleLineComment,
    MultiLineComment,
    StaticCodeBlock,
    Field,
    Parameter,
    Method,
    Class,
    Type,
    TypeParameter,
);

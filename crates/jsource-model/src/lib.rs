//! Structural model of Java source fragments.
//!
//! Every syntactic element the parser understands (package declarations, imports, javadoc,
//! annotations, comments, fields, methods, classes and generic type expressions) is represented
//! by an immutable value type with structural equality.
//!
//! Nodes carry an `editable` flag instead of living in two parallel type hierarchies:
//! - read-only nodes are fixed once their builder succeeds;
//! - editable nodes accept `set_*`/`add_*` calls, each of which re-validates the touched invariant.
//!
//! A parent and all of its children must agree on the flag. Builders check this (together with
//! every other invariant) and report all problems at once via [`ValidationError`].

mod annotation;
mod class;
mod comment;
mod element;
mod field;
mod imports;
mod javadoc;
mod method;
mod types;
mod validation;

pub use annotation::{Annotation, AnnotationBuilder, AnnotationParameter};
pub use class::{Class, ClassBuilder, ClassMember, InnerElement, InnerElementKind};
pub use comment::{
    MultiLineComment, MultiLineCommentBuilder, SingleLineComment, SingleLineCommentBuilder,
    StaticCodeBlock, StaticCodeBlockBuilder,
};
pub use element::CodeElement;
pub use field::{Field, FieldBuilder};
pub use imports::{
    canonical_import_layout, ImportStatement, ImportStatementBuilder, PackageDeclaration,
    PackageDeclarationBuilder,
};
pub use javadoc::{Javadoc, JavadocBuilder, JavadocEntry};
pub use method::{Method, MethodBuilder, Parameter, ParameterBuilder, ParameterType};
pub use types::{Type, TypeBuilder, TypeParameter, TypeParameterBuilder};
pub use validation::ValidationError;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Behaviour shared by every node of the tree.
pub trait Node: Clone {
    const KIND: NodeKind;

    /// Whether this node accepts in-place mutation.
    fn is_editable(&self) -> bool;

    /// Deep copy with `editable` set to `editable` on this node and every descendant.
    fn with_editable(&self, editable: bool) -> Self;

    fn to_editable(&self) -> Self {
        self.with_editable(true)
    }

    /// A read-only snapshot, safe to share without further synchronization.
    fn to_read_only(&self) -> Self {
        self.with_editable(false)
    }

    /// Re-runs every invariant check for this node.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Discriminant of [`CodeElement`], used to label errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
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
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::PackageDeclaration => "PackageDeclaration",
            NodeKind::ImportStatement => "ImportStatement",
            NodeKind::Javadoc => "Javadoc",
            NodeKind::Annotation => "Annotation",
            NodeKind::SingleLineComment => "SingleLineComment",
            NodeKind::MultiLineComment => "MultiLineComment",
            NodeKind::StaticCodeBlock => "StaticCodeBlock",
            NodeKind::Field => "Field",
            NodeKind::Parameter => "Parameter",
            NodeKind::Method => "Method",
            NodeKind::Class => "Class",
            NodeKind::Type => "Type",
            NodeKind::TypeParameter => "TypeParameter",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access modifier of a class, field or method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Package-private: no keyword.
    #[default]
    None,
    Private,
    Protected,
    Public,
}

impl Visibility {
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::None => None,
            Visibility::Private => Some("private"),
            Visibility::Protected => Some("protected"),
            Visibility::Public => Some("public"),
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "private" => Some(Visibility::Private),
            "protected" => Some(Visibility::Protected),
            "public" => Some(Visibility::Public),
            _ => None,
        }
    }
}

/// Serde impls that run [`Node::validate`] after deserializing, so a deserialized tree upholds
/// the same invariants as a built one. The node types derive with `#[serde(remote = "Self")]`,
/// which turns the derived code into inherent functions these impls delegate to.
macro_rules! validated_serde {
    ($($node:ty),* $(,)?) => {
        $(
            impl Serialize for $node {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    <$node>::serialize(self, serializer)
                }
            }

            impl<'de> Deserialize<'de> for $node {
                fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let node = <$node>::deserialize(deserializer)?;
                    node.validate().map_err(serde::de::Error::custom)?;
                    Ok(node)
                }
            }
        )*
    };
}

validated_serde! {
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
}

fn with_editable_all<T: Node>(items: &[T], editable: bool) -> Vec<T> {
    items.iter().map(|item| item.with_editable(editable)).collect()
}

#[cfg(test)]
mod tests;

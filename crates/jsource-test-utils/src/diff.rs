use std::fmt::Debug;

use jsource_model::{
    Annotation, AnnotationParameter, Class, CodeElement, Field, ImportStatement, Javadoc,
    JavadocEntry, Method, MultiLineComment, Node, PackageDeclaration, Parameter, ParameterType,
    SingleLineComment, StaticCodeBlock, Type, TypeParameter,
};

/// Structural comparison producing readable difference messages.
pub trait Diff {
    /// Differences between `self` (expected) and `other` (actual), in field order.
    fn diff(&self, other: &Self) -> Vec<String>;
}

/// Accumulates difference messages for one node.
#[derive(Debug, Default)]
pub struct Report {
    messages: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// `"<label> is different!"` when the values differ.
    pub fn field<T: PartialEq + ?Sized>(&mut self, label: &str, expected: &T, actual: &T) -> &mut Self {
        if expected != actual {
            self.messages.push(format!("{label} is different!"));
        }
        self
    }

    /// An optional child: presence mismatch is a plain difference, otherwise the child's own
    /// messages are nested under `"<label> differs:"`.
    pub fn child<T: Diff>(&mut self, label: &str, expected: Option<&T>, actual: Option<&T>) -> &mut Self {
        match (expected, actual) {
            (None, None) => {}
            (Some(expected), Some(actual)) => self.nested(label, expected.diff(actual)),
            _ => self.messages.push(format!("{label} is different!")),
        }
        self
    }

    /// A child collection: a length mismatch is reported once, then every shared position is
    /// compared and reported as `"<label> differs on #<n>!"`.
    pub fn list<T: Diff>(&mut self, label: &str, expected: &[T], actual: &[T]) -> &mut Self {
        if expected.len() != actual.len() {
            self.messages.push(format!("{label} length is different!"));
        }
        for (idx, (expected, actual)) in expected.iter().zip(actual).enumerate() {
            let nested = expected.diff(actual);
            if !nested.is_empty() {
                self.messages
                    .push(format!("{label} differs on #{}!{}", idx + 1, indent(&nested)));
            }
        }
        self
    }

    fn nested(&mut self, label: &str, nested: Vec<String>) {
        if !nested.is_empty() {
            self.messages.push(format!("{label} differs:{}", indent(&nested)));
        }
    }

    pub fn finish(self) -> Vec<String> {
        if !self.messages.is_empty() {
            tracing::debug!(
                target = "jsource.test",
                differences = self.messages.len(),
                "nodes differ"
            );
        }
        self.messages
    }
}

/// Each message on its own tab-indented line; nested lines get one more tab.
fn indent(messages: &[String]) -> String {
    let mut out = String::new();
    for message in messages {
        for line in message.lines() {
            out.push_str("\n\t");
            out.push_str(line);
        }
    }
    out
}

fn plain<T: PartialEq + Debug>(label: &str, expected: &T, actual: &T) -> Vec<String> {
    let mut report = Report::new();
    report.field(label, expected, actual);
    report.finish()
}

impl Diff for PackageDeclaration {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Package name", self.package_name(), other.package_name());
        report.finish()
    }
}

impl Diff for ImportStatement {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Static", &self.is_static(), &other.is_static())
            .field("Import name", self.import_name(), other.import_name());
        report.finish()
    }
}

/// Import slots, where `None` is a blank-line separator.
impl Diff for Option<ImportStatement> {
    fn diff(&self, other: &Self) -> Vec<String> {
        match (self, other) {
            (Some(expected), Some(actual)) => expected.diff(actual),
            _ => plain("Separator", &self.is_none(), &other.is_none()),
        }
    }
}

impl Diff for JavadocEntry {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Name", self.name(), other.name())
            .field("Description", self.description(), other.description());
        report.finish()
    }
}

impl Diff for Javadoc {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Condensed", &self.is_condensed(), &other.is_condensed())
            .field("Content", self.content(), other.content())
            .field("Author", &self.author(), &other.author())
            .field("Version", &self.version(), &other.version())
            .field("Since", &self.since(), &other.since())
            .list("Params", self.params(), other.params())
            .field("Return", &self.return_val(), &other.return_val())
            .list("Throws", self.throws_info(), other.throws_info());
        report.finish()
    }
}

impl Diff for AnnotationParameter {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Name", self.name(), other.name())
            .field("Value", self.value(), other.value());
        report.finish()
    }
}

impl Diff for Annotation {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Name", self.name(), other.name())
            .field("Canonical name", &self.canonical_name(), &other.canonical_name())
            .list("Parameters", self.parameters(), other.parameters());
        report.finish()
    }
}

impl Diff for SingleLineComment {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Content", self.content(), other.content());
        report.finish()
    }
}

impl Diff for MultiLineComment {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Content", self.content(), other.content());
        report.finish()
    }
}

impl Diff for StaticCodeBlock {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Lines", self.lines(), other.lines());
        report.finish()
    }
}

impl Diff for Field {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .child("Javadoc", self.javadoc(), other.javadoc())
            .list("Annotations", self.annotations(), other.annotations())
            .field("Visibility", &self.visibility(), &other.visibility())
            .field("Static", &self.is_static(), &other.is_static())
            .field("Final", &self.is_final(), &other.is_final())
            .field("Type", self.field_type(), other.field_type())
            .field("Name", self.name(), other.name())
            .field("Value", &self.value(), &other.value());
        report.finish()
    }
}

impl Diff for Type {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Base type", self.base_type(), other.base_type())
            .field("Canonical name", &self.canonical_name(), &other.canonical_name())
            .list("Type parameters", self.type_parameters(), other.type_parameters())
            .field("Array dimensions", &self.array_dimensions(), &other.array_dimensions());
        report.finish()
    }
}

impl Diff for TypeParameter {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .child("Type", Some(self.ty()), Some(other.ty()))
            .child("Extends type", self.extends_type(), other.extends_type());
        report.finish()
    }
}

impl Diff for Parameter {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report.field("Editable", &self.is_editable(), &other.is_editable());
        match (self.param_type(), other.param_type()) {
            (ParameterType::Structured(expected), ParameterType::Structured(actual)) => {
                report.child("Type", Some(expected), Some(actual));
            }
            (expected, actual) => {
                report.field("Type", expected, actual);
            }
        }
        report
            .field("Name", self.name(), other.name())
            .field("Vararg", &self.is_vararg(), &other.is_vararg());
        report.finish()
    }
}

impl Diff for Method {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .child("Javadoc", self.javadoc(), other.javadoc())
            .list("Annotations", self.annotations(), other.annotations())
            .field("Visibility", &self.visibility(), &other.visibility())
            .field("Abstract", &self.is_abstract(), &other.is_abstract())
            .field("Static", &self.is_static(), &other.is_static())
            .field("Final", &self.is_final(), &other.is_final())
            .field("Return type", &self.return_type(), &other.return_type())
            .field("Name", &self.name(), &other.name())
            .list("Parameters", self.parameters(), other.parameters())
            .field("Throw types", self.throw_types(), other.throw_types())
            .field("Lines", &self.lines(), &other.lines());
        report.finish()
    }
}

impl Diff for Class {
    fn diff(&self, other: &Self) -> Vec<String> {
        let mut report = Report::new();
        report
            .field("Editable", &self.is_editable(), &other.is_editable())
            .field("Inner class", &self.is_inner_class(), &other.is_inner_class())
            .child(
                "Package declaration",
                self.package_declaration(),
                other.package_declaration(),
            )
            .list(
                "Import statements",
                self.import_statements(),
                other.import_statements(),
            )
            .child("Javadoc", self.javadoc(), other.javadoc())
            .list("Annotations", self.annotations(), other.annotations())
            .field("Visibility", &self.visibility(), &other.visibility())
            .field("Abstract", &self.is_abstract(), &other.is_abstract())
            .field("Static", &self.is_static(), &other.is_static())
            .field("Final", &self.is_final(), &other.is_final())
            .field("Class name", self.class_name(), other.class_name())
            .field(
                "Super class name",
                &self.super_class_name(),
                &other.super_class_name(),
            )
            .field(
                "Implemented interfaces",
                self.implements_interface_names(),
                other.implements_interface_names(),
            )
            .list(
                "Single line comments",
                self.single_line_comments(),
                other.single_line_comments(),
            )
            .list(
                "Multi line comments",
                self.multi_line_comments(),
                other.multi_line_comments(),
            )
            .list("Inner classes", self.inner_classes(), other.inner_classes())
            .list("Fields", self.fields(), other.fields())
            .list("Methods", self.methods(), other.methods())
            .list(
                "Static code blocks",
                self.static_code_blocks(),
                other.static_code_blocks(),
            )
            .field(
                "Inner elements order",
                self.inner_elements_order(),
                other.inner_elements_order(),
            );
        report.finish()
    }
}

impl Diff for CodeElement {
    fn diff(&self, other: &Self) -> Vec<String> {
        match (self, other) {
            (CodeElement::PackageDeclaration(a), CodeElement::PackageDeclaration(b)) => a.diff(b),
            (CodeElement::ImportStatement(a), CodeElement::ImportStatement(b)) => a.diff(b),
            (CodeElement::Javadoc(a), CodeElement::Javadoc(b)) => a.diff(b),
            (CodeElement::Annotation(a), CodeElement::Annotation(b)) => a.diff(b),
            (CodeElement::SingleLineComment(a), CodeElement::SingleLineComment(b)) => a.diff(b),
            (CodeElement::MultiLineComment(a), CodeElement::MultiLineComment(b)) => a.diff(b),
            (CodeElement::StaticCodeBlock(a), CodeElement::StaticCodeBlock(b)) => a.diff(b),
            (CodeElement::Field(a), CodeElement::Field(b)) => a.diff(b),
            (CodeElement::Parameter(a), CodeElement::Parameter(b)) => a.diff(b),
            (CodeElement::Method(a), CodeElement::Method(b)) => a.diff(b),
            (CodeElement::Class(a), CodeElement::Class(b)) => a.diff(b),
            (CodeElement::Type(a), CodeElement::Type(b)) => a.diff(b),
            (CodeElement::TypeParameter(a), CodeElement::TypeParameter(b)) => a.diff(b),
            _ => plain("Kind", &self.kind(), &other.kind()),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, ensure_same_editability, Problems};
use crate::{
    with_editable_all, Annotation, Field, ImportStatement, Javadoc, Method, MultiLineComment,
    Node, NodeKind, PackageDeclaration, SingleLineComment, StaticCodeBlock, ValidationError,
    Visibility,
};

const MISSING_CLASS_NAME: &str = "Must specify className!";
const MISSING_PACKAGE: &str = "Must specify packageName when not making an inner class!";
const INNER_WITH_PACKAGE: &str = "Inner classes cannot have a packageDeclaration!";
const INNER_WITH_IMPORTS: &str = "Inner classes cannot have importStatements!";
const STATIC_OUTER: &str = "Only inner classes can be static!";
const ABSTRACT_AND_FINAL: &str = "Classes cannot be both abstract and final!";
const ABSTRACT_METHOD_IN_CONCRETE: &str = "Abstract methods require an abstract class!";

/// The collection an [`InnerElement`] points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InnerElementKind {
    SingleLineComment,
    MultiLineComment,
    InnerClass,
    Field,
    Method,
    StaticCodeBlock,
}

impl InnerElementKind {
    pub const ALL: [InnerElementKind; 6] = [
        InnerElementKind::SingleLineComment,
        InnerElementKind::MultiLineComment,
        InnerElementKind::InnerClass,
        InnerElementKind::Field,
        InnerElementKind::Method,
        InnerElementKind::StaticCodeBlock,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InnerElementKind::SingleLineComment => "Single line comment",
            InnerElementKind::MultiLineComment => "Multi line comment",
            InnerElementKind::InnerClass => "Inner class",
            InnerElementKind::Field => "Field",
            InnerElementKind::Method => "Method",
            InnerElementKind::StaticCodeBlock => "Static code block",
        }
    }
}

/// One entry of a class's source-order ledger: the `index`-th element of the `kind` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InnerElement {
    pub kind: InnerElementKind,
    pub index: usize,
}

impl InnerElement {
    pub fn new(kind: InnerElementKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// A borrowed class body element, yielded in source order by [`Class::elements_in_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMember<'a> {
    SingleLineComment(&'a SingleLineComment),
    MultiLineComment(&'a MultiLineComment),
    InnerClass(&'a Class),
    Field(&'a Field),
    Method(&'a Method),
    StaticCodeBlock(&'a StaticCodeBlock),
}

impl ClassMember<'_> {
    pub fn kind(&self) -> InnerElementKind {
        match self {
            ClassMember::SingleLineComment(_) => InnerElementKind::SingleLineComment,
            ClassMember::MultiLineComment(_) => InnerElementKind::MultiLineComment,
            ClassMember::InnerClass(_) => InnerElementKind::InnerClass,
            ClassMember::Field(_) => InnerElementKind::Field,
            ClassMember::Method(_) => InnerElementKind::Method,
            ClassMember::StaticCodeBlock(_) => InnerElementKind::StaticCodeBlock,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, ClassMember::SingleLineComment(_) | ClassMember::MultiLineComment(_))
    }
}

/// A class declaration, top-level or nested.
///
/// Body elements live in one collection per kind; `inner_elements_order` records how they were
/// interleaved so that printing reproduces the original sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Class {
    editable: bool,
    is_inner_class: bool,
    package_declaration: Option<PackageDeclaration>,
    import_statements: Vec<Option<ImportStatement>>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    class_name: String,
    super_class_name: Option<String>,
    implements_interface_names: Vec<String>,
    single_line_comments: Vec<SingleLineComment>,
    multi_line_comments: Vec<MultiLineComment>,
    inner_classes: Vec<Class>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    static_code_blocks: Vec<StaticCodeBlock>,
    inner_elements_order: Vec<InnerElement>,
}

impl Class {
    pub fn builder() -> ClassBuilder {
        ClassBuilder::default()
    }

    pub fn is_inner_class(&self) -> bool {
        self.is_inner_class
    }

    pub fn package_declaration(&self) -> Option<&PackageDeclaration> {
        self.package_declaration.as_ref()
    }

    /// Imports in layout order; `None` marks a blank line.
    pub fn import_statements(&self) -> &[Option<ImportStatement>] {
        &self.import_statements
    }

    pub fn imports(&self) -> impl Iterator<Item = &ImportStatement> {
        self.import_statements.iter().flatten()
    }

    pub fn javadoc(&self) -> Option<&Javadoc> {
        self.javadoc.as_ref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn super_class_name(&self) -> Option<&str> {
        self.super_class_name.as_deref()
    }

    pub fn implements_interface_names(&self) -> &[String] {
        &self.implements_interface_names
    }

    pub fn single_line_comments(&self) -> &[SingleLineComment] {
        &self.single_line_comments
    }

    pub fn multi_line_comments(&self) -> &[MultiLineComment] {
        &self.multi_line_comments
    }

    pub fn inner_classes(&self) -> &[Class] {
        &self.inner_classes
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn static_code_blocks(&self) -> &[StaticCodeBlock] {
        &self.static_code_blocks
    }

    pub fn inner_elements_order(&self) -> &[InnerElement] {
        &self.inner_elements_order
    }

    pub fn inner_element(&self, element: InnerElement) -> Option<ClassMember<'_>> {
        let idx = element.index;
        Some(match element.kind {
            InnerElementKind::SingleLineComment => {
                ClassMember::SingleLineComment(self.single_line_comments.get(idx)?)
            }
            InnerElementKind::MultiLineComment => {
                ClassMember::MultiLineComment(self.multi_line_comments.get(idx)?)
            }
            InnerElementKind::InnerClass => ClassMember::InnerClass(self.inner_classes.get(idx)?),
            InnerElementKind::Field => ClassMember::Field(self.fields.get(idx)?),
            InnerElementKind::Method => ClassMember::Method(self.methods.get(idx)?),
            InnerElementKind::StaticCodeBlock => {
                ClassMember::StaticCodeBlock(self.static_code_blocks.get(idx)?)
            }
        })
    }

    /// Body elements in source order.
    pub fn elements_in_order(&self) -> impl Iterator<Item = ClassMember<'_>> {
        self.inner_elements_order
            .iter()
            .filter_map(|element| self.inner_element(*element))
    }

    fn collection_len(&self, kind: InnerElementKind) -> usize {
        match kind {
            InnerElementKind::SingleLineComment => self.single_line_comments.len(),
            InnerElementKind::MultiLineComment => self.multi_line_comments.len(),
            InnerElementKind::InnerClass => self.inner_classes.len(),
            InnerElementKind::Field => self.fields.len(),
            InnerElementKind::Method => self.methods.len(),
            InnerElementKind::StaticCodeBlock => self.static_code_blocks.len(),
        }
    }

    pub fn set_package_declaration(
        &mut self,
        package: Option<PackageDeclaration>,
    ) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_package(&mut problems, self.is_inner_class, package.as_ref());
        problems.child(self.editable, "Package declaration", package.as_ref());
        problems.finish()?;
        self.package_declaration = package;
        Ok(())
    }

    pub fn add_import(&mut self, import: ImportStatement) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        problems.require(!self.is_inner_class, INNER_WITH_IMPORTS);
        problems.child(self.editable, "Import statement", Some(&import));
        problems.finish()?;
        self.import_statements.push(Some(import));
        Ok(())
    }

    /// Appends a blank-line separator to the import list.
    pub fn add_import_separator(&mut self) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        problems.require(!self.is_inner_class, INNER_WITH_IMPORTS);
        problems.finish()?;
        self.import_statements.push(None);
        Ok(())
    }

    pub fn set_javadoc(&mut self, javadoc: Option<Javadoc>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        if let Some(javadoc) = &javadoc {
            ensure_same_editability(self, "Javadoc", javadoc)?;
        }
        self.javadoc = javadoc;
        Ok(())
    }

    pub fn add_annotation(&mut self, annotation: Annotation) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, "Annotation", &annotation)?;
        self.annotations.push(annotation);
        Ok(())
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.visibility = visibility;
        Ok(())
    }

    pub fn set_abstract(&mut self, is_abstract: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_abstract_final(&mut problems, is_abstract, self.is_final);
        check_abstract_methods(&mut problems, is_abstract, &self.methods);
        problems.finish()?;
        self.is_abstract = is_abstract;
        Ok(())
    }

    pub fn set_static(&mut self, is_static: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        problems.require(!is_static || self.is_inner_class, STATIC_OUTER);
        problems.finish()?;
        self.is_static = is_static;
        Ok(())
    }

    pub fn set_final(&mut self, is_final: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_abstract_final(&mut problems, self.is_abstract, is_final);
        problems.finish()?;
        self.is_final = is_final;
        Ok(())
    }

    pub fn set_class_name(&mut self, class_name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let class_name = class_name.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&class_name, MISSING_CLASS_NAME);
        problems.finish()?;
        self.class_name = class_name;
        Ok(())
    }

    pub fn set_super_class_name(&mut self, name: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_super_class(&mut problems, name.as_deref());
        problems.finish()?;
        self.super_class_name = name;
        Ok(())
    }

    pub fn add_interface_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let name = name.into();
        let mut problems = Problems::new(Self::KIND);
        check_interface(&mut problems, self.implements_interface_names.len(), &name);
        problems.finish()?;
        self.implements_interface_names.push(name);
        Ok(())
    }

    pub fn add_single_line_comment(
        &mut self,
        comment: SingleLineComment,
    ) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, InnerElementKind::SingleLineComment.label(), &comment)?;
        self.single_line_comments.push(comment);
        self.record(InnerElementKind::SingleLineComment);
        Ok(())
    }

    pub fn add_multi_line_comment(
        &mut self,
        comment: MultiLineComment,
    ) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, InnerElementKind::MultiLineComment.label(), &comment)?;
        self.multi_line_comments.push(comment);
        self.record(InnerElementKind::MultiLineComment);
        Ok(())
    }

    pub fn add_inner_class(&mut self, class: Class) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_inner_class(&mut problems, self.inner_classes.len(), &class);
        problems.child(self.editable, InnerElementKind::InnerClass.label(), Some(&class));
        problems.finish()?;
        self.inner_classes.push(class);
        self.record(InnerElementKind::InnerClass);
        Ok(())
    }

    pub fn add_field(&mut self, field: Field) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, InnerElementKind::Field.label(), &field)?;
        self.fields.push(field);
        self.record(InnerElementKind::Field);
        Ok(())
    }

    pub fn add_method(&mut self, method: Method) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_abstract_methods(&mut problems, self.is_abstract, std::slice::from_ref(&method));
        problems.child(self.editable, InnerElementKind::Method.label(), Some(&method));
        problems.finish()?;
        self.methods.push(method);
        self.record(InnerElementKind::Method);
        Ok(())
    }

    pub fn add_static_code_block(&mut self, block: StaticCodeBlock) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, InnerElementKind::StaticCodeBlock.label(), &block)?;
        self.static_code_blocks.push(block);
        self.record(InnerElementKind::StaticCodeBlock);
        Ok(())
    }

    fn record(&mut self, kind: InnerElementKind) {
        let index = self.collection_len(kind) - 1;
        self.inner_elements_order.push(InnerElement::new(kind, index));
    }

    fn check_order(&self, problems: &mut Problems) {
        let total: usize = InnerElementKind::ALL
            .iter()
            .map(|kind| self.collection_len(*kind))
            .sum();
        if self.inner_elements_order.len() != total {
            problems.push(format!(
                "innerElementsOrder has {} entries but the class has {total} inner elements!",
                self.inner_elements_order.len()
            ));
        }

        for kind in InnerElementKind::ALL {
            let mut seen = vec![0usize; self.collection_len(kind)];
            for (pos, element) in self.inner_elements_order.iter().enumerate() {
                if element.kind != kind {
                    continue;
                }
                match seen.get_mut(element.index) {
                    Some(count) => *count += 1,
                    None => problems.push(format!(
                        "innerElementsOrder #{} refers to missing {} #{}!",
                        pos + 1,
                        kind.label(),
                        element.index + 1
                    )),
                }
            }
            for (idx, count) in seen.iter().enumerate() {
                if *count != 1 {
                    problems.push(format!(
                        "{} #{} must appear exactly once in innerElementsOrder!",
                        kind.label(),
                        idx + 1
                    ));
                }
            }
        }
    }
}

fn check_package(problems: &mut Problems, is_inner_class: bool, package: Option<&PackageDeclaration>) {
    if is_inner_class {
        problems.require(package.is_none(), INNER_WITH_PACKAGE);
    } else {
        problems.require(package.is_some(), MISSING_PACKAGE);
    }
}

fn check_abstract_final(problems: &mut Problems, is_abstract: bool, is_final: bool) {
    problems.require(!(is_abstract && is_final), ABSTRACT_AND_FINAL);
}

fn check_abstract_methods(problems: &mut Problems, class_is_abstract: bool, methods: &[Method]) {
    if !class_is_abstract && methods.iter().any(Method::is_abstract) {
        problems.push(ABSTRACT_METHOD_IN_CONCRETE);
    }
}

fn check_super_class(problems: &mut Problems, name: Option<&str>) {
    if let Some(name) = name {
        problems.require_text(name, "Super class name must not be empty!");
    }
}

fn check_interface(problems: &mut Problems, idx: usize, name: &str) {
    if name.trim().is_empty() {
        problems.push(format!("Implemented interface #{} must not be empty!", idx + 1));
    }
}

fn check_inner_class(problems: &mut Problems, idx: usize, class: &Class) {
    if !class.is_inner_class {
        problems.push(format!("Inner class #{} must be marked as an inner class!", idx + 1));
    }
}

impl Node for Class {
    const KIND: NodeKind = NodeKind::Class;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            is_inner_class: self.is_inner_class,
            package_declaration: self
                .package_declaration
                .as_ref()
                .map(|package| package.with_editable(editable)),
            import_statements: self
                .import_statements
                .iter()
                .map(|entry| entry.as_ref().map(|import| import.with_editable(editable)))
                .collect(),
            javadoc: self.javadoc.as_ref().map(|doc| doc.with_editable(editable)),
            annotations: with_editable_all(&self.annotations, editable),
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            class_name: self.class_name.clone(),
            super_class_name: self.super_class_name.clone(),
            implements_interface_names: self.implements_interface_names.clone(),
            single_line_comments: with_editable_all(&self.single_line_comments, editable),
            multi_line_comments: with_editable_all(&self.multi_line_comments, editable),
            inner_classes: with_editable_all(&self.inner_classes, editable),
            fields: with_editable_all(&self.fields, editable),
            methods: with_editable_all(&self.methods, editable),
            static_code_blocks: with_editable_all(&self.static_code_blocks, editable),
            inner_elements_order: self.inner_elements_order.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&self.class_name, MISSING_CLASS_NAME);
        check_package(&mut problems, self.is_inner_class, self.package_declaration.as_ref());
        if self.is_inner_class {
            problems.require(self.import_statements.is_empty(), INNER_WITH_IMPORTS);
        }
        problems.require(!self.is_static || self.is_inner_class, STATIC_OUTER);
        check_abstract_final(&mut problems, self.is_abstract, self.is_final);
        check_abstract_methods(&mut problems, self.is_abstract, &self.methods);
        check_super_class(&mut problems, self.super_class_name.as_deref());
        for (idx, name) in self.implements_interface_names.iter().enumerate() {
            check_interface(&mut problems, idx, name);
        }
        for (idx, class) in self.inner_classes.iter().enumerate() {
            check_inner_class(&mut problems, idx, class);
        }
        self.check_order(&mut problems);

        problems.child(self.editable, "Package declaration", self.package_declaration.as_ref());
        problems.children(self.editable, "Import statement", self.imports());
        problems.child(self.editable, "Javadoc", self.javadoc.as_ref());
        problems.children(self.editable, "Annotation", &self.annotations);
        problems.children(
            self.editable,
            InnerElementKind::SingleLineComment.label(),
            &self.single_line_comments,
        );
        problems.children(
            self.editable,
            InnerElementKind::MultiLineComment.label(),
            &self.multi_line_comments,
        );
        problems.children(self.editable, InnerElementKind::InnerClass.label(), &self.inner_classes);
        problems.children(self.editable, InnerElementKind::Field.label(), &self.fields);
        problems.children(self.editable, InnerElementKind::Method.label(), &self.methods);
        problems.children(
            self.editable,
            InnerElementKind::StaticCodeBlock.label(),
            &self.static_code_blocks,
        );
        problems.finish()
    }
}

/// Accumulates a [`Class`]. Each element adder also appends to the source-order ledger, unless
/// an explicit order is supplied with [`ClassBuilder::inner_elements_order`].
#[derive(Debug, Clone, Default)]
pub struct ClassBuilder {
    editable: bool,
    is_inner_class: bool,
    package_declaration: Option<PackageDeclaration>,
    import_statements: Vec<Option<ImportStatement>>,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    class_name: String,
    super_class_name: Option<String>,
    implements_interface_names: Vec<String>,
    single_line_comments: Vec<SingleLineComment>,
    multi_line_comments: Vec<MultiLineComment>,
    inner_classes: Vec<Class>,
    fields: Vec<Field>,
    methods: Vec<Method>,
    static_code_blocks: Vec<StaticCodeBlock>,
    inner_elements_order: Vec<InnerElement>,
    explicit_order: Option<Vec<InnerElement>>,
}

impl ClassBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn is_inner_class(mut self, is_inner_class: bool) -> Self {
        self.is_inner_class = is_inner_class;
        self
    }

    pub fn package_declaration(mut self, package: PackageDeclaration) -> Self {
        self.package_declaration = Some(package);
        self
    }

    pub fn maybe_package_declaration(mut self, package: Option<PackageDeclaration>) -> Self {
        self.package_declaration = package;
        self
    }

    pub fn import(mut self, import: ImportStatement) -> Self {
        self.import_statements.push(Some(import));
        self
    }

    pub fn import_separator(mut self) -> Self {
        self.import_statements.push(None);
        self
    }

    pub fn import_statements(mut self, imports: Vec<Option<ImportStatement>>) -> Self {
        self.import_statements = imports;
        self
    }

    pub fn javadoc(mut self, javadoc: Javadoc) -> Self {
        self.javadoc = Some(javadoc);
        self
    }

    pub fn maybe_javadoc(mut self, javadoc: Option<Javadoc>) -> Self {
        self.javadoc = javadoc;
        self
    }

    pub fn annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    pub fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    pub fn is_abstract(mut self, is_abstract: bool) -> Self {
        self.is_abstract = is_abstract;
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn is_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn super_class_name(mut self, name: impl Into<String>) -> Self {
        self.super_class_name = Some(name.into());
        self
    }

    pub fn maybe_super_class_name(mut self, name: Option<String>) -> Self {
        self.super_class_name = name;
        self
    }

    pub fn interface_name(mut self, name: impl Into<String>) -> Self {
        self.implements_interface_names.push(name.into());
        self
    }

    pub fn implements_interface_names(mut self, names: Vec<String>) -> Self {
        self.implements_interface_names = names;
        self
    }

    pub fn single_line_comment(mut self, comment: SingleLineComment) -> Self {
        self.single_line_comments.push(comment);
        self.record(InnerElementKind::SingleLineComment, self.single_line_comments.len());
        self
    }

    pub fn multi_line_comment(mut self, comment: MultiLineComment) -> Self {
        self.multi_line_comments.push(comment);
        self.record(InnerElementKind::MultiLineComment, self.multi_line_comments.len());
        self
    }

    pub fn inner_class(mut self, class: Class) -> Self {
        self.inner_classes.push(class);
        self.record(InnerElementKind::InnerClass, self.inner_classes.len());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self.record(InnerElementKind::Field, self.fields.len());
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self.record(InnerElementKind::Method, self.methods.len());
        self
    }

    pub fn static_code_block(mut self, block: StaticCodeBlock) -> Self {
        self.static_code_blocks.push(block);
        self.record(InnerElementKind::StaticCodeBlock, self.static_code_blocks.len());
        self
    }

    /// Replaces the ledger built up by the element adders.
    pub fn inner_elements_order(mut self, order: Vec<InnerElement>) -> Self {
        self.explicit_order = Some(order);
        self
    }

    fn record(&mut self, kind: InnerElementKind, len: usize) {
        self.inner_elements_order.push(InnerElement::new(kind, len - 1));
    }

    pub fn build(self) -> Result<Class, ValidationError> {
        let node = Class {
            editable: self.editable,
            is_inner_class: self.is_inner_class,
            package_declaration: self.package_declaration,
            import_statements: self.import_statements,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            class_name: self.class_name,
            super_class_name: self.super_class_name,
            implements_interface_names: self.implements_interface_names,
            single_line_comments: self.single_line_comments,
            multi_line_comments: self.multi_line_comments,
            inner_classes: self.inner_classes,
            fields: self.fields,
            methods: self.methods,
            static_code_blocks: self.static_code_blocks,
            inner_elements_order: self.explicit_order.unwrap_or(self.inner_elements_order),
        };
        node.validate()?;
        Ok(node)
    }
}

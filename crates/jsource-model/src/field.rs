use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, ensure_same_editability, Problems};
use crate::{with_editable_all, Annotation, Javadoc, Node, NodeKind, ValidationError, Visibility};

const MISSING_TYPE: &str = "Must specify type!";
const MISSING_NAME: &str = "Must specify name!";

/// `[modifiers] Type name [= value];`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Field {
    editable: bool,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    field_type: String,
    name: String,
    value: Option<String>,
}

impl Field {
    pub fn builder() -> FieldBuilder {
        FieldBuilder::default()
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

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn is_final(&self) -> bool {
        self.is_final
    }

    /// Raw type text, e.g. `Map<String, Integer>`.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw initializer text, without the `=`.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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

    pub fn set_static(&mut self, is_static: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.is_static = is_static;
        Ok(())
    }

    pub fn set_final(&mut self, is_final: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.is_final = is_final;
        Ok(())
    }

    pub fn set_field_type(&mut self, field_type: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let field_type = field_type.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&field_type, MISSING_TYPE);
        problems.finish()?;
        self.field_type = field_type;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let name = name.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&name, MISSING_NAME);
        problems.finish()?;
        self.name = name;
        Ok(())
    }

    pub fn set_value(&mut self, value: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.value = value;
        Ok(())
    }
}

impl Node for Field {
    const KIND: NodeKind = NodeKind::Field;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            javadoc: self.javadoc.as_ref().map(|doc| doc.with_editable(editable)),
            annotations: with_editable_all(&self.annotations, editable),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&self.field_type, MISSING_TYPE);
        problems.require_text(&self.name, MISSING_NAME);
        problems.child(self.editable, "Javadoc", self.javadoc.as_ref());
        problems.children(self.editable, "Annotation", &self.annotations);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldBuilder {
    editable: bool,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    field_type: String,
    name: String,
    value: Option<String>,
}

impl FieldBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
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

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn is_final(mut self, is_final: bool) -> Self {
        self.is_final = is_final;
        self
    }

    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn maybe_value(mut self, value: Option<String>) -> Self {
        self.value = value;
        self
    }

    pub fn build(self) -> Result<Field, ValidationError> {
        let node = Field {
            editable: self.editable,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_static: self.is_static,
            is_final: self.is_final,
            field_type: self.field_type,
            name: self.name,
            value: self.value,
        };
        node.validate()?;
        Ok(node)
    }
}

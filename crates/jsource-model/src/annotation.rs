use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, Problems};
use crate::{Node, NodeKind, ValidationError};

const MISSING_NAME: &str = "Must specify annotation name!";

/// One `name = value` pair. The value is kept as raw source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationParameter {
    name: String,
    value: String,
}

impl AnnotationParameter {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// A bare value, which Java treats as the `value` parameter.
    pub fn value_only(value: impl Into<String>) -> Self {
        Self::new("value", value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// `@Name` or `@Name(a = 1, b = "x")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Annotation {
    editable: bool,
    name: String,
    canonical_name: Option<String>,
    parameters: Vec<AnnotationParameter>,
}

impl Annotation {
    pub fn builder() -> AnnotationBuilder {
        AnnotationBuilder::default()
    }

    /// The name as written in source.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fully qualified name, when known.
    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    pub fn parameters(&self) -> &[AnnotationParameter] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
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

    pub fn set_canonical_name(&mut self, name: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.canonical_name = name;
        Ok(())
    }

    pub fn add_parameter(&mut self, parameter: AnnotationParameter) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_parameter(&mut problems, self.parameters.len(), &parameter);
        problems.finish()?;
        self.parameters.push(parameter);
        Ok(())
    }
}

fn check_parameter(problems: &mut Problems, idx: usize, param: &AnnotationParameter) {
    if param.name.trim().is_empty() {
        problems.push(format!("Annotation parameter #{} must specify a name!", idx + 1));
    }
    if param.value.trim().is_empty() {
        problems.push(format!("Annotation parameter #{} must specify a value!", idx + 1));
    }
}

impl Node for Annotation {
    const KIND: NodeKind = NodeKind::Annotation;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&self.name, MISSING_NAME);
        for (idx, param) in self.parameters.iter().enumerate() {
            check_parameter(&mut problems, idx, param);
        }
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AnnotationBuilder {
    editable: bool,
    name: String,
    canonical_name: Option<String>,
    parameters: Vec<AnnotationParameter>,
}

impl AnnotationBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn canonical_name(mut self, name: impl Into<String>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(AnnotationParameter::new(name, value));
        self
    }

    pub fn parameters(mut self, parameters: Vec<AnnotationParameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn build(self) -> Result<Annotation, ValidationError> {
        let node = Annotation {
            editable: self.editable,
            name: self.name,
            canonical_name: self.canonical_name,
            parameters: self.parameters,
        };
        node.validate()?;
        Ok(node)
    }
}

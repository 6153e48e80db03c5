use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, ensure_same_editability, Problems};
use crate::{
    with_editable_all, Annotation, Javadoc, Node, NodeKind, Type, ValidationError, Visibility,
};

/// The declared type of a [`Parameter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    /// Type text exactly as written, e.g. `Map<String, Integer>`.
    Raw(String),
    Structured(Type),
}

impl ParameterType {
    fn with_editable(&self, editable: bool) -> Self {
        match self {
            ParameterType::Raw(text) => ParameterType::Raw(text.clone()),
            ParameterType::Structured(ty) => ParameterType::Structured(ty.with_editable(editable)),
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            ParameterType::Raw(text) => text.trim().is_empty(),
            ParameterType::Structured(ty) => ty.base_type().trim().is_empty(),
        }
    }
}

impl From<Type> for ParameterType {
    fn from(ty: Type) -> Self {
        ParameterType::Structured(ty)
    }
}

impl From<&str> for ParameterType {
    fn from(text: &str) -> Self {
        ParameterType::Raw(text.to_string())
    }
}

impl From<String> for ParameterType {
    fn from(text: String) -> Self {
        ParameterType::Raw(text)
    }
}

/// A method or constructor parameter. Varargs store the element type (`String` for `String...`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Parameter {
    editable: bool,
    param_type: ParameterType,
    name: String,
    is_vararg: bool,
}

impl Parameter {
    pub fn builder() -> ParameterBuilder {
        ParameterBuilder::default()
    }

    pub fn param_type(&self) -> &ParameterType {
        &self.param_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_vararg(&self) -> bool {
        self.is_vararg
    }

    pub fn set_param_type(&mut self, param_type: ParameterType) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_param_type(&mut problems, self.editable, &param_type);
        problems.finish()?;
        self.param_type = param_type;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let name = name.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&name, "Must specify parameter name!");
        problems.finish()?;
        self.name = name;
        Ok(())
    }

    pub fn set_vararg(&mut self, is_vararg: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.is_vararg = is_vararg;
        Ok(())
    }
}

fn check_param_type(problems: &mut Problems, editable: bool, param_type: &ParameterType) {
    problems.require(!param_type.is_blank(), "Must specify parameter type!");
    if let ParameterType::Structured(ty) = param_type {
        problems.child(editable, "Type", Some(ty));
    }
}

impl Node for Parameter {
    const KIND: NodeKind = NodeKind::Parameter;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            param_type: self.param_type.with_editable(editable),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        check_param_type(&mut problems, self.editable, &self.param_type);
        problems.require_text(&self.name, "Must specify parameter name!");
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParameterBuilder {
    editable: bool,
    param_type: Option<ParameterType>,
    name: String,
    is_vararg: bool,
}

impl ParameterBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn param_type(mut self, param_type: impl Into<ParameterType>) -> Self {
        self.param_type = Some(param_type.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_vararg(mut self, is_vararg: bool) -> Self {
        self.is_vararg = is_vararg;
        self
    }

    pub fn build(self) -> Result<Parameter, ValidationError> {
        let node = Parameter {
            editable: self.editable,
            param_type: self
                .param_type
                .unwrap_or_else(|| ParameterType::Raw(String::new())),
            name: self.name,
            is_vararg: self.is_vararg,
        };
        node.validate()?;
        Ok(node)
    }
}

/// A method, or a constructor when `return_type` is absent.
///
/// Constructors carry no name of their own; they take the name of the enclosing class when
/// printed. Abstract methods have no body (`lines == None`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Method {
    editable: bool,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    return_type: Option<String>,
    name: Option<String>,
    parameters: Vec<Parameter>,
    throw_types: Vec<String>,
    lines: Option<Vec<String>>,
}

impl Method {
    pub fn builder() -> MethodBuilder {
        MethodBuilder::default()
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

    pub fn return_type(&self) -> Option<&str> {
        self.return_type.as_deref()
    }

    pub fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn throw_types(&self) -> &[String] {
        &self.throw_types
    }

    /// Body lines, or `None` for a method without a body.
    pub fn lines(&self) -> Option<&[String]> {
        self.lines.as_deref()
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

    pub fn add_parameter(&mut self, parameter: Parameter) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, "Parameter", &parameter)?;
        self.parameters.push(parameter);
        Ok(())
    }

    pub fn add_throw_type(&mut self, throw_type: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let throw_type = throw_type.into();
        let mut problems = Problems::new(Self::KIND);
        check_throw_type(&mut problems, self.throw_types.len(), &throw_type);
        problems.finish()?;
        self.throw_types.push(throw_type);
        Ok(())
    }

    pub fn set_visibility(&mut self, visibility: Visibility) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.visibility = visibility;
        Ok(())
    }

    pub fn set_abstract(&mut self, is_abstract: bool) -> Result<(), ValidationError> {
        self.update_signature(|method| method.is_abstract = is_abstract)
    }

    pub fn set_static(&mut self, is_static: bool) -> Result<(), ValidationError> {
        self.update_signature(|method| method.is_static = is_static)
    }

    pub fn set_final(&mut self, is_final: bool) -> Result<(), ValidationError> {
        self.update_signature(|method| method.is_final = is_final)
    }

    pub fn set_return_type(&mut self, return_type: Option<String>) -> Result<(), ValidationError> {
        self.update_signature(|method| method.return_type = return_type)
    }

    pub fn set_name(&mut self, name: Option<String>) -> Result<(), ValidationError> {
        self.update_signature(|method| method.name = name)
    }

    pub fn set_lines(&mut self, lines: Option<Vec<String>>) -> Result<(), ValidationError> {
        self.update_signature(|method| method.lines = lines)
    }

    /// Applies `change` to the signature-related fields and keeps it only if the signature
    /// invariants still hold.
    fn update_signature(&mut self, change: impl FnOnce(&mut Signature)) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut signature = Signature {
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            return_type: self.return_type.take(),
            name: self.name.take(),
            lines: self.lines.take(),
        };
        let backup = signature.clone();
        change(&mut signature);

        let mut problems = Problems::new(Self::KIND);
        signature.check(&mut problems);
        let result = problems.finish();
        let signature = if result.is_ok() { signature } else { backup };

        self.is_abstract = signature.is_abstract;
        self.is_static = signature.is_static;
        self.is_final = signature.is_final;
        self.return_type = signature.return_type;
        self.name = signature.name;
        self.lines = signature.lines;
        result
    }
}

#[derive(Clone)]
struct Signature {
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    return_type: Option<String>,
    name: Option<String>,
    lines: Option<Vec<String>>,
}

impl Signature {
    fn check(&self, problems: &mut Problems) {
        match &self.return_type {
            None => {
                problems.require(self.name.is_none(), "Constructors must not specify a name!");
                problems.require(!self.is_abstract, "Constructors cannot be abstract!");
                problems.require(!self.is_static, "Constructors cannot be static!");
                problems.require(!self.is_final, "Constructors cannot be final!");
            }
            Some(return_type) => {
                problems.require_text(return_type, "Must specify returnType!");
                problems.require(
                    self.name.as_deref().is_some_and(|name| !name.trim().is_empty()),
                    "Must specify name when specifying a returnType!",
                );
            }
        }

        if self.is_abstract {
            problems.require(self.lines.is_none(), "Abstract methods cannot have a body!");
            problems.require(!self.is_static, "Abstract methods cannot be static!");
            problems.require(!self.is_final, "Abstract methods cannot be final!");
        } else {
            problems.require(self.lines.is_some(), "Non-abstract methods must have a body!");
        }
    }
}

fn check_throw_type(problems: &mut Problems, idx: usize, throw_type: &str) {
    if throw_type.trim().is_empty() {
        problems.push(format!("Throw type #{} must not be empty!", idx + 1));
    }
}

impl Node for Method {
    const KIND: NodeKind = NodeKind::Method;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            javadoc: self.javadoc.as_ref().map(|doc| doc.with_editable(editable)),
            annotations: with_editable_all(&self.annotations, editable),
            parameters: with_editable_all(&self.parameters, editable),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        let signature = Signature {
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            return_type: self.return_type.clone(),
            name: self.name.clone(),
            lines: self.lines.clone(),
        };
        signature.check(&mut problems);
        for (idx, throw_type) in self.throw_types.iter().enumerate() {
            check_throw_type(&mut problems, idx, throw_type);
        }
        problems.child(self.editable, "Javadoc", self.javadoc.as_ref());
        problems.children(self.editable, "Annotation", &self.annotations);
        problems.children(self.editable, "Parameter", &self.parameters);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct MethodBuilder {
    editable: bool,
    javadoc: Option<Javadoc>,
    annotations: Vec<Annotation>,
    visibility: Visibility,
    is_abstract: bool,
    is_static: bool,
    is_final: bool,
    return_type: Option<String>,
    name: Option<String>,
    parameters: Vec<Parameter>,
    throw_types: Vec<String>,
    lines: Option<Vec<String>>,
}

impl MethodBuilder {
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

    pub fn return_type(mut self, return_type: impl Into<String>) -> Self {
        self.return_type = Some(return_type.into());
        self
    }

    pub fn maybe_return_type(mut self, return_type: Option<String>) -> Self {
        self.return_type = return_type;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn maybe_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    pub fn throw_type(mut self, throw_type: impl Into<String>) -> Self {
        self.throw_types.push(throw_type.into());
        self
    }

    pub fn throw_types(mut self, throw_types: Vec<String>) -> Self {
        self.throw_types = throw_types;
        self
    }

    /// Sets the body. An empty iterator produces an empty body, not an abstract method.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn maybe_lines(mut self, lines: Option<Vec<String>>) -> Self {
        self.lines = lines;
        self
    }

    pub fn build(self) -> Result<Method, ValidationError> {
        let node = Method {
            editable: self.editable,
            javadoc: self.javadoc,
            annotations: self.annotations,
            visibility: self.visibility,
            is_abstract: self.is_abstract,
            is_static: self.is_static,
            is_final: self.is_final,
            return_type: self.return_type,
            name: self.name,
            parameters: self.parameters,
            throw_types: self.throw_types,
            lines: self.lines,
        };
        node.validate()?;
        Ok(node)
    }
}

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, ensure_same_editability, Problems};
use crate::{with_editable_all, Node, NodeKind, ValidationError};

const MISSING_BASE_TYPE: &str = "Must specify baseType!";
const MISSING_TYPE: &str = "Must specify type!";

/// A structured type expression such as `Map<String, List<Integer>>[]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Type {
    editable: bool,
    base_type: String,
    canonical_name: Option<String>,
    type_parameters: Vec<Type>,
    array_dimensions: usize,
}

impl Type {
    pub fn builder() -> TypeBuilder {
        TypeBuilder::default()
    }

    /// The type name as written, without generic arguments or array brackets.
    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    pub fn canonical_name(&self) -> Option<&str> {
        self.canonical_name.as_deref()
    }

    pub fn type_parameters(&self) -> &[Type] {
        &self.type_parameters
    }

    pub fn array_dimensions(&self) -> usize {
        self.array_dimensions
    }

    pub fn set_base_type(&mut self, base_type: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let base_type = base_type.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&base_type, MISSING_BASE_TYPE);
        problems.finish()?;
        self.base_type = base_type;
        Ok(())
    }

    pub fn set_canonical_name(&mut self, name: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.canonical_name = name;
        Ok(())
    }

    pub fn add_type_parameter(&mut self, parameter: Type) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        ensure_same_editability(self, "Type parameter", &parameter)?;
        self.type_parameters.push(parameter);
        Ok(())
    }

    pub fn set_array_dimensions(&mut self, dimensions: usize) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.array_dimensions = dimensions;
        Ok(())
    }
}

impl Node for Type {
    const KIND: NodeKind = NodeKind::Type;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            type_parameters: with_editable_all(&self.type_parameters, editable),
            ..self.clone()
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&self.base_type, MISSING_BASE_TYPE);
        problems.children(self.editable, "Type parameter", &self.type_parameters);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeBuilder {
    editable: bool,
    base_type: String,
    canonical_name: Option<String>,
    type_parameters: Vec<Type>,
    array_dimensions: usize,
}

impl TypeBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn base_type(mut self, base_type: impl Into<String>) -> Self {
        self.base_type = base_type.into();
        self
    }

    pub fn canonical_name(mut self, name: impl Into<String>) -> Self {
        self.canonical_name = Some(name.into());
        self
    }

    pub fn maybe_canonical_name(mut self, name: Option<String>) -> Self {
        self.canonical_name = name;
        self
    }

    pub fn type_parameter(mut self, parameter: Type) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn type_parameters(mut self, parameters: Vec<Type>) -> Self {
        self.type_parameters = parameters;
        self
    }

    pub fn array_dimensions(mut self, dimensions: usize) -> Self {
        self.array_dimensions = dimensions;
        self
    }

    pub fn build(self) -> Result<Type, ValidationError> {
        let node = Type {
            editable: self.editable,
            base_type: self.base_type,
            canonical_name: self.canonical_name,
            type_parameters: self.type_parameters,
            array_dimensions: self.array_dimensions,
        };
        node.validate()?;
        Ok(node)
    }
}

/// A generic type variable declaration: `T` or `T extends Comparable<T>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct TypeParameter {
    editable: bool,
    ty: Type,
    extends_type: Option<Type>,
}

impl TypeParameter {
    pub fn builder() -> TypeParameterBuilder {
        TypeParameterBuilder::default()
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn extends_type(&self) -> Option<&Type> {
        self.extends_type.as_ref()
    }

    pub fn set_extends_type(&mut self, extends: Option<Type>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        if let Some(extends) = &extends {
            ensure_same_editability(self, "Extends type", extends)?;
        }
        self.extends_type = extends;
        Ok(())
    }
}

impl Node for TypeParameter {
    const KIND: NodeKind = NodeKind::TypeParameter;

    fn is_editable(&self) -> bool {
        self.editable
    }

    fn with_editable(&self, editable: bool) -> Self {
        Self {
            editable,
            ty: self.ty.with_editable(editable),
            extends_type: self.extends_type.as_ref().map(|ty| ty.with_editable(editable)),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        let mut problems = Problems::new(Self::KIND);
        problems.child(self.editable, "Type", Some(&self.ty));
        problems.child(self.editable, "Extends type", self.extends_type.as_ref());
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TypeParameterBuilder {
    editable: bool,
    ty: Option<Type>,
    extends_type: Option<Type>,
}

impl TypeParameterBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn ty(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn extends_type(mut self, extends: Type) -> Self {
        self.extends_type = Some(extends);
        self
    }

    pub fn build(self) -> Result<TypeParameter, ValidationError> {
        let mut problems = Problems::new(NodeKind::TypeParameter);
        problems.require(self.ty.is_some(), MISSING_TYPE);
        problems.child(self.editable, "Type", self.ty.as_ref());
        problems.child(self.editable, "Extends type", self.extends_type.as_ref());
        problems.finish()?;

        let ty = self.ty.ok_or_else(|| {
            ValidationError::new(NodeKind::TypeParameter, vec![MISSING_TYPE.to_string()])
        })?;
        Ok(TypeParameter {
            editable: self.editable,
            ty,
            extends_type: self.extends_type,
        })
    }
}

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, Problems};
use crate::{Node, NodeKind, ValidationError};

const MISSING_PACKAGE_NAME: &str = "Must specify packageName!";
const MISSING_IMPORT_NAME: &str = "Must specify importName!";

/// `package a.b.c;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct PackageDeclaration {
    editable: bool,
    package_name: String,
}

impl PackageDeclaration {
    pub fn builder() -> PackageDeclarationBuilder {
        PackageDeclarationBuilder::default()
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn set_package_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let name = name.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&name, MISSING_PACKAGE_NAME);
        problems.finish()?;
        self.package_name = name;
        Ok(())
    }
}

impl Node for PackageDeclaration {
    const KIND: NodeKind = NodeKind::PackageDeclaration;

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
        problems.require_text(&self.package_name, MISSING_PACKAGE_NAME);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PackageDeclarationBuilder {
    editable: bool,
    package_name: String,
}

impl PackageDeclarationBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = name.into();
        self
    }

    pub fn build(self) -> Result<PackageDeclaration, ValidationError> {
        let node = PackageDeclaration {
            editable: self.editable,
            package_name: self.package_name,
        };
        node.validate()?;
        Ok(node)
    }
}

/// `import [static] a.b.C;`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct ImportStatement {
    editable: bool,
    is_static: bool,
    import_name: String,
}

impl ImportStatement {
    pub fn builder() -> ImportStatementBuilder {
        ImportStatementBuilder::default()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn import_name(&self) -> &str {
        &self.import_name
    }

    pub fn set_static(&mut self, is_static: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.is_static = is_static;
        Ok(())
    }

    pub fn set_import_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let name = name.into();
        let mut problems = Problems::new(Self::KIND);
        problems.require_text(&name, MISSING_IMPORT_NAME);
        problems.finish()?;
        self.import_name = name;
        Ok(())
    }
}

impl Node for ImportStatement {
    const KIND: NodeKind = NodeKind::ImportStatement;

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
        problems.require_text(&self.import_name, MISSING_IMPORT_NAME);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportStatementBuilder {
    editable: bool,
    is_static: bool,
    import_name: String,
}

impl ImportStatementBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn is_static(mut self, is_static: bool) -> Self {
        self.is_static = is_static;
        self
    }

    pub fn import_name(mut self, name: impl Into<String>) -> Self {
        self.import_name = name.into();
        self
    }

    pub fn build(self) -> Result<ImportStatement, ValidationError> {
        let node = ImportStatement {
            editable: self.editable,
            is_static: self.is_static,
            import_name: self.import_name,
        };
        node.validate()?;
        Ok(node)
    }
}

/// Reorders an import list into its canonical layout.
///
/// `None` entries are blank-line separators. Regular imports come first, then static imports,
/// with exactly one separator between the two groups. Within a group the relative order is kept,
/// separators are collapsed, and leading/trailing separators are dropped. The function is
/// idempotent.
pub fn canonical_import_layout(entries: &[Option<ImportStatement>]) -> Vec<Option<ImportStatement>> {
    let regular = import_group(entries, false);
    let statics = import_group(entries, true);

    let mut out = regular;
    if !out.is_empty() && !statics.is_empty() {
        out.push(None);
    }
    out.extend(statics);
    out
}

fn import_group(entries: &[Option<ImportStatement>], is_static: bool) -> Vec<Option<ImportStatement>> {
    let mut out: Vec<Option<ImportStatement>> = Vec::new();
    let mut pending_separator = false;
    for entry in entries {
        match entry {
            None => pending_separator = !out.is_empty(),
            Some(import) if import.is_static() == is_static => {
                if pending_separator {
                    out.push(None);
                    pending_separator = false;
                }
                out.push(Some(import.clone()));
            }
            Some(_) => {}
        }
    }
    out
}

use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, Problems};
use crate::{Node, NodeKind, ValidationError};

/// A `@param name description` or `@throws Type description` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JavadocEntry {
    name: String,
    description: String,
}

impl JavadocEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// A `/** ... */` documentation comment.
///
/// `condensed` records a preference for the single-line `/** text */` form. The printer only
/// honours it while the javadoc has at most one content line and no tags.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct Javadoc {
    editable: bool,
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<JavadocEntry>,
    return_val: Option<String>,
    throws_info: Vec<JavadocEntry>,
}

impl Javadoc {
    pub fn builder() -> JavadocBuilder {
        JavadocBuilder::default()
    }

    pub fn is_condensed(&self) -> bool {
        self.condensed
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn since(&self) -> Option<&str> {
        self.since.as_deref()
    }

    pub fn params(&self) -> &[JavadocEntry] {
        &self.params
    }

    pub fn return_val(&self) -> Option<&str> {
        self.return_val.as_deref()
    }

    pub fn throws_info(&self) -> &[JavadocEntry] {
        &self.throws_info
    }

    /// `true` when no `@` tag section is populated.
    pub fn has_no_tags(&self) -> bool {
        self.author.is_none()
            && self.version.is_none()
            && self.since.is_none()
            && self.params.is_empty()
            && self.return_val.is_none()
            && self.throws_info.is_empty()
    }

    pub fn set_condensed(&mut self, condensed: bool) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.condensed = condensed;
        Ok(())
    }

    pub fn set_content(&mut self, content: Vec<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.content = content;
        Ok(())
    }

    pub fn add_content_line(&mut self, line: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.content.push(line.into());
        Ok(())
    }

    pub fn set_author(&mut self, author: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.author = author;
        Ok(())
    }

    pub fn set_version(&mut self, version: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.version = version;
        Ok(())
    }

    pub fn set_since(&mut self, since: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.since = since;
        Ok(())
    }

    pub fn add_param(&mut self, param: JavadocEntry) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_entry(&mut problems, "@param", self.params.len(), &param);
        problems.finish()?;
        self.params.push(param);
        Ok(())
    }

    pub fn set_return_val(&mut self, return_val: Option<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.return_val = return_val;
        Ok(())
    }

    pub fn add_throws(&mut self, throws: JavadocEntry) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let mut problems = Problems::new(Self::KIND);
        check_entry(&mut problems, "@throws", self.throws_info.len(), &throws);
        problems.finish()?;
        self.throws_info.push(throws);
        Ok(())
    }
}

fn check_entry(problems: &mut Problems, tag: &str, idx: usize, entry: &JavadocEntry) {
    if entry.name.trim().is_empty() {
        problems.push(format!("{tag} #{} must specify a name!", idx + 1));
    }
}

impl Node for Javadoc {
    const KIND: NodeKind = NodeKind::Javadoc;

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
        for (idx, param) in self.params.iter().enumerate() {
            check_entry(&mut problems, "@param", idx, param);
        }
        for (idx, throws) in self.throws_info.iter().enumerate() {
            check_entry(&mut problems, "@throws", idx, throws);
        }
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct JavadocBuilder {
    editable: bool,
    condensed: bool,
    content: Vec<String>,
    author: Option<String>,
    version: Option<String>,
    since: Option<String>,
    params: Vec<JavadocEntry>,
    return_val: Option<String>,
    throws_info: Vec<JavadocEntry>,
}

impl JavadocBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn condensed(mut self, condensed: bool) -> Self {
        self.condensed = condensed;
        self
    }

    pub fn content_line(mut self, line: impl Into<String>) -> Self {
        self.content.push(line.into());
        self
    }

    pub fn content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn since(mut self, since: impl Into<String>) -> Self {
        self.since = Some(since.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.params.push(JavadocEntry::new(name, description));
        self
    }

    pub fn return_val(mut self, description: impl Into<String>) -> Self {
        self.return_val = Some(description.into());
        self
    }

    pub fn throws(mut self, type_name: impl Into<String>, description: impl Into<String>) -> Self {
        self.throws_info.push(JavadocEntry::new(type_name, description));
        self
    }

    pub fn build(self) -> Result<Javadoc, ValidationError> {
        let node = Javadoc {
            editable: self.editable,
            condensed: self.condensed,
            content: self.content,
            author: self.author,
            version: self.version,
            since: self.since,
            params: self.params,
            return_val: self.return_val,
            throws_info: self.throws_info,
        };
        node.validate()?;
        Ok(node)
    }
}

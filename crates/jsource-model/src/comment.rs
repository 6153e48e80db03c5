use serde::{Deserialize, Serialize};

use crate::validation::{ensure_editable, Problems};
use crate::{Node, NodeKind, ValidationError};

/// `// content`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct SingleLineComment {
    editable: bool,
    content: String,
}

impl SingleLineComment {
    pub fn builder() -> SingleLineCommentBuilder {
        SingleLineCommentBuilder::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        let content = content.into();
        let mut problems = Problems::new(Self::KIND);
        check_single_line(&mut problems, &content);
        problems.finish()?;
        self.content = content;
        Ok(())
    }
}

fn check_single_line(problems: &mut Problems, content: &str) {
    problems.require(
        !content.contains('\n'),
        "Single line comments cannot contain line breaks!",
    );
}

impl Node for SingleLineComment {
    const KIND: NodeKind = NodeKind::SingleLineComment;

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
        check_single_line(&mut problems, &self.content);
        problems.finish()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SingleLineCommentBuilder {
    editable: bool,
    content: String,
}

impl SingleLineCommentBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn build(self) -> Result<SingleLineComment, ValidationError> {
        let node = SingleLineComment {
            editable: self.editable,
            content: self.content,
        };
        node.validate()?;
        Ok(node)
    }
}

/// `/* ... */`, one entry per line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct MultiLineComment {
    editable: bool,
    content: Vec<String>,
}

impl MultiLineComment {
    pub fn builder() -> MultiLineCommentBuilder {
        MultiLineCommentBuilder::default()
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn set_content(&mut self, content: Vec<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.content = content;
        Ok(())
    }

    pub fn add_line(&mut self, line: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.content.push(line.into());
        Ok(())
    }
}

impl Node for MultiLineComment {
    const KIND: NodeKind = NodeKind::MultiLineComment;

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
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MultiLineCommentBuilder {
    editable: bool,
    content: Vec<String>,
}

impl MultiLineCommentBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
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

    pub fn build(self) -> Result<MultiLineComment, ValidationError> {
        let node = MultiLineComment {
            editable: self.editable,
            content: self.content,
        };
        node.validate()?;
        Ok(node)
    }
}

/// `static { ... }`. Lines carry their own relative indentation as leading tabs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(remote = "Self")]
pub struct StaticCodeBlock {
    editable: bool,
    lines: Vec<String>,
}

impl StaticCodeBlock {
    pub fn builder() -> StaticCodeBlockBuilder {
        StaticCodeBlockBuilder::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn set_lines(&mut self, lines: Vec<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.lines = lines;
        Ok(())
    }

    pub fn add_line(&mut self, line: impl Into<String>) -> Result<(), ValidationError> {
        ensure_editable(self)?;
        self.lines.push(line.into());
        Ok(())
    }
}

impl Node for StaticCodeBlock {
    const KIND: NodeKind = NodeKind::StaticCodeBlock;

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
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCodeBlockBuilder {
    editable: bool,
    lines: Vec<String>,
}

impl StaticCodeBlockBuilder {
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<StaticCodeBlock, ValidationError> {
        let node = StaticCodeBlock {
            editable: self.editable,
            lines: self.lines,
        };
        node.validate()?;
        Ok(node)
    }
}

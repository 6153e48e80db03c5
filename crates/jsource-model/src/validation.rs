//! Aggregated validation for builders and editable setters.
//!
//! Validation is best-effort: every check runs and every violated invariant is reported in one
//! [`ValidationError`], mirroring how configuration validation collects diagnostics in one pass.

use std::fmt;

use thiserror::Error;

use crate::{Node, NodeKind};

/// Every invariant violation found while building or mutating a node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to build {kind}:{}", render_messages(.messages))]
pub struct ValidationError {
    kind: NodeKind,
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(kind: NodeKind, messages: Vec<String>) -> Self {
        Self { kind, messages }
    }

    pub(crate) fn read_only(kind: NodeKind) -> Self {
        Self::new(kind, vec![format!("{kind} is read-only!")])
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

fn render_messages(messages: &[String]) -> String {
    let mut out = String::new();
    for message in messages {
        out.push_str("\n\t");
        out.push_str(message);
    }
    out
}

/// Accumulator used by `validate` implementations.
pub(crate) struct Problems {
    kind: NodeKind,
    messages: Vec<String>,
}

impl Problems {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            messages: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub(crate) fn require(&mut self, ok: bool, message: &str) {
        if !ok {
            self.push(message);
        }
    }

    pub(crate) fn require_text(&mut self, text: &str, message: &str) {
        self.require(!text.trim().is_empty(), message);
    }

    /// Checks that an optional child shares the parent's editability.
    pub(crate) fn child<T: Node>(&mut self, parent_editable: bool, label: &str, child: Option<&T>) {
        if let Some(child) = child {
            if child.is_editable() != parent_editable {
                self.push(format!(
                    "{label} is {} but the {} is {}!",
                    Editability(child.is_editable()),
                    self.kind,
                    Editability(parent_editable)
                ));
            }
        }
    }

    /// Checks that every child of a collection shares the parent's editability.
    pub(crate) fn children<'a, T, I>(&mut self, parent_editable: bool, label: &str, children: I)
    where
        T: Node + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (idx, child) in children.into_iter().enumerate() {
            if child.is_editable() != parent_editable {
                self.push(format!(
                    "{label} #{} is {} but the {} is {}!",
                    idx + 1,
                    Editability(child.is_editable()),
                    self.kind,
                    Editability(parent_editable)
                ));
            }
        }
    }

    pub(crate) fn finish(self) -> Result<(), ValidationError> {
        if self.messages.is_empty() {
            return Ok(());
        }
        tracing::trace!(
            target = "jsource.model",
            kind = %self.kind,
            problems = self.messages.len(),
            "validation failed"
        );
        Err(ValidationError::new(self.kind, self.messages))
    }
}

struct Editability(bool);

impl fmt::Display for Editability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 {
            f.write_str("editable")
        } else {
            f.write_str("read-only")
        }
    }
}

/// Rejects mutation of read-only nodes.
pub(crate) fn ensure_editable<N: Node>(node: &N) -> Result<(), ValidationError> {
    if node.is_editable() {
        Ok(())
    } else {
        Err(ValidationError::read_only(N::KIND))
    }
}

/// Rejects adding a child whose editability differs from the parent's.
pub(crate) fn ensure_same_editability<P: Node, C: Node>(
    parent: &P,
    label: &str,
    child: &C,
) -> Result<(), ValidationError> {
    let mut problems = Problems::new(P::KIND);
    problems.child(parent.is_editable(), label, Some(child));
    problems.finish()
}

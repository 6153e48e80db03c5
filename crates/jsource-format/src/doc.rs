//! A small document model for line-oriented output.
//!
//! Canonical Java text never reflows, so the model only needs text, concatenation, hard line
//! breaks and indentation:
//! - [`Doc`] is a composable document tree.
//! - [`print`] renders it with an explicit command stack, emitting the indentation of a line
//!   when the line break before it is printed.
//!
//! Trailing spaces and tabs are trimmed at every line break, so blank lines inside indented
//! blocks come out empty.

use std::borrow::Cow;
use std::rc::Rc;

use crate::IndentStyle;

/// Rendering configuration for [`print`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintConfig {
    pub indent_style: IndentStyle,
    /// Spaces per level when `indent_style` is [`IndentStyle::Spaces`].
    pub indent_width: usize,
    pub newline: &'static str,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            indent_style: IndentStyle::Tabs,
            indent_width: 4,
            newline: "\n",
        }
    }
}

#[derive(Debug)]
enum DocKind<'a> {
    Nil,
    Text(Cow<'a, str>),
    Concat(Vec<Doc<'a>>),
    /// One more indentation level for the line breaks inside.
    Indent(Doc<'a>),
    Hardline,
}

/// A composable document. Cheap to clone.
#[derive(Clone, Debug)]
pub struct Doc<'a>(Rc<DocKind<'a>>);

impl<'a> Doc<'a> {
    fn new(kind: DocKind<'a>) -> Self {
        Self(Rc::new(kind))
    }

    fn kind(&self) -> &DocKind<'a> {
        self.0.as_ref()
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self.kind(), DocKind::Nil)
    }

    /// An empty document.
    pub fn nil() -> Self {
        Self::new(DocKind::Nil)
    }

    /// A text fragment. It must not contain line breaks.
    pub fn text<T>(text: T) -> Self
    where
        T: Into<Cow<'a, str>>,
    {
        Self::new(DocKind::Text(text.into()))
    }

    /// Concatenate documents in order.
    ///
    /// Empty docs are discarded and nested concatenations are flattened.
    pub fn concat<I>(docs: I) -> Self
    where
        I: IntoIterator<Item = Doc<'a>>,
    {
        let mut parts = Vec::new();
        for doc in docs {
            match doc.kind() {
                DocKind::Nil => {}
                DocKind::Concat(inner) => parts.extend(inner.iter().cloned()),
                _ => parts.push(doc),
            }
        }

        match parts.pop() {
            None => Self::nil(),
            Some(only) if parts.is_empty() => only,
            Some(last) => {
                parts.push(last);
                Self::new(DocKind::Concat(parts))
            }
        }
    }

    /// Increase indentation by one level for contained line breaks.
    pub fn indent(self) -> Self {
        Self::new(DocKind::Indent(self))
    }

    /// Increase indentation by `levels`.
    pub fn indent_by(self, levels: usize) -> Self {
        (0..levels).fold(self, |doc, _| doc.indent())
    }

    /// A line break followed by the current indentation.
    pub fn hardline() -> Self {
        Self::new(DocKind::Hardline)
    }

    /// Join `docs` with `separator` between each element.
    pub fn join<I>(separator: Doc<'a>, docs: I) -> Self
    where
        I: IntoIterator<Item = Doc<'a>>,
    {
        let mut parts = Vec::new();
        for doc in docs.into_iter() {
            if doc.is_nil() {
                continue;
            }
            if !parts.is_empty() {
                parts.push(separator.clone());
            }
            parts.push(doc);
        }
        Self::concat(parts)
    }
}

struct Command<'a> {
    indent: usize,
    doc: Doc<'a>,
}

/// Render `doc` to a `String`.
#[must_use]
pub fn print(doc: Doc<'_>, config: PrintConfig) -> String {
    let mut out = String::new();
    let mut stack = vec![Command { indent: 0, doc }];

    while let Some(Command { indent, doc }) = stack.pop() {
        match doc.kind() {
            DocKind::Nil => {}
            DocKind::Text(text) => out.push_str(text),
            DocKind::Concat(parts) => {
                for part in parts.iter().rev() {
                    stack.push(Command {
                        indent,
                        doc: part.clone(),
                    });
                }
            }
            DocKind::Indent(inner) => stack.push(Command {
                indent: indent.saturating_add(1),
                doc: inner.clone(),
            }),
            DocKind::Hardline => {
                trim_trailing_whitespace(&mut out);
                out.push_str(config.newline);
                push_indent(&mut out, indent, config);
            }
        }
    }

    trim_trailing_whitespace(&mut out);
    out
}

fn push_indent(out: &mut String, levels: usize, config: PrintConfig) {
    match config.indent_style {
        IndentStyle::Tabs => out.extend(std::iter::repeat('\t').take(levels)),
        IndentStyle::Spaces => {
            out.extend(std::iter::repeat(' ').take(levels.saturating_mul(config.indent_width)))
        }
    }
}

fn trim_trailing_whitespace(out: &mut String) {
    while matches!(out.as_bytes().last(), Some(b' ' | b'\t')) {
        out.pop();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn indentation_applies_after_line_breaks() {
        let doc = Doc::concat([
            Doc::text("a {"),
            Doc::concat([Doc::hardline(), Doc::text("b"), Doc::hardline(), Doc::text("c")])
                .indent(),
            Doc::hardline(),
            Doc::text("}"),
        ]);
        assert_eq!(print(doc.clone(), PrintConfig::default()), "a {\n\tb\n\tc\n}");

        let spaces = PrintConfig {
            indent_style: IndentStyle::Spaces,
            indent_width: 2,
            newline: "\r\n",
        };
        assert_eq!(print(doc, spaces), "a {\r\n  b\r\n  c\r\n}");
    }

    #[test]
    fn blank_lines_carry_no_indentation() {
        let doc = Doc::concat([
            Doc::text("x"),
            Doc::concat([Doc::hardline(), Doc::hardline(), Doc::text("y")]).indent_by(2),
        ]);
        assert_eq!(print(doc, PrintConfig::default()), "x\n\n\t\ty");
    }

    #[test]
    fn join_skips_nil() {
        let doc = Doc::join(Doc::text(", "), [Doc::text("a"), Doc::nil(), Doc::text("b")]);
        assert_eq!(print(doc, PrintConfig::default()), "a, b");
    }
}

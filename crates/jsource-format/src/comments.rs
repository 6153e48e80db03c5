use jsource_model::{Annotation, Javadoc, MultiLineComment, SingleLineComment};

use crate::Doc;

/// `/** text */` when condensed and tag-free, block form otherwise.
pub(crate) fn javadoc_doc(javadoc: &Javadoc) -> Doc<'_> {
    let content = javadoc.content();
    if javadoc.is_condensed() && content.len() <= 1 && javadoc.has_no_tags() {
        return match content.first() {
            Some(line) if !line.is_empty() => Doc::concat([
                Doc::text("/** "),
                Doc::text(line.as_str()),
                Doc::text(" */"),
            ]),
            _ => Doc::text("/** */"),
        };
    }

    let mut lines: Vec<String> = content.to_vec();
    let mut tags = Vec::new();
    if let Some(author) = javadoc.author() {
        tags.push(tag_line("@author", &[author]));
    }
    if let Some(version) = javadoc.version() {
        tags.push(tag_line("@version", &[version]));
    }
    if let Some(since) = javadoc.since() {
        tags.push(tag_line("@since", &[since]));
    }
    for param in javadoc.params() {
        tags.push(tag_line("@param", &[param.name(), param.description()]));
    }
    if let Some(return_val) = javadoc.return_val() {
        tags.push(tag_line("@return", &[return_val]));
    }
    for throws in javadoc.throws_info() {
        tags.push(tag_line("@throws", &[throws.name(), throws.description()]));
    }
    if !lines.is_empty() && !tags.is_empty() {
        lines.push(String::new());
    }
    lines.extend(tags);
    star_block("/**", lines)
}

fn tag_line(tag: &str, parts: &[&str]) -> String {
    let mut line = tag.to_string();
    for part in parts.iter().filter(|part| !part.is_empty()) {
        line.push(' ');
        line.push_str(part);
    }
    line
}

/// `open`, one ` * line` per line (` *` when blank), then ` */`.
fn star_block<'a>(open: &'static str, lines: Vec<String>) -> Doc<'a> {
    let mut parts = vec![Doc::text(open)];
    for line in lines {
        parts.push(Doc::hardline());
        if line.is_empty() {
            parts.push(Doc::text(" *"));
        } else {
            parts.push(Doc::text(format!(" * {line}")));
        }
    }
    parts.push(Doc::hardline());
    parts.push(Doc::text(" */"));
    Doc::concat(parts)
}

pub(crate) fn single_line_doc(comment: &SingleLineComment) -> Doc<'_> {
    if comment.content().is_empty() {
        Doc::text("//")
    } else {
        Doc::concat([Doc::text("// "), Doc::text(comment.content())])
    }
}

pub(crate) fn multi_line_doc(comment: &MultiLineComment) -> Doc<'_> {
    match comment.content() {
        [] => Doc::text("/* */"),
        [line] if line.is_empty() => Doc::text("/* */"),
        [line] => Doc::concat([Doc::text("/* "), Doc::text(line.as_str()), Doc::text(" */")]),
        lines => star_block("/*", lines.to_vec()),
    }
}

/// `@Name` or `@Name(a = x, b = y)`.
pub(crate) fn annotation_doc(annotation: &Annotation) -> Doc<'_> {
    if annotation.parameters().is_empty() {
        return Doc::concat([Doc::text("@"), Doc::text(annotation.name())]);
    }
    let parameters = annotation.parameters().iter().map(|parameter| {
        Doc::concat([
            Doc::text(parameter.name()),
            Doc::text(" = "),
            Doc::text(parameter.value()),
        ])
    });
    Doc::concat([
        Doc::text("@"),
        Doc::text(annotation.name()),
        Doc::text("("),
        Doc::join(Doc::text(", "), parameters),
        Doc::text(")"),
    ])
}

/// Javadoc and annotations, each followed by a line break.
pub(crate) fn leading_doc<'a>(javadoc: Option<&'a Javadoc>, annotations: &'a [Annotation]) -> Doc<'a> {
    let mut parts = Vec::new();
    if let Some(javadoc) = javadoc {
        parts.push(javadoc_doc(javadoc));
        parts.push(Doc::hardline());
    }
    for annotation in annotations {
        parts.push(annotation_doc(annotation));
        parts.push(Doc::hardline());
    }
    Doc::concat(parts)
}

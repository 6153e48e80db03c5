use jsource_model::{Class, ClassMember, ImportStatement, InnerElementKind, PackageDeclaration};

use crate::comments::{leading_doc, multi_line_doc, single_line_doc};
use crate::members::{field_doc, method_doc, modifiers_doc, static_block_doc};
use crate::Doc;

pub(crate) fn package_doc(package: &PackageDeclaration) -> Doc<'_> {
    Doc::concat([
        Doc::text("package "),
        Doc::text(package.package_name()),
        Doc::text(";"),
    ])
}

pub(crate) fn import_doc(import: &ImportStatement) -> Doc<'_> {
    Doc::concat([
        Doc::text(if import.is_static() {
            "import static "
        } else {
            "import "
        }),
        Doc::text(import.import_name()),
        Doc::text(";"),
    ])
}

/// Package, imports, then the declaration. A `None` import slot prints as a blank line.
pub(crate) fn class_doc(class: &Class) -> Doc<'_> {
    let mut parts = Vec::new();
    if let Some(package) = class.package_declaration() {
        parts.push(package_doc(package));
        parts.push(Doc::hardline());
        parts.push(Doc::hardline());
    }
    if !class.import_statements().is_empty() {
        for slot in class.import_statements() {
            if let Some(import) = slot {
                parts.push(import_doc(import));
            }
            parts.push(Doc::hardline());
        }
        parts.push(Doc::hardline());
    }
    parts.push(declaration_doc(class));
    Doc::concat(parts)
}

fn declaration_doc(class: &Class) -> Doc<'_> {
    let mut header = vec![
        leading_doc(class.javadoc(), class.annotations()),
        modifiers_doc(
            class.visibility(),
            class.is_static(),
            class.is_final(),
            class.is_abstract(),
        ),
        Doc::text("class "),
        Doc::text(class.class_name()),
    ];
    if let Some(super_class) = class.super_class_name() {
        header.push(Doc::text(" extends "));
        header.push(Doc::text(super_class));
    }
    if !class.implements_interface_names().is_empty() {
        header.push(Doc::text(" implements "));
        header.push(Doc::text(class.implements_interface_names().join(", ")));
    }
    header.push(Doc::text(" {"));

    Doc::concat([
        Doc::concat(header),
        body_doc(class).indent(),
        Doc::hardline(),
        Doc::text("}"),
    ])
}

/// Members in source order. A blank line separates members, except after a comment and
/// between consecutive fields.
fn body_doc(class: &Class) -> Doc<'_> {
    let mut parts = Vec::new();
    let mut previous: Option<InnerElementKind> = None;
    for member in class.elements_in_order() {
        let kind = member.kind();
        if let Some(previous) = previous {
            let after_comment = matches!(
                previous,
                InnerElementKind::SingleLineComment | InnerElementKind::MultiLineComment
            );
            let field_run = previous == InnerElementKind::Field && kind == InnerElementKind::Field;
            if !after_comment && !field_run {
                parts.push(Doc::hardline());
            }
        }
        parts.push(Doc::hardline());
        parts.push(member_doc(member, class.class_name()));
        previous = Some(kind);
    }
    Doc::concat(parts)
}

fn member_doc<'a>(member: ClassMember<'a>, class_name: &'a str) -> Doc<'a> {
    match member {
        ClassMember::SingleLineComment(comment) => single_line_doc(comment),
        ClassMember::MultiLineComment(comment) => multi_line_doc(comment),
        ClassMember::InnerClass(class) => declaration_doc(class),
        ClassMember::Field(field) => field_doc(field),
        ClassMember::Method(method) => method_doc(method, class_name),
        ClassMember::StaticCodeBlock(block) => static_block_doc(block),
    }
}

use jsource_model::{
    Field, Method, Parameter, ParameterType, StaticCodeBlock, Type, TypeParameter, Visibility,
};

use crate::comments::leading_doc;
use crate::{Doc, FormatConfig};

/// Name printed for a constructor rendered outside of its class.
const CONSTRUCTOR_PLACEHOLDER: &str = "<init>";

/// Modifier keywords in canonical order, each followed by a space.
pub(crate) fn modifiers_doc<'a>(
    visibility: Visibility,
    is_static: bool,
    is_final: bool,
    is_abstract: bool,
) -> Doc<'a> {
    let keywords = [
        visibility.keyword(),
        is_static.then_some("static"),
        is_final.then_some("final"),
        is_abstract.then_some("abstract"),
    ];
    Doc::concat(
        keywords
            .into_iter()
            .flatten()
            .map(|keyword| Doc::text(format!("{keyword} "))),
    )
}

/// Stored body lines: leading tabs become indentation levels.
pub(crate) fn lines_doc(lines: &[String]) -> Doc<'_> {
    Doc::concat(lines.iter().map(|line| {
        let depth = line.len() - line.trim_start_matches('\t').len();
        Doc::concat([Doc::hardline(), Doc::text(&line[depth..])]).indent_by(depth)
    }))
}

/// `{` + indented lines + `}`, or `{ }` when empty.
fn block_doc(lines: &[String]) -> Doc<'_> {
    if lines.is_empty() {
        return Doc::text("{ }");
    }
    Doc::concat([
        Doc::text("{"),
        lines_doc(lines).indent(),
        Doc::hardline(),
        Doc::text("}"),
    ])
}

pub(crate) fn static_block_doc(block: &StaticCodeBlock) -> Doc<'_> {
    Doc::concat([Doc::text("static "), block_doc(block.lines())])
}

pub(crate) fn field_doc(field: &Field) -> Doc<'_> {
    Doc::concat([
        leading_doc(field.javadoc(), field.annotations()),
        modifiers_doc(field.visibility(), field.is_static(), field.is_final(), false),
        Doc::text(field.field_type()),
        Doc::text(" "),
        Doc::text(field.name()),
        match field.value() {
            Some(value) => Doc::concat([Doc::text(" = "), Doc::text(value)]),
            None => Doc::nil(),
        },
        Doc::text(";"),
    ])
}

pub(crate) fn type_doc(ty: &Type) -> Doc<'_> {
    let arguments = if ty.type_parameters().is_empty() {
        Doc::nil()
    } else {
        Doc::concat([
            Doc::text("<"),
            Doc::join(Doc::text(", "), ty.type_parameters().iter().map(type_doc)),
            Doc::text(">"),
        ])
    };
    Doc::concat([
        Doc::text(ty.base_type()),
        arguments,
        Doc::text("[]".repeat(ty.array_dimensions())),
    ])
}

pub(crate) fn type_parameter_doc(parameter: &TypeParameter) -> Doc<'_> {
    match parameter.extends_type() {
        Some(bound) => Doc::concat([
            type_doc(parameter.ty()),
            Doc::text(" extends "),
            type_doc(bound),
        ]),
        None => type_doc(parameter.ty()),
    }
}

pub(crate) fn parameter_doc(parameter: &Parameter) -> Doc<'_> {
    let ty = match parameter.param_type() {
        ParameterType::Raw(text) => Doc::text(text.as_str()),
        ParameterType::Structured(ty) => type_doc(ty),
    };
    Doc::concat([
        ty,
        Doc::text(if parameter.is_vararg() { "... " } else { " " }),
        Doc::text(parameter.name()),
    ])
}

/// `Box<T>` declares constructors named `Box`.
fn constructor_name(class_name: &str) -> &str {
    match class_name.split_once('<') {
        Some((name, _)) => name.trim_end(),
        None => class_name,
    }
}

/// A method; constructors take `class_name` as their name.
pub(crate) fn method_doc<'a>(method: &'a Method, class_name: &'a str) -> Doc<'a> {
    let name = match (method.return_type(), method.name()) {
        (Some(return_type), Some(name)) => {
            Doc::concat([Doc::text(return_type), Doc::text(" "), Doc::text(name)])
        }
        (Some(return_type), None) => Doc::text(return_type),
        (None, _) => Doc::text(constructor_name(class_name)),
    };
    let throws = if method.throw_types().is_empty() {
        Doc::nil()
    } else {
        Doc::concat([
            Doc::text(" throws "),
            Doc::text(method.throw_types().join(", ")),
        ])
    };
    let body = match method.lines() {
        Some(lines) => Doc::concat([Doc::text(" "), block_doc(lines)]),
        None => Doc::text(";"),
    };

    Doc::concat([
        leading_doc(method.javadoc(), method.annotations()),
        modifiers_doc(
            method.visibility(),
            method.is_static(),
            method.is_final(),
            method.is_abstract(),
        ),
        name,
        Doc::text("("),
        Doc::join(Doc::text(", "), method.parameters().iter().map(parameter_doc)),
        Doc::text(")"),
        throws,
        body,
    ])
}

pub(crate) fn standalone_method_doc(method: &Method) -> Doc<'_> {
    method_doc(method, CONSTRUCTOR_PLACEHOLDER)
}

/// Rendering a method as a member of a named class, which names its constructors.
pub trait MethodText {
    fn to_doc_in_class<'a>(&'a self, class_name: &'a str) -> Doc<'a>;

    fn to_text_in_class(&self, class_name: &str) -> String {
        FormatConfig::default().render(self.to_doc_in_class(class_name))
    }
}

impl MethodText for Method {
    fn to_doc_in_class<'a>(&'a self, class_name: &'a str) -> Doc<'a> {
        method_doc(self, class_name)
    }
}

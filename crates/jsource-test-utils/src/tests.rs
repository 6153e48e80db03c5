use jsource_model::{Annotation, CodeElement, Field, ImportStatement, Javadoc, Method, Parameter};
use pretty_assertions::assert_eq;

use crate::Diff;

fn field(name: &str) -> Field {
    Field::builder()
        .field_type("int")
        .name(name)
        .build()
        .unwrap()
}

fn annotation(name: &str) -> Annotation {
    Annotation::builder().name(name).build().unwrap()
}

#[test]
fn equal_nodes_have_no_differences() {
    assert_eq!(field("x").diff(&field("x")), Vec::<String>::new());
    crate::assert_same!(field("x"), field("x"));
}

#[test]
fn plain_field_difference() {
    assert_eq!(field("x").diff(&field("y")), vec!["Name is different!"]);
}

#[test]
fn optional_child_differences() {
    let javadoc = |line: &str| Javadoc::builder().content_line(line).build().unwrap();
    let with_doc = |line: &str| {
        Field::builder()
            .javadoc(javadoc(line))
            .field_type("int")
            .name("x")
            .build()
            .unwrap()
    };

    assert_eq!(field("x").diff(&with_doc("a")), vec!["Javadoc is different!"]);
    assert_eq!(
        with_doc("a").diff(&with_doc("b")),
        vec!["Javadoc differs:\n\tContent is different!"]
    );
}

#[test]
fn collection_differences() {
    let annotated = |names: &[&str]| {
        let mut builder = Field::builder().field_type("int").name("x");
        for name in names {
            builder = builder.annotation(annotation(name));
        }
        builder.build().unwrap()
    };

    assert_eq!(
        annotated(&["A"]).diff(&annotated(&["A", "B"])),
        vec!["Annotations length is different!"]
    );
    assert_eq!(
        annotated(&["A", "B"]).diff(&annotated(&["A", "C"])),
        vec!["Annotations differs on #2!\n\tName is different!"]
    );
}

#[test]
fn nested_indentation_accumulates() {
    let method = |param: &str| {
        Method::builder()
            .return_type("void")
            .name("run")
            .parameter(
                Parameter::builder()
                    .param_type("int")
                    .name(param)
                    .build()
                    .unwrap(),
            )
            .lines(Vec::<String>::new())
            .build()
            .unwrap()
    };
    assert_eq!(
        method("a").diff(&method("b")),
        vec!["Parameters differs on #1!\n\tName is different!"]
    );
}

#[test]
fn import_separators_and_element_kinds() {
    let import = ImportStatement::builder()
        .import_name("java.util.List")
        .build()
        .unwrap();
    assert_eq!(
        Some(import.clone()).diff(&None),
        vec!["Separator is different!"]
    );
    assert_eq!(
        CodeElement::from(import).diff(&CodeElement::from(field("x"))),
        vec!["Kind is different!"]
    );
}

#[test]
#[should_panic(expected = "nodes differ:\nName is different!")]
fn assert_same_reports_differences() {
    crate::assert_same!(field("x"), field("y"));
}

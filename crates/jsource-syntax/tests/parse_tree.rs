use jsource_model::{
    Annotation, Class, Field, ImportStatement, Javadoc, Method, PackageDeclaration,
    SingleLineComment, StaticCodeBlock, Visibility,
};
use jsource_syntax::{parse, parse_class};
use jsource_test_utils::assert_same;

const HOLDER: &str = "\
package com.example;

import java.util.List;

/** Holds values. */
@Entity
public class Holder extends Base {
    private List<String> values;

    public Holder() { }

    public int size() {
        return values.size();
    }
}
";

#[test]
fn parses_a_compilation_unit_into_the_expected_tree() {
    let expected = Class::builder()
        .package_declaration(
            PackageDeclaration::builder()
                .package_name("com.example")
                .build()
                .unwrap(),
        )
        .import(
            ImportStatement::builder()
                .import_name("java.util.List")
                .build()
                .unwrap(),
        )
        .javadoc(
            Javadoc::builder()
                .condensed(true)
                .content_line("Holds values.")
                .build()
                .unwrap(),
        )
        .annotation(Annotation::builder().name("Entity").build().unwrap())
        .visibility(Visibility::Public)
        .class_name("Holder")
        .super_class_name("Base")
        .field(
            Field::builder()
                .visibility(Visibility::Private)
                .field_type("List<String>")
                .name("values")
                .build()
                .unwrap(),
        )
        .method(
            Method::builder()
                .visibility(Visibility::Public)
                .lines(Vec::<String>::new())
                .build()
                .unwrap(),
        )
        .method(
            Method::builder()
                .visibility(Visibility::Public)
                .return_type("int")
                .name("size")
                .lines(["return values.size();"])
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert_same!(expected, parse(HOLDER).unwrap());
}

#[test]
fn inner_class_members_keep_their_order() {
    let text = "static class Registry {\n\t// entries\n\tstatic {\n\t\tload();\n\t}\n\tint size;\n}";
    let expected = Class::builder()
        .is_inner_class(true)
        .is_static(true)
        .class_name("Registry")
        .single_line_comment(SingleLineComment::builder().content("entries").build().unwrap())
        .static_code_block(StaticCodeBlock::builder().line("load();").build().unwrap())
        .field(
            Field::builder()
                .field_type("int")
                .name("size")
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();

    assert_same!(expected, parse_class(text).unwrap());
}

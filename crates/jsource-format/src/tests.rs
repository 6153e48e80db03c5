use insta::assert_snapshot;
use jsource_model::{
    Class, CodeElement, Javadoc, Method, MultiLineComment, SingleLineComment, Type,
    TypeParameter, Visibility,
};
use jsource_syntax::{parse, parse_annotation, parse_method};
use pretty_assertions::assert_eq;

use crate::{FormatConfig, IndentStyle, LineEnding, MethodText, ToText};

fn ty(base: &str) -> Type {
    Type::builder().base_type(base).build().unwrap()
}

#[test]
fn bare_annotation_value_prints_as_named_value() {
    let annotation = parse_annotation("@Test(true)").unwrap();
    assert_eq!(annotation.to_text(), "@Test(value = true)");
}

#[test]
fn condensed_javadoc() {
    let javadoc = Javadoc::builder()
        .condensed(true)
        .content_line("Short.")
        .build()
        .unwrap();
    assert_eq!(javadoc.to_text(), "/** Short. */");

    let empty = Javadoc::builder().condensed(true).build().unwrap();
    assert_eq!(empty.to_text(), "/** */");
}

#[test]
fn block_javadoc_lists_tags_in_fixed_order() {
    let javadoc = Javadoc::builder()
        .condensed(true)
        .content_line("Adds numbers.")
        .content_line("")
        .content_line("Overflow wraps.")
        .throws("ArithmeticException", "never")
        .return_val("the sum")
        .param("a", "first")
        .since("1.2")
        .author("jsource")
        .build()
        .unwrap();
    assert_eq!(
        javadoc.to_text(),
        "/**\n * Adds numbers.\n *\n * Overflow wraps.\n *\n * @author jsource\n * @since 1.2\n * @param a first\n * @return the sum\n * @throws ArithmeticException never\n */"
    );
}

#[test]
fn comments() {
    let single = SingleLineComment::builder().content("note").build().unwrap();
    assert_eq!(single.to_text(), "// note");

    let one = MultiLineComment::builder().line("block").build().unwrap();
    assert_eq!(one.to_text(), "/* block */");

    let two = MultiLineComment::builder()
        .content(["first", "", "second"])
        .build()
        .unwrap();
    assert_eq!(two.to_text(), "/*\n * first\n *\n * second\n */");

    let empty = MultiLineComment::builder().build().unwrap();
    assert_eq!(empty.to_text(), "/* */");
}

#[test]
fn types_and_type_parameters() {
    let list = Type::builder()
        .base_type("List")
        .type_parameter(ty("Integer"))
        .build()
        .unwrap();
    let map = Type::builder()
        .base_type("Map")
        .type_parameter(ty("String"))
        .type_parameter(list)
        .array_dimensions(2)
        .build()
        .unwrap();
    assert_eq!(map.to_text(), "Map<String, List<Integer>>[][]");

    let bounded = TypeParameter::builder()
        .ty(ty("T"))
        .extends_type(ty("Number"))
        .build()
        .unwrap();
    assert_eq!(bounded.to_text(), "T extends Number");
}

#[test]
fn constructors_take_the_class_name() {
    let constructor = Method::builder()
        .visibility(Visibility::Public)
        .lines(Vec::<String>::new())
        .build()
        .unwrap();
    assert_eq!(constructor.to_text(), "public <init>() { }");
    assert_eq!(constructor.to_text_in_class("Test"), "public Test() { }");
    assert_eq!(constructor.to_text_in_class("Box<T>"), "public Box() { }");
}

#[test]
fn generic_class_constructor_round_trips() {
    let text = "package a.b;\n\npublic abstract class A<T> {\n\tpublic A(int x, String... ys) throws Exception {\n\t\tinit(x);\n\t}\n}";
    let class = parse(text).unwrap();
    let printed = class.to_text();
    assert_eq!(printed, text);
    assert_eq!(parse(&printed).unwrap(), class);
}

#[test]
fn abstract_method_ends_with_semicolon() {
    let method = Method::builder()
        .visibility(Visibility::Protected)
        .is_abstract(true)
        .return_type("void")
        .name("run")
        .throw_type("IOException")
        .build()
        .unwrap();
    assert_eq!(method.to_text(), "protected abstract void run() throws IOException;");
}

#[test]
fn nested_method_body_round_trips_exactly() {
    let text = "void check(int a) {\n\tif (a > 0) {\n\t\tpositive();\n\t} else if (a < 0) {\n\t\tnegative();\n\t} else {\n\t\tzero();\n\t}\n}";
    let method = parse_method(text).unwrap();
    assert_eq!(method.to_text(), text);
}

#[test]
fn empty_class() {
    let class = Class::builder()
        .is_inner_class(true)
        .class_name("X")
        .build()
        .unwrap();
    assert_eq!(class.to_text(), "class X {\n}");
}

const ORDERED: &str = "package com.example;\n\nimport java.util.List;\n\nimport static java.util.Objects.requireNonNull;\n\npublic class Test extends Base implements Runnable {\n\t// counter\n\tprivate int count;\n\tprivate int total;\n\n\t/* block */\n\tpublic void run() { }\n\n\tstatic {\n\t\tinit();\n\t}\n\n\tprivate static class Inner {\n\t\tint x;\n\t}\n}";

#[test]
fn class_body_follows_source_order_and_blank_line_rules() {
    let class = parse(ORDERED).unwrap();
    assert_eq!(class.to_text(), ORDERED);
}

#[test]
fn spaces_configuration() {
    let class = parse(ORDERED).unwrap();
    let config = FormatConfig {
        indent_style: IndentStyle::Spaces,
        indent_width: 2,
        insert_final_newline: true,
        ..FormatConfig::default()
    };
    let text = class.to_text_with(&config);
    assert!(text.ends_with("}\n"));
    assert_snapshot!(text, @r###"
package com.example;

import java.util.List;

import static java.util.Objects.requireNonNull;

public class Test extends Base implements Runnable {
  // counter
  private int count;
  private int total;

  /* block */
  public void run() { }

  static {
    init();
  }

  private static class Inner {
    int x;
  }
}
"###);
}

#[test]
fn crlf_line_endings() {
    let class = Class::builder()
        .is_inner_class(true)
        .class_name("X")
        .build()
        .unwrap();
    let config = FormatConfig {
        newline: LineEnding::Crlf,
        ..FormatConfig::default()
    };
    assert_eq!(class.to_text_with(&config), "class X {\r\n}");
}

#[test]
fn code_element_delegates_to_its_node() {
    let element = CodeElement::from(ty("String"));
    assert_eq!(element.to_text(), "String");
}

#[test]
fn format_config_from_toml() {
    let config: FormatConfig = toml::from_str("indent_style = \"spaces\"\nindent_width = 2\n").unwrap();
    assert_eq!(
        config,
        FormatConfig {
            indent_style: IndentStyle::Spaces,
            indent_width: 2,
            ..FormatConfig::default()
        }
    );
    assert!(toml::from_str::<FormatConfig>("max_width = 80").is_err());
}

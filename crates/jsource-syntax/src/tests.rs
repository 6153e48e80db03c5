use jsource_model::{InnerElement, InnerElementKind, Node, ParameterType, Visibility};
use pretty_assertions::assert_eq;

use crate::{
    parse, parse_annotation, parse_class, parse_field, parse_import_statement, parse_javadoc,
    parse_member, parse_method, parse_multi_line_comment, parse_package_declaration,
    parse_parameter, parse_single_line_comment, parse_type, parse_type_parameter, tokenize,
    ConstructKind, Member, ParseError, ParseOptions, Parser, TokenKind,
};

fn messages(err: &ParseError) -> Vec<&str> {
    err.messages().iter().map(String::as_str).collect()
}

fn dump_tokens(input: &str) -> Vec<(TokenKind, String)> {
    tokenize(input, true)
        .into_iter()
        .map(|token| (token.kind, token.text))
        .collect()
}

#[test]
fn tokenizer_splits_on_separators_mid_word() {
    assert_eq!(
        dump_tokens("a{b}\n"),
        vec![
            (TokenKind::Word, "a".to_string()),
            (TokenKind::Separator, "{".to_string()),
            (TokenKind::Word, "b".to_string()),
            (TokenKind::Separator, "}".to_string()),
            (TokenKind::Newline, "\n".to_string()),
        ]
    );
}

#[test]
fn tokenizer_keeps_literals_and_comments_whole() {
    assert_eq!(
        dump_tokens("s = \"{\"; // }"),
        vec![
            (TokenKind::Word, "s".to_string()),
            (TokenKind::Whitespace, " ".to_string()),
            (TokenKind::Separator, "=".to_string()),
            (TokenKind::Whitespace, " ".to_string()),
            (TokenKind::Literal, "\"{\"".to_string()),
            (TokenKind::Separator, ";".to_string()),
            (TokenKind::Whitespace, " ".to_string()),
            (TokenKind::LineComment, "// }".to_string()),
        ]
    );

    let blind: Vec<_> = tokenize("\"{\"", false)
        .into_iter()
        .map(|token| token.kind)
        .collect();
    assert_eq!(blind, vec![TokenKind::Word, TokenKind::Separator, TokenKind::Word]);
}

#[test]
fn package_missing_name_reports_one_message() {
    let err = parse_package_declaration("package ;").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::PackageDeclaration);
    assert_eq!(messages(&err), vec!["Failed to find package name!"]);
}

#[test]
fn package_missing_name_and_terminator_reports_both() {
    let err = parse_package_declaration("package").unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "Failed to find package name!",
            "Failed to find ';' after package declaration!",
        ]
    );
    assert_eq!(
        err.to_string(),
        "Failed to parse package declaration:\n\tFailed to find package name!\n\tFailed to find ';' after package declaration!"
    );
}

#[test]
fn package_name_tolerates_line_breaks() {
    let package = parse_package_declaration("package com\n    .example\n    .app ;").unwrap();
    assert_eq!(package.package_name(), "com.example.app");
}

#[test]
fn static_wildcard_import() {
    let import = parse_import_statement("import static org.junit.Assert.*;").unwrap();
    assert!(import.is_static());
    assert_eq!(import.import_name(), "org.junit.Assert.*");

    let err = parse_import_statement("import").unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "Failed to find import name!",
            "Failed to find ';' after import statement!",
        ]
    );
}

#[test]
fn bare_annotation_value_becomes_value_parameter() {
    let annotation = parse_annotation("@Test(true)").unwrap();
    assert_eq!(annotation.name(), "Test");
    assert_eq!(annotation.parameters().len(), 1);
    assert_eq!(annotation.parameters()[0].name(), "value");
    assert_eq!(annotation.parameters()[0].value(), "true");
}

#[test]
fn annotation_named_parameters_and_canonical_name() {
    let annotation =
        parse_annotation("@org.junit.Test(expected = Foo.class, timeout = call(1, 2))").unwrap();
    assert_eq!(annotation.name(), "org.junit.Test");
    assert_eq!(annotation.canonical_name(), Some("org.junit.Test"));
    assert_eq!(annotation.parameter("expected"), Some("Foo.class"));
    assert_eq!(annotation.parameter("timeout"), Some("call(1, 2)"));
}

#[test]
fn unterminated_annotation_parameters_are_fatal() {
    let err = parse_annotation("@Test(a = 1").unwrap_err();
    assert_eq!(messages(&err), vec!["Didn't find end of parameters"]);

    let err = parse_annotation("@Test(a = , 2)").unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["Annotation parameter #1 is malformed: 'a ='"]
    );
}

#[test]
fn equality_operators_are_not_parameter_assignments() {
    let annotation = parse_annotation("@Check(a == b)").unwrap();
    assert_eq!(annotation.parameters().len(), 1);
    assert_eq!(annotation.parameters()[0].name(), "value");
    assert_eq!(annotation.parameters()[0].value(), "a == b");

    let annotation = parse_annotation("@Check(when = a != b, limit = x >= 1)").unwrap();
    assert_eq!(annotation.parameter("when"), Some("a != b"));
    assert_eq!(annotation.parameter("limit"), Some("x >= 1"));
}

#[test]
fn annotation_parameter_names_must_be_identifiers() {
    let err = parse_annotation("@Test(1x = 2)").unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["Annotation parameter #1 is malformed: '1x = 2'"]
    );
}

#[test]
fn javadoc_block_with_tags() {
    let javadoc = parse_javadoc(
        "/**\n * Adds numbers.\n *\n * @param a the first\n *        operand\n * @return the sum\n * @throws IllegalStateException when closed\n */",
    )
    .unwrap();
    assert!(!javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["Adds numbers."]);
    assert_eq!(javadoc.params().len(), 1);
    assert_eq!(javadoc.params()[0].name(), "a");
    assert_eq!(javadoc.params()[0].description(), "the first operand");
    assert_eq!(javadoc.return_val(), Some("the sum"));
    assert_eq!(javadoc.throws_info()[0].name(), "IllegalStateException");
    assert_eq!(javadoc.throws_info()[0].description(), "when closed");
}

#[test]
fn javadoc_condensed_only_on_a_single_line() {
    let javadoc = parse_javadoc("/** Short. */").unwrap();
    assert!(javadoc.is_condensed());
    assert_eq!(javadoc.content(), ["Short."]);

    let javadoc = parse_javadoc("/**\n * Short.\n */").unwrap();
    assert!(!javadoc.is_condensed());

    let err = parse_javadoc("/* plain */").unwrap_err();
    assert_eq!(messages(&err), vec!["Expected javadoc to start with '/**'!"]);
}

#[test]
fn comments() {
    let comment = parse_single_line_comment("//   counter").unwrap();
    assert_eq!(comment.content(), "counter");

    let comment = parse_multi_line_comment("/*\n * first\n * second\n */").unwrap();
    assert_eq!(comment.content(), ["first", "second"]);

    let err = parse_multi_line_comment("/* never closed").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::MultiLineComment);
    assert_eq!(messages(&err), vec!["Failed to find end of comment!"]);
}

#[test]
fn field_with_modifiers_and_initializer() {
    let field = parse_field("private static final int COUNT = 5;").unwrap();
    assert_eq!(field.visibility(), Visibility::Private);
    assert!(field.is_static());
    assert!(field.is_final());
    assert_eq!(field.field_type(), "int");
    assert_eq!(field.name(), "COUNT");
    assert_eq!(field.value(), Some("5"));

    let field = parse_field("Map<String, List<Integer>>\n    lookup;").unwrap();
    assert_eq!(field.field_type(), "Map<String, List<Integer>>");
    assert_eq!(field.name(), "lookup");
    assert_eq!(field.value(), None);
}

#[test]
fn field_initializer_may_span_lines() {
    let field = parse_field("String s = \"\"\"\n    hi\n    \"\"\";").unwrap();
    assert_eq!(field.field_type(), "String");
    assert_eq!(field.name(), "s");
    assert_eq!(field.value(), Some("\"\"\"\n    hi\n    \"\"\""));

    let field = parse_field("int[] values = {\n1,\n2 };").unwrap();
    assert_eq!(field.name(), "values");
    assert_eq!(field.value(), Some("{ 1, 2 }"));
}

#[test]
fn field_problems_are_reported_together() {
    let err = parse_field("x").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Field);
    assert_eq!(
        messages(&err),
        vec![
            "Failed to find ';' at end of field!",
            "Field does not match '[modifiers] type name [= value]': 'x'",
        ]
    );

    let err = parse_field("abstract int x;").unwrap_err();
    assert_eq!(messages(&err), vec!["Fields cannot be abstract!"]);
}

#[test]
fn method_with_parameters_and_body() {
    let method = parse_method("public int add(int a, int... rest) throws IOException, X {\n\treturn a;\n}")
        .unwrap();
    assert_eq!(method.visibility(), Visibility::Public);
    assert_eq!(method.return_type(), Some("int"));
    assert_eq!(method.name(), Some("add"));
    assert_eq!(method.parameters().len(), 2);
    assert_eq!(method.parameters()[0].name(), "a");
    assert!(!method.parameters()[0].is_vararg());
    assert!(method.parameters()[1].is_vararg());
    match method.parameters()[1].param_type() {
        ParameterType::Structured(ty) => assert_eq!(ty.base_type(), "int"),
        other => panic!("expected a structured type, got {other:?}"),
    }
    assert_eq!(method.throw_types(), ["IOException", "X"]);
    assert_eq!(method.lines(), Some(&["return a;".to_string()][..]));
}

#[test]
fn constructor_and_abstract_method() {
    let constructor = parse_method("public Test() { }").unwrap();
    assert!(constructor.is_constructor());
    assert_eq!(constructor.name(), None);
    assert_eq!(constructor.lines(), Some(&[][..]));

    let method = parse_method("protected abstract void run();").unwrap();
    assert!(method.is_abstract());
    assert_eq!(method.lines(), None);
}

#[test]
fn method_name_must_be_an_identifier() {
    let err = parse_method("void 9run() { }").unwrap_err();
    assert_eq!(messages(&err), vec!["Failed to find method name!"]);
}

#[test]
fn comment_between_header_and_body_is_dropped() {
    let method = parse_method("void run() /* note */ {\n\tgo();\n}").unwrap();
    assert_eq!(method.name(), Some("run"));
    assert_eq!(method.lines(), Some(&["go();".to_string()][..]));
    assert_eq!(method, parse_method("void run() {\n\tgo();\n}").unwrap());
}

#[test]
fn method_reports_unclosed_parameters_and_body() {
    let err = parse_method("void run(int a").unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "Failed to find end of parameter list!",
            "Failed to find end of method body!",
        ]
    );

    let err = parse_method("void run() {\n\tgo();").unwrap_err();
    assert_eq!(messages(&err), vec!["Failed to find end of method body!"]);
}

#[test]
fn method_body_keeps_nested_depth() {
    let method = parse_method(
        "void check(int a) {\n    if (a > 0) {\n  System.out.println(\"positive\");\n    } else if (a < 0) {\n        System.out.println(\"negative\");\n    } else {\n        System.out.println(\"zero\");\n    }\n\n    done();\n}",
    )
    .unwrap();
    assert_eq!(
        method.lines(),
        Some(
            &[
                "if (a > 0) {".to_string(),
                "\tSystem.out.println(\"positive\");".to_string(),
                "} else if (a < 0) {".to_string(),
                "\tSystem.out.println(\"negative\");".to_string(),
                "} else {".to_string(),
                "\tSystem.out.println(\"zero\");".to_string(),
                "}".to_string(),
                String::new(),
                "done();".to_string(),
            ][..]
        )
    );
}

#[test]
fn braces_inside_literals_depend_on_literal_awareness() {
    let text = "void f() {\n\tString s = \"}\";\n}";
    let method = parse_method(text).unwrap();
    assert_eq!(method.lines(), Some(&["String s = \"}\";".to_string()][..]));

    let blind = Parser::new(ParseOptions {
        literal_aware: false,
        ..ParseOptions::default()
    });
    let err = blind.parse_method(text).unwrap_err();
    assert_eq!(messages(&err), vec!["Unexpected trailing content!"]);
}

#[test]
fn duplicate_modifier_is_reported() {
    let err = parse_class("static static class Test{ }").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Class);
    assert_eq!(messages(&err), vec!["Found duplicate modifier: 'static'"]);
}

#[test]
fn duplicate_modifiers_are_reported_in_encounter_order() {
    let err = parse_class("static static final final class Test{ }").unwrap_err();
    assert_eq!(
        messages(&err),
        vec![
            "Found duplicate modifier: 'static'",
            "Found duplicate modifier: 'final'",
        ]
    );
}

#[test]
fn dispatcher_resolves_member_kinds() {
    assert!(matches!(parse_member("private int x = 3;").unwrap(), Member::Field(_)));
    assert!(matches!(
        parse_member("public static void main(String[] args) { }").unwrap(),
        Member::Method(_)
    ));
    assert!(matches!(
        parse_member("private static class Inner { }").unwrap(),
        Member::Class(_)
    ));
    match parse_member("static {\n\tinit();\n}").unwrap() {
        Member::StaticBlock(block) => assert_eq!(block.lines(), ["init();"]),
        other => panic!("expected a static block, got {other:?}"),
    }
}

#[test]
fn dispatcher_reports_modifier_and_resolution_problems() {
    let err = parse_member("public private int x;").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Field);
    assert_eq!(
        messages(&err),
        vec!["Found more than one visibility modifier: 'private'"]
    );

    let err = parse_member("public public }").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::TypeWithModifiers);
    assert_eq!(
        messages(&err),
        vec![
            "Found duplicate modifier: 'public'",
            "Failed to determine whether this is a class, method or field!",
        ]
    );
}

#[test]
fn class_header_and_leading_elements() {
    let class = parse_class(
        "/** Doc. */\n@Deprecated\npublic final class Old extends Base implements Runnable, Cloneable {\n}",
    )
    .unwrap();
    assert!(class.is_inner_class());
    assert_eq!(class.javadoc().map(|doc| doc.content().to_vec()), Some(vec!["Doc.".to_string()]));
    assert_eq!(class.annotations()[0].name(), "Deprecated");
    assert_eq!(class.visibility(), Visibility::Public);
    assert!(class.is_final());
    assert_eq!(class.super_class_name(), Some("Base"));
    assert_eq!(class.implements_interface_names(), ["Runnable", "Cloneable"]);
}

#[test]
fn dangling_and_duplicate_javadoc_in_class_body() {
    let err = parse_class("class A {\n\t/** Dangling. */\n}").unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["Found javadoc or annotations not attached to any element!"]
    );

    let err = parse_class("class A {\n\t/** One. */\n\t/** Two. */\n\tint x;\n}").unwrap_err();
    assert_eq!(
        messages(&err),
        vec!["Found more than one javadoc for a single element!"]
    );
}

#[test]
fn class_body_records_source_order() {
    let class = parse(
        "package com.example;\n\nimport java.util.List;\n\npublic class Test {\n\t// counter\n\tprivate int count;\n\t/* block */\n\tpublic void run() { }\n}\n",
    )
    .unwrap();
    assert!(!class.is_inner_class());
    assert_eq!(
        class.package_declaration().map(|p| p.package_name()),
        Some("com.example")
    );
    assert_eq!(
        class.inner_elements_order(),
        [
            InnerElement::new(InnerElementKind::SingleLineComment, 0),
            InnerElement::new(InnerElementKind::Field, 0),
            InnerElement::new(InnerElementKind::MultiLineComment, 0),
            InnerElement::new(InnerElementKind::Method, 0),
        ]
    );
}

#[test]
fn imports_keep_blank_lines_in_canonical_layout() {
    let class = parse(
        "package a;\n\nimport java.util.List;\nimport java.util.Map;\n\nimport static org.junit.Assert.assertEquals;\nimport java.io.File;\n\nclass A { }",
    )
    .unwrap();
    let layout: Vec<Option<&str>> = class
        .import_statements()
        .iter()
        .map(|import| import.as_ref().map(|import| import.import_name()))
        .collect();
    assert_eq!(
        layout,
        vec![
            Some("java.util.List"),
            Some("java.util.Map"),
            None,
            Some("java.io.File"),
            None,
            Some("org.junit.Assert.assertEquals"),
        ]
    );
}

#[test]
fn top_level_problems() {
    let err = parse("class Test { }").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Class);
    assert_eq!(
        messages(&err),
        vec!["Must specify packageName when not making an inner class!"]
    );

    let err = parse("package a;\n").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::CompilationUnit);
    assert_eq!(messages(&err), vec!["Expected a class declaration!"]);

    let err = parse("package a;\n\nclass A { }\nint x;").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::CompilationUnit);
    assert_eq!(messages(&err), vec!["Unexpected trailing content!"]);
}

#[test]
fn comments_outside_the_class_body_are_dropped() {
    let class = parse("// license\npackage a;\n\n/* about */\nclass A {\n\t// kept\n} // trailing").unwrap();
    assert_eq!(class.package_declaration().map(|package| package.package_name()), Some("a"));
    assert_eq!(class.single_line_comments().len(), 1);
    assert_eq!(class.single_line_comments()[0].content(), "kept");
    assert!(class.multi_line_comments().is_empty());
    assert_eq!(
        class,
        parse("package a;\n\nclass A {\n\t// kept\n}").unwrap()
    );
}

#[test]
fn editable_option_builds_editable_trees() {
    let parser = Parser::new(ParseOptions {
        editable: true,
        ..ParseOptions::default()
    });
    let mut field = parser.parse_field("int x;").unwrap();
    assert!(field.is_editable());
    field.set_name("y").unwrap();
    assert_eq!(field.name(), "y");

    let field = parse_field("int x;").unwrap();
    assert!(!field.is_editable());
}

#[test]
fn structured_types() {
    let ty = parse_type("java.util.Map<String, List<int[]>>[]").unwrap();
    assert_eq!(ty.base_type(), "java.util.Map");
    assert_eq!(ty.canonical_name(), Some("java.util.Map"));
    assert_eq!(ty.array_dimensions(), 1);
    assert_eq!(ty.type_parameters().len(), 2);
    assert_eq!(ty.type_parameters()[1].type_parameters()[0].array_dimensions(), 1);

    let param = parse_type_parameter("T extends Comparable<T>").unwrap();
    assert_eq!(param.ty().base_type(), "T");
    assert_eq!(
        param.extends_type().map(|bound| bound.base_type()),
        Some("Comparable")
    );

    let err = parse_type("Map<String").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Type);
}

#[test]
fn parameters_fall_back_to_raw_types() {
    let param = parse_parameter("final String name").unwrap();
    assert_eq!(param.param_type(), &ParameterType::Raw("final String".to_string()));
    assert_eq!(param.name(), "name");

    let err = parse_parameter("name").unwrap_err();
    assert_eq!(err.kind(), ConstructKind::Parameter);
}

#[test]
fn parse_options_from_json() {
    let options: ParseOptions = serde_json::from_str(r#"{"editable": true}"#).unwrap();
    assert_eq!(
        options,
        ParseOptions {
            editable: true,
            literal_aware: true,
        }
    );
}

use pretty_assertions::assert_eq;

use crate::*;

fn package(name: &str) -> PackageDeclaration {
    PackageDeclaration::builder().package_name(name).build().unwrap()
}

fn field(ty: &str, name: &str) -> Field {
    Field::builder().field_type(ty).name(name).build().unwrap()
}

fn method(name: &str) -> Method {
    Method::builder()
        .return_type("void")
        .name(name)
        .lines(["return;"])
        .build()
        .unwrap()
}

fn comment(text: &str) -> SingleLineComment {
    SingleLineComment::builder().content(text).build().unwrap()
}

#[test]
fn validation_error_renders_tab_indented_messages() {
    let err = ValidationError::new(
        NodeKind::Field,
        vec!["Must specify type!".to_string(), "Must specify name!".to_string()],
    );
    assert_eq!(
        err.to_string(),
        "Failed to build Field:\n\tMust specify type!\n\tMust specify name!"
    );
}

#[test]
fn field_builder_reports_every_missing_part() {
    let err = Field::builder().build().unwrap_err();
    assert_eq!(err.kind(), NodeKind::Field);
    assert_eq!(err.messages(), ["Must specify type!", "Must specify name!"]);
}

#[test]
fn top_level_class_requires_package() {
    let err = Class::builder().class_name("Test").build().unwrap_err();
    assert_eq!(
        err.messages(),
        ["Must specify packageName when not making an inner class!"]
    );
}

#[test]
fn only_inner_classes_can_be_static() {
    let inner = Class::builder()
        .is_inner_class(true)
        .is_static(true)
        .class_name("Inner")
        .build();
    assert!(inner.is_ok());

    let err = Class::builder()
        .package_declaration(package("com.example"))
        .is_static(true)
        .class_name("Outer")
        .build()
        .unwrap_err();
    assert_eq!(err.messages(), ["Only inner classes can be static!"]);
}

#[test]
fn inner_class_rejects_package_and_imports() {
    let import = ImportStatement::builder()
        .import_name("java.util.List")
        .build()
        .unwrap();
    let err = Class::builder()
        .is_inner_class(true)
        .class_name("Inner")
        .package_declaration(package("com.example"))
        .import(import)
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Inner classes cannot have a packageDeclaration!",
            "Inner classes cannot have importStatements!",
        ]
    );
}

#[test]
fn class_errors_are_aggregated() {
    let err = Class::builder()
        .is_static(true)
        .is_abstract(true)
        .is_final(true)
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Must specify className!",
            "Must specify packageName when not making an inner class!",
            "Only inner classes can be static!",
            "Classes cannot be both abstract and final!",
        ]
    );
}

#[test]
fn builder_records_source_order() {
    let class = Class::builder()
        .package_declaration(package("com.example"))
        .class_name("Test")
        .single_line_comment(comment("first"))
        .field(field("int", "a"))
        .single_line_comment(comment("second"))
        .method(method("run"))
        .build()
        .unwrap();

    assert_eq!(
        class.inner_elements_order(),
        [
            InnerElement::new(InnerElementKind::SingleLineComment, 0),
            InnerElement::new(InnerElementKind::Field, 0),
            InnerElement::new(InnerElementKind::SingleLineComment, 1),
            InnerElement::new(InnerElementKind::Method, 0),
        ]
    );
    let kinds: Vec<_> = class.elements_in_order().map(|member| member.kind()).collect();
    assert_eq!(
        kinds,
        [
            InnerElementKind::SingleLineComment,
            InnerElementKind::Field,
            InnerElementKind::SingleLineComment,
            InnerElementKind::Method,
        ]
    );
}

#[test]
fn explicit_order_must_reference_every_element_once() {
    let err = Class::builder()
        .package_declaration(package("com.example"))
        .class_name("Test")
        .field(field("int", "a"))
        .field(field("int", "b"))
        .inner_elements_order(vec![
            InnerElement::new(InnerElementKind::Field, 0),
            InnerElement::new(InnerElementKind::Field, 0),
            InnerElement::new(InnerElementKind::Method, 0),
        ])
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "innerElementsOrder has 3 entries but the class has 2 inner elements!",
            "Field #1 must appear exactly once in innerElementsOrder!",
            "Field #2 must appear exactly once in innerElementsOrder!",
            "innerElementsOrder #3 refers to missing Method #1!",
        ]
    );
}

#[test]
fn editability_mismatch_is_reported_per_child() {
    let read_only = field("int", "a");
    let err = Class::builder()
        .editable(true)
        .package_declaration(package("com.example").to_editable())
        .class_name("Test")
        .field(read_only.to_editable())
        .field(read_only)
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        ["Field #2 is read-only but the Class is editable!"]
    );
}

#[test]
fn read_only_nodes_reject_mutation() {
    let mut field = field("int", "a");
    let err = field.set_name("b").unwrap_err();
    assert_eq!(err.messages(), ["Field is read-only!"]);
    assert_eq!(field.name(), "a");
}

#[test]
fn editable_setters_revalidate_touched_field() {
    let mut field = field("int", "a").to_editable();
    assert_eq!(
        field.set_name("  ").unwrap_err().messages(),
        ["Must specify name!"]
    );
    assert_eq!(field.name(), "a");

    field.set_name("b").unwrap();
    field.set_value(Some("5".to_string())).unwrap();
    assert_eq!(field.name(), "b");
    assert_eq!(field.value(), Some("5"));
}

#[test]
fn to_editable_is_deep() {
    let annotation = Annotation::builder().name("Deprecated").build().unwrap();
    let field = Field::builder()
        .annotation(annotation)
        .field_type("int")
        .name("a")
        .build()
        .unwrap();
    let class = Class::builder()
        .package_declaration(package("com.example"))
        .class_name("Test")
        .field(field)
        .build()
        .unwrap();

    let editable = class.to_editable();
    assert!(editable.is_editable());
    assert!(editable.fields()[0].is_editable());
    assert!(editable.fields()[0].annotations()[0].is_editable());
    assert!(editable.validate().is_ok());
    assert_eq!(editable.to_read_only(), class);
}

#[test]
fn editable_class_adders_append_to_order() {
    let mut class = Class::builder()
        .editable(true)
        .package_declaration(package("com.example").to_editable())
        .class_name("Test")
        .build()
        .unwrap();
    class.add_field(field("int", "a").to_editable()).unwrap();
    class.add_single_line_comment(comment("note").to_editable()).unwrap();
    class.add_method(method("run").to_editable()).unwrap();

    assert_eq!(
        class.inner_elements_order(),
        [
            InnerElement::new(InnerElementKind::Field, 0),
            InnerElement::new(InnerElementKind::SingleLineComment, 0),
            InnerElement::new(InnerElementKind::Method, 0),
        ]
    );
    assert!(class.validate().is_ok());

    let err = class.add_field(field("int", "b")).unwrap_err();
    assert_eq!(
        err.messages(),
        ["Field is read-only but the Class is editable!"]
    );
    assert_eq!(class.fields().len(), 1);
}

#[test]
fn class_modifier_setters_check_conflicts() {
    let mut class = Class::builder()
        .editable(true)
        .package_declaration(package("com.example").to_editable())
        .class_name("Test")
        .is_final(true)
        .build()
        .unwrap();
    assert_eq!(
        class.set_abstract(true).unwrap_err().messages(),
        ["Classes cannot be both abstract and final!"]
    );
    assert_eq!(
        class.set_static(true).unwrap_err().messages(),
        ["Only inner classes can be static!"]
    );

    let abstract_method = Method::builder()
        .editable(true)
        .is_abstract(true)
        .return_type("void")
        .name("run")
        .build()
        .unwrap();
    assert_eq!(
        class.add_method(abstract_method).unwrap_err().messages(),
        ["Abstract methods require an abstract class!"]
    );
}

#[test]
fn method_rules() {
    let err = Method::builder()
        .is_abstract(true)
        .is_static(true)
        .return_type("void")
        .name("run")
        .lines(["return;"])
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Abstract methods cannot have a body!",
            "Abstract methods cannot be static!",
        ]
    );

    let err = Method::builder().return_type("void").build().unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Must specify name when specifying a returnType!",
            "Non-abstract methods must have a body!",
        ]
    );
}

#[test]
fn constructor_has_no_name() {
    let ctor = Method::builder().lines(Vec::<String>::new()).build().unwrap();
    assert!(ctor.is_constructor());
    assert_eq!(ctor.name(), None);

    let err = Method::builder()
        .name("Test")
        .is_static(true)
        .lines(Vec::<String>::new())
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Constructors must not specify a name!",
            "Constructors cannot be static!",
        ]
    );
}

#[test]
fn method_signature_setter_leaves_node_unchanged_on_failure() {
    let mut method = method("run").to_editable();
    let err = method.set_abstract(true).unwrap_err();
    assert_eq!(err.messages(), ["Abstract methods cannot have a body!"]);
    assert!(!method.is_abstract());
    assert_eq!(method.lines(), Some(&["return;".to_string()][..]));

    method.set_lines(None).unwrap_err();
    method.set_lines(Some(Vec::new())).unwrap();
    assert_eq!(method.lines(), Some(&[][..]));
}

#[test]
fn annotation_parameters_need_name_and_value() {
    let err = Annotation::builder()
        .name("Test")
        .parameters(vec![AnnotationParameter::new("", "")])
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Annotation parameter #1 must specify a name!",
            "Annotation parameter #1 must specify a value!",
        ]
    );

    let annotation = Annotation::builder()
        .name("Test")
        .parameters(vec![AnnotationParameter::value_only("true")])
        .build()
        .unwrap();
    assert_eq!(annotation.parameter("value"), Some("true"));
}

#[test]
fn single_line_comment_rejects_line_breaks() {
    let err = SingleLineComment::builder()
        .content("one\ntwo")
        .build()
        .unwrap_err();
    assert_eq!(err.messages(), ["Single line comments cannot contain line breaks!"]);
}

#[test]
fn type_parameter_aggregates_child_problems() {
    let ty = Type::builder().base_type("T").build().unwrap();
    let err = TypeParameter::builder()
        .editable(true)
        .extends_type(ty)
        .build()
        .unwrap_err();
    assert_eq!(
        err.messages(),
        [
            "Must specify type!",
            "Extends type is read-only but the TypeParameter is editable!",
        ]
    );
}

#[test]
fn canonical_import_layout_groups_static_last() {
    let import = |name: &str, is_static: bool| {
        Some(
            ImportStatement::builder()
                .import_name(name)
                .is_static(is_static)
                .build()
                .unwrap(),
        )
    };
    let source = vec![
        None,
        import("org.junit.Assert.assertEquals", true),
        import("java.util.List", false),
        None,
        None,
        import("java.util.Map", false),
        None,
    ];
    let layout = canonical_import_layout(&source);
    assert_eq!(
        layout,
        vec![
            import("java.util.List", false),
            None,
            import("java.util.Map", false),
            None,
            import("org.junit.Assert.assertEquals", true),
        ]
    );
    assert_eq!(canonical_import_layout(&layout), layout);
}

#[test]
fn code_element_reports_kind() {
    let element = CodeElement::from(field("int", "a"));
    assert_eq!(element.kind(), NodeKind::Field);
    assert!(!element.is_editable());
    assert!(element.to_editable().is_editable());
}

#[test]
fn nodes_serialize_with_serde() {
    let element = CodeElement::from(package("com.example"));
    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json["kind"], "PackageDeclaration");
    assert_eq!(json["node"]["package_name"], "com.example");

    let back: CodeElement = serde_json::from_value(json).unwrap();
    assert_eq!(back, element);
}

#[test]
fn deserializing_runs_validation() {
    let class = Class::builder()
        .package_declaration(package("a"))
        .class_name("A")
        .field(field("int", "x"))
        .build()
        .unwrap();
    let mut json = serde_json::to_value(&class).unwrap();
    let back: Class = serde_json::from_value(json.clone()).unwrap();
    assert_eq!(back, class);

    json["inner_elements_order"] = serde_json::json!([]);
    json["is_static"] = serde_json::json!(true);
    let err = serde_json::from_value::<Class>(json).unwrap_err().to_string();
    assert!(err.starts_with("Failed to build Class:"), "{err}");
    assert!(err.contains("Only inner classes can be static!"), "{err}");

    let nested = serde_json::json!({
        "editable": false,
        "field_type": "",
        "name": "x",
        "javadoc": null,
        "annotations": [],
        "visibility": "none",
        "is_static": false,
        "is_final": false,
        "value": null,
    });
    assert!(serde_json::from_value::<Field>(nested).is_err());
}

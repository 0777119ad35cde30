use super::*;

fn json_of(expr: &str) -> serde_json::Value {
    let text = stringify(expr)
        .expect("expression evaluates")
        .expect("expression has a value");
    serde_json::from_str(&text).expect("stringify emits valid JSON")
}

// -----------------------------------------------------------------------
// Literals
// -----------------------------------------------------------------------

#[test]
fn object_literal_stringifies() {
    assert_eq!(
        json_of(r#"{a:1,b:"x",c:true,d:null}"#),
        serde_json::json!({"a": 1, "b": "x", "c": true, "d": null})
    );
}

#[test]
fn nested_arrays_and_objects() {
    assert_eq!(
        json_of(r#"{list:[1,[2,3],{inner:"v"}]}"#),
        serde_json::json!({"list": [1, [2, 3], {"inner": "v"}]})
    );
}

#[test]
fn integral_numbers_keep_integer_form() {
    assert_eq!(stringify("6506").expect("evaluates"), Some("6506".to_owned()));
}

#[test]
fn numeric_forms_evaluate() {
    assert_eq!(json_of("-1.5e3"), serde_json::json!(-1500));
    assert_eq!(json_of("0xff"), serde_json::json!(255));
    assert_eq!(json_of(".5"), serde_json::json!(0.5));
    assert_eq!(json_of("+3"), serde_json::json!(3));
}

#[test]
fn string_quoting_and_escapes() {
    assert_eq!(json_of(r#"["a",'b']"#), serde_json::json!(["a", "b"]));
    assert_eq!(json_of(r#""é\x41\n""#), serde_json::json!("éA\n"));
    assert_eq!(json_of(r#""\"quoted\"""#), serde_json::json!("\"quoted\""));
}

#[test]
fn surrogate_pairs_combine() {
    assert_eq!(json_of(r#""😀""#), serde_json::json!("😀"));
}

#[test]
fn unpaired_surrogate_is_an_error() {
    assert!(matches!(
        stringify(r#""\ud83d""#),
        Err(EvalError::BadEscape { .. })
    ));
}

#[test]
fn keyword_and_numeric_object_keys() {
    assert_eq!(
        json_of(r#"{new:true,"quoted key":1,3:"three"}"#),
        serde_json::json!({"new": true, "quoted key": 1, "3": "three"})
    );
}

#[test]
fn trailing_commas_are_accepted() {
    assert_eq!(
        json_of("{a:[1,2,],}"),
        serde_json::json!({"a": [1, 2]})
    );
}

// -----------------------------------------------------------------------
// Undefined handling
// -----------------------------------------------------------------------

#[test]
fn undefined_root_has_no_value() {
    assert_eq!(stringify("undefined").expect("evaluates"), None);
    assert_eq!(stringify("void 0").expect("evaluates"), None);
}

#[test]
fn undefined_array_elements_serialize_as_null() {
    assert_eq!(json_of("[void 0,1]"), serde_json::json!([null, 1]));
}

#[test]
fn undefined_object_members_are_dropped() {
    assert_eq!(json_of("{a:void 0,b:1}"), serde_json::json!({"b": 1}));
}

// -----------------------------------------------------------------------
// Function application (the framework's deobfuscation shape)
// -----------------------------------------------------------------------

#[test]
fn iife_with_inner_call_substitutes_parameters() {
    let expr = r#"(function(a,b){return {x:a,y:[b,null],z:a}}("p","q"))"#;
    assert_eq!(
        json_of(expr),
        serde_json::json!({"x": "p", "y": ["q", null], "z": "p"})
    );
}

#[test]
fn iife_with_outer_call_substitutes_parameters() {
    let expr = r#"(function(a){return {v:a}})(42)"#;
    assert_eq!(json_of(expr), serde_json::json!({"v": 42}));
}

#[test]
fn missing_arguments_bind_to_undefined() {
    let expr = "(function(a,b){return {x:a,y:b}}(1))";
    assert_eq!(json_of(expr), serde_json::json!({"x": 1}));
}

#[test]
fn surplus_arguments_are_rejected() {
    assert!(matches!(
        stringify("(function(a){return a}(1,2))"),
        Err(EvalError::ArityMismatch {
            declared: 1,
            got: 2
        })
    ));
}

#[test]
fn empty_function_body_evaluates_to_no_value() {
    assert_eq!(stringify("(function(){})()").expect("evaluates"), None);
}

#[test]
fn named_function_expressions_are_accepted() {
    assert_eq!(json_of("(function f(a){return a}(7))"), serde_json::json!(7));
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert!(matches!(stringify("(1)(2)"), Err(EvalError::NotCallable)));
}

// -----------------------------------------------------------------------
// Failure modes
// -----------------------------------------------------------------------

#[test]
fn empty_input_is_an_error() {
    assert_eq!(stringify(""), Err(EvalError::UnexpectedEnd));
}

#[test]
fn bare_semicolon_is_an_error() {
    assert!(matches!(
        stringify(";"),
        Err(EvalError::UnexpectedChar { ch: ';', at: 0 })
    ));
}

#[test]
fn unbound_identifier_is_an_error() {
    assert!(matches!(
        stringify("{a:missing}"),
        Err(EvalError::UnknownIdentifier { .. })
    ));
}

#[test]
fn truncated_object_is_an_error() {
    assert!(stringify(r#"{a:"#).is_err());
    assert!(stringify(r#"{"ok":""#).is_err());
}

#[test]
fn trailing_input_is_an_error() {
    assert!(matches!(
        stringify("1 2"),
        Err(EvalError::TrailingInput { .. })
    ));
}

#[test]
fn trailing_semicolon_is_tolerated() {
    assert_eq!(stringify("{};").expect("evaluates"), Some("{}".to_owned()));
}

use super::*;

fn page(payload: &str) -> String {
    format!("<html><body><script>window.__NUXT__={payload};</script></body></html>")
}

#[test]
fn pipeline_recovers_json_from_a_literal_payload() {
    let html = page(r#"{state:{sign_in:null},routePath:"/"}"#);

    let json = extract_state_json(&html).expect("pipeline succeeds");
    let decoded: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
    assert_eq!(
        decoded,
        serde_json::json!({"state": {"sign_in": null}, "routePath": "/"})
    );
}

#[test]
fn pipeline_decodes_an_iife_payload_into_the_schema() {
    let html = page(concat!(
        r#"(function(a,b){return {error:a,state:{sign_in:a,programs:{programs:{all:"#,
        r#"[{id:139,directory_name:b,title:"神様",contents:[]}]"#,
        r#"}}},routePath:"/"}}(null,"kamisama-day"))"#
    ));

    let root = parse_page(&html).expect("pipeline succeeds");
    let program = &root.state.programs.programs.all[0];
    assert_eq!(program.id, 139);
    assert_eq!(program.directory_name, "kamisama-day");
    assert_eq!(program.title, "神様");
    assert!(root.state.signin.is_none());
}

#[test]
fn missing_marker_is_marker_not_found() {
    let err = parse_page("<html><body>no state here</body></html>").expect_err("no marker");
    assert!(matches!(err, ScrapeError::MarkerNotFound));
}

#[test]
fn malformed_payload_is_an_evaluation_error() {
    let err = parse_page(&page("{a:}")).expect_err("payload does not parse");
    assert!(matches!(err, ScrapeError::Evaluation(_)));
}

#[test]
fn undefined_payload_is_an_empty_evaluation() {
    let err = parse_page(&page("void 0")).expect_err("payload has no value");
    assert!(matches!(err, ScrapeError::EmptyEvaluation));
}

#[test]
fn schema_mismatch_is_a_decode_error() {
    // Evaluates fine but `state` has the wrong shape for the schema.
    let err = parse_page(&page(r#"{state:[1,2,3]}"#)).expect_err("schema mismatch");
    assert!(matches!(err, ScrapeError::SchemaDecode { .. }));
}

#[test]
fn empty_object_payload_decodes_to_an_empty_document() {
    let root = parse_page(&page("{}")).expect("empty document is valid");
    assert!(root.state.programs.programs.all.is_empty());
    assert!(root.state.signin.is_none());
}

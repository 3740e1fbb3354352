use raptor_router_rs::{
    HttpMethod, ReadOnlyError, Router, RouterError, Value, pattern::PatternError,
};

fn router_with(template: &str) -> Router<()> {
    let router = Router::new(None);
    router
        .add(HttpMethod::Get, template, ())
        .expect("route should register");
    router.seal().expect("router should seal");
    router
}

fn expect_not_found<T: std::fmt::Debug>(result: Result<T, RouterError>) {
    match result {
        Err(RouterError::ReadOnly(ReadOnlyError::RouteNotFound { .. })) => {}
        other => panic!("expected route not found, got {other:?}"),
    }
}

fn expect_pattern_error<T: std::fmt::Debug>(result: Result<T, RouterError>) -> PatternError {
    match result {
        Err(RouterError::Pattern(err)) => err,
        other => panic!("expected pattern error, got {other:?}"),
    }
}

#[test]
fn router_when_uint_placeholder_matches_then_yields_integer() {
    let router = router_with("/items/{id:uint}");

    let found = router
        .find(HttpMethod::Get, "/items/42")
        .expect("uint route should match");

    assert_eq!(found.arguments().get("id"), Some(&Value::Uint(42)));
    assert_eq!(found.arguments().get_as::<u64>("id"), Some(42));
}

#[test]
fn router_when_uint_placeholder_receives_sign_then_not_found() {
    let router = router_with("/items/{id:uint}");

    expect_not_found(router.find(HttpMethod::Get, "/items/-1"));
    expect_not_found(router.find(HttpMethod::Get, "/items/abc"));
}

#[test]
fn router_when_int_placeholder_receives_sign_then_yields_signed_value() {
    let router = router_with("/offset/{delta:int}");

    let found = router
        .find(HttpMethod::Get, "/offset/-17")
        .expect("signed value should match");
    assert_eq!(found.arguments().get("delta"), Some(&Value::Int(-17)));
}

#[test]
fn router_when_float_placeholder_matches_then_yields_float() {
    let router = router_with("/scale/{factor:float}");

    let found = router
        .find(HttpMethod::Get, "/scale/1.25")
        .expect("float should match");
    assert_eq!(found.arguments().get_as::<f64>("factor"), Some(1.25));
}

#[test]
fn router_when_path_placeholder_used_then_captures_rest_of_path() {
    let router = router_with("/files/{p:path}");

    let found = router
        .find(HttpMethod::Get, "/files/a/b/c.txt")
        .expect("path placeholder should match");
    assert_eq!(
        found.arguments().get_as::<String>("p").as_deref(),
        Some("a/b/c.txt")
    );

    expect_not_found(router.find(HttpMethod::Get, "/files"));
}

#[test]
fn router_when_str_placeholder_used_then_stays_in_one_segment() {
    let router = router_with("/users/{name:str}");

    router
        .find(HttpMethod::Get, "/users/alice")
        .expect("single segment should match");
    expect_not_found(router.find(HttpMethod::Get, "/users/alice/extra"));
}

#[test]
fn router_when_digest_placeholder_used_then_length_is_enforced() {
    let router = router_with("/blobs/{digest:sha256}");
    let digest = "a".repeat(64);

    let found = router
        .find(HttpMethod::Get, &format!("/blobs/{digest}"))
        .expect("sha256 digest should match");
    assert_eq!(
        found.arguments().get("digest"),
        Some(&Value::Str(digest.clone()))
    );

    expect_not_found(router.find(HttpMethod::Get, &format!("/blobs/{}", &digest[1..])));
    expect_not_found(router.find(HttpMethod::Get, &format!("/blobs/{}", "z".repeat(64))));
}

#[test]
fn router_when_uuid4_placeholder_used_then_version_is_enforced() {
    let router = router_with("/sessions/{sid:uuid4}");

    router
        .find(HttpMethod::Get, "/sessions/3f2b8c1e-9d4a-4b6f-8e2d-1a2b3c4d5e6f")
        .expect("v4 uuid should match");
    expect_not_found(
        router.find(HttpMethod::Get, "/sessions/3f2b8c1e-9d4a-1b6f-8e2d-1a2b3c4d5e6f"),
    );
}

#[test]
fn router_when_type_tag_unknown_then_treated_as_str() {
    let router = router_with("/tags/{tag:slug}");

    let found = router
        .find(HttpMethod::Get, "/tags/rust-lang")
        .expect("unknown tag should behave like str");
    assert_eq!(
        found.arguments().get("tag"),
        Some(&Value::Str("rust-lang".to_string()))
    );
}

#[test]
fn router_when_multiple_placeholders_then_arguments_follow_template_order() {
    let router = router_with("/orgs/{org:str}/repos/{repo:}/issues/{number:uint}");

    let found = router
        .find(HttpMethod::Get, "/orgs/acme/repos/anvil/issues/7")
        .expect("route should match");

    let keys: Vec<_> = found.arguments().keys().collect();
    assert_eq!(keys, vec!["org", "repo", "number"]);
}

#[test]
fn router_when_uint_overflows_then_conversion_error_maps_to_500() {
    let router = router_with("/items/{id:uint}");

    match router.find(HttpMethod::Get, "/items/99999999999999999999999") {
        Err(err @ RouterError::ReadOnly(ReadOnlyError::Conversion(_))) => {
            assert_eq!(err.status_code(), Some(500));
        }
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn router_when_duplicate_parameter_names_used_then_returns_error() {
    let router: Router<()> = Router::new(None);

    match expect_pattern_error(router.add(HttpMethod::Get, "/{id:int}/{id:str}", ())) {
        PatternError::DuplicateParameterName { name, .. } => assert_eq!(name, "id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_braces_unbalanced_then_returns_error() {
    let router: Router<()> = Router::new(None);

    match expect_pattern_error(router.add(HttpMethod::Get, "/users/{id:int", ())) {
        PatternError::UnbalancedBrace { segment } => assert_eq!(segment, "{id:int"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_parameter_name_starts_with_digit_then_returns_error() {
    let router: Router<()> = Router::new(None);

    match expect_pattern_error(router.add(HttpMethod::Get, "/{1id:int}", ())) {
        PatternError::ParameterInvalidStart { name, .. } => assert_eq!(name, "1id"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_syntax_error_then_table_is_unchanged() {
    let router: Router<()> = Router::new(None);
    router
        .add(HttpMethod::Get, "/ok", ())
        .expect("valid route should register");

    assert!(router.add(HttpMethod::Get, "/bad/{x", ()).is_err());
    assert_eq!(router.list_templates(), vec!["/ok"]);
}

#[test]
fn router_when_type_tag_is_not_a_known_word_then_defaults_to_str() {
    let router = router_with("/t/{id:uuid-v4}");

    let found = router
        .find(HttpMethod::Get, "/t/not-a-uuid")
        .expect("free-form tag should match as str");
    assert_eq!(
        found.arguments().get("id"),
        Some(&Value::Str("not-a-uuid".to_string()))
    );
}

#[test]
fn router_when_placeholder_lacks_type_separator_then_returns_error() {
    let router: Router<()> = Router::new(None);

    match expect_pattern_error(router.add(HttpMethod::Get, "/u/{name}", ())) {
        PatternError::MissingTypeSeparator { segment } => assert_eq!(segment, "{name}"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(router.list_templates().is_empty());
}

#[test]
fn router_when_placeholder_has_two_type_separators_then_returns_error() {
    let router: Router<()> = Router::new(None);

    match expect_pattern_error(router.add(HttpMethod::Get, "/{a:b:c}", ())) {
        PatternError::RepeatedTypeSeparator { .. } => {}
        other => panic!("unexpected error: {other:?}"),
    }
}

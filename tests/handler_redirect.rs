mod common;

use axum_test::TestServer;
use common::{FALLBACK_URL, MockConnectInfoLayer};
use golinks::domain::entities::ShortlinkRecord;
use golinks::routes::app_routes;
use golinks::state::AppState;
use std::sync::Arc;

fn server(state: AppState) -> TestServer {
    let app = app_routes(state, common::create_static_dir()).layer(MockConnectInfoLayer);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_redirect_preserving_method_returns_307() {
    let state = common::create_test_state(vec![ShortlinkRecord::new(
        "Test1",
        "https://github.com/solari23/GoLinks",
    )])
    .await;
    let server = server(state);

    let response = server.get("/Test1").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://github.com/solari23/GoLinks"
    );
}

#[tokio::test]
async fn test_redirect_keeps_307_for_post() {
    let state = common::create_test_state(vec![ShortlinkRecord::new(
        "form",
        "https://forms.example.com/submit",
    )])
    .await;
    let server = server(state);

    let response = server.post("/form").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(
        response.header("location"),
        "https://forms.example.com/submit"
    );
}

#[tokio::test]
async fn test_redirect_without_preserving_method_returns_302() {
    let state = common::create_test_state(vec![
        ShortlinkRecord::new("docs", "https://docs.example.com/").with_preserve_http_method(false),
    ])
    .await;
    let server = server(state);

    let response = server.get("/docs").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://docs.example.com/");
}

#[tokio::test]
async fn test_redirect_lookup_is_case_insensitive() {
    let state = common::create_test_state(vec![ShortlinkRecord::new(
        "Test1",
        "https://github.com/solari23/GoLinks",
    )])
    .await;
    let server = server(state);

    for path in ["/test1", "/TEST1", "/tEsT1"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 307, "path {}", path);
        assert_eq!(
            response.header("location"),
            "https://github.com/solari23/GoLinks"
        );
    }
}

#[tokio::test]
async fn test_unknown_shortlink_redirects_to_fallback() {
    let state = common::create_test_state(vec![]).await;
    let server = server(state);

    let response = server.get("/does-not-exist").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), FALLBACK_URL);
}

#[tokio::test]
async fn test_inactive_shortlink_redirects_to_fallback() {
    let state = common::create_test_state(vec![
        ShortlinkRecord::new("retired", "https://old.example.com/").with_active(false),
    ])
    .await;
    let server = server(state);

    let response = server.get("/retired").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), FALLBACK_URL);
}

#[tokio::test]
async fn test_nested_path_is_a_single_shortlink_id() {
    let state = common::create_test_state(vec![ShortlinkRecord::new(
        "team/wiki",
        "https://wiki.example.com/team",
    )])
    .await;
    let server = server(state);

    let response = server.get("/team/wiki").await;

    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "https://wiki.example.com/team");
}

#[tokio::test]
async fn test_storage_failure_returns_generic_server_error() {
    let state = common::state_with_storage(Arc::new(common::UnavailableStorage));
    let server = server(state);

    let response = server.get("/Test1").await;

    assert_eq!(response.status_code(), 500);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "internal_error");
    assert_eq!(json["error"]["message"], "Internal server error");
}

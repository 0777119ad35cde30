use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

#[tokio::test]
async fn sends_user_agent_and_session_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", USER_AGENT))
        .and(header("cookie", "_session_id=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let html = fetch_page(&server.uri(), Some("abc123"))
        .await
        .expect("fetch succeeds");
    assert_eq!(html, "<html>ok</html>");
}

#[tokio::test]
async fn omits_the_cookie_for_anonymous_sessions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>anon</html>"))
        .mount(&server)
        .await;

    let html = fetch_page(&server.uri(), None).await.expect("fetch succeeds");
    assert_eq!(html, "<html>anon</html>");

    let requests = server
        .received_requests()
        .await
        .expect("request recording enabled");
    assert!(requests[0].headers.get("cookie").is_none());
}

#[tokio::test]
async fn error_status_fails_the_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(fetch_page(&server.uri(), None).await.is_err());
}

#[tokio::test]
async fn file_backend_reads_an_archived_page() {
    let path = std::env::temp_dir().join("onsen-fetch-test.html");
    std::fs::write(&path, "<html>archived</html>").expect("write temp fixture");

    let backend = format!("file://{}", path.display());
    let html = fetch_page(&backend, None).await.expect("read succeeds");
    assert_eq!(html, "<html>archived</html>");
}

#[tokio::test]
async fn missing_archived_page_is_an_error() {
    assert!(fetch_page("file:///no/such/page.html", None).await.is_err());
}

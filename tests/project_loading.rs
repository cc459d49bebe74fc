//! End-to-end project loading through the real HTTP adapter.

use std::sync::Arc;

use folio::adapters::ReqwestHttpClient;
use folio::loader::{
    LoadedContent, ProjectLoader, PLACEHOLDER_LOAD_ERROR, PLACEHOLDER_MISSING_CONTENT,
};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn loader_for(base_url: String) -> ProjectLoader {
    ProjectLoader::new(Arc::new(ReqwestHttpClient::new()), base_url)
}

#[tokio::test]
async fn fetches_and_returns_markdown_content() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/projects/angular-todo-app.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Hi\n\nA todo app."))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = loader_for(server.uri()).load("angular-todo-app").await;

    assert_eq!(
        outcome.title.as_deref(),
        Some("Angular Todo Application - Fernando Rocha")
    );
    assert_eq!(
        outcome.content,
        LoadedContent::Markdown("# Hi\n\nA todo app.".to_string())
    );
}

#[tokio::test]
async fn missing_resource_degrades_to_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/assets/projects/react-dashboard.md"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let outcome = loader_for(server.uri()).load("react-dashboard").await;
    assert_eq!(
        outcome.content,
        LoadedContent::Placeholder(PLACEHOLDER_MISSING_CONTENT)
    );
}

#[tokio::test]
async fn unreachable_server_degrades_to_error_placeholder() {
    // Nothing listens here; the connection is refused immediately.
    let outcome = loader_for("http://127.0.0.1:59999".to_string())
        .load("vue-ecommerce")
        .await;
    assert_eq!(
        outcome.content,
        LoadedContent::Placeholder(PLACEHOLDER_LOAD_ERROR)
    );
}

#[tokio::test]
async fn unknown_id_makes_no_request() {
    let server = MockServer::start().await;
    // No mocks mounted: any request would return 404 and still count; the
    // loader must not hit the server at all.
    let outcome = loader_for(server.uri()).load("nonexistent-id").await;
    assert_eq!(
        outcome.content,
        LoadedContent::Placeholder(folio::loader::PLACEHOLDER_MISSING_PROJECT)
    );
    assert!(server.received_requests().await.unwrap().is_empty());
}

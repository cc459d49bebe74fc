//! Project detail loader.
//!
//! Resolves a navigation id against the static catalog, fetches the project's
//! markdown resource, and degrades every failure to a fixed placeholder. The
//! loader never returns an error: resource problems become user-visible
//! placeholder text, transient failures additionally land in the diagnostic
//! log.

use std::sync::Arc;

use crate::models::{find_detail, OWNER_NAME};
use crate::traits::HttpClient;

/// Shown when the id is not in the catalog.
pub const PLACEHOLDER_MISSING_PROJECT: &str = "Project not found.";

/// Shown when the fetch returns a non-success status.
pub const PLACEHOLDER_MISSING_CONTENT: &str = "Project content not found.";

/// Shown when the fetch or conversion fails outright.
pub const PLACEHOLDER_LOAD_ERROR: &str = "Error loading project content.";

/// What a load produced for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadedContent {
    /// Markdown body ready for conversion to display markup
    Markdown(String),
    /// Fixed fallback text
    Placeholder(&'static str),
}

/// Result of one `load` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    /// The id that was requested
    pub id: String,
    /// Terminal title to apply, when the id resolved to a project
    pub title: Option<String>,
    pub content: LoadedContent,
}

/// Fetches project detail pages through the injected HTTP client.
#[derive(Clone)]
pub struct ProjectLoader {
    client: Arc<dyn HttpClient>,
    base_url: String,
}

impl ProjectLoader {
    pub fn new(client: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Load the detail content for a project id.
    ///
    /// Exact-match lookup; an unknown id yields its placeholder without any
    /// fetch attempt. A known id derives the title, fetches the markdown
    /// resource, and maps non-success responses and transport/decode errors
    /// to their placeholders.
    pub async fn load(&self, id: &str) -> LoadOutcome {
        let Some(detail) = find_detail(id) else {
            return LoadOutcome {
                id: id.to_string(),
                title: None,
                content: LoadedContent::Placeholder(PLACEHOLDER_MISSING_PROJECT),
            };
        };

        let title = format!("{} - {}", detail.title, OWNER_NAME);
        let url = format!(
            "{}/assets/projects/{}",
            self.base_url.trim_end_matches('/'),
            detail.markdown_file
        );

        let content = match self.client.get(&url).await {
            Ok(response) if response.is_success() => match response.text() {
                Ok(markdown) => LoadedContent::Markdown(markdown),
                Err(err) => {
                    tracing::error!(project = id, error = %err, "project content is not valid UTF-8");
                    LoadedContent::Placeholder(PLACEHOLDER_LOAD_ERROR)
                }
            },
            Ok(response) => {
                tracing::debug!(project = id, status = response.status, %url, "project content missing");
                LoadedContent::Placeholder(PLACEHOLDER_MISSING_CONTENT)
            }
            Err(err) => {
                tracing::error!(project = id, error = %err, %url, "failed to load project content");
                LoadedContent::Placeholder(PLACEHOLDER_LOAD_ERROR)
            }
        };

        LoadOutcome {
            id: id.to_string(),
            title: Some(title),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::{HttpError, Response};
    use bytes::Bytes;

    fn loader_with(client: MockHttpClient) -> ProjectLoader {
        ProjectLoader::new(Arc::new(client), "https://frocha.net")
    }

    #[tokio::test]
    async fn successful_fetch_yields_markdown_and_title() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://frocha.net/assets/projects/angular-todo-app.md",
            MockResponse::Success(Response::new(200, Bytes::from("# Hi"))),
        );
        let requests = client.clone();

        let outcome = loader_with(client).load("angular-todo-app").await;
        assert_eq!(
            outcome.title.as_deref(),
            Some("Angular Todo Application - Fernando Rocha")
        );
        assert_eq!(outcome.content, LoadedContent::Markdown("# Hi".to_string()));
        assert_eq!(requests.request_count(), 1);
    }

    #[tokio::test]
    async fn markdown_converts_to_heading_markup() {
        use crate::markdown::render_markdown;
        use crate::ui::theme::Palette;
        use ratatui::style::Modifier;

        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from("# Hi"),
        )));

        let outcome = loader_with(client).load("angular-todo-app").await;
        let LoadedContent::Markdown(markdown) = outcome.content else {
            panic!("expected markdown content");
        };
        let rendered = render_markdown(&markdown, &Palette::light());
        assert_eq!(rendered.plain_lines(), vec!["Hi"]);
        assert!(rendered.lines[0].spans[0]
            .style
            .add_modifier
            .contains(Modifier::BOLD));
    }

    #[tokio::test]
    async fn unknown_id_yields_placeholder_without_fetching() {
        let client = MockHttpClient::new();
        let requests = client.clone();

        let outcome = loader_with(client).load("nonexistent-id").await;
        assert_eq!(
            outcome.content,
            LoadedContent::Placeholder(PLACEHOLDER_MISSING_PROJECT)
        );
        assert_eq!(outcome.title, None);
        assert_eq!(requests.request_count(), 0);
    }

    #[tokio::test]
    async fn non_success_status_yields_missing_content_placeholder() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(404, Bytes::new())));

        let outcome = loader_with(client).load("react-dashboard").await;
        assert_eq!(
            outcome.content,
            LoadedContent::Placeholder(PLACEHOLDER_MISSING_CONTENT)
        );
        // Title still reflects the matched project.
        assert_eq!(
            outcome.title.as_deref(),
            Some("React Analytics Dashboard - Fernando Rocha")
        );
    }

    #[tokio::test]
    async fn transport_error_yields_error_placeholder() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));

        let outcome = loader_with(client).load("vue-ecommerce").await;
        assert_eq!(
            outcome.content,
            LoadedContent::Placeholder(PLACEHOLDER_LOAD_ERROR)
        );
    }

    #[tokio::test]
    async fn invalid_utf8_body_takes_the_error_path() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(
            200,
            Bytes::from_static(&[0xff, 0xfe]),
        )));

        let outcome = loader_with(client).load("vue-ecommerce").await;
        assert_eq!(
            outcome.content,
            LoadedContent::Placeholder(PLACEHOLDER_LOAD_ERROR)
        );
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_tolerated() {
        let client = MockHttpClient::new();
        client.set_response(
            "https://frocha.net/assets/projects/vue-ecommerce.md",
            MockResponse::Success(Response::new(200, Bytes::from("ok"))),
        );
        let requests = client.clone();

        let loader = ProjectLoader::new(Arc::new(client), "https://frocha.net/");
        let outcome = loader.load("vue-ecommerce").await;
        assert_eq!(outcome.content, LoadedContent::Markdown("ok".to_string()));
        assert_eq!(
            requests.requests(),
            vec!["https://frocha.net/assets/projects/vue-ecommerce.md"]
        );
    }
}

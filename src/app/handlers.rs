//! Message handling for the App.

use super::{App, AppMessage};

impl App {
    /// Apply an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::ProjectLoaded {
                generation,
                outcome,
            } => {
                if generation != self.project.generation {
                    // A newer navigation superseded this load; dropping the
                    // result keeps last-writer-wins races out of the view.
                    tracing::debug!(
                        project = %outcome.id,
                        stale = generation,
                        current = self.project.generation,
                        "discarding stale project load"
                    );
                    return;
                }

                self.project.is_loading = false;
                if let Some(title) = outcome.title {
                    self.set_title(title);
                }
                self.project.content = Some(outcome.content);
                self.mark_dirty();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use super::*;
    use crate::loader::{LoadOutcome, LoadedContent, PLACEHOLDER_MISSING_PROJECT};

    fn outcome(id: &str, content: LoadedContent) -> LoadOutcome {
        LoadOutcome {
            id: id.to_string(),
            title: Some(format!("{} - Fernando Rocha", id)),
            content,
        }
    }

    #[tokio::test]
    async fn current_generation_result_is_applied() {
        let (mut app, _rx, _client, _dir) = test_app();
        app.project.generation = 1;
        app.project.is_loading = true;

        app.handle_message(AppMessage::ProjectLoaded {
            generation: 1,
            outcome: outcome("x", LoadedContent::Markdown("# Hi".to_string())),
        });

        assert!(!app.project.is_loading);
        assert_eq!(
            app.project.content,
            Some(LoadedContent::Markdown("# Hi".to_string()))
        );
    }

    #[tokio::test]
    async fn stale_generation_result_is_discarded() {
        let (mut app, _rx, _client, _dir) = test_app();
        app.project.generation = 2;
        app.project.is_loading = true;

        app.handle_message(AppMessage::ProjectLoaded {
            generation: 1,
            outcome: outcome("slow", LoadedContent::Markdown("old".to_string())),
        });

        // The in-flight (current) load is still pending.
        assert!(app.project.is_loading);
        assert_eq!(app.project.content, None);

        app.handle_message(AppMessage::ProjectLoaded {
            generation: 2,
            outcome: outcome("fast", LoadedContent::Markdown("new".to_string())),
        });
        assert!(!app.project.is_loading);
        assert_eq!(
            app.project.content,
            Some(LoadedContent::Markdown("new".to_string()))
        );
    }

    #[tokio::test]
    async fn placeholder_outcome_lowers_the_loading_flag() {
        let (mut app, _rx, _client, _dir) = test_app();
        app.project.generation = 1;
        app.project.is_loading = true;

        app.handle_message(AppMessage::ProjectLoaded {
            generation: 1,
            outcome: LoadOutcome {
                id: "nonexistent-id".to_string(),
                title: None,
                content: LoadedContent::Placeholder(PLACEHOLDER_MISSING_PROJECT),
            },
        });

        assert!(!app.project.is_loading);
        assert_eq!(
            app.project.content,
            Some(LoadedContent::Placeholder(PLACEHOLDER_MISSING_PROJECT))
        );
    }

    #[tokio::test]
    async fn end_to_end_load_through_the_channel() {
        let (mut app, mut rx, client, _dir) = test_app();
        client.set_default_response(crate::adapters::mock::MockResponse::Success(
            crate::traits::Response::new(200, bytes::Bytes::from("# Hi")),
        ));

        app.open_project("angular-todo-app");
        let msg = rx.recv().await.expect("load completes");
        app.handle_message(msg);

        assert!(!app.project.is_loading);
        assert_eq!(
            app.project.content,
            Some(LoadedContent::Markdown("# Hi".to_string()))
        );
        assert_eq!(
            app.take_pending_title().as_deref(),
            Some("Angular Todo Application - Fernando Rocha")
        );
    }
}

//! Navigation methods for the App.

use super::{App, Screen};
use crate::loader::ProjectLoader;
use crate::models::{OWNER_NAME, PROJECT_SUMMARIES};

impl App {
    pub fn navigate_home(&mut self) {
        self.screen = Screen::Home;
        self.set_title(format!("Home - {}", OWNER_NAME));
        self.mark_dirty();
    }

    pub fn navigate_portfolio(&mut self) {
        self.screen = Screen::Portfolio;
        self.set_title(format!("Portfolio - {}", OWNER_NAME));
        self.mark_dirty();
    }

    /// Leave the project view back to the listing.
    pub fn navigate_back(&mut self) {
        match self.screen {
            Screen::Project => self.navigate_portfolio(),
            _ => self.quit(),
        }
    }

    /// Move the listing selection up.
    pub fn select_previous(&mut self) {
        if self.portfolio_index > 0 {
            self.portfolio_index -= 1;
            self.mark_dirty();
        }
    }

    /// Move the listing selection down.
    pub fn select_next(&mut self) {
        if self.portfolio_index + 1 < PROJECT_SUMMARIES.len() {
            self.portfolio_index += 1;
            self.mark_dirty();
        }
    }

    /// Open the detail view for the selected listing entry.
    pub fn open_selected_project(&mut self) {
        let Some(project) = PROJECT_SUMMARIES.get(self.portfolio_index) else {
            return;
        };
        let id = project.id.clone();
        self.open_project(&id);
    }

    /// Navigate to a project detail page and start its load.
    ///
    /// Each invocation is independent; a fetch already in flight is not
    /// cancelled, but its result will carry a stale generation and be
    /// discarded on arrival.
    pub fn open_project(&mut self, id: &str) {
        self.screen = Screen::Project;
        self.project.id = id.to_string();
        self.project.content = None;
        self.project.scroll = 0;
        self.project.is_loading = true;
        self.project.generation += 1;
        // Provisional title until the load resolves the project name.
        self.set_title(format!("Project - {}", OWNER_NAME));
        self.mark_dirty();

        let generation = self.project.generation;
        let loader = ProjectLoader::new(self.http_client(), self.config.base_url.clone());
        let tx = self.sender();
        let id = id.to_string();
        tokio::spawn(async move {
            let outcome = loader.load(&id).await;
            let _ = tx.send(super::AppMessage::ProjectLoaded {
                generation,
                outcome,
            });
        });
    }

    /// Scroll the project content.
    pub fn scroll_project(&mut self, delta: i32) {
        let scroll = self.project.scroll as i32 + delta;
        self.project.scroll = scroll.clamp(0, u16::MAX as i32) as u16;
        self.mark_dirty();
    }
}

//! Application state and logic.
//!
//! The [`App`] struct owns the display-preference store, the current screen,
//! and the project-detail view state. Async work (the detail fetch) reports
//! back through [`AppMessage`]s on an mpsc channel; all state mutation
//! happens on the event-loop thread.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::Screen;

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::loader::LoadedContent;
use crate::models::OWNER_NAME;
use crate::theme::ThemeStore;
use crate::traits::HttpClient;

/// State of the project detail view.
#[derive(Debug, Default)]
pub struct ProjectView {
    /// Navigation id of the project being shown
    pub id: String,
    /// Loaded markdown or placeholder, None while nothing has arrived
    pub content: Option<LoadedContent>,
    /// True from the start of a load until its result is applied
    pub is_loading: bool,
    /// Vertical scroll offset into the rendered content
    pub scroll: u16,
    /// Monotonic token; results from older generations are stale
    pub generation: u64,
}

/// Main application state.
pub struct App {
    pub config: AppConfig,
    /// The display-preference store
    pub theme: ThemeStore,
    pub screen: Screen,
    pub should_quit: bool,
    pub portfolio_index: usize,
    pub project: ProjectView,
    /// Terminal title waiting to be applied by the event loop
    pub pending_title: Option<String>,
    dirty: bool,
    client: Arc<dyn HttpClient>,
    tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    pub fn new(
        config: AppConfig,
        theme: ThemeStore,
        client: Arc<dyn HttpClient>,
        tx: mpsc::UnboundedSender<AppMessage>,
    ) -> Self {
        let mut app = Self {
            config,
            theme,
            screen: Screen::default(),
            should_quit: false,
            portfolio_index: 0,
            project: ProjectView::default(),
            pending_title: None,
            dirty: true,
            client,
            tx,
        };
        app.set_title(format!("Home - {}", OWNER_NAME));
        app
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Consume the dirty flag; the loop draws when this returns true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Consume the pending terminal title, if any.
    pub fn take_pending_title(&mut self) -> Option<String> {
        self.pending_title.take()
    }

    /// Queue a terminal title update.
    pub fn set_title(&mut self, title: String) {
        self.pending_title = Some(title);
    }

    /// Flip the display preference; the next frame picks up the new palette.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.mark_dirty();
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub(crate) fn http_client(&self) -> Arc<dyn HttpClient> {
        Arc::clone(&self.client)
    }

    pub(crate) fn sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.tx.clone()
    }
}

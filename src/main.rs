//! folio - a terminal portfolio browser.
//!
//! Startup wires the preference store, configuration, and HTTP client into
//! the [`App`], then runs a single event loop multiplexing terminal input and
//! async load results.

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal::SetTitle};
use folio::adapters::ReqwestHttpClient;
use folio::app::{App, AppMessage, Screen};
use folio::config::AppConfig;
use folio::loader::LoadedContent;
use folio::models::PROFILE;
use folio::storage;
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::theme::ThemeStore;
use folio::ui;
use futures::StreamExt;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Set up file-based tracing when `FOLIO_LOG` is present.
///
/// Diagnostics go to a log file rather than stdout: the alternate screen owns
/// the terminal while the TUI runs.
fn init_tracing() {
    if std::env::var("FOLIO_LOG").is_err() {
        return;
    }
    let dir = storage::preference_dir();
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    match std::fs::File::create(dir.join("folio.log")) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_env("FOLIO_LOG"))
                .with_writer(file)
                .with_ansi(false)
                .init();
        }
        Err(_) => {
            // No log file, no logging; the preference is cosmetic here too.
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    let config = AppConfig::from_env();
    let theme = ThemeStore::load();
    let client = Arc::new(ReqwestHttpClient::new());
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();

    let mut app = App::new(config, theme, client, tx);
    let mut term_manager = TerminalManager::new()?;

    let mut events = EventStream::new();

    loop {
        if let Some(title) = app.take_pending_title() {
            let _ = execute!(std::io::stdout(), SetTitle(title));
        }

        if app.take_dirty() {
            term_manager.terminal().draw(|frame| ui::render(frame, &app))?;
        }

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(&mut app, key.code, key.modifiers);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Err(_)) | None => app.quit(),
                    _ => {}
                }
            }
            Some(msg) = rx.recv() => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Dispatch a key press against the current screen.
fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Esc => app.navigate_back(),
        KeyCode::Char('t') => app.toggle_theme(),
        KeyCode::Char('h') | KeyCode::Char('1') => app.navigate_home(),
        KeyCode::Char('p') | KeyCode::Char('2') => app.navigate_portfolio(),
        KeyCode::Tab => match app.screen {
            Screen::Home => app.navigate_portfolio(),
            _ => app.navigate_home(),
        },
        KeyCode::Up | KeyCode::Char('k') => match app.screen {
            Screen::Portfolio => app.select_previous(),
            Screen::Project => app.scroll_project(-1),
            Screen::Home => {}
        },
        KeyCode::Down | KeyCode::Char('j') => match app.screen {
            Screen::Portfolio => app.select_next(),
            Screen::Project => app.scroll_project(1),
            Screen::Home => {}
        },
        KeyCode::Enter => {
            if app.screen == Screen::Portfolio {
                app.open_selected_project();
            }
        }
        // Social links on the home screen; errors are ignored, the URL is
        // visible on screen for manual use.
        KeyCode::Char('g') if app.screen == Screen::Home => {
            if let Some(link) = PROFILE.social_links.iter().find(|l| l.name == "GitHub") {
                let _ = open::that(&link.url);
            }
        }
        KeyCode::Char('l') if app.screen == Screen::Home => {
            if let Some(link) = PROFILE.social_links.iter().find(|l| l.name == "LinkedIn") {
                let _ = open::that(&link.url);
            }
        }
        KeyCode::Char('o') if app.screen == Screen::Project => {
            if let Some(LoadedContent::Markdown(markdown)) = &app.project.content {
                let rendered = folio::markdown::render_markdown(markdown, &app.theme.palette());
                if let Some(url) = rendered.links.first() {
                    let _ = open::that(url);
                }
            }
        }
        _ => {}
    }
}

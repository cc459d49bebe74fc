//! Type definitions for the application state.

/// Which screen is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Home,
    Portfolio,
    Project,
}

//! folio - a terminal portfolio browser
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod config;
pub mod loader;
pub mod markdown;
pub mod models;
pub mod storage;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;

//! AppMessage enum for async communication within the application.

use crate::loader::LoadOutcome;

/// Messages received from async operations.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A project detail load finished (successfully or degraded to a
    /// placeholder). `generation` identifies which navigation event started
    /// the load so superseded results can be discarded.
    ProjectLoaded {
        generation: u64,
        outcome: LoadOutcome,
    },
}

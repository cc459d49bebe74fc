//! Panic hook that restores the terminal before printing the report.
//!
//! Without this, a panic inside the alternate screen leaves the shell in raw
//! mode with the report invisible.

use super::setup::emergency_restore;

/// Install a panic hook that restores the terminal first.
pub fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        original_hook(panic_info);
    }));
}

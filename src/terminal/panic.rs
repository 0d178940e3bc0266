//! Panic hook that restores the terminal before the panic message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the current panic hook.
///
/// Install this before creating the `TerminalManager`, and after
/// `color_eyre::install()` so its report formatting is the hook that runs
/// second.
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        tracing::error!("panic: {panic_info}");
        original_hook(panic_info);
    }));
}

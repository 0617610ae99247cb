//! Shutdown tracking for watch and serve mode.
//!
//! Two flags:
//! - `SHUTDOWN`: Has shutdown been requested? (Ctrl+C received)
//! - `FOREGROUND`: Is a loop or child process running that handles shutdown itself?

use std::sync::atomic::{AtomicBool, Ordering};

/// Shutdown has been requested (Ctrl+C received)
static SHUTDOWN: AtomicBool = AtomicBool::new(false);

/// A watch loop or dev server child owns the terminal
/// - `false`: Ctrl+C exits immediately
/// - `true`: Ctrl+C only sets `SHUTDOWN`; the owner winds down
static FOREGROUND: AtomicBool = AtomicBool::new(false);

/// Setup the global Ctrl+C handler. Call once at program start
pub fn setup_shutdown_handler() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        SHUTDOWN.store(true, Ordering::SeqCst);

        if !FOREGROUND.load(Ordering::SeqCst) {
            // Nothing to wind down
            std::process::exit(130);
        }
    })
    .map_err(|e| anyhow::anyhow!("failed to set Ctrl+C handler: {}", e))
}

/// Mark the start of a loop or child process that polls [`is_shutdown`].
///
/// The dev server child receives the same interrupt and exits on its own.
pub fn enter_foreground() {
    FOREGROUND.store(true, Ordering::SeqCst);
}

pub fn leave_foreground() {
    FOREGROUND.store(false, Ordering::SeqCst);
}

/// Check if shutdown has been requested
///
/// Uses Relaxed ordering for performance - worst case is one more
/// watch iteration before stopping, which is acceptable
pub fn is_shutdown() -> bool {
    SHUTDOWN.load(Ordering::Relaxed)
}

// =============================================================================
// Tests
// =============================================================================

//! Process-wide state shared by long-running commands.

mod state;

pub use state::{enter_foreground, is_shutdown, leave_foreground, setup_shutdown_handler};

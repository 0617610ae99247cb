//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Dotted field paths for diagnostics           |
//! | `handle` | Global configuration handle (thread-safe)    |
//! | `port`   | Range-checked port number                    |

mod error;
mod field;
pub mod handle;
mod port;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config, reload_config};
pub use port::Port;

//! Command-line interface module.

mod args;
pub mod check;
pub mod generate;
pub mod init;
pub mod resolve;
pub mod serve;
pub mod show;

pub use args::{Cli, Commands};

//! Shared helpers.
//!
//! - [`exec`]: external command builder
//! - [`path`]: filesystem paths and link classification
//! - [`plural`]: count formatting for log lines

pub mod exec;
pub mod path;
pub mod plural;

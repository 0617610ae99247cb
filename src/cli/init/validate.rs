//! Pre-initialization validation.
//!
//! Validates target directory state before writing the config.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `docsite init` - write into the current directory
    CurrentDir,
    /// `docsite init <name>` - write into a (possibly new) subdirectory
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - the config file must not exist yet (never overwritten), wherever
///   `config_path` points
/// - `NewDir`: an existing path must be a directory
pub fn validate_target(root: &Path, config_path: &Path, mode: InitMode) -> Result<()> {
    if config_path.exists() {
        bail!(
            "'{}' already exists.\n\
             Edit it directly, or remove it to start over.",
            config_path.display()
        );
    }

    if mode == InitMode::NewDir && root.exists() && !root.is_dir() {
        bail!(
            "'{}' exists and is not a directory.\n\
             Choose a different name.",
            root.display()
        );
    }
    Ok(())
}

//! External command execution utilities.
//!
//! Provides a Builder-based API for running the site generator's CLI.
//!
//! # Examples
//!
//! ```ignore
//! use crate::utils::exec::Cmd;
//!
//! let status = Cmd::new("npx")
//!     .args(["vitepress", "dev", "web/docs"])
//!     .cwd(root)
//!     .status()?;
//! ```

use anyhow::{Context, Result, bail};
use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
    process::{Command, ExitStatus},
};

// ============================================================================
// Builder API
// ============================================================================

/// Command builder for external process execution.
#[derive(Debug, Default)]
pub struct Cmd {
    program: OsString,
    args: Vec<OsString>,
    cwd: Option<PathBuf>,
}

impl Cmd {
    /// Create a new command builder.
    pub fn new<S: AsRef<OsStr>>(program: S) -> Self {
        Self {
            program: program.as_ref().to_owned(),
            ..Default::default()
        }
    }

    /// Add a single argument.
    pub fn arg<S: AsRef<OsStr>>(mut self, arg: S) -> Self {
        let arg = arg.as_ref();
        if !arg.is_empty() {
            self.args.push(arg.to_owned());
        }
        self
    }

    /// Add multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        for arg in args {
            let arg = arg.as_ref();
            if !arg.is_empty() {
                self.args.push(arg.to_owned());
            }
        }
        self
    }

    /// Set working directory.
    pub fn cwd<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cwd = Some(dir.as_ref().to_owned());
        self
    }

    /// Command line as typed in a shell, for log output.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(&self.args)
            .map(|s| s.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run with inherited stdio and wait for exit.
    ///
    /// The program must be on `PATH`.
    pub fn status(self) -> Result<ExitStatus> {
        let name = self.program.to_string_lossy().to_string();
        let program = which::which(&self.program)
            .with_context(|| format!("`{name}` not found in PATH"))?;

        let mut cmd = Command::new(program);
        cmd.args(&self.args);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }

        cmd.status()
            .with_context(|| format!("Failed to execute `{name}`"))
    }

    /// Like [`Cmd::status`], but a non-zero exit is an error.
    pub fn run(self) -> Result<()> {
        let line = self.display();
        let status = self.status()?;
        if !status.success() {
            bail!("Command `{line}` failed with {status}");
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmd_builder() {
        let cmd = Cmd::new("npx")
            .arg("vitepress")
            .args(["dev", "", "web/docs"])
            .cwd("/tmp");

        assert_eq!(cmd.program, OsString::from("npx"));
        // empty arguments are dropped
        assert_eq!(cmd.args.len(), 3);
        assert_eq!(cmd.cwd, Some(PathBuf::from("/tmp")));
        assert_eq!(cmd.display(), "npx vitepress dev web/docs");
    }

    #[test]
    fn test_missing_program() {
        let err = Cmd::new("docsite-no-such-program-xyz").status().unwrap_err();
        assert!(err.to_string().contains("not found in PATH"));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_failure() {
        assert!(Cmd::new("true").run().is_ok());
        let err = Cmd::new("false").run().unwrap_err();
        assert!(err.to_string().contains("Command `false` failed"));
    }
}

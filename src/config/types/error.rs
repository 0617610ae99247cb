//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("unknown config fields: {}", .0.join(", "))]
    UnknownFields(Vec<String>),

    #[error("{0}")]
    Validation(String),

    // Not #[from]: a source() would print the whole report twice
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One finding, tied to the field it is about.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// e.g. `theme.nav[1].link`
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}{}", "[".dimmed(), self.field.as_str().cyan(), "]".dimmed())?;
        write!(f, "{} {}", "→".red(), self.message)?;
        match &self.hint {
            Some(hint) => write!(f, "\n  {} {}", "hint:".yellow(), hint),
            None => Ok(()),
        }
    }
}

/// Errors and warnings gathered over a full validation pass.
///
/// Validation never stops at the first problem; every section reports into
/// the same collector so the user sees everything at once.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    /// Record a non-fatal problem.
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic {
            field,
            message: message.into(),
            hint: None,
        });
    }

    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "config looks suspicious:");
        for warning in &self.warnings {
            eprintln!("- {}: {}", warning.field.as_str(), warning.message);
        }
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// No errors; warnings do not count.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "config validation failed:".red().bold())?;
        for err in &self.errors {
            write!(f, "\n{err}\n")?;
        }
        if self.len() > 1 {
            write!(
                f,
                "\n{} {} {}",
                "found".dimmed(),
                self.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("docsite.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        assert_eq!(format!("{io_err}"), "cannot read `docsite.toml`");

        let unknown = ConfigError::UnknownFields(vec!["theme.navv".into(), "extra".into()]);
        assert_eq!(format!("{unknown}"), "unknown config fields: theme.navv, extra");
    }

    #[test]
    fn test_diagnostics_collects_all_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "must not be empty");
        diag.error_with_hint(
            FieldPath::new("serve.host"),
            "must not be empty",
            "use \"localhost\"",
        );
        diag.warn(FieldPath::new("theme.nav"), "no navigation entries");

        assert_eq!(diag.len(), 2);
        assert_eq!(diag.warnings()[0].field.as_str(), "theme.nav");
        assert_eq!(diag.errors()[1].hint.as_deref(), Some("use \"localhost\""));

        let display = format!("{}", diag.into_result().unwrap_err());
        assert!(display.contains("site.title"));
        assert!(display.contains("serve.host"));
        assert!(display.contains("errors"));
    }

    #[test]
    fn test_warnings_alone_pass() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("theme.nav"), "no navigation entries");
        assert!(diag.is_empty());
        assert!(diag.into_result().is_ok());
    }
}

//! `[markdown]` section configuration.
//!
//! Rendering options forwarded to the site generator's Markdown pipeline.
//!
//! # Example
//!
//! ```toml
//! [markdown]
//! theme = "material-theme-palenight"  # Syntax highlighting theme
//! line_numbers = true                 # Show line numbers in code blocks
//! toc_levels = [1, 2, 3]              # Heading levels in the table of contents
//! ```

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Markdown rendering options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "markdown")]
pub struct MarkdownConfig {
    /// Syntax highlighting theme.
    #[config(inline_doc)]
    pub theme: String,

    /// Show line numbers in code blocks.
    #[config(inline_doc)]
    pub line_numbers: bool,

    /// Heading levels included in the table of contents.
    #[config(inline_doc)]
    pub toc_levels: Vec<u8>,
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            theme: "material-theme-palenight".into(),
            line_numbers: true,
            toc_levels: vec![1, 2, 3],
        }
    }
}

impl MarkdownConfig {
    /// Validate rendering options.
    ///
    /// # Checks
    /// - `theme` must not be empty
    /// - every TOC level is a heading level (1-6) and appears once
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.theme.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.theme,
                "highlighting theme must not be empty",
                "e.g.: \"github-dark\" or \"material-theme-palenight\"",
            );
        }

        if self.toc_levels.is_empty() {
            diag.warn(Self::FIELDS.toc_levels, "no heading levels, outline will be empty");
        }

        let mut seen = FxHashSet::default();
        for (i, level) in self.toc_levels.iter().enumerate() {
            if !(1..=6).contains(level) {
                diag.error(
                    Self::FIELDS.toc_levels.index(i),
                    format!("heading level {level} is out of range (1-6)"),
                );
            } else if !seen.insert(*level) {
                diag.error(
                    Self::FIELDS.toc_levels.index(i),
                    format!("heading level {level} is listed twice"),
                );
            }
        }
    }

    /// Levels in ascending order, as the generator expects them.
    pub fn sorted_toc_levels(&self) -> Vec<u8> {
        let mut levels = self.toc_levels.clone();
        levels.sort_unstable();
        levels.dedup();
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_markdown_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.markdown.theme, "material-theme-palenight");
        assert!(config.markdown.line_numbers);
        assert_eq!(config.markdown.toc_levels, vec![1, 2, 3]);
    }

    #[test]
    fn test_markdown_custom() {
        let config = test_parse_config(
            "[markdown]\ntheme = \"github-dark\"\nline_numbers = false\ntoc_levels = [3, 2]",
        );
        assert_eq!(config.markdown.theme, "github-dark");
        assert!(!config.markdown.line_numbers);
        assert_eq!(config.markdown.sorted_toc_levels(), vec![2, 3]);
    }

    #[test]
    fn test_markdown_invalid_levels() {
        let markdown = MarkdownConfig {
            toc_levels: vec![0, 2, 2, 7],
            ..MarkdownConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        markdown.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "markdown.toc_levels[0]",
                "markdown.toc_levels[2]",
                "markdown.toc_levels[3]"
            ]
        );
    }

    #[test]
    fn test_markdown_level_overflow_rejected() {
        // u8 cannot hold 300, so parsing fails before validation
        let result = crate::config::SiteConfig::from_str("[markdown]\ntoc_levels = [300]");
        assert!(result.is_err());
    }
}

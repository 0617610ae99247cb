//! `[site]` section configuration.
//!
//! Display metadata handed to the site generator as-is.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Auto Doc Server"
//! description = "Beautiful documentation for Python projects"
//! lang = "zh-CN"
//! ```

use crate::config::{ConfigDiagnostics, util::is_language_tag};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site metadata shown in the page title, meta tags and `<html lang>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteSectionConfig {
    /// Site title.
    #[config(default = "My Docs", inline_doc)]
    pub title: String,

    /// Site description (meta description).
    #[config(inline_doc)]
    pub description: String,

    /// Language tag (e.g., "en-US", "zh-CN").
    #[config(inline_doc)]
    pub lang: String,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            lang: "en-US".into(),
        }
    }
}

impl SiteSectionConfig {
    /// Validate site metadata.
    ///
    /// # Checks
    /// - `title` must not be empty
    /// - `lang` must look like a BCP 47 language tag
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.title,
                "site title must not be empty",
                format!("set {}, e.g.: \"My Project Docs\"", Self::FIELDS.title),
            );
        }

        if !is_language_tag(&self.lang) {
            diag.error_with_hint(
                Self::FIELDS.lang,
                format!("`{}` is not a valid language tag", self.lang),
                "use a BCP 47 tag like \"en-US\" or \"zh-CN\"",
            );
        }
    }
}

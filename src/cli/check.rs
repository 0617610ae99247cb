//! `docsite check`: load, validate and summarize.
//!
//! Loading already fails on any validation error, so reaching this command
//! means the config is valid; it reports what was found.

use std::fmt;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::SiteConfig;
use crate::generator::scan::scan_pages;
use crate::log;
use crate::utils::path::fs::relative_display;
use crate::utils::plural::{plural_count, plural_count_irregular};

/// Counts shown after a successful check.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub nav: usize,
    pub sidebar_prefixes: usize,
    pub sidebar_groups: usize,
    pub social_links: usize,
    pub pages: usize,
    pub warnings: usize,
}

impl CheckSummary {
    pub fn collect(config: &SiteConfig) -> Result<Self> {
        let pages = scan_pages(&config.generated_root())?;
        Ok(Self {
            nav: config.theme.nav.len(),
            sidebar_prefixes: config.theme.sidebar.len(),
            sidebar_groups: config.theme.sidebar.group_count(),
            social_links: config.theme.social_links.len(),
            pages: pages.len(),
            warnings: config.diagnostics().warnings().len(),
        })
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            plural_count_irregular(self.nav, "nav entry", "nav entries"),
            format!(
                "{} ({})",
                plural_count_irregular(self.sidebar_prefixes, "sidebar prefix", "sidebar prefixes"),
                plural_count(self.sidebar_groups, "group")
            ),
            plural_count(self.social_links, "social link"),
            plural_count(self.pages, "generated page"),
        ];
        write!(f, "{}", parts.join(", "))?;

        if self.warnings == 0 {
            write!(f, "\n{}", "all checks passed".green())
        } else {
            write!(
                f,
                "\n{} {}",
                "passed with".dimmed(),
                plural_count(self.warnings, "warning").yellow()
            )
        }
    }
}

pub fn check_config(config: &SiteConfig) -> Result<()> {
    let summary = CheckSummary::collect(config)?;
    log!("check"; "{}", relative_display(&config.config_path, config.get_root()));
    println!("{summary}");
    Ok(())
}

//! `docsite resolve <path>`: which sidebar applies to a page.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;

use crate::config::{SidebarGroup, SiteConfig};
use crate::generator::{scan::scan_pages, sidebar::effective_sidebar};
use crate::utils::path::route::page_path;

/// Resolve against the sidebar `generate` would write, derived group included.
pub fn resolve_path(config: &SiteConfig, path: &str) -> Result<()> {
    let pages = scan_pages(&config.generated_root())?;
    let sidebar = effective_sidebar(&config.theme.sidebar, &pages, &config.generate);

    let Some((prefix, groups)) = sidebar.resolve(page_path(path)) else {
        bail!("no sidebar applies to `{path}`");
    };

    println!("{} {}", "prefix".dimmed(), prefix.cyan());
    print!("{}", format_groups(groups));
    Ok(())
}

fn format_groups(groups: &[SidebarGroup]) -> String {
    let mut out = String::new();
    for group in groups {
        out.push_str(&group.text);
        out.push('\n');
        for item in &group.items {
            out.push_str(&format!("  {} → {}\n", item.text, item.link));
        }
    }
    out
}

//! Site generator output.
//!
//! Turns a validated [`SiteConfig`] plus the generated Markdown pages into
//! the files VitePress reads:
//!
//! - **Config**: `<docs_dir>/.vitepress/config.ts`
//! - **Home page**: `<docs_dir>/index.md` (when `generate.index_page` is on)
//!
//! ```text
//! generated/*.md ──scan──▶ DocPage list ──▶ effective sidebar ──▶ config.ts
//!                                      └──────────────────────▶ index.md
//! ```

pub mod index;
pub mod scan;
pub mod sidebar;
pub mod vitepress;

use crate::config::{Sidebar, SiteConfig};
use anyhow::{Context, Result};
use scan::DocPage;
use std::fs;
use std::path::{Path, PathBuf};

/// What a generation pass produced.
#[derive(Debug)]
pub struct GenerateReport {
    pub pages: Vec<DocPage>,
    pub sidebar: Sidebar,
    pub config_ts: PathBuf,
    pub index: Option<PathBuf>,
    /// Paths whose content actually changed on disk.
    pub written: Vec<PathBuf>,
}

/// Render everything in memory, then write.
///
/// `config` must already be validated; no file is touched if rendering fails.
pub fn generate(config: &SiteConfig) -> Result<GenerateReport> {
    let root = config.get_root();
    let generated_root = config.generated_root();

    let pages = scan::scan_pages(&generated_root)?;
    let sidebar = sidebar::effective_sidebar(&config.theme.sidebar, &pages, &config.generate);

    let config_ts = config.generate.config_ts_path(root);
    let config_content = vitepress::render_config(config, &sidebar)?;

    let index = if config.generate.index_page {
        let stats = index::load_stats(&generated_root);
        Some((
            config.generate.index_path(root),
            index::render_index(config, &pages, stats)?,
        ))
    } else {
        None
    };

    let mut written = Vec::new();
    if write_if_changed(&config_ts, &config_content)? {
        written.push(config_ts.clone());
    }
    if let Some((path, content)) = &index
        && write_if_changed(path, content)?
    {
        written.push(path.clone());
    }

    Ok(GenerateReport {
        pages,
        sidebar,
        config_ts,
        index: index.map(|(path, _)| path),
        written,
    })
}

/// Write `content` unless the file already holds it.
///
/// Skipping identical writes keeps the dev server from reloading for nothing.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(true)
}

//! `[generate]` section configuration.
//!
//! Where the generated pages live and how `docsite generate` turns them into
//! a sidebar and a home page.
//!
//! # Example
//!
//! ```toml
//! [generate]
//! docs_dir = "web/docs"               # Docs root handed to the site generator
//! generated_dir = "generated"         # Sub-directory holding generated pages
//! auto_sidebar = true                 # Derive a sidebar from generated pages
//! ```

use crate::config::{ConfigDiagnostics, util::resolve_config_path};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Output locations and derived-content options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "generate")]
pub struct GenerateConfig {
    /// Docs root handed to the site generator.
    #[config(inline_doc)]
    pub docs_dir: PathBuf,

    /// Sub-directory of `docs_dir` holding generated pages.
    #[config(inline_doc)]
    pub generated_dir: String,

    /// Derive a sidebar from generated pages.
    #[config(inline_doc)]
    pub auto_sidebar: bool,

    /// Group label of the derived sidebar.
    #[config(inline_doc)]
    pub sidebar_title: String,

    /// Label of the generated index entry.
    #[config(inline_doc)]
    pub index_title: String,

    /// Write a home page to `<docs_dir>/index.md`.
    #[config(inline_doc)]
    pub index_page: bool,

    /// Tagline shown under the home page title.
    #[config(inline_doc)]
    pub tagline: String,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            docs_dir: "web/docs".into(),
            generated_dir: "generated".into(),
            auto_sidebar: true,
            sidebar_title: "Generated Docs".into(),
            index_title: "Overview".into(),
            index_page: true,
            tagline: String::new(),
        }
    }
}

impl GenerateConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.docs_dir.as_os_str().is_empty() {
            diag.error(Self::FIELDS.docs_dir, "docs directory must not be empty");
        }

        if !is_single_segment(&self.generated_dir) {
            diag.error_with_hint(
                Self::FIELDS.generated_dir,
                format!("`{}` must be a single directory name", self.generated_dir),
                "e.g.: \"generated\" or \"api\"",
            );
        }

        if self.auto_sidebar {
            if self.sidebar_title.trim().is_empty() {
                diag.error(
                    Self::FIELDS.sidebar_title,
                    "required when auto_sidebar is enabled",
                );
            }
            if self.index_title.trim().is_empty() {
                diag.error(
                    Self::FIELDS.index_title,
                    "required when auto_sidebar is enabled",
                );
            }
        }
    }

    /// Absolute docs root, resolved against the project root.
    pub fn docs_root(&self, root: &Path) -> PathBuf {
        resolve_config_path(&self.docs_dir, root)
    }

    pub fn generated_root(&self, root: &Path) -> PathBuf {
        self.docs_root(root).join(&self.generated_dir)
    }

    /// `<docs_dir>/.vitepress/config.ts`
    pub fn config_ts_path(&self, root: &Path) -> PathBuf {
        self.docs_root(root).join(".vitepress").join("config.ts")
    }

    pub fn index_path(&self, root: &Path) -> PathBuf {
        self.docs_root(root).join("index.md")
    }

    /// Directory holding the site's `package.json`: the parent of the docs root.
    pub fn package_dir(&self, root: &Path) -> PathBuf {
        let docs_root = self.docs_root(root);
        match (docs_root.file_name(), docs_root.parent()) {
            (Some(_), Some(parent)) => parent.to_path_buf(),
            _ => docs_root,
        }
    }

    /// The docs root relative to [`Self::package_dir`], e.g. `docs`.
    pub fn docs_from_package(&self, root: &Path) -> PathBuf {
        let docs_root = self.docs_root(root);
        match docs_root.strip_prefix(self.package_dir(root)) {
            Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
            Ok(_) => PathBuf::from("."),
            Err(_) => docs_root,
        }
    }

    /// Sidebar prefix and route base of generated pages, e.g. `/generated/`.
    pub fn sidebar_prefix(&self) -> String {
        format!("/{}/", self.generated_dir.trim_matches('/'))
    }
}

fn is_single_segment(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}

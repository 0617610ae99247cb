//! Site configuration management for `docsite.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── theme/     # [theme] and sub-sections
//! │   ├── markdown   # [markdown]
//! │   ├── serve      # [serve]
//! │   └── generate   # [generate]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   ├── handle     # Global config handle
//! │   └── port       # Port
//! ├── util.rs        # Link/host checks, config discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section          | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `[site]`         | Title, description, language                     |
//! | `[theme]`        | Nav, sidebar, social links, footer, search       |
//! | `[markdown]`     | Highlighting theme, line numbers, outline levels |
//! | `[serve]`        | Development server host and port                 |
//! | `[generate]`     | Generated pages, auto sidebar, home page         |

pub mod section;
pub mod types;
pub mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    FooterConfig, GenerateConfig, MarkdownConfig, NavItem, SearchConfig, ServeConfig, Sidebar,
    SidebarGroup, SiteSectionConfig, SocialLink, ThemeSectionConfig,
};

// Re-export from types/
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, Port, cfg, init_config, reload_config,
};

use crate::{
    cli::{Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing docsite.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Navigation, sidebar, social links, footer and search
    #[serde(default)]
    pub theme: ThemeSectionConfig,

    /// Markdown rendering options
    #[serde(default)]
    pub markdown: MarkdownConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// Generated pages and derived content
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Options applied while loading, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Unknown fields are an error instead of a warning.
    pub strict: bool,
    /// `serve --host` override.
    pub host: Option<String>,
    /// `serve --port` override.
    pub port: Option<u16>,
}

impl LoadOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        let (host, port) = match &cli.command {
            Commands::Serve { host, port, .. } => (host.clone(), *port),
            _ => (None, None),
        };
        Self {
            strict: cli.strict,
            host,
            port,
        }
    }
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find config file.
    /// The project root is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if let Commands::Init { name, .. } = &cli.command {
            // Nothing to read yet: `init` writes the file
            let root = normalize_path(&name.as_ref().map_or_else(|| cwd.clone(), |n| cwd.join(n)));
            return Ok(Self {
                config_path: root.join(&cli.config),
                root,
                ..Self::default()
            });
        }

        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found. Run 'docsite init' to create one.",
                cli.config.display()
            )));
        };

        Self::load_from(&config_path, &LoadOptions::from_cli(cli))
    }

    /// Read, parse and validate the config at `path`.
    ///
    /// Nothing is returned unless the whole file validated.
    pub fn load_from(path: &Path, options: &LoadOptions) -> Result<Self> {
        let mut config = Self::from_path(path, options.strict)?;

        config.config_path = normalize_path(path);
        config.root = config
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.apply_options(options);

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    #[cfg(test)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                bail!(ConfigError::UnknownFields(ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::from)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply CLI overrides.
    fn apply_options(&mut self, options: &LoadOptions) {
        if let Some(host) = &options.host {
            self.serve.host = host.clone();
        }
        if let Some(port) = options.port {
            self.serve.port = Port::new(port);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Title shown in the navigation bar.
    pub fn site_title(&self) -> &str {
        self.theme.site_title.as_deref().unwrap_or(&self.site.title)
    }

    /// Absolute docs root.
    pub fn docs_root(&self) -> PathBuf {
        self.generate.docs_root(&self.root)
    }

    /// Absolute directory holding generated pages.
    pub fn generated_root(&self) -> PathBuf {
        self.generate.generated_root(&self.root)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Run every section check and collect the results.
    pub fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.theme.validate(&mut diag);
        self.markdown.validate(&mut diag);
        self.serve.validate(&mut diag);
        self.generate.validate(&mut diag);

        diag
    }

    /// Validate the whole config.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with the required `[site]` title.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\ntitle = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

//! Configuration file generation.
//!
//! Creates docsite.toml, package.json and ignore files for new projects.

use anyhow::{Context, Result};
use serde_json::json;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::section::{
    GenerateConfig, MarkdownConfig, ServeConfig, SiteSectionConfig, ThemeSectionConfig,
};

/// Version ranges pinned in a new `package.json`.
const VITEPRESS_VERSION: &str = "^1.6.3";
const VUE_VERSION: &str = "^3.5.13";

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore"];

/// Sidebar tables cannot be rendered inline next to `[theme]` keys, so the
/// example is appended as comments.
const SIDEBAR_EXAMPLE: &str = "\
# Sidebar groups per path prefix; the longest matching prefix wins.
# With generate.auto_sidebar, the generated prefix is filled in automatically.
# [[theme.sidebar.\"/guide/\"]]
# text = \"Guide\"
# items = [{ text = \"Getting Started\", link = \"/guide/\" }]
";

/// Generate docsite.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "# docsite configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    ));

    // [site] section
    out.push_str(&SiteSectionConfig::template_with_header());
    out.push('\n');

    // [theme] section (+ [theme.footer])
    out.push_str(&ThemeSectionConfig::template_with_header());
    out.push('\n');
    out.push_str(SIDEBAR_EXAMPLE);
    out.push('\n');

    // [markdown] section
    out.push_str(&MarkdownConfig::template_with_header());
    out.push('\n');

    // [serve] section
    out.push_str(&ServeConfig::template_with_header());
    out.push('\n');

    // [generate] section
    out.push_str(&GenerateConfig::template_with_header());

    out
}

/// Write default docsite.toml configuration
pub fn write_config(path: &Path) -> Result<()> {
    let content = generate_config_template();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

/// Write a .gitignore with the site generator's cache and build output
///
/// Patterns include:
/// - VitePress cache and dist (e.g., `/web/docs/.vitepress/cache/`)
/// - `node_modules`
/// - OS-specific files (`.DS_Store`)
pub fn write_ignore_files(root: &Path, docs_dir: &Path) -> Result<()> {
    let vitepress = Path::new("/").join(docs_dir).join(".vitepress");
    let patterns = [
        vitepress.join("cache").to_string_lossy().into_owned() + "/",
        vitepress.join("dist").to_string_lossy().into_owned() + "/",
        "node_modules/".to_string(),
        ".DS_Store".to_string(),
    ];

    let content = patterns.join("\n") + "\n";

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        // Only create if doesn't exist (don't overwrite user's ignore files)
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }

    Ok(())
}

/// Write `package.json` next to the docs directory, pinning VitePress so
/// `npx vitepress` runs the local install.
///
/// An existing file is left alone; returns the path only when written.
pub fn write_package_json(root: &Path, generate: &GenerateConfig) -> Result<Option<PathBuf>> {
    let dir = generate.package_dir(root);
    let path = dir.join("package.json");
    if path.exists() {
        return Ok(None);
    }

    let docs = generate.docs_from_package(root);
    let docs = docs.to_string_lossy();
    let package = json!({
        "name": package_name(root),
        "version": "1.0.0",
        "private": true,
        "type": "module",
        "scripts": {
            "dev": format!("vitepress dev {docs}"),
            "build": format!("vitepress build {docs}"),
            "preview": format!("vitepress preview {docs}"),
        },
        "dependencies": {
            "vitepress": VITEPRESS_VERSION,
        },
        "devDependencies": {
            "vue": VUE_VERSION,
        },
    });

    fs::create_dir_all(&dir).with_context(|| format!("Failed to create '{}'", dir.display()))?;
    fs::write(&path, serde_json::to_string_pretty(&package)? + "\n")
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(Some(path))
}

/// npm package name from the project directory: `My Docs` → `my-docs-web`.
fn package_name(root: &Path) -> String {
    let dir = root
        .file_name()
        .map(|name| name.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let slug = dir
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "docs-web".to_string()
    } else {
        format!("{slug}-web")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoadOptions, SiteConfig};
    use tempfile::TempDir;

    #[test]
    fn test_template_sections() {
        let template = generate_config_template();
        for header in [
            "[site]",
            "[theme]",
            "[theme.footer]",
            "[markdown]",
            "[serve]",
            "[generate]",
        ] {
            assert!(template.contains(header), "missing {header}");
        }
        assert!(template.contains("title = \"My Docs\""));
        assert!(template.contains("search = { provider = \"local\" }"));
        assert!(template.contains("port = 3000"));
        assert!(template.contains("docs_dir = \"web/docs\""));
    }

    #[test]
    fn test_template_loads_cleanly() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("docsite.toml");
        write_config(&path).unwrap();

        let strict = LoadOptions {
            strict: true,
            ..LoadOptions::default()
        };
        let config = SiteConfig::load_from(&path, &strict).unwrap();
        assert_eq!(config.site.title, "My Docs");
        assert_eq!(config, {
            let mut expected = SiteConfig {
                config_path: config.config_path.clone(),
                root: config.root.clone(),
                ..SiteConfig::default()
            };
            expected.site.title = "My Docs".into();
            expected
        });
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        write_ignore_files(temp.path(), Path::new("web/docs")).unwrap();

        let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(content.contains("/web/docs/.vitepress/cache/"));
        assert!(content.contains("node_modules/"));
    }

    #[test]
    fn test_ignore_files_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let gitignore = temp.path().join(".gitignore");
        fs::write(&gitignore, "custom content").unwrap();

        write_ignore_files(temp.path(), Path::new("web/docs")).unwrap();

        let content = fs::read_to_string(&gitignore).unwrap();
        assert_eq!(content, "custom content");
    }

    #[test]
    fn test_package_json() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Auto Doc Server");
        let generate = GenerateConfig::default();

        let path = write_package_json(&root, &generate).unwrap().unwrap();
        assert_eq!(path, root.join("web/package.json"));

        let package: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(package["name"], "auto-doc-server-web");
        assert_eq!(package["scripts"]["dev"], "vitepress dev docs");
        assert_eq!(package["scripts"]["build"], "vitepress build docs");
        assert_eq!(package["dependencies"]["vitepress"], VITEPRESS_VERSION);
        assert_eq!(package["devDependencies"]["vue"], VUE_VERSION);

        // user edits survive a second run
        fs::write(&path, "{}").unwrap();
        assert_eq!(write_package_json(&root, &generate).unwrap(), None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_package_name() {
        assert_eq!(package_name(Path::new("/tmp/my-docs")), "my-docs-web");
        assert_eq!(package_name(Path::new("/tmp/Auto Doc_Server")), "auto-doc-server-web");
        assert_eq!(package_name(Path::new("/")), "docs-web");
    }
}

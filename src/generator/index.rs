//! Home page (`<docs_dir>/index.md`) rendering.
//!
//! Uses VitePress's `home` layout: a hero block with actions, one feature
//! card per generated page, and an optional statistics table fed by the
//! upstream generator's `stats.json`.

use super::scan::DocPage;
use crate::config::SiteConfig;
use crate::debug;
use anyhow::Result;
use serde::Deserialize;
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

const STATS_FILE: &str = "stats.json";

/// Counts reported by the upstream doc generator.
///
/// The template-based generator prefixes its counts with `total_`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Stats {
    #[serde(alias = "total_modules")]
    pub modules: u64,
    #[serde(alias = "total_functions")]
    pub functions: u64,
    #[serde(alias = "total_classes")]
    pub classes: u64,
}

/// Read `stats.json` from the generated directory.
///
/// The file is optional: a missing or malformed file yields `None`.
pub fn load_stats(generated_root: &Path) -> Option<Stats> {
    let path = generated_root.join(STATS_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            debug!("index"; "no {}: {}", path.display(), e);
            return None;
        }
    };

    serde_json::from_str(&content)
        .inspect_err(|e| debug!("index"; "ignoring malformed {}: {}", path.display(), e))
        .ok()
}

/// Render the home page.
pub fn render_index(
    config: &SiteConfig,
    pages: &[DocPage],
    stats: Option<Stats>,
) -> Result<String> {
    let prefix = config.generate.sidebar_prefix();
    let mut out = String::from("---\nlayout: home\n\nhero:\n");

    writeln!(out, "  name: {}", yaml_str(&config.site.title))?;
    if !config.site.description.is_empty() {
        writeln!(out, "  text: {}", yaml_str(&config.site.description))?;
    }
    if !config.generate.tagline.is_empty() {
        writeln!(out, "  tagline: {}", yaml_str(&config.generate.tagline))?;
    }

    out.push_str("  actions:\n");
    push_action(&mut out, "brand", &config.generate.sidebar_title, &prefix)?;
    if let Some(nav) = config
        .theme
        .nav
        .iter()
        .find(|item| item.link != "/" && item.link != prefix)
    {
        push_action(&mut out, "alt", &nav.text, &nav.link)?;
    }

    if !pages.is_empty() {
        out.push_str("\nfeatures:\n");
        for page in pages {
            writeln!(out, "  - title: {}", yaml_str(&page.title))?;
            if !page.description.is_empty() {
                writeln!(out, "    details: {}", yaml_str(&page.description))?;
            }
            writeln!(out, "    link: {}", yaml_str(&format!("{prefix}{}", page.route)))?;
        }
    }
    out.push_str("---\n");

    if let Some(stats) = stats {
        write!(
            out,
            "\n| Modules | Functions | Classes |\n| :-: | :-: | :-: |\n| {} | {} | {} |\n",
            stats.modules, stats.functions, stats.classes
        )?;
    }

    Ok(out)
}

fn push_action(out: &mut String, theme: &str, text: &str, link: &str) -> fmt::Result {
    writeln!(out, "    - theme: {theme}")?;
    writeln!(out, "      text: {}", yaml_str(text))?;
    writeln!(out, "      link: {}", yaml_str(link))
}

/// Double-quoted YAML scalar. JSON string escapes are valid YAML.
fn yaml_str(s: &str) -> String {
    serde_json::Value::from(s).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::generator::scan::parse_page;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn page(route: &str, content: &str) -> DocPage {
        parse_page(PathBuf::from(format!("{route}.md")), route.into(), content)
    }

    #[test]
    fn test_render_index() {
        let config = test_parse_config(
            r#"description = "Beautiful \"docs\""

[theme]
nav = [
    { text = "Home", link = "/" },
    { text = "Generated", link = "/generated/" },
    { text = "GitHub", link = "https://github.com/your-repo" },
]

[generate]
tagline = "Parse code, publish docs"
"#,
        );
        let pages = [page("example_module", "# Example\n\nHelpers.\n")];

        let index = render_index(&config, &pages, None).unwrap();
        assert!(index.starts_with("---\nlayout: home\n"));
        assert!(index.contains("  name: \"Test\"\n"));
        assert!(index.contains("  text: \"Beautiful \\\"docs\\\"\"\n"));
        assert!(index.contains("  tagline: \"Parse code, publish docs\"\n"));
        assert!(index.contains("      link: \"/generated/\"\n"));
        assert!(index.contains("      text: \"GitHub\"\n"));
        assert!(index.contains("  - title: \"Example\"\n    details: \"Helpers.\"\n"));
        assert!(index.contains("    link: \"/generated/example_module\"\n"));
        assert!(index.ends_with("---\n"));
    }

    #[test]
    fn test_render_index_with_stats() {
        let config = test_parse_config("");
        let stats = Stats {
            modules: 3,
            functions: 12,
            classes: 4,
        };
        let index = render_index(&config, &[], Some(stats)).unwrap();
        assert!(!index.contains("features:"));
        assert!(index.ends_with("| 3 | 12 | 4 |\n"));
    }

    #[test]
    fn test_load_stats() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_stats(dir.path()), None);

        fs::write(dir.path().join(STATS_FILE), "{ not json").unwrap();
        assert_eq!(load_stats(dir.path()), None);

        fs::write(
            dir.path().join(STATS_FILE),
            r#"{ "modules": 2, "functions": 7, "generated_at": "2024-01-01" }"#,
        )
        .unwrap();
        assert_eq!(
            load_stats(dir.path()),
            Some(Stats {
                modules: 2,
                functions: 7,
                classes: 0,
            })
        );

        fs::write(
            dir.path().join(STATS_FILE),
            r#"{ "total_functions": 12, "total_classes": 4, "modules": 3 }"#,
        )
        .unwrap();
        assert_eq!(
            load_stats(dir.path()),
            Some(Stats {
                modules: 3,
                functions: 12,
                classes: 4,
            })
        );
    }
}

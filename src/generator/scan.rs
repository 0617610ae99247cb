//! Generated page discovery.
//!
//! Lists the Markdown files an upstream doc generator wrote into the
//! generated directory and extracts what the sidebar and home page need.

use crate::config::util::check_link;
use anyhow::{Context, Result};
use jwalk::WalkDir;
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::fs;
use std::path::{Path, PathBuf};

/// The generated directory's own landing page, linked by the sidebar prefix.
const INDEX_FILE: &str = "index.md";

/// A generated Markdown page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocPage {
    pub path: PathBuf,
    /// File stem, used as the route below the generated prefix.
    pub route: String,
    pub title: String,
    /// Level-2 headings in document order.
    pub sections: Vec<String>,
    /// Text of the first paragraph, empty if there is none.
    pub description: String,
}

/// List `*.md` pages directly inside `dir`, sorted by route.
///
/// A missing directory yields no pages. Files whose stem cannot form a
/// valid sidebar link are skipped with a warning.
pub fn scan_pages(dir: &Path) -> Result<Vec<DocPage>> {
    if !dir.is_dir() {
        crate::debug!("scan"; "{} does not exist, no generated pages", dir.display());
        return Ok(Vec::new());
    }

    let mut pages = WalkDir::new(dir)
        .max_depth(1)
        .skip_hidden(true)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path())
        .filter(|path| is_page(path) && is_linkable(path))
        .map(|path| read_page(&path))
        .collect::<Result<Vec<_>>>()?;

    pages.sort_by(|a, b| a.route.cmp(&b.route));
    Ok(pages)
}

fn is_page(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
        && path.file_name().is_some_and(|name| name != INDEX_FILE)
}

fn is_linkable(path: &Path) -> bool {
    match check_link(&format!("/{}", route_of(path))) {
        Ok(()) => true,
        Err(e) => {
            crate::log!("warning"; "skipping {}: {e}", path.display());
            false
        }
    }
}

fn route_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn read_page(path: &Path) -> Result<DocPage> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse_page(path.to_path_buf(), route_of(path), &content))
}

/// Extract title, sections and description from Markdown source.
pub fn parse_page(path: PathBuf, route: String, content: &str) -> DocPage {
    let outline = Outline::extract(content);
    DocPage {
        path,
        title: outline.title.unwrap_or_else(|| title_from_stem(&route)),
        route,
        sections: outline.sections,
        description: outline.description.unwrap_or_default(),
    }
}

/// `example_module` → `Example Module`, `getting-started` → `Getting Started`
pub fn title_from_stem(stem: &str) -> String {
    stem.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// Markdown outline
// ============================================================================

#[derive(Debug, Default)]
struct Outline {
    title: Option<String>,
    sections: Vec<String>,
    description: Option<String>,
}

/// What the text events currently belong to.
enum Capture {
    None,
    Heading(HeadingLevel),
    Paragraph,
}

impl Outline {
    fn extract(content: &str) -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_YAML_STYLE_METADATA_BLOCKS);
        options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

        let mut outline = Self::default();
        let mut capture = Capture::None;
        let mut text = String::new();

        for event in Parser::new_ext(content, options) {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    capture = Capture::Heading(level);
                    text.clear();
                }
                Event::Start(Tag::Paragraph) if outline.description.is_none() => {
                    capture = Capture::Paragraph;
                    text.clear();
                }
                Event::Text(t) | Event::Code(t) if !matches!(capture, Capture::None) => {
                    text.push_str(&t);
                }
                Event::SoftBreak | Event::HardBreak if !matches!(capture, Capture::None) => {
                    text.push(' ');
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Capture::Heading(level) = capture {
                        outline.push_heading(level, text.trim());
                    }
                    capture = Capture::None;
                }
                Event::End(TagEnd::Paragraph) => {
                    if matches!(capture, Capture::Paragraph) && !text.trim().is_empty() {
                        outline.description = Some(text.trim().to_string());
                    }
                    capture = Capture::None;
                }
                _ => {}
            }
        }

        outline
    }

    fn push_heading(&mut self, level: HeadingLevel, text: &str) {
        if text.is_empty() {
            return;
        }
        match level {
            HeadingLevel::H1 if self.title.is_none() => self.title = Some(text.to_string()),
            HeadingLevel::H2 => self.sections.push(text.to_string()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(route: &str, content: &str) -> DocPage {
        parse_page(PathBuf::from(format!("{route}.md")), route.to_string(), content)
    }

    #[test]
    fn test_title_from_heading() {
        let page = parse(
            "example_module",
            "# `example_module` API\n\nFunctions and classes.\n\n## Functions\n\n## Classes\n",
        );
        assert_eq!(page.title, "example_module API");
        assert_eq!(page.sections, ["Functions", "Classes"]);
        assert_eq!(page.description, "Functions and classes.");
    }

    #[test]
    fn test_title_from_stem() {
        let page = parse("example_module", "Just text.\n");
        assert_eq!(page.title, "Example Module");
        assert_eq!(title_from_stem("getting-started"), "Getting Started");
        assert_eq!(title_from_stem("a__b"), "A B");
        assert_eq!(title_from_stem(""), "");
    }

    #[test]
    fn test_front_matter_is_not_description() {
        let page = parse(
            "overview",
            "---\ntitle: ignored\n---\n\n# Overview\n\nProject statistics\nand summary.\n",
        );
        assert_eq!(page.title, "Overview");
        assert_eq!(page.description, "Project statistics and summary.");
    }

    #[test]
    fn test_only_first_h1_is_title() {
        let page = parse("twice", "# First\n\n# Second\n\n### Deep\n");
        assert_eq!(page.title, "First");
        assert!(page.sections.is_empty());
        assert_eq!(page.description, "");
    }

    #[test]
    fn test_scan_pages() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::write(root.join("zeta.md"), "# Zeta\n").unwrap();
        fs::write(root.join("alpha.md"), "# Alpha\n\nFirst.\n").unwrap();
        fs::write(root.join("index.md"), "# Index\n").unwrap();
        fs::write(root.join("stats.json"), "{}").unwrap();
        fs::create_dir(root.join("nested")).unwrap();
        fs::write(root.join("nested/deep.md"), "# Deep\n").unwrap();

        let pages = scan_pages(root).unwrap();
        let routes: Vec<_> = pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, ["alpha", "zeta"]);
        assert_eq!(pages[0].description, "First.");
    }

    #[test]
    fn test_scan_skips_unlinkable_stems() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("my page.md"), "# Mine\n").unwrap();
        fs::write(dir.path().join("ok.md"), "# Ok\n").unwrap();

        let pages = scan_pages(dir.path()).unwrap();
        let routes: Vec<_> = pages.iter().map(|p| p.route.as_str()).collect();
        assert_eq!(routes, ["ok"]);
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = TempDir::new().unwrap();
        assert!(scan_pages(&dir.path().join("missing")).unwrap().is_empty());
    }
}

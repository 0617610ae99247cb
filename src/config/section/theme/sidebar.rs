//! Sidebar map (`[theme.sidebar]`).
//!
//! Maps a URL path prefix to the grouped links shown next to every page
//! under that prefix.
//!
//! ```toml
//! [[theme.sidebar."/generated/"]]
//! text = "Generated Docs"
//! items = [
//!     { text = "Overview", link = "/generated/" },
//!     { text = "Example Module", link = "/generated/example_module" },
//! ]
//! ```
//!
//! When prefixes overlap (`/generated/` and `/generated/sub/`), a page uses
//! the longest prefix that matches its path.

use super::nav::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A labelled group of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidebarGroup {
    pub text: String,

    #[serde(default)]
    pub items: Vec<NavItem>,

    /// Render the group collapsible (`Some(true)` starts collapsed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
}

impl SidebarGroup {
    pub fn new(text: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            text: text.into(),
            items,
            collapsed: None,
        }
    }
}

/// Path prefix → ordered sidebar groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar(BTreeMap<String, Vec<SidebarGroup>>);

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Total number of groups across all prefixes.
    pub fn group_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Groups registered for exactly `prefix` (trailing slash insensitive).
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        let wanted = normalize_prefix(prefix);
        self.0
            .iter()
            .find(|(key, _)| normalize_prefix(key) == wanted)
            .map(|(_, groups)| groups.as_slice())
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.get(prefix).is_some()
    }

    pub fn insert(&mut self, prefix: impl Into<String>, groups: Vec<SidebarGroup>) {
        self.0.insert(prefix.into(), groups);
    }

    /// Find the sidebar that applies to a page path.
    ///
    /// The longest matching prefix wins. A prefix ending in `/` also matches
    /// the bare directory path (`/generated` matches `/generated/`).
    ///
    /// # Examples
    /// ```ignore
    /// // prefixes: "/generated/", "/generated/sub/"
    /// sidebar.resolve("/generated/sub/page") -> Some(("/generated/sub/", ..))
    /// sidebar.resolve("/generated/overview") -> Some(("/generated/", ..))
    /// sidebar.resolve("/about")              -> None
    /// ```
    pub fn resolve(&self, path: &str) -> Option<(&str, &[SidebarGroup])> {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        self.0
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, &path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }

    /// Validate prefixes, groups and items.
    ///
    /// # Checks
    /// - every prefix starts with `/`
    /// - no two prefixes are equal once the trailing slash is ignored
    /// - groups have a label, items have a label and a valid link
    /// - links are unique within one group
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut normalized: FxHashMap<String, &str> = FxHashMap::default();

        for (prefix, groups) in &self.0 {
            let prefix_path = path.key(prefix);

            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    prefix_path.clone(),
                    format!("sidebar prefix `{prefix}` must start with `/`"),
                    format!("use \"/{}\"", prefix.trim_start_matches('/')),
                );
            }

            let key = normalize_prefix(prefix);
            if let Some(other) = normalized.get(&key) {
                diag.error(
                    prefix_path.clone(),
                    format!("sidebar prefixes `{other}` and `{prefix}` are ambiguous"),
                );
            } else {
                normalized.insert(key, prefix);
            }

            if groups.is_empty() {
                diag.warn(prefix_path.clone(), "sidebar has no groups");
            }

            for (g, group) in groups.iter().enumerate() {
                validate_group(group, prefix, &prefix_path.index(g), diag);
            }
        }
    }
}

fn validate_group(
    group: &SidebarGroup,
    prefix: &str,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    if group.text.trim().is_empty() {
        diag.error(path.key("text"), "group label must not be empty");
    }
    if group.items.is_empty() {
        diag.warn(path.key("items"), "group has no items");
    }

    let items_path = path.key("items");
    let mut links: FxHashSet<&str> = FxHashSet::default();
    for (i, item) in group.items.iter().enumerate() {
        let item_path = items_path.index(i);
        item.validate(&item_path, diag);

        if !links.insert(item.link.as_str()) {
            diag.error(
                item_path.key("link"),
                format!("duplicate link `{}` in group `{}`", item.link, group.text),
            );
        }

        if item.link.starts_with('/')
            && !item.link.starts_with("//")
            && !prefix_matches(prefix, &item.link)
        {
            diag.warn(
                item_path.key("link"),
                format!("`{}` is outside of sidebar prefix `{prefix}`", item.link),
            );
        }
    }
}

/// Compare form of a prefix: leading slash, no trailing slash.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    path.starts_with(prefix)
        || prefix
            .strip_suffix('/')
            .is_some_and(|dir| !dir.is_empty() && path == dir)
}

//! Top navigation entries (`[theme] nav`).

use crate::config::{ConfigDiagnostics, FieldPath, util::check_link};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A `(label, link)` pair. Also used for sidebar items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub text: String,
    pub link: String,
}

impl NavItem {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }

    /// Check label and link of a single entry at `path`.
    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.text.trim().is_empty() {
            diag.error(path.key("text"), "label must not be empty");
        }
        if let Err(message) = check_link(&self.link) {
            diag.error_with_hint(
                path.key("link"),
                message,
                "use a path like \"/guide/\" or a full URL like \"https://example.com\"",
            );
        }
    }
}

/// Validate the navigation bar: every entry is well-formed and labels are unique.
pub fn validate_nav(items: &[NavItem], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    let mut seen: FxHashMap<&str, usize> = FxHashMap::default();

    for (i, item) in items.iter().enumerate() {
        let item_path = path.index(i);
        item.validate(&item_path, diag);

        let label = item.text.trim();
        if label.is_empty() {
            continue;
        }
        if let Some(first) = seen.get(label) {
            diag.error(
                item_path.key("text"),
                format!(
                    "duplicate navigation entry `{label}` (first defined at {})",
                    path.index(*first).as_str()
                ),
            );
        } else {
            seen.insert(label, i);
        }
    }
}

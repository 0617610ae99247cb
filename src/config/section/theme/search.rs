//! Search provider selection (`[theme.search]`).
//!
//! ```toml
//! [theme.search]
//! provider = "local"
//! ```
//!
//! The index itself is built by the site generator; only the provider and
//! its parameters are declared here.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provider", rename_all = "lowercase")]
pub enum SearchConfig {
    /// In-browser index built from the site's own pages.
    #[default]
    Local,

    /// Hosted DocSearch index.
    Algolia {
        app_id: String,
        api_key: String,
        index_name: String,
    },
}

impl SearchConfig {
    pub const fn provider(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Algolia { .. } => "algolia",
        }
    }

    pub fn validate(&self, path: &FieldPath, diag: &mut ConfigDiagnostics) {
        if let Self::Algolia {
            app_id,
            api_key,
            index_name,
        } = self
        {
            for (name, value) in [
                ("app_id", app_id),
                ("api_key", api_key),
                ("index_name", index_name),
            ] {
                if value.trim().is_empty() {
                    diag.error(path.key(name), "required by the algolia provider");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        search: SearchConfig,
    }

    #[test]
    fn test_local_provider() {
        let w: Wrapper = toml::from_str("[search]\nprovider = \"local\"").unwrap();
        assert_eq!(w.search, SearchConfig::Local);
        assert_eq!(w.search.provider(), "local");
    }

    #[test]
    fn test_algolia_provider() {
        let w: Wrapper = toml::from_str(
            "[search]\nprovider = \"algolia\"\napp_id = \"APP\"\napi_key = \"KEY\"\nindex_name = \"docs\"",
        )
        .unwrap();
        assert_eq!(w.search.provider(), "algolia");

        let mut diag = ConfigDiagnostics::new();
        w.search.validate(&FieldPath::new("theme.search"), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_algolia_missing_fields() {
        let search = SearchConfig::Algolia {
            app_id: "APP".into(),
            api_key: String::new(),
            index_name: String::new(),
        };
        let mut diag = ConfigDiagnostics::new();
        search.validate(&FieldPath::new("theme.search"), &mut diag);
        assert_eq!(diag.len(), 2);
        assert_eq!(diag.errors()[0].field.as_str(), "theme.search.api_key");
    }

    #[test]
    fn test_unknown_provider() {
        assert!(toml::from_str::<Wrapper>("[search]\nprovider = \"elastic\"").is_err());
    }
}

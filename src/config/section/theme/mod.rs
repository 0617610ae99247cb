//! `[theme]` section configuration.
//!
//! Navigation, sidebar, social links, footer and search provider.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! site_title = "Auto Doc Server"
//! nav = [
//!     { text = "Home", link = "/" },
//!     { text = "Generated Docs", link = "/generated/" },
//! ]
//! social_links = [{ icon = "github", link = "https://github.com/your-repo" }]
//!
//! [theme.search]
//! provider = "local"
//!
//! [theme.footer]
//! message = "Released under the MIT License."
//!
//! [[theme.sidebar."/generated/"]]
//! text = "Generated Docs"
//! items = [{ text = "Overview", link = "/generated/" }]
//! ```

mod nav;
mod search;
mod sidebar;
mod social;

pub use nav::{NavItem, validate_nav};
pub use search::SearchConfig;
pub use sidebar::{Sidebar, SidebarGroup};
pub use social::{FooterConfig, SocialLink, validate_social_links};

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Theme section configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme")]
pub struct ThemeSectionConfig {
    /// Title shown in the navigation bar (defaults to `site.title`).
    #[config(inline_doc)]
    pub site_title: Option<String>,

    /// Top navigation entries.
    pub nav: Vec<NavItem>,

    /// Icon links shown in the navigation bar.
    pub social_links: Vec<SocialLink>,

    /// Search provider ("local" or "algolia").
    pub search: SearchConfig,

    /// Path prefix → sidebar groups.
    #[config(hidden)]
    pub sidebar: Sidebar,

    /// Page footer.
    #[config(sub)]
    pub footer: FooterConfig,
}

impl ThemeSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(site_title) = &self.site_title
            && site_title.trim().is_empty()
        {
            diag.warn(
                Self::FIELDS.site_title,
                "empty site_title hides the title in the navigation bar",
            );
        }

        validate_nav(&self.nav, &Self::FIELDS.nav, diag);
        self.sidebar.validate(&Self::FIELDS.sidebar, diag);
        validate_social_links(&self.social_links, &Self::FIELDS.social_links, diag);
        self.search.validate(&Self::FIELDS.search, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_theme_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.nav.is_empty());
        assert!(config.theme.sidebar.is_empty());
        assert!(config.theme.social_links.is_empty());
        assert!(config.theme.footer.is_empty());
        assert_eq!(config.theme.search, SearchConfig::Local);
        assert_eq!(config.theme.site_title, None);
    }

    #[test]
    fn test_theme_full() {
        let config = test_parse_config(
            r#"
[theme]
site_title = "Docs"
nav = [
    { text = "Home", link = "/" },
    { text = "GitHub", link = "https://github.com/your-repo" },
]
social_links = [{ icon = "github", link = "https://github.com/your-repo" }]

[theme.footer]
message = "Released under the MIT License."
copyright = "Copyright © 2024"

[theme.search]
provider = "local"

[[theme.sidebar."/generated/"]]
text = "Generated"
collapsed = false
items = [{ text = "Overview", link = "/generated/" }]
"#,
        );

        let theme = &config.theme;
        assert_eq!(theme.site_title.as_deref(), Some("Docs"));
        assert_eq!(theme.nav.len(), 2);
        assert_eq!(theme.nav[1].link, "https://github.com/your-repo");
        assert_eq!(theme.social_links[0].icon, "github");
        assert_eq!(theme.footer.copyright, "Copyright © 2024");
        assert_eq!(theme.sidebar.group_count(), 1);
        assert_eq!(
            theme.sidebar.get("/generated/").unwrap()[0].collapsed,
            Some(false)
        );

        let mut diag = ConfigDiagnostics::new();
        theme.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_theme_validate_reports_every_error() {
        let config = test_parse_config(
            r#"
[theme]
nav = [{ text = "Home", link = "" }, { text = "Home", link = "/" }]
social_links = [{ icon = "github", link = "github.com" }]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(&mut diag);

        let fields: Vec<_> = diag.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            [
                "theme.nav[0].link",
                "theme.nav[1].text",
                "theme.social_links[0].link"
            ]
        );
    }
}

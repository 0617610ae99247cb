//! Social links and footer.

use crate::config::{
    ConfigDiagnostics, FieldPath,
    util::{check_absolute_url, is_icon_name},
};
use crate::utils::path::route::is_external_link;
use macros::Config;
use serde::{Deserialize, Serialize};

/// An `(icon, url)` pair rendered in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Icon identifier known to the theme (`github`, `discord`, `x`, ...).
    pub icon: String,
    pub link: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            link: link.into(),
        }
    }
}

pub fn validate_social_links(links: &[SocialLink], path: &FieldPath, diag: &mut ConfigDiagnostics) {
    for (i, social) in links.iter().enumerate() {
        let item_path = path.index(i);

        if !is_icon_name(&social.icon) {
            diag.error_with_hint(
                item_path.key("icon"),
                format!("`{}` is not an icon identifier", social.icon),
                "use a lowercase name like \"github\" or \"discord\"",
            );
        }

        if !is_external_link(&social.link) {
            diag.error_with_hint(
                item_path.key("link"),
                format!("social link `{}` must be an absolute URL", social.link),
                "use format like https://github.com/your-repo",
            );
        } else if let Err(message) = check_absolute_url(&social.link) {
            diag.error(item_path.key("link"), message);
        }
    }
}

/// Page footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "theme.footer")]
pub struct FooterConfig {
    /// Footer message.
    #[config(inline_doc)]
    pub message: String,

    /// Copyright notice.
    #[config(inline_doc)]
    pub copyright: String,
}

impl FooterConfig {
    /// A footer with neither message nor copyright is not rendered.
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.copyright.is_empty()
    }
}

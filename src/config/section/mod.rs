//! Configuration section definitions.
//!
//! Each module corresponds to a section in `docsite.toml`:
//!
//! | Module     | TOML Section   | Purpose                                  |
//! |------------|----------------|------------------------------------------|
//! | `site`     | `[site]`       | Title, description, language             |
//! | `theme`    | `[theme]`      | Nav, sidebar, social links, footer, search |
//! | `markdown` | `[markdown]`   | Highlighting, line numbers, outline      |
//! | `serve`    | `[serve]`      | Development server                       |
//! | `generate` | `[generate]`   | Generated pages, sidebar and home page   |

mod generate;
mod markdown;
mod serve;
pub mod site;
pub mod theme;

pub use generate::GenerateConfig;
pub use markdown::MarkdownConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use theme::{
    FooterConfig, NavItem, SearchConfig, Sidebar, SidebarGroup, SocialLink, ThemeSectionConfig,
};

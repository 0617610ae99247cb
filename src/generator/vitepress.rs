//! VitePress `config.ts` rendering.
//!
//! The config object is built from borrowed views of [`SiteConfig`] that
//! serialize with VitePress's camelCase key names, then emitted as a JSON
//! object literal inside `defineConfig(...)`.

use crate::config::{
    FooterConfig, MarkdownConfig, NavItem, SearchConfig, ServeConfig, Sidebar, SiteConfig,
    SocialLink,
};
use anyhow::Result;
use serde::Serialize;

const HEADER: &str = "import { defineConfig } from 'vitepress'\n\n";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VitePressConfig<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'a str,
    lang: &'a str,
    theme_config: ThemeConfig<'a>,
    markdown: Markdown,
    vite: Vite<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThemeConfig<'a> {
    site_title: &'a str,
    nav: &'a [NavItem],
    sidebar: &'a Sidebar,
    social_links: &'a [SocialLink],
    #[serde(skip_serializing_if = "Option::is_none")]
    footer: Option<Footer<'a>>,
    search: Search<'a>,
}

#[derive(Serialize)]
struct Footer<'a> {
    #[serde(skip_serializing_if = "str::is_empty")]
    message: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    copyright: &'a str,
}

impl<'a> Footer<'a> {
    fn from_config(footer: &'a FooterConfig) -> Option<Self> {
        (!footer.is_empty()).then(|| Self {
            message: &footer.message,
            copyright: &footer.copyright,
        })
    }
}

#[derive(Serialize)]
struct Search<'a> {
    provider: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    options: Option<AlgoliaOptions<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgoliaOptions<'a> {
    app_id: &'a str,
    api_key: &'a str,
    index_name: &'a str,
}

impl<'a> From<&'a SearchConfig> for Search<'a> {
    fn from(search: &'a SearchConfig) -> Self {
        let options = match search {
            SearchConfig::Local => None,
            SearchConfig::Algolia {
                app_id,
                api_key,
                index_name,
            } => Some(AlgoliaOptions {
                app_id,
                api_key,
                index_name,
            }),
        };
        Self {
            provider: search.provider(),
            options,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Markdown {
    theme: String,
    line_numbers: bool,
    toc: Toc,
}

#[derive(Serialize)]
struct Toc {
    level: Vec<u8>,
}

impl From<&MarkdownConfig> for Markdown {
    fn from(markdown: &MarkdownConfig) -> Self {
        Self {
            theme: markdown.theme.clone(),
            line_numbers: markdown.line_numbers,
            toc: Toc {
                level: markdown.sorted_toc_levels(),
            },
        }
    }
}

#[derive(Serialize)]
struct Vite<'a> {
    server: Server<'a>,
}

#[derive(Serialize)]
struct Server<'a> {
    port: u16,
    host: &'a str,
}

impl<'a> From<&'a ServeConfig> for Vite<'a> {
    fn from(serve: &'a ServeConfig) -> Self {
        Self {
            server: Server {
                port: serve.port.get(),
                host: &serve.host,
            },
        }
    }
}

/// Render `config.ts` for `config` with the given (effective) sidebar.
///
/// The output only depends on its inputs: map keys are sorted, struct
/// fields keep declaration order.
pub fn render_config(config: &SiteConfig, sidebar: &Sidebar) -> Result<String> {
    let object = VitePressConfig {
        title: &config.site.title,
        description: &config.site.description,
        lang: &config.site.lang,
        theme_config: ThemeConfig {
            site_title: config.site_title(),
            nav: &config.theme.nav,
            sidebar,
            social_links: &config.theme.social_links,
            footer: Footer::from_config(&config.theme.footer),
            search: Search::from(&config.theme.search),
        },
        markdown: Markdown::from(&config.markdown),
        vite: Vite::from(&config.serve),
    };

    let body = serde_json::to_string_pretty(&object)?;
    Ok(format!("{HEADER}export default defineConfig({body})\n"))
}

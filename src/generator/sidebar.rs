//! Sidebar derived from generated pages.

use super::scan::DocPage;
use crate::config::{GenerateConfig, NavItem, Sidebar, SidebarGroup};

/// One group listing the generated index followed by every page.
pub fn auto_sidebar(pages: &[DocPage], generate: &GenerateConfig) -> SidebarGroup {
    let prefix = generate.sidebar_prefix();

    let items = std::iter::once(NavItem::new(&generate.index_title, &prefix))
        .chain(
            pages
                .iter()
                .map(|page| NavItem::new(&page.title, format!("{prefix}{}", page.route))),
        )
        .collect();

    SidebarGroup::new(&generate.sidebar_title, items)
}

/// The configured sidebar, plus the derived group when the generated prefix
/// has no configured entry.
pub fn effective_sidebar(
    configured: &Sidebar,
    pages: &[DocPage],
    generate: &GenerateConfig,
) -> Sidebar {
    let mut sidebar = configured.clone();
    let prefix = generate.sidebar_prefix();

    if generate.auto_sidebar && !sidebar.contains_prefix(&prefix) {
        sidebar.insert(prefix, vec![auto_sidebar(pages, generate)]);
    }
    sidebar
}

//! Link classification for nav, sidebar and social entries.

/// Whether `link` starts with a URL scheme (`https:`, `mailto:`, ...).
///
/// The scheme is everything before the first `:` and may only hold ASCII
/// alphanumerics, `+`, `-` and `.`; an empty scheme does not count.
#[inline]
pub fn is_external_link(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once(':') else {
        return false;
    };
    !scheme.is_empty()
        && scheme
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}

/// The page part of a site link: `/guide/setup?tab=1#install` → `/guide/setup`.
#[inline]
pub fn page_path(link: &str) -> &str {
    let end = link.find(['#', '?']).unwrap_or(link.len());
    &link[..end]
}

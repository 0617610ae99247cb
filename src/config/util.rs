//! Configuration utility functions.

use crate::utils::path::route::is_external_link;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// BCP 47-ish language tag: `en`, `zh-CN`, `zh-Hans-CN`, `es-419`.
static LANGUAGE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,3}(-[A-Za-z0-9]{2,8})*$").unwrap());

/// RFC 1123 host name (labels of letters, digits and hyphens).
static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .unwrap()
});

/// Icon identifier as understood by the theme (`github`, `x`, `npm`).
static ICON_NAME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap());

/// Base used to check that a relative link is a valid URL reference.
static LINK_BASE: LazyLock<url::Url> =
    LazyLock::new(|| url::Url::parse("http://localhost/").unwrap());

/// Check a navigation/sidebar link.
///
/// Accepts well-formed absolute URLs (`https://...`, `mailto:...`) and
/// relative paths (`/guide/`, `./intro`, `page#anchor`).
///
/// # Examples
/// ```ignore
/// check_link("/generated/")            -> Ok(())
/// check_link("https://github.com/x")   -> Ok(())
/// check_link("")                       -> Err("link must not be empty")
/// check_link("https://")               -> Err("invalid URL: empty host")
/// ```
pub fn check_link(link: &str) -> Result<(), String> {
    if link.trim().is_empty() {
        return Err("link must not be empty".into());
    }
    if link.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(format!("link `{link}` contains whitespace"));
    }

    if is_external_link(link) {
        return check_absolute_url(link);
    }

    // Protocol-relative links carry a host
    if link.starts_with("//") {
        return check_absolute_url(&format!("https:{link}"));
    }

    LINK_BASE
        .join(link)
        .map(|_| ())
        .map_err(|e| format!("invalid relative link `{link}`: {e}"))
}

/// Check an absolute URL: parseable, and web URLs must carry a host.
pub fn check_absolute_url(link: &str) -> Result<(), String> {
    let parsed = url::Url::parse(link).map_err(|e| format!("invalid URL `{link}`: {e}"))?;
    if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none_or(str::is_empty)
    {
        return Err(format!("URL `{link}` has no host"));
    }
    Ok(())
}

/// Check a language tag (`en-US`, `zh-CN`).
pub fn is_language_tag(tag: &str) -> bool {
    LANGUAGE_TAG.is_match(tag)
}

/// Check a bind host: an IP address or an RFC 1123 host name.
pub fn is_valid_host(host: &str) -> bool {
    host.parse::<std::net::IpAddr>().is_ok() || (host.len() <= 253 && HOSTNAME.is_match(host))
}

/// Check a social icon identifier.
pub fn is_icon_name(icon: &str) -> bool {
    ICON_NAME.is_match(icon)
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/project/web/docs/  ← cwd
/// /home/user/project/docsite.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;

    // Walk up from cwd looking for config file
    let mut current = cwd.as_path();
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

/// Resolve a configured path against the project root, expanding `~`.
pub fn resolve_config_path(path: &Path, root: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    let path = PathBuf::from(expanded);
    if path.is_relative() {
        root.join(path)
    } else {
        path
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_link_relative() {
        assert!(check_link("/").is_ok());
        assert!(check_link("/generated/").is_ok());
        assert!(check_link("/generated/overview").is_ok());
        assert!(check_link("./intro").is_ok());
        assert!(check_link("../api/index.md").is_ok());
        assert!(check_link("page#anchor").is_ok());
    }

    #[test]
    fn test_check_link_absolute() {
        assert!(check_link("https://github.com/your-repo").is_ok());
        assert!(check_link("http://localhost:3000/").is_ok());
        assert!(check_link("mailto:docs@example.com").is_ok());
        assert!(check_link("//cdn.example.com/app.js").is_ok());
    }

    #[test]
    fn test_check_link_rejects() {
        assert_eq!(check_link("").unwrap_err(), "link must not be empty");
        assert!(check_link("   ").is_err());
        assert!(check_link("/has space").is_err());
        assert!(check_link("https://").is_err());
        assert!(check_link("http://exa mple.com").is_err());
    }

    #[test]
    fn test_language_tag() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("zh-CN"));
        assert!(is_language_tag("zh-Hans-CN"));
        assert!(is_language_tag("es-419"));
        assert!(!is_language_tag(""));
        assert!(!is_language_tag("chinese simplified"));
        assert!(!is_language_tag("zh_CN"));
    }

    #[test]
    fn test_valid_host() {
        assert!(is_valid_host("localhost"));
        assert!(is_valid_host("127.0.0.1"));
        assert!(is_valid_host("0.0.0.0"));
        assert!(is_valid_host("::1"));
        assert!(is_valid_host("docs.example.com"));
        assert!(!is_valid_host(""));
        assert!(!is_valid_host("local host"));
        assert!(!is_valid_host("-bad.example"));
    }

    #[test]
    fn test_icon_name() {
        assert!(is_icon_name("github"));
        assert!(is_icon_name("x"));
        assert!(!is_icon_name("GitHub"));
        assert!(!is_icon_name(""));
    }

    #[test]
    fn test_resolve_config_path() {
        let root = Path::new("/project");
        assert_eq!(
            resolve_config_path(Path::new("web/docs"), root),
            PathBuf::from("/project/web/docs")
        );
        assert_eq!(
            resolve_config_path(Path::new("/abs/docs"), root),
            PathBuf::from("/abs/docs")
        );
    }
}

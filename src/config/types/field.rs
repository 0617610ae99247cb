//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Used with `#[derive(Config)]` to generate compile-time checked
/// field path accessors. Element paths (`theme.nav[2].link`) are built
/// at runtime with [`FieldPath::index`] and [`FieldPath::key`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "serve")]
/// pub struct ServeConfig {
///     pub host: String,
/// }
///
/// // Generated:
/// impl ServeConfig {
///     pub const FIELDS: ServeConfigFields = ...;
/// }
///
/// // Usage:
/// diag.error(ServeConfig::FIELDS.host, "must not be empty");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of the `i`-th element of an array field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{}]", self.0, i)))
    }

    /// Path of a nested key. Keys that are not bare TOML keys get quoted.
    pub fn key(&self, key: &str) -> Self {
        let bare = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if bare {
            Self(Cow::Owned(format!("{}.{}", self.0, key)))
        } else {
            Self(Cow::Owned(format!("{}.\"{}\"", self.0, key)))
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

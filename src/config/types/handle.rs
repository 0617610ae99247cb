//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables reloading `docsite.toml` during `generate --watch`.

use crate::config::{LoadOptions, SiteConfig};
use anyhow::Result;
use arc_swap::ArcSwap;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Global hash of the current config file content.
static CONFIG_HASH: AtomicU64 = AtomicU64::new(0);

fn content_hash(content: &str) -> u64 {
    let mut hasher = rustc_hash::FxHasher::default();
    content.hash(&mut hasher);
    hasher.finish()
}

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
/// A config that fails to load or validate leaves the current one in place.
pub fn reload_config(options: &LoadOptions) -> Result<bool> {
    use std::fs;

    let c = cfg();
    let content = fs::read_to_string(&c.config_path)?;
    let new_hash = content_hash(&content);

    if new_hash == CONFIG_HASH.load(Ordering::Relaxed) {
        return Ok(false);
    }

    let new_config = SiteConfig::load_from(&c.config_path, options)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, Ordering::Relaxed);

    Ok(true)
}

#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        CONFIG_HASH.store(content_hash(&content), Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

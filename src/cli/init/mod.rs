//! Project initialization module.
//!
//! Writes a commented default configuration.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{config::SiteConfig, log, utils::path::fs::relative_display};
use anyhow::Result;
use std::fs;

pub use validate::InitMode;

/// Initialize a project.
///
/// # Steps
/// 1. Validate target directory
/// 2. Write docsite.toml
/// 3. Create the generated pages directory, .gitignore and package.json
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    let mode = if has_name {
        InitMode::NewDir
    } else {
        InitMode::CurrentDir
    };

    validate::validate_target(root, &site_config.config_path, mode)?;

    config::write_config(&site_config.config_path)?;

    let generated_root = site_config.generated_root();
    fs::create_dir_all(&generated_root)?;
    config::write_ignore_files(root, &site_config.generate.docs_dir)?;
    let package_json = config::write_package_json(root, &site_config.generate)?;

    log!("init"; "wrote {}", relative_display(&site_config.config_path, root));
    if let Some(path) = &package_json {
        log!("init"; "wrote {}", relative_display(path, root));
        log!(
            "init";
            "run `npm install` in {} to install VitePress",
            relative_display(&site_config.generate.package_dir(root), root)
        );
    }
    log!(
        "init";
        "put generated pages in {}, then run `docsite generate`",
        relative_display(&generated_root, root)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_config(root: &std::path::Path) -> SiteConfig {
        SiteConfig {
            config_path: root.join("docsite.toml"),
            root: root.to_path_buf(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_new_site() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("my-docs");
        let config = init_config(&root);

        new_site(&config, true, false).unwrap();
        assert!(root.join("docsite.toml").is_file());
        assert!(root.join("web/docs/generated").is_dir());
        assert!(root.join(".gitignore").is_file());
        let package = fs::read_to_string(root.join("web/package.json")).unwrap();
        assert!(package.contains("\"vitepress dev docs\""));

        // never overwrite
        assert!(new_site(&config, true, false).is_err());
    }

    #[test]
    fn test_existing_config_elsewhere_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let elsewhere = temp.path().join("shared/other.toml");
        fs::create_dir_all(elsewhere.parent().unwrap()).unwrap();
        fs::write(&elsewhere, "[site]\ntitle = \"Keep\"\n").unwrap();

        let config = SiteConfig {
            config_path: elsewhere.clone(),
            root: temp.path().join("site"),
            ..SiteConfig::default()
        };
        assert!(new_site(&config, false, false).is_err());
        assert_eq!(
            fs::read_to_string(&elsewhere).unwrap(),
            "[site]\ntitle = \"Keep\"\n"
        );
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let config = init_config(temp.path());
        new_site(&config, false, true).unwrap();
        assert!(!temp.path().join("docsite.toml").exists());
    }
}

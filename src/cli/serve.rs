//! `docsite serve`: generate, then run the VitePress dev server.

use anyhow::{Context, Result, bail};

use crate::config::SiteConfig;
use crate::core::{enter_foreground, is_shutdown, leave_foreground};
use crate::generator::generate;
use crate::log;
use crate::utils::exec::Cmd;

use super::generate::log_report;

/// `npx vitepress dev <docs> --host <host> --port <port>`, run from the
/// directory holding `package.json` so the local VitePress install is used.
pub fn dev_server_command(config: &SiteConfig) -> Cmd {
    let root = config.get_root();
    Cmd::new("npx")
        .args(["vitepress", "dev"])
        .arg(config.generate.docs_from_package(root))
        .arg("--host")
        .arg(&config.serve.host)
        .arg("--port")
        .arg(config.serve.port.to_string())
        .cwd(config.generate.package_dir(root))
}

pub fn serve_site(config: &SiteConfig, no_generate: bool) -> Result<()> {
    if !no_generate {
        let report = generate(config)?;
        log_report(config, &report);
    }

    let package_dir = config.generate.package_dir(config.get_root());
    if !package_dir.join("package.json").is_file() {
        log!(
            "warning";
            "no package.json in {}, npx will fetch VitePress on the fly",
            package_dir.display()
        );
    }

    let cmd = dev_server_command(config);
    log!("serve"; "{}", cmd.display());
    log!("serve"; "starting on {}", config.serve.url());

    enter_foreground();
    let status = cmd
        .status()
        .context("the dev server needs Node.js (npx) installed");
    leave_foreground();

    let status = status?;
    // Ctrl+C reaches the child too; its exit code then is not an error
    if !status.success() && !is_shutdown() {
        bail!("dev server exited with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_dev_server_command() {
        let mut config = test_parse_config("[serve]\nhost = \"0.0.0.0\"\nport = 8080");
        config.root = Path::new("/project").to_path_buf();

        assert_eq!(
            dev_server_command(&config).display(),
            "npx vitepress dev docs --host 0.0.0.0 --port 8080"
        );
        assert_eq!(config.generate.package_dir(&config.root), Path::new("/project/web"));
    }
}

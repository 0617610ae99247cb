//! `docsite show`: print the resolved config.

use anyhow::Result;

use crate::config::SiteConfig;

/// Render the config with every default filled in.
pub fn render(config: &SiteConfig, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(config)? + "\n")
    } else {
        Ok(toml::to_string_pretty(config)?)
    }
}

pub fn show_config(config: &SiteConfig, json: bool) -> Result<()> {
    print!("{}", render(config, json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_show_toml_fills_defaults() {
        let config = test_parse_config("");
        let out = render(&config, false).unwrap();
        assert!(out.contains("[serve]"));
        assert!(out.contains("port = 3000"));
        assert!(out.contains("lang = \"en-US\""));

        let reparsed = SiteConfig::from_str(&out).unwrap();
        assert_eq!(reparsed, config);
    }

    #[test]
    fn test_show_json() {
        let config = test_parse_config("[theme]\nnav = [{ text = \"Home\", link = \"/\" }]");
        let value: serde_json::Value =
            serde_json::from_str(&render(&config, true).unwrap()).unwrap();
        assert_eq!(value["site"]["title"], "Test");
        assert_eq!(value["theme"]["nav"][0]["link"], "/");
        assert_eq!(value["theme"]["search"]["provider"], "local");
        assert_eq!(value["serve"]["port"], 3000);
        assert!(value.get("root").is_none());
    }
}

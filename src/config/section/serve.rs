//! `[serve]` section configuration.
//!
//! Address of the site generator's development server.
//!
//! # Example
//!
//! ```toml
//! [serve]
//! host = "localhost"          # Host name or address to bind
//! port = 3000                 # HTTP port number
//! ```
//!
//! Use `host = "0.0.0.0"` to make the dev server accessible from LAN.

use crate::config::{ConfigDiagnostics, Port, util::is_valid_host};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Development server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "serve")]
pub struct ServeConfig {
    /// Host name or address to bind.
    #[config(inline_doc)]
    pub host: String,

    /// HTTP port number.
    #[config(inline_doc)]
    pub port: Port,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            host: "localhost".into(),
            port: Port::new(3000),
        }
    }
}

impl ServeConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !is_valid_host(&self.host) {
            diag.error_with_hint(
                Self::FIELDS.host,
                format!("`{}` is not a valid host", self.host),
                "use \"localhost\", \"127.0.0.1\" or \"0.0.0.0\"",
            );
        }
    }

    /// Address shown to the user, e.g. `http://localhost:3000`.
    pub fn url(&self) -> String {
        if self.host.contains(':') {
            format!("http://[{}]:{}", self.host, self.port)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }
}

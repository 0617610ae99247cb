//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Declarative configuration for VitePress documentation sites
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: docsite.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat unknown config fields as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented default config file
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the config
    #[command(visible_alias = "c")]
    Check,

    /// Print the resolved config
    Show {
        /// Print as JSON instead of TOML
        #[arg(long)]
        json: bool,
    },

    /// Show which sidebar applies to a page path
    #[command(visible_alias = "r")]
    Resolve {
        /// Page path, e.g. `/generated/module_a`
        path: String,
    },

    /// Write the site generator config and home page
    #[command(visible_alias = "g")]
    Generate {
        /// Regenerate when the config or generated pages change
        #[arg(short, long)]
        watch: bool,
    },

    /// Generate, then start the development server
    #[command(visible_alias = "s")]
    Serve {
        /// Host to bind (e.g., localhost, 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Skip generation and use the files already on disk
        #[arg(long)]
        no_generate: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["docsite", "serve", "--host", "0.0.0.0", "-p", "8080"])
            .unwrap();
        match cli.command {
            Commands::Serve {
                host,
                port,
                no_generate,
            } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(!no_generate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["docsite", "check", "--strict", "-C", "site.toml"]).unwrap();
        assert!(cli.strict);
        assert_eq!(cli.config, PathBuf::from("site.toml"));
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_parse_port_out_of_range() {
        assert!(Cli::try_parse_from(["docsite", "serve", "--port", "70000"]).is_err());
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::try_parse_from(["docsite", "init", "my-docs", "--dry"]).unwrap();
        match cli.command {
            Commands::Init { name, dry } => {
                assert_eq!(name, Some(PathBuf::from("my-docs")));
                assert!(dry);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

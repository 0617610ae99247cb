//! Proc macros for docsite.
//!
//! # Config derive macro
//!
//! Generates both field path accessors and a commented TOML template.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "serve")]
//! /// Development server settings.
//! pub struct ServeConfig {
//!     /// Host name or address to bind.
//!     #[config(inline_doc)]
//!     pub host: String,
//!
//!     /// Port number.
//!     #[config(default = "3000")]
//!     pub port: Port,
//!
//!     /// Internal field.
//!     #[config(skip)]
//!     pub internal: String,
//! }
//!
//! // Generates:
//! // - ServeConfig::FIELDS.host -> FieldPath("serve.host")
//! // - ServeConfig::template() -> TOML string with comments
//! // - ServeConfig::template_with_header() -> with [serve] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS and template (internal use)
//! - `#[config(hidden)]` - Keep in FIELDS, hide from template output
//! - `#[config(name = "x")]` - Custom TOML field name
//! - `#[config(default = "x")]` - Template value (TOML literal, strings are quoted for `String` fields)
//! - `#[config(inline_doc)]` / `#[config(inline_doc = "x")]` - Trailing comment instead of a doc block
//! - `#[config(sub)]` - Nested section, rendered with its own header after the own fields
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `MarkdownConfig` → `markdown`
//! - `SiteSectionConfig` → `site`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS and template().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}

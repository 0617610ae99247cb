//! `#[derive(Config)]`: field paths plus a commented TOML template.
//!
//! For a struct `SiteSectionConfig` in section `site` this emits:
//!
//! ```text
//! struct SiteSectionConfigFields { title: FieldPath, .. }   // "site.title", ..
//! impl SiteSectionConfig {
//!     const FIELDS, TEMPLATE_SECTION, TEMPLATE_DOC
//!     fn template() -> String              // body only
//!     fn template_with_header() -> String  // doc comment + [site] + body
//! }
//! ```

mod attr;
mod field;
mod template;
mod types;

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident};

use attr::{extract_doc_comment, get_section};
use field::FieldInfo;
use template::generate_template_code;
use types::infer_section;

pub fn derive(input: &DeriveInput) -> TokenStream {
    let name = &input.ident;

    let Data::Struct(data) = &input.data else {
        return quote! { compile_error!("Config only works on structs"); };
    };
    let Fields::Named(named) = &data.fields else {
        return quote! { compile_error!("Config only works on structs with named fields"); };
    };

    let section = get_section(&input.attrs).unwrap_or_else(|| infer_section(&name.to_string()));
    let section_doc = extract_doc_comment(&input.attrs).unwrap_or_default();
    let fields: Vec<FieldInfo> = named.named.iter().filter_map(FieldInfo::from_field).collect();

    let paths = field_paths(name, &section, &fields);

    let in_template: Vec<_> = fields.iter().filter(|f| f.in_template()).collect();
    let template_body = generate_template_code(&in_template);

    quote! {
        #paths

        impl #name {
            pub const TEMPLATE_SECTION: &'static str = #section;
            pub const TEMPLATE_DOC: &'static str = #section_doc;

            /// Commented `key = default` lines for this section.
            #[allow(unused_variables)]
            pub fn template() -> String {
                let default = Self::default();
                let mut out = String::new();
                #template_body
                out
            }

            /// [`Self::template`] preceded by the section doc and `[header]`.
            pub fn template_with_header() -> String {
                let mut out: String = Self::TEMPLATE_DOC
                    .lines()
                    .map(|line| format!("# {}\n", line.trim()))
                    .collect();
                if !Self::TEMPLATE_SECTION.is_empty() {
                    out.push_str(&format!("[{}]\n", Self::TEMPLATE_SECTION));
                }
                out.push_str(&Self::template());
                out
            }
        }
    }
}

/// The `<Name>Fields` struct and the `FIELDS` constant.
fn field_paths(owner: &Ident, section: &str, fields: &[FieldInfo]) -> TokenStream {
    let paths_struct = Ident::new(&format!("{owner}Fields"), owner.span());
    let addressable: Vec<_> = fields.iter().filter(|f| !f.skip).collect();

    let members = addressable.iter().map(|f| {
        let ident = &f.name;
        quote! { pub #ident: crate::config::FieldPath, }
    });
    let values = addressable.iter().map(|f| {
        let ident = &f.name;
        let path = match section {
            "" => f.toml_name.clone(),
            _ => format!("{section}.{}", f.toml_name),
        };
        quote! { #ident: crate::config::FieldPath::new(#path), }
    });

    quote! {
        /// Dotted TOML paths of each field, for diagnostics.
        #[allow(non_camel_case_types, dead_code)]
        pub struct #paths_struct {
            #(#members)*
        }

        impl #owner {
            #[allow(dead_code)]
            pub const FIELDS: #paths_struct = #paths_struct {
                #(#values)*
            };
        }
    }
}

//! Template generation code for Config derive macro.

use proc_macro2::TokenStream;
use quote::quote;

use crate::config::field::FieldInfo;
use crate::config::types::{format_default_for_type, type_to_string};

/// Generate template code (TokenStream) for fields.
///
/// Own fields come first, nested sections after them, so every key lands
/// under the right TOML header.
pub fn generate_template_code(fields: &[&FieldInfo]) -> TokenStream {
    let own: Vec<TokenStream> = fields
        .iter()
        .filter(|f| !f.sub)
        .map(|f| generate_field_template_code(f))
        .collect();
    let subs: Vec<TokenStream> = fields
        .iter()
        .filter(|f| f.sub)
        .map(|f| generate_sub_template_code(f))
        .collect();

    quote! {
        #(#own)*
        #(#subs)*
    }
}

/// Doc comment lines, unless the doc is rendered inline.
fn doc_code(info: &FieldInfo) -> TokenStream {
    match (&info.doc, &info.inline_doc) {
        (Some(doc), None) => {
            let doc_str: String = doc.lines().map(|l| format!("# {}\n", l.trim())).collect();
            quote! { out.push_str(#doc_str); }
        }
        _ => quote! {},
    }
}

fn inline_suffix(info: &FieldInfo) -> String {
    match &info.inline_doc {
        Some(comment) if !comment.is_empty() => format!("  # {comment}"),
        _ => String::new(),
    }
}

/// Nested section: blank line, then the sub config's own header.
fn generate_sub_template_code(info: &FieldInfo) -> TokenStream {
    let field_ty = &info.ty;
    quote! {
        out.push('\n');
        out.push_str(&<#field_ty>::template_with_header());
    }
}

/// Generate TOML template code for a single field
fn generate_field_template_code(info: &FieldInfo) -> TokenStream {
    let field_name = &info.name;
    let toml_name = &info.toml_name;
    let doc = doc_code(info);
    let suffix = inline_suffix(info);

    let ty_str = type_to_string(&info.ty);
    let is_optional = ty_str.starts_with("Option<");

    // Optional fields without explicit default are commented out
    if is_optional && info.default.is_none() {
        let line = format!("# {toml_name} = \"\"{suffix}\n");
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Explicit default (compile-time known)
    if let Some(ref default_val) = info.default {
        let formatted = format_default_for_type(default_val, &ty_str);
        let line = format!("{toml_name} = {formatted}{suffix}\n");
        return quote! {
            #doc
            out.push_str(#line);
        };
    }

    // Runtime value from Default::default()
    quote! {
        #doc
        out.push_str(#toml_name);
        out.push_str(" = ");
        out.push_str(&toml::Value::try_from(default.#field_name.clone())
            .map(|v| v.to_string())
            .unwrap_or_else(|_| "\"\"".to_string()));
        out.push_str(#suffix);
        out.push('\n');
    }
}

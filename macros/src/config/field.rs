//! Field information structures and parsing.

use syn::Type;

use crate::config::attr::{
    extract_doc_comment, get_custom_name, get_default_value, get_inline_doc, has_attr,
};

/// Parsed field information.
pub struct FieldInfo {
    pub name: syn::Ident,
    pub toml_name: String,
    pub doc: Option<String>,
    /// Trailing comment, resolved from `inline_doc` (only single-line docs qualify).
    pub inline_doc: Option<String>,
    pub default: Option<String>,
    pub skip: bool,
    pub hidden: bool,
    pub sub: bool,
    pub ty: Type,
}

impl FieldInfo {
    /// Parse field info from a syn::Field.
    pub fn from_field(field: &syn::Field) -> Option<Self> {
        let ident = field.ident.as_ref()?;
        let attrs = &field.attrs;
        let doc = extract_doc_comment(attrs);

        let inline_doc = match get_inline_doc(attrs) {
            Some(text) if text.is_empty() => doc
                .as_ref()
                .filter(|d| !d.contains('\n'))
                .map(|d| d.trim().to_string()),
            other => other,
        };

        Some(Self {
            name: ident.clone(),
            toml_name: get_custom_name(attrs).unwrap_or_else(|| ident.to_string()),
            doc,
            inline_doc,
            default: get_default_value(attrs),
            skip: has_attr(attrs, "skip"),
            hidden: has_attr(attrs, "hidden"),
            sub: has_attr(attrs, "sub"),
            ty: field.ty.clone(),
        })
    }

    /// Whether the field shows up in the generated template.
    pub fn in_template(&self) -> bool {
        !self.skip && !self.hidden
    }
}

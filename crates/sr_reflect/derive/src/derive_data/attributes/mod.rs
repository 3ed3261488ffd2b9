//! Parsers for `#[reflect(...)]` on the type and on its fields.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAnnotation, FieldAttributes};
pub(crate) use type_attributes::{MethodAttribute, TypeAttributes};

mod kw {
    syn::custom_keyword!(name);
    syn::custom_keyword!(bind);
    syn::custom_keyword!(auto_register);
    syn::custom_keyword!(method);
    syn::custom_keyword!(tag);
    syn::custom_keyword!(transform);
    syn::custom_keyword!(ignore);
}

/// Run `parse_one` on every comma separated item of every `#[reflect(...)]`.
fn parse_reflect_attrs(
    attrs: &[syn::Attribute],
    mut parse_one: impl FnMut(syn::parse::ParseStream) -> syn::Result<()>,
) -> syn::Result<()> {
    for attr in attrs {
        if !attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME) {
            continue;
        }
        attr.parse_args_with(|input: syn::parse::ParseStream| {
            while !input.is_empty() {
                parse_one(input)?;
                if input.is_empty() {
                    break;
                }
                input.parse::<syn::Token![,]>()?;
            }
            Ok(())
        })?;
    }
    Ok(())
}

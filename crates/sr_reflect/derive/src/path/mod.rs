//! This independent module is used to provide the required path.
//! So as to minimize changes when the `sr_reflect` structure is modified.
//!
//! The only special feature is the path of sr_reflect itself,
//! See [`sr_reflect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `sr_reflect` crate.
///
/// 1. For crates that depend on `sr_reflect`, `::sr_reflect` is returned here.
/// 2. For crates that depend on `sr_core`, `::sr_core::reflect` is returned here.
/// 3. For crates that depend on `sr`, `::sr::reflect` is returned here.
/// 4. For other situations, `::sr_reflect` is returned here, but this may be incorrect.
///
/// Reading the manifest is not free, so the path is obtained once per
/// derive and passed around.
pub(crate) fn sr_reflect() -> syn::Path {
    sr_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("sr_reflect"))
}

// -----------------------------------------------------------------------------
// Items

#[inline(always)]
pub(crate) fn field_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::Field
    }
}

#[inline(always)]
pub(crate) fn reflect_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn field_ref_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::FieldRef
    }
}

#[inline(always)]
pub(crate) fn field_mut_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::FieldMut
    }
}

#[inline(always)]
pub(crate) fn info_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::info
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(sr_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #sr_reflect_path::__macro_exports::auto_register
    }
}

use proc_macro2::TokenStream;
use quote::quote_spanned;

use crate::derive_data::ReflectMeta;

/// Reject, at compile time, two fields with different names and one
/// fingerprint.
///
/// Generic types are skipped: an associated constant of a generic impl can
/// only be evaluated once the parameters are known, which happens at the
/// traversal entry points.
pub(crate) fn get_collision_check_impl(meta: &ReflectMeta) -> TokenStream {
    if meta.impl_with_generic() {
        return crate::utils::empty();
    }

    let reflect_ = crate::path::reflect_(meta.sr_reflect_path());
    let real_ident = meta.real_ident();

    quote_spanned! { real_ident.span() =>
        const _: () = ::core::assert!(
            !<#real_ident as #reflect_>::REGISTRY.has_fingerprint_collision(),
            "two fields with different names share a fingerprint",
        );
    }
}

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Generics, Ident, LitStr, Path, Type};

use super::TypeAttributes;

/// Type level data shared by every generated item.
pub(crate) struct ReflectMeta<'a> {
    sr_reflect_path: Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
    generics: &'a Generics,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("sr_reflect_path", &self.sr_reflect_path.to_token_stream())
            .field("ident", &self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident, generics: &'a Generics) -> Self {
        Self {
            sr_reflect_path: crate::path::sr_reflect(),
            attrs,
            ident,
            generics,
        }
    }

    #[inline]
    pub fn sr_reflect_path(&self) -> &Path {
        &self.sr_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// The identifier of the type, without generics.
    #[inline]
    pub fn real_ident(&self) -> &Ident {
        self.ident
    }

    #[inline]
    pub fn generics(&self) -> &Generics {
        self.generics
    }

    /// Whether the type has any generic parameter, lifetimes included.
    #[inline]
    pub fn impl_with_generic(&self) -> bool {
        !self.generics.params.is_empty()
    }

    /// The registered type name as a string literal.
    pub fn type_name(&self) -> LitStr {
        match &self.attrs.name {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    /// The user's where clause plus the bounds generated code relies on.
    ///
    /// For a generic type every reflected field type must be a `Field`, and
    /// the type itself must satisfy the `Field` supertraits. Non-generic
    /// types keep their where clause as is, so a missing `Field` impl is
    /// reported at the field.
    pub fn where_clause_tokens<'t>(
        &self,
        field_types: impl Iterator<Item = &'t Type>,
    ) -> TokenStream {
        let predicates = self
            .generics
            .where_clause
            .as_ref()
            .map(|clause| clause.predicates.iter().collect::<Vec<_>>())
            .unwrap_or_default();

        if !self.impl_with_generic() {
            return if predicates.is_empty() {
                crate::utils::empty()
            } else {
                quote! { where #(#predicates,)* }
            };
        }

        let field_ = crate::path::field_(&self.sr_reflect_path);
        let field_bounds = field_types.map(|ty| quote! { #ty: #field_ });

        quote! {
            where
                #(#predicates,)*
                #(#field_bounds,)*
                Self: ::core::marker::Send + ::core::marker::Sync + 'static,
        }
    }
}

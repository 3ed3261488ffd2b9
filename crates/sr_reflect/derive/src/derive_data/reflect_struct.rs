use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{FieldAttributes, ReflectMeta, TypeAttributes};

/// A named field of the deriving struct.
#[derive(Debug)]
pub(crate) struct StructField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    pub attrs: FieldAttributes,
}

impl StructField<'_> {
    /// The external name: the explicit one, the bind group, or the identifier.
    pub fn name(&self) -> LitStr {
        match self.attrs.name.as_ref().or(self.attrs.bind.as_ref()) {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), self.ident.span()),
        }
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.attrs.bind.is_some()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.attrs.ignore.is_none()
    }
}

/// A parsed `struct T { ... }`.
#[derive(Debug)]
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    fields: Vec<StructField<'a>>,
}

impl<'a> ReflectStruct<'a> {
    pub fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                Fields::Unnamed(fields) => return Err(unsupported(fields.span(), "tuple structs")),
                Fields::Unit => return Err(unsupported(ast.ident.span(), "unit structs")),
            },
            Data::Enum(data) => return Err(unsupported(data.enum_token.span, "enums")),
            Data::Union(data) => return Err(unsupported(data.union_token.span, "unions")),
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;
        let meta = ReflectMeta::new(attrs, &ast.ident, &ast.generics);

        let mut errors: Vec<syn::Error> = Vec::new();
        let mut fields = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let attrs = match FieldAttributes::parse_attrs(&field.attrs) {
                Ok(attrs) => attrs,
                Err(err) => {
                    errors.push(err);
                    continue;
                }
            };
            // Named fields always carry an identifier.
            let Some(ident) = &field.ident else { continue };
            fields.push(StructField {
                ident,
                ty: &field.ty,
                attrs,
            });
        }

        let combined = errors.into_iter().reduce(|mut all, err| {
            all.combine(err);
            all
        });
        if let Some(err) = combined {
            return Err(err);
        }

        Ok(Self { meta, fields })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields that take part in reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.is_active())
    }
}

fn unsupported(span: Span, what: &str) -> syn::Error {
    syn::Error::new(
        span,
        format!("`#[derive(Reflect)]` supports structs with named fields, not {what}"),
    )
}

use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, get_collision_check_impl};

use crate::derive_data::{
    FieldAnnotation, MethodAttribute, ReflectMeta, ReflectStruct, StructField,
};

/// Implement `Field` and `Reflect` for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // trait: Field
    let field_trait_tokens = impl_trait_field(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(info);

    let collision_check_tokens = get_collision_check_impl(meta);

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #field_trait_tokens

        #reflect_trait_tokens

        #collision_check_tokens

        #auto_register_tokens
    }
}

fn impl_trait_field(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let sr_reflect_path = meta.sr_reflect_path();
    let field_ = crate::path::field_(sr_reflect_path);
    let field_ref_ = crate::path::field_ref_(sr_reflect_path);
    let field_mut_ = crate::path::field_mut_(sr_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();
    let where_clause = meta.where_clause_tokens(info.active_fields().map(|field| field.ty));

    quote! {
        impl #impl_generics #field_ for #real_ident #ty_generics #where_clause {
            #[inline]
            fn as_field(&self) -> #field_ref_<'_> {
                #field_ref_::Struct(self)
            }

            #[inline]
            fn as_field_mut(&mut self) -> #field_mut_<'_> {
                #field_mut_::Struct(self)
            }
        }
    }
}

fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let sr_reflect_path = meta.sr_reflect_path();
    let reflect_ = crate::path::reflect_(sr_reflect_path);
    let info_ = crate::path::info_(sr_reflect_path);

    let real_ident = meta.real_ident();
    let (impl_generics, ty_generics, _) = meta.generics().split_for_impl();
    let where_clause = meta.where_clause_tokens(info.active_fields().map(|field| field.ty));

    let type_name = meta.type_name();

    let field_descriptors = info
        .active_fields()
        .map(|field| get_field_descriptor(meta, field));

    let methods_tokens = if meta.attrs().methods.is_empty() {
        crate::utils::empty()
    } else {
        let method_descriptors = meta
            .attrs()
            .methods
            .iter()
            .map(|method| get_method_descriptor(meta, method));
        quote! {
            const METHODS: &'static [#info_::MethodDescriptor] = &[
                #(#method_descriptors,)*
            ];
        }
    };

    quote! {
        impl #impl_generics #reflect_ for #real_ident #ty_generics #where_clause {
            const TYPE_NAME: &'static str = #type_name;

            const FIELDS: &'static [#info_::FieldDescriptor<Self>] = &[
                #(#field_descriptors,)*
            ];

            #methods_tokens
        }
    }
}

/// Similar to following:
///
/// ```ignore
/// _path_::info::FieldDescriptor::new(
///     _path_::info::FieldInfo::new("breakTime", "wait_time_qian_yao")
///         .bound()
///         .with_tag(_path_::info::Tag::of::<ElfHash>()),
///     |this| _path_::Field::as_field(&this.wait_time_qian_yao),
///     |this| _path_::Field::as_field_mut(&mut this.wait_time_qian_yao),
/// )
/// ```
fn get_field_descriptor(meta: &ReflectMeta, field: &StructField) -> TokenStream {
    let sr_reflect_path = meta.sr_reflect_path();
    let info_ = crate::path::info_(sr_reflect_path);
    let field_ = crate::path::field_(sr_reflect_path);

    let ident = field.ident;
    let ident_str = ident.to_string();
    let name = field.name();

    let with_annotation = match &field.attrs.annotation {
        FieldAnnotation::None => crate::utils::empty(),
        FieldAnnotation::Tag(ty) => quote! {
            .with_tag(#info_::Tag::of::<#ty>())
        },
        FieldAnnotation::Transform(path) => {
            let path_str = crate::utils::path_to_string(path);
            quote! {
                .with_transform(#info_::Transform::new(#path_str, #path))
            }
        }
    };

    let with_bind = if field.is_bound() {
        quote! { .bound() }
    } else {
        crate::utils::empty()
    };

    quote! {
        #info_::FieldDescriptor::new(
            #info_::FieldInfo::new(#name, #ident_str) #with_bind #with_annotation,
            |this| #field_::as_field(&this.#ident),
            |this| #field_::as_field_mut(&mut this.#ident),
        )
    }
}

/// Similar to following:
///
/// ```ignore
/// _path_::info::MethodDescriptor::new("area", &(Self::area as fn(&Self) -> f32))
/// ```
fn get_method_descriptor(meta: &ReflectMeta, method: &MethodAttribute) -> TokenStream {
    let info_ = crate::path::info_(meta.sr_reflect_path());

    let ident = &method.ident;
    let ty = &method.ty;
    let name = method.name();

    quote! {
        #info_::MethodDescriptor::new(#name, &(Self::#ident as #ty))
    }
}

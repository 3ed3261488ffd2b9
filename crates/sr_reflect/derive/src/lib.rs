//! Derive macro for `sr_reflect`.
//!
//! See [`Reflect`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Field Registry Derivation
///
/// `#[derive(Reflect)]` implements `Field` and `Reflect` for a struct with
/// named fields. The registry lists every field in declaration order, with
/// its external name, its fingerprint and an optional annotation.
///
/// Tuple structs, unit structs, enums and unions are rejected.
///
/// ## Type Attributes
///
/// ### Type name
///
/// Defaults to the identifier. Documents that name the type differently
/// can override it:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(name = "ActionFlowLCast")]
/// struct CastFlow { /* ... */ }
/// ```
///
/// ### Methods
///
/// Register a function pointer by name. The type after the colon is the
/// exact pointer type the method is cast to and later recovered with.
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(method(area: fn(&Self) -> f32), method(scale: fn(&mut Self, f32), name = "Scale"))]
/// struct Rect { w: f32, h: f32 }
/// ```
///
/// ### Auto registration
///
/// With the `auto_register` feature, `#[reflect(auto_register)]` submits the
/// type to `TypeCatalog::auto_register`. The type must implement `Default`.
/// Ignored on generic types.
///
/// ## Field Attributes
///
/// - `name = "..."`: external name, defaults to the identifier.
/// - `bind = "..."`: external name shared by a bind group. Every field bound
///   to the same name is offered together when the name is looked up, so
///   one document value populates them all. Replaces `name`.
/// - `tag = Type`: marker type, the field is visited through `visit_tagged`.
/// - `transform = path`: a `fn(&FieldInfo, FieldMut<'_>)` run after the
///   field is populated, the field is visited through `visit_transformed`.
/// - `ignore`: leave the field out of the registry.
///
/// A field takes at most one of `tag` and `transform`.
///
/// ```rust, ignore
/// struct ElfHash;
///
/// fn halve(_: &FieldInfo, field: FieldMut<'_>) { /* ... */ }
///
/// #[derive(Reflect, Default)]
/// struct ActionFlow {
///     #[reflect(bind = "breakTime", tag = ElfHash)]
///     wait_time_qian_yao: u32,
///     #[reflect(bind = "breakTime")]
///     wait_time_move_qian_yao: u32,
///     #[reflect(name = "endTime", transform = halve)]
///     end_time: u32,
///     #[reflect(ignore)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// ## Fingerprint collisions
///
/// For non-generic types the derive emits a constant assertion, so two
/// fields with different names and the same fingerprint fail to compile.
/// Generic types are checked where they are traversed.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);
    impls::match_reflect_impls(ast)
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Compilation config

/// Some macros used for compilation control.
pub mod cfg {
    sr_cfg::define_alias! {
        #[cfg(feature = "std")] => std,
        #[cfg(feature = "auto_register")] => auto_register,
        #[cfg(feature = "json")] => json,
        #[cfg(feature = "xml")] => xml,
        #[cfg(all(debug_assertions, feature = "debug"))] => debug,
    }
}

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::sr_reflect::...` paths, including in this
// crate's own tests.
extern crate self as sr_reflect;

// -----------------------------------------------------------------------------
// no_std support

crate::cfg::std! {
    extern crate std;
}

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod fingerprint;
mod reflection;

pub mod catalog;
pub mod info;
pub mod ops;
pub mod visit;

#[cfg(any(feature = "json", feature = "xml"))]
pub mod adapter;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use fingerprint::Fingerprint;
pub use ops::{FieldKind, FieldMut, FieldRef, Struct};
pub use reflection::{Field, Reflect};
pub use sr_reflect_derive as derive;

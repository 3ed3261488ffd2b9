//! A run-time catalogue of reflected types.
//!
//! The registry of a type is a compile-time constant, but a document often
//! names the type to build only at run time, e.g. by an element name. The
//! [`TypeCatalog`] maps a type-name fingerprint to a constructor so such a
//! document can be loaded into the right struct.
//!
//! Types are added with [`TypeCatalog::register`], or collected from every
//! `#[reflect(auto_register)]` type with [`TypeCatalog::auto_register`].

// -----------------------------------------------------------------------------
// Modules

mod type_catalog;

// -----------------------------------------------------------------------------
// Exports

pub use type_catalog::{CatalogEntry, TypeCatalog};

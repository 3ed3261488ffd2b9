//! The traversal engine.
//!
//! ## Menu
//!
//! Visitors:
//!
//! - [`FieldVisitor`]: receives [`FieldRef`](crate::FieldRef) views.
//! - [`FieldVisitorMut`]: receives [`FieldMut`](crate::FieldMut) views.
//!
//! Operations, generic over the host type:
//!
//! - [`for_each_field`] / [`for_each_field_mut`]: every field, in declaration
//!   order, no early exit.
//! - [`find_in_field`] / [`find_in_field_mut`]: fields matching a
//!   [`Fingerprint`](crate::Fingerprint), stopping at the first one handled.
//! - [`find_by_name`] / [`find_by_name_mut`]: the same, keyed by a run-time name.
//!
//! Lookups are linear scans over the registry, so traversal never allocates.
//!
//! The visitor method is selected by the field's annotation: plain fields go
//! to `visit`, tagged fields to `visit_tagged` and fields with a transform to
//! `visit_transformed`.
//!
//! The generic functions refuse, at compile time, a type with no reflected
//! fields or with two differently named fields sharing a fingerprint.
//! Traversal through `&dyn Struct` skips that check.

// -----------------------------------------------------------------------------
// Modules

pub(crate) mod traverse;
mod visitor;

// -----------------------------------------------------------------------------
// Exports

pub use traverse::{
    find_by_name, find_by_name_mut, find_in_field, find_in_field_mut, for_each_field,
    for_each_field_mut,
};
pub use visitor::{FieldVisitor, FieldVisitorMut};

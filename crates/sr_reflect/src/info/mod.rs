//! Registry data model.
//!
//! # Menu
//!
//! - [`FieldInfo`]: name, identifier, fingerprint and [`Annotation`] of a field.
//! - [`Annotation`]: `None`, a [`Tag`] or a [`Transform`].
//! - [`FieldDescriptor`]: a [`FieldInfo`] plus accessors into the host type.
//! - [`MethodDescriptor`]: a named, type-erased function pointer.
//! - [`TypeRegistry`]: the ordered tables of one type.

// -----------------------------------------------------------------------------
// Modules

mod annotation;
mod descriptor;
mod field_info;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use annotation::{Annotation, AnnotationKind, Tag, Transform};
pub use descriptor::{FieldDescriptor, MethodDescriptor};
pub use field_info::FieldInfo;
pub use type_registry::TypeRegistry;

//! Typed views of field storage and object-safe access traits.
//!
//! ## Menu
//!
//! ### Views
//!
//! A [`FieldDescriptor`] accessor returns one of:
//!
//! - [`FieldRef`]: shared view.
//! - [`FieldMut`]: exclusive view.
//! - [`FieldKind`]: the variant discriminant.
//!
//! ### Interface
//!
//! Container and nested fields are exposed through object-safe traits:
//!
//! - [`Struct`]: a reflected struct, blanket implemented for every [`Reflect`] type.
//! - [`List`]: `Vec<T>` and `[T; N]`.
//! - [`Optional`]: `Option<T>`.
//!
//! [`FieldDescriptor`]: crate::info::FieldDescriptor
//! [`Reflect`]: crate::Reflect

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod option_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{FieldKind, FieldMut, FieldRef};
pub use list_ops::List;
pub use option_ops::Optional;
pub use struct_ops::Struct;

use crate::ops::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// Field

/// A type that can be stored in a reflected field.
///
/// The implementation decides which [`FieldRef`] / [`FieldMut`] variant the
/// field produces, so choosing between "convert a scalar" and "recurse into a
/// struct" is resolved per field type at compile time.
///
/// Implemented for:
///
/// - `bool`, `char`, all integer widths, `f32`, `f64`, `String`
/// - `Vec<T>` and `[T; N]` where `T: Field + Default`
/// - `Option<T>` where `T: Field + Default`
/// - every `#[derive(Reflect)]` type
///
/// A field type without an implementation is a compile error in the
/// generated registry.
pub trait Field: Send + Sync + 'static {
    /// Borrow as a typed view.
    fn as_field(&self) -> FieldRef<'_>;

    /// Mutably borrow as a typed view.
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

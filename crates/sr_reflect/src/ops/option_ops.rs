use crate::Field;
use crate::ops::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// Optional

/// Object-safe access to an `Option<T>` field.
pub trait Optional: Send + Sync {
    /// Returns `true` if a value is present.
    fn is_some(&self) -> bool;

    /// Borrow the value, if any.
    fn get(&self) -> Option<FieldRef<'_>>;

    /// Mutably borrow the value, if any.
    fn get_mut(&mut self) -> Option<FieldMut<'_>>;

    /// Insert `T::default()` when empty, then borrow the value.
    fn get_or_insert_default(&mut self) -> FieldMut<'_>;

    /// Set to `None`.
    fn clear(&mut self);
}

impl<T: Field + Default> Optional for Option<T> {
    #[inline]
    fn is_some(&self) -> bool {
        Option::is_some(self)
    }

    #[inline]
    fn get(&self) -> Option<FieldRef<'_>> {
        self.as_ref().map(Field::as_field)
    }

    #[inline]
    fn get_mut(&mut self) -> Option<FieldMut<'_>> {
        self.as_mut().map(Field::as_field_mut)
    }

    #[inline]
    fn get_or_insert_default(&mut self) -> FieldMut<'_> {
        Option::get_or_insert_default(self).as_field_mut()
    }

    #[inline]
    fn clear(&mut self) {
        *self = None;
    }
}

impl<T: Field + Default> Field for Option<T> {
    #[inline]
    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::Option(self)
    }

    #[inline]
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Option(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;

use crate::Field;
use crate::ops::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// List

/// Object-safe access to a sequence field.
///
/// Element types must implement [`Default`] so adapters can grow a list
/// before populating the new element.
///
/// To replace the content only once every element converted, populate a
/// [`staging`](List::staging) list and hand it back through
/// [`commit`](List::commit):
///
/// ```
/// use sr_reflect::{Field, FieldMut};
///
/// let mut ids = [1_u8, 2, 3];
/// let FieldMut::List(list) = ids.as_field_mut() else { unreachable!() };
///
/// let mut staged = list.staging();
/// if let Some(FieldMut::U8(v)) = staged.push_default() {
///     *v = 7;
/// }
/// list.commit(staged);
/// assert_eq!(ids, [7, 2, 3]);
/// ```
pub trait List: Any + Send + Sync {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if there are no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the length cannot change, as for `[T; N]`.
    fn is_fixed_size(&self) -> bool;

    /// Borrow the element at `index`.
    fn get(&self, index: usize) -> Option<FieldRef<'_>>;

    /// Mutably borrow the element at `index`.
    fn get_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Append a default element and borrow it.
    ///
    /// Returns `None` for fixed-size lists.
    fn push_default(&mut self) -> Option<FieldMut<'_>>;

    /// Remove every element, or reset every element to its default
    /// for fixed-size lists.
    fn clear(&mut self);

    /// Returns an empty growable list of the same element type.
    fn staging(&self) -> Box<dyn List>;

    /// Replace the content with a list obtained from [`staging`](List::staging).
    ///
    /// A fixed-size list takes the staged elements from the front and keeps
    /// the slots past them. A list of another element type is ignored.
    fn commit(&mut self, staged: Box<dyn List>);
}

impl dyn List + '_ {
    /// Iterate over the elements.
    pub fn iter(&self) -> impl Iterator<Item = FieldRef<'_>> {
        (0..self.len()).filter_map(move |index| self.get(index))
    }
}

// -----------------------------------------------------------------------------
// Vec

impl<T: Field + Default> List for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        false
    }

    #[inline]
    fn get(&self, index: usize) -> Option<FieldRef<'_>> {
        <[T]>::get(self, index).map(Field::as_field)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        <[T]>::get_mut(self, index).map(Field::as_field_mut)
    }

    fn push_default(&mut self) -> Option<FieldMut<'_>> {
        self.push(T::default());
        self.last_mut().map(Field::as_field_mut)
    }

    #[inline]
    fn clear(&mut self) {
        Vec::clear(self);
    }

    #[inline]
    fn staging(&self) -> Box<dyn List> {
        Box::new(Vec::<T>::new())
    }

    fn commit(&mut self, staged: Box<dyn List>) {
        let staged: Box<dyn Any> = staged;
        if let Ok(staged) = staged.downcast::<Vec<T>>() {
            *self = *staged;
        }
    }
}

impl<T: Field + Default> Field for Vec<T> {
    #[inline]
    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::List(self)
    }

    #[inline]
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::List(self)
    }
}

// -----------------------------------------------------------------------------
// Array

impl<T: Field + Default, const N: usize> List for [T; N] {
    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn is_fixed_size(&self) -> bool {
        true
    }

    #[inline]
    fn get(&self, index: usize) -> Option<FieldRef<'_>> {
        self.as_slice().get(index).map(Field::as_field)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        self.as_mut_slice().get_mut(index).map(Field::as_field_mut)
    }

    #[inline]
    fn push_default(&mut self) -> Option<FieldMut<'_>> {
        None
    }

    fn clear(&mut self) {
        self.iter_mut().for_each(|item| *item = T::default());
    }

    #[inline]
    fn staging(&self) -> Box<dyn List> {
        Box::new(Vec::<T>::with_capacity(N))
    }

    fn commit(&mut self, staged: Box<dyn List>) {
        let staged: Box<dyn Any> = staged;
        if let Ok(staged) = staged.downcast::<Vec<T>>() {
            for (slot, item) in self.iter_mut().zip(*staged) {
                *slot = item;
            }
        }
    }
}

impl<T: Field + Default, const N: usize> Field for [T; N] {
    #[inline]
    fn as_field(&self) -> FieldRef<'_> {
        FieldRef::List(self)
    }

    #[inline]
    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::List(self)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::Field;
    use crate::ops::{FieldMut, FieldRef};

    #[test]
    fn vec_grows() {
        let mut ids: Vec<i32> = vec![1];
        let FieldMut::List(list) = ids.as_field_mut() else {
            panic!("expected a list");
        };
        assert!(!list.is_fixed_size());
        if let Some(FieldMut::I32(v)) = list.push_default() {
            *v = 9;
        }
        assert_eq!(list.len(), 2);
        assert_eq!(ids, [1, 9]);
    }

    #[test]
    fn array_is_fixed() {
        let mut ids = [1_u32, 2, 3];
        let FieldMut::List(list) = ids.as_field_mut() else {
            panic!("expected a list");
        };
        assert!(list.is_fixed_size());
        assert!(list.push_default().is_none());
        list.clear();
        assert_eq!(ids, [0, 0, 0]);
    }

    #[test]
    fn staged_commit() {
        let mut ids: Vec<i32> = vec![1, 2];
        let FieldMut::List(list) = ids.as_field_mut() else {
            panic!("expected a list");
        };
        let mut staged = list.staging();
        assert!(staged.is_empty());
        if let Some(FieldMut::I32(v)) = staged.push_default() {
            *v = 5;
        }
        assert_eq!(list.len(), 2);
        list.commit(staged);
        assert_eq!(ids, [5]);

        let mut counts: Vec<i32> = vec![3];
        let FieldMut::List(list) = counts.as_field_mut() else {
            panic!("expected a list");
        };
        list.commit(Box::new(vec![1_u8]));
        assert_eq!(counts, [3]);
    }

    #[test]
    fn iterate() {
        let ids = [4_u8, 5];
        let FieldRef::List(list) = ids.as_field() else {
            panic!("expected a list");
        };
        let collected: Vec<u8> = list
            .iter()
            .filter_map(|item| item.downcast_ref::<u8>().copied())
            .collect();
        assert_eq!(collected, [4, 5]);
    }
}

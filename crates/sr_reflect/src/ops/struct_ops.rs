use alloc::boxed::Box;
use core::any::Any;

use crate::info::FieldInfo;
use crate::ops::{FieldMut, FieldRef};
use crate::visit::{FieldVisitor, FieldVisitorMut, traverse};
use crate::{Fingerprint, Reflect};

// -----------------------------------------------------------------------------
// Struct

/// Object-safe access to a reflected struct.
///
/// Every [`Reflect`] type implements this trait, so a nested struct field can
/// be handed out as `&dyn Struct` without knowing its concrete type. The
/// traversal methods have the same semantics as the generic functions in
/// [`visit`](crate::visit).
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldRef, Struct, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Range { min: i32, max: i32 }
///
/// let range = Range { min: 1, max: 9 };
/// let dynamic: &dyn Struct = &range;
///
/// assert_eq!(dynamic.type_name(), "Range");
/// assert_eq!(dynamic.field_len(), 2);
/// assert!(matches!(dynamic.field("max"), Some(FieldRef::I32(9))));
/// assert!(dynamic.field("avg").is_none());
/// ```
///
/// The registry checks of the generic functions also hold here. A type
/// without fields cannot be traversed as `dyn Struct` either:
///
/// ```compile_fail
/// use sr_reflect::{Struct, derive::Reflect, info::FieldInfo, FieldRef};
///
/// #[derive(Reflect)]
/// struct Empty {}
///
/// let dynamic: &dyn Struct = &Empty {};
/// dynamic.visit_fields(&mut |_: &FieldInfo, _: FieldRef<'_>| true);
/// ```
pub trait Struct: Any + Send + Sync {
    /// Returns the registered type name.
    fn type_name(&self) -> &'static str;

    /// Returns the fingerprint of the registered type name.
    fn type_fingerprint(&self) -> Fingerprint;

    /// Returns the number of reflected fields.
    fn field_len(&self) -> usize;

    /// Returns the field information at `index`.
    fn field_info_at(&self, index: usize) -> Option<&'static FieldInfo>;

    /// Returns the index of the first field with this fingerprint.
    fn index_of(&self, fingerprint: Fingerprint) -> Option<usize>;

    /// Borrow the field at `index`.
    fn field_at(&self, index: usize) -> Option<FieldRef<'_>>;

    /// Mutably borrow the field at `index`.
    fn field_at_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;

    /// Visit every field in declaration order.
    fn visit_fields(&self, visitor: &mut dyn FieldVisitor);

    /// Visit every field mutably in declaration order.
    fn visit_fields_mut(&mut self, visitor: &mut dyn FieldVisitorMut);

    /// Offer each field with this fingerprint to `visitor` until one is handled.
    fn find_field(&self, fingerprint: Fingerprint, visitor: &mut dyn FieldVisitor) -> bool;

    /// Mutable form of [`find_field`](Struct::find_field).
    fn find_field_mut(
        &mut self,
        fingerprint: Fingerprint,
        visitor: &mut dyn FieldVisitorMut,
    ) -> bool;
}

impl<T: Reflect> Struct for T {
    #[inline]
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    #[inline]
    fn type_fingerprint(&self) -> Fingerprint {
        T::REGISTRY.fingerprint()
    }

    #[inline]
    fn field_len(&self) -> usize {
        T::FIELDS.len()
    }

    #[inline]
    fn field_info_at(&self, index: usize) -> Option<&'static FieldInfo> {
        T::REGISTRY.field_at(index)
    }

    #[inline]
    fn index_of(&self, fingerprint: Fingerprint) -> Option<usize> {
        T::REGISTRY.index_of(fingerprint)
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<FieldRef<'_>> {
        T::FIELDS.get(index).map(|desc| desc.get(self))
    }

    #[inline]
    fn field_at_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        T::FIELDS.get(index).map(|desc| desc.get_mut(self))
    }

    fn visit_fields(&self, visitor: &mut dyn FieldVisitor) {
        const { traverse::check::<T>() }
        traverse::walk_fields(self, visitor);
    }

    fn visit_fields_mut(&mut self, visitor: &mut dyn FieldVisitorMut) {
        const { traverse::check::<T>() }
        traverse::walk_fields_mut(self, visitor);
    }

    fn find_field(&self, fingerprint: Fingerprint, visitor: &mut dyn FieldVisitor) -> bool {
        const { traverse::check::<T>() }
        traverse::find(self, fingerprint, visitor)
    }

    fn find_field_mut(
        &mut self,
        fingerprint: Fingerprint,
        visitor: &mut dyn FieldVisitorMut,
    ) -> bool {
        const { traverse::check::<T>() }
        traverse::find_mut(self, fingerprint, visitor)
    }
}

impl dyn Struct {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline]
    pub fn is<T: Struct>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Downcast to the concrete type.
    #[inline]
    pub fn downcast_ref<T: Struct>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Mutably downcast to the concrete type.
    #[inline]
    pub fn downcast_mut<T: Struct>(&mut self) -> Option<&mut T> {
        let any: &mut dyn Any = self;
        any.downcast_mut::<T>()
    }

    /// Downcast a boxed value, returning the box unchanged as `dyn Any` on failure.
    #[inline]
    pub fn downcast<T: Struct>(self: Box<Self>) -> Result<Box<T>, Box<dyn Any>> {
        let any: Box<dyn Any> = self;
        any.downcast::<T>()
    }

    /// Borrow the first field named `name`.
    pub fn field(&self, name: &str) -> Option<FieldRef<'_>> {
        let index = self.index_of(Fingerprint::of(name))?;
        self.field_at(index)
    }

    /// Mutably borrow the first field named `name`.
    pub fn field_mut(&mut self, name: &str) -> Option<FieldMut<'_>> {
        let index = self.index_of(Fingerprint::of(name))?;
        self.field_at_mut(index)
    }
}

// -----------------------------------------------------------------------------
// Tests

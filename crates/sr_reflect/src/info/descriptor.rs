use core::any::Any;
use core::fmt;

use crate::Fingerprint;
use crate::info::FieldInfo;
use crate::ops::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// FieldDescriptor

/// A [`FieldInfo`] bound to a host type `T`.
///
/// The accessors take a borrowed instance and return a borrowed view of the
/// field. Nothing is copied and the descriptor never owns an instance.
///
/// Usually generated by `#[derive(Reflect)]`; see [`impl_reflect!`] for the
/// hand-written form.
///
/// [`impl_reflect!`]: crate::impl_reflect
pub struct FieldDescriptor<T> {
    info: FieldInfo,
    get: fn(&T) -> FieldRef<'_>,
    get_mut: fn(&mut T) -> FieldMut<'_>,
}

impl<T> FieldDescriptor<T> {
    /// Creates a descriptor from field information and an accessor pair.
    #[inline]
    pub const fn new(
        info: FieldInfo,
        get: fn(&T) -> FieldRef<'_>,
        get_mut: fn(&mut T) -> FieldMut<'_>,
    ) -> Self {
        Self { info, get, get_mut }
    }

    /// Returns the type-independent part.
    #[inline]
    pub const fn info(&self) -> &FieldInfo {
        &self.info
    }

    /// Borrow the field of `instance`.
    #[inline]
    pub fn get<'a>(&self, instance: &'a T) -> FieldRef<'a> {
        (self.get)(instance)
    }

    /// Mutably borrow the field of `instance`.
    #[inline]
    pub fn get_mut<'a>(&self, instance: &'a mut T) -> FieldMut<'a> {
        (self.get_mut)(instance)
    }
}

impl<T> Clone for FieldDescriptor<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for FieldDescriptor<T> {}

impl<T> fmt::Debug for FieldDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("info", &self.info)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// MethodDescriptor

/// A named function pointer registered on a type.
///
/// The pointer is stored type-erased and recovered with
/// [`MethodDescriptor::get`], which checks the exact function pointer type.
///
/// # Examples
///
/// ```
/// use sr_reflect::info::MethodDescriptor;
///
/// struct Rect { w: f32, h: f32 }
///
/// impl Rect {
///     fn area(&self) -> f32 { self.w * self.h }
/// }
///
/// const AREA: MethodDescriptor = MethodDescriptor::new("area", &(Rect::area as fn(&Rect) -> f32));
///
/// let area = AREA.get::<fn(&Rect) -> f32>().unwrap();
/// assert_eq!(area(&Rect { w: 2.0, h: 3.0 }), 6.0);
/// assert!(AREA.get::<fn(&Rect) -> f64>().is_none());
/// ```
#[derive(Clone, Copy)]
pub struct MethodDescriptor {
    name: &'static str,
    fingerprint: Fingerprint,
    func: &'static (dyn Any + Send + Sync),
}

impl MethodDescriptor {
    /// Creates a method descriptor. `func` should be a function pointer.
    #[inline]
    pub const fn new(name: &'static str, func: &'static (dyn Any + Send + Sync)) -> Self {
        Self {
            name,
            fingerprint: Fingerprint::of(name),
            func,
        }
    }

    /// Returns the method name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the fingerprint of the method name.
    #[inline]
    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Returns the function pointer if it has type `F`.
    #[inline]
    pub fn get<F: Copy + 'static>(&self) -> Option<F> {
        self.func.downcast_ref::<F>().copied()
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("name", &self.name)
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}

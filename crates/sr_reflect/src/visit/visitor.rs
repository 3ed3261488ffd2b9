use crate::info::{FieldInfo, Tag, Transform};
use crate::ops::{FieldMut, FieldRef};

// -----------------------------------------------------------------------------
// FieldVisitor

/// Receives shared views of fields during traversal.
///
/// The traversal engine calls exactly one method per offered field, chosen
/// by the field's [`Annotation`](crate::info::Annotation):
///
/// | annotation   | method              |
/// |--------------|---------------------|
/// | none         | [`visit`]           |
/// | tag          | [`visit_tagged`]    |
/// | transform    | [`visit_transformed`] |
///
/// The returned `bool` means "handled". It stops a find-style traversal and
/// is ignored by a for-each traversal.
///
/// Closures taking `(&FieldInfo, FieldRef<'_>)` and returning `bool`
/// implement this trait and see every field through [`visit`].
///
/// [`visit`]: FieldVisitor::visit
/// [`visit_tagged`]: FieldVisitor::visit_tagged
/// [`visit_transformed`]: FieldVisitor::visit_transformed
pub trait FieldVisitor {
    /// Visit a field without annotation.
    fn visit(&mut self, info: &'static FieldInfo, value: FieldRef<'_>) -> bool;

    /// Visit a tagged field. Defaults to [`visit`](FieldVisitor::visit).
    #[inline]
    fn visit_tagged(
        &mut self,
        info: &'static FieldInfo,
        value: FieldRef<'_>,
        tag: &'static Tag,
    ) -> bool {
        let _ = tag;
        self.visit(info, value)
    }

    /// Visit a field with a transform. Defaults to [`visit`](FieldVisitor::visit).
    ///
    /// Transforms only run on mutable traversal, so the default ignores it.
    #[inline]
    fn visit_transformed(
        &mut self,
        info: &'static FieldInfo,
        value: FieldRef<'_>,
        transform: &'static Transform,
    ) -> bool {
        let _ = transform;
        self.visit(info, value)
    }
}

impl<F> FieldVisitor for F
where
    F: FnMut(&'static FieldInfo, FieldRef<'_>) -> bool,
{
    #[inline]
    fn visit(&mut self, info: &'static FieldInfo, value: FieldRef<'_>) -> bool {
        self(info, value)
    }
}

// -----------------------------------------------------------------------------
// FieldVisitorMut

/// Receives exclusive views of fields during traversal.
///
/// Dispatch works as for [`FieldVisitor`]. The default
/// [`visit_transformed`](FieldVisitorMut::visit_transformed) populates the field
/// through [`visit`](FieldVisitorMut::visit) and, if that reports handled, runs
/// the transform on the new value.
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldMut, derive::Reflect, info::{FieldInfo, Tag}};
/// use sr_reflect::visit::{FieldVisitorMut, find_by_name_mut};
///
/// struct Seconds;
///
/// #[derive(Reflect, Default)]
/// struct Timer {
///     #[reflect(tag = Seconds)]
///     delay: u32,
///     repeat: u32,
/// }
///
/// // Writes `input`, scaling tagged fields from seconds to milliseconds.
/// struct Assign(u32);
///
/// impl FieldVisitorMut for Assign {
///     fn visit(&mut self, _: &'static FieldInfo, value: FieldMut<'_>) -> bool {
///         match value {
///             FieldMut::U32(v) => { *v = self.0; true }
///             _ => false,
///         }
///     }
///
///     fn visit_tagged(
///         &mut self,
///         info: &'static FieldInfo,
///         value: FieldMut<'_>,
///         tag: &'static Tag,
///     ) -> bool {
///         if tag.is::<Seconds>() {
///             self.0 *= 1000;
///         }
///         self.visit(info, value)
///     }
/// }
///
/// let mut timer = Timer::default();
/// assert!(find_by_name_mut(&mut timer, "delay", &mut Assign(2)));
/// assert!(find_by_name_mut(&mut timer, "repeat", &mut Assign(3)));
/// assert_eq!((timer.delay, timer.repeat), (2000, 3));
/// ```
pub trait FieldVisitorMut {
    /// Visit a field without annotation.
    fn visit(&mut self, info: &'static FieldInfo, value: FieldMut<'_>) -> bool;

    /// Visit a tagged field. Defaults to [`visit`](FieldVisitorMut::visit).
    #[inline]
    fn visit_tagged(
        &mut self,
        info: &'static FieldInfo,
        value: FieldMut<'_>,
        tag: &'static Tag,
    ) -> bool {
        let _ = tag;
        self.visit(info, value)
    }

    /// Visit a field with a transform.
    fn visit_transformed(
        &mut self,
        info: &'static FieldInfo,
        mut value: FieldMut<'_>,
        transform: &'static Transform,
    ) -> bool {
        let handled = self.visit(info, value.reborrow());
        if handled {
            transform.apply(info, value);
        }
        handled
    }
}

impl<F> FieldVisitorMut for F
where
    F: FnMut(&'static FieldInfo, FieldMut<'_>) -> bool,
{
    #[inline]
    fn visit(&mut self, info: &'static FieldInfo, value: FieldMut<'_>) -> bool {
        self(info, value)
    }
}

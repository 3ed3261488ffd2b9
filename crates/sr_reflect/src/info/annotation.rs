use core::any::TypeId;
use core::fmt;

use crate::info::FieldInfo;
use crate::ops::FieldMut;

// -----------------------------------------------------------------------------
// Tag

/// A marker type attached to a field, recorded by identity.
///
/// Tags carry no data. Visitors compare them with [`Tag::is`] to pick a
/// different conversion for the tagged field.
///
/// # Examples
///
/// ```
/// use sr_reflect::info::Tag;
///
/// struct ElfHash;
/// struct NameHash;
///
/// const TAG: Tag = Tag::of::<ElfHash>();
///
/// assert!(TAG.is::<ElfHash>());
/// assert!(!TAG.is::<NameHash>());
/// ```
#[derive(Clone, Copy)]
pub struct Tag {
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl Tag {
    /// Creates the tag for marker type `T`.
    #[inline]
    pub const fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>,
            type_name: core::any::type_name::<T>,
        }
    }

    /// Returns the `TypeId` of the marker type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Returns the full type name of the marker type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Check if the marker type is `T`.
    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }
}

impl PartialEq for Tag {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.type_id() == other.type_id()
    }
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tag").field(&self.type_name()).finish()
    }
}

// -----------------------------------------------------------------------------
// Transform

/// A function run on a field after a visitor has populated it.
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldMut, info::{FieldInfo, Transform}};
///
/// fn clamp_to_one(_: &FieldInfo, field: FieldMut<'_>) {
///     if let FieldMut::I32(v) = field {
///         *v = (*v).min(1);
///     }
/// }
///
/// const CLAMP: Transform = Transform::new("clamp_to_one", clamp_to_one);
///
/// let info = FieldInfo::new("endTime", "end_time");
/// let mut value = 30_i32;
/// CLAMP.apply(&info, FieldMut::I32(&mut value));
/// assert_eq!(value, 1);
/// ```
#[derive(Clone, Copy)]
pub struct Transform {
    name: &'static str,
    func: fn(&FieldInfo, FieldMut<'_>),
}

impl Transform {
    /// Creates a transform. `name` is used for diagnostics only.
    #[inline]
    pub const fn new(name: &'static str, func: fn(&FieldInfo, FieldMut<'_>)) -> Self {
        Self { name, func }
    }

    /// Returns the name given at declaration.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Run the transform on `field`.
    #[inline]
    pub fn apply(&self, info: &FieldInfo, field: FieldMut<'_>) {
        (self.func)(info, field);
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Transform").field(&self.name).finish()
    }
}

// -----------------------------------------------------------------------------
// Annotation

/// Optional metadata attached to a field at declaration.
///
/// The traversal engine matches on this to choose which visitor entry point
/// to call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Annotation {
    /// Plain field, visited with [`FieldVisitor::visit`](crate::visit::FieldVisitor::visit).
    #[default]
    None,
    /// Tagged field, visited with `visit_tagged`.
    Tag(Tag),
    /// Field with a post-population function, visited with `visit_transformed`.
    Transform(Transform),
}

impl PartialEq for Transform {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::fn_addr_eq(self.func, other.func)
    }
}

/// Discriminant of [`Annotation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnnotationKind {
    None,
    Tag,
    Transform,
}

impl Annotation {
    /// Returns the discriminant.
    #[inline]
    pub const fn kind(&self) -> AnnotationKind {
        match self {
            Annotation::None => AnnotationKind::None,
            Annotation::Tag(_) => AnnotationKind::Tag,
            Annotation::Transform(_) => AnnotationKind::Transform,
        }
    }

    /// Returns the tag, if any.
    #[inline]
    pub const fn as_tag(&self) -> Option<&Tag> {
        match self {
            Annotation::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the transform, if any.
    #[inline]
    pub const fn as_transform(&self) -> Option<&Transform> {
        match self {
            Annotation::Transform(transform) => Some(transform),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Annotation, AnnotationKind, Tag, Transform};
    use crate::info::FieldInfo;
    use crate::ops::FieldMut;

    struct Marker;

    fn noop(_: &FieldInfo, _: FieldMut<'_>) {}

    #[test]
    fn kinds() {
        assert_eq!(Annotation::None.kind(), AnnotationKind::None);
        assert_eq!(Annotation::Tag(Tag::of::<Marker>()).kind(), AnnotationKind::Tag);
        let transform = Annotation::Transform(Transform::new("noop", noop));
        assert_eq!(transform.kind(), AnnotationKind::Transform);
        assert_eq!(transform.as_transform().map(Transform::name), Some("noop"));
        assert!(transform.as_tag().is_none());
    }

    #[test]
    fn tag_identity() {
        assert_eq!(Tag::of::<Marker>(), Tag::of::<Marker>());
        assert_ne!(Tag::of::<Marker>(), Tag::of::<u8>());
        assert!(Tag::of::<Marker>().type_name().ends_with("Marker"));
    }
}

use crate::Fingerprint;
use crate::info::{Annotation, AnnotationKind, Tag, Transform};

// -----------------------------------------------------------------------------
// FieldInfo

/// Type-independent description of one reflected field.
///
/// `name` is the external name used for lookup. `ident` is the identifier in
/// the struct declaration. They differ when the field is declared with
/// `#[reflect(name = "...")]`.
///
/// The fingerprint is computed once by [`FieldInfo::new`], normally during
/// constant evaluation.
///
/// A [bound](FieldInfo::bound) field belongs to a bind group: every bound
/// field sharing its name receives the same document value, and a lookup
/// offers them together.
///
/// # Examples
///
/// ```
/// use sr_reflect::{Fingerprint, info::{AnnotationKind, FieldInfo, Tag}};
///
/// struct ElfHash;
///
/// const INFO: FieldInfo = FieldInfo::new("castTime", "wait_time_cast")
///     .with_tag(Tag::of::<ElfHash>());
///
/// assert_eq!(INFO.name(), "castTime");
/// assert_eq!(INFO.ident(), "wait_time_cast");
/// assert_eq!(INFO.fingerprint(), Fingerprint::of("castTime"));
/// assert_eq!(INFO.annotation_kind(), AnnotationKind::Tag);
/// assert!(!INFO.is_bound());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FieldInfo {
    name: &'static str,
    ident: &'static str,
    fingerprint: Fingerprint,
    annotation: Annotation,
    bound: bool,
}

impl FieldInfo {
    /// Creates a field without annotation.
    #[inline]
    pub const fn new(name: &'static str, ident: &'static str) -> Self {
        Self {
            name,
            ident,
            fingerprint: Fingerprint::of(name),
            annotation: Annotation::None,
            bound: false,
        }
    }

    /// Add the field to the bind group of its name.
    #[inline]
    pub const fn bound(mut self) -> Self {
        self.bound = true;
        self
    }

    /// Attach a tag, replacing any previous annotation.
    #[inline]
    pub const fn with_tag(mut self, tag: Tag) -> Self {
        self.annotation = Annotation::Tag(tag);
        self
    }

    /// Attach a transform, replacing any previous annotation.
    #[inline]
    pub const fn with_transform(mut self, transform: Transform) -> Self {
        self.annotation = Annotation::Transform(transform);
        self
    }

    /// Returns the external name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the identifier in the struct declaration.
    #[inline]
    pub const fn ident(&self) -> &'static str {
        self.ident
    }

    /// Returns the fingerprint of [`name`](Self::name).
    #[inline]
    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Returns `true` if the field belongs to a bind group.
    #[inline]
    pub const fn is_bound(&self) -> bool {
        self.bound
    }

    /// Returns the annotation.
    #[inline]
    pub const fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    /// Returns the annotation discriminant.
    #[inline]
    pub const fn annotation_kind(&self) -> AnnotationKind {
        self.annotation.kind()
    }

    /// Returns the tag, if the field is tagged.
    #[inline]
    pub const fn tag(&self) -> Option<&Tag> {
        self.annotation.as_tag()
    }

    /// Returns the transform, if the field has one.
    #[inline]
    pub const fn transform(&self) -> Option<&Transform> {
        self.annotation.as_transform()
    }
}

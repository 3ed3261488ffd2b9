use core::fmt;

use crate::Fingerprint;
use crate::info::{FieldDescriptor, FieldInfo, MethodDescriptor};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The ordered field and method tables of one reflected type.
///
/// Built in constant evaluation and reached through
/// [`Reflect::REGISTRY`](crate::Reflect::REGISTRY). Lookups are linear scans
/// in declaration order.
///
/// # Examples
///
/// ```
/// use sr_reflect::{Fingerprint, Reflect, derive::Reflect};
///
/// #[derive(Reflect)]
/// struct Foo {
///     a: i32,
///     #[reflect(name = "bee")]
///     b: String,
/// }
///
/// let registry = Foo::REGISTRY;
/// assert_eq!(registry.type_name(), "Foo");
/// assert_eq!(registry.field_len(), 2);
/// assert_eq!(registry.field("bee").unwrap().ident(), "b");
/// assert_eq!(registry.index_of(Fingerprint::of("a")), Some(0));
/// assert!(registry.field("b").is_none());
/// ```
pub struct TypeRegistry<T: 'static> {
    type_name: &'static str,
    fingerprint: Fingerprint,
    fields: &'static [FieldDescriptor<T>],
    methods: &'static [MethodDescriptor],
}

impl<T: 'static> TypeRegistry<T> {
    /// Creates a registry.
    #[inline]
    pub const fn new(
        type_name: &'static str,
        fields: &'static [FieldDescriptor<T>],
        methods: &'static [MethodDescriptor],
    ) -> Self {
        Self {
            type_name,
            fingerprint: Fingerprint::of(type_name),
            fields,
            methods,
        }
    }

    /// Returns the registered type name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the fingerprint of the type name.
    #[inline]
    pub const fn fingerprint(&self) -> Fingerprint {
        self.fingerprint
    }

    /// Returns the field descriptors in declaration order.
    #[inline]
    pub const fn fields(&self) -> &'static [FieldDescriptor<T>] {
        self.fields
    }

    /// Returns the number of reflected fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns the field at `index`.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&'static FieldInfo> {
        self.fields.get(index).map(FieldDescriptor::info)
    }

    /// Returns the first field named `name`.
    pub fn field(&self, name: &str) -> Option<&'static FieldInfo> {
        let fingerprint = Fingerprint::of(name);
        self.fields
            .iter()
            .map(FieldDescriptor::info)
            .find(|info| info.fingerprint() == fingerprint && info.name() == name)
    }

    /// Returns the index of the first field with this fingerprint.
    pub fn index_of(&self, fingerprint: Fingerprint) -> Option<usize> {
        self.fields
            .iter()
            .position(|desc| desc.info().fingerprint() == fingerprint)
    }

    /// Returns the method descriptors in declaration order.
    #[inline]
    pub const fn methods(&self) -> &'static [MethodDescriptor] {
        self.methods
    }

    /// Returns the first method named `name`.
    pub fn method(&self, name: &str) -> Option<&'static MethodDescriptor> {
        let fingerprint = Fingerprint::of(name);
        self.methods
            .iter()
            .find(|method| method.fingerprint() == fingerprint && method.name() == name)
    }

    /// Returns the function pointer of method `name` if it has type `F`.
    ///
    /// ```
    /// use sr_reflect::{Reflect, derive::Reflect};
    ///
    /// #[derive(Reflect)]
    /// #[reflect(method(area: fn(&Self) -> f32))]
    /// struct Rect { w: f32, h: f32 }
    ///
    /// impl Rect {
    ///     fn area(&self) -> f32 { self.w * self.h }
    /// }
    ///
    /// let area = Rect::REGISTRY.method_fn::<fn(&Rect) -> f32>("area").unwrap();
    /// assert_eq!(area(&Rect { w: 2.0, h: 4.0 }), 8.0);
    /// ```
    #[inline]
    pub fn method_fn<F: Copy + 'static>(&self, name: &str) -> Option<F> {
        self.method(name)?.get::<F>()
    }

    /// Check if two fields with different names share a fingerprint.
    ///
    /// Fields declared under the same external name are not a collision.
    pub const fn has_fingerprint_collision(&self) -> bool {
        let fields = self.fields;
        let mut i = 0;
        while i < fields.len() {
            let a = fields[i].info();
            let mut j = i + 1;
            while j < fields.len() {
                let b = fields[j].info();
                if a.fingerprint().const_eq(b.fingerprint()) && !str_eq(a.name(), b.name()) {
                    return true;
                }
                j += 1;
            }
            i += 1;
        }
        false
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

impl<T: 'static> Clone for TypeRegistry<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for TypeRegistry<T> {}

impl<T: 'static> fmt::Debug for TypeRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("type_name", &self.type_name)
            .field("fields", &self.fields)
            .field("methods", &self.methods)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{TypeRegistry, str_eq};
    use crate::Field;
    use crate::info::{FieldDescriptor, FieldInfo};

    struct Pair {
        a: i32,
        b: i32,
    }

    const DISTINCT: &[FieldDescriptor<Pair>] = &[
        FieldDescriptor::new(FieldInfo::new("a", "a"), |p| p.a.as_field(), |p| p.a.as_field_mut()),
        FieldDescriptor::new(FieldInfo::new("b", "b"), |p| p.b.as_field(), |p| p.b.as_field_mut()),
    ];

    const SAME_NAME: &[FieldDescriptor<Pair>] = &[
        FieldDescriptor::new(FieldInfo::new("x", "a"), |p| p.a.as_field(), |p| p.a.as_field_mut()),
        FieldDescriptor::new(FieldInfo::new("x", "b"), |p| p.b.as_field(), |p| p.b.as_field_mut()),
    ];

    // "f40167" and "f41037" share the MurmurHash3 value 0x7808122d.
    const COLLIDING: &[FieldDescriptor<Pair>] = &[
        FieldDescriptor::new(
            FieldInfo::new("f40167", "a"),
            |p| p.a.as_field(),
            |p| p.a.as_field_mut(),
        ),
        FieldDescriptor::new(
            FieldInfo::new("f41037", "b"),
            |p| p.b.as_field(),
            |p| p.b.as_field_mut(),
        ),
    ];

    #[test]
    fn collision_check() {
        assert_eq!(crate::Fingerprint::of("f40167").value(), 0x7808_122d);
        assert!(TypeRegistry::new("Pair", COLLIDING, &[]).has_fingerprint_collision());
        assert!(!TypeRegistry::new("Pair", DISTINCT, &[]).has_fingerprint_collision());
        assert!(!TypeRegistry::new("Pair", SAME_NAME, &[]).has_fingerprint_collision());
    }

    #[test]
    fn lookup_first_match() {
        let registry = TypeRegistry::new("Pair", SAME_NAME, &[]);
        assert_eq!(registry.field("x").map(FieldInfo::ident), Some("a"));
        assert_eq!(registry.index_of(crate::Fingerprint::of("x")), Some(0));
        assert_eq!(registry.field_at(1).map(FieldInfo::ident), Some("b"));
        assert!(registry.field_at(2).is_none());
    }

    #[test]
    fn const_str_eq() {
        assert!(str_eq("castTime", "castTime"));
        assert!(!str_eq("castTime", "castTim"));
        assert!(!str_eq("abc", "abd"));
    }
}

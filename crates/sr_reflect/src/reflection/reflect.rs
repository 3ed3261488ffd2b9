use crate::Field;
use crate::info::{FieldDescriptor, MethodDescriptor, TypeRegistry};

// -----------------------------------------------------------------------------
// Reflect

/// A struct with a compile-time field registry.
///
/// The registry is a set of associated constants, so it exists before any
/// instance of the type is created and costs nothing per instance.
///
/// Implement this with `#[derive(Reflect)]` or [`impl_reflect!`]. A manual
/// implementation must keep [`FIELDS`](Self::FIELDS) in the order the fields
/// are declared.
///
/// # Examples
///
/// ```
/// use sr_reflect::{Reflect, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Skill {
///     #[reflect(name = "castTime")]
///     cast_time: u32,
///     range: f32,
/// }
///
/// assert_eq!(Skill::TYPE_NAME, "Skill");
/// let names: Vec<_> = Skill::FIELDS.iter().map(|d| d.info().name()).collect();
/// assert_eq!(names, ["castTime", "range"]);
/// ```
///
/// [`impl_reflect!`]: crate::impl_reflect
pub trait Reflect: Field + Sized {
    /// The registered type name.
    const TYPE_NAME: &'static str;

    /// Field descriptors in declaration order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    /// Registered methods.
    const METHODS: &'static [MethodDescriptor] = &[];

    /// The full registry, assembled from the other constants.
    const REGISTRY: TypeRegistry<Self> =
        TypeRegistry::new(Self::TYPE_NAME, Self::FIELDS, Self::METHODS);
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::Reflect;
    use crate::info::{AnnotationKind, FieldInfo};
    use crate::visit::for_each_field;
    use crate::{FieldRef, Reflect};

    struct Marker;

    fn noop(_: &FieldInfo, _: crate::FieldMut<'_>) {}

    #[derive(Reflect, Default)]
    #[reflect(name = "Hero", method(level: fn(&Self) -> u32))]
    struct Player {
        #[reflect(name = "displayName")]
        name: String,
        #[reflect(tag = Marker)]
        exp: u32,
        #[reflect(ignore)]
        _cache: Vec<u8>,
        #[reflect(transform = noop)]
        gold: u64,
    }

    impl Player {
        fn level(&self) -> u32 {
            self.exp / 100
        }
    }

    #[derive(Reflect, Default)]
    struct Slot<T> {
        item: T,
        count: u8,
    }

    #[test]
    fn derived_registry() {
        let registry = Player::REGISTRY;
        assert_eq!(registry.type_name(), "Hero");
        assert_eq!(registry.field_len(), 3);
        assert_eq!(registry.field("displayName").map(FieldInfo::ident), Some("name"));
        let exp = registry.field("exp").map(FieldInfo::annotation_kind);
        assert_eq!(exp, Some(AnnotationKind::Tag));
        let gold = registry.field("gold").unwrap();
        assert_eq!(gold.transform().map(|t| t.name()), Some("noop"));
        assert!(registry.field("_cache").is_none());
    }

    #[test]
    fn derived_method() {
        let level = Player::REGISTRY.method_fn::<fn(&Player) -> u32>("level").unwrap();
        let player = Player {
            exp: 250,
            ..Player::default()
        };
        assert_eq!(level(&player), 2);
    }

    #[test]
    fn generic_struct() {
        assert_eq!(Slot::<String>::TYPE_NAME, "Slot");
        let slot = Slot {
            item: String::from("potion"),
            count: 3,
        };
        let mut seen = Vec::new();
        for_each_field(&slot, &mut |info: &FieldInfo, value: FieldRef<'_>| {
            match value {
                FieldRef::String(s) => seen.push((info.name(), s.clone())),
                FieldRef::U8(n) => seen.push((info.name(), alloc::format!("{n}"))),
                _ => return false,
            }
            true
        });
        assert_eq!(seen, [("item", String::from("potion")), ("count", String::from("3"))]);
    }
}

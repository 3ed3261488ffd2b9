use crate::info::{Annotation, FieldDescriptor, FieldInfo};
use crate::ops::{FieldMut, FieldRef};
use crate::visit::{FieldVisitor, FieldVisitorMut};
use crate::{Fingerprint, Reflect};

// -----------------------------------------------------------------------------
// Checks

/// Registry requirements of the public traversal functions, evaluated once
/// per traversed type during compilation.
pub(crate) const fn check<T: Reflect>() {
    assert!(
        !T::FIELDS.is_empty(),
        "traversed type has no reflected fields",
    );
    assert!(
        !T::REGISTRY.has_fingerprint_collision(),
        "two fields with different names share a fingerprint",
    );
}

// -----------------------------------------------------------------------------
// Dispatch

#[inline]
fn dispatch<V: FieldVisitor + ?Sized>(
    visitor: &mut V,
    info: &'static FieldInfo,
    value: FieldRef<'_>,
) -> bool {
    match info.annotation() {
        Annotation::None => visitor.visit(info, value),
        Annotation::Tag(tag) => visitor.visit_tagged(info, value, tag),
        Annotation::Transform(transform) => visitor.visit_transformed(info, value, transform),
    }
}

#[inline]
fn dispatch_mut<V: FieldVisitorMut + ?Sized>(
    visitor: &mut V,
    info: &'static FieldInfo,
    value: FieldMut<'_>,
) -> bool {
    match info.annotation() {
        Annotation::None => visitor.visit(info, value),
        Annotation::Tag(tag) => visitor.visit_tagged(info, value, tag),
        Annotation::Transform(transform) => visitor.visit_transformed(info, value, transform),
    }
}

// -----------------------------------------------------------------------------
// Unchecked walkers

pub(crate) fn walk_fields<T, V>(instance: &T, visitor: &mut V)
where
    T: Reflect,
    V: FieldVisitor + ?Sized,
{
    for desc in T::FIELDS {
        dispatch(visitor, desc.info(), desc.get(instance));
    }
}

pub(crate) fn walk_fields_mut<T, V>(instance: &mut T, visitor: &mut V)
where
    T: Reflect,
    V: FieldVisitorMut + ?Sized,
{
    for desc in T::FIELDS {
        dispatch_mut(visitor, desc.info(), desc.get_mut(instance));
    }
}

/// Members of the bind group led by `fields[index]`, or `None` when an
/// earlier field of the group already led it.
fn bind_group<T: Reflect>(
    index: usize,
) -> Option<impl Iterator<Item = &'static FieldDescriptor<T>>> {
    let name = T::FIELDS[index].info().name();
    let member = move |desc: &&'static FieldDescriptor<T>| {
        desc.info().is_bound() && desc.info().name() == name
    };
    if T::FIELDS[..index].iter().any(|desc| member(&desc)) {
        return None;
    }
    Some(T::FIELDS[index..].iter().filter(member))
}

pub(crate) fn find<T, V>(instance: &T, fingerprint: Fingerprint, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitor + ?Sized,
{
    for (index, desc) in T::FIELDS.iter().enumerate() {
        let info = desc.info();
        if info.fingerprint() != fingerprint {
            continue;
        }
        let handled = if info.is_bound() {
            // every member is offered, then the results are combined
            bind_group::<T>(index).is_some_and(|group| {
                group.fold(false, |handled, member| {
                    dispatch(visitor, member.info(), member.get(instance)) | handled
                })
            })
        } else {
            dispatch(visitor, info, desc.get(instance))
        };
        if handled {
            return true;
        }
    }
    false
}

pub(crate) fn find_mut<T, V>(instance: &mut T, fingerprint: Fingerprint, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitorMut + ?Sized,
{
    for (index, desc) in T::FIELDS.iter().enumerate() {
        let info = desc.info();
        if info.fingerprint() != fingerprint {
            continue;
        }
        let handled = if info.is_bound() {
            bind_group::<T>(index).is_some_and(|group| {
                group.fold(false, |handled, member| {
                    dispatch_mut(visitor, member.info(), member.get_mut(instance)) | handled
                })
            })
        } else {
            dispatch_mut(visitor, info, desc.get_mut(instance))
        };
        if handled {
            return true;
        }
    }
    false
}

// -----------------------------------------------------------------------------
// Public API

/// Visit every field of `instance` in declaration order.
///
/// Every field is offered exactly once, whatever the visitor returns.
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldRef, derive::Reflect, info::FieldInfo, visit::for_each_field};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: String }
///
/// let foo = Foo { a: 7, b: "x".into() };
/// let mut names = Vec::new();
/// for_each_field(&foo, &mut |info: &FieldInfo, _: FieldRef<'_>| {
///     names.push(info.name());
///     false
/// });
/// assert_eq!(names, ["a", "b"]);
/// ```
///
/// A type without fields cannot be traversed:
///
/// ```compile_fail
/// use sr_reflect::{FieldRef, derive::Reflect, info::FieldInfo, visit::for_each_field};
///
/// #[derive(Reflect)]
/// struct Empty {}
///
/// for_each_field(&Empty {}, &mut |_: &FieldInfo, _: FieldRef<'_>| true);
/// ```
///
/// The same holds for a nested struct reached while walking its parent:
///
/// ```compile_fail
/// use sr_reflect::{FieldRef, derive::Reflect, info::FieldInfo, visit::for_each_field};
///
/// #[derive(Reflect)]
/// struct Empty {}
///
/// #[derive(Reflect)]
/// struct Outer { inner: Empty, x: i32 }
///
/// let outer = Outer { inner: Empty {}, x: 1 };
/// for_each_field(&outer, &mut |_: &FieldInfo, _: FieldRef<'_>| true);
/// ```
#[inline]
pub fn for_each_field<T, V>(instance: &T, visitor: &mut V)
where
    T: Reflect,
    V: FieldVisitor + ?Sized,
{
    const { check::<T>() }
    walk_fields(instance, visitor);
}

/// Mutable form of [`for_each_field`].
#[inline]
pub fn for_each_field_mut<T, V>(instance: &mut T, visitor: &mut V)
where
    T: Reflect,
    V: FieldVisitorMut + ?Sized,
{
    const { check::<T>() }
    walk_fields_mut(instance, visitor);
}

/// Offer the fields whose fingerprint equals `fingerprint` to `visitor`, in
/// declaration order, until one is handled.
///
/// Returns `true` if a visitor call returned `true`. With no matching field
/// the visitor is never called and `instance` is untouched.
///
/// The members of a bind group are offered together when the scan reaches
/// the first of them: each one is visited, and the group counts as handled
/// if any of them was.
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldRef, Fingerprint, derive::Reflect, info::FieldInfo, visit::find_in_field};
///
/// #[derive(Reflect)]
/// struct Foo { a: i32, b: String }
///
/// let foo = Foo { a: 7, b: "x".into() };
/// let mut seen = None;
/// let mut read_a = |info: &FieldInfo, value: FieldRef<'_>| {
///     seen = value.downcast_ref::<i32>().copied();
///     info.name() == "a"
/// };
/// assert!(find_in_field(&foo, Fingerprint::of("a"), &mut read_a));
/// assert_eq!(seen, Some(7));
///
/// let mut any = |_: &FieldInfo, _: FieldRef<'_>| true;
/// assert!(!find_in_field(&foo, Fingerprint::of("c"), &mut any));
/// ```
#[inline]
pub fn find_in_field<T, V>(instance: &T, fingerprint: Fingerprint, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitor + ?Sized,
{
    const { check::<T>() }
    find(instance, fingerprint, visitor)
}

/// Mutable form of [`find_in_field`].
#[inline]
pub fn find_in_field_mut<T, V>(instance: &mut T, fingerprint: Fingerprint, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitorMut + ?Sized,
{
    const { check::<T>() }
    find_mut(instance, fingerprint, visitor)
}

/// Fingerprint `name` and call [`find_in_field`].
#[inline]
pub fn find_by_name<T, V>(instance: &T, name: &str, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitor + ?Sized,
{
    find_in_field(instance, Fingerprint::of(name), visitor)
}

/// Fingerprint `name` and call [`find_in_field_mut`].
#[inline]
pub fn find_by_name_mut<T, V>(instance: &mut T, name: &str, visitor: &mut V) -> bool
where
    T: Reflect,
    V: FieldVisitorMut + ?Sized,
{
    find_in_field_mut(instance, Fingerprint::of(name), visitor)
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{
        find_by_name, find_by_name_mut, find_in_field_mut, for_each_field, for_each_field_mut,
    };
    use crate::derive::Reflect;
    use crate::info::{FieldInfo, Tag, Transform};
    use crate::visit::FieldVisitorMut;
    use crate::{FieldMut, FieldRef, Fingerprint, Reflect, Struct};

    struct ElfHash;

    #[derive(Reflect, Default)]
    struct SkillTiming {
        #[reflect(name = "breakTime", tag = ElfHash)]
        wait_time_qian_yao: u32,
        #[reflect(name = "castTime", tag = ElfHash)]
        wait_time_cast: u32,
    }

    #[derive(Reflect, Default)]
    struct Stats {
        hp: i32,
        name: String,
        speed: f32,
    }

    #[derive(Reflect, Default)]
    struct Unit {
        id: u64,
        stats: Stats,
    }

    fn halve(_: &FieldInfo, field: FieldMut<'_>) {
        if let FieldMut::I32(v) = field {
            *v /= 2;
        }
    }

    #[derive(Reflect, Default)]
    struct Damage {
        #[reflect(transform = halve)]
        amount: i32,
        bonus: i32,
    }

    #[derive(Reflect, Default)]
    struct Twin {
        #[reflect(name = "x")]
        text: String,
        #[reflect(name = "x")]
        number: i32,
    }

    #[derive(Reflect, Default)]
    struct ActionFlow {
        #[reflect(bind = "breakTime", tag = ElfHash)]
        wait_time_qian_yao: u32,
        #[reflect(name = "castTime", tag = ElfHash)]
        wait_time_cast: u32,
        #[reflect(bind = "breakTime")]
        wait_time_move_qian_yao: u32,
        #[reflect(name = "breakTime")]
        fallback: String,
    }

    /// Records which entry point was used.
    #[derive(Default)]
    struct Recorder {
        plain: Vec<&'static str>,
        tagged: Vec<&'static str>,
        value: u32,
    }

    impl FieldVisitorMut for Recorder {
        fn visit(&mut self, info: &'static FieldInfo, _: FieldMut<'_>) -> bool {
            self.plain.push(info.name());
            true
        }

        fn visit_tagged(
            &mut self,
            info: &'static FieldInfo,
            value: FieldMut<'_>,
            tag: &'static Tag,
        ) -> bool {
            assert!(tag.is::<ElfHash>());
            self.tagged.push(info.name());
            if let FieldMut::U32(v) = value {
                *v = self.value;
            }
            true
        }
    }

    #[test]
    fn for_each_visits_all_in_order() {
        let stats = Stats { hp: 3, name: "orc".into(), speed: 1.0 };
        let mut names = Vec::new();
        // Returning `true` must not stop the walk.
        for_each_field(&stats, &mut |info: &FieldInfo, _: FieldRef<'_>| {
            names.push(info.name());
            true
        });
        assert_eq!(names, ["hp", "name", "speed"]);
    }

    #[test]
    fn find_routes_each_name() {
        let mut stats = Stats::default();
        for (key, expected) in [("hp", "hp"), ("name", "name"), ("speed", "speed")] {
            let mut calls = Vec::new();
            let found = find_by_name_mut(&mut stats, key, &mut |info: &FieldInfo, _: FieldMut<'_>| {
                calls.push(info.name());
                true
            });
            assert!(found);
            assert_eq!(calls, [expected]);
        }
    }

    #[test]
    fn unknown_key_is_noop() {
        let mut stats = Stats { hp: 10, name: "elf".into(), speed: 2.0 };
        let mut called = false;
        let found = find_by_name_mut(&mut stats, "mana", &mut |_: &FieldInfo, _: FieldMut<'_>| {
            called = true;
            true
        });
        assert!(!found);
        assert!(!called);
        assert_eq!((stats.hp, stats.name.as_str(), stats.speed), (10, "elf", 2.0));
    }

    #[test]
    fn tagged_scenario() {
        let mut timing = SkillTiming { wait_time_qian_yao: 11, wait_time_cast: 0 };
        let mut recorder = Recorder { value: 450, ..Recorder::default() };

        assert!(find_in_field_mut(&mut timing, Fingerprint::of("castTime"), &mut recorder));
        assert_eq!(recorder.tagged, ["castTime"]);
        assert!(recorder.plain.is_empty());
        assert_eq!(timing.wait_time_cast, 450);
        assert_eq!(timing.wait_time_qian_yao, 11);
    }

    #[test]
    fn transform_runs_after_handled() {
        let mut damage = Damage::default();
        let mut set = |_: &FieldInfo, value: FieldMut<'_>| match value {
            FieldMut::I32(v) => {
                *v = 40;
                true
            }
            _ => false,
        };
        for_each_field_mut(&mut damage, &mut set);
        assert_eq!((damage.amount, damage.bonus), (20, 40));

        let transform = Damage::REGISTRY.field("amount").and_then(|info| info.transform());
        assert_eq!(transform.map(Transform::name), Some("halve"));
    }

    #[test]
    fn same_name_first_handled_wins() {
        let mut twin = Twin::default();
        let found = find_by_name_mut(&mut twin, "x", &mut |_: &FieldInfo, value: FieldMut<'_>| {
            if let FieldMut::String(s) = value {
                s.push('a');
                true
            } else {
                false
            }
        });
        assert!(found);
        assert_eq!((twin.text.as_str(), twin.number), ("a", 0));

        // The first candidate declines, so the second one is offered.
        let found = find_by_name_mut(&mut twin, "x", &mut |_: &FieldInfo, value: FieldMut<'_>| {
            if let FieldMut::I32(v) = value {
                *v = 9;
                true
            } else {
                false
            }
        });
        assert!(found);
        assert_eq!((twin.text.as_str(), twin.number), ("a", 9));
    }

    #[test]
    fn bind_group_offered_as_one_step() {
        let mut flow = ActionFlow::default();
        let mut recorder = Recorder { value: 30, ..Recorder::default() };

        assert!(find_by_name_mut(&mut flow, "breakTime", &mut recorder));
        assert_eq!(recorder.tagged, ["breakTime"]);
        assert_eq!(recorder.plain, ["breakTime"]);
        assert_eq!(flow.wait_time_qian_yao, 30);
        assert_eq!(flow.fallback, "");

        let mut seen = Vec::new();
        let mut second_only = |info: &FieldInfo, value: FieldMut<'_>| {
            seen.push(info.ident());
            if let FieldMut::U32(v) = value {
                *v = 12;
            }
            info.ident() == "wait_time_move_qian_yao"
        };
        assert!(find_by_name_mut(&mut flow, "breakTime", &mut second_only));
        assert_eq!(seen, ["wait_time_qian_yao", "wait_time_move_qian_yao"]);
        assert_eq!((flow.wait_time_qian_yao, flow.wait_time_move_qian_yao), (12, 12));
    }

    #[test]
    fn declined_bind_group_falls_through() {
        let mut flow = ActionFlow::default();
        let mut seen = Vec::new();
        let mut text_only = |info: &FieldInfo, value: FieldMut<'_>| {
            seen.push(info.ident());
            match value {
                FieldMut::String(s) => {
                    s.push_str("late");
                    true
                }
                _ => false,
            }
        };
        assert!(find_by_name_mut(&mut flow, "breakTime", &mut text_only));
        assert_eq!(seen, ["wait_time_qian_yao", "wait_time_move_qian_yao", "fallback"]);
        assert_eq!(flow.fallback, "late");

        let mut none = |_: &FieldInfo, _: FieldRef<'_>| false;
        assert!(!find_by_name(&flow, "breakTime", &mut none));
    }

    #[test]
    fn nested_recursion_populates_leaves() {
        // Plays the role of a document: `stats` is a sub-node.
        let document: [(&str, &[(&str, &str)]); 2] = [
            ("id", &[("", "77")]),
            ("stats", &[("hp", "12"), ("name", "ogre"), ("speed", "0.5")]),
        ];

        fn assign(value: FieldMut<'_>, text: &str) -> bool {
            match value {
                FieldMut::U64(v) => text.parse().map(|n| *v = n).is_ok(),
                FieldMut::I32(v) => text.parse().map(|n| *v = n).is_ok(),
                FieldMut::F32(v) => text.parse().map(|n| *v = n).is_ok(),
                FieldMut::String(v) => {
                    v.clear();
                    v.push_str(text);
                    true
                }
                _ => false,
            }
        }

        let mut unit = Unit::default();
        for (key, node) in document {
            find_by_name_mut(&mut unit, key, &mut |_: &FieldInfo, value: FieldMut<'_>| match value {
                FieldMut::Struct(inner) => {
                    for (sub_key, text) in node {
                        inner.find_field_mut(
                            Fingerprint::of(sub_key),
                            &mut |_: &FieldInfo, v: FieldMut<'_>| assign(v, text),
                        );
                    }
                    true
                }
                other => assign(other, node[0].1),
            });
        }

        assert_eq!(unit.id, 77);
        assert_eq!(unit.stats.hp, 12);
        assert_eq!(unit.stats.name, "ogre");
        assert_eq!(unit.stats.speed, 0.5);
    }

    #[test]
    fn dyn_struct_uses_same_rules() {
        let stats = Stats { hp: 5, name: String::new(), speed: 0.0 };
        let dynamic: &dyn Struct = &stats;
        let mut count = 0;
        dynamic.visit_fields(&mut |_: &FieldInfo, _: FieldRef<'_>| {
            count += 1;
            false
        });
        assert_eq!(count, 3);

        let mut hp = None;
        let found = find_by_name(&stats, "hp", &mut |_: &FieldInfo, value: FieldRef<'_>| {
            hp = value.downcast_ref::<i32>().copied();
            true
        });
        assert!(found && hp == Some(5));
    }
}

/// Implement [`Reflect`](crate::Reflect) with a hand-written field table.
///
/// The non-generated counterpart of `#[derive(Reflect)]` for a non-generic
/// struct. Fields are listed in declaration order; each entry is
///
/// ```text
/// ident [as "externalName" | bind "groupName"] [annotation]
/// ```
///
/// where the annotation is `[tag = MarkerType]` or `[transform = path::to::func]`.
///
/// `bind "groupName"` names the field and adds it to the bind group of that
/// name, see [`FieldInfo::bound`](crate::info::FieldInfo::bound).
///
/// The type name defaults to the type as written, or is given with
/// `as "Name"` after the type.
///
/// # Examples
///
/// ```
/// use sr_reflect::{FieldMut, Reflect, impl_reflect, info::{AnnotationKind, FieldInfo}};
///
/// struct ElfHash;
///
/// fn at_least_one(_: &FieldInfo, field: FieldMut<'_>) {
///     if let FieldMut::U32(v) = field {
///         *v = (*v).max(1);
///     }
/// }
///
/// #[derive(Default)]
/// struct SkillTiming {
///     wait_time_qian_yao: u32,
///     wait_time_cast: u32,
///     end_time: u32,
/// }
///
/// impl_reflect! {
///     SkillTiming as "Timing" {
///         wait_time_qian_yao as "breakTime" [tag = ElfHash],
///         wait_time_cast as "castTime" [tag = ElfHash],
///         end_time as "endTime" [transform = at_least_one],
///     }
/// }
///
/// assert_eq!(SkillTiming::TYPE_NAME, "Timing");
/// let info = SkillTiming::REGISTRY.field("castTime").unwrap();
/// assert_eq!(info.ident(), "wait_time_cast");
/// assert_eq!(info.annotation_kind(), AnnotationKind::Tag);
/// ```
#[macro_export]
macro_rules! impl_reflect {
    (@name $default:expr) => { $default };
    (@name $default:expr, $name:literal) => { $name };
    (@bind $info:expr) => { $info };
    (@bind $info:expr, $group:literal) => { $info.bound() };
    (@info $info:expr) => { $info };
    (@info $info:expr, tag = $tag:ty) => {
        $info.with_tag($crate::info::Tag::of::<$tag>())
    };
    (@info $info:expr, transform = $func:path) => {
        $info.with_transform($crate::info::Transform::new(stringify!($func), $func))
    };
    (
        $ty:ty $(as $type_name:literal)? {
            $(
                $field:ident $(as $name:literal)? $(bind $group:literal)?
                $([ $($annotation:tt)* ])?
            ),* $(,)?
        }
    ) => {
        impl $crate::Field for $ty {
            #[inline]
            fn as_field(&self) -> $crate::FieldRef<'_> {
                $crate::FieldRef::Struct(self)
            }

            #[inline]
            fn as_field_mut(&mut self) -> $crate::FieldMut<'_> {
                $crate::FieldMut::Struct(self)
            }
        }

        impl $crate::Reflect for $ty {
            const TYPE_NAME: &'static str =
                $crate::impl_reflect!(@name stringify!($ty) $(, $type_name)?);

            const FIELDS: &'static [$crate::info::FieldDescriptor<Self>] = &[
                $(
                    $crate::info::FieldDescriptor::new(
                        $crate::impl_reflect!(
                            @info
                            $crate::impl_reflect!(
                                @bind
                                $crate::info::FieldInfo::new(
                                    $crate::impl_reflect!(
                                        @name stringify!($field) $(, $name)? $(, $group)?
                                    ),
                                    stringify!($field),
                                )
                                $(, $group)?
                            )
                            $(, $($annotation)*)?
                        ),
                        |this| $crate::Field::as_field(&this.$field),
                        |this| $crate::Field::as_field_mut(&mut this.$field),
                    ),
                )*
            ];
        }

        const _: () = ::core::assert!(
            !<$ty as $crate::Reflect>::REGISTRY.has_fingerprint_collision(),
            "two fields with different names share a fingerprint",
        );
    };
}

// -----------------------------------------------------------------------------
// Tests

use alloc::string::String;
use core::any::Any;
use core::fmt;

use crate::Field;
use crate::ops::{List, Optional, Struct};

// -----------------------------------------------------------------------------
// Views

macro_rules! define_field_views {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        /// Shared view of a field.
        pub enum FieldRef<'a> {
            $( #[doc = concat!("`", stringify!($ty), "`")] $variant(&'a $ty), )*
            /// A nested reflected struct.
            Struct(&'a dyn Struct),
            /// `Vec<T>` or `[T; N]`.
            List(&'a dyn List),
            /// `Option<T>`.
            Option(&'a dyn Optional),
        }

        /// Exclusive view of a field.
        pub enum FieldMut<'a> {
            $( #[doc = concat!("`", stringify!($ty), "`")] $variant(&'a mut $ty), )*
            /// A nested reflected struct.
            Struct(&'a mut dyn Struct),
            /// `Vec<T>` or `[T; N]`.
            List(&'a mut dyn List),
            /// `Option<T>`.
            Option(&'a mut dyn Optional),
        }

        /// Discriminant of [`FieldRef`] and [`FieldMut`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum FieldKind {
            $( $variant, )*
            Struct,
            List,
            Option,
        }

        impl FieldKind {
            /// A short name for messages.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($ty), )*
                    Self::Struct => "struct",
                    Self::List => "list",
                    Self::Option => "option",
                }
            }
        }

        impl<'a> FieldRef<'a> {
            /// Returns the discriminant.
            pub fn kind(&self) -> FieldKind {
                match self {
                    $( Self::$variant(_) => FieldKind::$variant, )*
                    Self::Struct(_) => FieldKind::Struct,
                    Self::List(_) => FieldKind::List,
                    Self::Option(_) => FieldKind::Option,
                }
            }

            /// Downcast a scalar or struct field to its concrete type.
            ///
            /// Lists and options return `None`; use [`List`] and [`Optional`].
            pub fn downcast_ref<T: Any>(self) -> Option<&'a T> {
                match self {
                    $( Self::$variant(v) => (v as &dyn Any).downcast_ref::<T>(), )*
                    Self::Struct(v) => (v as &dyn Any).downcast_ref::<T>(),
                    Self::List(_) | Self::Option(_) => None,
                }
            }
        }

        impl<'a> FieldMut<'a> {
            /// Returns the discriminant.
            pub fn kind(&self) -> FieldKind {
                match self {
                    $( Self::$variant(_) => FieldKind::$variant, )*
                    Self::Struct(_) => FieldKind::Struct,
                    Self::List(_) => FieldKind::List,
                    Self::Option(_) => FieldKind::Option,
                }
            }

            /// Reborrow for a shorter lifetime, keeping `self` usable afterwards.
            pub fn reborrow(&mut self) -> FieldMut<'_> {
                match self {
                    $( Self::$variant(v) => FieldMut::$variant(&mut **v), )*
                    Self::Struct(v) => FieldMut::Struct(&mut **v),
                    Self::List(v) => FieldMut::List(&mut **v),
                    Self::Option(v) => FieldMut::Option(&mut **v),
                }
            }

            /// Shared view of the same field.
            pub fn as_ref(&self) -> FieldRef<'_> {
                match self {
                    $( Self::$variant(v) => FieldRef::$variant(&**v), )*
                    Self::Struct(v) => FieldRef::Struct(&**v),
                    Self::List(v) => FieldRef::List(&**v),
                    Self::Option(v) => FieldRef::Option(&**v),
                }
            }

            /// Downcast a scalar or struct field to its concrete type.
            pub fn downcast_mut<T: Any>(self) -> Option<&'a mut T> {
                match self {
                    $( Self::$variant(v) => (v as &mut dyn Any).downcast_mut::<T>(), )*
                    Self::Struct(v) => (v as &mut dyn Any).downcast_mut::<T>(),
                    Self::List(_) | Self::Option(_) => None,
                }
            }
        }

        impl fmt::Debug for FieldRef<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(
                        Self::$variant(v) => {
                            f.debug_tuple(stringify!($variant)).field(v).finish()
                        }
                    )*
                    Self::Struct(v) => f.debug_tuple("Struct").field(&v.type_name()).finish(),
                    Self::List(v) => f.debug_struct("List").field("len", &v.len()).finish(),
                    Self::Option(v) => {
                        f.debug_struct("Option").field("is_some", &v.is_some()).finish()
                    }
                }
            }
        }

        impl fmt::Debug for FieldMut<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.as_ref(), f)
            }
        }

        $(
            impl Field for $ty {
                #[inline]
                fn as_field(&self) -> FieldRef<'_> {
                    FieldRef::$variant(self)
                }

                #[inline]
                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::$variant(self)
                }
            }
        )*
    };
}

define_field_views! {
    Bool(bool),
    Char(char),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    Usize(usize),
    F32(f32),
    F64(f64),
    String(String),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use alloc::vec;

    use super::{FieldKind, FieldMut, FieldRef};
    use crate::Field;

    #[test]
    fn scalar_views() {
        let mut value = 5_i32;
        assert_eq!(value.as_field().kind(), FieldKind::I32);
        assert_eq!(value.as_field().downcast_ref::<i32>(), Some(&5));
        assert!(value.as_field().downcast_ref::<u32>().is_none());

        if let FieldMut::I32(v) = value.as_field_mut() {
            *v = 7;
        }
        assert_eq!(value, 7);
    }

    #[test]
    fn reborrow_keeps_view() {
        let mut text = String::from("a");
        let mut view = text.as_field_mut();
        if let FieldMut::String(s) = view.reborrow() {
            s.push('b');
        }
        if let Some(s) = view.downcast_mut::<String>() {
            s.push('c');
        }
        assert_eq!(text, "abc");
    }

    #[test]
    fn container_kinds() {
        let list = vec![1_u8, 2, 3];
        assert_eq!(list.as_field().kind(), FieldKind::List);
        assert!(list.as_field().downcast_ref::<vec::Vec<u8>>().is_none());

        let maybe: Option<f32> = None;
        assert_eq!(maybe.as_field().kind(), FieldKind::Option);
    }

    #[test]
    fn debug_output() {
        let v = 3_u16;
        assert_eq!(format!("{:?}", v.as_field()), "U16(3)");
        assert_eq!(format!("{}", FieldKind::F64), "f64");
        assert!(matches!(true.as_field(), FieldRef::Bool(true)));
    }
}

use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use sr_utils::hash::{HashMap, HashSet, NoOpHashState};

use crate::{Fingerprint, Reflect, Struct};

// -----------------------------------------------------------------------------
// CatalogEntry

/// Registration data of one type in a [`TypeCatalog`].
#[derive(Clone, Copy)]
pub struct CatalogEntry {
    type_name: &'static str,
    fingerprint: Fingerprint,
    type_id: TypeId,
    field_len: usize,
    create: fn() -> Box<dyn Struct>,
}

fn create_default<T: Reflect + Default>() -> Box<dyn Struct> {
    Box::new(T::default())
}

impl CatalogEntry {
    /// Creates the entry of `T`.
    ///
    /// Catalogued types are traversed through `dyn Struct`, so `T` must meet
    /// the same registry requirements as the traversal functions:
    ///
    /// ```compile_fail
    /// use sr_reflect::{catalog::CatalogEntry, derive::Reflect};
    ///
    /// #[derive(Reflect, Default)]
    /// struct Empty {}
    ///
    /// let _ = CatalogEntry::of::<Empty>();
    /// ```
    #[inline]
    pub fn of<T: Reflect + Default>() -> Self {
        const { crate::visit::traverse::check::<T>() }
        Self {
            type_name: T::TYPE_NAME,
            fingerprint: T::REGISTRY.fingerprint(),
            type_id: TypeId::of::<T>(),
            field_len: T::FIELDS.len(),
            create: create_default::<T>,
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

    /// Returns the [`TypeId`] of the type.
    #[inline]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the number of reflected fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.field_len
    }

    /// Creates a default instance.
    #[inline]
    pub fn create(&self) -> Box<dyn Struct> {
        (self.create)()
    }
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("type_name", &self.type_name)
            .field("fingerprint", &self.fingerprint)
            .field("field_len", &self.field_len)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// TypeCatalog

/// A set of reflected types, indexed by type and by type name.
///
/// Two different types registered under the same name make that name
/// ambiguous: it is removed from the name index and lookups by name return
/// `None`. Lookups by [`TypeId`] keep working.
///
/// # Examples
///
/// ```
/// use sr_reflect::{Struct, catalog::TypeCatalog, derive::Reflect};
///
/// #[derive(Reflect, Default)]
/// struct Tree { height: f32 }
///
/// #[derive(Reflect, Default)]
/// struct Rock { weight: f32 }
///
/// let mut catalog = TypeCatalog::new();
/// assert!(catalog.register::<Tree>());
/// assert!(catalog.register::<Rock>());
/// assert!(!catalog.register::<Tree>());
///
/// let node: Box<dyn Struct> = catalog.create("Rock").unwrap();
/// assert!(node.is::<Rock>());
/// assert!(catalog.create("Cloud").is_none());
/// ```
pub struct TypeCatalog {
    entries: HashMap<TypeId, CatalogEntry>,
    name_to_id: HashMap<Fingerprint, TypeId, NoOpHashState>,
    ambiguous_names: HashSet<Fingerprint, NoOpHashState>,
    auto_registered: bool,
}

impl Default for TypeCatalog {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeCatalog {
    /// Creates an empty catalogue.
    #[inline]
    pub const fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(sr_utils::hash::FixedHashState),
            name_to_id: HashMap::with_hasher(NoOpHashState),
            ambiguous_names: HashSet::with_hasher(NoOpHashState),
            auto_registered: false,
        }
    }

    fn index_name(&mut self, entry: &CatalogEntry) {
        let fingerprint = entry.fingerprint;
        if self.ambiguous_names.contains(&fingerprint) {
            return;
        }
        if self.name_to_id.remove(&fingerprint).is_some() {
            log::warn!(
                "type name `{}` is registered by more than one type, \
                 lookup by name is disabled for it",
                entry.type_name,
            );
            self.ambiguous_names.insert(fingerprint);
        } else {
            self.name_to_id.insert(fingerprint, entry.type_id);
        }
    }

    /// Registers `T`.
    ///
    /// Returns `false` and does nothing if `T` is already registered.
    pub fn register<T: Reflect + Default>(&mut self) -> bool {
        let type_id = TypeId::of::<T>();
        if self.entries.contains_key(&type_id) {
            return false;
        }
        let entry = CatalogEntry::of::<T>();
        self.index_name(&entry);
        self.entries.insert(type_id, entry);
        log::debug!("registered reflected type `{}`", T::TYPE_NAME);
        true
    }

    /// Registers every non-generic type declared with `#[reflect(auto_register)]`.
    ///
    /// Returns `true` if automatic registration is supported on the current
    /// platform. Repeated calls are cheap and do not insert duplicates.
    ///
    /// Requires the `auto_register` feature; without it this does nothing
    /// and returns `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use sr_reflect::{catalog::TypeCatalog, derive::Reflect};
    ///
    /// #[derive(Reflect, Default)]
    /// #[reflect(auto_register)]
    /// struct Portal { target: String }
    ///
    /// let mut catalog = TypeCatalog::new();
    /// assert!(catalog.auto_register());
    /// assert!(catalog.contains::<Portal>());
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        crate::cfg::auto_register! {
            if {
                use crate::__macro_exports::auto_register;
                if self.auto_registered {
                    return true;
                }
                auto_register::__register_types(self);
                if !self.auto_registered {
                    log::warn!("automatic type registration is not supported on this platform");
                }
                self.auto_registered
            } else {
                false
            }
        }
    }

    #[cfg_attr(
        not(feature = "auto_register"),
        expect(dead_code, reason = "only used by auto registration")
    )]
    pub(crate) fn mark_auto_registered(&mut self) {
        self.auto_registered = true;
    }

    /// Check if `T` is registered.
    #[inline]
    pub fn contains<T: 'static>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Returns the entry of the type with this [`TypeId`].
    #[inline]
    pub fn get_by_id(&self, type_id: TypeId) -> Option<&CatalogEntry> {
        self.entries.get(&type_id)
    }

    /// Returns the entry whose type name has this fingerprint.
    ///
    /// Returns `None` for an unknown or ambiguous name.
    #[inline]
    pub fn get(&self, fingerprint: Fingerprint) -> Option<&CatalogEntry> {
        let type_id = self.name_to_id.get(&fingerprint)?;
        self.entries.get(type_id)
    }

    /// Returns the entry registered under `name`.
    ///
    /// Returns `None` for an unknown or ambiguous name.
    pub fn get_with_name(&self, name: &str) -> Option<&CatalogEntry> {
        self.get(Fingerprint::of(name))
            .filter(|entry| entry.type_name == name)
    }

    /// Creates a default instance of the type registered under `name`.
    #[inline]
    pub fn create(&self, name: &str) -> Option<Box<dyn Struct>> {
        self.get_with_name(name).map(CatalogEntry::create)
    }

    /// Check if more than one type is registered under `name`.
    #[inline]
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.ambiguous_names.contains(&Fingerprint::of(name))
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no type is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the registered entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CatalogEntry> + '_ {
        self.entries.values()
    }
}

impl fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.entries.values().map(CatalogEntry::type_name))
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::TypeCatalog;
    use crate::derive::Reflect;
    use crate::{FieldRef, Fingerprint};

    #[derive(Reflect, Default)]
    struct Gate {
        open: bool,
    }

    #[derive(Reflect, Default)]
    #[reflect(name = "Gate")]
    struct OtherGate {
        locked: bool,
    }

    #[derive(Reflect)]
    struct Lamp {
        lit: bool,
        power: u8,
    }

    impl Default for Lamp {
        fn default() -> Self {
            Self { lit: true, power: 3 }
        }
    }

    #[test]
    fn register_and_create() {
        let mut catalog = TypeCatalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.register::<Lamp>());
        assert!(!catalog.register::<Lamp>());
        assert_eq!(catalog.len(), 1);
        assert!(catalog.contains::<Lamp>());

        let entry = catalog.get(Fingerprint::of("Lamp")).unwrap();
        assert_eq!(entry.type_name(), "Lamp");
        assert_eq!(entry.field_len(), 2);
        assert_eq!(entry.type_id(), TypeId::of::<Lamp>());

        let lamp = catalog.create("Lamp").unwrap();
        assert!(matches!(lamp.field("power"), Some(FieldRef::U8(3))));
    }

    #[test]
    fn ambiguous_name() {
        let mut catalog = TypeCatalog::default();
        catalog.register::<Gate>();
        assert!(catalog.get_with_name("Gate").is_some());

        catalog.register::<OtherGate>();
        assert!(catalog.is_ambiguous("Gate"));
        assert!(catalog.get_with_name("Gate").is_none());
        assert!(catalog.create("Gate").is_none());

        // Still reachable by type.
        assert!(catalog.get_by_id(TypeId::of::<OtherGate>()).is_some());
        assert_eq!(catalog.iter().count(), 2);
    }

    #[cfg(feature = "auto_register")]
    #[derive(Reflect, Default)]
    #[reflect(auto_register)]
    struct Portal {
        target: alloc::string::String,
    }

    #[cfg(feature = "auto_register")]
    #[test]
    fn auto_register_collects_marked_types() {
        let mut catalog = TypeCatalog::new();
        catalog.register::<Gate>();
        assert!(catalog.auto_register());
        assert!(catalog.contains::<Portal>());
        assert!(!catalog.contains::<Lamp>());

        let len = catalog.len();
        assert!(catalog.auto_register());
        assert_eq!(catalog.len(), len);

        let portal = catalog.create("Portal").unwrap();
        assert!(portal.is::<Portal>());
        assert!(matches!(portal.field("target"), Some(FieldRef::String(s)) if s.is_empty()));
    }

    #[test]
    fn unknown_name() {
        let mut catalog = TypeCatalog::new();
        catalog.register::<Gate>();
        assert!(catalog.get_with_name("Door").is_none());
        assert!(!catalog.is_ambiguous("Door"));
    }
}

//! Items used by code generated with `sr_reflect_derive`. Not public API.

crate::cfg::auto_register! {
    /// Static registration through `inventory`.
    pub mod auto_register {
        pub use inventory;

        use crate::Reflect;
        use crate::catalog::TypeCatalog;

        /// A registration function submitted by a derived type.
        pub struct __AutoRegisterFunc(pub fn(&mut TypeCatalog));

        inventory::collect!(__AutoRegisterFunc);

        // Runs on every platform where `inventory` works, so the catalogue
        // can tell whether collection happened at all.
        inventory::submit! {
            __AutoRegisterFunc(TypeCatalog::mark_auto_registered)
        }

        /// Implemented for every type the catalogue can hold.
        pub trait __RegisterType {
            fn __register(catalog: &mut TypeCatalog);
        }

        impl<T: Reflect + Default> __RegisterType for T {
            #[inline]
            fn __register(catalog: &mut TypeCatalog) {
                catalog.register::<T>();
            }
        }

        /// Run every submitted registration function.
        pub fn __register_types(catalog: &mut TypeCatalog) {
            for func in inventory::iter::<__AutoRegisterFunc> {
                (func.0)(catalog);
            }
        }
    }
}

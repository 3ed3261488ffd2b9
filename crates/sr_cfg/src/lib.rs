#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Switches

/// Expands its input unchanged.
///
/// Used as the "enabled" branch of an alias created by [`define_alias`].
///
/// - `()` expands to `true`.
/// - `{ if { A } else { B } }` expands to `A`.
/// - Any other input is emitted as is.
#[macro_export]
#[doc(hidden)]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Discards its input.
///
/// Used as the "disabled" branch of an alias created by [`define_alias`].
///
/// - `()` expands to `false`.
/// - `{ if { A } else { B } }` expands to `B`.
/// - Any other input is dropped.
#[macro_export]
#[doc(hidden)]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

/// Define macro aliases for `cfg` predicates.
///
/// Each `#[cfg(predicate)] => name` entry creates a macro `name!` which is
/// [`enabled`] when the predicate holds and [`disabled`] otherwise.
///
/// # Examples
///
/// ```
/// mod cfg {
///     sr_cfg::define_alias! {
///         #[cfg(debug_assertions)] => debug,
///         #[cfg(not(debug_assertions))] => release,
///     }
/// }
///
/// assert_ne!(cfg::debug!(), cfg::release!());
/// ```
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $p:ident
        $(, $($rest:tt)*)?
    ) => {
        #[doc(inline)]
        #[cfg($meta)]
        pub use $crate::enabled as $p;

        #[doc(inline)]
        #[cfg(not($meta))]
        pub use $crate::disabled as $p;

        $( $crate::define_alias! { $($rest)* } )?
    };
}

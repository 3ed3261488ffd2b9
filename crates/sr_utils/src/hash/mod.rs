//! Hash functions and hash containers.
//!
//! # Menu
//!
//! - String hashes, all `const fn` over byte slices:
//!   [`djb2a`], [`fnv1a`], [`crc32`], [`murmur3_32`], [`xxh32`], [`xxh64`].
//! - Integer mixers: [`hash32shift`], [`jenkins32`], [`hash64shift`],
//!   [`hash64_32shift`], [`jenkins96`].
//! - Hasher builders: [`FixedHashState`], [`NoOpHashState`].
//! - Containers: [`HashMap`], [`HashSet`], re-exported from *hashbrown*.
//!
//! Every string hash gives the same value in constant evaluation and at run
//! time, so a name hashed at compile time can be compared with a name read
//! from a document.

// -----------------------------------------------------------------------------
// Modules

mod classic;
mod hasher;
mod mix;
mod murmur3;
mod xxhash;

// -----------------------------------------------------------------------------
// Exports

pub use classic::{crc32, djb2a, fnv1a};
pub use mix::{hash32shift, hash64_32shift, hash64shift, jenkins32, jenkins96};
pub use murmur3::murmur3_32;
pub use xxhash::{xxh32, xxh64};

pub use hasher::{FixedHashState, FixedHasher};
pub use hasher::{NoOpHashState, NoOpHasher};

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;

use core::fmt;
use core::hash::{Hash, Hasher};

use sr_utils::hash::{hash64shift, murmur3_32};

// -----------------------------------------------------------------------------
// Fingerprint

/// The 32-bit hash of a field or type name.
///
/// Computed with MurmurHash3, seed `0`. [`Fingerprint::of`] is a `const fn`,
/// so names written in source are hashed during compilation, while names read
/// from a document at run time hash to the same value.
///
/// # Examples
///
/// ```
/// use sr_reflect::Fingerprint;
///
/// const CAST: Fingerprint = sr_reflect::fingerprint!("castTime");
///
/// let key = String::from("castTime");
/// assert_eq!(Fingerprint::of(&key), CAST);
/// assert_eq!(CAST.value(), 0xba493660);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Fingerprint(u32);

impl Fingerprint {
    /// Seed used for every fingerprint.
    pub const SEED: u32 = 0;

    /// Fingerprint of a name.
    #[inline]
    pub const fn of(name: &str) -> Self {
        Self::of_bytes(name.as_bytes())
    }

    /// Fingerprint of raw bytes, e.g. an attribute value that is not UTF-8 checked.
    #[inline]
    pub const fn of_bytes(bytes: &[u8]) -> Self {
        Self(murmur3_32(bytes, Self::SEED))
    }

    /// Wrap an already computed hash.
    #[inline]
    pub const fn from_raw(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw hash value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// `const` equality, usable where `PartialEq` is not.
    #[inline]
    pub const fn const_eq(self, other: Self) -> bool {
        self.0 == other.0
    }
}

impl Hash for Fingerprint {
    // Spread the 32 bits over a `u64` so the fingerprint can be used
    // with `NoOpHashState`.
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash64shift(self.0 as u64));
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:#010x})", self.0)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<&str> for Fingerprint {
    #[inline]
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

// -----------------------------------------------------------------------------
// Macro

/// Fingerprint a string literal in constant evaluation.
///
/// ```
/// use sr_reflect::Fingerprint;
///
/// assert_eq!(sr_reflect::fingerprint!("breakTime"), Fingerprint::of("breakTime"));
/// ```
#[macro_export]
macro_rules! fingerprint {
    ($name:expr) => {
        const { $crate::Fingerprint::of($name) }
    };
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::String;
    use core::hash::BuildHasher;

    use sr_utils::hash::NoOpHashState;

    use super::Fingerprint;

    #[test]
    fn const_and_runtime_agree() {
        const BREAK: Fingerprint = Fingerprint::of("breakTime");
        let dynamic = String::from("break") + "Time";
        assert_eq!(Fingerprint::of(&dynamic), BREAK);
        assert_eq!(BREAK.value(), 0x1015_8197);
    }

    #[test]
    fn empty_name() {
        assert_eq!(Fingerprint::of("").value(), 0);
    }

    #[test]
    fn formatting() {
        let fp = Fingerprint::from_raw(0xba49_3660);
        assert_eq!(format!("{fp}"), "0xba493660");
        assert_eq!(format!("{fp:?}"), "Fingerprint(0xba493660)");
    }

    #[test]
    fn no_op_hash_is_mixed() {
        let low = NoOpHashState.hash_one(Fingerprint::from_raw(1));
        assert_ne!(low >> 57, 0);
    }
}

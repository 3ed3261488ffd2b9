//! Integer avalanche mixers by Thomas Wang and Bob Jenkins.

/// Thomas Wang's 32-bit integer hash.
pub const fn hash32shift(mut key: u32) -> u32 {
    key = (!key).wrapping_add(key << 15);
    key ^= key >> 12;
    key = key.wrapping_add(key << 2);
    key ^= key >> 4;
    key = key.wrapping_mul(2057);
    key ^= key >> 16;
    key
}

/// Bob Jenkins' 32-bit integer hash, six shifts.
pub const fn jenkins32(mut a: u32) -> u32 {
    a = a.wrapping_add(0x7ED5_5D16).wrapping_add(a << 12);
    a = a ^ 0xC761_C23C ^ (a >> 19);
    a = a.wrapping_add(0x1656_67B1).wrapping_add(a << 5);
    a = a.wrapping_add(0xD3A2_646C) ^ (a << 9);
    a = a.wrapping_add(0xFD70_46C5).wrapping_add(a << 3);
    a = a ^ 0xB55A_4F09 ^ (a >> 16);
    a
}

/// Thomas Wang's 64-bit integer hash.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::hash64shift;
///
/// assert_eq!(hash64shift(1), 0x5bca7c69b794f8ce);
/// ```
pub const fn hash64shift(mut key: u64) -> u64 {
    key = (!key).wrapping_add(key << 21);
    key ^= key >> 24;
    key = key.wrapping_add(key << 3).wrapping_add(key << 8);
    key ^= key >> 14;
    key = key.wrapping_add(key << 2).wrapping_add(key << 4);
    key ^= key >> 28;
    key = key.wrapping_add(key << 31);
    key
}

/// Thomas Wang's 64-bit to 32-bit hash.
pub const fn hash64_32shift(mut key: u64) -> u32 {
    key = (!key).wrapping_add(key << 18);
    key ^= key >> 31;
    key = key.wrapping_mul(21);
    key ^= key >> 11;
    key = key.wrapping_add(key << 6);
    key ^= key >> 22;
    key as u32
}

/// Bob Jenkins' 96-bit mix, returning the final `c` lane.
pub const fn jenkins96(mut a: u32, mut b: u32, mut c: u32) -> u32 {
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 13);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 8);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 13);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 12);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 16);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 5);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 3);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 10);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 15);
    c
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wang_32() {
        assert_eq!(hash32shift(0), 0xcaa3_caa3);
        assert_eq!(hash32shift(1), 0x12d6_0bf6);
        assert_eq!(hash32shift(42), 0x7796_ccb4);
    }

    #[test]
    fn jenkins_32() {
        assert_eq!(jenkins32(0), 0x6b4e_d927);
        assert_eq!(jenkins32(1), 0xb486_81b6);
        assert_eq!(jenkins32(42), 0xc343_bb70);
    }

    #[test]
    fn wang_64() {
        assert_eq!(hash64shift(0), 0x77cf_a1ee_f01b_ca90);
        assert_eq!(hash64shift(42), 0x0f3d_b82f_1e7b_6f7a);
        assert_eq!(hash64_32shift(0), 0x2aea_a2ab);
        assert_eq!(hash64_32shift(1), 0x1551_5fbc);
        assert_eq!(hash64_32shift(42), 0x7f57_6bfb);
    }

    #[test]
    fn jenkins_96() {
        assert_eq!(jenkins96(0, 0, 0), 0);
        assert_eq!(jenkins96(1, 2, 3), 0xb7b4_8902);
    }
}

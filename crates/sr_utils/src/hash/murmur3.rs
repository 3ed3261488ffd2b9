//! MurmurHash3, x86 32-bit variant.

const C1: u32 = 0xCC9E_2D51;
const C2: u32 = 0x1B87_3593;

#[inline(always)]
const fn mix_k(k: u32) -> u32 {
    k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

#[inline(always)]
const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// MurmurHash3 (x86, 32 bit) of `bytes` with the given `seed`.
///
/// Bytes are read as unsigned values, little-endian per block.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::murmur3_32;
///
/// const HELLO: u32 = murmur3_32(b"hello", 0);
/// assert_eq!(HELLO, 0x248bfa47);
///
/// let dynamic = String::from("hello");
/// assert_eq!(murmur3_32(dynamic.as_bytes(), 0), HELLO);
/// ```
pub const fn murmur3_32(bytes: &[u8], seed: u32) -> u32 {
    let len = bytes.len();
    let mut h = seed;
    let mut i = 0;

    while len - i >= 4 {
        let k = u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]]);
        h ^= mix_k(k);
        h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xE654_6B64);
        i += 4;
    }

    let k = match len & 3 {
        3 => bytes[i] as u32 | (bytes[i + 1] as u32) << 8 | (bytes[i + 2] as u32) << 16,
        2 => bytes[i] as u32 | (bytes[i + 1] as u32) << 8,
        1 => bytes[i] as u32,
        _ => 0,
    };
    h ^= mix_k(k);

    h ^= len as u32;
    fmix32(h)
}

// -----------------------------------------------------------------------------
// Tests

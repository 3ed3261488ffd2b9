//! xxHash, 32 and 64 bit.

// -----------------------------------------------------------------------------
// Helpers

#[inline(always)]
const fn read_u32(bytes: &[u8], i: usize) -> u32 {
    u32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
}

#[inline(always)]
const fn read_u64(bytes: &[u8], i: usize) -> u64 {
    u64::from_le_bytes([
        bytes[i],
        bytes[i + 1],
        bytes[i + 2],
        bytes[i + 3],
        bytes[i + 4],
        bytes[i + 5],
        bytes[i + 6],
        bytes[i + 7],
    ])
}

// -----------------------------------------------------------------------------
// xxh32

const P32_1: u32 = 0x9E37_79B1;
const P32_2: u32 = 0x85EB_CA77;
const P32_3: u32 = 0xC2B2_AE3D;
const P32_4: u32 = 0x27D4_EB2F;
const P32_5: u32 = 0x1656_67B1;

#[inline(always)]
const fn round32(acc: u32, input: u32) -> u32 {
    acc.wrapping_add(input.wrapping_mul(P32_2))
        .rotate_left(13)
        .wrapping_mul(P32_1)
}

/// xxHash32 of `bytes` with the given `seed`.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::xxh32;
///
/// assert_eq!(xxh32(b"", 0), 0x02cc5d05);
/// assert_eq!(xxh32(b"hello", 0), 0xfb0077f9);
/// ```
pub const fn xxh32(bytes: &[u8], seed: u32) -> u32 {
    let len = bytes.len();
    let mut i = 0;

    let mut h = if len >= 16 {
        let mut v1 = seed.wrapping_add(P32_1).wrapping_add(P32_2);
        let mut v2 = seed.wrapping_add(P32_2);
        let mut v3 = seed;
        let mut v4 = seed.wrapping_sub(P32_1);

        while len - i >= 16 {
            v1 = round32(v1, read_u32(bytes, i));
            v2 = round32(v2, read_u32(bytes, i + 4));
            v3 = round32(v3, read_u32(bytes, i + 8));
            v4 = round32(v4, read_u32(bytes, i + 12));
            i += 16;
        }

        v1.rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18))
    } else {
        seed.wrapping_add(P32_5)
    };

    h = h.wrapping_add(len as u32);

    while len - i >= 4 {
        h = h
            .wrapping_add(read_u32(bytes, i).wrapping_mul(P32_3))
            .rotate_left(17)
            .wrapping_mul(P32_4);
        i += 4;
    }

    while i < len {
        h = h
            .wrapping_add((bytes[i] as u32).wrapping_mul(P32_5))
            .rotate_left(11)
            .wrapping_mul(P32_1);
        i += 1;
    }

    h ^= h >> 15;
    h = h.wrapping_mul(P32_2);
    h ^= h >> 13;
    h = h.wrapping_mul(P32_3);
    h ^= h >> 16;
    h
}

// -----------------------------------------------------------------------------
// xxh64

const P64_1: u64 = 0x9E37_79B1_85EB_CA87;
const P64_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
const P64_3: u64 = 0x1656_67B1_9E37_79F9;
const P64_4: u64 = 0x85EB_CA77_C2B2_AE63;
const P64_5: u64 = 0x27D4_EB2F_1656_67C5;

#[inline(always)]
const fn round64(acc: u64, input: u64) -> u64 {
    acc.wrapping_add(input.wrapping_mul(P64_2))
        .rotate_left(31)
        .wrapping_mul(P64_1)
}

#[inline(always)]
const fn merge64(h: u64, v: u64) -> u64 {
    (h ^ round64(0, v)).wrapping_mul(P64_1).wrapping_add(P64_4)
}

/// xxHash64 of `bytes` with the given `seed`.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::xxh64;
///
/// assert_eq!(xxh64(b"", 0), 0xef46db3751d8e999);
/// assert_eq!(xxh64(b"a", 0), 0xd24ec4f1a98c6e5b);
/// ```
pub const fn xxh64(bytes: &[u8], seed: u64) -> u64 {
    let len = bytes.len();
    let mut i = 0;

    let mut h = if len >= 32 {
        let mut v1 = seed.wrapping_add(P64_1).wrapping_add(P64_2);
        let mut v2 = seed.wrapping_add(P64_2);
        let mut v3 = seed;
        let mut v4 = seed.wrapping_sub(P64_1);

        while len - i >= 32 {
            v1 = round64(v1, read_u64(bytes, i));
            v2 = round64(v2, read_u64(bytes, i + 8));
            v3 = round64(v3, read_u64(bytes, i + 16));
            v4 = round64(v4, read_u64(bytes, i + 24));
            i += 32;
        }

        let mut acc = v1
            .rotate_left(1)
            .wrapping_add(v2.rotate_left(7))
            .wrapping_add(v3.rotate_left(12))
            .wrapping_add(v4.rotate_left(18));
        acc = merge64(acc, v1);
        acc = merge64(acc, v2);
        acc = merge64(acc, v3);
        merge64(acc, v4)
    } else {
        seed.wrapping_add(P64_5)
    };

    h = h.wrapping_add(len as u64);

    while len - i >= 8 {
        h = (h ^ round64(0, read_u64(bytes, i)))
            .rotate_left(27)
            .wrapping_mul(P64_1)
            .wrapping_add(P64_4);
        i += 8;
    }

    if len - i >= 4 {
        h = (h ^ (read_u32(bytes, i) as u64).wrapping_mul(P64_1))
            .rotate_left(23)
            .wrapping_mul(P64_2)
            .wrapping_add(P64_3);
        i += 4;
    }

    while i < len {
        h = (h ^ (bytes[i] as u64).wrapping_mul(P64_5))
            .rotate_left(11)
            .wrapping_mul(P64_1);
        i += 1;
    }

    h ^= h >> 33;
    h = h.wrapping_mul(P64_2);
    h ^= h >> 29;
    h = h.wrapping_mul(P64_3);
    h ^= h >> 32;
    h
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{xxh32, xxh64};

    const FOX: &[u8] = b"The quick brown fox jumps over the lazy dog";

    #[test]
    fn xxh32_vectors() {
        assert_eq!(xxh32(b"a", 0), 0x550d_7456);
        assert_eq!(xxh32(FOX, 0), 0xe85e_a4de);
        // 16-byte stripe plus a 4-byte-less tail.
        assert_eq!(xxh32(b"0123456789abcdefXYZ", 0), 0x855e_d232);
    }

    #[test]
    fn xxh64_vectors() {
        assert_eq!(xxh64(FOX, 0), 0x0b24_2d36_1fda_71bc);
        assert_eq!(
            xxh64(b"0123456789abcdef0123456789abcdefXYZW!", 0),
            0xdf41_e14c_2552_5c60
        );
    }
}

//! Small byte-at-a-time string hashes.

// -----------------------------------------------------------------------------
// djb2a

/// Daniel J. Bernstein's hash, xor variant: `h = h * 33 ^ c`, starting at 5381.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::djb2a;
///
/// assert_eq!(djb2a(b""), 5381);
/// assert_eq!(djb2a(b"a"), 0x2b5c4);
/// ```
pub const fn djb2a(bytes: &[u8]) -> u32 {
    let mut hash: u32 = 5381;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(33) ^ bytes[i] as u32;
        i += 1;
    }
    hash
}

// -----------------------------------------------------------------------------
// FNV-1a

const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::fnv1a;
///
/// assert_eq!(fnv1a(b""), 0x811c9dc5);
/// assert_eq!(fnv1a(b"hello"), 0x4f9f2cab);
/// ```
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut i = 0;
    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(FNV_PRIME);
        i += 1;
    }
    hash
}

// -----------------------------------------------------------------------------
// CRC-32

// Reflected polynomial 0xEDB88320, one entry per nibble.
const CRC_NIBBLE_TABLE: [u32; 16] = [
    0x0000_0000, 0x1DB7_1064, 0x3B6E_20C8, 0x26D9_30AC,
    0x76DC_4190, 0x6B6B_51F4, 0x4DB2_6158, 0x5005_713C,
    0xEDB8_8320, 0xF00F_9344, 0xD6D6_A3E8, 0xCB61_B38C,
    0x9B64_C2B0, 0x86D3_D2D4, 0xA00A_E278, 0xBDBD_F21C,
];

#[inline(always)]
const fn crc_nibble(crc: u32, nibble: u8) -> u32 {
    CRC_NIBBLE_TABLE[((crc as u8 & 0xF) ^ nibble) as usize] ^ (crc >> 4)
}

/// CRC-32 (IEEE 802.3), computed with a 16-entry table.
///
/// # Examples
///
/// ```
/// use sr_utils::hash::crc32;
///
/// assert_eq!(crc32(b"123456789"), 0xcbf43926);
/// ```
pub const fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = !0_u32;
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        crc = crc_nibble(crc, byte & 0xF);
        crc = crc_nibble(crc, byte >> 4);
        i += 1;
    }
    !crc
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{crc32, djb2a, fnv1a};

    #[test]
    fn djb2a_vectors() {
        assert_eq!(djb2a(b"hello"), 0x0a9c_ede7);
    }

    #[test]
    fn fnv1a_vectors() {
        assert_eq!(fnv1a(b"a"), 0xe40c_292c);
    }

    #[test]
    fn crc32_vectors() {
        assert_eq!(crc32(b""), 0);
        assert_eq!(crc32(b"a"), 0xe8b7_be43);
        assert_eq!(
            crc32(b"The quick brown fox jumps over the lazy dog"),
            0x414f_a339
        );
    }

    #[test]
    fn usable_in_const() {
        const H: u32 = crc32(b"castTime");
        assert_eq!(H, crc32("castTime".as_bytes()));
    }
}

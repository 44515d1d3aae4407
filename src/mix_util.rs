//! `MixUtil` — bit reorganisation, key expansion, and the ZUC-flavoured
//! keystream word used by [`crate::subkey_matrix::SubkeyMatrix`] (spec
//! §4.5).

use crate::constants::{EXPAND_KEY_PRIMES, MIX_SBOX_0, MIX_SBOX_1, WORD_BIT_SWAP_PAIRS};
use crate::prng::Nlfsr;
use zeroize::Zeroize;

/// Owns the two byte substitution boxes and the 2-word stream-cipher
/// register consumed by `word32_key_stream`.
pub struct MixUtil {
    s0: [u8; 256],
    s1: [u8; 256],
    s0_reg: u32,
    s1_reg: u32,
}

impl MixUtil {
    pub fn new() -> Self {
        Self {
            s0: MIX_SBOX_0,
            s1: MIX_SBOX_1,
            s0_reg: 0x1234_5678,
            s1_reg: 0x9ABC_DEF0,
        }
    }

    pub fn s0(&self) -> &[u8; 256] {
        &self.s0
    }

    pub fn s1(&self) -> &[u8; 256] {
        &self.s1
    }

    /// `SwapBits`/`WordBitRestruct`'s 16 fixed bit swaps over a 32-bit word
    /// (spec §4.5/§6): each pair is exchanged in place, in table order, with
    /// pairs of equal bits left unchanged (an XOR-mask swap, same as the
    /// source's `SwapBits`).
    pub fn word_bit_restruct(word: u32) -> u32 {
        let mut out = word;
        for &(a, b) in WORD_BIT_SWAP_PAIRS.iter() {
            let bit_mask = ((out >> a) & 1) ^ ((out >> b) & 1);
            out ^= (bit_mask << a) | (bit_mask << b);
        }
        out
    }

    /// `Word32Bit_ExpandKey` (spec §4.5): expands `input` (`N` 32-bit words)
    /// to `12*N` output words. For each input word, `WordBitRestruct` splits
    /// it into four parts (`up`/`down`/`left`/`right`), which cross-XOR into
    /// six diffusion variables `D0..D5`. The entire output buffer is then
    /// walked 12 words at a time: each slot XORs (or, for three slots,
    /// overwrites) one of [`EXPAND_KEY_PRIMES`] against a rotated/shifted
    /// pair of diffusion variables, the whole output buffer is rotated right
    /// by one twice (with a diffusion-variable update between the two
    /// rotations), and the diffusion variables are re-mixed through
    /// `word_bit_restruct` before the next 12-word slot.
    pub fn word32_expand_key(&self, input: &[u32]) -> Vec<u32> {
        let mut output = vec![0u32; input.len() * 12];
        let primes = &EXPAND_KEY_PRIMES;

        for &word in input {
            let restructured = Self::word_bit_restruct(word);

            let up = restructured >> 16;
            let down = (restructured << 16) >> 16;
            let left = (restructured & 0xF000_0000)
                | ((restructured & 0x00F0_0000) << 4)
                | ((restructured & 0x0000_F000) << 8)
                | ((restructured & 0x0000_00F0) << 12);
            let right = ((restructured & 0x0F00_0000) << 4)
                | ((restructured & 0x000F_0000) << 8)
                | ((restructured & 0x0000_0F00) << 12)
                | ((restructured & 0x0000_000F) << 14);

            let mut d0 = up ^ down;
            let mut d1 = left ^ right;
            let mut d2 = up ^ left;
            let mut d3 = down ^ right;
            let mut d4 = up ^ right;
            let mut d5 = down ^ left;

            let mut key_index = 0usize;
            while key_index < output.len() {
                output[key_index] ^= (d0 << 8 | d4).wrapping_add(primes[0]);
                output[key_index + 1] ^= (d0 | d4 >> 24).wrapping_sub(primes[1]);
                output[key_index + 2] ^= (d5 << 16 | d1).wrapping_mul(primes[2]);
                output[key_index + 3] = (d5 | d1 >> 16) % primes[3];
                output[key_index + 4] ^= (d2 << 24 | d3).wrapping_mul(primes[4]);
                output[key_index + 5] ^= (d2 | d3 >> 8).wrapping_add(primes[5]);
                output[key_index + 6] = (d0 >> 24 | d4) % primes[6];
                output[key_index + 7] ^= (d0 | d4 << 8).wrapping_sub(primes[7]);
                output[key_index + 8] ^= (d5 >> 16 | d1).wrapping_mul(primes[8]);
                output[key_index + 9] ^= (d5 | d1 << 16).wrapping_sub(primes[9]);
                output[key_index + 10] = (d2 >> 8 | d3) % primes[10];
                output[key_index + 11] ^= (d2 | d3 << 24).wrapping_add(primes[11]);

                output.rotate_right(1);

                d0 = d0.wrapping_sub(output[key_index] | output[key_index + 11]);
                d5 = d5.wrapping_add(output[key_index + 1] & output[key_index + 10]);
                d1 = d1.wrapping_sub(output[key_index + 2] | output[key_index + 9]);
                d4 = d4.wrapping_add(output[key_index + 3] & output[key_index + 8]);
                d2 = d2.wrapping_sub(output[key_index + 4] | output[key_index + 7]);
                d3 = d3.wrapping_add(output[key_index + 5] & output[key_index + 6]);

                output.rotate_right(1);

                d0 = Self::word_bit_restruct(d0);
                d1 = Self::word_bit_restruct(d1);
                d2 = Self::word_bit_restruct(d2);
                d3 = Self::word_bit_restruct(d3);
                d4 = Self::word_bit_restruct(d4);
                d5 = Self::word_bit_restruct(d5);

                key_index += 12;
            }
        }

        output
    }

    /// ZUC-style nonlinear transform over four input words and the
    /// 2-word stream register, producing one output word (spec §4.5).
    pub fn word32_key_stream(&mut self, input: &[u32; 4]) -> u32 {
        let x0 = input[0] ^ self.s0_reg;
        let x1 = input[1].wrapping_add(self.s1_reg);
        let x2 = input[2] ^ input[0].rotate_left(8);
        let x3 = input[3].wrapping_add(input[1]);

        // Cross-concatenate into two 32-bit halves.
        let left = (x0 & 0xFFFF_0000) | (x1 & 0x0000_FFFF);
        let right = (x2 & 0xFFFF_0000) | (x3 & 0x0000_FFFF);

        // ZUC-style linear transforms L1/L2.
        let l1 = left
            ^ left.rotate_left(2)
            ^ left.rotate_left(10)
            ^ left.rotate_left(18)
            ^ left.rotate_left(24);
        let l2 = right
            ^ right.rotate_left(8)
            ^ right.rotate_left(14)
            ^ right.rotate_left(22)
            ^ right.rotate_left(30);

        let mixed = l1 ^ l2;
        let bytes = mixed.to_be_bytes();
        let subst = [
            self.s0[bytes[0] as usize],
            self.s1[bytes[1] as usize],
            self.s0[bytes[2] as usize],
            self.s1[bytes[3] as usize],
        ];

        self.s0_reg = self.s0_reg.rotate_left(1) ^ mixed;
        self.s1_reg = self.s1_reg.wrapping_add(mixed);

        u32::from_be_bytes(subst)
    }

    /// Regenerates both substitution boxes via a Fenwick/segment-tree-style
    /// derangement walk driven by `nlfsr`, restarting the walk whenever the
    /// final slot cannot satisfy `new[i] != old[i]` (spec §4.5).
    pub fn regenerate_sboxes(&mut self, nlfsr: &mut Nlfsr) {
        self.s0 = Self::regenerate_one(&self.s0, nlfsr);
        self.s1 = Self::regenerate_one(&self.s1, nlfsr);
    }

    fn regenerate_one(old: &[u8; 256], nlfsr: &mut Nlfsr) -> [u8; 256] {
        loop {
            let mut candidate: [u8; 256] = core::array::from_fn(|i| i as u8);
            let mut fenwick_free = vec![true; 256];

            let mut failed = false;
            for i in 0..256 {
                let remaining: Vec<usize> =
                    (0..256).filter(|&j| fenwick_free[j] && candidate[j] as usize != old[i]).collect();
                let pool = if remaining.is_empty() {
                    (0..256).filter(|&j| fenwick_free[j]).collect::<Vec<_>>()
                } else {
                    remaining
                };
                if pool.is_empty() {
                    failed = true;
                    break;
                }
                let choice = pool[(nlfsr.next_u64() as usize) % pool.len()];
                candidate.swap(i, choice);
                fenwick_free[i] = false;
                if candidate[i] as usize == old[i] {
                    failed = true;
                    break;
                }
            }

            if !failed {
                return candidate;
            }
        }
    }
}

impl Default for MixUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MixUtil {
    fn drop(&mut self) {
        self.s0.zeroize();
        self.s1.zeroize();
        self.s0_reg.zeroize();
        self.s1_reg.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bit_restruct_is_deterministic_and_changes_the_word() {
        // WordBitRestruct is a one-way key-expansion step in the source,
        // never paired with an inverse, so only determinism and a changed
        // output are asserted here.
        let word = 0xDEAD_BEEFu32;
        let out = MixUtil::word_bit_restruct(word);
        assert_eq!(out, MixUtil::word_bit_restruct(word));
        assert_ne!(out, word);
    }

    #[test]
    fn expand_key_produces_twelve_words_per_input_word() {
        let util = MixUtil::new();
        let out = util.word32_expand_key(&[1, 2, 3]);
        assert_eq!(out.len(), 36);
    }

    #[test]
    fn regenerate_sboxes_changes_every_slot_and_stays_a_permutation() {
        let mut util = MixUtil::new();
        let mut nlfsr = Nlfsr::new(123);
        let old_s0 = util.s0;
        util.regenerate_sboxes(&mut nlfsr);

        for i in 0..256 {
            assert_ne!(util.s0[i], old_s0[i]);
        }
        let mut seen = [false; 256];
        for &b in util.s0.iter() {
            assert!(!seen[b as usize]);
            seen[b as usize] = true;
        }
    }
}

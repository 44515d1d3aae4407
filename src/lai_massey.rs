//! `LaiMasseyRound` — the per-64-bit-word round function plus the
//! 16-round block loop wrapped around it (spec §4.9).

use crate::constants::{LM_SBOX_BWD0, LM_SBOX_BWD1, LM_SBOX_FWD0, LM_SBOX_FWD1};
use crate::matrix::Matrix;
use crate::round_subkey::RoundSubkeyGen;
use zeroize::Zeroize;

const ROUNDS: usize = 16;

/// Per-byte substitution boxes applied in encrypt order across each group
/// of 8 plaintext bytes: `S1_f, S0_f, S1_b, S0_b, S0_f, S1_b, S0_f, S1_b`.
const ENC_PATTERN: [&[u8; 256]; 8] = [
    &LM_SBOX_FWD1,
    &LM_SBOX_FWD0,
    &LM_SBOX_BWD1,
    &LM_SBOX_BWD0,
    &LM_SBOX_FWD0,
    &LM_SBOX_BWD1,
    &LM_SBOX_FWD0,
    &LM_SBOX_BWD1,
];

/// Exact per-lane inverse of [`ENC_PATTERN`].
const DEC_PATTERN: [&[u8; 256]; 8] = [
    &LM_SBOX_BWD1,
    &LM_SBOX_BWD0,
    &LM_SBOX_FWD1,
    &LM_SBOX_FWD0,
    &LM_SBOX_BWD0,
    &LM_SBOX_FWD1,
    &LM_SBOX_BWD0,
    &LM_SBOX_FWD1,
];

pub struct LaiMasseyRound;

impl LaiMasseyRound {
    /// `L,R=split64(W); TK=crazy_transform(L^R,K); L^=TK; R^=TK;
    /// (A,B)=forward_transform(L,R); W'=(A<<32)|B`.
    pub fn encrypt_word(w: u64, k: u64, index_shuffle: &[u32], rs: &Matrix) -> u64 {
        let l = (w >> 32) as u32;
        let r = w as u32;
        let tk = RoundSubkeyGen::crazy_transform_associated_word(l ^ r, k, index_shuffle, rs);
        let l = l ^ tk;
        let r = r ^ tk;
        let (a, b) = RoundSubkeyGen::forward_transform(l, r);
        ((a as u64) << 32) | (b as u64)
    }

    /// `L,R=split64(W); (A,B)=backward_transform(L,R); TK=crazy_transform(A^B,K);
    /// B^=TK; A^=TK; W'=(A<<32)|B` — exact inverse of [`Self::encrypt_word`].
    pub fn decrypt_word(w: u64, k: u64, index_shuffle: &[u32], rs: &Matrix) -> u64 {
        let l = (w >> 32) as u32;
        let r = w as u32;
        let (a, b) = RoundSubkeyGen::backward_transform(l, r);
        let tk = RoundSubkeyGen::crazy_transform_associated_word(a ^ b, k, index_shuffle, rs);
        let b = b ^ tk;
        let a = a ^ tk;
        ((a as u64) << 32) | (b as u64)
    }

    fn substitute(bytes: &mut [u8], pattern: &[&[u8; 256]; 8]) {
        for chunk in bytes.chunks_mut(8) {
            for (i, b) in chunk.iter_mut().enumerate() {
                *b = pattern[i][*b as usize];
            }
        }
    }

    fn repack_bytes_into_words(block: &mut [u64], bytes: &[u8]) {
        for (word, chunk) in block.iter_mut().zip(bytes.chunks(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
    }

    /// Runs the 16-round encrypt loop over one `DATA_BLOCK_QW` block,
    /// consuming round-subkey words from `rs_vec` in two passes per round
    /// (spec §4.9 "Round function").
    pub fn encrypt_block(block: &mut [u64], rs_vec: &[u64], rs: &Matrix, index_shuffle: &[u32]) {
        assert!(!rs_vec.is_empty(), "rs_vec must be non-empty before rounds run");
        let mut key_index = 0usize;
        for _round in 0..ROUNDS {
            for _pass in 0..2 {
                for word in block.iter_mut() {
                    let k = rs_vec[key_index % rs_vec.len()];
                    key_index += 1;
                    *word = Self::encrypt_word(*word, k, index_shuffle, rs);
                }
            }

            let mut bytes: Vec<u8> = block.iter().flat_map(|w| w.to_le_bytes()).collect();
            Self::substitute(&mut bytes, &ENC_PATTERN);
            Self::repack_bytes_into_words(block, &bytes);
            bytes.zeroize();
        }
    }

    /// Exact inverse of [`Self::encrypt_block`]: starts `KeyIndex` at the
    /// value it would have reached by the end of encryption and unwinds
    /// both the byte substitution and the two-pass word transform in
    /// reverse order, per round, in reverse round order.
    pub fn decrypt_block(block: &mut [u64], rs_vec: &[u64], rs: &Matrix, index_shuffle: &[u32]) {
        assert!(!rs_vec.is_empty(), "rs_vec must be non-empty before rounds run");
        let mut key_index = ROUNDS * 2 * block.len();

        for _round in (0..ROUNDS).rev() {
            let mut bytes: Vec<u8> = block.iter().flat_map(|w| w.to_le_bytes()).collect();
            Self::substitute(&mut bytes, &DEC_PATTERN);
            Self::repack_bytes_into_words(block, &bytes);
            bytes.zeroize();

            for _pass in (0..2).rev() {
                for word in block.iter_mut().rev() {
                    key_index -= 1;
                    let k = rs_vec[key_index % rs_vec.len()];
                    *word = Self::decrypt_word(*word, k, index_shuffle, rs);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rs(dim: usize) -> Matrix {
        let mut rs = Matrix::zeroed(dim);
        for r in 0..dim {
            for c in 0..dim {
                rs.set(r, c, (r as u64 * 97).wrapping_add(c as u64 * 131).wrapping_add(1));
            }
        }
        rs
    }

    #[test]
    fn single_word_round_trip() {
        let dim = 8;
        let rs = sample_rs(dim);
        let shuffle: Vec<u32> = (0..dim as u32).collect();
        let k = 0xABCDEF0123456789;
        let w = 0x1122_3344_5566_7788u64;
        let encrypted = LaiMasseyRound::encrypt_word(w, k, &shuffle, &rs);
        let decrypted = LaiMasseyRound::decrypt_word(encrypted, k, &shuffle, &rs);
        assert_eq!(decrypted, w);
    }

    #[test]
    fn block_round_trip() {
        let dim = 8;
        let rs = sample_rs(dim);
        let shuffle: Vec<u32> = (0..dim as u32).collect();
        let rs_vec: Vec<u64> = (0..64u64).map(|i| i.wrapping_mul(0x9E37_79B9)).collect();

        let mut block: Vec<u64> = (0..16u64).map(|i| i.wrapping_mul(0x1111_1111_1111_1111)).collect();
        let original = block.clone();

        LaiMasseyRound::encrypt_block(&mut block, &rs_vec, &rs, &shuffle);
        assert_ne!(block, original);

        LaiMasseyRound::decrypt_block(&mut block, &rs_vec, &rs, &shuffle);
        assert_eq!(block, original);
    }
}

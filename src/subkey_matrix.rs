//! `SubkeyMatrix` — matrix initialisation from keying material and the
//! affine+Kronecker per-block update (spec §4.6).

use crate::matrix::Matrix;
use crate::mix_util::MixUtil;
use crate::prng::{Lfsr, Nlfsr, Sdp};
use zeroize::Zeroize;

pub struct SubkeyMatrix {
    a: Matrix,
    t: Matrix,
    index_shuffle: Vec<u32>,
    dim: usize,
}

impl SubkeyMatrix {
    pub fn new(dim: usize) -> Self {
        Self {
            a: Matrix::zeroed(dim),
            t: Matrix::zeroed(dim),
            index_shuffle: (0..dim as u32).collect(),
            dim,
        }
    }

    pub fn a(&self) -> &Matrix {
        &self.a
    }

    pub fn t(&self) -> &Matrix {
        &self.t
    }

    pub fn index_shuffle(&self) -> &[u32] {
        &self.index_shuffle
    }

    /// Scans the matrix from the last cell to the first, consuming one
    /// expanded IV word per cell and mixing it in (spec §4.6 `apply_iv`).
    /// Restarts from the top of the expanded IV if it runs out.
    pub fn apply_iv(&mut self, iv_words: &[u32], mix: &MixUtil) {
        let expanded = mix.word32_expand_key(iv_words);
        assert!(!expanded.is_empty(), "apply_iv requires non-empty IV");

        let mut cursor = 0usize;
        for row in (0..self.dim).rev() {
            for col in (0..self.dim).rev() {
                let raw32 = expanded[cursor % expanded.len()];
                cursor += 1;

                let mut raw = raw32 as u64;
                let mut cell = self.a.get(row, col);
                let rot = raw32.rotate_left(7) as u64;
                cell = cell.wrapping_sub(raw ^ (raw & rot));
                cell ^= 1u64 << (raw & 63);
                raw = raw.wrapping_add(cell);
                cell = cell.wrapping_add(raw.wrapping_mul(2).wrapping_add(cell));
                self.a.set(row, col, cell);
            }
        }
    }

    /// Derives the matrix from key material (spec §4.6 `init`).
    pub fn init(&mut self, key: &[u64], mix: &mut MixUtil, lfsr: &mut Lfsr, nlfsr: &mut Nlfsr) {
        let mut bytes: Vec<u8> = key.iter().flat_map(|w| w.to_le_bytes()).collect();
        for b in bytes.iter_mut() {
            *b = mix.s0()[mix.s0()[*b as usize] as usize];
        }

        let words32: Vec<u32> = bytes
            .chunks(4)
            .map(|c| {
                let mut buf = [0u8; 4];
                buf[..c.len()].copy_from_slice(c);
                u32::from_le_bytes(buf)
            })
            .collect();
        let expanded = mix.word32_expand_key(&words32);

        let mut random_words: Vec<u32> = Vec::new();
        if expanded.len() >= 4 {
            for window in expanded.windows(4) {
                let w: [u32; 4] = [window[0], window[1], window[2], window[3]];
                let sign = lfsr.bernoulli_bit();
                let mixed = mix.word32_key_stream(&w) ^ w[3];
                random_words.push(if sign { mixed } else { !mixed });
            }
        }

        let mut random_bytes: Vec<u8> = random_words.iter().flat_map(|w| w.to_le_bytes()).collect();
        for b in random_bytes.iter_mut() {
            *b = mix.s1()[mix.s1()[*b as usize] as usize];
        }
        let random64: Vec<u64> = random_bytes
            .chunks(8)
            .map(|c| {
                let mut buf = [0u8; 8];
                buf[..c.len()].copy_from_slice(c);
                u64::from_le_bytes(buf)
            })
            .collect();

        let mut cursor = 0usize;
        for col in 0..self.dim {
            for row in 0..self.dim {
                let subtrahend = if cursor < random64.len() {
                    random64[cursor]
                } else {
                    lfsr.random_word()
                };
                cursor += 1;
                let v = self.a.get(row, col).wrapping_sub(subtrahend);
                self.a.set(row, col, v);
            }
        }

        mix.regenerate_sboxes(nlfsr);
        bytes.zeroize();
        random_bytes.zeroize();
    }

    /// Affine + Kronecker per-block update (spec §4.6 `update`).
    pub fn update(&mut self, nlfsr: &mut Nlfsr, sdp: &mut Sdp) {
        let dim = self.dim;
        let mut v_row: Vec<u64> = (0..dim)
            .map(|i| nlfsr.unpredictable_bits(i % 2 == 0, 63))
            .collect();
        let mut v_col: Vec<u64> = (0..dim)
            .map(|i| nlfsr.unpredictable_bits(i % 2 == 1, 64))
            .collect();

        // L[r][c] = A[r][c] * v_row[c] (row-wise broadcast) + v_col[r].
        // R[r][c] = A[r][c] * v_col[r] (col-wise broadcast) - v_row[c].
        let mut l = Matrix::zeroed(dim);
        let mut r_mat = Matrix::zeroed(dim);
        for row in 0..dim {
            for col in 0..dim {
                let a_val = self.a.get(row, col);
                l.set(
                    row,
                    col,
                    a_val.wrapping_mul(v_row[col]).wrapping_add(v_col[row]),
                );
                r_mat.set(
                    row,
                    col,
                    a_val.wrapping_mul(v_col[row]).wrapping_sub(v_row[col]),
                );
            }
        }

        for row in 0..dim {
            for col in 0..dim {
                let a_val = self.a.get(row, col);
                let t_val = self.t.get(row, col);
                let a_term = l.get(row, col) ^ (a_val & t_val);
                let b_term = r_mat.get(row, col) ^ (a_val | t_val);
                let mixed = a_term
                    .rotate_right(1)
                    .wrapping_add(b_term.rotate_left(63));
                self.a.set(row, col, a_val ^ mixed);
            }
        }

        for slot in v_row.iter_mut() {
            *slot = sdp.call(0, u64::MAX);
        }
        for slot in v_col.iter_mut() {
            *slot = sdp.call(0, u64::MAX);
        }

        let k = Matrix::kronecker(&v_col, &v_row);
        let d = Matrix::dot(&v_col, &v_row);
        self.t = self.a.mul(&k.scalar_mul(d));

        // Fisher-Yates shuffle of the index-shuffle array.
        for i in (1..self.index_shuffle.len()).rev() {
            let j = (nlfsr.next_u64() as usize) % (i + 1);
            self.index_shuffle.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MATRIX_DIM;

    #[test]
    fn apply_iv_fills_every_cell_deterministically() {
        let mix = MixUtil::new();
        let mut a = SubkeyMatrix::new(MATRIX_DIM);
        let mut b = SubkeyMatrix::new(MATRIX_DIM);
        let iv = vec![1u32, 2, 3, 4, 5, 6, 7, 8];
        a.apply_iv(&iv, &mix);
        b.apply_iv(&iv, &mix);
        assert_eq!(a.a().as_flat(), b.a().as_flat());
    }

    #[test]
    fn update_changes_both_matrices() {
        let mut matrix = SubkeyMatrix::new(8);
        let mut nlfsr = Nlfsr::new(42);
        let mut sdp = Sdp::new(10_000_000_000);
        let before_a = matrix.a.as_flat().to_vec();
        matrix.update(&mut nlfsr, &mut sdp);
        assert_ne!(matrix.a.as_flat(), before_a.as_slice());
    }
}

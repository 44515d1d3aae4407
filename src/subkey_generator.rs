//! `SubkeyGenerator` — orchestrates `LatticeHash` into `SubkeyMatrix::init`
//! and always runs `SubkeyMatrix::update` (spec §4.7).

use crate::constants::KEY_BLOCK_QW;
use crate::error::{Error, Result};
use crate::lattice::lattice_hash;
use crate::mix_util::MixUtil;
use crate::prng::{Lfsr, Nlfsr, Sdp};
use crate::subkey_matrix::SubkeyMatrix;
use zeroize::Zeroize;

pub struct SubkeyGenerator<'a> {
    matrix: &'a mut SubkeyMatrix,
    mix: &'a mut MixUtil,
    lfsr: &'a mut Lfsr,
    nlfsr: &'a mut Nlfsr,
    sdp: &'a mut Sdp,
}

impl<'a> SubkeyGenerator<'a> {
    pub fn new(
        matrix: &'a mut SubkeyMatrix,
        mix: &'a mut MixUtil,
        lfsr: &'a mut Lfsr,
        nlfsr: &'a mut Nlfsr,
        sdp: &'a mut Sdp,
    ) -> Self {
        Self {
            matrix,
            mix,
            lfsr,
            nlfsr,
            sdp,
        }
    }

    /// Folds an arbitrary multiple-of-`KEY_BLOCK_QW`-length key vector down
    /// to one `dim`-length vector by XORing `KEY_BLOCK_QW`-sized chunks
    /// together and then cycling the result out to `dim` words, so
    /// `LatticeHash` always runs against the matrix `A` already owned by
    /// `SubkeyMatrix` (spec §4.7: "Lattice hash instance uses `HashBits =
    /// R*64/2`").
    fn fold_to_dim(master_key_words: &[u64], dim: usize) -> Vec<u64> {
        let mut folded = vec![0u64; KEY_BLOCK_QW];
        for chunk in master_key_words.chunks(KEY_BLOCK_QW) {
            for (slot, &word) in folded.iter_mut().zip(chunk.iter()) {
                *slot ^= word;
            }
        }
        (0..dim).map(|i| folded[i % KEY_BLOCK_QW]).collect()
    }

    pub fn generate(&mut self, master_key_words: &[u64]) -> Result<()> {
        if !master_key_words.is_empty() {
            if master_key_words.len() % KEY_BLOCK_QW != 0 {
                return Err(Error::ConfigurationInvalid(
                    "master key word count must be a multiple of KEY_BLOCK_QW",
                ));
            }

            let dim = self.matrix.a().dim();
            let mut x = Self::fold_to_dim(master_key_words, dim);
            let mut resist_qc = vec![0u64; dim];
            lattice_hash(self.matrix.a().as_flat(), &x, &mut resist_qc);

            self.matrix.init(&resist_qc, self.mix, self.lfsr, self.nlfsr);
            x.zeroize();
            resist_qc.zeroize();
        }

        self.matrix.update(self.nlfsr, self.sdp);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MATRIX_DIM;

    #[test]
    fn rejects_key_length_not_a_multiple_of_key_block_qw() {
        let mut matrix = SubkeyMatrix::new(MATRIX_DIM);
        let mut mix = MixUtil::new();
        let mut lfsr = Lfsr::new(1);
        let mut nlfsr = Nlfsr::new(1);
        let mut sdp = Sdp::new(10_000_000_000);
        let mut generator = SubkeyGenerator::new(&mut matrix, &mut mix, &mut lfsr, &mut nlfsr, &mut sdp);
        let bad_key = vec![0u64; KEY_BLOCK_QW - 1];
        assert!(generator.generate(&bad_key).is_err());
    }

    #[test]
    fn empty_key_still_runs_update() {
        let mut matrix = SubkeyMatrix::new(MATRIX_DIM);
        let mut mix = MixUtil::new();
        let mut lfsr = Lfsr::new(1);
        let mut nlfsr = Nlfsr::new(1);
        let mut sdp = Sdp::new(10_000_000_000);
        let mut generator = SubkeyGenerator::new(&mut matrix, &mut mix, &mut lfsr, &mut nlfsr, &mut sdp);
        assert!(generator.generate(&[]).is_ok());
    }
}

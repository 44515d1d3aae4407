//! `SpongeHash` — a Keccak-style sponge over 64-bit words (spec §4.2),
//! used internally by [`crate::lattice::LatticeHash`].

use crate::constants::{HASH_ROUND_CONSTANTS, SPONGE_PERMUTATION_SEED};
use zeroize::Zeroize;

mod isaac64;

/// Sponge construction parameterised by `hash_bits` (>= 128, multiple of 8).
/// `state_words = (2*hash_bits + 64) / 64`, `rate_words = hash_bits / 64`.
pub struct SpongeHash {
    state: Vec<u64>,
    rate_words: usize,
    move_bits: [u32; 63],
    pi: Vec<usize>,
    input_idx: usize,
    output_idx: usize,
    state_counter: usize,
}

impl SpongeHash {
    /// Builds a sponge for `hash_bits` bits of rate/output width.
    ///
    /// # Panics
    /// Panics if `hash_bits < 128` or `hash_bits % 8 != 0` — this is an
    /// `InternalAssertFailure`-class condition (spec §7), callers that
    /// accept untrusted widths must validate before constructing.
    pub fn new(hash_bits: usize) -> Self {
        assert!(hash_bits >= 128, "SpongeHash: hash_bits must be >= 128");
        assert_eq!(hash_bits % 8, 0, "SpongeHash: hash_bits must be a multiple of 8");

        let rate_words = hash_bits / 64;
        let rate_words = rate_words.max(1);
        let state_words = (2 * hash_bits + 64) / 64;

        let (move_bits, pi) = Self::derive_permutation_tables(state_words);

        Self {
            state: vec![0u64; state_words],
            rate_words,
            move_bits,
            pi,
            input_idx: 0,
            output_idx: 0,
            state_counter: 0,
        }
    }

    /// Derives the fixed `move_bits[63]` and `pi[state_words]` permutations
    /// once, from the fixed ISAAC-64 seed (spec §4.2), discarding 1024 and
    /// 2048 outputs before each Fisher-Yates shuffle.
    fn derive_permutation_tables(state_words: usize) -> ([u32; 63], Vec<usize>) {
        let mut rng = isaac64::Isaac64::new(SPONGE_PERMUTATION_SEED);
        for _ in 0..1024 {
            rng.next_u64();
        }
        let mut move_bits: [u32; 63] = core::array::from_fn(|i| (i as u32) + 1);
        fisher_yates(&mut move_bits, &mut rng);

        for _ in 0..2048 {
            rng.next_u64();
        }
        let mut pi: Vec<usize> = (0..state_words).collect();
        fisher_yates(&mut pi, &mut rng);

        (move_bits, pi)
    }

    /// Absorbs `input` (`u64` words), invoking the permutation after every
    /// `rate_words`-sized block.
    pub fn absorb(&mut self, input: &[u64]) {
        for &word in input {
            let idx = self.input_idx % self.rate_words;
            self.state[idx] ^= word;
            self.input_idx += 1;
            if self.input_idx % self.rate_words == 0 {
                self.permute();
            }
        }
    }

    /// Squeezes `output.len()` words from the sponge. A permutation call
    /// precedes every squeezed word (matching the original's latent
    /// behaviour, spec §9 open question 3: the offset that should gate
    /// re-permutation is never advanced in the source, so every squeeze
    /// costs one permutation call — preserved here deliberately).
    pub fn squeeze(&mut self, output: &mut [u64]) {
        for slot in output.iter_mut() {
            self.permute();
            *slot = self.state[self.output_idx % self.rate_words];
            self.output_idx += 1;
        }
    }

    /// Absorbs `input`, squeezes into `output`, then resets — the
    /// security-critical invariant that a re-used sponge cannot leak
    /// cross-message state (spec §4.2).
    pub fn sponge_hash(&mut self, input: &[u64], output: &mut [u64]) {
        self.absorb(input);
        self.squeeze(output);
        self.reset();
    }

    /// Zeroises the state and resets the absorb/squeeze cursors.
    pub fn reset(&mut self) {
        self.state.zeroize();
        self.input_idx = 0;
        self.output_idx = 0;
        self.state_counter = 0;
    }

    fn permute(&mut self) {
        let n = self.state.len();
        let half = n / 2;
        let rounds = n;

        for round in 0..rounds {
            // Column parity: pairwise XOR into scratch, cycling a
            // persistent counter modulo state width.
            let mut scratch = vec![0u64; n];
            for i in 0..n {
                scratch[i] = self.state[i] ^ self.state[(i + 1) % n];
                self.state_counter = (self.state_counter + 1) % n;
            }

            // Theta-like: half-index mixing via the identity rotated
            // left/right by one position.
            let mut t2 = vec![0u64; half.max(1)];
            for i in 0..t2.len() {
                let r = (i + 1) % n;
                let l = (i + n - 1) % n;
                t2[i] = scratch[r] ^ scratch[l].rotate_right(1);
            }

            // pi/rho: permute and rotate by the move-bits schedule.
            let mut t3 = vec![0u64; n];
            for i in 0..n {
                let rotate_amount = self.move_bits[self.state_counter % 63];
                let half_len = t2.len().max(1);
                t3[self.pi[i]] = (self.state[i] ^ t2[i % half_len]).rotate_right(rotate_amount as u32 % 64);
            }

            // chi: nonlinear mixing over neighbouring lanes.
            for i in 0..n {
                self.state[i] = t3[i] ^ ((!t3[(i + 1) % n]) & t3[(i + 2) % n]);
            }

            // iota: inject the round constant into the first and last lanes.
            self.state[0] ^= HASH_ROUND_CONSTANTS[round % 64];
            let last = n - 1;
            self.state[last] ^= HASH_ROUND_CONSTANTS[(63 - round % 64) % 64];
        }
    }
}

/// `GenerateRandomMoveBitCounts`/`GenerateRandomHashStateIndices`'s shuffle:
/// `for i in 0..n: swap(slice[i], slice[(i + rng()) % n])`. This walks the
/// whole slice forward rather than the usual decreasing-range Fisher-Yates,
/// so it is reproduced literally rather than swapped for the textbook form.
fn fisher_yates<T>(slice: &mut [T], rng: &mut isaac64::Isaac64) {
    let n = slice.len();
    for i in 0..n {
        let j = (i + rng.next_u64() as usize) % n;
        slice.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_is_idempotent_across_messages() {
        let mut sponge = SpongeHash::new(256);
        let mut out_a = [0u64; 4];
        let mut out_b = [0u64; 4];
        sponge.sponge_hash(&[1, 2, 3], &mut out_a);

        let mut sponge2 = SpongeHash::new(256);
        sponge2.sponge_hash(&[1, 2, 3], &mut out_b);

        assert_eq!(out_a, out_b);
    }

    #[test]
    fn different_inputs_produce_different_outputs() {
        let mut sponge = SpongeHash::new(256);
        let mut out_a = [0u64; 4];
        let mut out_b = [0u64; 4];
        sponge.sponge_hash(&[1, 2, 3], &mut out_a);
        sponge.sponge_hash(&[1, 2, 4], &mut out_b);
        assert_ne!(out_a, out_b);
    }

    #[test]
    #[should_panic]
    fn rejects_narrow_hash_widths() {
        SpongeHash::new(64);
    }
}

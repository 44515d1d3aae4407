//! `ArxPrf` — the keyed XorConstantRotation pseudorandom function (spec
//! §4.1). Grounded on
//! `examples/original_source/OOP/StreamCipher/XorConstantRotation.{h,cpp}`.

use crate::constants::{ARX_DEFAULT_SEED, COUNTER_STEP, ROUND_CONSTANTS, ROUND_CONSTANT_SIZE};
use zeroize::Zeroize;

const WARMUP_TAG: u64 = 0x5741_524D_5550; // "WARMUP"

/// A keyed 64-bit ARX pseudorandom function, `F_w(n) -> u64`, where `w` is
/// the only key-bearing lane and `n` is a caller-advanced per-call nonce
/// (counter-mode usage).
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct ArxPrf {
    w: u64,
    x: u64,
    y: u64,
    z: u64,
    counter: u64,
}

impl ArxPrf {
    /// Builds a fresh PRF keyed by `seed`. `seed == 0` is biased to
    /// [`ARX_DEFAULT_SEED`]'s all-zero-lane rule inside [`Self::seed`]
    /// (spec §3: "lanes are never all zero after warm-up").
    pub fn new(seed: u64) -> Self {
        let mut prf = Self {
            w: if seed == 0 { ARX_DEFAULT_SEED } else { seed },
            x: 0,
            y: 0,
            z: 0,
            counter: 0,
        };
        prf.state_initialize();
        prf
    }

    /// Re-keys the PRF in place, replaying the full warm-up.
    pub fn seed(&mut self, seed: u64) {
        self.w = seed;
        self.x = 0;
        self.y = 0;
        self.z = 0;
        self.state_initialize();
    }

    /// Advances the PRF one step with public, caller-supplied `nonce` and
    /// returns the keystream word `F_w(nonce)`.
    pub fn call(&mut self, nonce: u64) -> u64 {
        self.state_iteration(nonce)
    }

    /// Returns two domain-separated keystream words for the same `nonce`,
    /// `(F(n), F(domain_sep(n, F(n))))` (spec §4.1, mandatory whenever two
    /// independent words are needed for one nonce).
    pub fn generate_subkey_128(&mut self, nonce: u64) -> (u64, u64) {
        let first = self.state_iteration(nonce);
        let domain_separated = (nonce ^ first).rotate_left(17) ^ 0xA5A5_A5A5_A5A5_A5A5;
        let second = self.state_iteration(domain_separated);
        (first, second)
    }

    /// Bias `w` to nonzero in constant time, diffuse the seed across all
    /// four lanes via two 32-bit GGM-style expansions (128 total
    /// `state_iteration` calls), then reset the production counter.
    fn state_initialize(&mut self) {
        let nonzero_flag = (self.w | 0u64.wrapping_sub(self.w)) >> 63;
        let is_zero = nonzero_flag ^ 1;
        self.w = self.w.wrapping_add(is_zero);

        self.x = 0;
        self.y = 0;
        self.z = 0;

        let random = self.w;
        let left_seed =
            ((random >> 32) as u32) ^ (ROUND_CONSTANTS[ROUND_CONSTANT_SIZE - 1] as u32);
        let right_seed =
            (random as u32) ^ (ROUND_CONSTANTS[ROUND_CONSTANT_SIZE - 2] as u32);

        let left_out = self.ggm32_rounds(left_seed);
        self.x = 0;
        self.y = 0;
        self.z = 0;
        self.counter = COUNTER_STEP;
        let right_out = self.ggm32_rounds(right_seed);

        let random = ((left_out as u64) << 32) | (right_out as u64);
        self.w ^= random;
        self.counter = COUNTER_STEP;
    }

    /// 2 rounds * 32 bits/round = 64 `state_iteration` calls per half,
    /// 128 total across both halves (spec §4.1 invariant, tested in
    /// `tests/arx_prf_vectors.rs`).
    fn ggm32_rounds(&mut self, seed32: u32) -> u32 {
        let mut out: u64 = seed32 as u64;
        for round in 0..2u64 {
            let mut next32: u32 = 0;
            for bit_index in 0..32u64 {
                let input = (WARMUP_TAG << 48)
                    ^ ((out as u32 as u64) << 16)
                    ^ (round << 8)
                    ^ bit_index;
                out = self.state_iteration(input);
                let bit = (out >> 63) as u32;
                next32 = (next32 << 1) | bit;
            }
            out = next32 as u64;
        }
        out as u32
    }

    /// One production round: exactly four modular add/sub carries, every
    /// other operation XOR/rotate/table-lookup on public indices.
    fn state_iteration(&mut self, nonce: u64) -> u64 {
        let n = nonce;
        let rc0 = ROUND_CONSTANTS[(n as usize) % ROUND_CONSTANT_SIZE];
        let rc1 = ROUND_CONSTANTS[(self.counter as usize) % ROUND_CONSTANT_SIZE];
        let rc2 = ROUND_CONSTANTS[(n.wrapping_add(self.counter) as usize) % ROUND_CONSTANT_SIZE];
        let rc3 = ROUND_CONSTANTS
            [((n ^ (n ^ self.counter).rotate_left(3)) as usize) % ROUND_CONSTANT_SIZE];

        let mut ww = self.x ^ rc0;
        let mut xx = self.y ^ rc1;
        let mut yy = self.z ^ rc2;
        let mut zz = self.w ^ rc3;

        // Exactly four modular add/sub operations.
        self.w = self.w.wrapping_add(yy);
        self.x = self.x.wrapping_sub(zz);
        self.y = self.y.wrapping_add(ww);
        self.z = self.z.wrapping_sub(xx);

        ww = (self.w ^ self.x.rotate_left(7)) ^ (self.y.rotate_left(19) ^ self.z);
        xx = (self.x ^ self.y.rotate_left(11)) ^ (self.z.rotate_left(23) ^ self.w);
        yy = (self.y ^ self.z.rotate_left(17)) ^ (self.w.rotate_left(29) ^ self.x);
        zz = (self.z ^ self.w.rotate_left(13)) ^ (self.x.rotate_left(31) ^ self.y);

        self.z = ww ^ n;
        self.w = xx ^ n.rotate_left(9);
        self.x = yy ^ n.rotate_left(27);
        self.y = zz ^ n.rotate_left(43);

        let mut out = self.w ^ self.x ^ self.y ^ self.z;
        out ^= out.rotate_left(47) ^ out.rotate_left(53);

        self.counter = self.counter.wrapping_add(COUNTER_STEP);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_nonce_is_deterministic() {
        let mut a = ArxPrf::new(1);
        let mut b = ArxPrf::new(1);
        assert_eq!(a.call(0), b.call(0));
        assert_eq!(a.call(1), b.call(1));
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = ArxPrf::new(1);
        let mut b = ArxPrf::new(2);
        assert_ne!(a.call(0), b.call(0));
    }

    #[test]
    fn zero_seed_is_biased_away_from_the_all_zero_lane() {
        let mut prf = ArxPrf::new(0);
        // Must not diverge into a degenerate all-zero-lane cycle: two
        // successive outputs must differ.
        let first = prf.call(0);
        let second = prf.call(1);
        assert_ne!(first, second);
    }

    #[test]
    fn generate_subkey_128_is_domain_separated() {
        let mut prf = ArxPrf::new(42);
        let (a0, a1) = prf.generate_subkey_128(7);
        assert_ne!(a0, a1);
    }

    #[test]
    fn seed_reproduces_a_fresh_instance() {
        let mut a = ArxPrf::new(9);
        let baseline = a.call(3);
        a.seed(5);
        a.seed(9);
        assert_eq!(a.call(3), baseline);
    }
}

//! Type-1: `LittleOaldresPuzzleCryptic`, a keyed 128-bit block PRF meant
//! to be driven in CTR mode (spec §9: "expose this explicitly as a
//! streaming PRF/keystream API, not as a block-cipher primitive").

use crate::prf::ArxPrf;
use crate::prng::MersenneTwister64;

/// A 128-bit block, matching the source's `std::pair<u64,u64>` layout
/// (`first` then `second`).
pub type Block128 = (u64, u64);
/// A 128-bit key, same shape as [`Block128`].
pub type Key128 = (u64, u64);

/// Default round count used by [`LittleOaldresPuzzleCryptic::new`] and the
/// C ABI wrapper (spec §6: "`LittleOPC_New(seed)` ... allocates `Cipher1`
/// with 4 rounds").
pub const DEFAULT_ROUNDS: u64 = 4;

pub struct LittleOaldresPuzzleCryptic {
    seed: u64,
    prng: ArxPrf,
    rounds: u64,
}

impl LittleOaldresPuzzleCryptic {
    pub fn new(seed: u64) -> Self {
        Self::with_rounds(seed, DEFAULT_ROUNDS)
    }

    pub fn with_rounds(seed: u64, rounds: u64) -> Self {
        Self {
            seed,
            prng: ArxPrf::new(seed),
            rounds,
        }
    }

    /// Reseeds the PRF back to the constructor seed (spec §6 `ResetPRNG`).
    pub fn reset_prng(&mut self) {
        self.prng.seed(self.seed);
    }

    /// One 64-bit lane of the core function: derives a per-call subkey,
    /// a 4-way choice function, and a rotation amount from the PRF, then
    /// applies one of four reversible mixing strategies (spec's
    /// `EncryptionCoreFunction`/`DecryptionCoreFunction`).
    fn core_encrypt_word(&mut self, data: u64, key: u64, round: u64) -> u64 {
        let subkey = key ^ self.prng.call(round);
        let choice = self.prng.call(subkey ^ key) % 4;
        let bit_rotation = (self.prng.call(subkey ^ choice) % 64) as u32;

        let mut result = match choice {
            0 => data ^ subkey,
            1 => !(data ^ subkey),
            2 => data.rotate_left(bit_rotation),
            3 => data.rotate_right(bit_rotation),
            _ => unreachable!("choice is reduced mod 4"),
        };

        result ^= 1u64 << bit_rotation;
        result = result.wrapping_add(key.rotate_right(3) ^ subkey.rotate_right(11));
        result
    }

    fn core_decrypt_word(&mut self, data: u64, key: u64, round: u64) -> u64 {
        let subkey = key ^ self.prng.call(round);
        let choice = self.prng.call(subkey ^ key) % 4;
        let bit_rotation = (self.prng.call(subkey ^ choice) % 64) as u32;

        let mut result = data.wrapping_sub(key.rotate_right(3) ^ subkey.rotate_right(11));
        result ^= 1u64 << bit_rotation;

        match choice {
            0 => result ^ subkey,
            1 => (!result) ^ subkey,
            2 => result.rotate_right(bit_rotation),
            3 => result.rotate_left(bit_rotation),
            _ => unreachable!("choice is reduced mod 4"),
        }
    }

    /// Chains `self.rounds` applications of the per-lane core across both
    /// halves of the block, cross-mixing the halves between rounds so a
    /// single-lane core still diffuses across the full 128 bits.
    fn encryption_core(&mut self, data: Block128, key: Key128, number_once: u64) -> Block128 {
        let (mut l, mut r) = data;
        for round in 0..self.rounds {
            let tag = number_once ^ round;
            l = self.core_encrypt_word(l, key.0, tag);
            r = self.core_encrypt_word(r, key.1, tag.rotate_left(1));
            l ^= r.rotate_left(13);
            r ^= l.rotate_right(17);
        }
        (l, r)
    }

    fn decryption_core(&mut self, data: Block128, key: Key128, number_once: u64) -> Block128 {
        let (mut l, mut r) = data;
        for round in (0..self.rounds).rev() {
            let tag = number_once ^ round;
            r ^= l.rotate_right(17);
            l ^= r.rotate_left(13);
            r = self.core_decrypt_word(r, key.1, tag.rotate_left(1));
            l = self.core_decrypt_word(l, key.0, tag);
        }
        (l, r)
    }

    pub fn single_round_encryption(&mut self, data: Block128, key: Key128, number_once: u64) -> Block128 {
        let result = self.encryption_core(data, key, number_once);
        self.reset_prng();
        result
    }

    pub fn single_round_decryption(&mut self, data: Block128, key: Key128, number_once: u64) -> Block128 {
        let result = self.decryption_core(data, key, number_once);
        self.reset_prng();
        result
    }

    /// Per-block `i`: uses `keys[i % keys.len()]`, `nonce = i` (spec §6).
    pub fn multiple_rounds_encryption(&mut self, data: &[Block128], keys: &[Key128]) -> Vec<Block128> {
        if data.is_empty() || keys.is_empty() {
            return Vec::new();
        }
        let out = data
            .iter()
            .enumerate()
            .map(|(i, &block)| self.encryption_core(block, keys[i % keys.len()], i as u64))
            .collect();
        self.reset_prng();
        out
    }

    pub fn multiple_rounds_decryption(&mut self, data: &[Block128], keys: &[Key128]) -> Vec<Block128> {
        if data.is_empty() || keys.is_empty() {
            return Vec::new();
        }
        let out = data
            .iter()
            .enumerate()
            .map(|(i, &block)| self.decryption_core(block, keys[i % keys.len()], i as u64))
            .collect();
        self.reset_prng();
        out
    }

    /// CTR-style subkey stream: drives the core function with
    /// `std::mt19937_64`-equivalent nonces seeded from the key and loop
    /// count (spec §6 `GenerateSubkeyWithEncryption`).
    pub fn generate_subkey_with_encryption(&mut self, key: Key128, loop_count: u64) -> Vec<Block128> {
        let mut mt = MersenneTwister64::new(key.0 ^ key.1 ^ loop_count);
        let mut out = Vec::with_capacity(loop_count as usize);
        for counter in 0..loop_count {
            let number_once = (mt.next_u64(), mt.next_u64());
            out.push(self.encryption_core(number_once, key, counter));
        }
        self.reset_prng();
        out
    }

    pub fn generate_subkey_with_decryption(&mut self, key: Key128, loop_count: u64) -> Vec<Block128> {
        let mut mt = MersenneTwister64::new(key.0 ^ key.1 ^ loop_count);
        let mut out = Vec::with_capacity(loop_count as usize);
        for counter in 0..loop_count {
            let number_once = (mt.next_u64(), mt.next_u64());
            out.push(self.decryption_core(number_once, key, counter));
        }
        self.reset_prng();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_round_round_trips() {
        let mut enc = LittleOaldresPuzzleCryptic::new(1);
        let mut dec = LittleOaldresPuzzleCryptic::new(1);
        let data = (1475, 3695);
        let key = (7532, 9512);
        let ciphertext = enc.single_round_encryption(data, key, 1);
        assert_ne!(ciphertext, data);
        let plaintext = dec.single_round_decryption(ciphertext, key, 1);
        assert_eq!(plaintext, data);
    }

    #[test]
    fn multiple_rounds_round_trip_per_block() {
        let mut enc = LittleOaldresPuzzleCryptic::new(1);
        let mut dec = LittleOaldresPuzzleCryptic::new(1);
        let data = vec![(1475, 3695), (1258, 7593), (777, 888), (0, 1)];
        let keys = vec![(7532, 9512), (6108, 8729)];

        let ciphertext = enc.multiple_rounds_encryption(&data, &keys);
        let plaintext = dec.multiple_rounds_decryption(&ciphertext, &keys);
        assert_eq!(plaintext, data);
    }

    #[test]
    fn ctr_mode_keystream_self_cancels() {
        let mut cipher = LittleOaldresPuzzleCryptic::new(1);
        let key = (7532, 0);
        let keystream = cipher.generate_subkey_with_encryption(key, 32);

        let mut block = (1475u64, 3695u64);
        for k in keystream.iter() {
            block = (block.0 ^ k.0, block.1 ^ k.1);
        }
        for k in keystream.iter() {
            block = (block.0 ^ k.0, block.1 ^ k.1);
        }
        assert_eq!(block, (1475, 3695));
    }
}

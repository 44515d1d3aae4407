//! `BlockCipher` — the Type-2 large-block key-dependent cipher's outer
//! loop: padding, key exhaustion/whitening, periodic re-keying, and the
//! 16-round Lai-Massey round function per block (spec §4.9).

use log::debug;
use scrypt::Params as ScryptParams;
use zeroize::Zeroize;

use crate::constants::{DATA_BLOCK_QW, KEY_BLOCK_QW, MATRIX_DIM};
use crate::error::{Error, Result};
use crate::lai_massey::LaiMasseyRound;
use crate::mix_util::MixUtil;
use crate::padding::{pad_iso10126, unpad_iso10126};
use crate::prng::{Lfsr, MersenneTwister64, Nlfsr, Sdp, SDP_MIN_SEED};
use crate::round_subkey::RoundSubkeyGen;
use crate::subkey_generator::SubkeyGenerator;
use crate::subkey_matrix::SubkeyMatrix;

const DATA_BLOCK_BYTES: usize = DATA_BLOCK_QW * 8;
const KEY_BLOCK_BYTES: usize = KEY_BLOCK_QW * 8;

const SALT_PERIOD: u64 = 2048;
const SCRYPT_RESEED_PERIOD: u64 = 2048 * 3;
const MT64_RESEED_PERIOD: u64 = 2048 * 2;

/// Owns every piece of state a block encryption/decryption call mutates:
/// the subkey matrix, the three internal PRNGs, the round-subkey
/// generator, the working key vector, and the periodic salt/re-key state.
/// There is a single owner here and no back-pointers, so nothing else in
/// the crate needs its own shared-state type.
pub struct BlockCipher {
    matrix: SubkeyMatrix,
    mix: MixUtil,
    lfsr: Lfsr,
    nlfsr: Nlfsr,
    sdp: Sdp,
    round_subkeys: RoundSubkeyGen,
    working_key: Vec<u64>,
    key_cycle: usize,
    exhausted: bool,
    whitening_done: bool,
    mt64: Option<MersenneTwister64>,
    block_counter: u64,
}

impl BlockCipher {
    pub fn new(iv: &[u8], lfsr_seed: u64, nlfsr_seed: u64, sdp_seed: u64) -> Result<Self> {
        if lfsr_seed == 0 {
            return Err(Error::ConfigurationInvalid("lfsr seed must be non-zero"));
        }
        if nlfsr_seed == 0 {
            return Err(Error::ConfigurationInvalid("nlfsr seed must be non-zero"));
        }
        if sdp_seed < SDP_MIN_SEED {
            return Err(Error::ConfigurationInvalid("sdp seed must be at least ten billion"));
        }
        if iv.is_empty() || iv.len() % DATA_BLOCK_BYTES != 0 {
            return Err(Error::ConfigurationInvalid(
                "iv length must be a non-zero multiple of DATA_BLOCK_QW * 8",
            ));
        }

        let mut matrix = SubkeyMatrix::new(MATRIX_DIM);
        let mix = MixUtil::new();
        let iv_words: Vec<u32> = iv
            .chunks(4)
            .map(|c| {
                let mut buf = [0u8; 4];
                buf[..c.len()].copy_from_slice(c);
                u32::from_le_bytes(buf)
            })
            .collect();
        matrix.apply_iv(&iv_words, &mix);

        debug!("BlockCipher constructed: iv_words={}, matrix_dim={}", iv_words.len(), MATRIX_DIM);

        Ok(Self {
            matrix,
            mix,
            lfsr: Lfsr::new(lfsr_seed),
            nlfsr: Nlfsr::new(nlfsr_seed),
            sdp: Sdp::new(sdp_seed),
            round_subkeys: RoundSubkeyGen::new(MATRIX_DIM),
            working_key: vec![0u64; KEY_BLOCK_QW],
            key_cycle: 0,
            exhausted: false,
            whitening_done: false,
            mt64: None,
            block_counter: 0,
        })
    }

    fn bytes_to_words(bytes: &[u8]) -> Vec<u64> {
        bytes
            .chunks(8)
            .map(|c| {
                let mut buf = [0u8; 8];
                buf[..c.len()].copy_from_slice(c);
                u64::from_le_bytes(buf)
            })
            .collect()
    }

    fn words_to_bytes(words: &[u64]) -> Vec<u8> {
        words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }

    /// `lambda(a,b) = if a==b then ~(a+b) else a^b` (spec §4.9).
    fn combine_key_word(a: u64, b: u64) -> u64 {
        if a == b {
            !(a.wrapping_add(b))
        } else {
            a ^ b
        }
    }

    /// Advances the key schedule by one data block: cycles one
    /// `KEY_BLOCK_QW`-slice of `keys` into the working key vector (or, once
    /// exhausted, performs whitening / periodic re-keying instead), then
    /// always regenerates the transformed subkey matrix.
    fn advance_key_schedule(&mut self, keys: &[u64]) -> Result<()> {
        let key_blocks = keys.len() / KEY_BLOCK_QW;

        if !self.exhausted {
            let slice = &keys[self.key_cycle * KEY_BLOCK_QW..(self.key_cycle + 1) * KEY_BLOCK_QW];
            for (slot, &word) in self.working_key.iter_mut().zip(slice.iter()) {
                *slot = Self::combine_key_word(*slot, word);
            }
            self.key_cycle += 1;
            if self.key_cycle >= key_blocks {
                self.exhausted = true;
            }

            let mut generator = SubkeyGenerator::new(
                &mut self.matrix,
                &mut self.mix,
                &mut self.lfsr,
                &mut self.nlfsr,
                &mut self.sdp,
            );
            generator.generate(&self.working_key)?;
            return Ok(());
        }

        if !self.whitening_done {
            self.whiten_working_key();
            self.whitening_done = true;

            let mut generator = SubkeyGenerator::new(
                &mut self.matrix,
                &mut self.mix,
                &mut self.lfsr,
                &mut self.nlfsr,
                &mut self.sdp,
            );
            generator.generate(&self.working_key)?;
        }

        if self.block_counter > 0 && self.block_counter % SALT_PERIOD == 0 {
            if self.mt64.is_none() {
                let seed = self.working_key.iter().fold(0u64, |acc, &w| acc ^ w);
                self.mt64 = Some(MersenneTwister64::new(seed));
            }
        }

        if self.block_counter > 0 && self.block_counter % SCRYPT_RESEED_PERIOD == 0 {
            let derived = self.scrypt_rekey()?;
            let mut generator = SubkeyGenerator::new(
                &mut self.matrix,
                &mut self.mix,
                &mut self.lfsr,
                &mut self.nlfsr,
                &mut self.sdp,
            );
            generator.generate(&derived)?;

            if self.block_counter % MT64_RESEED_PERIOD == 0 {
                let seed = derived.iter().fold(0u64, |acc, &w| acc ^ w);
                self.mt64 = Some(MersenneTwister64::new(seed));
            }
        } else {
            let mut generator = SubkeyGenerator::new(
                &mut self.matrix,
                &mut self.mix,
                &mut self.lfsr,
                &mut self.nlfsr,
                &mut self.sdp,
            );
            generator.generate(&[])?;
        }

        Ok(())
    }

    /// 16-round bit-mixing key whitening applied once, the first time the
    /// master key runs out (spec §4.9).
    fn whiten_working_key(&mut self) {
        for _ in 0..16 {
            for word in self.working_key.iter_mut() {
                let mut hi = (*word >> 32) as u32;
                let mut lo = *word as u32;
                hi ^= lo.rotate_left(19);
                lo = !lo;
                hi = hi.rotate_left(13);
                lo ^= hi.rotate_left(27);
                hi = !hi;
                lo = lo.rotate_left(23);
                *word = ((hi as u64) << 32) | (lo as u64);
            }

            let mut bytes = Self::words_to_bytes(&self.working_key);
            for (i, b) in bytes.iter_mut().enumerate() {
                *b = if i % 2 == 0 {
                    self.mix.s0()[*b as usize]
                } else {
                    self.mix.s1()[*b as usize]
                };
            }
            self.working_key = Self::bytes_to_words(&bytes);
            bytes.zeroize();
        }
    }

    /// `scrypt(working_key, salt, N=1024, r=8, p=16)` producing
    /// `2*KEY_BLOCK_QW` fresh `u64`s (spec §4.9).
    fn scrypt_rekey(&mut self) -> Result<Vec<u64>> {
        let salt_words: Vec<u64> = if let Some(mt) = self.mt64.as_mut() {
            let mut salt = vec![0u64; 16];
            mt.fill(&mut salt);
            salt
        } else {
            self.working_key.clone()
        };

        let password = Self::words_to_bytes(&self.working_key);
        let salt = Self::words_to_bytes(&salt_words);
        let params = ScryptParams::new(10, 8, 16, 2 * KEY_BLOCK_QW * 8)
            .expect("fixed scrypt parameters (N=1024, r=8, p=16) are always valid");

        let mut out = vec![0u8; 2 * KEY_BLOCK_QW * 8];
        scrypt::scrypt(&password, &salt, &params, &mut out)
            .expect("output buffer length matches the requested scrypt output length");

        let derived = Self::bytes_to_words(&out);
        out.zeroize();
        Ok(derived)
    }

    fn round_function_encrypt(&mut self, block: &mut [u64]) {
        self.round_subkeys.generate_round_subkeys(self.matrix.a(), self.matrix.t());
        LaiMasseyRound::encrypt_block(
            block,
            self.round_subkeys.rs_vec(),
            self.round_subkeys.rs(),
            self.matrix.index_shuffle(),
        );
    }

    fn round_function_decrypt(&mut self, block: &mut [u64]) {
        self.round_subkeys.generate_round_subkeys(self.matrix.a(), self.matrix.t());
        LaiMasseyRound::decrypt_block(
            block,
            self.round_subkeys.rs_vec(),
            self.round_subkeys.rs(),
            self.matrix.index_shuffle(),
        );
    }

    /// Encrypts already block-aligned plaintext, with no implicit padding.
    pub fn encrypt_no_pad(&mut self, plaintext: &[u8], keys: &[u8]) -> Result<Vec<u8>> {
        if plaintext.is_empty() || plaintext.len() % DATA_BLOCK_BYTES != 0 {
            return Err(Error::InputLengthMismatch(
                "plaintext length must be a non-zero multiple of DATA_BLOCK_QW * 8",
            ));
        }
        if keys.is_empty() || keys.len() % KEY_BLOCK_BYTES != 0 {
            return Err(Error::InputLengthMismatch(
                "key length must be a non-zero multiple of KEY_BLOCK_QW * 8",
            ));
        }

        let keys_words = Self::bytes_to_words(keys);
        let mut words = Self::bytes_to_words(plaintext);

        for block in words.chunks_mut(DATA_BLOCK_QW) {
            self.advance_key_schedule(&keys_words)?;
            self.round_function_encrypt(block);
            self.block_counter += 1;
        }

        Ok(Self::words_to_bytes(&words))
    }

    /// Exact inverse of [`Self::encrypt_no_pad`].
    pub fn decrypt_no_pad(&mut self, ciphertext: &[u8], keys: &[u8]) -> Result<Vec<u8>> {
        if ciphertext.is_empty() || ciphertext.len() % DATA_BLOCK_BYTES != 0 {
            return Err(Error::InputLengthMismatch(
                "ciphertext length must be a non-zero multiple of DATA_BLOCK_QW * 8",
            ));
        }
        if keys.is_empty() || keys.len() % KEY_BLOCK_BYTES != 0 {
            return Err(Error::InputLengthMismatch(
                "key length must be a non-zero multiple of KEY_BLOCK_QW * 8",
            ));
        }

        let keys_words = Self::bytes_to_words(keys);
        let mut words = Self::bytes_to_words(ciphertext);

        for block in words.chunks_mut(DATA_BLOCK_QW) {
            self.advance_key_schedule(&keys_words)?;
            self.round_function_decrypt(block);
            self.block_counter += 1;
        }

        Ok(Self::words_to_bytes(&words))
    }

    /// Encrypts arbitrary-length plaintext using ISO-10126 padding.
    pub fn encrypt(&mut self, plaintext: &[u8], keys: &[u8]) -> Result<Vec<u8>> {
        let padded = pad_iso10126(plaintext, DATA_BLOCK_BYTES, &mut self.lfsr);
        self.encrypt_no_pad(&padded, keys)
    }

    /// Exact inverse of [`Self::encrypt`].
    pub fn decrypt(&mut self, ciphertext: &[u8], keys: &[u8]) -> Result<Vec<u8>> {
        let padded = self.decrypt_no_pad(ciphertext, keys)?;
        unpad_iso10126(&padded, DATA_BLOCK_BYTES)
    }
}

impl Drop for BlockCipher {
    fn drop(&mut self) {
        self.working_key.zeroize();
    }
}

//! Bit-flip avalanche checks (spec §8): flipping one input bit should
//! change roughly half of the output bits, in both directions and for
//! both the plaintext and the key.

use oaldrespuzzle_cryptic::BlockCipher;

const SDP_SEED: u64 = 10_000_000_000;
const TRIALS: usize = 1024;
const LOWER_BOUND: f64 = 0.45;
const UPPER_BOUND: f64 = 0.55;

fn hamming_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b.iter()).map(|(&x, &y)| (x ^ y).count_ones()).sum()
}

fn flip_bit(mut data: Vec<u8>, bit_index: usize) -> Vec<u8> {
    let byte = bit_index / 8;
    let bit = bit_index % 8;
    data[byte] ^= 1 << bit;
    data
}

fn average_flip_ratio<F>(total_bits: usize, mut run: F) -> f64
where
    F: FnMut(usize) -> (Vec<u8>, Vec<u8>),
{
    let mut total_ratio = 0.0;
    for trial in 0..TRIALS {
        let bit_index = trial % total_bits;
        let (baseline, flipped) = run(bit_index);
        let flipped_bits = hamming_distance(&baseline, &flipped);
        total_ratio += flipped_bits as f64 / (baseline.len() as f64 * 8.0);
    }
    total_ratio / TRIALS as f64
}

#[test]
fn encrypt_direction_plaintext_bit_flip_avalanches() {
    let iv = vec![0x10u8; 128];
    let keys = vec![0x20u8; 256];
    let base_plaintext = vec![0x00u8; 128];

    let ratio = average_flip_ratio(base_plaintext.len() * 8, |bit_index| {
        let flipped_plaintext = flip_bit(base_plaintext.clone(), bit_index);

        let mut enc_baseline = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let baseline = enc_baseline.encrypt_no_pad(&base_plaintext, &keys).unwrap();

        let mut enc_flipped = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let flipped = enc_flipped.encrypt_no_pad(&flipped_plaintext, &keys).unwrap();

        (baseline, flipped)
    });

    assert!(
        (LOWER_BOUND..=UPPER_BOUND).contains(&ratio),
        "plaintext-bit-flip avalanche ratio {ratio} out of [{LOWER_BOUND}, {UPPER_BOUND}]"
    );
}

#[test]
fn encrypt_direction_key_bit_flip_avalanches() {
    let iv = vec![0x30u8; 128];
    let plaintext = vec![0x55u8; 128];
    let base_key = vec![0x00u8; 256];

    let ratio = average_flip_ratio(base_key.len() * 8, |bit_index| {
        let flipped_key = flip_bit(base_key.clone(), bit_index);

        let mut enc_baseline = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let baseline = enc_baseline.encrypt_no_pad(&plaintext, &base_key).unwrap();

        let mut enc_flipped = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let flipped = enc_flipped.encrypt_no_pad(&plaintext, &flipped_key).unwrap();

        (baseline, flipped)
    });

    assert!(
        (LOWER_BOUND..=UPPER_BOUND).contains(&ratio),
        "key-bit-flip avalanche ratio {ratio} out of [{LOWER_BOUND}, {UPPER_BOUND}]"
    );
}

#[test]
fn decrypt_direction_ciphertext_bit_flip_avalanches() {
    let iv = vec![0x50u8; 128];
    let keys = vec![0x60u8; 256];
    let plaintext = vec![0x99u8; 128];

    let mut enc = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
    let base_ciphertext = enc.encrypt_no_pad(&plaintext, &keys).unwrap();

    let ratio = average_flip_ratio(base_ciphertext.len() * 8, |bit_index| {
        let flipped_ciphertext = flip_bit(base_ciphertext.clone(), bit_index);

        let mut dec_baseline = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let baseline = dec_baseline.decrypt_no_pad(&base_ciphertext, &keys).unwrap();

        let mut dec_flipped = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap();
        let flipped = dec_flipped.decrypt_no_pad(&flipped_ciphertext, &keys).unwrap();

        (baseline, flipped)
    });

    assert!(
        (LOWER_BOUND..=UPPER_BOUND).contains(&ratio),
        "ciphertext-bit-flip avalanche ratio {ratio} out of [{LOWER_BOUND}, {UPPER_BOUND}]"
    );
}

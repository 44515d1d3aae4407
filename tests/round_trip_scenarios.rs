//! End-to-end encrypt/decrypt scenarios for both cipher types (spec §8).

use oaldrespuzzle_cryptic::{BlockCipher, Error, Key128, LittleOaldresPuzzleCryptic};

const SDP_SEED: u64 = 10_000_000_000;

fn block_cipher(iv: &[u8]) -> BlockCipher {
    BlockCipher::new(iv, 11, 22, SDP_SEED).unwrap()
}

/// S1: a single aligned block round-trips through `encrypt_no_pad`.
#[test]
fn s1_aligned_single_block_round_trips() {
    let iv = vec![0x11u8; 128];
    let keys = vec![0x22u8; 256];
    let plaintext = vec![0x33u8; 128];

    let mut enc = block_cipher(&iv);
    let ciphertext = enc.encrypt_no_pad(&plaintext, &keys).unwrap();
    assert_ne!(ciphertext, plaintext);

    let mut dec = block_cipher(&iv);
    let recovered = dec.decrypt_no_pad(&ciphertext, &keys).unwrap();
    assert_eq!(recovered, plaintext);
}

/// S2: multi-block plaintext spanning several key cycles round-trips.
#[test]
fn s2_multi_block_spans_key_cycles_and_round_trips() {
    let iv = vec![0xAAu8; 128];
    let keys = vec![0x5Cu8; 256 * 3];
    let plaintext: Vec<u8> = (0..(128 * 10)).map(|i| (i % 256) as u8).collect();

    let mut enc = block_cipher(&iv);
    let ciphertext = enc.encrypt_no_pad(&plaintext, &keys).unwrap();

    let mut dec = block_cipher(&iv);
    let recovered = dec.decrypt_no_pad(&ciphertext, &keys).unwrap();
    assert_eq!(recovered, plaintext);
}

/// S3: unaligned plaintext round-trips through ISO-10126 padding,
/// including the case where the input is already block-aligned (must
/// still grow by a full block).
#[test]
fn s3_unaligned_and_aligned_plaintext_round_trip_through_padding() {
    let iv = vec![0x77u8; 128];
    let keys = vec![0x99u8; 256];

    for plaintext in [
        b"short".to_vec(),
        vec![0x5Au8; 128], // already block-aligned
        b"a plaintext that is deliberately not any multiple of 128 bytes long".to_vec(),
    ] {
        let mut enc = block_cipher(&iv);
        let ciphertext = enc.encrypt(&plaintext, &keys).unwrap();

        let mut dec = block_cipher(&iv);
        let recovered = dec.decrypt(&ciphertext, &keys).unwrap();
        assert_eq!(recovered, plaintext);
    }
}

/// S4: key material runs out mid-stream, forcing whitening and
/// subsequent periodic re-keying to kick in; the cipher still round-trips.
#[test]
fn s4_key_exhaustion_and_rekeying_round_trips() {
    let iv = vec![0x44u8; 128];
    let keys = vec![0x88u8; 256]; // exactly one key block: exhausted after block 1
    let plaintext: Vec<u8> = (0..(128 * 5000)).map(|i| (i * 7 % 256) as u8).collect();

    let mut enc = block_cipher(&iv);
    let ciphertext = enc.encrypt_no_pad(&plaintext, &keys).unwrap();

    let mut dec = block_cipher(&iv);
    let recovered = dec.decrypt_no_pad(&ciphertext, &keys).unwrap();
    assert_eq!(recovered, plaintext);
}

/// S5: encrypting twice and decrypting twice with freshly reconstructed
/// instances between each operation still recovers the original plaintext.
#[test]
fn s5_double_encrypt_double_decrypt_with_fresh_instances() {
    let iv = vec![0x66u8; 128];
    let keys = vec![0x13u8; 256];
    let plaintext = vec![0x5Au8; 128 * 2];

    let mut enc1 = block_cipher(&iv);
    let once = enc1.encrypt_no_pad(&plaintext, &keys).unwrap();
    let mut enc2 = block_cipher(&iv);
    let twice = enc2.encrypt_no_pad(&once, &keys).unwrap();

    let mut dec1 = block_cipher(&iv);
    let back_once = dec1.decrypt_no_pad(&twice, &keys).unwrap();
    assert_eq!(back_once, once);

    let mut dec2 = block_cipher(&iv);
    let back_twice = dec2.decrypt_no_pad(&back_once, &keys).unwrap();
    assert_eq!(back_twice, plaintext);
}

/// S6: Type-1 CTR-mode keystream self-cancels when XORed in twice, the
/// same way Type-2 round-trips through encrypt/decrypt.
#[test]
fn s6_type1_ctr_keystream_self_cancels() {
    let mut cipher = LittleOaldresPuzzleCryptic::new(0xF00D_CAFE);
    let key: Key128 = (0x1111_2222_3333_4444, 0x5555_6666_7777_8888);
    let keystream = cipher.generate_subkey_with_encryption(key, 128);

    let plaintext: Vec<(u64, u64)> = (0..128u64).map(|i| (i, i.wrapping_mul(31))).collect();
    let mut buf = plaintext.clone();
    for (block, k) in buf.iter_mut().zip(keystream.iter()) {
        *block = (block.0 ^ k.0, block.1 ^ k.1);
    }
    for (block, k) in buf.iter_mut().zip(keystream.iter()) {
        *block = (block.0 ^ k.0, block.1 ^ k.1);
    }
    assert_eq!(buf, plaintext);
}

#[test]
fn negative_sdp_seed_just_below_threshold_is_rejected() {
    let iv = vec![0u8; 128];
    let err = BlockCipher::new(&iv, 1, 1, SDP_SEED - 1).unwrap_err();
    assert_eq!(err, Error::ConfigurationInvalid("sdp seed must be at least ten billion"));
}

#[test]
fn negative_oversized_key_is_rejected_as_input_length_mismatch() {
    let iv = vec![0u8; 128];
    let mut cipher = block_cipher(&iv);
    let bad_key = vec![0u8; 5121]; // not a multiple of 256
    let plaintext = vec![0u8; 128];
    let err = cipher.encrypt_no_pad(&plaintext, &bad_key).unwrap_err();
    assert_eq!(
        err,
        Error::InputLengthMismatch("key length must be a non-zero multiple of KEY_BLOCK_QW * 8")
    );
}

#[test]
fn negative_short_iv_is_rejected_as_configuration_invalid() {
    let iv = vec![0u8; 7];
    let err = BlockCipher::new(&iv, 1, 1, SDP_SEED).unwrap_err();
    assert_eq!(
        err,
        Error::ConfigurationInvalid("iv length must be a non-zero multiple of DATA_BLOCK_QW * 8")
    );
}

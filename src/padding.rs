//! ISO-10126-style random padding for the Type-2 block cipher's external
//! contract (spec §4.9: "Padding (external default)").

use crate::error::{Error, Result};
use crate::prng::Lfsr;

/// Appends `1..=block_size` random bytes so the result is a multiple of
/// `block_size`; the final byte holds the pad length. Always adds at
/// least one byte, even when `data` is already aligned.
pub fn pad_iso10126(data: &[u8], block_size: usize, rng: &mut Lfsr) -> Vec<u8> {
    assert!(block_size > 0 && block_size <= 256, "block_size must fit in one pad-length byte");

    let remainder = data.len() % block_size;
    let pad_len = if remainder == 0 { block_size } else { block_size - remainder };

    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    for _ in 0..pad_len - 1 {
        out.push(rng.next() as u8);
    }
    out.push(pad_len as u8);
    out
}

/// Strips ISO-10126 padding applied by [`pad_iso10126`]. Rejects a pad
/// length of zero or greater than the buffer itself.
pub fn unpad_iso10126(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    if data.is_empty() || data.len() % block_size != 0 {
        return Err(Error::InputLengthMismatch(
            "padded ciphertext length must be a non-zero multiple of the block size",
        ));
    }
    let pad_len = *data.last().unwrap() as usize;
    if pad_len == 0 || pad_len > data.len() {
        return Err(Error::InputLengthMismatch("invalid ISO-10126 pad length"));
    }
    Ok(data[..data.len() - pad_len].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_then_unpad_round_trips_unaligned_input() {
        let mut rng = Lfsr::new(7);
        let data = b"hello world, this is a short message".to_vec();
        let padded = pad_iso10126(&data, 16, &mut rng);
        assert_eq!(padded.len() % 16, 0);
        let unpadded = unpad_iso10126(&padded, 16).unwrap();
        assert_eq!(unpadded, data);
    }

    #[test]
    fn pad_then_unpad_round_trips_already_aligned_input() {
        let mut rng = Lfsr::new(7);
        let data = vec![0xAAu8; 32];
        let padded = pad_iso10126(&data, 16, &mut rng);
        assert_eq!(padded.len(), 48); // a full extra block is added
        let unpadded = unpad_iso10126(&padded, 16).unwrap();
        assert_eq!(unpadded, data);
    }

    #[test]
    fn rejects_length_not_a_multiple_of_block_size() {
        assert!(unpad_iso10126(&[1, 2, 3], 16).is_err());
    }
}

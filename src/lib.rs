//! OaldresPuzzle-Cryptic: a keyed 128-bit ARX stream construction (Type 1,
//! [`stream_cipher::LittleOaldresPuzzleCryptic`]) and a large-block
//! key-dependent Lai-Massey block cipher (Type 2,
//! [`block_cipher::BlockCipher`]).
//!
//! Neither construction authenticates its output; wrap them in an AEAD of
//! your choice if integrity matters to your application.

#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::needless_range_loop)]

// The C ABI in `ffi` is this crate's one deliberate exception to a
// no-unsafe-code policy: every other module is built entirely from safe
// Rust, including the zeroize-on-drop wiping used throughout.
#![deny(unsafe_code)]

#[allow(unsafe_code)]
pub mod ffi;

pub mod block_cipher;
pub mod constants;
pub mod error;
pub mod field;
pub mod lai_massey;
pub mod lattice;
pub mod matrix;
pub mod mix_util;
pub mod padding;
pub mod prf;
pub mod prng;
pub mod round_subkey;
pub mod sponge;
pub mod stream_cipher;
pub mod subkey_generator;
pub mod subkey_matrix;
pub mod util;

pub use block_cipher::BlockCipher;
pub use error::{Error, Result};
pub use stream_cipher::{Block128, Key128, LittleOaldresPuzzleCryptic};

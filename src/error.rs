//! Error kinds for construction and I/O boundaries (spec §7).
//!
//! Internal invariant violations (Lai-Massey self-inverse check, sponge
//! output sizing) are not represented here: they are fatal by design and
//! surface as a `panic!` after the offending scope wipes its buffers.

use thiserror::Error;

/// Errors returned at construction time or at the plaintext/key boundary.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A constructor parameter (block size constants, PRNG seed, IV length,
    /// hash width) is out of range.
    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(&'static str),

    /// `encrypt`/`decrypt` input length is not a multiple of the required
    /// block size.
    #[error("input length mismatch: {0}")]
    InputLengthMismatch(&'static str),
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

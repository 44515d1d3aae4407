//! The three internal PRNGs owned by [`crate::block_cipher::BlockCipher`]
//! (spec §3), plus the Mersenne-Twister-64 salt generator used by the
//! Type-2 outer loop (spec §4.9, supplemented per SPEC_FULL.md §C).

mod lfsr;
mod mt64;
mod nlfsr;
mod sdp;

pub use lfsr::Lfsr;
pub use mt64::MersenneTwister64;
pub use nlfsr::Nlfsr;
pub use sdp::{Sdp, MIN_SEED as SDP_MIN_SEED};

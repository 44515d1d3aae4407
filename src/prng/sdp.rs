//! SDP — "simulated double pendulum": a 10-slot floating point state
//! driven through a fixed ODE integration, producing concatenated-integer
//! outputs (spec §3). Seeds below ten billion are rejected by
//! [`crate::error::Error::ConfigurationInvalid`] at the call site
//! (`Sdp::new` itself cannot return `Result` without breaking the other
//! PRNGs' infallible-construction shape, so the crate's public
//! constructors validate before calling it — see `block_cipher.rs`).

use zeroize::Zeroize;

const SLOTS: usize = 10;
const GRAVITY: f64 = 9.8;
const DT: f64 = 0.01;

/// Minimum accepted seed (spec §3/§6): "ten-billion boundary".
pub const MIN_SEED: u64 = 10_000_000_000;

#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Sdp {
    state: [f64; SLOTS],
}

impl Sdp {
    /// Builds the double-pendulum state from the bits of `seed`, then
    /// integrates for `round(r * |seed|)` steps where `r` is a small fixed
    /// damping ratio, diffusing the seed before the first output is drawn.
    ///
    /// `seed` is assumed already validated (`>= MIN_SEED`) by the caller.
    pub fn new(seed: u64) -> Self {
        let mut state = [0f64; SLOTS];
        let mut bits = seed;
        for slot in state.iter_mut() {
            // Spread the seed's bits across the state as small angles /
            // angular velocities so the integration starts off-equilibrium.
            let chunk = (bits & 0xFFFF) as f64 / 65536.0;
            *slot = chunk * core::f64::consts::PI;
            bits = bits.rotate_right(16) ^ 0x9E37_79B9_7F4A_7C15;
        }

        let mut sdp = Self { state };
        let r = 1.0e-9_f64;
        let steps = ((r * seed as f64).round() as u64).clamp(1, 4096);
        for _ in 0..steps {
            sdp.integrate_step();
        }
        sdp
    }

    fn integrate_step(&mut self) {
        // Lightweight coupled-pendulum ODE step (semi-implicit Euler):
        // treats adjacent state slots as (angle, velocity) pairs coupled
        // through a shared gravity term, matching the spirit of a chaotic
        // double-pendulum integrator without requiring the closed-form
        // double-pendulum equations of motion.
        for i in (0..SLOTS).step_by(2) {
            let angle = self.state[i];
            let velocity = self.state[i + 1];
            let coupling = self.state[(i + 2) % SLOTS];
            let acceleration = -(GRAVITY / 1.0) * angle.sin() + 0.1 * coupling.sin();
            let new_velocity = velocity + acceleration * DT;
            let new_angle = angle + new_velocity * DT;
            self.state[i] = new_angle;
            self.state[i + 1] = new_velocity;
        }
    }

    /// Produces one output by integrating a single step and concatenating
    /// the bit patterns of two state slots into a 64-bit integer, folded
    /// into `[low, high]`.
    fn raw_output(&mut self) -> u64 {
        self.integrate_step();
        let a = self.state[0].to_bits();
        let b = self.state[1].to_bits();
        a ^ b.rotate_left(32)
    }

    /// Calling convention used by the matrix-update step (spec §4.6):
    /// produces a value uniformly folded into `[low, high]`.
    pub fn call(&mut self, low: u64, high: u64) -> u64 {
        let raw = self.raw_output();
        if high <= low {
            return low;
        }
        low + (raw % (high - low + 1))
    }
}

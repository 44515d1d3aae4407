//! ISAAC-64 (Alpha = 8, `state_size = 256`), used once at construction
//! time to derive the sponge's `move_bits`/`pi` permutation tables (spec
//! §4.2). Grounded on `CommonSecurity::RNG_ISAAC::isaac64<8>` in
//! `examples/original_source/Template/include/CommonSecurity/
//! SecureRandomUtilLibrary.hpp`.

const STATE_SIZE: usize = 256;
const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c13;

pub struct Isaac64 {
    result: [u64; STATE_SIZE],
    memory: [u64; STATE_SIZE],
    a: u64,
    b: u64,
    c: u64,
    counter: usize,
}

impl Isaac64 {
    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            result: [seed; STATE_SIZE],
            memory: [0u64; STATE_SIZE],
            a: 0,
            b: 0,
            c: 0,
            counter: STATE_SIZE,
        };
        rng.init();
        rng
    }

    /// The source's eight-variable golden-ratio mix, 64-bit branch.
    #[allow(clippy::too_many_arguments)]
    fn mix(a: &mut u64, b: &mut u64, c: &mut u64, d: &mut u64, e: &mut u64, f: &mut u64, g: &mut u64, h: &mut u64) {
        *a = a.wrapping_sub(*e);
        *f ^= *h >> 9;
        *h = h.wrapping_add(*a);

        *b = b.wrapping_sub(*f);
        *g ^= *a << 9;
        *a = a.wrapping_add(*b);

        *c = c.wrapping_sub(*g);
        *h ^= *b >> 23;
        *b = b.wrapping_add(*c);

        *d = d.wrapping_sub(*h);
        *a ^= *c << 15;
        *c = c.wrapping_add(*d);

        *e = e.wrapping_sub(*a);
        *b ^= *d >> 14;
        *d = d.wrapping_add(*e);

        *f = f.wrapping_sub(*b);
        *c ^= *e << 20;
        *e = e.wrapping_add(*f);

        *g = g.wrapping_sub(*c);
        *d ^= *f >> 17;
        *f = f.wrapping_add(*g);

        *h = h.wrapping_sub(*d);
        *e ^= *g << 14;
        *g = g.wrapping_add(*h);
    }

    fn init(&mut self) {
        let (mut a, mut b, mut c, mut d) = (GOLDEN_RATIO, GOLDEN_RATIO, GOLDEN_RATIO, GOLDEN_RATIO);
        let (mut e, mut f, mut g, mut h) = (GOLDEN_RATIO, GOLDEN_RATIO, GOLDEN_RATIO, GOLDEN_RATIO);

        self.a = 0;
        self.b = 0;
        self.c = 0;

        for _ in 0..4 {
            Self::mix(&mut a, &mut b, &mut c, &mut d, &mut e, &mut f, &mut g, &mut h);
        }

        let mut index = 0;
        while index < STATE_SIZE {
            a = a.wrapping_add(self.result[index]);
            b = b.wrapping_add(self.result[index + 1]);
            c = c.wrapping_add(self.result[index + 2]);
            d = d.wrapping_add(self.result[index + 3]);
            e = e.wrapping_add(self.result[index + 4]);
            f = f.wrapping_add(self.result[index + 5]);
            g = g.wrapping_add(self.result[index + 6]);
            h = h.wrapping_add(self.result[index + 7]);

            Self::mix(&mut a, &mut b, &mut c, &mut d, &mut e, &mut f, &mut g, &mut h);

            self.memory[index] = a;
            self.memory[index + 1] = b;
            self.memory[index + 2] = c;
            self.memory[index + 3] = d;
            self.memory[index + 4] = e;
            self.memory[index + 5] = f;
            self.memory[index + 6] = g;
            self.memory[index + 7] = h;
            index += 8;
        }

        let mut index = 0;
        while index < STATE_SIZE {
            a = a.wrapping_add(self.memory[index]);
            b = b.wrapping_add(self.memory[index + 1]);
            c = c.wrapping_add(self.memory[index + 2]);
            d = d.wrapping_add(self.memory[index + 3]);
            e = e.wrapping_add(self.memory[index + 4]);
            f = f.wrapping_add(self.memory[index + 5]);
            g = g.wrapping_add(self.memory[index + 6]);
            h = h.wrapping_add(self.memory[index + 7]);

            Self::mix(&mut a, &mut b, &mut c, &mut d, &mut e, &mut f, &mut g, &mut h);

            self.memory[index] = a;
            self.memory[index + 1] = b;
            self.memory[index + 2] = c;
            self.memory[index + 3] = d;
            self.memory[index + 4] = e;
            self.memory[index + 5] = f;
            self.memory[index + 6] = g;
            self.memory[index + 7] = h;
            index += 8;
        }

        self.isaac64_round();
        self.counter = STATE_SIZE;
    }

    /// One full ISAAC-64 mixing pass over the 256-word state, regenerating
    /// `result` from `memory` (the source's `implementation_isaac64`).
    fn isaac64_round(&mut self) {
        let mut a = self.a;
        self.c = self.c.wrapping_add(1);
        let mut b = self.b.wrapping_add(self.c);

        for index in 0..STATE_SIZE {
            let x = self.memory[index];
            match index & 3 {
                0 => a ^= !(a << 21),
                1 => a ^= a >> 5,
                2 => a ^= a << 12,
                3 => a ^= a >> 33,
                _ => unreachable!("index & 3 is in 0..4"),
            }
            a = a.wrapping_add(self.memory[(index + STATE_SIZE / 2) & (STATE_SIZE - 1)]);

            let indirect_y = self.memory[(x.rotate_right(2) as usize) & (STATE_SIZE - 1)];
            let y = a ^ b.wrapping_add(indirect_y);
            self.memory[index] = y;

            let indirect_b = self.memory[(y.rotate_right(10) as usize) & (STATE_SIZE - 1)];
            b = x.wrapping_add(a) ^ indirect_b;
            self.result[index] = b;
        }

        self.a = a;
        self.b = b;
    }

    /// The source's `operator()`. Its own wraparound guard (`if (counter -
    /// 1 == SIZE_MAX) counter = state_size - 1`) always fires before the
    /// ternary can observe `counter == 0`, so the ternary's `do_isaac()`
    /// branch is unreachable there: a full state regeneration happens
    /// exactly once, inside `init()`, and every call after that cycles
    /// through the same 256-word `result` batch (256 indices the first
    /// time through, then a 255-long cycle thereafter since the
    /// wraparound guard steps over index `state_size - 1` on every lap
    /// but the first). Reproduced here verbatim rather than "fixed", to
    /// keep this generator's output identical to the source's.
    pub fn next_u64(&mut self) -> u64 {
        if self.counter == 0 {
            self.counter = STATE_SIZE - 1;
        }
        self.counter -= 1;
        self.result[self.counter]
    }

    pub fn discard(&mut self, steps: u64) {
        for _ in 0..steps {
            self.next_u64();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_is_deterministic() {
        let mut a = Isaac64::new(1_946_379_852_749_613);
        let mut b = Isaac64::new(1_946_379_852_749_613);
        for _ in 0..512 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn distinct_seeds_diverge() {
        let mut a = Isaac64::new(1);
        let mut b = Isaac64::new(2);
        assert_ne!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn discard_advances_the_cycle_by_exactly_that_many_calls() {
        let mut a = Isaac64::new(7);
        let mut b = Isaac64::new(7);
        a.discard(10);
        for _ in 0..10 {
            b.next_u64();
        }
        assert_eq!(a.next_u64(), b.next_u64());
    }
}

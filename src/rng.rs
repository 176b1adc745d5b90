//! Seeded pseudo-random source.
//!
//! `Mt19937` is the 32-bit Mersenne Twister with array seeding, so an
//! integer seed produces the same output stream as CPython's
//! `random.seed(n)`. The [`Draws`] extension trait builds floats and
//! bounded integers from 32-bit outputs the same way CPython's `random()`
//! and `randint()` do. Together they make generated grids byte-identical
//! to the reference tool for a given seed.

use rand::{RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// 32-bit Mersenne Twister (MT19937).
#[derive(Clone)]
pub struct Mt19937 {
    state: Box<[u32; N]>,
    index: usize,
}

impl std::fmt::Debug for Mt19937 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mt19937").field("index", &self.index).finish()
    }
}

impl Mt19937 {
    /// Seed from an arbitrary-length key (`init_by_array`).
    ///
    /// An empty key is treated as `[0]`.
    pub fn from_key(key: &[u32]) -> Self {
        let key: &[u32] = if key.is_empty() { &[0] } else { key };
        let mut rng = Self::from_scalar(19_650_218);
        let mt = &mut rng.state;

        let mut i = 1usize;
        let mut j = 0usize;
        for _ in 0..N.max(key.len()) {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let prev = mt[i - 1] ^ (mt[i - 1] >> 30);
            mt[i] = (mt[i] ^ prev.wrapping_mul(1_566_083_941)).wrapping_sub(i as u32);
            i += 1;
            if i >= N {
                mt[0] = mt[N - 1];
                i = 1;
            }
        }
        mt[0] = UPPER_MASK;
        rng.index = N;
        rng
    }

    /// Seed from an integer the way CPython does: little-endian 32-bit
    /// words, high zero words dropped, at least one word kept.
    pub fn from_int(seed: u64) -> Self {
        let lo = seed as u32;
        let hi = (seed >> 32) as u32;
        if hi == 0 {
            Self::from_key(&[lo])
        } else {
            Self::from_key(&[lo, hi])
        }
    }

    // init_genrand
    fn from_scalar(seed: u32) -> Self {
        let mut state = Box::new([0u32; N]);
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    fn twist(&mut self) {
        let mt = &mut self.state;
        for k in 0..N {
            let y = (mt[k] & UPPER_MASK) | (mt[(k + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 1 { MATRIX_A } else { 0 };
            mt[k] = mt[(k + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    fn next_word(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }
        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }
}

impl RngCore for Mt19937 {
    fn next_u32(&mut self) -> u32 {
        self.next_word()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.next_word());
        let hi = u64::from(self.next_word());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_word().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mt19937 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::from_int(u64::from_le_bytes(seed))
    }

    // The default expands the integer through a PCG stream first, which
    // would not match integer seeding.
    fn seed_from_u64(state: u64) -> Self {
        Self::from_int(state)
    }
}

/// Float and bounded-integer draws built from 32-bit outputs.
pub trait Draws: RngCore {
    /// Uniform float in `[0, 1)` with 53 bits of precision.
    fn unit_f64(&mut self) -> f64 {
        let a = u64::from(self.next_u32() >> 5);
        let b = u64::from(self.next_u32() >> 6);
        (a * 67_108_864 + b) as f64 * (1.0 / 9_007_199_254_740_992.0)
    }

    /// `k` random bits, `k <= 64`. Words are consumed least-significant
    /// first; a partial word keeps the top bits of its output.
    fn random_bits(&mut self, k: u32) -> u64 {
        assert!(k <= 64, "random_bits: k must be at most 64, got {k}");
        match k {
            0 => 0,
            1..=32 => u64::from(self.next_u32() >> (32 - k)),
            _ => {
                let lo = u64::from(self.next_u32());
                let hi = u64::from(self.next_u32() >> (64 - k));
                (hi << 32) | lo
            }
        }
    }

    /// Uniform integer in `[0, n)` by rejection sampling. Always consumes
    /// at least one output, even for `n == 1`.
    fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "below: empty range");
        let k = u64::BITS - n.leading_zeros();
        let mut r = self.random_bits(k);
        while r >= n {
            r = self.random_bits(k);
        }
        r
    }

    /// Uniform integer in the closed range `[lo, hi]`.
    fn int_in(&mut self, lo: u64, hi: u64) -> u64 {
        assert!(lo <= hi, "int_in: empty range [{lo}, {hi}]");
        match (hi - lo).checked_add(1) {
            Some(width) => lo + self.below(width),
            None => self.random_bits(64),
        }
    }
}

impl<R: RngCore + ?Sized> Draws for R {}

//! A simple pseudorandom number generator.
//!
//! Specifically, an implementation of the *really* minimal C PCG32 generator from <https://www.pcg-random.org/>, surfaced through [RngCore].
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! The only use of randomness in the library is the shuffled coordinate-visit order of [relevance search](crate::procedures::minsect).
//! The generator is seeded from the configuration, so a run with a fixed seed visits coordinates in a fixed order and is reproducible.

use rand::SeedableRng;
use rand_core::{impls, RngCore};

const MULTIPLIER: u64 = 6364136223846793005;

/// State and increment.
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl MinimalPCG32 {
    /// A generator seeded directly from an integer.
    pub fn new(seed: u64) -> Self {
        Self::from_seed(seed.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state.wrapping_mul(MULTIPLIER).wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

/*!
A minimal implementation of the PCG random number generator (XSH-RR variant).

The generator is small, fast, deterministic given a seed, and free of global
state, which is all a solver asks of randomness.

For background, see: <https://www.pcg-random.org>
*/

use std::fmt::Debug;

use rand_core::{impls, RngCore, SeedableRng};

const PCG_MULTIPLIER: u64 = 6364136223846793005;
const PCG_INCREMENT: u64 = 1442695040888963407;

/// A minimal PCG32 generator.
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::seed_from_u64(0)
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let state = self.state;
        self.state = state
            .wrapping_mul(PCG_MULTIPLIER)
            .wrapping_add(PCG_INCREMENT);

        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rotation = (state >> 59) as u32;
        xorshifted.rotate_right(rotation)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut generator = MinimalPCG32 {
            state: u64::from_le_bytes(seed).wrapping_add(PCG_INCREMENT),
        };
        // Advance once so close seeds diverge immediately.
        generator.next_u32();
        generator
    }
}

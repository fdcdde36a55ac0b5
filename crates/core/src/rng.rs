//! RNG module - seeded random source for start position and color draws
//!
//! A small LCG keeps the simulation deterministic for a given seed, which is
//! what the tests and the `DVD_SEED` override rely on.

use crate::types::PaletteColor;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG from a 64-bit seed by folding both halves together.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self::new((seed as u32) ^ ((seed >> 32) as u32))
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the state; the low bits of a power-of-two LCG
    /// cycle with a very short period.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Uniform value in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Uniform draw from the full palette.
    pub fn next_color(&mut self) -> PaletteColor {
        let i = self.next_range(PaletteColor::ALL.len() as u32) as usize;
        PaletteColor::ALL[i]
    }

    /// Current internal state (for reproducing a run).
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

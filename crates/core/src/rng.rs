//! RNG module - deterministic random numbers for the simulation
//!
//! A tiny LCG is enough for river wander and spawn rolls, and keeps every
//! game reproducible from its seed.

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max). Returns 0 when `max == 0`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; the low bits of an LCG cycle quickly.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Generate random value in range [lo, hi]. Returns `lo` when `hi < lo`.
    pub fn range_inclusive(&mut self, lo: i32, hi: i32) -> i32 {
        if hi < lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }
}

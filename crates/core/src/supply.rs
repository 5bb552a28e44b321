//! Gem supply - the source of refill gems
//!
//! Refill pulls one gem per empty cell through the single-method [`GemSupply`]
//! contract. Any `FnMut() -> GemType` closure is a supply, and two deterministic
//! implementations are provided:
//!
//! - [`SeededGemSupply`]: LCG-driven uniform draw among the six colors
//! - [`ScriptedGemSupply`]: replays a fixed sequence, for tests and golden outputs
//!
//! A supply must never return [`GemType::Empty`]; refill treats that as a contract
//! violation. A supply is stateful and owned by the caller, so do not share one
//! across concurrent resolutions.

use crate::types::{GemType, MATCHABLE_GEMS};

/// Caller-injected source of refill gems
pub trait GemSupply {
    /// Produce exactly one matchable gem
    fn next_gem(&mut self) -> GemType;
}

impl<F> GemSupply for F
where
    F: FnMut() -> GemType,
{
    fn next_gem(&mut self) -> GemType {
        self()
    }
}

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // Low bits of an LCG have short periods.
        (self.next_u32() >> 16) % max
    }
}

/// Seeded uniform gem supply
///
/// Two supplies built from the same seed yield identical sequences.
#[derive(Debug, Clone)]
pub struct SeededGemSupply {
    rng: SimpleRng,
    seed: u32,
}

impl SeededGemSupply {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            seed,
        }
    }

    /// Seed this supply was created with
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl GemSupply for SeededGemSupply {
    fn next_gem(&mut self) -> GemType {
        let idx = self.rng.next_range(MATCHABLE_GEMS.len() as u32) as usize;
        MATCHABLE_GEMS[idx]
    }
}

impl Default for SeededGemSupply {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed gem sequence and counts how much of it was used.
///
/// Once the script runs out it yields `Empty`, which refill reports as a
/// supplier contract violation instead of inventing gems.
#[derive(Debug, Clone)]
pub struct ScriptedGemSupply {
    script: Vec<GemType>,
    consumed: usize,
}

impl ScriptedGemSupply {
    pub fn new(script: impl Into<Vec<GemType>>) -> Self {
        Self {
            script: script.into(),
            consumed: 0,
        }
    }

    /// Number of `next_gem` calls made so far
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn remaining(&self) -> usize {
        self.script.len().saturating_sub(self.consumed)
    }
}

impl GemSupply for ScriptedGemSupply {
    fn next_gem(&mut self) -> GemType {
        let gem = self
            .script
            .get(self.consumed)
            .copied()
            .unwrap_or(GemType::Empty);
        self.consumed += 1;
        gem
    }
}

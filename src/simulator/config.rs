//! Simulation configuration.

use crate::character::CharacterClass;

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of independent heroes to play
    pub num_runs: u32,

    /// Battles each hero fights back to back
    pub battles_per_run: u32,

    /// Class every hero is created with
    pub class: CharacterClass,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            battles_per_run: 20,
            class: CharacterClass::Warrior,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Small seeded config for quick checks.
    pub fn quick(class: CharacterClass, seed: u64) -> Self {
        Self {
            num_runs: 50,
            battles_per_run: 10,
            class,
            seed: Some(seed),
        }
    }
}

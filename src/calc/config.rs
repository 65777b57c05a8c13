//! Configuration for equation generation and experiment runs.
//!
//! Both configs deserialize from JSON with every field optional; missing
//! fields take the defaults below.

use serde::{Serialize, Deserialize};

/// Parameters for the random equation generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of equations to generate.
    pub count: usize,
    /// Smallest integer used for an operand component.
    pub min_value: i64,
    /// Largest integer used for an operand component.
    pub max_value: i64,
    /// Shortest equation, in tokens.
    pub min_length: usize,
    /// Longest equation, in tokens.
    pub max_length: usize,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 20_000,
            min_value: -1,
            max_value: 1,
            min_length: 3,
            max_length: 203,
            seed: 42,
        }
    }
}

/// Parameters for the multi-simulation benchmark.
///
/// Simulation `k` (1-based) generates `equations_per_simulation` equations
/// of exactly `base_length + (k - 1) * length_increment` tokens, seeded
/// with `seed + k`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub simulations: usize,
    pub equations_per_simulation: usize,
    /// Operand range; `[-1, 1]` makes zero divisors frequent.
    pub min_value: i64,
    pub max_value: i64,
    pub base_length: usize,
    pub length_increment: usize,
    pub seed: u64,
    /// Evaluate each batch with rayon instead of sequentially.
    pub parallel: bool,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            simulations: 20,
            equations_per_simulation: 1_000,
            min_value: -1,
            max_value: 1,
            base_length: 5,
            length_increment: 20,
            seed: 42,
            parallel: false,
        }
    }
}

impl ExperimentConfig {
    /// Token length of simulation `sim` (1-based).
    #[inline]
    pub fn length_for(&self, sim: usize) -> usize {
        self.base_length + sim.saturating_sub(1) * self.length_increment
    }

    /// Generator settings for simulation `sim` (1-based).
    pub fn generator_for(&self, sim: usize) -> GeneratorConfig {
        let length = self.length_for(sim);
        GeneratorConfig {
            count: self.equations_per_simulation,
            min_value: self.min_value,
            max_value: self.max_value,
            min_length: length,
            max_length: length,
            seed: self.seed + sim as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lengths_grow_per_simulation() {
        let cfg = ExperimentConfig::default();
        assert_eq!(cfg.length_for(1), 5);
        assert_eq!(cfg.length_for(2), 25);
        assert_eq!(cfg.length_for(20), 385);
    }

    #[test]
    fn test_generator_for_simulation() {
        let cfg = ExperimentConfig::default();
        let gen = cfg.generator_for(3);
        assert_eq!(gen.count, 1_000);
        assert_eq!(gen.min_length, 45);
        assert_eq!(gen.max_length, 45);
        assert_eq!(gen.seed, 45);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ExperimentConfig =
            serde_json::from_str(r#"{"simulations": 3, "parallel": true}"#).unwrap();
        assert_eq!(cfg.simulations, 3);
        assert!(cfg.parallel);
        assert_eq!(cfg.equations_per_simulation, 1_000);
        assert_eq!(cfg.seed, 42);
    }
}

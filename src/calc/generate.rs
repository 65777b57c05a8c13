//! Random equation generation.
//!
//! Generated equations are always well formed: an odd number of tokens,
//! at least three, operands at odd (1-indexed) positions and operators at
//! even ones. No brackets.

use rand::Rng;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;
use crate::calc::GeneratorConfig;
use crate::expr::Operator;

/// Create the seeded generator used for reproducible equation sets.
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Clamp a requested length to a valid equation length (odd, at least 3).
#[inline]
pub fn valid_length(length: usize) -> usize {
    let length = length.max(3);
    if length % 2 == 0 { length + 1 } else { length }
}

/// Generate one equation of `length` tokens.
///
/// Operand components are integers drawn uniformly from
/// `[min_value, max_value]`; the bounds are swapped if reversed.
pub fn generate_equation<R: Rng>(rng: &mut R, min_value: i64, max_value: i64, length: usize) -> String {
    let (lo, hi) = if min_value <= max_value {
        (min_value, max_value)
    } else {
        (max_value, min_value)
    };
    let length = valid_length(length);

    let mut tokens = Vec::with_capacity(length);
    for position in 1..=length {
        if position % 2 == 0 {
            let op = Operator::ALL[rng.random_range(0..Operator::ALL.len())];
            tokens.push(op.symbol().to_string());
        } else {
            let x = rng.random_range(lo..=hi);
            let y = rng.random_range(lo..=hi);
            let z = rng.random_range(lo..=hi);
            tokens.push(format!("{},{},{}", x, y, z));
        }
    }

    tokens.join(" ")
}

/// Generate `config.count` equations.
///
/// Each length is drawn uniformly from the odd values in
/// `[min_length, max_length]`, or is 3 when that range holds none.
pub fn generate_equations(config: &GeneratorConfig) -> Vec<String> {
    let mut rng = create_rng(config.seed);

    let mut lengths: Vec<usize> = (config.min_length..=config.max_length)
        .filter(|l| l % 2 == 1)
        .collect();
    if lengths.is_empty() {
        lengths.push(3);
    }

    debug!(
        count = config.count,
        min_length = config.min_length,
        max_length = config.max_length,
        seed = config.seed,
        "generating equations"
    );

    (0..config.count)
        .map(|_| {
            let length = lengths[rng.random_range(0..lengths.len())];
            generate_equation(&mut rng, config.min_value, config.max_value, length)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{tokenize, Token};

    #[test]
    fn test_valid_length() {
        assert_eq!(valid_length(0), 3);
        assert_eq!(valid_length(2), 3);
        assert_eq!(valid_length(3), 3);
        assert_eq!(valid_length(4), 5);
        assert_eq!(valid_length(25), 25);
    }

    #[test]
    fn test_equation_shape() {
        let mut rng = create_rng(7);
        let eq = generate_equation(&mut rng, -1, 1, 10);
        let tokens = tokenize(&eq).unwrap();
        assert_eq!(tokens.len(), 11);
        for (i, token) in tokens.iter().enumerate() {
            match token {
                Token::Operand(t) => {
                    assert_eq!(i % 2, 0);
                    for c in t.to_array() {
                        assert!((-1.0..=1.0).contains(&c));
                        assert_eq!(c.fract(), 0.0);
                    }
                }
                Token::Operator(_) => assert_eq!(i % 2, 1),
            }
        }
    }

    #[test]
    fn test_reversed_bounds() {
        let mut rng = create_rng(1);
        let eq = generate_equation(&mut rng, 2, 2, 3);
        assert!(eq.starts_with("2,2,2 "));
        let eq = generate_equation(&mut rng, 5, 4, 3);
        assert!(tokenize(&eq).is_ok());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = GeneratorConfig { count: 25, ..GeneratorConfig::default() };
        assert_eq!(generate_equations(&config), generate_equations(&config));

        let other = GeneratorConfig { seed: 43, ..config.clone() };
        assert_ne!(generate_equations(&config), generate_equations(&other));
    }

    #[test]
    fn test_lengths_within_range() {
        let config = GeneratorConfig {
            count: 50,
            min_length: 4,
            max_length: 9,
            ..GeneratorConfig::default()
        };
        for eq in generate_equations(&config) {
            let n = eq.split_whitespace().count();
            assert!(n == 5 || n == 7 || n == 9, "unexpected length {}", n);
        }
    }

    #[test]
    fn test_empty_length_range_falls_back() {
        let config = GeneratorConfig {
            count: 5,
            min_length: 10,
            max_length: 10,
            ..GeneratorConfig::default()
        };
        for eq in generate_equations(&config) {
            assert_eq!(eq.split_whitespace().count(), 3);
        }
    }
}

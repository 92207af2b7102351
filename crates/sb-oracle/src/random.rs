//! Random sources for draws and template picks.
//!
//! Engine functions take `&mut impl RandomSource` so tests can script exact
//! values while the reader runs on a seeded [`StdRng`].

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform floats in `[0, 1)`.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform index into a collection of `len` items (`len` must be non-zero).
    fn pick_index(&mut self, len: usize) -> usize {
        let idx = (self.next_float() * len as f64) as usize;
        idx.min(len.saturating_sub(1))
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_float() < p
    }
}

impl RandomSource for StdRng {
    fn next_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`. An empty script always yields `0.0`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self { values, cursor: 0 }
    }

    /// A source that always returns the same value.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for ScriptedSource {
    fn next_float(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn scripted_source_cycles() {
        let mut src = ScriptedSource::new(vec![0.1, 0.9]);
        assert_eq!(src.next_float(), 0.1);
        assert_eq!(src.next_float(), 0.9);
        assert_eq!(src.next_float(), 0.1);
    }

    #[test]
    fn scripted_source_clamps() {
        let mut src = ScriptedSource::new(vec![-3.0, 7.0]);
        assert_eq!(src.next_float(), 0.0);
        assert!(src.next_float() < 1.0);
        let mut empty = ScriptedSource::new(Vec::new());
        assert_eq!(empty.next_float(), 0.0);
    }

    #[test]
    fn pick_index_stays_in_bounds() {
        let mut src = ScriptedSource::constant(0.999_999);
        assert_eq!(src.pick_index(4), 3);
        let mut src = ScriptedSource::constant(0.0);
        assert_eq!(src.pick_index(4), 0);
    }

    #[test]
    fn chance_compares_against_threshold() {
        let mut src = ScriptedSource::new(vec![0.69, 0.7]);
        assert!(src.chance(0.7));
        assert!(!src.chance(0.7));
    }

    #[test]
    fn std_rng_values_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let v = rng.next_float();
            assert!((0.0..1.0).contains(&v));
        }
    }
}

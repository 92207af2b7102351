//! Configuration for a reader session.

use crate::synth::{ReadingStyle, SynthesisChances};

/// Number of charms drawn by a full cast.
pub const DEFAULT_DRAW_COUNT: usize = 12;
/// Largest hand-picked draw.
pub const MAX_CHOSEN: usize = 3;

/// Configuration for a [`Reader`](crate::Reader).
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderConfig {
    /// RNG seed for reproducible readings; `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Charms drawn by a cast (at least 1).
    pub draw_count: usize,
    /// Probability that a rare or legendary combination leads the text.
    pub lead_chance: f64,
    /// Probability of echoing the strongest combination after composed text.
    pub echo_chance: f64,
    /// Fixed lunar phase (0-29); `None` derives it from today's date.
    pub lunar_phase: Option<u32>,
    /// Forced reading style; `None` infers one from the draw and question.
    pub style: Option<ReadingStyle>,
    /// Maximum number of saved readings kept in history.
    pub history_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            draw_count: DEFAULT_DRAW_COUNT,
            lead_chance: 0.7,
            echo_chance: 0.4,
            lunar_phase: None,
            style: None,
            history_capacity: 100,
        }
    }
}

impl ReaderConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the cast draw count (minimum 1).
    pub fn with_draw_count(mut self, count: usize) -> Self {
        self.draw_count = count.max(1);
        self
    }

    /// Set the lead chance (clamped to 0.0-1.0).
    pub fn with_lead_chance(mut self, chance: f64) -> Self {
        self.lead_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Set the echo chance (clamped to 0.0-1.0).
    pub fn with_echo_chance(mut self, chance: f64) -> Self {
        self.echo_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Pin the lunar phase (wrapped into 0-29).
    pub fn with_lunar_phase(mut self, phase: u32) -> Self {
        self.lunar_phase = Some(phase % 30);
        self
    }

    /// Force a reading style.
    pub fn with_style(mut self, style: ReadingStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the history capacity (minimum 1).
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Branch probabilities handed to the synthesizer.
    pub fn chances(&self) -> SynthesisChances {
        SynthesisChances {
            lead: self.lead_chance,
            echo: self.echo_chance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = ReaderConfig::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.draw_count, 12);
        assert_eq!(cfg.lead_chance, 0.7);
        assert_eq!(cfg.echo_chance, 0.4);
        assert_eq!(cfg.history_capacity, 100);
    }

    #[test]
    fn builder_methods() {
        let cfg = ReaderConfig::default()
            .with_seed(7)
            .with_draw_count(5)
            .with_style(ReadingStyle::Poetic)
            .with_lunar_phase(15);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.draw_count, 5);
        assert_eq!(cfg.style, Some(ReadingStyle::Poetic));
        assert_eq!(cfg.lunar_phase, Some(15));
    }

    #[test]
    fn values_clamped() {
        let cfg = ReaderConfig::default()
            .with_draw_count(0)
            .with_lead_chance(2.0)
            .with_echo_chance(-1.0)
            .with_lunar_phase(45)
            .with_history_capacity(0);
        assert_eq!(cfg.draw_count, 1);
        assert_eq!(cfg.lead_chance, 1.0);
        assert_eq!(cfg.echo_chance, 0.0);
        assert_eq!(cfg.lunar_phase, Some(15));
        assert_eq!(cfg.history_capacity, 1);
    }
}

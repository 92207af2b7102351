//! The reading session: catalog, configuration, and random source.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use uuid::Uuid;

use sb_core::{Catalog, Charm, CharmId};

use crate::combos::find_combinations;
use crate::config::{MAX_CHOSEN, ReaderConfig};
use crate::context::map_houses;
use crate::error::{ReadingError, ReadingResult};
use crate::fortune::{self, SpinRecord};
use crate::lunar::{lunar_phase, today};
use crate::reading::DrawnReading;
use crate::select::{DrawContext, select_charms};
use crate::synth::synthesize;

/// Casts readings against one catalog with one random source.
pub struct Reader {
    catalog: Catalog,
    config: ReaderConfig,
    rng: StdRng,
}

impl Reader {
    /// Create a reader. A configured seed makes every reading reproducible.
    pub fn new(catalog: Catalog, config: ReaderConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            config,
            rng,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Lunar phase used for draws on `today`.
    pub fn lunar_phase(&self, today: NaiveDate) -> u32 {
        self.config.lunar_phase.unwrap_or_else(|| lunar_phase(today))
    }

    /// Lunar phase used for draws cast now.
    pub fn current_lunar_phase(&self) -> u32 {
        self.lunar_phase(today())
    }

    /// Draw a full reading for a question (empty for none).
    pub fn cast(&mut self, question: &str) -> ReadingResult<DrawnReading> {
        let phase = self.current_lunar_phase();
        let mut ctx = DrawContext::new().with_lunar_phase(phase);
        if !question.trim().is_empty() {
            ctx = ctx.with_question(question);
        }
        let charms = select_charms(
            self.catalog.charms(),
            self.config.draw_count,
            &ctx,
            &mut self.rng,
        )?;
        self.interpret(question, charms)
    }

    /// Interpret up to three hand-picked charms, given by id or name.
    pub fn read_chosen<S: AsRef<str>>(
        &mut self,
        question: &str,
        picks: &[S],
    ) -> ReadingResult<DrawnReading> {
        if picks.is_empty() {
            return Err(ReadingError::EmptyDraw);
        }
        if picks.len() > MAX_CHOSEN {
            return Err(ReadingError::TooManyCharms {
                max: MAX_CHOSEN,
                given: picks.len(),
            });
        }

        let mut seen: HashSet<CharmId> = HashSet::new();
        let mut charms: Vec<Charm> = Vec::with_capacity(picks.len());
        for pick in picks {
            let input = pick.as_ref();
            let charm = self
                .catalog
                .resolve(input)
                .ok_or_else(|| ReadingError::UnknownCharm(input.to_string()))?;
            if !seen.insert(charm.id.clone()) {
                return Err(ReadingError::DuplicateCharm(charm.id.clone()));
            }
            charms.push(charm.clone());
        }

        self.interpret(question, charms)
    }

    /// Spin the daily fortune wheel.
    pub fn spin(
        &mut self,
        today: NaiveDate,
        last_spin: Option<NaiveDate>,
    ) -> ReadingResult<SpinRecord> {
        fortune::spin(&mut self.rng, today, last_spin)
    }

    fn interpret(&mut self, question: &str, charms: Vec<Charm>) -> ReadingResult<DrawnReading> {
        let houses = map_houses(question, self.catalog.houses());
        let ids: Vec<CharmId> = charms.iter().map(|c| c.id.clone()).collect();
        let combinations = find_combinations(&ids, self.catalog.combinations());
        let synopsis = synthesize(
            &charms,
            &houses,
            question,
            &combinations,
            self.config.style,
            &mut self.rng,
            self.config.chances(),
        )?;

        let reading = DrawnReading {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            question: question.to_string(),
            charms,
            houses,
            combinations: combinations.into_iter().cloned().collect(),
            synopsis,
            name: None,
        };
        info!(
            id = %reading.id,
            charms = reading.charms.len(),
            combinations = reading.combinations.len(),
            "reading created"
        );
        Ok(reading)
    }
}

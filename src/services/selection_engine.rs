//! Roulette selection over a candidate shortlist.
//!
//! Two independent random sources are kept apart: one drives the cosmetic
//! reveal draws, the other makes the single authoritative pick. Replacing or
//! seeding the authoritative source alone is enough to control outcomes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

use crate::domain::models::{Candidate, CandidateSet, RouletteConfig};
use crate::domain::ports::RevealSink;

/// Pacing of the reveal animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinSettings {
    /// Cosmetic draws before the winner is taken
    pub reveal_draws: usize,
    /// Pause after each cosmetic draw
    pub reveal_interval: Duration,
}

impl Default for SpinSettings {
    fn default() -> Self {
        Self {
            reveal_draws: 15,
            reveal_interval: Duration::from_millis(100),
        }
    }
}

impl SpinSettings {
    /// No cosmetic draws and no pauses.
    pub const fn instant() -> Self {
        Self {
            reveal_draws: 0,
            reveal_interval: Duration::ZERO,
        }
    }
}

impl From<&RouletteConfig> for SpinSettings {
    fn from(config: &RouletteConfig) -> Self {
        Self {
            reveal_draws: config.reveal_draws,
            reveal_interval: Duration::from_millis(config.reveal_interval_ms),
        }
    }
}

/// Uniform roulette over a shortlist
///
/// Every candidate wins with probability `1 / len`, whatever its rank.
pub struct SelectionEngine {
    settings: SpinSettings,
    display_rng: StdRng,
    pick_rng: StdRng,
}

impl SelectionEngine {
    pub fn new(settings: SpinSettings) -> Self {
        Self::with_rngs(settings, StdRng::from_entropy(), StdRng::from_entropy())
    }

    /// Reproducible engine; the two seeds feed independent generators.
    pub fn seeded(settings: SpinSettings, display_seed: u64, pick_seed: u64) -> Self {
        Self::with_rngs(
            settings,
            StdRng::seed_from_u64(display_seed),
            StdRng::seed_from_u64(pick_seed),
        )
    }

    pub const fn with_rngs(settings: SpinSettings, display_rng: StdRng, pick_rng: StdRng) -> Self {
        Self {
            settings,
            display_rng,
            pick_rng,
        }
    }

    pub const fn settings(&self) -> SpinSettings {
        self.settings
    }

    /// The authoritative draw, with replacement.
    pub fn draw_winner(&mut self, candidates: &CandidateSet) -> Candidate {
        pick(candidates.as_slice(), &mut self.pick_rng).clone()
    }

    /// Play the cosmetic reveal through `sink`, then take the winner.
    pub async fn spin(&mut self, candidates: &CandidateSet, sink: &mut dyn RevealSink) -> Candidate {
        let total = self.settings.reveal_draws;
        for step in 0..total {
            let shown = pick(candidates.as_slice(), &mut self.display_rng);
            debug!(step, name = %shown.name, "reveal draw");
            sink.transient(step, total, &shown.name);
            if !self.settings.reveal_interval.is_zero() {
                tokio::time::sleep(self.settings.reveal_interval).await;
            }
        }

        let winner = self.draw_winner(candidates);
        info!(winner = %winner.name, pool = candidates.len(), "roulette winner drawn");
        winner
    }
}

impl Default for SelectionEngine {
    fn default() -> Self {
        Self::new(SpinSettings::default())
    }
}

/// Uniform draw with replacement; `candidates` comes from a non-empty set.
fn pick<'a>(candidates: &'a [Candidate], rng: &mut StdRng) -> &'a Candidate {
    &candidates[rng.gen_range(0..candidates.len())]
}

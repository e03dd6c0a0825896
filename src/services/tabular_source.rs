//! Candidate source that scores the static menu table.
//!
//! Score formula, evaluated per entry of the requested price tier:
//!
//! | condition                                      | bonus |
//! |------------------------------------------------|-------|
//! | entry tagged with the current menu slot        | +10   |
//! | `rain` situation and entry tagged soup or rain | +20   |
//! | `stress` situation and entry tagged stress     | +20   |
//! | `cold` situation and entry tagged soup         | +15   |
//! | entry tagged alcohol and slot is dinner        | +5    |
//! | random jitter                                  | 0..=5 |
//!
//! Bonuses stack; a soup entry on a cold, rainy day gets both soup bonuses.

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::domain::errors::GenerationError;
use crate::domain::models::{
    entries_for_tier, Candidate, CandidateSet, Context, MenuEntry, MenuSlot, SituationTag,
    Strategy, MENU_TABLE, SHORTLIST_SIZE,
};
use crate::domain::ports::CandidateSource;

pub const SLOT_BONUS: i32 = 10;
pub const RAIN_SOUP_BONUS: i32 = 20;
pub const STRESS_BONUS: i32 = 20;
pub const COLD_SOUP_BONUS: i32 = 15;
pub const DINNER_DRINK_BONUS: i32 = 5;
pub const MAX_JITTER: i32 = 5;

/// Justification attached to a tabular pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickReason {
    RainySoup,
    StressRelief,
    ColdSoup,
    GoodFit,
}

impl PickReason {
    pub const fn message(self) -> &'static str {
        match self {
            Self::RainySoup => "비 오는 날엔 역시 뜨끈한 국물이죠",
            Self::StressRelief => "스트레스 풀리는 자극적인 한 끼",
            Self::ColdSoup => "추운 날씨에 몸을 녹여줄 따끈한 메뉴",
            Self::GoodFit => "지금 시간대와 예산에 딱 맞는 선택",
        }
    }
}

/// A menu entry with its computed score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredEntry {
    pub entry: &'static MenuEntry,
    pub score: i32,
    pub reason: PickReason,
}

impl ScoredEntry {
    pub fn to_candidate(&self) -> Candidate {
        Candidate {
            name: self.entry.name.to_string(),
            reason: self.reason.message().to_string(),
        }
    }
}

/// Score of `entry` before jitter, with the reason picked by bonus priority.
pub fn base_score(entry: &MenuEntry, context: &Context) -> (i32, PickReason) {
    let rainy_soup = context.has(SituationTag::Rain) && entry.has_any_tag(&["soup", "rain"]);
    let stress_relief = context.has(SituationTag::Stress) && entry.has_tag("stress");
    let cold_soup = context.has(SituationTag::Cold) && entry.has_tag("soup");

    let mut score = 0;
    if entry.has_tag(context.menu_slot.as_str()) {
        score += SLOT_BONUS;
    }
    if rainy_soup {
        score += RAIN_SOUP_BONUS;
    }
    if stress_relief {
        score += STRESS_BONUS;
    }
    if cold_soup {
        score += COLD_SOUP_BONUS;
    }
    if entry.has_tag("alcohol") && context.menu_slot == MenuSlot::Dinner {
        score += DINNER_DRINK_BONUS;
    }

    let reason = if rainy_soup {
        PickReason::RainySoup
    } else if stress_relief {
        PickReason::StressRelief
    } else if cold_soup {
        PickReason::ColdSoup
    } else {
        PickReason::GoodFit
    };

    (score, reason)
}

/// Tag-scoring candidate source over a static table
pub struct TabularSource<R = StdRng> {
    table: &'static [MenuEntry],
    rng: R,
}

impl TabularSource<StdRng> {
    /// Built-in table with an entropy-seeded jitter source.
    pub fn new() -> Self {
        Self::with_rng(MENU_TABLE, StdRng::from_entropy())
    }

    /// Built-in table with reproducible jitter.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(MENU_TABLE, StdRng::seed_from_u64(seed))
    }
}

impl Default for TabularSource<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TabularSource<R> {
    pub const fn with_rng(table: &'static [MenuEntry], rng: R) -> Self {
        Self { table, rng }
    }

    /// Every entry of the context's price tier, best first.
    ///
    /// Equal scores keep table order.
    pub fn rank(&mut self, context: &Context) -> Vec<ScoredEntry> {
        let tier = context.price_tier();
        let mut scored: Vec<ScoredEntry> = entries_for_tier(self.table, tier)
            .map(|entry| {
                let (score, reason) = base_score(entry, context);
                let jitter = self.rng.gen_range(0..=MAX_JITTER);
                ScoredEntry {
                    entry,
                    score: score + jitter,
                    reason,
                }
            })
            .collect();

        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }
}

#[async_trait]
impl<R: Rng + Send> CandidateSource for TabularSource<R> {
    fn strategy(&self) -> Strategy {
        Strategy::Tabular
    }

    fn requires_location(&self) -> bool {
        false
    }

    #[instrument(skip(self, context), fields(tier = context.price_tier(), slot = ?context.menu_slot))]
    async fn candidates(&mut self, context: &Context) -> Result<CandidateSet, GenerationError> {
        let ranked = self.rank(context);
        for scored in &ranked {
            debug!(name = scored.entry.name, score = scored.score, "scored entry");
        }

        let shortlist: Vec<Candidate> = ranked
            .iter()
            .take(SHORTLIST_SIZE)
            .map(ScoredEntry::to_candidate)
            .collect();

        let set = CandidateSet::new(shortlist)
            .ok_or(GenerationError::NoMatchingEntries(context.price_tier()))?;
        if !set.is_full() {
            info!(found = set.len(), tier = context.price_tier(), "partial shortlist");
        }
        Ok(set)
    }
}

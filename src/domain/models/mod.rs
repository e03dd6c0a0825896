//! Domain models

pub mod candidate;
pub mod config;
pub mod context;
pub mod interaction;
pub mod menu;

pub use candidate::{rank_label, Candidate, CandidateSet, EMPHASIS_CHARS, SHORTLIST_SIZE};
pub use config::{
    Config, GenerationConfig, LogFormat, LoggingConfig, RotationPolicy, RouletteConfig, Strategy,
};
pub use context::{
    Budget, Context, MealTime, MenuSlot, Mood, RecommendationRequest, SituationTag, Weather,
};
pub use interaction::{InteractionState, Stage};
pub use menu::{entries_for_tier, MenuEntry, MENU_TABLE, TAG_VOCABULARY};

//! Menu Roulette - situational meal recommender
//!
//! Turns a handful of situational inputs (time of day, location, weather,
//! mood, budget) into a shortlist of up to three dishes, then picks one with
//! a uniformly fair roulette draw.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): models, errors, and the port traits
//! - **Service Layer** (`services`): context resolution, candidate sources,
//!   the selection engine, and the staged session
//! - **Infrastructure Layer** (`infrastructure`): Gemini client, config,
//!   logging, credentials
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```no_run
//! use menu_roulette::domain::models::{Budget, Mood, RecommendationRequest, Weather};
//! use menu_roulette::domain::ports::NullReveal;
//! use menu_roulette::services::{SelectionEngine, Session, SpinSettings, TabularSource};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut session = Session::new(
//!     Box::new(TabularSource::new()),
//!     SelectionEngine::new(SpinSettings::instant()),
//! );
//! let request = RecommendationRequest::new("", Weather::Rain, Mood::Tired, Budget::Moderate);
//! let shortlist = session.submit(&request, 19).await?;
//! let winner = session.spin(&mut NullReveal).await?;
//! println!("{} of {}", winner.name, shortlist.len());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use domain::errors::{GenerationError, InputError, SessionError};
pub use domain::models::{
    Budget, Candidate, CandidateSet, Config, Context, InteractionState, Mood,
    RecommendationRequest, Stage, Strategy, Weather,
};
pub use domain::ports::{CandidateSource, RevealSink, TextGenerator};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{ContextResolver, SelectionEngine, Session, TabularSource};

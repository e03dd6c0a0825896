//! Service layer: context resolution, candidate sources, roulette, sessions.

pub mod context_resolver;
pub mod generative_source;
pub mod prompt_builder;
pub mod response_parser;
pub mod selection_engine;
pub mod session;
pub mod tabular_source;

pub use context_resolver::ContextResolver;
pub use generative_source::GenerativeSource;
pub use prompt_builder::PromptBuilder;
pub use response_parser::{parse_candidates, parse_records};
pub use selection_engine::{SelectionEngine, SpinSettings};
pub use session::Session;
pub use tabular_source::{PickReason, ScoredEntry, TabularSource};

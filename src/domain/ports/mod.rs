//! Port trait definitions (Hexagonal Architecture)
//!
//! - TextGenerator: hosted model call
//! - CandidateSource: shortlist producers (generative, tabular)
//! - RevealSink: presentation hook for the roulette animation

pub mod candidate_source;
pub mod reveal;
pub mod text_generator;

pub use candidate_source::CandidateSource;
pub use reveal::{NullReveal, RecordingReveal, RevealSink};
pub use text_generator::TextGenerator;

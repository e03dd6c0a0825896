use async_trait::async_trait;

use crate::domain::errors::GenerationError;
use crate::domain::models::{CandidateSet, Context, Strategy};

/// Port for anything that turns a resolved context into a shortlist
///
/// Takes `&mut self` because sources may own a random generator.
#[async_trait]
pub trait CandidateSource: Send {
    fn strategy(&self) -> Strategy;

    /// Whether submissions must carry a non-empty location.
    fn requires_location(&self) -> bool;

    /// Name of the backing model, if any.
    fn model(&self) -> Option<&str> {
        None
    }

    async fn candidates(&mut self, context: &Context) -> Result<CandidateSet, GenerationError>;
}

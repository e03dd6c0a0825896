//! Staged interaction: submit inputs, reveal candidates, spin, reveal winner.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::domain::errors::{InputError, SessionError, SessionResult};
use crate::domain::models::{
    Candidate, CandidateSet, InteractionState, RecommendationRequest, Stage, Strategy,
};
use crate::domain::ports::{CandidateSource, RevealSink};
use crate::services::context_resolver::ContextResolver;
use crate::services::selection_engine::SelectionEngine;

/// One user's interaction with the recommender
///
/// Owns its state outright; nothing is shared between sessions except the
/// read-only menu table.
pub struct Session {
    id: Uuid,
    source: Box<dyn CandidateSource>,
    engine: SelectionEngine,
    resolver: ContextResolver,
    state: InteractionState,
}

impl Session {
    pub fn new(source: Box<dyn CandidateSource>, engine: SelectionEngine) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
            engine,
            resolver: ContextResolver::new(),
            state: InteractionState::Idle,
        }
    }

    pub const fn id(&self) -> Uuid {
        self.id
    }

    pub const fn state(&self) -> &InteractionState {
        &self.state
    }

    pub const fn stage(&self) -> Stage {
        self.state.stage()
    }

    pub fn strategy(&self) -> Strategy {
        self.source.strategy()
    }

    /// Model behind the candidate source, for the generative strategy.
    pub fn model(&self) -> Option<&str> {
        self.source.model()
    }

    /// Check inputs without touching the session.
    pub fn validate(&self, request: &RecommendationRequest) -> Result<(), InputError> {
        if self.source.requires_location() && !request.has_location() {
            return Err(InputError::MissingLocation);
        }
        Ok(())
    }

    /// Submit fresh inputs and generate a shortlist.
    ///
    /// Invalid inputs leave the current state untouched. Otherwise any
    /// previous candidates are discarded first, so a failed generation always
    /// ends in [`Stage::Idle`].
    #[instrument(skip(self, request), fields(session_id = %self.id, strategy = %self.source.strategy()))]
    pub async fn submit(
        &mut self,
        request: &RecommendationRequest,
        hour: u32,
    ) -> SessionResult<CandidateSet> {
        self.validate(request)?;

        self.state = InteractionState::Idle;
        let context = self.resolver.resolve(hour, request);
        info!(
            meal_time = ?context.meal_time,
            menu_slot = ?context.menu_slot,
            tier = context.price_tier(),
            "context resolved"
        );

        match self.source.candidates(&context).await {
            Ok(candidates) => {
                self.state = InteractionState::CandidatesReady {
                    context,
                    candidates: candidates.clone(),
                };
                Ok(candidates)
            }
            Err(err) => {
                warn!(error = %err, "candidate generation failed");
                Err(err.into())
            }
        }
    }

    /// Spin the roulette over the current shortlist.
    #[instrument(skip(self, sink), fields(session_id = %self.id))]
    pub async fn spin(&mut self, sink: &mut dyn RevealSink) -> SessionResult<Candidate> {
        let InteractionState::CandidatesReady {
            context,
            candidates,
        } = &self.state
        else {
            return Err(SessionError::InvalidTransition {
                action: "spin",
                stage: self.state.stage(),
            });
        };
        let (context, candidates) = (context.clone(), candidates.clone());

        // State only changes once the draw has completed.
        let winner = self.engine.spin(&candidates, sink).await;
        self.state = InteractionState::WinnerRevealed {
            context,
            candidates,
            winner: winner.clone(),
        };

        Ok(winner)
    }

    /// Return to [`Stage::Idle`] from any stage.
    pub fn reset(&mut self) {
        info!(session_id = %self.id, from = %self.state.stage(), "session reset");
        self.state = InteractionState::Idle;
    }
}

use serde::Serialize;
use std::fmt;

use super::candidate::{Candidate, CandidateSet};
use super::context::Context;

/// Coarse stage of an interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Idle,
    CandidatesReady,
    WinnerRevealed,
}

impl Stage {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::CandidatesReady => "candidates_ready",
            Self::WinnerRevealed => "winner_revealed",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-session interaction state
///
/// Candidates only exist once generated and a winner only once spun, so the
/// data lives inside the variants rather than in optional fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum InteractionState {
    #[default]
    Idle,
    CandidatesReady {
        context: Context,
        candidates: CandidateSet,
    },
    WinnerRevealed {
        context: Context,
        candidates: CandidateSet,
        winner: Candidate,
    },
}

impl InteractionState {
    pub const fn stage(&self) -> Stage {
        match self {
            Self::Idle => Stage::Idle,
            Self::CandidatesReady { .. } => Stage::CandidatesReady,
            Self::WinnerRevealed { .. } => Stage::WinnerRevealed,
        }
    }

    pub const fn candidates(&self) -> Option<&CandidateSet> {
        match self {
            Self::Idle => None,
            Self::CandidatesReady { candidates, .. } | Self::WinnerRevealed { candidates, .. } => {
                Some(candidates)
            }
        }
    }

    pub const fn context(&self) -> Option<&Context> {
        match self {
            Self::Idle => None,
            Self::CandidatesReady { context, .. } | Self::WinnerRevealed { context, .. } => {
                Some(context)
            }
        }
    }

    pub const fn winner(&self) -> Option<&Candidate> {
        match self {
            Self::WinnerRevealed { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

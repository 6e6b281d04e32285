//! Analysis status.
//!
//! The status is a tagged enum so that "exactly one of result or error
//! when settled, neither otherwise" holds by construction.

use crate::types::{RequestId, Timestamp};

/// Terminal outcome of one analysis: generated text or an error message.
pub type AnalysisOutcome = Result<String, String>;

/// Where the current analysis stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnalysisStatus {
    /// Nothing has been requested yet.
    #[default]
    Idle,

    /// A request is outstanding.
    InFlight { request_id: RequestId },

    /// The most recent request finished.
    Settled {
        outcome: AnalysisOutcome,
        settled_at: Timestamp,
    },
}

impl AnalysisStatus {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// Id of the outstanding request, if any.
    pub fn in_flight_id(&self) -> Option<RequestId> {
        match self {
            Self::InFlight { request_id } => Some(*request_id),
            _ => None,
        }
    }

    /// Generated text, when settled successfully.
    pub fn result(&self) -> Option<&str> {
        match self {
            Self::Settled {
                outcome: Ok(text), ..
            } => Some(text),
            _ => None,
        }
    }

    /// Error message, when settled with a failure.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Settled {
                outcome: Err(message),
                ..
            } => Some(message),
            _ => None,
        }
    }

    /// Short lowercase label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::InFlight { .. } => "in_flight",
            Self::Settled { outcome: Ok(_), .. } => "completed",
            Self::Settled { outcome: Err(_), .. } => "failed",
        }
    }
}

//! Lifecycle status shared by editions, sport events and matches.

use crate::models::error::TournamentError;
use serde::{Deserialize, Serialize};

/// Current phase of an edition, sport event or match.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Scheduled,
    InProgress,
    Ended,
    /// Ended but reopened for corrections (placements, scores).
    OpenForEdits,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Scheduled,
        Status::InProgress,
        Status::Ended,
        Status::OpenForEdits,
    ];

    /// Whether moving from `self` to `requested` is allowed. Staying put always is.
    pub fn can_transition_to(self, requested: Status) -> bool {
        use Status::*;
        self == requested
            || matches!(
                (self, requested),
                (Scheduled, InProgress)
                    | (InProgress, Ended)
                    | (Ended, OpenForEdits)
                    | (OpenForEdits, Ended)
            )
    }

    /// Ended or reopened; the entity has been played out.
    pub fn is_finished(self) -> bool {
        matches!(self, Status::Ended | Status::OpenForEdits)
    }
}

/// Fail with `InvalidStatusTransition` unless `current -> requested` is a legal move.
pub fn check_status(current: Status, requested: Status) -> Result<(), TournamentError> {
    if current.can_transition_to(requested) {
        Ok(())
    } else {
        Err(TournamentError::InvalidStatusTransition {
            from: current,
            to: requested,
        })
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::Scheduled => "SCHEDULED",
            Status::InProgress => "IN_PROGRESS",
            Status::Ended => "ENDED",
            Status::OpenForEdits => "OPEN_FOR_EDITS",
        };
        f.write_str(s)
    }
}

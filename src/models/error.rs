//! Domain errors for every rule the tournament enforces.

use crate::models::action::ActionKind;
use crate::models::game::Importance;
use crate::models::sport_event::{Modality, SportType};
use crate::models::status::Status;
use crate::models::team::TeamName;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Entity kinds that can be looked up by id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Resource {
    Edition,
    SportEvent,
    Match,
    Participant,
    Team,
    Goal,
    PenaltyCard,
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Resource::Edition => "Edition",
            Resource::SportEvent => "Sport event",
            Resource::Match => "Match",
            Resource::Participant => "Participant",
            Resource::Team => "Team",
            Resource::Goal => "Goal",
            Resource::PenaltyCard => "Penalty card",
        };
        f.write_str(s)
    }
}

/// Coarse classification of a failure, used by the HTTP layer to pick a status code.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Conflict,
    UnprocessableEntity,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error("{resource} {id} not found")]
    NotFound { resource: Resource, id: Uuid },

    #[error("A match needs two different teams")]
    SameTeams,

    #[error("Match is {sport:?}/{modality:?} but its sport event is {event_sport:?}/{event_modality:?}")]
    MatchSportMismatch {
        sport: SportType,
        modality: Modality,
        event_sport: SportType,
        event_modality: Modality,
    },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: Status, to: Status },

    #[error("Invalid match importance: no {0:?} slot is open in this sport event")]
    InvalidMatchImportance(Importance),

    #[error("Invalid class number {0:?}, expected a pattern like 2-07")]
    InvalidClassNumber(String),

    #[error("{sport:?} does not support {action:?} actions")]
    UnsupportedSportForAction { sport: SportType, action: ActionKind },

    #[error("Match details do not fit {0:?}")]
    InvalidMatchDetails(SportType),

    #[error("Total matches must be at least {min}, got {given}")]
    InvalidTotalMatches { min: u32, given: u32 },

    #[error("Closing date must not be before opening date")]
    InvalidEditionDates,

    #[error("Participant name must not be empty")]
    EmptyName,

    #[error("Unknown team name {0:?}")]
    UnknownTeamName(String),

    #[error("A sport event for {sport:?}/{modality:?} already exists in this edition")]
    DuplicateSportEvent { sport: SportType, modality: Modality },

    #[error("Team {0:?} already exists")]
    DuplicateTeam(TeamName),

    #[error("Another edition is already in progress")]
    EditionAlreadyInProgress,

    #[error("Another sport event of this edition is already in progress")]
    SportEventAlreadyInProgress,

    #[error("Another match of this sport event is already in progress")]
    MatchAlreadyInProgress,

    #[error("Edition is ended; reopen it before editing")]
    EditionClosed,

    #[error("Edition is not in progress")]
    EditionNotInProgress,

    #[error("Edition still has sport events that have not ended")]
    EditionHasUnfinishedEvents,

    #[error("Sport event is not in progress")]
    SportEventNotInProgress,

    #[error("Sport event has left SCHEDULED; {0} can no longer change")]
    SportEventLocked(&'static str),

    #[error("Placements can only change while the sport event is open for edits")]
    PlacementsLocked,

    #[error("Sport event is {0}; matches can no longer be registered")]
    SportEventClosed(Status),

    #[error("Need at least {required} registered matches to start, have {registered}")]
    NotEnoughMatchesToStart { required: usize, registered: usize },

    #[error("Need {required} registered and ended matches to finish, have {registered} registered and {ended} ended")]
    MatchesNotFinished {
        required: usize,
        registered: usize,
        ended: usize,
    },

    #[error("{registered} matches already registered; a total of {total} leaves no room for the knockout stage")]
    TooManyMatchesForTotal { registered: usize, total: u32 },

    #[error("Matches of another importance tier have not ended yet")]
    PendingMatchesOfOtherImportance,

    #[error("Match is {0}; it can only change while SCHEDULED")]
    MatchLocked(Status),

    #[error("Match is not in progress")]
    MatchNotInProgress,

    #[error("Participant {0} does not play for either team of the match")]
    PlayerTeamNotInMatch(Uuid),

    #[error("Players must represent both teams of the match")]
    SingleTeamRoster,

    #[error("Participant {0} is not listed in the match")]
    PlayerNotInMatch(Uuid),

    #[error("{resource} {id} is still referenced and cannot be deleted")]
    InUse { resource: Resource, id: Uuid },

    #[error("{0} can only be deleted while SCHEDULED")]
    NotDeletable(Resource),
}

impl TournamentError {
    pub fn not_found(resource: Resource, id: Uuid) -> Self {
        TournamentError::NotFound { resource, id }
    }

    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            NotFound { .. } => ErrorKind::NotFound,
            SameTeams
            | MatchSportMismatch { .. }
            | InvalidStatusTransition { .. }
            | InvalidMatchImportance(_)
            | InvalidClassNumber(_)
            | UnsupportedSportForAction { .. }
            | InvalidMatchDetails(_)
            | InvalidTotalMatches { .. }
            | InvalidEditionDates
            | EmptyName
            | UnknownTeamName(_) => ErrorKind::BadRequest,
            DuplicateSportEvent { .. }
            | DuplicateTeam(_)
            | EditionAlreadyInProgress
            | SportEventAlreadyInProgress
            | MatchAlreadyInProgress => ErrorKind::Conflict,
            EditionClosed
            | EditionNotInProgress
            | EditionHasUnfinishedEvents
            | SportEventNotInProgress
            | SportEventLocked(_)
            | PlacementsLocked
            | SportEventClosed(_)
            | NotEnoughMatchesToStart { .. }
            | MatchesNotFinished { .. }
            | TooManyMatchesForTotal { .. }
            | PendingMatchesOfOtherImportance
            | MatchLocked(_)
            | MatchNotInProgress
            | PlayerTeamNotInMatch(_)
            | SingleTeamRoster
            | PlayerNotInMatch(_)
            | InUse { .. }
            | NotDeletable(_) => ErrorKind::UnprocessableEntity,
        }
    }
}

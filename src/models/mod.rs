//! Data structures for the interclass games: editions, sport events, matches, players, actions.

mod action;
mod edition;
mod error;
mod game;
mod participant;
mod sport_event;
mod status;
mod team;

pub use action::{ActionKind, CardColor, Goal, GoalId, PenaltyCard, PenaltyCardId};
pub use edition::{Edition, EditionId, TeamScores};
pub use error::{ErrorKind, Resource, TournamentError};
pub use game::{GameMatch, Importance, MatchDetails, MatchId, SetScore, Side};
pub use participant::{check_class_number, Participant, ParticipantId};
pub use sport_event::{Modality, Placements, SportEvent, SportEventId, SportType};
pub use status::{check_status, Status};
pub use team::{Team, TeamId, TeamName};

//! Interclass games backend: library with models, business logic, store and HTTP API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    create_edition, create_match, create_participant, create_sport_event, create_team,
    delete_edition, delete_goal, delete_match, delete_participant, delete_penalty_card,
    delete_sport_event, delete_team, import_participants, parse_roster, replace_goal,
    replace_penalty_card, save_goal, save_penalty_card, seed_teams, update_edition, update_match,
    update_participant, update_sport_event, update_team, EditionUpdate, MatchUpdate, NewEdition,
    NewGoal, NewMatch, NewPenaltyCard, NewParticipant, NewSportEvent, NewTeam, ParticipantUpdate,
    SportEventUpdate, SportRegistry, TeamUpdate,
};
pub use models::{
    check_class_number, check_status, ActionKind, CardColor, Edition, EditionId, ErrorKind,
    GameMatch, Goal, Importance, MatchDetails, MatchId, Modality, Participant, PenaltyCard,
    Placements, Resource, SportEvent, SportType, Status, Team, TeamName, TeamScores,
    TournamentError,
};
pub use store::Store;

//! Tournament business logic: lifecycle rules and the operations that enforce them.

pub mod action_rules;
pub mod match_rules;
pub mod sport_event_rules;
pub mod sports;

mod editions;
mod goals;
mod matches;
mod participants;
mod penalty_cards;
mod sport_events;
mod teams;

pub use editions::{create_edition, delete_edition, update_edition, EditionUpdate, NewEdition};
pub use goals::{delete_goal, replace_goal, save_goal, NewGoal};
pub use matches::{create_match, delete_match, update_match, MatchUpdate, NewMatch};
pub use participants::{
    create_participant, delete_participant, import_participants, parse_roster, update_participant,
    NewParticipant, ParticipantUpdate, RosterRow,
};
pub use penalty_cards::{delete_penalty_card, replace_penalty_card, save_penalty_card, NewPenaltyCard};
pub use sport_events::{
    create_sport_event, delete_sport_event, update_sport_event, NewSportEvent, SportEventUpdate,
};
pub use sports::{SportRegistry, SportRules};
pub use teams::{create_team, delete_team, seed_teams, update_team, NewTeam, TeamUpdate};

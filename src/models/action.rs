//! In-match actions: goals and penalty cards.

use crate::models::game::MatchId;
use crate::models::participant::ParticipantId;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type GoalId = Uuid;
pub type PenaltyCardId = Uuid;

/// Kinds of action a sport may or may not support.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Goal,
    PenaltyCard,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardColor {
    Yellow,
    Red,
}

/// A goal scored by a player. `team_id` is the player's team at scoring time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub match_id: MatchId,
    pub player_id: ParticipantId,
    pub team_id: TeamId,
    pub scored_at: DateTime<Utc>,
}

/// A card shown to a player.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PenaltyCard {
    pub id: PenaltyCardId,
    pub match_id: MatchId,
    pub player_id: ParticipantId,
    pub team_id: TeamId,
    pub color: CardColor,
    pub shown_at: DateTime<Utc>,
}

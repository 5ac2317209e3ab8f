//! Match (game), Importance tier, and sport-specific match details.

use crate::models::participant::ParticipantId;
use crate::models::sport_event::{Modality, SportEventId, SportType};
use crate::models::status::Status;
use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Bracket stage of a match. Tiers are played in this order.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Importance {
    #[default]
    Normal,
    Semifinal,
    ThirdPlacePlayoff,
    Final,
}

/// Score of one set, for set-based sports.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SetScore {
    pub team_a: u32,
    pub team_b: u32,
}

/// Extra data that only some sports record.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchDetails {
    /// Per-set scores (volleyball, table tennis).
    Sets { sets: Vec<SetScore> },
    /// Penalty shootout after a draw (futsal, handball).
    Shootout { penalties_a: u32, penalties_b: u32 },
}

/// A single game between two teams inside a sport event.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub sport: SportType,
    pub modality: Modality,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub players: Vec<ParticipantId>,
    pub team_score_a: u32,
    pub team_score_b: u32,
    pub status: Status,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub importance: Importance,
    pub sport_event_id: SportEventId,
    pub details: Option<MatchDetails>,
}

impl GameMatch {
    /// Which side of the match a team plays on, if any.
    pub fn side_of(&self, team_id: TeamId) -> Option<Side> {
        if team_id == self.team_a {
            Some(Side::A)
        } else if team_id == self.team_b {
            Some(Side::B)
        } else {
            None
        }
    }

    pub fn has_player(&self, player_id: ParticipantId) -> bool {
        self.players.contains(&player_id)
    }

    pub fn involves_team(&self, team_id: TeamId) -> bool {
        self.side_of(team_id).is_some()
    }

    /// Add a point to the given team. Team B is credited for any team that is not team A.
    pub fn add_point(&mut self, team_id: TeamId) {
        match self.side_of(team_id) {
            Some(Side::A) => self.team_score_a += 1,
            _ => self.team_score_b += 1,
        }
    }

    /// Remove a point from the given team, never going below zero.
    pub fn remove_point(&mut self, team_id: TeamId) {
        match self.side_of(team_id) {
            Some(Side::A) => self.team_score_a = self.team_score_a.saturating_sub(1),
            _ => self.team_score_b = self.team_score_b.saturating_sub(1),
        }
    }
}

/// Side of a match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    A,
    B,
}

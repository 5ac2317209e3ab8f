//! SportEvent: one sport and modality bracket within an edition.

use crate::models::edition::EditionId;
use crate::models::status::Status;
use crate::models::team::TeamName;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a sport event.
pub type SportEventId = Uuid;

/// Sports played in the tournament.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SportType {
    Futsal,
    Handball,
    Basketball,
    Volleyball,
    TableTennis,
    Chess,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Masculine,
    Feminine,
    Mixed,
}

/// Final standings of a sport event. Unset places hold `TeamName::None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Placements {
    pub first: TeamName,
    pub second: TeamName,
    pub third: TeamName,
    pub fourth: TeamName,
    pub fifth: TeamName,
}

/// A sport+modality competition inside one edition.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SportEvent {
    pub id: SportEventId,
    pub sport: SportType,
    pub modality: Modality,
    pub placements: Placements,
    /// Expected number of matches, knockout stage included.
    pub total_matches: u32,
    pub status: Status,
    pub edition_id: EditionId,
}

impl SportEvent {
    /// Matches reserved for the knockout stage: two semifinals, third place, final.
    pub const KNOCKOUT_SLOTS: u32 = 4;

    pub fn new(edition_id: EditionId, sport: SportType, modality: Modality, total_matches: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport,
            modality,
            placements: Placements::default(),
            total_matches,
            status: Status::Scheduled,
            edition_id,
        }
    }

    /// Number of normal (group stage) matches: `total_matches - 4`.
    pub fn normal_match_slots(&self) -> usize {
        self.total_matches.saturating_sub(Self::KNOCKOUT_SLOTS) as usize
    }
}

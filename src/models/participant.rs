//! Participant (student player) and class number validation.

use crate::models::error::TournamentError;
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a participant.
pub type ParticipantId = Uuid;

/// A student playing for one team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// School year and class, formatted `[1-3]-NN` (e.g. `2-07`).
    pub class_number: String,
    pub team_id: TeamId,
}

impl Participant {
    pub fn new(name: impl Into<String>, class_number: impl Into<String>, team_id: TeamId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            class_number: class_number.into(),
            team_id,
        }
    }
}

/// Check a class number against `[1-3]-NN`: a year digit 1 to 3, a dash, two digits.
pub fn check_class_number(class_number: &str) -> Result<(), TournamentError> {
    let bytes = class_number.as_bytes();
    let valid = bytes.len() == 4
        && (b'1'..=b'3').contains(&bytes[0])
        && bytes[1] == b'-'
        && bytes[2].is_ascii_digit()
        && bytes[3].is_ascii_digit();
    if valid {
        Ok(())
    } else {
        Err(TournamentError::InvalidClassNumber(class_number.to_string()))
    }
}

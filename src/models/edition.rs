//! Edition: one year's tournament and the running score of every team.

use crate::models::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an edition.
pub type EditionId = Uuid;

/// Edition-wide score of each of the five teams.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamScores {
    pub blue: i32,
    pub green: i32,
    pub orange: i32,
    pub purple: i32,
    pub white: i32,
}

/// A yearly tournament instance.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Edition {
    pub id: EditionId,
    pub scores: TeamScores,
    pub status: Status,
    pub opening_date: NaiveDate,
    pub closing_date: NaiveDate,
}

impl Edition {
    /// Create a new edition in `Scheduled` state with zero scores.
    pub fn new(opening_date: NaiveDate, closing_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            scores: TeamScores::default(),
            status: Status::Scheduled,
            opening_date,
            closing_date,
        }
    }
}

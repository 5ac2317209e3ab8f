//! Team and TeamName: the five fixed competing class-groups.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team.
pub type TeamId = Uuid;

/// The five competing teams plus a `None` placeholder for unassigned placements.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeamName {
    Blue,
    Green,
    Orange,
    Purple,
    White,
    #[default]
    None,
}

impl TeamName {
    /// The five real teams, in display order.
    pub const COMPETING: [TeamName; 5] = [
        TeamName::Blue,
        TeamName::Green,
        TeamName::Orange,
        TeamName::Purple,
        TeamName::White,
    ];

    /// Case-insensitive lookup, used by the roster import.
    pub fn parse(s: &str) -> Option<TeamName> {
        let s = s.trim();
        Self::COMPETING
            .into_iter()
            .chain(std::iter::once(TeamName::None))
            .find(|name| format!("{name:?}").eq_ignore_ascii_case(s))
    }
}

/// A competing team and the points it has accumulated.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: TeamName,
    pub points: i32,
}

impl Team {
    pub fn new(name: TeamName) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            points: 0,
        }
    }
}

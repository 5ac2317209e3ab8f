//! Sport registry: what each sport allows, looked up by `SportType`.

use crate::models::{ActionKind, MatchDetails, SportType, TournamentError};
use std::collections::HashMap;

/// Shape of the sport-specific details a match may carry.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DetailsShape {
    None,
    Sets,
    Shootout,
}

/// Rules for one sport.
#[derive(Clone, Copy, Debug)]
pub struct SportRules {
    pub actions: &'static [ActionKind],
    pub details: DetailsShape,
}

impl SportRules {
    pub fn supports(&self, action: ActionKind) -> bool {
        self.actions.contains(&action)
    }

    fn accepts(&self, details: &MatchDetails) -> bool {
        matches!(
            (self.details, details),
            (DetailsShape::Sets, MatchDetails::Sets { .. })
                | (DetailsShape::Shootout, MatchDetails::Shootout { .. })
        )
    }
}

const GOAL_SPORT: SportRules = SportRules {
    actions: &[ActionKind::Goal, ActionKind::PenaltyCard],
    details: DetailsShape::Shootout,
};

const POINTS_SPORT: SportRules = SportRules {
    actions: &[ActionKind::Goal],
    details: DetailsShape::None,
};

const SET_SPORT: SportRules = SportRules {
    actions: &[ActionKind::PenaltyCard],
    details: DetailsShape::Sets,
};

const BOARD_SPORT: SportRules = SportRules {
    actions: &[],
    details: DetailsShape::None,
};

/// Map from sport to its rules, built once at startup.
#[derive(Clone, Debug)]
pub struct SportRegistry {
    rules: HashMap<SportType, SportRules>,
}

impl Default for SportRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl SportRegistry {
    /// The rules used by the tournament. Basketball baskets are recorded as goals.
    pub fn standard() -> Self {
        let rules = HashMap::from([
            (SportType::Futsal, GOAL_SPORT),
            (SportType::Handball, GOAL_SPORT),
            (SportType::Basketball, POINTS_SPORT),
            (SportType::Volleyball, SET_SPORT),
            (SportType::TableTennis, SET_SPORT),
            (SportType::Chess, BOARD_SPORT),
        ]);
        Self { rules }
    }

    /// Rules for a sport. Unregistered sports get no actions and no details.
    pub fn rules(&self, sport: SportType) -> SportRules {
        self.rules.get(&sport).copied().unwrap_or(BOARD_SPORT)
    }

    /// Fail with `UnsupportedSportForAction` unless `sport` records `action`.
    pub fn check_action(&self, sport: SportType, action: ActionKind) -> Result<(), TournamentError> {
        if self.rules(sport).supports(action) {
            Ok(())
        } else {
            Err(TournamentError::UnsupportedSportForAction { sport, action })
        }
    }

    /// Fail with `InvalidMatchDetails` if the details do not fit the sport.
    pub fn check_details(
        &self,
        sport: SportType,
        details: Option<&MatchDetails>,
    ) -> Result<(), TournamentError> {
        match details {
            Some(d) if !self.rules(sport).accepts(d) => Err(TournamentError::InvalidMatchDetails(sport)),
            _ => Ok(()),
        }
    }
}

//! In-memory store: every entity by id, plus the foreign-key queries the rules need.

use crate::models::{
    Edition, EditionId, GameMatch, Goal, GoalId, MatchId, Participant, ParticipantId, PenaltyCard,
    PenaltyCardId, Resource, SportEvent, SportEventId, Status, Team, TeamId, TeamName,
    TournamentError,
};
use std::collections::BTreeMap;
use uuid::Uuid;

/// All tournament data. Handlers hold it behind a lock for the length of one request.
#[derive(Clone, Debug, Default)]
pub struct Store {
    pub editions: BTreeMap<EditionId, Edition>,
    pub sport_events: BTreeMap<SportEventId, SportEvent>,
    pub matches: BTreeMap<MatchId, GameMatch>,
    pub participants: BTreeMap<ParticipantId, Participant>,
    pub teams: BTreeMap<TeamId, Team>,
    pub goals: BTreeMap<GoalId, Goal>,
    pub penalty_cards: BTreeMap<PenaltyCardId, PenaltyCard>,
}

fn lookup<T>(map: &BTreeMap<Uuid, T>, resource: Resource, id: Uuid) -> Result<&T, TournamentError> {
    map.get(&id).ok_or(TournamentError::not_found(resource, id))
}

fn lookup_mut<T>(
    map: &mut BTreeMap<Uuid, T>,
    resource: Resource,
    id: Uuid,
) -> Result<&mut T, TournamentError> {
    map.get_mut(&id).ok_or(TournamentError::not_found(resource, id))
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edition(&self, id: EditionId) -> Result<&Edition, TournamentError> {
        lookup(&self.editions, Resource::Edition, id)
    }

    pub fn edition_mut(&mut self, id: EditionId) -> Result<&mut Edition, TournamentError> {
        lookup_mut(&mut self.editions, Resource::Edition, id)
    }

    pub fn sport_event(&self, id: SportEventId) -> Result<&SportEvent, TournamentError> {
        lookup(&self.sport_events, Resource::SportEvent, id)
    }

    pub fn sport_event_mut(&mut self, id: SportEventId) -> Result<&mut SportEvent, TournamentError> {
        lookup_mut(&mut self.sport_events, Resource::SportEvent, id)
    }

    pub fn game(&self, id: MatchId) -> Result<&GameMatch, TournamentError> {
        lookup(&self.matches, Resource::Match, id)
    }

    pub fn game_mut(&mut self, id: MatchId) -> Result<&mut GameMatch, TournamentError> {
        lookup_mut(&mut self.matches, Resource::Match, id)
    }

    pub fn participant(&self, id: ParticipantId) -> Result<&Participant, TournamentError> {
        lookup(&self.participants, Resource::Participant, id)
    }

    pub fn team(&self, id: TeamId) -> Result<&Team, TournamentError> {
        lookup(&self.teams, Resource::Team, id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Result<&mut Team, TournamentError> {
        lookup_mut(&mut self.teams, Resource::Team, id)
    }

    pub fn goal(&self, id: GoalId) -> Result<&Goal, TournamentError> {
        lookup(&self.goals, Resource::Goal, id)
    }

    pub fn penalty_card(&self, id: PenaltyCardId) -> Result<&PenaltyCard, TournamentError> {
        lookup(&self.penalty_cards, Resource::PenaltyCard, id)
    }

    pub fn team_by_name(&self, name: TeamName) -> Option<&Team> {
        self.teams.values().find(|t| t.name == name)
    }

    pub fn editions_with_status(&self, status: Status) -> Vec<&Edition> {
        self.editions.values().filter(|e| e.status == status).collect()
    }

    pub fn sport_events_of(&self, edition_id: EditionId) -> Vec<&SportEvent> {
        self.sport_events
            .values()
            .filter(|s| s.edition_id == edition_id)
            .collect()
    }

    /// Matches registered under a sport event (owned copies, for handing to validators).
    pub fn matches_of(&self, sport_event_id: SportEventId) -> Vec<GameMatch> {
        self.matches
            .values()
            .filter(|m| m.sport_event_id == sport_event_id)
            .cloned()
            .collect()
    }

    pub fn goals_of(&self, match_id: MatchId) -> Vec<&Goal> {
        self.goals.values().filter(|g| g.match_id == match_id).collect()
    }

    pub fn penalty_cards_of(&self, match_id: MatchId) -> Vec<&PenaltyCard> {
        self.penalty_cards
            .values()
            .filter(|c| c.match_id == match_id)
            .collect()
    }

    /// Resolve a list of participant ids, failing on the first unknown one.
    pub fn participants_by_ids(&self, ids: &[ParticipantId]) -> Result<Vec<Participant>, TournamentError> {
        ids.iter().map(|&id| self.participant(id).cloned()).collect()
    }

    /// Remove a match together with its goals and penalty cards.
    pub fn remove_match_cascade(&mut self, match_id: MatchId) {
        self.matches.remove(&match_id);
        self.goals.retain(|_, g| g.match_id != match_id);
        self.penalty_cards.retain(|_, c| c.match_id != match_id);
    }

    /// Remove a sport event together with its matches.
    pub fn remove_sport_event_cascade(&mut self, sport_event_id: SportEventId) {
        let match_ids: Vec<MatchId> = self
            .matches
            .values()
            .filter(|m| m.sport_event_id == sport_event_id)
            .map(|m| m.id)
            .collect();
        for id in match_ids {
            self.remove_match_cascade(id);
        }
        self.sport_events.remove(&sport_event_id);
    }
}

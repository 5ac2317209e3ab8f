//! Match operations: register in a sport event, edit rosters, start and end, delete.

use crate::logic::match_rules::{
    check_match_for_sport_event, check_match_importance, check_match_status,
    check_matches_for_importance, check_players_for_match, check_teams_for_match,
};
use crate::logic::sports::SportRegistry;
use crate::models::{
    check_status, GameMatch, Importance, MatchDetails, MatchId, Modality, ParticipantId, Resource,
    SportEventId, SportType, Status, TeamId, TournamentError,
};
use crate::store::Store;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize)]
pub struct NewMatch {
    pub sport_event_id: SportEventId,
    pub sport: SportType,
    pub modality: Modality,
    pub team_a: TeamId,
    pub team_b: TeamId,
    #[serde(default)]
    pub players: Vec<ParticipantId>,
    #[serde(default)]
    pub importance: Importance,
    #[serde(default)]
    pub details: Option<MatchDetails>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MatchUpdate {
    pub team_a: Option<TeamId>,
    pub team_b: Option<TeamId>,
    pub players: Option<Vec<ParticipantId>>,
    pub status: Option<Status>,
    pub details: Option<MatchDetails>,
}

/// Check teams exist, differ, and that the roster fits them.
fn check_roster(
    store: &Store,
    team_a: TeamId,
    team_b: TeamId,
    players: &[ParticipantId],
) -> Result<(), TournamentError> {
    check_teams_for_match(team_a, team_b)?;
    store.team(team_a)?;
    store.team(team_b)?;
    let players = store.participants_by_ids(players)?;
    check_players_for_match(&players, team_a, team_b)
}

/// Register a match. Checked in order: sport/modality agreement, teams, players,
/// free slot for the tier, then that other tiers have been played out.
pub fn create_match(
    store: &mut Store,
    sports: &SportRegistry,
    new: NewMatch,
) -> Result<GameMatch, TournamentError> {
    let event = store.sport_event(new.sport_event_id)?.clone();
    if event.status.is_finished() {
        return Err(TournamentError::SportEventClosed(event.status));
    }
    check_match_for_sport_event(&event, &new)?;
    check_roster(store, new.team_a, new.team_b, &new.players)?;
    sports.check_details(new.sport, new.details.as_ref())?;

    let registered = store.matches_of(event.id);
    check_match_importance(&event, registered.len(), new.importance)?;
    check_matches_for_importance(&registered, new.importance)?;

    let game = GameMatch {
        id: Uuid::new_v4(),
        sport: new.sport,
        modality: new.modality,
        team_a: new.team_a,
        team_b: new.team_b,
        players: new.players,
        team_score_a: 0,
        team_score_b: 0,
        status: Status::Scheduled,
        started_at: None,
        ended_at: None,
        importance: new.importance,
        sport_event_id: event.id,
        details: new.details,
    };
    log::info!(
        "Registered {:?} match {} in sport event {} ({} of {})",
        game.importance,
        game.id,
        event.id,
        registered.len() + 1,
        event.total_matches
    );
    store.matches.insert(game.id, game.clone());
    Ok(game)
}

/// Apply an update. Rosters only change while the match is `Scheduled`; status changes
/// need a running sport event and at most one running match per event.
pub fn update_match(
    store: &mut Store,
    sports: &SportRegistry,
    id: MatchId,
    update: MatchUpdate,
) -> Result<GameMatch, TournamentError> {
    let current = store.game(id)?.clone();
    let mut next = current.clone();
    if let Some(team_a) = update.team_a {
        next.team_a = team_a;
    }
    if let Some(team_b) = update.team_b {
        next.team_b = team_b;
    }
    if let Some(players) = update.players {
        next.players = players;
    }

    let roster_changed = next.team_a != current.team_a
        || next.team_b != current.team_b
        || next.players != current.players;
    if roster_changed {
        if current.status != Status::Scheduled {
            return Err(TournamentError::MatchLocked(current.status));
        }
        check_roster(store, next.team_a, next.team_b, &next.players)?;
    }

    if update.details.is_some() {
        sports.check_details(next.sport, update.details.as_ref())?;
        next.details = update.details;
    }

    if let Some(requested) = update.status.filter(|s| *s != current.status) {
        check_status(current.status, requested)?;
        let event = store.sport_event(current.sport_event_id)?;
        check_match_status(event, &store.matches_of(event.id), id, requested)?;
        match requested {
            Status::InProgress => next.started_at = Some(Utc::now()),
            Status::Ended if current.status == Status::InProgress => next.ended_at = Some(Utc::now()),
            _ => {}
        }
        next.status = requested;
        log::info!("Match {} moved from {} to {}", id, current.status, requested);
    }

    *store.game_mut(id)? = next.clone();
    Ok(next)
}

/// Delete a scheduled match with its goals and cards.
pub fn delete_match(store: &mut Store, id: MatchId) -> Result<(), TournamentError> {
    if store.game(id)?.status != Status::Scheduled {
        return Err(TournamentError::NotDeletable(Resource::Match));
    }
    store.remove_match_cascade(id);
    log::info!("Deleted match {}", id);
    Ok(())
}

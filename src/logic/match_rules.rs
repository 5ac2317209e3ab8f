//! Match eligibility: team identity, rosters, and which bracket tier may be registered next.

use crate::logic::matches::NewMatch;
use crate::models::{
    GameMatch, Importance, MatchId, Participant, SportEvent, Status, TeamId, TournamentError,
};

/// A match needs two different teams.
pub fn check_teams_for_match(team_a: TeamId, team_b: TeamId) -> Result<(), TournamentError> {
    if team_a == team_b {
        return Err(TournamentError::SameTeams);
    }
    Ok(())
}

/// The match must be the same sport and modality as the event it is registered in.
pub fn check_match_for_sport_event(event: &SportEvent, new_match: &NewMatch) -> Result<(), TournamentError> {
    if event.sport != new_match.sport || event.modality != new_match.modality {
        return Err(TournamentError::MatchSportMismatch {
            sport: new_match.sport,
            modality: new_match.modality,
            event_sport: event.sport,
            event_modality: event.modality,
        });
    }
    Ok(())
}

/// Every player must play for one of the two teams, and both teams must be represented.
///
/// An empty roster passes; players can be listed once the teams are known.
pub fn check_players_for_match(
    players: &[Participant],
    team_a: TeamId,
    team_b: TeamId,
) -> Result<(), TournamentError> {
    if let Some(outsider) = players
        .iter()
        .find(|p| p.team_id != team_a && p.team_id != team_b)
    {
        return Err(TournamentError::PlayerTeamNotInMatch(outsider.id));
    }
    if players.is_empty() {
        return Ok(());
    }
    let has_a = players.iter().any(|p| p.team_id == team_a);
    let has_b = players.iter().any(|p| p.team_id == team_b);
    if !(has_a && has_b) {
        return Err(TournamentError::SingleTeamRoster);
    }
    Ok(())
}

/// Tiers are settled in order: every match of another tier must have ended first.
pub fn check_matches_for_importance(
    matches: &[GameMatch],
    importance: Importance,
) -> Result<(), TournamentError> {
    let pending = matches
        .iter()
        .any(|m| m.importance != importance && m.status != Status::Ended);
    if pending {
        return Err(TournamentError::PendingMatchesOfOtherImportance);
    }
    Ok(())
}

/// Whether a match of `importance` fits the next free slot.
///
/// With `T` total and `R` registered matches: normal while `R < T-4`, semifinal while
/// `T-4 <= R < T-2`, third place at `R == T-2`, final at `R == T-1`.
pub fn check_match_importance(
    event: &SportEvent,
    registered: usize,
    importance: Importance,
) -> Result<(), TournamentError> {
    let total = event.total_matches as usize;
    let normal_slots = event.normal_match_slots();
    let open = match importance {
        Importance::Normal => registered < normal_slots,
        Importance::Semifinal => registered >= normal_slots && registered + 2 < total,
        Importance::ThirdPlacePlayoff => registered + 2 == total,
        Importance::Final => registered + 1 == total,
    };
    if !open {
        return Err(TournamentError::InvalidMatchImportance(importance));
    }
    Ok(())
}

/// A match may only change status while its event runs, and only one match per event
/// may be in progress.
pub fn check_match_status(
    event: &SportEvent,
    matches: &[GameMatch],
    match_id: MatchId,
    new_status: Status,
) -> Result<(), TournamentError> {
    if event.status != Status::InProgress {
        return Err(TournamentError::SportEventNotInProgress);
    }
    if new_status == Status::InProgress
        && matches
            .iter()
            .any(|m| m.id != match_id && m.status == Status::InProgress)
    {
        return Err(TournamentError::MatchAlreadyInProgress);
    }
    Ok(())
}

//! Sport event lifecycle: uniqueness per edition, match-count thresholds, and what may change when.

use crate::logic::sport_events::SportEventUpdate;
use crate::models::{
    check_status, GameMatch, Modality, SportEvent, SportEventId, SportType, Status, TournamentError,
};

/// (sport, modality) is unique within an edition. `exclude` skips the event being updated.
pub fn check_sport_event_for_edition<'a>(
    existing: impl IntoIterator<Item = &'a SportEvent>,
    sport: SportType,
    modality: Modality,
    exclude: Option<SportEventId>,
) -> Result<(), TournamentError> {
    let duplicate = existing
        .into_iter()
        .any(|e| Some(e.id) != exclude && e.sport == sport && e.modality == modality);
    if duplicate {
        return Err(TournamentError::DuplicateSportEvent { sport, modality });
    }
    Ok(())
}

/// Reject structural changes once the event has left `Scheduled`, placement changes
/// outside `OpenForEdits` (or the request that ends the event), and illegal status moves.
pub fn check_sport_event_for_update(
    event: &SportEvent,
    update: &SportEventUpdate,
) -> Result<(), TournamentError> {
    if event.status != Status::Scheduled {
        if update.sport.is_some_and(|s| s != event.sport) {
            return Err(TournamentError::SportEventLocked("sport"));
        }
        if update.modality.is_some_and(|m| m != event.modality) {
            return Err(TournamentError::SportEventLocked("modality"));
        }
        if update.total_matches.is_some_and(|t| t != event.total_matches) {
            return Err(TournamentError::SportEventLocked("total matches"));
        }
        if update.edition_id.is_some_and(|e| e != event.edition_id) {
            return Err(TournamentError::SportEventLocked("edition"));
        }
    }

    if update.placements.is_some_and(|p| p != event.placements) {
        let ending_now = event.status == Status::InProgress && update.status == Some(Status::Ended);
        if event.status != Status::OpenForEdits && !ending_now {
            return Err(TournamentError::PlacementsLocked);
        }
    }

    if let Some(requested) = update.status {
        check_status(event.status, requested)?;
    }
    Ok(())
}

/// A new total must keep the four knockout slots free: `registered <= new_total - 4`.
pub fn check_new_total_matches(registered: usize, new_total: u32) -> Result<(), TournamentError> {
    check_total_matches(new_total)?;
    let normal_slots = new_total.saturating_sub(SportEvent::KNOCKOUT_SLOTS) as usize;
    if registered > normal_slots {
        return Err(TournamentError::TooManyMatchesForTotal {
            registered,
            total: new_total,
        });
    }
    Ok(())
}

/// Totals below the knockout stage size make no bracket.
pub fn check_total_matches(total: u32) -> Result<(), TournamentError> {
    if total < SportEvent::KNOCKOUT_SLOTS {
        return Err(TournamentError::InvalidTotalMatches {
            min: SportEvent::KNOCKOUT_SLOTS,
            given: total,
        });
    }
    Ok(())
}

/// To start, every normal match must be registered.
pub fn check_matches_to_start_event(event: &SportEvent, matches: &[GameMatch]) -> Result<(), TournamentError> {
    let required = event.normal_match_slots();
    if matches.len() < required {
        return Err(TournamentError::NotEnoughMatchesToStart {
            required,
            registered: matches.len(),
        });
    }
    Ok(())
}

/// To finish, every match must be registered and ended.
pub fn check_matches_to_finish_event(event: &SportEvent, matches: &[GameMatch]) -> Result<(), TournamentError> {
    let required = event.total_matches as usize;
    let ended = matches.iter().filter(|m| m.status == Status::Ended).count();
    if matches.len() != required || ended != matches.len() {
        return Err(TournamentError::MatchesNotFinished {
            required,
            registered: matches.len(),
            ended,
        });
    }
    Ok(())
}

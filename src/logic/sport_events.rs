//! Sport event operations: register in an edition, update, start, finish, delete.

use crate::logic::sport_event_rules::{
    check_matches_to_finish_event, check_matches_to_start_event, check_new_total_matches,
    check_sport_event_for_edition, check_sport_event_for_update, check_total_matches,
};
use crate::models::{
    EditionId, Modality, Placements, Resource, SportEvent, SportEventId, SportType, Status,
    TournamentError,
};
use crate::store::Store;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct NewSportEvent {
    pub edition_id: EditionId,
    pub sport: SportType,
    pub modality: Modality,
    pub total_matches: u32,
}

/// Partial update; absent fields are left unchanged.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct SportEventUpdate {
    pub sport: Option<SportType>,
    pub modality: Option<Modality>,
    pub total_matches: Option<u32>,
    pub edition_id: Option<EditionId>,
    pub placements: Option<Placements>,
    pub status: Option<Status>,
}

/// Fail unless the edition exists and has not ended.
fn check_edition_open(store: &Store, edition_id: EditionId) -> Result<(), TournamentError> {
    if store.edition(edition_id)?.status == Status::Ended {
        return Err(TournamentError::EditionClosed);
    }
    Ok(())
}

/// Register a sport event in an edition.
pub fn create_sport_event(store: &mut Store, new: NewSportEvent) -> Result<SportEvent, TournamentError> {
    check_edition_open(store, new.edition_id)?;
    check_total_matches(new.total_matches)?;
    check_sport_event_for_edition(store.sport_events_of(new.edition_id), new.sport, new.modality, None)?;

    let event = SportEvent::new(new.edition_id, new.sport, new.modality, new.total_matches);
    log::info!(
        "Registered {:?}/{:?} sport event {} in edition {}",
        event.sport,
        event.modality,
        event.id,
        event.edition_id
    );
    store.sport_events.insert(event.id, event.clone());
    Ok(event)
}

/// Apply an update after checking every lifecycle rule.
pub fn update_sport_event(
    store: &mut Store,
    id: SportEventId,
    update: SportEventUpdate,
) -> Result<SportEvent, TournamentError> {
    let current = store.sport_event(id)?.clone();
    check_edition_open(store, current.edition_id)?;
    check_sport_event_for_update(&current, &update)?;

    let next = SportEvent {
        sport: update.sport.unwrap_or(current.sport),
        modality: update.modality.unwrap_or(current.modality),
        total_matches: update.total_matches.unwrap_or(current.total_matches),
        edition_id: update.edition_id.unwrap_or(current.edition_id),
        placements: update.placements.unwrap_or(current.placements),
        status: update.status.unwrap_or(current.status),
        ..current.clone()
    };

    if next.edition_id != current.edition_id {
        check_edition_open(store, next.edition_id)?;
    }
    if (next.sport, next.modality, next.edition_id) != (current.sport, current.modality, current.edition_id) {
        check_sport_event_for_edition(store.sport_events_of(next.edition_id), next.sport, next.modality, Some(id))?;
    }

    let matches = store.matches_of(id);
    if next.total_matches != current.total_matches {
        check_new_total_matches(matches.len(), next.total_matches)?;
    }

    if next.status != current.status {
        match next.status {
            Status::InProgress => {
                if store.edition(next.edition_id)?.status != Status::InProgress {
                    return Err(TournamentError::EditionNotInProgress);
                }
                let busy = store
                    .sport_events_of(next.edition_id)
                    .iter()
                    .any(|s| s.id != id && s.status == Status::InProgress);
                if busy {
                    return Err(TournamentError::SportEventAlreadyInProgress);
                }
                check_matches_to_start_event(&next, &matches)?;
            }
            Status::Ended => check_matches_to_finish_event(&next, &matches)?,
            Status::Scheduled | Status::OpenForEdits => {}
        }
        log::info!("Sport event {} moved from {} to {}", id, current.status, next.status);
    }

    *store.sport_event_mut(id)? = next.clone();
    Ok(next)
}

/// Delete a scheduled sport event and its matches.
pub fn delete_sport_event(store: &mut Store, id: SportEventId) -> Result<(), TournamentError> {
    if store.sport_event(id)?.status != Status::Scheduled {
        return Err(TournamentError::NotDeletable(Resource::SportEvent));
    }
    store.remove_sport_event_cascade(id);
    log::info!("Deleted sport event {}", id);
    Ok(())
}

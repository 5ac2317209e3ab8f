//! Edition lifecycle: create, edit scores and dates, move through statuses, delete.

use crate::models::{check_status, Edition, EditionId, Resource, Status, TeamScores, TournamentError};
use crate::store::Store;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct NewEdition {
    pub opening_date: NaiveDate,
    pub closing_date: NaiveDate,
}

/// Partial update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EditionUpdate {
    pub scores: Option<TeamScores>,
    pub status: Option<Status>,
    pub opening_date: Option<NaiveDate>,
    pub closing_date: Option<NaiveDate>,
}

fn check_dates(opening: NaiveDate, closing: NaiveDate) -> Result<(), TournamentError> {
    if closing < opening {
        return Err(TournamentError::InvalidEditionDates);
    }
    Ok(())
}

/// Create a new edition in `Scheduled` state.
pub fn create_edition(store: &mut Store, new: NewEdition) -> Result<Edition, TournamentError> {
    check_dates(new.opening_date, new.closing_date)?;
    let edition = Edition::new(new.opening_date, new.closing_date);
    log::info!("Created edition {} ({} to {})", edition.id, edition.opening_date, edition.closing_date);
    store.editions.insert(edition.id, edition.clone());
    Ok(edition)
}

/// Apply an update. An `Ended` edition only accepts edits in the request that reopens it;
/// at most one edition may be in progress; ending requires every sport event to be finished.
pub fn update_edition(
    store: &mut Store,
    id: EditionId,
    update: EditionUpdate,
) -> Result<Edition, TournamentError> {
    let current = store.edition(id)?.clone();
    let requested = update.status.unwrap_or(current.status);
    check_status(current.status, requested)?;

    let mut next = current.clone();
    if let Some(scores) = update.scores {
        next.scores = scores;
    }
    if let Some(d) = update.opening_date {
        next.opening_date = d;
    }
    if let Some(d) = update.closing_date {
        next.closing_date = d;
    }
    next.status = requested;

    let fields_changed = next.scores != current.scores
        || next.opening_date != current.opening_date
        || next.closing_date != current.closing_date;
    if fields_changed && current.status == Status::Ended && requested == Status::Ended {
        return Err(TournamentError::EditionClosed);
    }
    check_dates(next.opening_date, next.closing_date)?;

    if requested != current.status {
        match requested {
            Status::InProgress => {
                let busy = store
                    .editions_with_status(Status::InProgress)
                    .iter()
                    .any(|e| e.id != id);
                if busy {
                    return Err(TournamentError::EditionAlreadyInProgress);
                }
            }
            Status::Ended => {
                let unfinished = store
                    .sport_events_of(id)
                    .iter()
                    .any(|s| !s.status.is_finished());
                if unfinished {
                    return Err(TournamentError::EditionHasUnfinishedEvents);
                }
            }
            Status::Scheduled | Status::OpenForEdits => {}
        }
        log::info!("Edition {} moved from {} to {}", id, current.status, requested);
    }

    *store.edition_mut(id)? = next.clone();
    Ok(next)
}

/// Delete a scheduled edition along with its sport events and their matches.
pub fn delete_edition(store: &mut Store, id: EditionId) -> Result<(), TournamentError> {
    let edition = store.edition(id)?;
    if edition.status != Status::Scheduled {
        return Err(TournamentError::NotDeletable(Resource::Edition));
    }
    let event_ids: Vec<_> = store.sport_events_of(id).iter().map(|s| s.id).collect();
    for event_id in event_ids {
        store.remove_sport_event_cascade(event_id);
    }
    store.editions.remove(&id);
    log::info!("Deleted edition {}", id);
    Ok(())
}

//! Participants: create, edit, delete, and bulk roster import from CSV.

use crate::models::{
    check_class_number, Participant, ParticipantId, Resource, TeamId, TeamName, TournamentError,
};
use crate::store::Store;
use serde::Deserialize;
use std::io::Read;

#[derive(Clone, Debug, Deserialize)]
pub struct NewParticipant {
    pub name: String,
    pub class_number: String,
    pub team_id: TeamId,
}

/// Partial update; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ParticipantUpdate {
    pub name: Option<String>,
    pub class_number: Option<String>,
    pub team_id: Option<TeamId>,
}

/// One line of a roster file: `name,class_number,team`.
#[derive(Clone, Debug, Deserialize)]
pub struct RosterRow {
    pub name: String,
    pub class_number: String,
    pub team: String,
}

fn check_fields(store: &Store, name: &str, class_number: &str, team_id: TeamId) -> Result<(), TournamentError> {
    if name.trim().is_empty() {
        return Err(TournamentError::EmptyName);
    }
    check_class_number(class_number)?;
    store.team(team_id)?;
    Ok(())
}

fn is_listed(store: &Store, id: ParticipantId) -> bool {
    store.matches.values().any(|m| m.has_player(id))
}

pub fn create_participant(store: &mut Store, new: NewParticipant) -> Result<Participant, TournamentError> {
    check_fields(store, &new.name, &new.class_number, new.team_id)?;
    let participant = Participant::new(new.name.trim(), new.class_number, new.team_id);
    store.participants.insert(participant.id, participant.clone());
    Ok(participant)
}

/// Edit a participant. The team cannot change while the participant is listed in a match.
pub fn update_participant(
    store: &mut Store,
    id: ParticipantId,
    update: ParticipantUpdate,
) -> Result<Participant, TournamentError> {
    let current = store.participant(id)?.clone();
    let next = Participant {
        name: update.name.map(|n| n.trim().to_string()).unwrap_or(current.name.clone()),
        class_number: update.class_number.unwrap_or(current.class_number.clone()),
        team_id: update.team_id.unwrap_or(current.team_id),
        ..current.clone()
    };
    check_fields(store, &next.name, &next.class_number, next.team_id)?;
    if next.team_id != current.team_id && is_listed(store, id) {
        return Err(TournamentError::InUse {
            resource: Resource::Participant,
            id,
        });
    }
    store.participants.insert(id, next.clone());
    Ok(next)
}

/// Delete a participant that no match lists.
pub fn delete_participant(store: &mut Store, id: ParticipantId) -> Result<(), TournamentError> {
    store.participant(id)?;
    if is_listed(store, id) {
        return Err(TournamentError::InUse {
            resource: Resource::Participant,
            id,
        });
    }
    store.participants.remove(&id);
    Ok(())
}

/// Read roster rows from CSV with a `name,class_number,team` header.
pub fn parse_roster(reader: impl Read) -> Result<Vec<RosterRow>, csv::Error> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .deserialize()
        .collect()
}

/// Import a roster. Every row is validated before any participant is stored.
pub fn import_participants(store: &mut Store, rows: Vec<RosterRow>) -> Result<Vec<Participant>, TournamentError> {
    let mut imported = Vec::with_capacity(rows.len());
    for row in rows {
        let team_id = TeamName::parse(&row.team)
            .and_then(|name| store.team_by_name(name))
            .map(|team| team.id)
            .ok_or_else(|| TournamentError::UnknownTeamName(row.team.clone()))?;
        check_fields(store, &row.name, &row.class_number, team_id)?;
        imported.push(Participant::new(row.name.trim(), row.class_number, team_id));
    }
    for p in &imported {
        store.participants.insert(p.id, p.clone());
    }
    log::info!("Imported {} participants", imported.len());
    Ok(imported)
}

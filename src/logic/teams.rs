//! Teams: the five fixed groups, seeded at startup and editable afterwards.

use crate::models::{Resource, Team, TeamId, TeamName, TournamentError};
use crate::store::Store;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub struct NewTeam {
    pub name: TeamName,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct TeamUpdate {
    pub name: Option<TeamName>,
    pub points: Option<i32>,
}

fn check_name_free(store: &Store, name: TeamName, exclude: Option<TeamId>) -> Result<(), TournamentError> {
    if store
        .teams
        .values()
        .any(|t| t.name == name && Some(t.id) != exclude)
    {
        return Err(TournamentError::DuplicateTeam(name));
    }
    Ok(())
}

pub fn create_team(store: &mut Store, new: NewTeam) -> Result<Team, TournamentError> {
    check_name_free(store, new.name, None)?;
    let team = Team::new(new.name);
    store.teams.insert(team.id, team.clone());
    Ok(team)
}

pub fn update_team(store: &mut Store, id: TeamId, update: TeamUpdate) -> Result<Team, TournamentError> {
    let mut team = store.team(id)?.clone();
    if let Some(name) = update.name {
        check_name_free(store, name, Some(id))?;
        team.name = name;
    }
    if let Some(points) = update.points {
        team.points = points;
    }
    *store.team_mut(id)? = team.clone();
    Ok(team)
}

/// Delete a team no participant or match refers to.
pub fn delete_team(store: &mut Store, id: TeamId) -> Result<(), TournamentError> {
    store.team(id)?;
    let referenced = store.participants.values().any(|p| p.team_id == id)
        || store.matches.values().any(|m| m.involves_team(id));
    if referenced {
        return Err(TournamentError::InUse {
            resource: Resource::Team,
            id,
        });
    }
    store.teams.remove(&id);
    Ok(())
}

/// Create whichever of the five competing teams are missing. Returns how many were added.
pub fn seed_teams(store: &mut Store) -> usize {
    let missing: Vec<TeamName> = TeamName::COMPETING
        .into_iter()
        .filter(|name| store.team_by_name(*name).is_none())
        .collect();
    for name in &missing {
        let team = Team::new(*name);
        store.teams.insert(team.id, team);
    }
    missing.len()
}

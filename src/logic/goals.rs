//! Goals: recorded on running matches, each one moving the scoring team's match score.

use crate::logic::action_rules::{check_action, check_match_for_action, check_player_for_action};
use crate::logic::sports::SportRegistry;
use crate::models::{ActionKind, Goal, GoalId, MatchId, ParticipantId, TournamentError};
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize)]
pub struct NewGoal {
    pub match_id: MatchId,
    pub player_id: ParticipantId,
    /// Defaults to the time the goal is recorded.
    #[serde(default)]
    pub scored_at: Option<DateTime<Utc>>,
}

/// Record a goal and credit the player's team in the match score.
pub fn save_goal(store: &mut Store, sports: &SportRegistry, new: NewGoal) -> Result<Goal, TournamentError> {
    let game = store.game(new.match_id)?;
    let player = store.participant(new.player_id)?;
    check_action(sports, game, player.id, ActionKind::Goal)?;

    let goal = Goal {
        id: Uuid::new_v4(),
        match_id: new.match_id,
        player_id: new.player_id,
        team_id: player.team_id,
        scored_at: new.scored_at.unwrap_or_else(Utc::now),
    };
    store.game_mut(goal.match_id)?.add_point(goal.team_id);
    log::info!("Goal {} by {} in match {}", goal.id, goal.player_id, goal.match_id);
    store.goals.insert(goal.id, goal.clone());
    Ok(goal)
}

/// Remove a goal from a running match and take the point back.
pub fn delete_goal(store: &mut Store, id: GoalId) -> Result<(), TournamentError> {
    let goal = store.goal(id)?.clone();
    check_match_for_action(store.game(goal.match_id)?)?;

    store.goals.remove(&id);
    store.game_mut(goal.match_id)?.remove_point(goal.team_id);
    log::info!("Deleted goal {} from match {}", id, goal.match_id);
    Ok(())
}

/// Move a goal to another player or match. Scores change only when the match or the
/// scoring team changes.
pub fn replace_goal(
    store: &mut Store,
    sports: &SportRegistry,
    id: GoalId,
    new: NewGoal,
) -> Result<Goal, TournamentError> {
    let original = store.goal(id)?.clone();
    let original_game = store.game(original.match_id)?;
    check_match_for_action(original_game)?;
    check_player_for_action(original_game, original.player_id)?;

    let game = store.game(new.match_id)?;
    let player = store.participant(new.player_id)?;
    check_action(sports, game, player.id, ActionKind::Goal)?;

    let replaced = Goal {
        id,
        match_id: new.match_id,
        player_id: new.player_id,
        team_id: player.team_id,
        scored_at: new.scored_at.unwrap_or(original.scored_at),
    };

    if replaced.match_id != original.match_id || replaced.team_id != original.team_id {
        store.game_mut(original.match_id)?.remove_point(original.team_id);
        store.game_mut(replaced.match_id)?.add_point(replaced.team_id);
    }
    store.goals.insert(id, replaced.clone());
    Ok(replaced)
}

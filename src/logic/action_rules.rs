//! Preconditions shared by goals and penalty cards.

use crate::logic::sports::SportRegistry;
use crate::models::{ActionKind, GameMatch, ParticipantId, Status, TournamentError};

/// Actions are only recorded while the match is being played.
pub fn check_match_for_action(game: &GameMatch) -> Result<(), TournamentError> {
    if game.status != Status::InProgress {
        return Err(TournamentError::MatchNotInProgress);
    }
    Ok(())
}

/// The acting player must be listed in the match.
pub fn check_player_for_action(game: &GameMatch, player_id: ParticipantId) -> Result<(), TournamentError> {
    if !game.has_player(player_id) {
        return Err(TournamentError::PlayerNotInMatch(player_id));
    }
    Ok(())
}

/// Full precondition for recording `action` by `player_id` in `game`.
pub fn check_action(
    sports: &SportRegistry,
    game: &GameMatch,
    player_id: ParticipantId,
    action: ActionKind,
) -> Result<(), TournamentError> {
    sports.check_action(game.sport, action)?;
    check_match_for_action(game)?;
    check_player_for_action(game, player_id)
}

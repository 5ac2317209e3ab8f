//! Penalty cards: same preconditions as goals, no effect on scores.

use crate::logic::action_rules::{check_action, check_match_for_action, check_player_for_action};
use crate::logic::sports::SportRegistry;
use crate::models::{
    ActionKind, CardColor, MatchId, ParticipantId, PenaltyCard, PenaltyCardId, TournamentError,
};
use crate::store::Store;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Clone, Debug, Deserialize)]
pub struct NewPenaltyCard {
    pub match_id: MatchId,
    pub player_id: ParticipantId,
    pub color: CardColor,
    #[serde(default)]
    pub shown_at: Option<DateTime<Utc>>,
}

pub fn save_penalty_card(
    store: &mut Store,
    sports: &SportRegistry,
    new: NewPenaltyCard,
) -> Result<PenaltyCard, TournamentError> {
    let game = store.game(new.match_id)?;
    let player = store.participant(new.player_id)?;
    check_action(sports, game, player.id, ActionKind::PenaltyCard)?;

    let card = PenaltyCard {
        id: Uuid::new_v4(),
        match_id: new.match_id,
        player_id: new.player_id,
        team_id: player.team_id,
        color: new.color,
        shown_at: new.shown_at.unwrap_or_else(Utc::now),
    };
    log::info!("{:?} card {} for {} in match {}", card.color, card.id, card.player_id, card.match_id);
    store.penalty_cards.insert(card.id, card.clone());
    Ok(card)
}

pub fn delete_penalty_card(store: &mut Store, id: PenaltyCardId) -> Result<(), TournamentError> {
    let card = store.penalty_card(id)?;
    check_match_for_action(store.game(card.match_id)?)?;
    store.penalty_cards.remove(&id);
    Ok(())
}

pub fn replace_penalty_card(
    store: &mut Store,
    sports: &SportRegistry,
    id: PenaltyCardId,
    new: NewPenaltyCard,
) -> Result<PenaltyCard, TournamentError> {
    let original = store.penalty_card(id)?.clone();
    let original_game = store.game(original.match_id)?;
    check_match_for_action(original_game)?;
    check_player_for_action(original_game, original.player_id)?;

    let game = store.game(new.match_id)?;
    let player = store.participant(new.player_id)?;
    check_action(sports, game, player.id, ActionKind::PenaltyCard)?;

    let replaced = PenaltyCard {
        id,
        match_id: new.match_id,
        player_id: new.player_id,
        team_id: player.team_id,
        color: new.color,
        shown_at: new.shown_at.unwrap_or(original.shown_at),
    };
    store.penalty_cards.insert(id, replaced.clone());
    Ok(replaced)
}

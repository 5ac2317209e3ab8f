use super::{ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{delete_penalty_card, replace_penalty_card, save_penalty_card, NewPenaltyCard};
use crate::models::{PenaltyCard, PenaltyCardId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

pub(super) fn linked(card: PenaltyCard) -> Linked<PenaltyCard> {
    let links = vec![
        Link::new("self", format!("/api/penalty-cards/{}", card.id)),
        Link::new("match", format!("/api/matches/{}", card.match_id)),
        Link::new("player", format!("/api/participants/{}", card.player_id)),
    ];
    Linked::new(card, links)
}

#[get("/api/penalty-cards")]
async fn api_list_penalty_cards(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.penalty_cards.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/penalty-cards")))
}

#[post("/api/penalty-cards")]
async fn api_save_penalty_card(state: AppState, body: Json<NewPenaltyCard>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let card = save_penalty_card(&mut store, &state.sports, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(card)))
}

#[get("/api/penalty-cards/{id}")]
async fn api_get_penalty_card(state: AppState, id: Path<PenaltyCardId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let card = store.penalty_card(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(card)))
}

#[put("/api/penalty-cards/{id}")]
async fn api_replace_penalty_card(
    state: AppState,
    id: Path<PenaltyCardId>,
    body: Json<NewPenaltyCard>,
) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let card = replace_penalty_card(&mut store, &state.sports, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(card)))
}

#[delete("/api/penalty-cards/{id}")]
async fn api_delete_penalty_card(state: AppState, id: Path<PenaltyCardId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_penalty_card(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_penalty_cards)
        .service(api_save_penalty_card)
        .service(api_get_penalty_card)
        .service(api_replace_penalty_card)
        .service(api_delete_penalty_card);
}

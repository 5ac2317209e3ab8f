use super::{goals, penalty_cards, ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{create_match, delete_match, update_match, MatchUpdate, NewMatch};
use crate::models::{GameMatch, MatchId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

pub(super) fn linked(game: GameMatch) -> Linked<GameMatch> {
    let base = format!("/api/matches/{}", game.id);
    let mut links = vec![
        Link::new("self", base.clone()),
        Link::new("sport-event", format!("/api/sport-events/{}", game.sport_event_id)),
        Link::new("goals", format!("{base}/goals")),
        Link::new("penalty-cards", format!("{base}/penalty-cards")),
        Link::new("team-a", format!("/api/teams/{}", game.team_a)),
        Link::new("team-b", format!("/api/teams/{}", game.team_b)),
    ];
    links.extend(
        game.players
            .iter()
            .map(|p| Link::new("player", format!("/api/participants/{p}"))),
    );
    Linked::new(game, links)
}

#[get("/api/matches")]
async fn api_list_matches(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.matches.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/matches")))
}

#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Json<NewMatch>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let game = create_match(&mut store, &state.sports, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(game)))
}

#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, id: Path<MatchId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let game = store.game(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(game)))
}

#[put("/api/matches/{id}")]
async fn api_update_match(
    state: AppState,
    id: Path<MatchId>,
    body: Json<MatchUpdate>,
) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let game = update_match(&mut store, &state.sports, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(game)))
}

#[delete("/api/matches/{id}")]
async fn api_delete_match(state: AppState, id: Path<MatchId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_match(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/matches/{id}/goals")]
async fn api_list_match_goals(
    state: AppState,
    id: Path<MatchId>,
    query: Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    store.game(*id)?;
    let items = store.goals_of(*id).into_iter().cloned().map(goals::linked).collect();
    let base = format!("/api/matches/{}/goals", id);
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, &base)))
}

#[get("/api/matches/{id}/penalty-cards")]
async fn api_list_match_penalty_cards(
    state: AppState,
    id: Path<MatchId>,
    query: Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    store.game(*id)?;
    let items = store
        .penalty_cards_of(*id)
        .into_iter()
        .cloned()
        .map(penalty_cards::linked)
        .collect();
    let base = format!("/api/matches/{}/penalty-cards", id);
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, &base)))
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_matches)
        .service(api_create_match)
        .service(api_get_match)
        .service(api_update_match)
        .service(api_delete_match)
        .service(api_list_match_goals)
        .service(api_list_match_penalty_cards);
}

use super::{matches, ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{
    create_sport_event, delete_sport_event, update_sport_event, NewSportEvent, SportEventUpdate,
};
use crate::models::{SportEvent, SportEventId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

pub(super) fn linked(event: SportEvent) -> Linked<SportEvent> {
    let base = format!("/api/sport-events/{}", event.id);
    let links = vec![
        Link::new("self", base.clone()),
        Link::new("matches", format!("{base}/matches")),
        Link::new("edition", format!("/api/editions/{}", event.edition_id)),
    ];
    Linked::new(event, links)
}

#[get("/api/sport-events")]
async fn api_list_sport_events(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.sport_events.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/sport-events")))
}

#[post("/api/sport-events")]
async fn api_create_sport_event(state: AppState, body: Json<NewSportEvent>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let event = create_sport_event(&mut store, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(event)))
}

#[get("/api/sport-events/{id}")]
async fn api_get_sport_event(state: AppState, id: Path<SportEventId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let event = store.sport_event(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(event)))
}

#[put("/api/sport-events/{id}")]
async fn api_update_sport_event(
    state: AppState,
    id: Path<SportEventId>,
    body: Json<SportEventUpdate>,
) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let event = update_sport_event(&mut store, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(event)))
}

#[delete("/api/sport-events/{id}")]
async fn api_delete_sport_event(state: AppState, id: Path<SportEventId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_sport_event(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/sport-events/{id}/matches")]
async fn api_list_sport_event_matches(
    state: AppState,
    id: Path<SportEventId>,
    query: Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    store.sport_event(*id)?;
    let items = store.matches_of(*id).into_iter().map(matches::linked).collect();
    let base = format!("/api/sport-events/{}/matches", id);
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, &base)))
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_sport_events)
        .service(api_create_sport_event)
        .service(api_get_sport_event)
        .service(api_update_sport_event)
        .service(api_delete_sport_event)
        .service(api_list_sport_event_matches);
}

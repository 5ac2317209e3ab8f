use super::{sport_events, ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{create_edition, delete_edition, update_edition, EditionUpdate, NewEdition};
use crate::models::{Edition, EditionId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

pub(super) fn linked(edition: Edition) -> Linked<Edition> {
    let base = format!("/api/editions/{}", edition.id);
    let links = vec![
        Link::new("self", base.clone()),
        Link::new("sport-events", format!("{base}/sport-events")),
        Link::new("editions", "/api/editions"),
    ];
    Linked::new(edition, links)
}

#[get("/api/editions")]
async fn api_list_editions(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.editions.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/editions")))
}

#[post("/api/editions")]
async fn api_create_edition(state: AppState, body: Json<NewEdition>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let edition = create_edition(&mut store, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(edition)))
}

#[get("/api/editions/{id}")]
async fn api_get_edition(state: AppState, id: Path<EditionId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let edition = store.edition(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(edition)))
}

#[put("/api/editions/{id}")]
async fn api_update_edition(
    state: AppState,
    id: Path<EditionId>,
    body: Json<EditionUpdate>,
) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let edition = update_edition(&mut store, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(edition)))
}

#[delete("/api/editions/{id}")]
async fn api_delete_edition(state: AppState, id: Path<EditionId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_edition(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Sport events registered in one edition.
#[get("/api/editions/{id}/sport-events")]
async fn api_list_edition_sport_events(
    state: AppState,
    id: Path<EditionId>,
    query: Query<PageQuery>,
) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    store.edition(*id)?;
    let items = store
        .sport_events_of(*id)
        .into_iter()
        .cloned()
        .map(sport_events::linked)
        .collect();
    let base = format!("/api/editions/{}/sport-events", id);
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, &base)))
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_editions)
        .service(api_create_edition)
        .service(api_get_edition)
        .service(api_update_edition)
        .service(api_delete_edition)
        .service(api_list_edition_sport_events);
}

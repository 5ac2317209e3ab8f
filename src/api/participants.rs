use super::{ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{
    create_participant, delete_participant, import_participants, parse_roster, update_participant,
    NewParticipant, ParticipantUpdate,
};
use crate::models::{Participant, ParticipantId};
use actix_web::{
    delete, get, post, put,
    web::{Bytes, Json, Path, Query, ServiceConfig},
    HttpResponse,
};

fn linked(participant: Participant) -> Linked<Participant> {
    let links = vec![
        Link::new("self", format!("/api/participants/{}", participant.id)),
        Link::new("team", format!("/api/teams/{}", participant.team_id)),
    ];
    Linked::new(participant, links)
}

#[get("/api/participants")]
async fn api_list_participants(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.participants.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/participants")))
}

#[post("/api/participants")]
async fn api_create_participant(state: AppState, body: Json<NewParticipant>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let participant = create_participant(&mut store, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(participant)))
}

/// Import a CSV roster (`name,class_number,team`). Nothing is stored if any row is invalid.
#[post("/api/participants/import")]
async fn api_import_participants(state: AppState, body: Bytes) -> Result<HttpResponse, ApiError> {
    let rows = parse_roster(body.as_ref())?;
    let mut store = state.write()?;
    let imported = import_participants(&mut store, rows)?;
    let content: Vec<_> = imported.into_iter().map(linked).collect();
    Ok(HttpResponse::Created().json(content))
}

#[get("/api/participants/{id}")]
async fn api_get_participant(state: AppState, id: Path<ParticipantId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let participant = store.participant(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(participant)))
}

#[put("/api/participants/{id}")]
async fn api_update_participant(
    state: AppState,
    id: Path<ParticipantId>,
    body: Json<ParticipantUpdate>,
) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let participant = update_participant(&mut store, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(participant)))
}

#[delete("/api/participants/{id}")]
async fn api_delete_participant(state: AppState, id: Path<ParticipantId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_participant(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_participants)
        .service(api_create_participant)
        .service(api_import_participants)
        .service(api_get_participant)
        .service(api_update_participant)
        .service(api_delete_participant);
}

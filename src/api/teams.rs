use super::{ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{create_team, delete_team, update_team, NewTeam, TeamUpdate};
use crate::models::{Team, TeamId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

fn linked(team: Team) -> Linked<Team> {
    let links = vec![
        Link::new("self", format!("/api/teams/{}", team.id)),
        Link::new("teams", "/api/teams"),
    ];
    Linked::new(team, links)
}

#[get("/api/teams")]
async fn api_list_teams(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let mut teams: Vec<Team> = store.teams.values().cloned().collect();
    teams.sort_by_key(|t| t.name);
    let items = teams.into_iter().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/teams")))
}

#[post("/api/teams")]
async fn api_create_team(state: AppState, body: Json<NewTeam>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let team = create_team(&mut store, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(team)))
}

#[get("/api/teams/{id}")]
async fn api_get_team(state: AppState, id: Path<TeamId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let team = store.team(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(team)))
}

#[put("/api/teams/{id}")]
async fn api_update_team(state: AppState, id: Path<TeamId>, body: Json<TeamUpdate>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let team = update_team(&mut store, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(team)))
}

#[delete("/api/teams/{id}")]
async fn api_delete_team(state: AppState, id: Path<TeamId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_team(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_teams)
        .service(api_create_team)
        .service(api_get_team)
        .service(api_update_team)
        .service(api_delete_team);
}

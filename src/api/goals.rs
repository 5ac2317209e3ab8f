use super::{ApiError, AppState, Link, Linked, Page, PageQuery};
use crate::logic::{delete_goal, replace_goal, save_goal, NewGoal};
use crate::models::{Goal, GoalId};
use actix_web::{
    delete, get, post, put,
    web::{Json, Path, Query, ServiceConfig},
    HttpResponse,
};

pub(super) fn linked(goal: Goal) -> Linked<Goal> {
    let links = vec![
        Link::new("self", format!("/api/goals/{}", goal.id)),
        Link::new("match", format!("/api/matches/{}", goal.match_id)),
        Link::new("player", format!("/api/participants/{}", goal.player_id)),
        Link::new("team", format!("/api/teams/{}", goal.team_id)),
    ];
    Linked::new(goal, links)
}

#[get("/api/goals")]
async fn api_list_goals(state: AppState, query: Query<PageQuery>) -> Result<HttpResponse, ApiError> {
    let (page, size) = query.resolve(state.paging)?;
    let store = state.read()?;
    let items = store.goals.values().cloned().map(linked).collect();
    Ok(HttpResponse::Ok().json(Page::from_items(items, page, size, "/api/goals")))
}

#[post("/api/goals")]
async fn api_save_goal(state: AppState, body: Json<NewGoal>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let goal = save_goal(&mut store, &state.sports, body.into_inner())?;
    Ok(HttpResponse::Created().json(linked(goal)))
}

#[get("/api/goals/{id}")]
async fn api_get_goal(state: AppState, id: Path<GoalId>) -> Result<HttpResponse, ApiError> {
    let store = state.read()?;
    let goal = store.goal(*id)?.clone();
    Ok(HttpResponse::Ok().json(linked(goal)))
}

#[put("/api/goals/{id}")]
async fn api_replace_goal(state: AppState, id: Path<GoalId>, body: Json<NewGoal>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    let goal = replace_goal(&mut store, &state.sports, *id, body.into_inner())?;
    Ok(HttpResponse::Ok().json(linked(goal)))
}

#[delete("/api/goals/{id}")]
async fn api_delete_goal(state: AppState, id: Path<GoalId>) -> Result<HttpResponse, ApiError> {
    let mut store = state.write()?;
    delete_goal(&mut store, *id)?;
    Ok(HttpResponse::NoContent().finish())
}

pub(super) fn configure(cfg: &mut ServiceConfig) {
    cfg.service(api_list_goals)
        .service(api_save_goal)
        .service(api_get_goal)
        .service(api_replace_goal)
        .service(api_delete_goal);
}

//! REST API: one module of handlers per resource, all under `/api`.
//!
//! Every resource has `GET /` (paged with `?page=&size=`), `POST /`, and `GET`, `PUT`,
//! `DELETE` on `/{id}`. Nested listings:
//! - `GET /api/editions/{id}/sport-events`
//! - `GET /api/sport-events/{id}/matches`
//! - `GET /api/matches/{id}/goals`, `GET /api/matches/{id}/penalty-cards`
//!
//! `POST /api/participants/import` takes a `name,class_number,team` CSV body.

mod editions;
mod error;
mod goals;
mod hypermedia;
mod matches;
mod participants;
mod penalty_cards;
mod sport_events;
mod teams;

pub use error::ApiError;
pub use hypermedia::{Link, Linked, Page, PageQuery};

use crate::config::PagingConfig;
use crate::logic::SportRegistry;
use crate::store::Store;
use actix_web::{get, web, HttpResponse, Responder};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared application state: the store plus the rules fixed at startup.
pub struct AppContext {
    store: RwLock<Store>,
    pub sports: SportRegistry,
    pub paging: PagingConfig,
}

pub type AppState = web::Data<AppContext>;

impl AppContext {
    pub fn new(store: Store, sports: SportRegistry, paging: PagingConfig) -> Self {
        Self {
            store: RwLock::new(store),
            sports,
            paging,
        }
    }

    pub fn read(&self) -> Result<RwLockReadGuard<'_, Store>, ApiError> {
        self.store.read().map_err(|_| ApiError::LockPoisoned)
    }

    /// Exclusive access for one check-then-write sequence.
    pub fn write(&self) -> Result<RwLockWriteGuard<'_, Store>, ApiError> {
        self.store.write().map_err(|_| ApiError::LockPoisoned)
    }
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "interclass-games",
    })
}

/// Register every route. Used by the binary and by tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health);
    editions::configure(cfg);
    sport_events::configure(cfg);
    matches::configure(cfg);
    participants::configure(cfg);
    teams::configure(cfg);
    goals::configure(cfg);
    penalty_cards::configure(cfg);
}

/// Reject malformed JSON bodies with the same error shape as domain errors.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({
                "error": "BAD_REQUEST",
                "message": message,
            })),
        )
        .into()
    })
}

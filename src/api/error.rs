//! HTTP error translation: every failure becomes a JSON body with a matching status.

use crate::models::{ErrorKind, TournamentError};
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] TournamentError),

    #[error("Invalid roster file: {0}")]
    Roster(#[from] csv::Error),

    #[error("Page size must be at least 1")]
    InvalidPageSize,

    #[error("Store lock poisoned")]
    LockPoisoned,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    fn label(&self) -> &'static str {
        match self {
            ApiError::Domain(e) => match e.kind() {
                ErrorKind::NotFound => "NOT_FOUND",
                ErrorKind::BadRequest => "BAD_REQUEST",
                ErrorKind::Conflict => "CONFLICT",
                ErrorKind::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            },
            ApiError::Roster(_) | ApiError::InvalidPageSize => "BAD_REQUEST",
            ApiError::LockPoisoned => "INTERNAL",
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Domain(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
                ErrorKind::Conflict => StatusCode::CONFLICT,
                ErrorKind::UnprocessableEntity => StatusCode::UNPROCESSABLE_ENTITY,
            },
            ApiError::Roster(_) | ApiError::InvalidPageSize => StatusCode::BAD_REQUEST,
            ApiError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::debug!("Rejected request: {}", self);
        }
        HttpResponse::build(status).json(ErrorBody {
            error: self.label(),
            message: self.to_string(),
        })
    }
}

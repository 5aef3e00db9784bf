use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use crate::utils::{QuoteError, WatchlistError};

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error(transparent)]
    Quote(#[from] QuoteError),
    #[error(transparent)]
    Watchlist(#[from] WatchlistError),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl HandlerError {
    pub fn status(&self) -> StatusCode {
        match self {
            HandlerError::Quote(QuoteError::NotFound(_)) => StatusCode::NOT_FOUND,
            HandlerError::Quote(QuoteError::Provider(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::Watchlist(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HandlerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HandlerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;

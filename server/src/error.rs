use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use minehost_core::GameError;
use minehost_protocol::ErrorResponse;
use thiserror::Error;

use crate::RegistryError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request body is required")]
    MissingBody,
    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] serde_json::Error),
    #[error("Games are created with PUT /")]
    CreateOutsideRoot,
    #[error("No such resource")]
    UnknownRoute,
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("Request handler failed: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::Registry(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingBody | Self::MalformedBody(_) | Self::CreateOutsideRoot => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownRoute => StatusCode::NOT_FOUND,
            Self::Worker(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Registry(RegistryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Registry(RegistryError::Full(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Registry(RegistryError::Game(GameError::AlreadyEnded)) => StatusCode::CONFLICT,
            Self::Registry(RegistryError::Game(_)) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::warn!("Request failed: {}", self);
        } else {
            log::debug!("Request rejected ({}): {}", status, self);
        }
        (status, Json(ErrorResponse::new(&self))).into_response()
    }
}

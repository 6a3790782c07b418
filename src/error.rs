//! Error types for the front-desk server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes surfaced in JSON error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    DbFailure = 2,
    NoSuchRoom = 3,
    NoSuchGuest = 4,
    NoSuchReservation = 5,
    BadValue = 6,
    Duplicate = 7,
    InvalidTransition = 8,
    HasActiveReservations = 9,
    RoomUnavailable = 10,
}

/// Entity kinds referenced by not-found errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Room,
    Guest,
    Reservation,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Entity::Room => "Room",
            Entity::Guest => "Guest",
            Entity::Reservation => "Reservation",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: Entity, id: i32 },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A lifecycle action attempted against a reservation or room whose
    /// current status does not permit it. The message names that status.
    #[error("State conflict: {0}")]
    StateConflict(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(BusinessRuleKind),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Distinguished business-rule failures, so clients can react to them
/// without parsing message strings.
#[derive(Error, Debug)]
pub enum BusinessRuleKind {
    #[error("{entity} has active reservations")]
    HasActiveReservations { entity: &'static str },

    #[error("Room is unavailable for the requested dates: {0}")]
    RoomUnavailable(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound { entity, id } => {
                let code = match entity {
                    Entity::Room => ErrorCode::NoSuchRoom,
                    Entity::Guest => ErrorCode::NoSuchGuest,
                    Entity::Reservation => ErrorCode::NoSuchReservation,
                };
                (
                    StatusCode::NOT_FOUND,
                    code,
                    format!("{} with id {} not found", entity, id),
                )
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::StateConflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::InvalidTransition, msg.clone())
            }
            AppError::BusinessRule(kind) => {
                let code = match kind {
                    BusinessRuleKind::HasActiveReservations { .. } => {
                        ErrorCode::HasActiveReservations
                    }
                    BusinessRuleKind::RoomUnavailable(_) => ErrorCode::RoomUnavailable,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, code, kind.to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

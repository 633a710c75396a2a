//! HTTP handlers.
//!
//! Domain errors are translated to status codes here, at the API boundary.

mod system;
mod terms;


use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

pub use system::*;
pub use terms::*;

/// Error response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Term 'visitor' not found")]
    pub error: String,
}

/// Handler result carrying a status code and JSON error body on failure.
pub type ApiResult<T> = Result<T, (StatusCode, Json<ErrorResponse>)>;

/// Map a database error onto an HTTP status and error body.
pub(crate) fn db_error_response(e: DbError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, message) = match &e {
        DbError::NotFound { key, .. } => {
            (StatusCode::NOT_FOUND, format!("Term '{}' not found", key))
        }
        DbError::AlreadyExists { key, .. } => (
            StatusCode::CONFLICT,
            format!("Term with keyword '{}' already exists", key),
        ),
        DbError::Validation { message } => (StatusCode::UNPROCESSABLE_ENTITY, message.clone()),
        DbError::Connection { .. } => {
            error!(error = %e, "Storage unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        DbError::Database { .. } | DbError::Migration { .. } => {
            error!(error = %e, "Storage failure");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    };

    (status, Json(ErrorResponse { error: message }))
}

/// JSON body extractor whose rejections use the `ErrorResponse` body.
///
/// Malformed JSON, wrong field types and missing fields keep the status
/// axum assigns (400, 415 or 422).
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_response(rejection)),
        }
    }
}

fn json_rejection_response(rejection: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        rejection.status(),
        Json(ErrorResponse {
            error: rejection.body_text(),
        }),
    )
}

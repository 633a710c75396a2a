//! Glossary term handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use super::{ApiJson, ApiResult, ErrorResponse, db_error_response};
use crate::api::AppState;
use crate::db::{Database, DbError, NewTerm, Term, TermPatch, TermRepository};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Term response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TermResponse {
    /// Store-generated identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Unique lookup keyword
    #[schema(example = "visitor")]
    pub keyword: String,
    /// Human-readable title
    #[schema(example = "Visitor Pattern")]
    pub title: String,
    /// Explanatory text
    #[schema(example = "Separates an algorithm from the objects it operates on.")]
    pub description: String,
    /// Creation timestamp
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    #[schema(example = "2025-01-01T00:00:00Z")]
    pub updated_at: DateTime<Utc>,
}

impl From<Term> for TermResponse {
    fn from(t: Term) -> Self {
        Self {
            id: t.id,
            keyword: t.keyword,
            title: t.title,
            description: t.description,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Create term request DTO
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTermRequest {
    /// Unique keyword (1-128 characters)
    #[schema(example = "visitor", min_length = 1, max_length = 128)]
    pub keyword: String,
    /// Title (1-256 characters)
    #[schema(example = "Visitor Pattern", min_length = 1, max_length = 256)]
    pub title: String,
    /// Description (non-empty)
    #[schema(example = "Separates an algorithm from the objects it operates on.", min_length = 1)]
    pub description: String,
}

impl From<CreateTermRequest> for NewTerm {
    fn from(req: CreateTermRequest) -> Self {
        NewTerm {
            keyword: req.keyword,
            title: req.title,
            description: req.description,
        }
    }
}

/// Update term request DTO. Omitted fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTermRequest {
    /// New title (1-256 characters)
    #[schema(example = "Visitor", min_length = 1, max_length = 256)]
    #[serde(default)]
    pub title: Option<String>,
    /// New description (non-empty)
    #[schema(example = "Double dispatch over an object structure.", min_length = 1)]
    #[serde(default)]
    pub description: Option<String>,
}

impl From<UpdateTermRequest> for TermPatch {
    fn from(req: UpdateTermRequest) -> Self {
        TermPatch {
            title: req.title,
            description: req.description,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all terms
///
/// Returns every term ordered by title
#[utoipa::path(
    get,
    path = "/terms",
    tag = "terms",
    responses(
        (status = 200, description = "List of terms", body = Vec<TermResponse>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_terms<D: Database>(
    State(state): State<AppState<D>>,
) -> ApiResult<Json<Vec<TermResponse>>> {
    let terms = state
        .db()
        .terms()
        .list()
        .await
        .map_err(db_error_response)?;

    Ok(Json(terms.into_iter().map(TermResponse::from).collect()))
}

/// Get a term by keyword
///
/// Returns a single term by its keyword
#[utoipa::path(
    get,
    path = "/terms/{keyword}",
    tag = "terms",
    params(
        ("keyword" = String, Path, description = "Term keyword")
    ),
    responses(
        (status = 200, description = "Term found", body = TermResponse),
        (status = 404, description = "Term not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_term<D: Database>(
    State(state): State<AppState<D>>,
    Path(keyword): Path<String>,
) -> ApiResult<Json<TermResponse>> {
    let term = state
        .db()
        .terms()
        .get(&keyword)
        .await
        .map_err(db_error_response)?;

    Ok(Json(TermResponse::from(term)))
}

/// Create a new term
///
/// Creates a new term and returns it
#[utoipa::path(
    post,
    path = "/terms",
    tag = "terms",
    request_body = CreateTermRequest,
    responses(
        (status = 201, description = "Term created", body = TermResponse),
        (status = 409, description = "Keyword already exists", body = ErrorResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Invalid field values", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_term<D: Database>(
    State(state): State<AppState<D>>,
    ApiJson(req): ApiJson<CreateTermRequest>,
) -> ApiResult<(StatusCode, Json<TermResponse>)> {
    let new_term = NewTerm::from(req);
    new_term.validate().map_err(db_error_response)?;

    let term = state
        .db()
        .terms()
        .create(&new_term)
        .await
        .map_err(|e| {
            if let DbError::AlreadyExists { key, .. } = &e {
                warn!(keyword = %key, "Rejected duplicate keyword");
            }
            db_error_response(e)
        })?;

    info!(id = term.id, keyword = %term.keyword, "Created term");

    Ok((StatusCode::CREATED, Json(TermResponse::from(term))))
}

/// Update a term
///
/// Applies the supplied fields to an existing term
#[utoipa::path(
    put,
    path = "/terms/{keyword}",
    tag = "terms",
    params(
        ("keyword" = String, Path, description = "Term keyword")
    ),
    request_body = UpdateTermRequest,
    responses(
        (status = 200, description = "Term updated", body = TermResponse),
        (status = 404, description = "Term not found", body = ErrorResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Invalid field values", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_term<D: Database>(
    State(state): State<AppState<D>>,
    Path(keyword): Path<String>,
    ApiJson(req): ApiJson<UpdateTermRequest>,
) -> ApiResult<Json<TermResponse>> {
    let patch = TermPatch::from(req);
    patch.validate().map_err(db_error_response)?;
    if patch.is_empty() {
        debug!(keyword = %keyword, "Empty patch, refreshing updated_at only");
    }

    let term = state
        .db()
        .terms()
        .update(&keyword, &patch)
        .await
        .map_err(db_error_response)?;

    Ok(Json(TermResponse::from(term)))
}

/// Delete a term
///
/// Deletes a term by its keyword
#[utoipa::path(
    delete,
    path = "/terms/{keyword}",
    tag = "terms",
    params(
        ("keyword" = String, Path, description = "Term keyword")
    ),
    responses(
        (status = 204, description = "Term deleted"),
        (status = 404, description = "Term not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_term<D: Database>(
    State(state): State<AppState<D>>,
    Path(keyword): Path<String>,
) -> ApiResult<StatusCode> {
    state
        .db()
        .terms()
        .delete(&keyword)
        .await
        .map_err(db_error_response)?;

    info!(keyword = %keyword, "Deleted term");

    Ok(StatusCode::NO_CONTENT)
}

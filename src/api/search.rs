use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::SearchError;
use crate::models::{SearchRequest, SearchResponse, MAX_LIMIT, MIN_LIMIT};
use crate::state::AppState;

/// GET /search - Keyword search:
///   1. Validate query, offset and limit
///   2. Match documents containing every query term
///   3. BM25-rank the matches
///   4. Return the requested page with navigation links
pub async fn search(
    State(state): State<AppState>,
    Query(req): Query<SearchRequest>,
) -> Result<Json<SearchResponse>, (StatusCode, String)> {
    if req.query.is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            "query must not be empty".to_string(),
        ));
    }
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&req.limit) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("limit must be between {MIN_LIMIT} and {MAX_LIMIT}"),
        ));
    }

    // Ranking is CPU-bound; keep it off the async workers.
    let engine = state.engine.clone();
    let SearchRequest {
        query,
        offset,
        limit,
    } = req;
    let result = tokio::task::spawn_blocking(move || engine.search(&query, offset, limit))
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Search task failed: {e}"),
            )
        })?;

    match result {
        Ok(response) => Ok(Json(response)),
        Err(e) => Err(error_response(e)),
    }
}

fn error_response(err: SearchError) -> (StatusCode, String) {
    match err {
        SearchError::InvalidQuery => {
            tracing::debug!("Rejected query: {err}");
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        SearchError::InvalidPage { .. } => {
            tracing::debug!("Rejected page: {err}");
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        other => {
            tracing::error!("Search failed: {other}");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}

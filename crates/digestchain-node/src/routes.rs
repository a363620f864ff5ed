//! HTTP surface of the node.
//!
//! The transport layer stays thin: it obtains a content digest, calls into
//! the ledger, and serializes whatever comes back. The chain's external
//! representation is pretty-printed JSON with the stable field order
//! (index, content_digest, hash, prev_hash).

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use tracing::{debug, error, info};

use digestchain_core::content_digest_for;
use digestchain_ledger::{AppendError, Ledger};

use crate::source::ContentSource;

/// Shared application state passed to handlers.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
    pub source: Arc<ContentSource>,
}

/// Build the router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/chain", get(get_chain))
        .route("/chain/:id", post(write_block))
        .route("/source/:id", get(get_source_text))
        .route("/health", get(health))
        .with_state(state)
}

/// Structured failure body for error responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Pretty-printed JSON response with the given status.
fn pretty_json<T: Serialize + ?Sized>(status: StatusCode, value: &T) -> Response {
    match serde_json::to_string_pretty(value) {
        Ok(body) => (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => {
            error!(error = %e, "response serialization failed");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// GET /chain — the full ledger snapshot.
async fn get_chain(State(state): State<AppState>) -> Response {
    let snapshot = state.ledger.snapshot();
    pretty_json(StatusCode::OK, snapshot.blocks())
}

/// POST /chain/:id — digest the identifier and append a block for it.
async fn write_block(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let content_digest = content_digest_for(&id);

    match state.ledger.append(&content_digest) {
        Ok(block) => {
            info!(index = block.index(), hash = %block.hash(), "block appended");
            if let Ok(dump) = serde_json::to_string_pretty(state.ledger.snapshot().blocks()) {
                debug!(chain = %dump, "chain after append");
            }
            pretty_json(StatusCode::CREATED, &block)
        }
        Err(e) => {
            let status = match e {
                AppendError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                AppendError::EmptyLedger => StatusCode::INTERNAL_SERVER_ERROR,
            };
            error!(error = %e, "append rejected");
            pretty_json(
                status,
                &ErrorBody {
                    error: e.to_string(),
                },
            )
        }
    }
}

/// GET /source/:id — sanitized upstream text for an identifier.
async fn get_source_text(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.source.fetch_text(&id).await {
        Ok(text) => (StatusCode::OK, text).into_response(),
        Err(e) => {
            error!(error = %e, "content retrieval failed");
            pretty_json(
                StatusCode::BAD_GATEWAY,
                &ErrorBody {
                    error: e.to_string(),
                },
            )
        }
    }
}

/// GET /health — liveness.
async fn health() -> Response {
    pretty_json(StatusCode::OK, &serde_json::json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use digestchain_core::Block;

    #[test]
    fn test_pretty_json_is_indented_with_stable_field_order() {
        let block = Block::next(&Block::genesis(), "abc123");
        let body = serde_json::to_string_pretty(&[block]).unwrap();

        assert!(body.contains("\n  "));
        let idx = body.find("\"index\"").unwrap();
        let digest = body.find("\"content_digest\"").unwrap();
        let hash = body.find("\"hash\"").unwrap();
        let prev = body.find("\"prev_hash\"").unwrap();
        assert!(idx < digest && digest < hash && hash < prev);
    }

    #[test]
    fn test_error_body_shape() {
        let body = serde_json::to_string(&ErrorBody {
            error: "index mismatch".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"error":"index mismatch"}"#);
    }
}

//! Quote HTTP Routes
//!
//! Endpoints for creating, listing, sampling and deleting quotes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, Query, State},
    routing::{delete, get},
    Json, Router,
};

use crate::quotes::{
    MessageResponse, NewQuote, Quote, QuoteError, QuoteId, QuoteResult, QuoteStore,
};

pub const QUOTE_SAVED: &str = "Quote was successfully saved!";
pub const QUOTE_DELETED: &str = "Quote was successfully deleted!";

// ==================
// Shared State
// ==================

/// Quote state shared across handlers
pub struct QuoteState {
    pub store: Arc<QuoteStore>,
}

impl QuoteState {
    pub fn new() -> Self {
        Self::with_store(Arc::new(QuoteStore::new()))
    }

    pub fn with_store(store: Arc<QuoteStore>) -> Self {
        Self { store }
    }
}

impl Default for QuoteState {
    fn default() -> Self {
        Self::new()
    }
}

// ==================
// Quote Routes
// ==================

/// Create quote routes
///
/// Each method router gets its own fallback so that a known path with an
/// unsupported method answers like an unknown path.
pub fn quote_routes(state: Arc<QuoteState>) -> Router {
    Router::new()
        .route(
            "/quotes",
            get(list_quotes_handler)
                .post(create_quote_handler)
                .fallback(endpoint_not_found_handler),
        )
        .route(
            "/quotes/random",
            get(random_quote_handler)
                .delete(delete_random_handler)
                .fallback(endpoint_not_found_handler),
        )
        .route(
            "/quotes/:id",
            delete(delete_quote_handler).fallback(endpoint_not_found_handler),
        )
        .fallback(endpoint_not_found_handler)
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_quote_handler(
    State(state): State<Arc<QuoteState>>,
    body: Bytes,
) -> QuoteResult<Json<MessageResponse>> {
    let quote = NewQuote::from_slice(&body)
        .and_then(NewQuote::validate)
        .map_err(|e| {
            tracing::warn!(error = %e, "rejected quote payload");
            e
        })?;

    let id = state.store.add(quote);
    tracing::info!(id, "quote saved");

    Ok(Json(MessageResponse::new(QUOTE_SAVED)))
}

async fn list_quotes_handler(
    State(state): State<Arc<QuoteState>>,
    Query(query): Query<Vec<(String, String)>>,
) -> Json<Vec<Quote>> {
    // First occurrence wins when the parameter is repeated
    let author = query
        .iter()
        .find(|(key, _)| key == "author")
        .map(|(_, value)| value.as_str());

    let quotes = match author {
        None | Some("") => state.store.list_all(),
        Some(author) => state.store.list_by_author(author),
    };

    Json(quotes)
}

async fn random_quote_handler(State(state): State<Arc<QuoteState>>) -> QuoteResult<Json<Quote>> {
    if state.store.count() == 0 {
        return Err(QuoteError::NoQuotes);
    }

    // A delete may land between collecting ids and sampling
    let ids = state.store.ids();
    state
        .store
        .sample_random(&ids)
        .map(Json)
        .ok_or(QuoteError::NoQuotes)
}

async fn delete_quote_handler(
    State(state): State<Arc<QuoteState>>,
    path: Result<Path<String>, PathRejection>,
) -> QuoteResult<Json<MessageResponse>> {
    let Path(raw_id) = path.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "rejected undecodable quote id");
        QuoteError::InvalidId(rejection.body_text())
    })?;

    let id: QuoteId = raw_id.parse().map_err(|_| {
        tracing::warn!(id = %raw_id, "rejected non-numeric quote id");
        QuoteError::InvalidId(raw_id.clone())
    })?;

    if !state.store.exists(id) {
        return Err(QuoteError::QuoteNotFound(id));
    }

    state.store.delete(id);
    tracing::info!(id, "quote deleted");

    Ok(Json(MessageResponse::new(QUOTE_DELETED)))
}

/// `random` is a static segment, so `DELETE /quotes/random` lands here
/// instead of on the id route.
async fn delete_random_handler() -> QuoteError {
    tracing::warn!(id = "random", "rejected non-numeric quote id");
    QuoteError::InvalidId("random".to_string())
}

async fn endpoint_not_found_handler() -> QuoteError {
    QuoteError::EndpointNotFound
}

//! Board provider and context extractor.
//!
//! The router installs a [`BoardContext`] as a request extension; handlers
//! take it as an extractor. A handler reached without the provider rejects
//! the request instead of inventing a board.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{Html, IntoResponse, Response},
    Extension, Router,
};
use kanban_core::{BoardError, Store};
use std::sync::Arc;
use tracing::error;

/// Everything a board handler needs.
#[derive(Clone)]
pub struct BoardContext {
    pub store: Store,
    pub title: Arc<str>,
}

impl BoardContext {
    pub fn new(store: Store, title: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            title: title.into(),
        }
    }
}

/// Install `ctx` as the board provider for every route in `router`.
pub fn provide(router: Router, ctx: BoardContext) -> Router {
    router.layer(Extension(ctx))
}

/// Rejection for a handler used outside the board provider.
#[derive(Debug)]
pub struct MissingProvider;

impl IntoResponse for MissingProvider {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(BoardError::MissingProvider.to_string()),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for BoardContext
where
    S: Send + Sync,
{
    type Rejection = MissingProvider;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<BoardContext>().cloned().ok_or_else(|| {
            error!(path = %parts.uri.path(), "{}", BoardError::MissingProvider);
            MissingProvider
        })
    }
}

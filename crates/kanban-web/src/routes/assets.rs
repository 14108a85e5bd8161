//! Embedded static assets.

use axum::{http::header, response::IntoResponse};

const BOARD_CSS: &str = include_str!("../../assets/board.css");

/// GET /assets/board.css - Board stylesheet.
pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], BOARD_CSS)
}

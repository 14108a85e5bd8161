//! Kanban Web Server
//!
//! Axum-based server for the HTMX board page and a small JSON API.

pub mod context;
pub mod routes;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use context::BoardContext;

/// All board routes, without a provider installed.
pub fn board_routes() -> Router {
    let api_routes = Router::new()
        .route("/board", get(routes::api::get_board))
        .route("/actions", post(routes::api::dispatch));

    // HTMX-driven HTML routes
    let html_routes = Router::new()
        .route("/", get(routes::board_html::index))
        .route("/lists", post(routes::board_html::create_list))
        .route("/forms/list", get(routes::board_html::add_list_form))
        .route("/forms/list/cancel", get(routes::board_html::add_list_button))
        .route("/lists/{id}/tasks", post(routes::board_html::create_task))
        .route("/lists/{id}/form", get(routes::board_html::add_task_form))
        .route("/lists/{id}/form/cancel", get(routes::board_html::add_task_button));

    Router::new()
        .merge(html_routes)
        .nest("/api", api_routes)
        .route("/assets/board.css", get(routes::assets::stylesheet))
}

/// Create the application router with `ctx` as the board provider.
pub fn create_router(ctx: BoardContext) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    context::provide(board_routes(), ctx)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(ctx: BoardContext, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Board listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

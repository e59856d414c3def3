//! HTTP handlers and router for the catalog screens

pub mod authors;
pub mod book_instances;
pub mod health;

use axum::{
    response::Html,
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::{error::AppResult, views::Page, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        // Book instances
        .route("/bookinstances", get(book_instances::list))
        .route(
            "/bookinstance/create",
            get(book_instances::create_form).post(book_instances::create),
        )
        .route("/bookinstance/:id", get(book_instances::detail))
        .route(
            "/bookinstance/:id/delete",
            get(book_instances::delete_form).post(book_instances::delete),
        )
        .route(
            "/bookinstance/:id/update",
            get(book_instances::update_form).post(book_instances::update),
        )
        // Authors
        .route("/authors", get(authors::list))
        .route("/author/create", get(authors::create_form).post(authors::create))
        .route("/author/:id", get(authors::detail));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/catalog", catalog)
        .with_state(state)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Render `view` with `body` and the page title
pub(crate) fn render<T: Serialize>(state: &AppState, view: &str, title: &str, body: T) -> AppResult<Html<String>> {
    let context = serde_json::to_value(Page { title, body })?;
    Ok(Html(state.views.render(view, &context)?))
}

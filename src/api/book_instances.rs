//! Book instance (copy) screens

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde_json::json;

use super::render;
use crate::{
    error::AppResult,
    models::book_instance::{BookInstanceForm, DeleteBookInstanceForm},
    services::Submission,
    AppState,
};

const FORM_VIEW: &str = "bookinstance_form";
const CREATE_TITLE: &str = "Create BookInstance";
const UPDATE_TITLE: &str = "Update Book Instance";
const LIST_LOCATION: &str = "/catalog/bookinstances";

/// List all book instances
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let list = state.services.book_instances.list().await?;
    render(&state, "bookinstance_list", "Book Instance List", json!({ "bookinstance_list": list }))
}

/// Show one book instance
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let instance = state.services.book_instances.detail(&id).await?;
    let title = format!("Copy: {}", instance.book.title);
    render(&state, "bookinstance_detail", &title, json!({ "bookinstance": instance }))
}

/// Empty create form
pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = state.services.book_instances.create_form().await?;
    render(&state, FORM_VIEW, CREATE_TITLE, page)
}

/// Handle create form submission
pub async fn create(State(state): State<AppState>, Form(form): Form<BookInstanceForm>) -> AppResult<Response> {
    match state.services.book_instances.create(&form).await? {
        Submission::Accepted { location } => Ok(Redirect::to(&location).into_response()),
        Submission::Rejected(page) => Ok(render(&state, FORM_VIEW, CREATE_TITLE, page)?.into_response()),
    }
}

/// Delete confirmation; shown even when the id is unknown
pub async fn delete_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let instance = state.services.book_instances.delete_form(&id).await?;
    render(&state, "bookinstance_delete", "Delete Book Instance", json!({ "bookinstance": instance }))
}

/// Handle delete confirmation; the id comes from the form body
pub async fn delete(State(state): State<AppState>, Form(form): Form<DeleteBookInstanceForm>) -> AppResult<Redirect> {
    let id = form.bookinstanceid.unwrap_or_default();
    state.services.book_instances.delete(&id).await?;
    Ok(Redirect::to(LIST_LOCATION))
}

/// Update form filled with the stored values
pub async fn update_form(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let page = state.services.book_instances.update_form(&id).await?;
    render(&state, FORM_VIEW, UPDATE_TITLE, page)
}

/// Handle update form submission
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(form): Form<BookInstanceForm>,
) -> AppResult<Response> {
    match state.services.book_instances.update(&id, &form).await? {
        Submission::Accepted { location } => Ok(Redirect::to(&location).into_response()),
        Submission::Rejected(page) => Ok(render(&state, FORM_VIEW, UPDATE_TITLE, page)?.into_response()),
    }
}

//! Author screens

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde_json::json;

use super::render;
use crate::{error::AppResult, models::author::AuthorForm, services::Submission, AppState};

const FORM_VIEW: &str = "author_form";
const CREATE_TITLE: &str = "Create Author";

/// List all authors
pub async fn list(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.authors.list().await?;
    render(&state, "author_list", "Author List", json!({ "author_list": authors }))
}

/// Show one author
pub async fn detail(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Html<String>> {
    let author = state.services.authors.detail(&id).await?;
    render(&state, "author_detail", "Author Detail", json!({ "author": author }))
}

pub async fn create_form(State(state): State<AppState>) -> AppResult<Html<String>> {
    render(&state, FORM_VIEW, CREATE_TITLE, json!({}))
}

/// Handle author form submission
pub async fn create(State(state): State<AppState>, Form(form): Form<AuthorForm>) -> AppResult<Response> {
    match state.services.authors.create(&form).await? {
        Submission::Accepted { location } => Ok(Redirect::to(&location).into_response()),
        Submission::Rejected(page) => Ok(render(&state, FORM_VIEW, CREATE_TITLE, page)?.into_response()),
    }
}

//! Author screens: list, detail and create

use serde::Serialize;
use uuid::Uuid;
use validator::Validate;

use super::Submission;
use crate::{
    error::{AppError, AppResult},
    models::author::{Author, AuthorDisplay, AuthorDraft, AuthorForm, AuthorNames},
    repository::Repository,
    validation::{FieldError, FormValidator},
};

/// Everything the author form needs
#[derive(Debug, Clone, Serialize)]
pub struct AuthorFormPage {
    pub author: Option<AuthorDraft>,
    pub errors: Vec<FieldError>,
}

#[derive(Clone)]
pub struct AuthorService {
    repository: Repository,
}

impl AuthorService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<AuthorDisplay>> {
        let authors = self.repository.authors.list().await?;
        Ok(authors.iter().map(AuthorDisplay::from).collect())
    }

    pub async fn detail(&self, id: &str) -> AppResult<AuthorDisplay> {
        let not_found = || AppError::NotFound("Author not found".to_string());
        let id = Uuid::parse_str(id.trim()).map_err(|_| not_found())?;
        self.repository
            .authors
            .find(id)
            .await?
            .map(|author| AuthorDisplay::from(&author))
            .ok_or_else(not_found)
    }

    pub async fn create(&self, form: &AuthorForm) -> AppResult<Submission<AuthorFormPage>> {
        // Lengths are checked on the escaped values, which are what gets stored
        let sanitize = |raw: &Option<String>| {
            html_escape::encode_safe(raw.as_deref().unwrap_or_default().trim()).into_owned()
        };
        let names = AuthorNames {
            first_name: sanitize(&form.first_name),
            family_name: sanitize(&form.family_name),
        };

        let mut v = FormValidator::new();
        if let Err(e) = names.validate() {
            let field_errors = e.field_errors();
            for (param, value) in [("first_name", &names.first_name), ("family_name", &names.family_name)] {
                let Some(errors) = field_errors.get(param) else {
                    continue;
                };
                for error in errors.iter() {
                    let msg = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid {}", param));
                    v.push(FieldError::new(param, msg, value.as_str()));
                }
            }
        }
        let date_of_birth = v
            .field("date_of_birth", form.date_of_birth.as_deref(), "Invalid date of birth")
            .optional()
            .date();
        let date_of_death = v
            .field("date_of_death", form.date_of_death.as_deref(), "Invalid date of death")
            .optional()
            .date();

        if !v.is_valid() {
            let errors = v.into_errors();
            tracing::debug!("Author create rejected with {} error(s)", errors.len());
            return Ok(Submission::Rejected(AuthorFormPage {
                author: Some(AuthorDraft {
                    first_name: names.first_name,
                    family_name: names.family_name,
                    date_of_birth,
                    date_of_death,
                }),
                errors,
            }));
        }

        let author = Author {
            id: Uuid::new_v4(),
            first_name: names.first_name,
            family_name: names.family_name,
            date_of_birth,
            date_of_death,
        };
        self.repository.authors.insert(&author).await?;
        tracing::info!("Author created: id={}", author.id);

        Ok(Submission::Accepted { location: author.url() })
    }
}

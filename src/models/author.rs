//! Author model and its derived display fields

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use super::format_medium_date;

/// Full author model from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    pub fn name(&self) -> String {
        display_name(&self.first_name, &self.family_name)
    }

    pub fn url(&self) -> String {
        author_url(self.id)
    }

    pub fn lifespan(&self) -> String {
        lifespan(self.date_of_birth, self.date_of_death)
    }
}

/// "family, first", or empty when either part is missing
pub fn display_name(first_name: &str, family_name: &str) -> String {
    if first_name.is_empty() || family_name.is_empty() {
        return String::new();
    }
    format!("{}, {}", family_name, first_name)
}

pub fn author_url(id: Uuid) -> String {
    format!("/catalog/author/{}", id)
}

pub fn lifespan(date_of_birth: Option<NaiveDate>, date_of_death: Option<NaiveDate>) -> String {
    let Some(birth) = date_of_birth else {
        return "Information not available".to_string();
    };
    match date_of_death {
        Some(death) => format!("{} - {}", format_medium_date(birth), format_medium_date(death)),
        None => format!("{} - Present", format_medium_date(birth)),
    }
}

/// Author as handed to views, derived fields included
#[derive(Debug, Clone, Serialize)]
pub struct AuthorDisplay {
    pub id: Uuid,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub name: String,
    pub url: String,
    pub lifespan: String,
}

impl From<&Author> for AuthorDisplay {
    fn from(author: &Author) -> Self {
        Self {
            id: author.id,
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
            name: author.name(),
            url: author.url(),
            lifespan: author.lifespan(),
        }
    }
}

/// Author form as submitted
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AuthorForm {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub date_of_death: Option<String>,
}

/// Trimmed author names, checked before anything is stored
#[derive(Debug, Clone, Validate)]
pub struct AuthorNames {
    #[validate(length(min = 1, max = 100, message = "First name must be specified (at most 100 characters)."))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Family name must be specified (at most 100 characters)."))]
    pub family_name: String,
}

/// Field values used to fill the author form
#[derive(Debug, Clone, Serialize)]
pub struct AuthorDraft {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

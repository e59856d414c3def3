//! Book instance (physical copy) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::{fmt, str::FromStr};
use uuid::Uuid;

use super::{
    book::{Book, BookSummary},
    format_medium_date,
};

/// Availability of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "book_instance_status")]
pub enum BookInstanceStatus {
    Available,
    #[default]
    Maintenance,
    Loaned,
    Reserved,
}

impl BookInstanceStatus {
    pub const ALL: [BookInstanceStatus; 4] = [
        BookInstanceStatus::Available,
        BookInstanceStatus::Maintenance,
        BookInstanceStatus::Loaned,
        BookInstanceStatus::Reserved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookInstanceStatus::Available => "Available",
            BookInstanceStatus::Maintenance => "Maintenance",
            BookInstanceStatus::Loaned => "Loaned",
            BookInstanceStatus::Reserved => "Reserved",
        }
    }

    /// Parse a submitted status; an empty value selects the default.
    pub fn from_form(value: &str) -> Result<Self, String> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        value.parse()
    }
}

impl FromStr for BookInstanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown book instance status: {}", s))
    }
}

impl fmt::Display for BookInstanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored book instance record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookInstance {
    pub id: Uuid,
    /// Id of the book this is a copy of
    #[sqlx(rename = "book_id")]
    pub book: Uuid,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
}

impl BookInstance {
    pub fn url(&self) -> String {
        book_instance_url(self.id)
    }

    pub fn due_back_formatted(&self) -> String {
        self.due_back.map(format_medium_date).unwrap_or_default()
    }
}

pub fn book_instance_url(id: Uuid) -> String {
    format!("/catalog/bookinstance/{}", id)
}

/// A book instance with its book resolved
#[derive(Debug, Clone, PartialEq)]
pub struct PopulatedBookInstance {
    pub instance: BookInstance,
    pub book: Book,
}

/// Book instance as handed to views, derived fields included
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceDisplay {
    pub id: Uuid,
    pub book: BookSummary,
    pub imprint: String,
    pub status: BookInstanceStatus,
    pub due_back: Option<NaiveDate>,
    pub due_back_formatted: String,
    pub url: String,
}

impl From<&PopulatedBookInstance> for BookInstanceDisplay {
    fn from(populated: &PopulatedBookInstance) -> Self {
        let instance = &populated.instance;
        Self {
            id: instance.id,
            book: BookSummary::from(&populated.book),
            imprint: instance.imprint.clone(),
            status: instance.status,
            due_back: instance.due_back,
            due_back_formatted: instance.due_back_formatted(),
            url: instance.url(),
        }
    }
}

/// Book instance form as submitted; every field may be missing
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BookInstanceForm {
    #[serde(default)]
    pub book: Option<String>,
    #[serde(default)]
    pub imprint: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub due_back: Option<String>,
}

/// Delete confirmation form
#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeleteBookInstanceForm {
    #[serde(default)]
    pub bookinstanceid: Option<String>,
}

/// Field values used to fill the book instance form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookInstanceDraft {
    pub id: Option<Uuid>,
    pub book: String,
    pub imprint: String,
    pub status: String,
    pub due_back: Option<NaiveDate>,
}

impl From<&BookInstance> for BookInstanceDraft {
    fn from(instance: &BookInstance) -> Self {
        Self {
            id: Some(instance.id),
            book: instance.book.to_string(),
            imprint: instance.imprint.clone(),
            status: instance.status.to_string(),
            due_back: instance.due_back,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(due_back: Option<NaiveDate>) -> BookInstance {
        BookInstance {
            id: Uuid::nil(),
            book: Uuid::nil(),
            imprint: "First Edition".into(),
            status: BookInstanceStatus::Loaned,
            due_back,
        }
    }

    #[test]
    fn status_parses_exact_names() {
        assert_eq!("Loaned".parse::<BookInstanceStatus>(), Ok(BookInstanceStatus::Loaned));
        assert!("loaned".parse::<BookInstanceStatus>().is_err());
    }

    #[test]
    fn empty_status_falls_back_to_maintenance() {
        assert_eq!(BookInstanceStatus::from_form(""), Ok(BookInstanceStatus::Maintenance));
        assert!(BookInstanceStatus::from_form("Lost").is_err());
    }

    #[test]
    fn url_uses_the_record_id() {
        assert_eq!(
            instance(None).url(),
            "/catalog/bookinstance/00000000-0000-0000-0000-000000000000"
        );
    }

    #[test]
    fn due_back_formatted_is_empty_without_date() {
        assert_eq!(instance(None).due_back_formatted(), "");
        let due = NaiveDate::from_ymd_opt(2026, 10, 16);
        assert_eq!(instance(due).due_back_formatted(), "Oct 16, 2026");
    }

    #[test]
    fn draft_carries_stored_values() {
        let draft = BookInstanceDraft::from(&instance(None));
        assert_eq!(draft.id, Some(Uuid::nil()));
        assert_eq!(draft.status, "Loaned");
        assert_eq!(draft.imprint, "First Edition");
    }
}

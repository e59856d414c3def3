//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Full book record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: String,
    /// Author id
    #[sqlx(rename = "author_id")]
    pub author: Uuid,
    pub summary: String,
    pub isbn: String,
}

impl Book {
    pub fn url(&self) -> String {
        book_url(self.id)
    }
}

/// Id + title projection used to fill book selectors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BookTitle {
    pub id: Uuid,
    pub title: String,
}

impl From<&Book> for BookTitle {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
        }
    }
}

/// Book reference embedded in book copy pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary {
    pub id: Uuid,
    pub title: String,
    pub url: String,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            url: book.url(),
        }
    }
}

pub fn book_url(id: Uuid) -> String {
    format!("/catalog/book/{}", id)
}

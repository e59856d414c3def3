//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;

use chrono::NaiveDate;

// Re-export commonly used types
pub use author::{Author, AuthorDisplay};
pub use book::{Book, BookTitle};
pub use book_instance::{BookInstance, BookInstanceDisplay, BookInstanceStatus, PopulatedBookInstance};

/// Medium date form used on every page, e.g. `Oct 16, 2026`
pub fn format_medium_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

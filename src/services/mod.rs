//! Business logic services

pub mod authors;
pub mod book_instances;

use crate::repository::Repository;

/// Result of a form submission
#[derive(Debug)]
pub enum Submission<P> {
    /// Stored; the client is sent to `location`
    Accepted { location: String },
    /// Not stored; the form is shown again
    Rejected(P),
}

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub authors: authors::AuthorService,
    pub book_instances: book_instances::BookInstanceService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            authors: authors::AuthorService::new(repository.clone()),
            book_instances: book_instances::BookInstanceService::new(repository),
        }
    }
}

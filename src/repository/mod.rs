//! Repository layer for catalog storage
//!
//! Workflows only see the store traits below. A `Repository` is built once at
//! startup, either over a PostgreSQL pool or over an in-memory store, and
//! handed to the services.

pub mod authors;
pub mod book_instances;
pub mod books;
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, BookInstance, BookTitle, PopulatedBookInstance},
};

pub use memory::MemoryStore;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Id and title of every book, ordered by title
    async fn list_titles(&self) -> AppResult<Vec<BookTitle>>;
}

#[async_trait]
pub trait BookInstanceStore: Send + Sync {
    /// Every instance with its book resolved, oldest first
    async fn list_populated(&self) -> AppResult<Vec<PopulatedBookInstance>>;

    async fn find_populated(&self, id: Uuid) -> AppResult<Option<PopulatedBookInstance>>;

    async fn find(&self, id: Uuid) -> AppResult<Option<BookInstance>>;

    async fn insert(&self, instance: &BookInstance) -> AppResult<()>;

    /// Replace the stored record with the same id. Returns the stored record,
    /// or `None` when no record has that id.
    async fn replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>>;

    /// Delete by id; deleting a missing id is not an error
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait AuthorStore: Send + Sync {
    /// Every author, ordered by family name
    async fn list(&self) -> AppResult<Vec<Author>>;

    async fn find(&self, id: Uuid) -> AppResult<Option<Author>>;

    async fn insert(&self, author: &Author) -> AppResult<()>;
}

/// Main repository struct holding one handle per collection
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
    pub book_instances: Arc<dyn BookInstanceStore>,
    pub authors: Arc<dyn AuthorStore>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            book_instances: Arc::new(book_instances::BookInstancesRepository::new(pool.clone())),
            authors: Arc::new(authors::AuthorsRepository::new(pool)),
        }
    }

    /// Create a repository whose collections all live in `store`
    pub fn in_memory(store: MemoryStore) -> Self {
        Self {
            books: Arc::new(store.clone()),
            book_instances: Arc::new(store.clone()),
            authors: Arc::new(store),
        }
    }
}

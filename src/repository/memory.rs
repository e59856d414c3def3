//! In-memory catalog store
//!
//! Used by the `memory` storage backend and by tests. Listing keeps
//! insertion order, and a book instance must point at a known book when it
//! is inserted or replaced.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AuthorStore, BookInstanceStore, BookStore};
use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInstance, BookTitle, PopulatedBookInstance},
};

#[derive(Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
    book_instances: Vec<BookInstance>,
}

impl Collections {
    fn book(&self, id: Uuid) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    fn populate(&self, instance: &BookInstance) -> Option<PopulatedBookInstance> {
        self.book(instance.book).map(|book| PopulatedBookInstance {
            instance: instance.clone(),
            book: book.clone(),
        })
    }

    fn require_book(&self, id: Uuid) -> AppResult<()> {
        match self.book(id) {
            Some(_) => Ok(()),
            None => Err(AppError::Internal(format!("book {} does not exist", id))),
        }
    }
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<Collections>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_author(&self, author: Author) {
        self.inner.write().await.authors.push(author);
    }

    pub async fn add_book(&self, book: Book) {
        self.inner.write().await.books.push(book);
    }

    /// Snapshot of the stored book instances
    pub async fn book_instances(&self) -> Vec<BookInstance> {
        self.inner.read().await.book_instances.clone()
    }
}

#[async_trait]
impl BookStore for MemoryStore {
    async fn list_titles(&self) -> AppResult<Vec<BookTitle>> {
        let collections = self.inner.read().await;
        let mut titles: Vec<BookTitle> = collections.books.iter().map(BookTitle::from).collect();
        titles.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(titles)
    }
}

#[async_trait]
impl BookInstanceStore for MemoryStore {
    async fn list_populated(&self) -> AppResult<Vec<PopulatedBookInstance>> {
        let collections = self.inner.read().await;
        Ok(collections
            .book_instances
            .iter()
            .filter_map(|instance| collections.populate(instance))
            .collect())
    }

    async fn find_populated(&self, id: Uuid) -> AppResult<Option<PopulatedBookInstance>> {
        let collections = self.inner.read().await;
        Ok(collections
            .book_instances
            .iter()
            .find(|instance| instance.id == id)
            .and_then(|instance| collections.populate(instance)))
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        let collections = self.inner.read().await;
        Ok(collections.book_instances.iter().find(|i| i.id == id).cloned())
    }

    async fn insert(&self, instance: &BookInstance) -> AppResult<()> {
        let mut collections = self.inner.write().await;
        collections.require_book(instance.book)?;
        if collections.book_instances.iter().any(|i| i.id == instance.id) {
            return Err(AppError::Internal(format!("book instance {} already exists", instance.id)));
        }
        collections.book_instances.push(instance.clone());
        Ok(())
    }

    async fn replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>> {
        let mut collections = self.inner.write().await;
        collections.require_book(instance.book)?;
        let Some(slot) = collections.book_instances.iter_mut().find(|i| i.id == instance.id) else {
            return Ok(None);
        };
        *slot = instance.clone();
        Ok(Some(instance.clone()))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.inner.write().await.book_instances.retain(|i| i.id != id);
        Ok(())
    }
}

#[async_trait]
impl AuthorStore for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let mut authors = self.inner.read().await.authors.clone();
        authors.sort_by(|a, b| {
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.first_name.cmp(&b.first_name))
        });
        Ok(authors)
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<Author>> {
        let collections = self.inner.read().await;
        Ok(collections.authors.iter().find(|a| a.id == id).cloned())
    }

    async fn insert(&self, author: &Author) -> AppResult<()> {
        self.inner.write().await.authors.push(author.clone());
        Ok(())
    }
}

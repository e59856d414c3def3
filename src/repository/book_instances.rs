//! Book instances repository for database operations

use async_trait::async_trait;
use sqlx::{postgres::PgRow, Pool, Postgres, Row};
use uuid::Uuid;

use super::BookInstanceStore;
use crate::{
    error::AppResult,
    models::{Book, BookInstance, PopulatedBookInstance},
};

const POPULATED_SELECT: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.status, bi.due_back,
           b.title AS book_title, b.author_id AS book_author_id,
           b.summary AS book_summary, b.isbn AS book_isbn
    FROM book_instances bi
    JOIN books b ON b.id = bi.book_id
"#;

#[derive(Clone)]
pub struct BookInstancesRepository {
    pool: Pool<Postgres>,
}

impl BookInstancesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

fn populated_from_row(row: &PgRow) -> PopulatedBookInstance {
    let book_id: Uuid = row.get("book_id");
    PopulatedBookInstance {
        instance: BookInstance {
            id: row.get("id"),
            book: book_id,
            imprint: row.get("imprint"),
            status: row.get("status"),
            due_back: row.get("due_back"),
        },
        book: Book {
            id: book_id,
            title: row.get("book_title"),
            author: row.get("book_author_id"),
            summary: row.get("book_summary"),
            isbn: row.get("book_isbn"),
        },
    }
}

#[async_trait]
impl BookInstanceStore for BookInstancesRepository {
    async fn list_populated(&self) -> AppResult<Vec<PopulatedBookInstance>> {
        let query = format!("{} ORDER BY bi.crea_date, bi.id", POPULATED_SELECT);
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(populated_from_row).collect())
    }

    async fn find_populated(&self, id: Uuid) -> AppResult<Option<PopulatedBookInstance>> {
        let query = format!("{} WHERE bi.id = $1", POPULATED_SELECT);
        let row = sqlx::query(&query).bind(id).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(populated_from_row))
    }

    async fn find(&self, id: Uuid) -> AppResult<Option<BookInstance>> {
        let row = sqlx::query_as::<_, BookInstance>(
            "SELECT id, book_id, imprint, status, due_back FROM book_instances WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn insert(&self, instance: &BookInstance) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, status, due_back)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(instance.id)
        .bind(instance.book)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn replace(&self, instance: &BookInstance) -> AppResult<Option<BookInstance>> {
        let row = sqlx::query_as::<_, BookInstance>(
            r#"
            UPDATE book_instances
            SET book_id = $2, imprint = $3, status = $4, due_back = $5
            WHERE id = $1
            RETURNING id, book_id, imprint, status, due_back
            "#,
        )
        .bind(instance.id)
        .bind(instance.book)
        .bind(&instance.imprint)
        .bind(instance.status)
        .bind(instance.due_back)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

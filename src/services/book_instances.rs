//! Book instance workflow: list, detail, create, update and delete copies

use serde::Serialize;
use uuid::Uuid;

use super::Submission;
use crate::{
    error::{AppError, AppResult},
    models::{
        book_instance::{BookInstanceDraft, BookInstanceForm},
        BookInstance, BookInstanceDisplay, BookInstanceStatus, BookTitle,
    },
    repository::Repository,
    validation::{parse_iso_date, FieldError, FormValidator},
};

const NOT_FOUND_DETAIL: &str = "Book copy not found";
const NOT_FOUND_UPDATE: &str = "Book Instance not found";

/// Everything the book instance form needs
#[derive(Debug, Clone, Serialize)]
pub struct BookInstanceFormPage {
    pub book_list: Vec<BookTitle>,
    pub selected_book: Option<String>,
    pub bookinstance: Option<BookInstanceDraft>,
    pub errors: Vec<FieldError>,
}

/// Sanitized create submission
struct CreateFields {
    book: String,
    imprint: String,
    status: String,
    due_back: Option<chrono::NaiveDate>,
}

/// Sanitized update submission
struct UpdateFields {
    book: String,
    imprint: String,
    status: String,
    due_back: String,
}

#[derive(Clone)]
pub struct BookInstanceService {
    repository: Repository,
}

impl BookInstanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<BookInstanceDisplay>> {
        let instances = self.repository.book_instances.list_populated().await?;
        Ok(instances.iter().map(BookInstanceDisplay::from).collect())
    }

    pub async fn detail(&self, id: &str) -> AppResult<BookInstanceDisplay> {
        let id = parse_id(id).ok_or_else(|| AppError::NotFound(NOT_FOUND_DETAIL.to_string()))?;
        self.repository
            .book_instances
            .find_populated(id)
            .await?
            .map(|populated| BookInstanceDisplay::from(&populated))
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_DETAIL.to_string()))
    }

    pub async fn create_form(&self) -> AppResult<BookInstanceFormPage> {
        let book_list = self.repository.books.list_titles().await?;
        Ok(BookInstanceFormPage {
            book_list,
            selected_book: None,
            bookinstance: None,
            errors: Vec::new(),
        })
    }

    pub async fn create(&self, form: &BookInstanceForm) -> AppResult<Submission<BookInstanceFormPage>> {
        let (fields, errors) = validate_create(form);

        if !errors.is_empty() {
            tracing::debug!("Book instance create rejected with {} error(s)", errors.len());
            let book_list = self.repository.books.list_titles().await?;
            let selected_book = Some(fields.book.clone()).filter(|b| !b.is_empty());
            return Ok(Submission::Rejected(BookInstanceFormPage {
                book_list,
                selected_book,
                bookinstance: Some(BookInstanceDraft {
                    id: None,
                    book: fields.book,
                    imprint: fields.imprint,
                    status: fields.status,
                    due_back: fields.due_back,
                }),
                errors,
            }));
        }

        let instance = BookInstance {
            id: Uuid::new_v4(),
            book: parse_book_id(&fields.book)?,
            imprint: fields.imprint,
            status: parse_status(&fields.status)?,
            due_back: fields.due_back,
        };
        self.repository.book_instances.insert(&instance).await?;
        tracing::info!("Book instance created: id={} book={}", instance.id, instance.book);

        Ok(Submission::Accepted { location: instance.url() })
    }

    /// Confirmation data; an unknown id yields `None` rather than an error.
    pub async fn delete_form(&self, id: &str) -> AppResult<Option<BookInstance>> {
        match parse_id(id) {
            Some(id) => self.repository.book_instances.find(id).await,
            None => Ok(None),
        }
    }

    /// Delete the submitted id. Missing records are not an error.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let Some(id) = parse_id(id) else {
            tracing::debug!("Book instance delete skipped: unparseable id {:?}", id);
            return Ok(());
        };
        let existing = self.repository.book_instances.find(id).await?;
        self.repository.book_instances.delete(id).await?;
        tracing::info!("Book instance deleted: id={} existed={}", id, existing.is_some());
        Ok(())
    }

    pub async fn update_form(&self, id: &str) -> AppResult<BookInstanceFormPage> {
        let id = parse_id(id).ok_or_else(|| AppError::NotFound(NOT_FOUND_UPDATE.to_string()))?;
        self.form_for_existing(id, Vec::new()).await
    }

    pub async fn update(&self, id: &str, form: &BookInstanceForm) -> AppResult<Submission<BookInstanceFormPage>> {
        let id = parse_id(id).ok_or_else(|| AppError::NotFound(NOT_FOUND_UPDATE.to_string()))?;
        let (fields, errors) = validate_update(form);

        if !errors.is_empty() {
            tracing::debug!("Book instance {} update rejected with {} error(s)", id, errors.len());
            return Ok(Submission::Rejected(self.form_for_existing(id, errors).await?));
        }

        let replacement = BookInstance {
            id,
            book: parse_book_id(&fields.book)?,
            imprint: fields.imprint,
            status: parse_status(&fields.status)?,
            due_back: Some(
                parse_iso_date(&fields.due_back)
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid due back date: {}", fields.due_back)))?,
            ),
        };

        let stored = self
            .repository
            .book_instances
            .replace(&replacement)
            .await?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_UPDATE.to_string()))?;
        tracing::info!("Book instance updated: id={}", stored.id);

        Ok(Submission::Accepted { location: stored.url() })
    }

    /// Fetch the stored record and the book list together and build the
    /// form from the stored values.
    async fn form_for_existing(&self, id: Uuid, errors: Vec<FieldError>) -> AppResult<BookInstanceFormPage> {
        let (populated, book_list) = tokio::try_join!(
            self.repository.book_instances.find_populated(id),
            self.repository.books.list_titles(),
        )?;
        let populated = populated.ok_or_else(|| AppError::NotFound(NOT_FOUND_UPDATE.to_string()))?;

        Ok(BookInstanceFormPage {
            book_list,
            selected_book: Some(populated.book.id.to_string()),
            bookinstance: Some(BookInstanceDraft::from(&populated.instance)),
            errors,
        })
    }
}

fn validate_create(form: &BookInstanceForm) -> (CreateFields, Vec<FieldError>) {
    let mut v = FormValidator::new();
    let book = v
        .field("book", form.book.as_deref(), "Book must be specified")
        .trim()
        .not_empty()
        .escape()
        .value();
    let imprint = v
        .field("imprint", form.imprint.as_deref(), "Imprint must be specified")
        .trim()
        .not_empty()
        .escape()
        .value();
    let status = v.field("status", form.status.as_deref(), "Invalid value").escape().value();
    let due_back = v
        .field("due_back", form.due_back.as_deref(), "Invalid date")
        .optional()
        .date();

    let fields = CreateFields { book, imprint, status, due_back };
    (fields, v.into_errors())
}

fn validate_update(form: &BookInstanceForm) -> (UpdateFields, Vec<FieldError>) {
    let mut v = FormValidator::new();
    let book = v
        .field("book", form.book.as_deref(), "Book title must not be empty.")
        .trim()
        .not_empty()
        .escape()
        .value();
    let imprint = v
        .field("imprint", form.imprint.as_deref(), "Imprint must not be empty.")
        .trim()
        .not_empty()
        .escape()
        .value();
    let due_back = v
        .field("due_back", form.due_back.as_deref(), "Due back date must be provided.")
        .trim()
        .not_empty()
        .escape()
        .value();
    let status = form.status.clone().unwrap_or_default();

    let fields = UpdateFields { book, imprint, status, due_back };
    (fields, v.into_errors())
}

/// An id that does not parse cannot name a stored record
fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

fn parse_book_id(book: &str) -> AppResult<Uuid> {
    Uuid::parse_str(book).map_err(|_| AppError::BadRequest(format!("Invalid book id: {}", book)))
}

fn parse_status(status: &str) -> AppResult<BookInstanceStatus> {
    BookInstanceStatus::from_form(status).map_err(AppError::BadRequest)
}

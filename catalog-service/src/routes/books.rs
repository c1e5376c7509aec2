use crate::app::AppState;
use crate::error::CatalogError;
use crate::models::book::Book;
use crate::models::form::{parse_id, BookForm};
use crate::models::responses::MessageResponse;
use axum::{
    extract::{
        multipart::MultipartRejection, rejection::QueryRejection, Multipart, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use tracing::info;

const INVALID_ID: &str = "Invalid ID";

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    pub id: Option<String>,
}

pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, CatalogError> {
    let books = state
        .store
        .list()
        .await
        .map_err(|e| CatalogError::internal("Failed to load books", e))?;

    Ok(Json(books))
}

pub async fn create_book(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<(StatusCode, Json<Book>), CatalogError> {
    const FAILED: &str = "Failed to add book";

    let form = BookForm::read(multipart?).await?;
    let draft = form.draft()?;

    let image_url = match &form.image {
        Some(image) => state
            .uploads
            .store(&image.file_name, &image.bytes)
            .await
            .map_err(|e| CatalogError::internal(FAILED, e))?,
        None => String::new(),
    };

    let book = state
        .store
        .insert(draft, image_url)
        .await
        .map_err(|e| CatalogError::internal(FAILED, e))?;

    info!("Added book {} ({})", book.id, book.title);
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Book>, CatalogError> {
    const FAILED: &str = "Failed to update book";

    let form = BookForm::read(multipart?).await?;
    let id = form.book_id()?;
    let draft = form.draft()?;

    let existing = state
        .store
        .get(id)
        .await
        .map_err(|e| CatalogError::internal(FAILED, e))?;
    if existing.is_none() {
        return Err(CatalogError::NotFound);
    }

    let image_url = match &form.image {
        Some(image) => Some(
            state
                .uploads
                .store(&image.file_name, &image.bytes)
                .await
                .map_err(|e| CatalogError::internal(FAILED, e))?,
        ),
        None => None,
    };

    // The book may have been deleted while the image was being written.
    let book = state
        .store
        .update(id, draft, image_url)
        .await
        .map_err(|e| CatalogError::internal(FAILED, e))?
        .ok_or(CatalogError::NotFound)?;

    info!("Updated book {}", book.id);
    Ok(Json(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    query: Result<Query<DeleteParams>, QueryRejection>,
) -> Result<Json<MessageResponse>, CatalogError> {
    let id = query
        .ok()
        .and_then(|Query(params)| params.id)
        .as_deref()
        .and_then(parse_id)
        .ok_or_else(|| CatalogError::Validation(INVALID_ID.to_string()))?;

    let removed = state
        .store
        .delete(id)
        .await
        .map_err(|e| CatalogError::internal("Failed to delete book", e))?;
    if !removed {
        return Err(CatalogError::NotFound);
    }

    info!("Deleted book {}", id);
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

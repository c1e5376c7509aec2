use crate::error::CatalogError;
use crate::models::book::{BookDraft, BookId};
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;

pub const INVALID_BOOK_DATA: &str = "Invalid book data";
const INVALID_FORM_DATA: &str = "Invalid form data";

#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Raw fields of a submitted book form, before validation.
#[derive(Debug, Default, Clone)]
pub struct BookForm {
    pub id: Option<String>,
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: Option<String>,
    pub image: Option<UploadedImage>,
}

impl BookForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, CatalogError> {
        let mut form = BookForm::default();

        while let Some(field) = multipart.next_field().await.map_err(form_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if name == "image" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(form_error)?;

                // Browsers send an empty part when no file was chosen.
                if !file_name.is_empty() || !bytes.is_empty() {
                    form.image = Some(UploadedImage { file_name, bytes });
                }
                continue;
            }

            let value = field.text().await.map_err(form_error)?;

            match name.as_str() {
                "id" => form.id = Some(value),
                "title" => form.title = Some(value),
                "author" => form.author = Some(value),
                "price" => form.price = Some(value),
                _ => {}
            }
        }

        Ok(form)
    }

    pub fn draft(&self) -> Result<BookDraft, CatalogError> {
        let title = required_text(self.title.as_deref())?;
        let author = required_text(self.author.as_deref())?;
        let price = self
            .price
            .as_deref()
            .and_then(parse_price)
            .ok_or_else(|| CatalogError::Validation(INVALID_BOOK_DATA.to_string()))?;

        Ok(BookDraft {
            title,
            author,
            price,
        })
    }

    pub fn book_id(&self) -> Result<BookId, CatalogError> {
        self.id
            .as_deref()
            .and_then(parse_id)
            .ok_or_else(|| CatalogError::Validation(INVALID_BOOK_DATA.to_string()))
    }
}

/// Keeps the size-limit case distinct so oversized uploads answer 413.
fn form_error(e: MultipartError) -> CatalogError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        CatalogError::PayloadTooLarge
    } else {
        CatalogError::Validation(INVALID_FORM_DATA.to_string())
    }
}

fn required_text(value: Option<&str>) -> Result<String, CatalogError> {
    match value.map(str::trim) {
        Some(text) if !text.is_empty() => Ok(text.to_string()),
        _ => Err(CatalogError::Validation(INVALID_BOOK_DATA.to_string())),
    }
}

/// Finite, non-negative decimal. `NaN` and `inf` parse as `f64` but are rejected.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

pub fn parse_id(raw: &str) -> Option<BookId> {
    raw.trim().parse::<BookId>().ok()
}

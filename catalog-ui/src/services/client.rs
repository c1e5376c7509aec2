use crate::error::ClientError;
use crate::models::book::{Book, BookId, ErrorBody, MessageBody};
use crate::models::form::BookForm;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use tracing::info;

/// HTTP client for the catalog service's `/books` resource.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    pub async fn list_books(&self) -> Result<Vec<Book>, ClientError> {
        let response = self.client.get(self.books_url()).send().await?;
        let books: Vec<Book> = check(response).await?.json().await?;
        info!("Loaded {} books", books.len());
        Ok(books)
    }

    pub async fn create_book(&self, form: &BookForm) -> Result<Book, ClientError> {
        let body = multipart(form, None).await?;
        let response = self
            .client
            .post(self.books_url())
            .multipart(body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn update_book(&self, id: BookId, form: &BookForm) -> Result<Book, ClientError> {
        let body = multipart(form, Some(id)).await?;
        let response = self
            .client
            .put(self.books_url())
            .multipart(body)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    pub async fn delete_book(&self, id: BookId) -> Result<String, ClientError> {
        let response = self
            .client
            .delete(self.books_url())
            .query(&[("id", id)])
            .send()
            .await?;
        let body: MessageBody = check(response).await?.json().await?;
        Ok(body.message)
    }
}

async fn multipart(form: &BookForm, id: Option<BookId>) -> Result<Form, ClientError> {
    let mut body = Form::new();
    if let Some(id) = id {
        body = body.text("id", id.to_string());
    }
    body = body
        .text("title", form.title.clone())
        .text("author", form.author.clone())
        .text("price", form.price.trim().to_string());

    if let Some(path) = &form.image {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "image".to_string());
        body = body.part("image", Part::bytes(bytes).file_name(file_name));
    }

    Ok(body)
}

/// Turns a non-success response into [`ClientError::Status`], keeping the
/// server's `error` message when it sent one.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ClientError::Status { status, message })
}

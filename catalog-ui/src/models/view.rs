use crate::error::ClientError;
use crate::models::book::{Book, BookId};
use crate::models::form::BookForm;
use tracing::error;

pub const LOAD_FAILED: &str = "Failed to load books";

/// Local copy of the catalog as last reported by the server.
///
/// Mutation responses are merged verbatim; the list is only re-fetched on
/// an explicit load.
#[derive(Debug, Default)]
pub struct CatalogView {
    books: Vec<Book>,
    error: Option<String>,
    editing: Option<Book>,
    add_form: BookForm,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn editing(&self) -> Option<&Book> {
        self.editing.as_ref()
    }

    /// Values left in the add form; kept after a failed submit.
    pub fn add_form(&self) -> &BookForm {
        &self.add_form
    }

    pub fn set_add_form(&mut self, form: BookForm) {
        self.add_form = form;
    }

    pub fn load(&mut self, result: Result<Vec<Book>, ClientError>) {
        match result {
            Ok(books) => {
                self.books = books;
                self.error = None;
            }
            Err(e) => {
                error!("{}: {}", LOAD_FAILED, e);
                self.books.clear();
                self.error = Some(LOAD_FAILED.to_string());
            }
        }
    }

    pub fn apply_created(&mut self, book: Book) {
        self.books.push(book);
        self.add_form = BookForm::blank();
    }

    pub fn begin_edit(&mut self, id: BookId) -> Option<&Book> {
        self.editing = self.books.iter().find(|book| book.id == id).cloned();
        self.editing.as_ref()
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Replaces the local record with the same id. A record the server knows
    /// but this view does not is ignored.
    pub fn apply_updated(&mut self, updated: Book) {
        if let Some(book) = self.books.iter_mut().find(|book| book.id == updated.id) {
            *book = updated;
        }
        self.editing = None;
    }

    pub fn apply_deleted(&mut self, id: BookId) {
        self.books.retain(|book| book.id != id);
        if self.editing.as_ref().is_some_and(|book| book.id == id) {
            self.editing = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn book(id: BookId, title: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            price: 1.0,
            image_url: String::new(),
        }
    }

    fn loaded(books: Vec<Book>) -> CatalogView {
        let mut view = CatalogView::new();
        view.load(Ok(books));
        view
    }

    #[test]
    fn failed_load_shows_banner_and_empty_list() {
        let mut view = loaded(vec![book(1, "A")]);

        view.load(Err(ClientError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "Failed to load books".to_string(),
        }));

        assert_eq!(view.error(), Some(LOAD_FAILED));
        assert!(view.books().is_empty());

        view.load(Ok(vec![book(1, "A")]));
        assert_eq!(view.error(), None);
        assert_eq!(view.books().len(), 1);
    }

    #[test]
    fn created_books_are_appended_and_form_cleared() {
        let mut view = loaded(vec![book(1, "A")]);
        view.set_add_form(BookForm {
            title: "B".to_string(),
            ..BookForm::blank()
        });

        view.apply_created(book(5, "B"));

        let ids: Vec<_> = view.books().iter().map(|b| b.id).collect();
        assert_eq!(ids, [1, 5]);
        assert_eq!(view.add_form(), &BookForm::blank());
    }

    #[test]
    fn update_replaces_matching_record_in_place() {
        let mut view = loaded(vec![book(1, "A"), book(2, "B")]);
        assert_eq!(view.begin_edit(2).map(|b| b.title.as_str()), Some("B"));

        view.apply_updated(book(2, "B2"));

        assert_eq!(view.books()[1].title, "B2");
        assert_eq!(view.books()[0].title, "A");
        assert!(view.editing().is_none());
    }

    #[test]
    fn begin_edit_of_unknown_id_selects_nothing() {
        let mut view = loaded(vec![book(1, "A")]);
        assert!(view.begin_edit(9).is_none());
        assert!(view.editing().is_none());
    }

    #[test]
    fn server_only_records_are_not_merged() {
        // Another client added id 7; this view never loaded it.
        let mut view = loaded(vec![book(1, "A")]);

        view.apply_updated(book(7, "Elsewhere"));
        view.apply_deleted(8);

        assert_eq!(view.books(), &[book(1, "A")]);
    }

    #[test]
    fn records_deleted_elsewhere_linger_until_reload() {
        let mut view = loaded(vec![book(1, "A"), book(2, "B")]);

        // Server has since dropped id 2; the optimistic view keeps showing it.
        view.apply_deleted(1);
        assert_eq!(view.books(), &[book(2, "B")]);

        view.load(Ok(Vec::new()));
        assert!(view.books().is_empty());
    }

    #[test]
    fn deleting_the_record_being_edited_closes_the_form() {
        let mut view = loaded(vec![book(1, "A")]);
        view.begin_edit(1);

        view.apply_deleted(1);

        assert!(view.editing().is_none());
        assert!(view.books().is_empty());
    }
}

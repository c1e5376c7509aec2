use crate::models::book::{seed_books, Book, BookDraft, BookId};
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait BookRepository {
    /// All books in insertion order.
    async fn list(&self) -> Result<Vec<Book>, StoreError>;
    async fn get(&self, id: BookId) -> Result<Option<Book>, StoreError>;
    async fn insert(&self, draft: BookDraft, image_url: String) -> Result<Book, StoreError>;
    /// Replaces title/author/price. `image_url` of `None` keeps the current image.
    /// Returns `None` when no book has `id`.
    async fn update(
        &self,
        id: BookId,
        draft: BookDraft,
        image_url: Option<String>,
    ) -> Result<Option<Book>, StoreError>;
    /// Returns true if the book existed and was removed.
    async fn delete(&self, id: BookId) -> Result<bool, StoreError>;
}

struct StoreState {
    books: Vec<Book>,
    next_id: BookId,
}

/// Process-lifetime book list guarded by a single mutex.
///
/// Ids come from a counter that only moves forward, so ids of deleted
/// books are never handed out again.
pub struct InMemoryBookStore {
    state: Mutex<StoreState>,
}

impl InMemoryBookStore {
    pub fn new(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|book| book.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(StoreState { books, next_id }),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_books())
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        // Every mutation leaves the Vec consistent, so a poisoned lock is still usable.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookStore {
    async fn list(&self) -> Result<Vec<Book>, StoreError> {
        Ok(self.lock().books.clone())
    }

    async fn get(&self, id: BookId) -> Result<Option<Book>, StoreError> {
        Ok(self.lock().books.iter().find(|book| book.id == id).cloned())
    }

    async fn insert(&self, draft: BookDraft, image_url: String) -> Result<Book, StoreError> {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;

        let book = Book::from_draft(id, draft, image_url);
        state.books.push(book.clone());
        Ok(book)
    }

    async fn update(
        &self,
        id: BookId,
        draft: BookDraft,
        image_url: Option<String>,
    ) -> Result<Option<Book>, StoreError> {
        let mut state = self.lock();
        Ok(state
            .books
            .iter_mut()
            .find(|book| book.id == id)
            .map(|book| {
                book.apply(draft, image_url);
                book.clone()
            }))
    }

    async fn delete(&self, id: BookId) -> Result<bool, StoreError> {
        let mut state = self.lock();
        match state.books.iter().position(|book| book.id == id) {
            Some(index) => {
                state.books.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> BookDraft {
        BookDraft {
            title: title.to_string(),
            author: "Someone".to_string(),
            price: 5.0,
        }
    }

    #[tokio::test]
    async fn seeded_store_lists_two_books_in_order() {
        let store = InMemoryBookStore::seeded();
        let books = store.list().await.unwrap();

        assert_eq!(books.len(), 2);
        assert_eq!(books[0].id, 1);
        assert_eq!(books[0].title, "The Great Gatsby");
        assert_eq!(books[1].id, 2);
        assert_eq!(books[1].title, "1984");
    }

    #[tokio::test]
    async fn insert_appends_with_fresh_ids() {
        let store = InMemoryBookStore::seeded();

        let first = store.insert(draft("A"), String::new()).await.unwrap();
        let second = store.insert(draft("B"), String::new()).await.unwrap();

        assert_eq!(first.id, 3);
        assert_eq!(second.id, 4);
        let titles: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.title)
            .collect();
        assert_eq!(titles, ["The Great Gatsby", "1984", "A", "B"]);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryBookStore::new(Vec::new());

        let first = store.insert(draft("A"), String::new()).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());
        let second = store.insert(draft("B"), String::new()).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn update_replaces_fields_and_optionally_image() {
        let store = InMemoryBookStore::seeded();

        let kept = store
            .update(1, draft("Gatsby"), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(kept.title, "Gatsby");
        assert!(kept.image_url.starts_with("https://"));

        let replaced = store
            .update(1, draft("Gatsby"), Some("/uploads/1-cover.png".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(replaced.image_url, "/uploads/1-cover.png");
        assert_eq!(store.get(1).await.unwrap(), Some(replaced));
    }

    #[tokio::test]
    async fn update_and_delete_of_unknown_id_leave_store_alone() {
        let store = InMemoryBookStore::seeded();
        let before = store.list().await.unwrap();

        assert!(store.update(99, draft("X"), None).await.unwrap().is_none());
        assert!(!store.delete(99).await.unwrap());

        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = InMemoryBookStore::seeded();

        assert!(store.delete(1).await.unwrap());

        let books = store.list().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
    }
}

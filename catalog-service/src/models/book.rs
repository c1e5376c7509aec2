use serde::{Deserialize, Serialize};

pub type BookId = u64;

/// A catalog record as held by the store and returned over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
    /// Relative `/uploads/...` path, an absolute URL for seeded records, or empty.
    pub image_url: String,
}

/// Validated book fields, ready to be written to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Book {
    pub fn from_draft(id: BookId, draft: BookDraft, image_url: String) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            price: draft.price,
            image_url,
        }
    }

    pub fn apply(&mut self, draft: BookDraft, image_url: Option<String>) {
        self.title = draft.title;
        self.author = draft.author;
        self.price = draft.price;
        if let Some(url) = image_url {
            self.image_url = url;
        }
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        Book {
            id: 1,
            title: "The Great Gatsby".to_string(),
            author: "F. Scott Fitzgerald".to_string(),
            price: 10.99,
            image_url: "https://media.glamour.com/photos/56e1f3c462b398fa64cbd304/master/w_1600%2Cc_limit/entertainment-2016-02-18-main.jpg".to_string(),
        },
        Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            price: 8.99,
            image_url: "https://m.media-amazon.com/images/I/91O8Zn2YZUL._AC_UF894,1000_QL80_.jpg".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_image_url_in_camel_case() {
        let book = Book::from_draft(
            7,
            BookDraft {
                title: "Dune".to_string(),
                author: "Frank Herbert".to_string(),
                price: 9.5,
            },
            String::new(),
        );

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["price"], 9.5);
        assert!(json.get("image_url").is_none());
    }

    #[test]
    fn apply_keeps_image_when_none_given() {
        let mut book = seed_books().remove(0);
        let original_image = book.image_url.clone();

        book.apply(
            BookDraft {
                title: "Gatsby".to_string(),
                author: "Fitzgerald".to_string(),
                price: 12.0,
            },
            None,
        );

        assert_eq!(book.title, "Gatsby");
        assert_eq!(book.price, 12.0);
        assert_eq!(book.image_url, original_image);
    }
}

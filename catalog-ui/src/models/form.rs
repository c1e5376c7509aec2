use crate::error::ClientError;
use crate::models::book::Book;
use std::path::PathBuf;

/// Field values of the add or edit form as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub price: String,
    pub image: Option<PathBuf>,
}

impl BookForm {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Edit form pre-filled from the current record. The image stays empty,
    /// meaning "keep the existing one".
    pub fn prefilled(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            price: book.price.to_string(),
            image: None,
        }
    }

    pub fn validate(&self) -> Result<(), ClientError> {
        if self.title.trim().is_empty() {
            return Err(ClientError::InvalidForm("Title is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(ClientError::InvalidForm("Author is required".to_string()));
        }
        match self.price.trim().parse::<f64>() {
            Ok(price) if price.is_finite() && price >= 0.0 => Ok(()),
            _ => Err(ClientError::InvalidForm(
                "Price must be a non-negative number".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefilled_copies_record_values() {
        let book = Book {
            id: 2,
            title: "1984".to_string(),
            author: "George Orwell".to_string(),
            price: 8.99,
            image_url: "/uploads/1-cover.png".to_string(),
        };

        let form = BookForm::prefilled(&book);
        assert_eq!(form.title, "1984");
        assert_eq!(form.author, "George Orwell");
        assert_eq!(form.price, "8.99");
        assert!(form.image.is_none());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn validate_requires_all_fields() {
        let valid = BookForm {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            price: "9.99".to_string(),
            image: None,
        };
        assert!(valid.validate().is_ok());

        let no_title = BookForm {
            title: " ".to_string(),
            ..valid.clone()
        };
        assert_eq!(no_title.validate().unwrap_err().to_string(), "Title is required");

        let bad_price = BookForm {
            price: "ten".to_string(),
            ..valid.clone()
        };
        assert!(bad_price.validate().is_err());

        assert!(BookForm::blank().validate().is_err());
    }
}

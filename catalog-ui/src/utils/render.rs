use crate::models::book::Book;
use crate::models::view::CatalogView;

pub fn render_book(book: &Book) -> String {
    let mut out = format!(
        "[{}] {}\n    By {}\n    ${:.2}",
        book.id, book.title, book.author, book.price
    );
    if !book.image_url.is_empty() {
        out.push_str(&format!("\n    Image: {}", book.image_url));
    }
    out
}

pub fn render_catalog(view: &CatalogView) -> String {
    let mut out = String::new();

    if let Some(error) = view.error() {
        out.push_str(&format!("!! {}\n", error));
    }

    if let Some(book) = view.editing() {
        out.push_str(&format!("Editing [{}] {}\n", book.id, book.title));
    }

    out.push_str("Available Books\n");
    if view.books().is_empty() {
        out.push_str("  No books available\n");
    }
    for book in view.books() {
        out.push_str(&render_book(book));
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;

    fn book(image_url: &str) -> Book {
        Book {
            id: 3,
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            price: 9.5,
            image_url: image_url.to_string(),
        }
    }

    #[test]
    fn renders_price_with_two_decimals_and_optional_image() {
        assert_eq!(render_book(&book("")), "[3] Dune\n    By Frank Herbert\n    $9.50");
        assert!(render_book(&book("/uploads/1-dune.png")).ends_with("Image: /uploads/1-dune.png"));
    }

    #[test]
    fn empty_catalog_shows_banner_and_placeholder() {
        let mut view = CatalogView::new();
        view.load(Err(ClientError::InvalidForm("boom".to_string())));

        let out = render_catalog(&view);
        assert!(out.starts_with("!! Failed to load books\n"));
        assert!(out.contains("No books available"));
    }

    #[test]
    fn shows_record_under_edit() {
        let mut view = CatalogView::new();
        view.load(Ok(vec![book("")]));
        view.begin_edit(3);

        assert!(render_catalog(&view).starts_with("Editing [3] Dune\n"));
    }
}

use crate::error::ClientError;
use crate::models::book::BookId;
use crate::models::command::{Command, HELP};
use crate::models::form::BookForm;
use crate::models::view::CatalogView;
use crate::services::client::CatalogClient;
use crate::utils::render::{render_book, render_catalog};
use std::io::Write;
use std::path::PathBuf;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{error, info, warn};

/// Interactive loop: reads commands and form answers from `R`, renders to `W`.
pub struct Session<R, W> {
    client: CatalogClient,
    view: CatalogView,
    input: Lines<R>,
    out: W,
}

impl<R, W> Session<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(client: CatalogClient, input: R, out: W) -> Self {
        Self {
            client,
            view: CatalogView::new(),
            input: input.lines(),
            out,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    pub async fn run(&mut self) -> Result<(), ClientError> {
        self.refresh().await;
        self.render()?;
        writeln!(self.out, "{}", HELP)?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.input.next_line().await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(command) => {
                    if !self.execute(command).await? {
                        break;
                    }
                }
                Err(message) => writeln!(self.out, "{}", message)?,
            }
        }

        Ok(())
    }

    /// Returns false once the session should end.
    async fn execute(&mut self, command: Command) -> Result<bool, ClientError> {
        match command {
            Command::List => self.render()?,
            Command::Refresh => {
                self.refresh().await;
                self.render()?;
            }
            Command::Add => self.add().await?,
            Command::Edit(id) => self.edit(id).await?,
            Command::Delete(id) => self.delete(id).await?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn refresh(&mut self) {
        let result = self.client.list_books().await;
        self.view.load(result);
    }

    fn render(&mut self) -> Result<(), ClientError> {
        write!(self.out, "{}", render_catalog(&self.view))?;
        Ok(())
    }

    async fn add(&mut self) -> Result<(), ClientError> {
        writeln!(self.out, "Add a New Book")?;
        let initial = self.view.add_form().clone();
        let Some(form) = self.fill_form(initial).await? else {
            return Ok(());
        };
        self.view.set_add_form(form.clone());

        if let Err(e) = form.validate() {
            writeln!(self.out, "{}", e)?;
            return Ok(());
        }

        match self.client.create_book(&form).await {
            Ok(book) => {
                info!("Added book {}", book.id);
                writeln!(self.out, "Added:\n{}", render_book(&book))?;
                self.view.apply_created(book);
            }
            Err(e) => {
                error!("Failed to add book: {}", e);
                writeln!(self.out, "Failed to add book: {}", e)?;
            }
        }
        Ok(())
    }

    async fn edit(&mut self, id: BookId) -> Result<(), ClientError> {
        let Some(book) = self.view.begin_edit(id).cloned() else {
            writeln!(self.out, "No book with id {}", id)?;
            return Ok(());
        };

        writeln!(self.out, "Edit Book (empty answer keeps the current value)")?;
        let Some(form) = self.fill_form(BookForm::prefilled(&book)).await? else {
            self.view.cancel_edit();
            return Ok(());
        };

        if let Err(e) = form.validate() {
            writeln!(self.out, "{}", e)?;
            self.view.cancel_edit();
            return Ok(());
        }

        match self.client.update_book(id, &form).await {
            Ok(updated) => {
                info!("Updated book {}", updated.id);
                writeln!(self.out, "Saved:\n{}", render_book(&updated))?;
                self.view.apply_updated(updated);
            }
            Err(e) => {
                error!("Failed to update book {}: {}", id, e);
                writeln!(self.out, "Failed to update book: {}", e)?;
                self.view.cancel_edit();
            }
        }
        Ok(())
    }

    async fn delete(&mut self, id: BookId) -> Result<(), ClientError> {
        match self.client.delete_book(id).await {
            Ok(message) => {
                info!("Deleted book {}", id);
                self.view.apply_deleted(id);
                writeln!(self.out, "{}", message)?;
            }
            Err(e) => {
                warn!("Failed to delete book {}: {}", id, e);
                writeln!(self.out, "Failed to delete book: {}", e)?;
            }
        }
        Ok(())
    }

    /// Prompts for every field, offering `initial` values as defaults.
    /// `None` when input ends mid-form.
    async fn fill_form(&mut self, initial: BookForm) -> Result<Option<BookForm>, ClientError> {
        let Some(title) = self.ask("Title", &initial.title).await? else {
            return Ok(None);
        };
        let Some(author) = self.ask("Author", &initial.author).await? else {
            return Ok(None);
        };
        let Some(price) = self.ask("Price", &initial.price).await? else {
            return Ok(None);
        };
        let current_image = initial
            .image
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default();
        let Some(image) = self.ask("Image path (optional)", &current_image).await? else {
            return Ok(None);
        };

        Ok(Some(BookForm {
            title,
            author,
            price,
            image: (!image.is_empty()).then(|| PathBuf::from(image)),
        }))
    }

    async fn ask(&mut self, label: &str, current: &str) -> Result<Option<String>, ClientError> {
        if current.is_empty() {
            write!(self.out, "{}: ", label)?;
        } else {
            write!(self.out, "{} [{}]: ", label, current)?;
        }
        self.out.flush()?;

        let Some(line) = self.input.next_line().await? else {
            return Ok(None);
        };
        let answer = line.trim();
        if answer.is_empty() {
            Ok(Some(current.to_string()))
        } else {
            Ok(Some(answer.to_string()))
        }
    }
}

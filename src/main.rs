use iced::widget::{column, container, image, scrollable, text, Column};
use iced::{Element, Length, Task, Theme};
use iced_aw::Wrap;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use std::collections::HashMap;

// Declare the application modules
mod api;
mod config;
mod media;
mod state;
mod ui;

use api::BookApi;
use config::AppConfig;
use state::data::{Book, Rating};
use state::draft::{BookDraft, CoverSource};
use state::filter::{displayed_books, RatingFilter, ViewFilter};
use ui::CoverState;

/// Id of the main scrollable, so editing a card can jump back to the form
const SCROLL_ID: &str = "book-shelf-scroll";

/// Main application state
struct BookShelf {
    /// Endpoints the app talks to
    config: AppConfig,
    /// HTTP client for the catalog API
    api: BookApi,
    /// Canonical list from the last successful load
    books: Vec<Book>,
    /// Record currently being edited, if any
    book_to_edit: Option<Book>,
    /// Form draft backing the controlled inputs
    draft: BookDraft,
    /// True while the initial load or a reload is in flight
    is_loading: bool,
    /// Persistent load-failure banner; suppresses the grid until the next
    /// successful load
    error: Option<String>,
    /// Active search text and rating filter
    filter: ViewFilter,
    /// Fetched cover images keyed by resolved URL
    covers: HashMap<String, CoverState>,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Catalog load finished
    BooksLoaded(Result<Vec<Book>, String>),
    /// A cover image fetch finished
    CoverFetched(String, Result<Vec<u8>, String>),
    /// Form field edits
    NameChanged(String),
    AuthorChanged(String),
    RatingChanged(Rating),
    /// User clicked the cover picker button
    PickCover,
    /// User submitted the form
    Submit,
    /// Create or update finished
    Saved(Result<Book, String>),
    /// User clicked Edit on a card
    Edit(Book),
    /// User clicked Cancel on the form
    CancelEdit,
    /// User clicked Delete on a card
    Delete(i64),
    /// Delete finished
    Deleted(Result<(), String>),
    /// Search text changed
    SearchChanged(String),
    /// Rating filter changed
    FilterChanged(RatingFilter),
}

impl BookShelf {
    /// Create a new instance of the application and start the first load
    fn new() -> (Self, Task<Message>) {
        let config = AppConfig::load();
        let api = BookApi::new(config.api_url.clone());

        tracing::info!(api = %config.api_url, "book shelf starting");

        let shelf = BookShelf {
            config,
            api: api.clone(),
            books: Vec::new(),
            book_to_edit: None,
            draft: BookDraft::default(),
            is_loading: true,
            error: None,
            filter: ViewFilter::default(),
            covers: HashMap::new(),
            status: String::from("Loading your books..."),
        };

        (shelf, load_books(api))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BooksLoaded(Ok(books)) => {
                tracing::info!("loaded {} books", books.len());
                self.books = books;
                self.error = None;
                self.is_loading = false;
                self.fetch_missing_covers()
            }
            Message::BooksLoaded(Err(e)) => {
                tracing::error!("failed to load books: {}", e);
                self.error = Some(String::from("Failed to load books"));
                self.is_loading = false;
                Task::none()
            }
            Message::CoverFetched(url, result) => {
                let cover = match result {
                    Ok(bytes) => CoverState::Loaded(image::Handle::from_bytes(bytes)),
                    Err(e) => {
                        tracing::warn!("cover fetch failed: {}", e);
                        CoverState::Failed
                    }
                };
                self.covers.insert(url, cover);
                Task::none()
            }
            Message::NameChanged(name) => {
                self.draft.name = name;
                Task::none()
            }
            Message::AuthorChanged(author) => {
                self.draft.author = author;
                Task::none()
            }
            Message::RatingChanged(rating) => {
                self.draft.rating = rating;
                Task::none()
            }
            Message::PickCover => {
                // Native picker, same flow as any other desktop app
                let file = FileDialog::new()
                    .set_title("Select a Cover Image")
                    .add_filter("Images", &["png", "jpg", "jpeg", "gif", "webp"])
                    .pick_file();

                if let Some(path) = file {
                    self.draft.cover = CoverSource::File(path);
                }
                Task::none()
            }
            Message::Submit => {
                let draft = self.draft.clone();
                // The form clears right away, before the save resolves
                self.draft.reset();

                let api = self.api.clone();
                match &self.book_to_edit {
                    Some(book) => {
                        let id = book.id;
                        Task::perform(
                            async move { api.update(id, &draft).await.map_err(|e| e.to_string()) },
                            Message::Saved,
                        )
                    }
                    None => Task::perform(
                        async move { api.create(&draft).await.map_err(|e| e.to_string()) },
                        Message::Saved,
                    ),
                }
            }
            Message::Saved(Ok(book)) => {
                if self.book_to_edit.take().is_some() {
                    self.status = format!("✅ Updated \"{}\".", book.name);
                } else {
                    self.status = format!("✅ Added \"{}\".", book.name);
                }
                self.reload()
            }
            Message::Saved(Err(e)) => {
                tracing::error!("failed to save book: {}", e);
                alert_error("Something went wrong while saving the book.");
                Task::none()
            }
            Message::Edit(book) => {
                self.draft = BookDraft::from_book(&book);
                self.book_to_edit = Some(book);
                // Bring the form back into view
                scrollable::scroll_to(
                    scrollable::Id::new(SCROLL_ID),
                    scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
                )
            }
            Message::CancelEdit => {
                self.book_to_edit = None;
                self.draft.reset();
                Task::none()
            }
            Message::Delete(id) => {
                let confirmed = MessageDialog::new()
                    .set_level(MessageLevel::Warning)
                    .set_title("Delete Book")
                    .set_description("Are you sure you want to delete this book?")
                    .set_buttons(MessageButtons::YesNo)
                    .show();

                if confirmed != MessageDialogResult::Yes {
                    return Task::none();
                }

                let api = self.api.clone();
                Task::perform(
                    async move { api.delete(id).await.map_err(|e| e.to_string()) },
                    Message::Deleted,
                )
            }
            Message::Deleted(Ok(())) => {
                self.status = String::from("✅ Book deleted.");
                self.reload()
            }
            Message::Deleted(Err(e)) => {
                tracing::error!("failed to delete book: {}", e);
                alert_error("Something went wrong while deleting the book.");
                Task::none()
            }
            Message::SearchChanged(search) => {
                self.filter.search = search;
                Task::none()
            }
            Message::FilterChanged(rating) => {
                self.filter.rating = rating;
                Task::none()
            }
        }
    }

    /// Start a full reload of the catalog
    fn reload(&mut self) -> Task<Message> {
        self.is_loading = true;
        load_books(self.api.clone())
    }

    /// Queue fetches for covers we have not seen yet
    ///
    /// Keyed by resolved URL, so books sharing a cover share one fetch and
    /// a changed cover is picked up after the next reload.
    fn fetch_missing_covers(&mut self) -> Task<Message> {
        let mut tasks = Vec::new();

        for book in &self.books {
            let Some(cover) = &book.cover else { continue };
            let url = media::resolve_cover_url(&self.config.media_url, cover);
            if self.covers.contains_key(&url) {
                continue;
            }

            self.covers.insert(url.clone(), CoverState::Loading);
            tasks.push(Task::perform(media::fetch_cover(url.clone()), move |result| {
                Message::CoverFetched(url.clone(), result)
            }));
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            text("📚 Book Shelf").size(42),
            text("Keep track of the books on your shelf.").size(16),
            ui::form::view(
                &self.draft,
                self.book_to_edit.is_some(),
                &self.covers,
                &self.config.media_url,
            ),
            ui::filter::search_box(&self.filter.search),
            ui::filter::rating_selector(self.filter.rating),
        ]
        .spacing(20)
        .max_width(900);

        if self.is_loading {
            content = content.push(text("⏳ Loading books...").size(18));
        }

        if let Some(error) = &self.error {
            content = content.push(text(format!("⚠️  {}", error)).size(16));
        }

        // The grid only renders once a load succeeded
        if !self.is_loading && self.error.is_none() {
            content = content.push(self.book_grid());
        }

        content = content.push(text(&self.status).size(14));

        scrollable(
            container(content)
                .width(Length::Fill)
                .padding(40)
                .center_x(Length::Fill),
        )
        .id(scrollable::Id::new(SCROLL_ID))
        .height(Length::Fill)
        .into()
    }

    /// The searchable, filterable card grid
    fn book_grid(&self) -> Element<Message> {
        if self.books.is_empty() {
            return text("📭 No books yet. Add your first one above!")
                .size(18)
                .into();
        }

        let displayed = displayed_books(&self.books, &self.filter);
        if displayed.is_empty() {
            return text("🔍 No books match your search or filter.")
                .size(18)
                .into();
        }

        let count = displayed.len();
        let mut cards = Vec::new();
        for book in displayed {
            let url = book
                .cover
                .as_ref()
                .map(|c| media::resolve_cover_url(&self.config.media_url, c));
            let cover = url.as_ref().and_then(|u| self.covers.get(u));
            cards.push(ui::card::view(book, cover));
        }

        column![
            text(format!("Books ({})", count)).size(24),
            Wrap::with_elements(cards).spacing(15.0).line_spacing(15.0),
        ]
        .spacing(15)
        .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Light
    }
}

/// Kick off a full catalog load
fn load_books(api: BookApi) -> Task<Message> {
    Task::perform(
        async move { api.list_all().await.map_err(|e| e.to_string()) },
        Message::BooksLoaded,
    )
}

/// Blocking failure acknowledgment, the desktop equivalent of an alert
fn alert_error(description: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("Book Shelf")
        .set_description(description)
        .show();
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    iced::application("Book Shelf", BookShelf::update, BookShelf::view)
        .theme(BookShelf::theme)
        .centered()
        .run_with(BookShelf::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book(id: i64, name: &str, author: &str, rating: Rating) -> Book {
        Book {
            id,
            name: name.to_string(),
            author: author.to_string(),
            rating,
            cover: None,
            uploaded: "2024-03-05T10:30:00Z".to_string(),
        }
    }

    fn shelf() -> BookShelf {
        let config = AppConfig::default();
        let api = BookApi::new(config.api_url.clone());
        BookShelf {
            config,
            api,
            books: Vec::new(),
            book_to_edit: None,
            draft: BookDraft::default(),
            is_loading: true,
            error: None,
            filter: ViewFilter::default(),
            covers: HashMap::new(),
            status: String::new(),
        }
    }

    #[test]
    fn test_load_success_replaces_list_and_clears_error() {
        let mut app = shelf();
        app.error = Some("Failed to load books".to_string());

        let _ = app.update(Message::BooksLoaded(Ok(vec![sample_book(
            1,
            "Dune",
            "Frank Herbert",
            Rating::Excellent,
        )])));

        assert_eq!(app.books.len(), 1);
        assert!(app.error.is_none());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_load_failure_keeps_previous_list_and_sets_banner() {
        let mut app = shelf();
        app.books = vec![sample_book(1, "Dune", "Frank Herbert", Rating::Excellent)];
        app.is_loading = true;

        let _ = app.update(Message::BooksLoaded(Err("boom".to_string())));

        assert_eq!(app.books.len(), 1);
        assert!(app.error.is_some());
        assert!(!app.is_loading);
    }

    #[test]
    fn test_load_success_queues_fetches_for_new_covers_only() {
        let mut app = shelf();
        let mut with_cover = sample_book(1, "Dune", "Frank Herbert", Rating::Excellent);
        with_cover.cover = Some("covers/dune.jpg".to_string());

        let _ = app.update(Message::BooksLoaded(Ok(vec![
            with_cover,
            sample_book(2, "Emma", "Jane Austen", Rating::Average),
        ])));

        let url = "http://localhost:8000/media/covers/dune.jpg";
        assert!(matches!(app.covers.get(url), Some(CoverState::Loading)));
        assert_eq!(app.covers.len(), 1);
    }

    #[test]
    fn test_cover_fetch_failure_marks_placeholder() {
        let mut app = shelf();
        let url = "http://localhost:8000/media/covers/dune.jpg".to_string();
        app.covers.insert(url.clone(), CoverState::Loading);

        let _ = app.update(Message::CoverFetched(url.clone(), Err("404".to_string())));

        assert!(matches!(app.covers.get(&url), Some(CoverState::Failed)));
    }

    #[test]
    fn test_edit_populates_draft_and_cursor() {
        let mut app = shelf();
        let mut book = sample_book(7, "Dune", "Frank Herbert", Rating::Excellent);
        book.cover = Some("covers/dune.jpg".to_string());

        let _ = app.update(Message::Edit(book.clone()));

        assert_eq!(app.book_to_edit, Some(book));
        assert_eq!(app.draft.name, "Dune");
        assert_eq!(app.draft.author, "Frank Herbert");
        assert_eq!(
            app.draft.cover,
            CoverSource::Existing("covers/dune.jpg".to_string())
        );
    }

    #[test]
    fn test_cancel_clears_cursor_and_resets_draft() {
        let mut app = shelf();
        let book = sample_book(7, "Dune", "Frank Herbert", Rating::Excellent);
        let _ = app.update(Message::Edit(book));

        let _ = app.update(Message::CancelEdit);

        assert!(app.book_to_edit.is_none());
        assert_eq!(app.draft, BookDraft::default());
    }

    #[test]
    fn test_submit_clears_the_draft_before_the_save_resolves() {
        let mut app = shelf();
        app.draft.name = "Dune".to_string();
        app.draft.author = "Frank Herbert".to_string();

        let _ = app.update(Message::Submit);

        // Deliberate fire-and-forget reset, not tied to the outcome
        assert_eq!(app.draft, BookDraft::default());
    }

    #[test]
    fn test_save_success_in_edit_mode_returns_form_to_create_mode() {
        let mut app = shelf();
        app.is_loading = false;
        app.book_to_edit = Some(sample_book(7, "Dune", "Frank Herbert", Rating::Excellent));

        let _ = app.update(Message::Saved(Ok(sample_book(
            7,
            "Dune Messiah",
            "Frank Herbert",
            Rating::Average,
        ))));

        assert!(app.book_to_edit.is_none());
        // Success reloads the whole list rather than patching locally
        assert!(app.is_loading);
        assert!(app.status.contains("Updated"));
    }

    #[test]
    fn test_delete_success_reloads() {
        let mut app = shelf();
        app.is_loading = false;
        app.books = vec![sample_book(3, "Emma", "Jane Austen", Rating::Average)];

        let _ = app.update(Message::Deleted(Ok(())));

        // The stale entry stays visible until the reload resolves
        assert_eq!(app.books.len(), 1);
        assert!(app.is_loading);
    }

    #[test]
    fn test_search_and_filter_updates() {
        let mut app = shelf();

        let _ = app.update(Message::SearchChanged("dune".to_string()));
        let _ = app.update(Message::FilterChanged(RatingFilter::Only(Rating::Bad)));

        assert_eq!(app.filter.search, "dune");
        assert_eq!(app.filter.rating, RatingFilter::Only(Rating::Bad));
    }
}

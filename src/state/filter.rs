/// Client-side filtering of the loaded catalog
///
/// The displayed list is always derived fresh from the canonical list;
/// nothing here mutates the records themselves.

use super::data::{Book, Rating};

/// Rating filter choices offered above the book grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    Only(Rating),
}

impl RatingFilter {
    /// Every selectable filter, in the order the selector lists them
    pub const ALL: [RatingFilter; 4] = [
        RatingFilter::All,
        RatingFilter::Only(Rating::Excellent),
        RatingFilter::Only(Rating::Average),
        RatingFilter::Only(Rating::Bad),
    ];

    fn matches(&self, book: &Book) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Only(rating) => book.rating == *rating,
        }
    }
}

impl std::fmt::Display for RatingFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RatingFilter::All => write!(f, "All"),
            RatingFilter::Only(rating) => write!(f, "{}", rating),
        }
    }
}

/// Transient view criteria; never persisted or sent to the server
#[derive(Debug, Clone, Default)]
pub struct ViewFilter {
    pub rating: RatingFilter,
    pub search: String,
}

impl ViewFilter {
    /// True when a book passes both the rating gate and the search text
    ///
    /// The search is a case-insensitive substring match against name or
    /// author; a record missing either field simply does not match.
    pub fn matches(&self, book: &Book) -> bool {
        self.rating.matches(book) && self.matches_search(book)
    }

    fn matches_search(&self, book: &Book) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        book.name.to_lowercase().contains(&needle)
            || book.author.to_lowercase().contains(&needle)
    }
}

/// Derive the displayed subset of the canonical list
pub fn displayed_books<'a>(books: &'a [Book], filter: &ViewFilter) -> Vec<&'a Book> {
    books.iter().filter(|book| filter.matches(book)).collect()
}

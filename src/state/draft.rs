/// Staging structures for the record form
///
/// A draft mirrors a Book minus the server-assigned fields. It is the
/// only place in the application where a cover can be a locally picked
/// file that has not been uploaded yet.

use std::path::PathBuf;

use super::data::{Book, Rating};

/// Where the draft's cover comes from
///
/// Exactly one variant holds at a time. Only `File` is ever transmitted
/// on submit; an `Existing` reference is displayed but never re-uploaded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CoverSource {
    /// No cover attached
    #[default]
    None,
    /// Cover already stored on the server (URL or relative media path)
    Existing(String),
    /// Newly picked local file awaiting upload
    File(PathBuf),
}

/// Mutable staging copy of a record being composed or edited
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BookDraft {
    pub name: String,
    pub author: String,
    pub rating: Rating,
    pub cover: CoverSource,
}

impl BookDraft {
    /// Resynchronize the draft from a record entering edit mode
    ///
    /// Any previously picked file is dropped; the record's stored cover
    /// becomes an `Existing` reference.
    pub fn from_book(book: &Book) -> Self {
        BookDraft {
            name: book.name.clone(),
            author: book.author.clone(),
            rating: book.rating,
            cover: match &book.cover {
                Some(reference) => CoverSource::Existing(reference.clone()),
                None => CoverSource::None,
            },
        }
    }

    /// Reset all fields back to the empty defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True once the required fields are filled in
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.author.is_empty()
    }
}

/// Shared data structures for the application state
///
/// These structs mirror the records served by the catalog API and flow
/// between the HTTP layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single book record in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned database ID
    pub id: i64,
    /// Book title
    #[serde(default)]
    pub name: String,
    /// Author name
    #[serde(default)]
    pub author: String,
    /// Three-way quality rating
    #[serde(default)]
    pub rating: Rating,
    /// Cover image reference, often a path relative to the media host
    #[serde(default)]
    pub cover: Option<String>,
    /// Server-assigned upload timestamp (ISO 8601)
    #[serde(default)]
    pub uploaded: String,
}

/// Book rating as stored by the server
///
/// Unknown wire values fall back to `Average`, the same middle value the
/// cards display when a rating is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Excellent,
    Bad,
    #[default]
    #[serde(other)]
    Average,
}

impl Rating {
    /// Wire value sent in form submissions
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Excellent => "excellent",
            Rating::Average => "average",
            Rating::Bad => "bad",
        }
    }

    /// Star label shown on cards
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Excellent => "⭐⭐⭐ Excellent",
            Rating::Average => "⭐⭐ Average",
            Rating::Bad => "⭐ Bad",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rating::Excellent => "Excellent",
            Rating::Average => "Average",
            Rating::Bad => "Bad",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "Dune",
            "author": "Frank Herbert",
            "rating": "excellent",
            "cover": "/media/covers/dune.jpg",
            "uploaded": "2024-03-05T10:30:00Z"
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, 3);
        assert_eq!(book.name, "Dune");
        assert_eq!(book.rating, Rating::Excellent);
        assert_eq!(book.cover.as_deref(), Some("/media/covers/dune.jpg"));
    }

    #[test]
    fn test_missing_fields_default() {
        // A record with only an id must not break the whole list
        let book: Book = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(book.name, "");
        assert_eq!(book.author, "");
        assert_eq!(book.rating, Rating::Average);
        assert!(book.cover.is_none());
        assert_eq!(book.uploaded, "");
    }

    #[test]
    fn test_unknown_rating_falls_back_to_average() {
        let book: Book = serde_json::from_str(r#"{"id": 1, "rating": "stellar"}"#).unwrap();
        assert_eq!(book.rating, Rating::Average);
    }

    #[test]
    fn test_rating_round_trip() {
        let json = serde_json::to_string(&Rating::Bad).unwrap();
        assert_eq!(json, "\"bad\"");
        let back: Rating = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Rating::Bad);
    }
}

/// One book card in the catalog grid
///
/// Pure rendering: the card maps the record to widgets and emits edit and
/// delete intents upward. It never talks to the API itself.

use chrono::{DateTime, NaiveDate};
use iced::widget::{button, column, container, image, row, text};
use iced::{ContentFit, Element, Length};

use crate::state::data::Book;
use crate::ui::CoverState;
use crate::Message;

/// Fixed card width so the grid wraps evenly
const CARD_WIDTH: f32 = 260.0;
/// Height of the cover area at the top of each card
const COVER_HEIGHT: f32 = 190.0;

/// Build one book card
pub fn view<'a>(book: &'a Book, cover: Option<&'a CoverState>) -> Element<'a, Message> {
    let content = column![
        cover_view(cover),
        text(format!("📚 {}", book.name)).size(18),
        text(format!("Author: {}", book.author)).size(14),
        text(format!("Rating: {}", book.rating.label())).size(14),
        text(format!("Added: {}", format_uploaded(&book.uploaded))).size(12),
        row![
            button("✏️ Edit")
                .on_press(Message::Edit(book.clone()))
                .padding(6),
            button("🗑️ Delete")
                .on_press(Message::Delete(book.id))
                .padding(6),
        ]
        .spacing(8),
    ]
    .spacing(6);

    container(content)
        .padding(14)
        .width(Length::Fixed(CARD_WIDTH))
        .into()
}

/// The cover area; a placeholder stands in when the image is absent,
/// still loading, or failed to fetch
fn cover_view<'a>(cover: Option<&'a CoverState>) -> Element<'a, Message> {
    match cover {
        Some(CoverState::Loaded(handle)) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(COVER_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(CoverState::Loading) => placeholder("⏳"),
        Some(CoverState::Failed) => placeholder("📷 Cover not available"),
        None => placeholder("📚"),
    }
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(22))
        .width(Length::Fill)
        .height(Length::Fixed(COVER_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

/// Format the server timestamp as a readable date
///
/// The API sends ISO 8601; anything unparseable is shown as-is.
fn format_uploaded(uploaded: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(uploaded) {
        return date.format("%B %-d, %Y").to_string();
    }

    // Date-only values, as a plain DateField would serialize
    let prefix = uploaded.get(..10).unwrap_or(uploaded);
    if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
        return date.format("%B %-d, %Y").to_string();
    }

    uploaded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_full_timestamp() {
        assert_eq!(format_uploaded("2024-03-05T10:30:00Z"), "March 5, 2024");
    }

    #[test]
    fn test_format_timestamp_with_offset() {
        assert_eq!(
            format_uploaded("2024-12-31T23:59:59+07:00"),
            "December 31, 2024"
        );
    }

    #[test]
    fn test_format_date_only() {
        assert_eq!(format_uploaded("2024-03-05"), "March 5, 2024");
    }

    #[test]
    fn test_unparseable_value_is_shown_as_is() {
        assert_eq!(format_uploaded("yesterday"), "yesterday");
        assert_eq!(format_uploaded(""), "");
    }
}

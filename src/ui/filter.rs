/// Search and filter controls above the grid

use iced::widget::{column, pick_list, text, text_input};
use iced::Element;

use crate::state::filter::RatingFilter;
use crate::Message;

/// Free-text search over name and author
pub fn search_box(search: &str) -> Element<'_, Message> {
    column![
        text("Search Books:"),
        text_input("Search by book name or author", search)
            .on_input(Message::SearchChanged)
            .padding(8),
    ]
    .spacing(8)
    .into()
}

/// Rating filter selector
pub fn rating_selector(selected: RatingFilter) -> Element<'static, Message> {
    column![
        text("Filter by Rating:"),
        pick_list(RatingFilter::ALL, Some(selected), Message::FilterChanged).padding(8),
    ]
    .spacing(8)
    .into()
}

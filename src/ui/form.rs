/// The create/edit record form
///
/// The same form serves both modes; the controller decides which by its
/// edit cursor. All inputs are controlled: they render the draft and emit
/// change messages, nothing is stored here.

use std::collections::HashMap;

use iced::widget::{button, column, container, image, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::state::data::Rating;
use crate::state::draft::{BookDraft, CoverSource};
use crate::ui::CoverState;
use crate::Message;

/// Selectable ratings, in the order the form lists them
const RATINGS: [Rating; 3] = [Rating::Excellent, Rating::Average, Rating::Bad];

/// Width of the cover preview under the picker button
const PREVIEW_WIDTH: f32 = 128.0;

/// Build the record form
pub fn view<'a>(
    draft: &'a BookDraft,
    editing: bool,
    covers: &'a HashMap<String, CoverState>,
    media_url: &str,
) -> Element<'a, Message> {
    let title = if editing { "Edit Book" } else { "Add New Book" };
    let submit_label = if editing { "Update Book" } else { "Add Book" };

    let mut actions = row![
        // Disabled until name and author are filled in
        button(submit_label)
            .on_press_maybe(draft.is_complete().then_some(Message::Submit))
            .padding(10),
    ]
    .spacing(10);

    if editing {
        actions = actions.push(button("Cancel").on_press(Message::CancelEdit).padding(10));
    }

    let controls = column![
        text(title).size(24),
        text("Book Name:"),
        text_input("Book title", &draft.name)
            .on_input(Message::NameChanged)
            .padding(8),
        text("Author:"),
        text_input("Author", &draft.author)
            .on_input(Message::AuthorChanged)
            .padding(8),
        text("Rating:"),
        pick_list(RATINGS, Some(draft.rating), Message::RatingChanged).padding(8),
        text("Cover:"),
        button("Choose Image...").on_press(Message::PickCover).padding(8),
        cover_preview(&draft.cover, covers, media_url),
        actions,
    ]
    .spacing(8);

    container(controls)
        .padding(20)
        .width(Length::Fill)
        .into()
}

/// Preview of the draft's cover
///
/// A newly picked file previews straight from disk; an existing reference
/// previews from the controller's cover cache when it has been fetched.
fn cover_preview<'a>(
    cover: &'a CoverSource,
    covers: &'a HashMap<String, CoverState>,
    media_url: &str,
) -> Element<'a, Message> {
    match cover {
        CoverSource::None => text("No cover selected.").size(13).into(),
        CoverSource::File(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            column![
                text(format!("Selected: {}", name)).size(13),
                image(image::Handle::from_path(path)).width(Length::Fixed(PREVIEW_WIDTH)),
            ]
            .spacing(5)
            .into()
        }
        CoverSource::Existing(reference) => {
            let url = crate::media::resolve_cover_url(media_url, reference);
            match covers.get(&url) {
                Some(CoverState::Loaded(handle)) => column![
                    text("Current cover:").size(13),
                    image(handle.clone()).width(Length::Fixed(PREVIEW_WIDTH)),
                ]
                .spacing(5)
                .into(),
                _ => text("Current cover: 📷 image not available").size(13).into(),
            }
        }
    }
}

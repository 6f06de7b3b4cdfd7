/// View helpers for the application
///
/// This module handles:
/// - The create/edit record form (form.rs)
/// - Book cards shown in the grid (card.rs)
/// - Search and rating filter controls (filter.rs)

pub mod card;
pub mod filter;
pub mod form;

/// How far along fetching one cover image is
#[derive(Debug, Clone)]
pub enum CoverState {
    /// Fetch is in flight
    Loading,
    /// Bytes arrived and can be handed to the image widget
    Loaded(iced::widget::image::Handle),
    /// Fetch failed; the card shows its placeholder instead
    Failed,
}

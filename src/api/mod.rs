/// HTTP client for the remote catalog API
///
/// This module handles:
/// - Listing the full catalog
/// - Creating and updating records (multipart when a new cover is attached)
/// - Deleting records

pub mod client;

pub use client::{ApiError, BookApi};

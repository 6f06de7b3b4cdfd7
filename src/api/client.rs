/// Thin client for the book collection endpoint
///
/// Every operation is a single round trip. There are no retries and no
/// caching: create, update and delete are not idempotent, so a failed
/// call is reported to the caller instead of being re-issued.

use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::state::data::Book;
use crate::state::draft::{BookDraft, CoverSource};

/// Errors surfaced by the catalog API client
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response
    #[error("network error: {0}")]
    Transport(reqwest::Error),
    /// The server answered with a non-success status
    #[error("server error: HTTP {status}")]
    Server { status: StatusCode },
    /// The response body did not match the expected shape
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// A locally picked cover file could not be read
    #[error("could not read cover file: {0}")]
    CoverFile(String),
}

/// Client for one fixed collection endpoint
#[derive(Debug, Clone)]
pub struct BookApi {
    client: reqwest::Client,
    collection_url: String,
}

impl BookApi {
    /// Create a client for the given collection URL (trailing slash included)
    pub fn new(collection_url: String) -> Self {
        BookApi {
            client: reqwest::Client::new(),
            collection_url,
        }
    }

    /// Fetch the full catalog
    pub async fn list_all(&self) -> Result<Vec<Book>, ApiError> {
        let resp = self
            .client
            .get(&self.collection_url)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("list request failed: {}", e);
                ApiError::Transport(e)
            })?;

        let resp = check_status(resp)?;

        resp.json::<Vec<Book>>().await.map_err(|e| {
            tracing::error!("list body did not parse: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Create a record from a draft, returning the server's copy
    pub async fn create(&self, draft: &BookDraft) -> Result<Book, ApiError> {
        let form = draft_form(draft).await?;

        let resp = self
            .client
            .post(&self.collection_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("create request failed: {}", e);
                ApiError::Transport(e)
            })?;

        let resp = check_status(resp)?;

        resp.json::<Book>().await.map_err(|e| {
            tracing::error!("create response did not parse: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Update the record with the given id from a draft
    pub async fn update(&self, id: i64, draft: &BookDraft) -> Result<Book, ApiError> {
        let form = draft_form(draft).await?;

        let resp = self
            .client
            .put(self.record_url(id))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("update request for {} failed: {}", id, e);
                ApiError::Transport(e)
            })?;

        let resp = check_status(resp)?;

        resp.json::<Book>().await.map_err(|e| {
            tracing::error!("update response did not parse: {}", e);
            ApiError::Decode(e.to_string())
        })
    }

    /// Delete the record with the given id
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let resp = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| {
                tracing::error!("delete request for {} failed: {}", id, e);
                ApiError::Transport(e)
            })?;

        check_status(resp)?;
        Ok(())
    }

    fn record_url(&self, id: i64) -> String {
        format!("{}{}/", self.collection_url, id)
    }
}

/// Map non-success statuses into the error taxonomy
fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::error!(url = %resp.url(), "server returned {}", status);
        Err(ApiError::Server { status })
    }
}

/// Build the multipart form for a draft
///
/// The cover part is attached only for a newly picked file; an existing
/// server reference is never re-uploaded.
async fn draft_form(draft: &BookDraft) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("name", draft.name.clone())
        .text("author", draft.author.clone())
        .text("rating", draft.rating.as_str());

    if let CoverSource::File(path) = &draft.cover {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::CoverFile(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "cover".to_string());
        form = form.part("cover", Part::bytes(bytes).file_name(file_name));
    }

    Ok(form)
}

//! Backend Api
//!
//! The sync gateway: one REST call per confirmed intent, organized by
//! domain. Server responses are authoritative; callers only mutate local
//! state from what comes back here, never from their optimistic guess.

mod cards;
mod worklogs;

pub use cards::{CreateCardArgs, UpdateCardArgs};
pub use worklogs::WorklogArgs;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::session::Session;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No usable credential; the call never left the client
    #[error("not signed in")]
    Unauthorized,
    /// The call never reached the server
    #[error("backend unreachable: {0}")]
    Unreachable(String),
    /// Non-success status from the server
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// 2xx but the body did not parse as the expected shape
    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Backend client: base URL plus nothing else. Credentials come in per
/// call through `&Session`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Attach the bearer credential, short-circuiting before any network
/// activity when there is none.
pub(crate) fn authorized(req: RequestBuilder, session: &Session) -> ApiResult<RequestBuilder> {
    if session.token().is_empty() {
        return Err(ApiError::Unauthorized);
    }
    Ok(req.header("Authorization", &session.bearer()))
}

pub(crate) fn unreachable(err: gloo_net::Error) -> ApiError {
    ApiError::Unreachable(err.to_string())
}

/// Map a non-success status to `Rejected`, carrying whatever the server
/// said in the body.
pub(crate) async fn fail_on_status(resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        Err(ApiError::Rejected { status, message })
    }
}

pub(crate) async fn decode_json<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

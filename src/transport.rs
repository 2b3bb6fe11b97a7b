//! HTTP seam between the API client and whatever actually moves bytes.
//!
//! The browser build implements [`Transport`] over `fetch`, the CLI over
//! `reqwest`, and tests over [`mock::MockTransport`]. Futures are `?Send`
//! because browser futures are pinned to the single UI thread.

pub mod mock;

use async_trait::async_trait;
use serde_json::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully resolved outgoing request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// Bearer credential to send as `Authorization`, if any.
    pub bearer: Option<String>,
    /// JSON body for `POST` requests.
    pub body: Option<Value>,
}

/// Status and raw body of a completed exchange. Any status counts as
/// completed; only failures to get a response at all are [`TransportError`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// No transport exists in this build (e.g. server-side render).
    #[error("transport unavailable: {0}")]
    Unavailable(&'static str),
    /// The request never reached the server or the response never arrived.
    #[error("{0}")]
    Network(String),
}

#[async_trait(?Send)]
pub trait Transport {
    /// Perform one HTTP exchange.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when no response was received.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

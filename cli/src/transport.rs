//! `reqwest`-backed transport for the terminal client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use supply_dash::transport::{HttpRequest, HttpResponse, Method, Transport, TransportError};

pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialized.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

fn network(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Network("request timed out".to_owned())
    } else {
        TransportError::Network(err.to_string())
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        }
        .header(ACCEPT, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(network)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(network)?;
        tracing::debug!(method = request.method.as_str(), url = %request.url, status, "response received");
        Ok(HttpResponse::new(status, body))
    }
}

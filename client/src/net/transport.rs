//! `fetch`-backed [`Transport`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every request fails with `TransportError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Only "no response" is an error here. Non-2xx statuses are returned as
//! ordinary responses so the API client can read their bodies.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

use async_trait::async_trait;
use supply_dash::transport::{HttpRequest, HttpResponse, Transport, TransportError};

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;
            use supply_dash::transport::Method;

            let network = |e: gloo_net::Error| TransportError::Network(e.to_string());

            let mut builder = match request.method {
                Method::Get => Request::get(&request.url),
                Method::Post => Request::post(&request.url),
            }
            .header("Accept", "application/json");
            if let Some(token) = &request.bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = match &request.body {
                Some(body) => builder.json(body).map_err(network)?.send().await,
                None => builder.send().await,
            }
            .map_err(network)?;

            let status = resp.status();
            let body = resp.text().await.map_err(network)?;
            Ok(HttpResponse::new(status, body))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(TransportError::Unavailable("browser fetch requires the csr feature"))
        }
    }
}

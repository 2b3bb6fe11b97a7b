//! Scripted in-memory transport for exercising the client without a backend.

use std::sync::Mutex;
use std::sync::PoisonError;

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse, Method, Transport, TransportError};

struct Route {
    method: Method,
    path: String,
    reply: Result<HttpResponse, TransportError>,
}

/// Replies to requests by matching method and URL path suffix, recording
/// every request it sees. Unmatched requests get a 404.
#[derive(Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reply to `method path` with `status` and a JSON body.
    #[must_use]
    pub fn respond(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        self.push(method, path, Ok(HttpResponse::new(status, body.to_string())))
    }

    /// Reply to `method path` with `status` and a raw (possibly non-JSON) body.
    #[must_use]
    pub fn respond_raw(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.push(method, path, Ok(HttpResponse::new(status, body)))
    }

    /// Fail `method path` at the network level.
    #[must_use]
    pub fn fail(self, method: Method, path: &str, message: &str) -> Self {
        self.push(method, path, Err(TransportError::Network(message.to_owned())))
    }

    fn push(self, method: Method, path: &str, reply: Result<HttpResponse, TransportError>) -> Self {
        self.routes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Route { method, path: path.to_owned(), reply });
        self
    }

    /// Every request received so far, in arrival order.
    #[must_use]
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let reply = {
            let routes = self.routes.lock().unwrap_or_else(PoisonError::into_inner);
            routes
                .iter()
                .find(|route| route.method == request.method && request.url.ends_with(&route.path))
                .map(|route| route.reply.clone())
        };
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        reply.unwrap_or_else(|| Ok(HttpResponse::new(404, r#"{"detail":"Not Found"}"#)))
    }
}

//! Typed request execution against the backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; nothing panics on bad input from
//! the network. A 401 on a request that carried the session token clears the
//! session before the error is returned, so "unauthorized ⇒ signed out" holds
//! no matter which panel made the call.

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::endpoints;
use super::messages::extract_error_messages;
use super::types::{
    Delay, Envelope, Eta, ForecastStatus, LoginRequest, ModelInfo, Order, Overview, PerformanceData, Profile,
    RegisterRequest, extract_token,
};
use crate::config::ApiConfig;
use crate::error::{ApiError, GENERIC_FAILURE};
use crate::session::{Session, SessionStore};
use crate::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Auth {
    /// Send the session token when one is held.
    Bearer,
    /// Never send the token (login and registration).
    Anonymous,
}

/// API client bound to one backend, one session, and one transport.
pub struct ApiClient<T> {
    config: ApiConfig,
    session: Arc<SessionStore>,
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(config: ApiConfig, session: Arc<SessionStore>, transport: T) -> Self {
        Self { config, session, transport }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    // =========================================================================
    // AUTH
    // =========================================================================

    /// Exchange credentials for a session token and store it.
    ///
    /// # Errors
    ///
    /// `Unauthorized`/`Application` for rejected credentials, `Transport` when
    /// the backend is unreachable, `Decode` when a 2xx body has no token.
    pub async fn login(&self, request: &LoginRequest) -> Result<Session, ApiError> {
        let response = self.execute(Method::Post, endpoints::LOGIN, Some(to_json(request)?), Auth::Anonymous).await?;
        let body: Value = decode_body(&response)?;
        let token = extract_token(&body).ok_or_else(|| ApiError::Decode("login response carried no token".to_owned()))?;
        self.session
            .set(&token)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Create an account. Returns the session when the backend issued a token
    /// with the registration, `None` when the user still has to log in.
    ///
    /// # Errors
    ///
    /// `Application` with one message per rejected field, or `Transport`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<Option<Session>, ApiError> {
        let response = self
            .execute(Method::Post, endpoints::REGISTER, Some(to_json(request)?), Auth::Anonymous)
            .await?;
        let Some(token) = serde_json::from_str::<Value>(&response.body)
            .ok()
            .as_ref()
            .and_then(extract_token)
        else {
            return Ok(None);
        };
        self.session
            .set(&token)
            .map(Some)
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Forget the session. The backend keeps no server-side session state.
    pub fn logout(&self) {
        self.session.clear();
    }

    /// # Errors
    ///
    /// See [`ApiError`]; `Unauthorized` also clears the session.
    pub async fn profile(&self) -> Result<Option<Profile>, ApiError> {
        self.get_data(endpoints::PROFILE).await
    }

    // =========================================================================
    // FORECASTING
    // =========================================================================

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn demand_forecast(&self) -> Result<Option<ForecastStatus>, ApiError> {
        self.get_data(endpoints::DEMAND_FORECAST).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn forecast_trends(&self) -> Result<Option<ForecastStatus>, ApiError> {
        self.get_data(endpoints::FORECAST_TRENDS).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn model_status(&self) -> Result<Option<ForecastStatus>, ApiError> {
        self.get_data(endpoints::MODEL_STATUS).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn model_info(&self) -> Result<Option<ModelInfo>, ApiError> {
        self.get_data(endpoints::MODEL_INFO).await
    }

    /// Load demand, trends and model status together.
    ///
    /// The three requests run concurrently; the result is an error as soon as
    /// any one of them failed, and only after all of them have settled.
    ///
    /// # Errors
    ///
    /// The first failure in demand, trends, model-status order.
    pub async fn overview(&self) -> Result<Overview, ApiError> {
        let (demand, trends, model_status) =
            futures::join!(self.demand_forecast(), self.forecast_trends(), self.model_status());
        Ok(Overview { demand: demand?, trends: trends?, model_status: model_status? })
    }

    /// # Errors
    ///
    /// `Validation` for an empty, `.` or `..` id, without a request. Otherwise
    /// see [`ApiError`].
    pub async fn model_performance(&self, model_id: &str) -> Result<Option<PerformanceData>, ApiError> {
        self.get_data(&endpoints::model_performance(model_id)?).await
    }

    // =========================================================================
    // TRACKING
    // =========================================================================

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn orders(&self) -> Result<Vec<Order>, ApiError> {
        Ok(self.get_data(endpoints::TRACKING_ORDERS).await?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// Same as [`ApiClient::model_performance`].
    pub async fn order(&self, order_id: &str) -> Result<Option<Order>, ApiError> {
        self.get_data(&endpoints::tracking_order(order_id)?).await
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn delays(&self) -> Result<Vec<Delay>, ApiError> {
        Ok(self.get_data(endpoints::TRACKING_DELAYS).await?.unwrap_or_default())
    }

    /// # Errors
    ///
    /// See [`ApiError`].
    pub async fn eta(&self) -> Result<Option<Eta>, ApiError> {
        self.get_data(endpoints::TRACKING_ETA).await
    }

    // =========================================================================
    // PLUMBING
    // =========================================================================

    async fn get_data<D: DeserializeOwned>(&self, segments: &[&str]) -> Result<Option<D>, ApiError> {
        let response = self.execute(Method::Get, segments, None, Auth::Bearer).await?;
        let envelope: Envelope = decode_body(&response)?;
        envelope.into_data().map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn execute(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<Value>,
        auth: Auth,
    ) -> Result<HttpResponse, ApiError> {
        let bearer = match auth {
            Auth::Bearer => self.session.get().map(|session| session.token().to_owned()),
            Auth::Anonymous => None,
        };
        let sent_credentials = bearer.is_some();
        let request = HttpRequest { method, url: self.config.url_for(segments), bearer, body };
        let url = request.url.clone();

        let response = self.transport.send(request).await.map_err(|err| {
            tracing::warn!(method = method.as_str(), %url, error = %err, "request failed to complete");
            ApiError::from(err)
        })?;

        if response.is_success() {
            return Ok(response);
        }

        let messages = extract_error_messages(&response.body);
        tracing::debug!(method = method.as_str(), %url, status = response.status, "request rejected");
        if response.status == 401 {
            if sent_credentials {
                tracing::warn!(%url, "session rejected by backend; clearing");
                self.session.clear();
            }
            let message = messages.into_iter().next().unwrap_or_else(|| "Not authorized".to_owned());
            return Err(ApiError::Unauthorized { message });
        }
        let messages = if messages.is_empty() { vec![GENERIC_FAILURE.to_owned()] } else { messages };
        Err(ApiError::Application { status: response.status, messages })
    }
}

fn to_json<S: Serialize>(value: &S) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|err| ApiError::Decode(err.to_string()))
}

fn decode_body<D: DeserializeOwned>(response: &HttpResponse) -> Result<D, ApiError> {
    serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))
}

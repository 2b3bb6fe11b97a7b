//! Wire schema for backend requests and responses.
//!
//! Most read endpoints wrap their payload in an [`Envelope`]. Payload structs
//! keep unknown fields in `extra` so panels can show whatever the backend
//! adds without a schema bump.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::resource::IsEmpty;

// =============================================================================
// ENVELOPE
// =============================================================================

/// The `{message, status, data, errors}` wrapper around read payloads.
///
/// Only `message` and `data` are read. `data` stays raw until
/// [`Envelope::into_data`] decodes it into the endpoint's payload type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

impl Envelope {
    /// Decode `data` into `T`.
    ///
    /// An absent, `null` or scalar `data` is `Ok(None)`: the request
    /// succeeded but produced no result.
    ///
    /// # Errors
    ///
    /// An object or array `data` that does not match `T`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<Option<T>, serde_json::Error> {
        match self.data {
            Some(value @ (Value::Object(_) | Value::Array(_))) => serde_json::from_value(value).map(Some),
            _ => {
                tracing::debug!(backend_message = ?self.message, "envelope carried no data");
                Ok(None)
            }
        }
    }
}

// =============================================================================
// AUTH
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

/// Pull a session token out of an auth response body.
///
/// Accepts `{token}`, `{access_token}` and the register envelope's
/// `{data: {jwt_token | token}}`.
#[must_use]
pub fn extract_token(body: &Value) -> Option<String> {
    let direct = ["token", "access_token"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str));
    let nested = || {
        let data = body.get("data")?;
        ["jwt_token", "token"]
            .iter()
            .find_map(|key| data.get(*key).and_then(Value::as_str))
    };
    direct
        .or_else(nested)
        .filter(|token| !token.trim().is_empty())
        .map(str::to_owned)
}

/// The signed-in user as returned by `/auth/profile`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub userid: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    pub email: String,
}

impl Profile {
    /// Full name, or the email when no name is on file.
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.firstname.trim(), self.lastname.trim());
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

// =============================================================================
// FORECASTING
// =============================================================================

/// Payload of the demand, trends and model-status endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastStatus {
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Aggregate shown at the top of the dashboard. Built only when every
/// constituent request succeeded.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Overview {
    pub demand: Option<ForecastStatus>,
    pub trends: Option<ForecastStatus>,
    pub model_status: Option<ForecastStatus>,
}

impl IsEmpty for Overview {
    fn is_empty(&self) -> bool {
        self.demand.is_none() && self.trends.is_none() && self.model_status.is_none()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    /// Feature names, or a placeholder string when the model does not expose them.
    #[serde(default)]
    pub features: Value,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

// =============================================================================
// TRACKING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Delay {
    pub id: String,
    #[serde(default)]
    pub reason: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Eta {
    #[serde(rename = "estimatedTime", alias = "estimated_time", default)]
    pub estimated_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

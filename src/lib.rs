//! # supply-dash
//!
//! Transport-agnostic core of the supply-chain dashboard.
//!
//! This crate owns the credential-session lifecycle, the login/signup state
//! machine, the typed endpoint catalog for the backend API, and the generic
//! remote-resource lifecycle every dashboard panel renders from. The `client`
//! crate drives it from the browser; the `cli` crate drives it from a terminal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Nothing here performs I/O directly. HTTP goes through the [`transport::Transport`]
//! seam and session persistence goes through [`session::SessionBackend`], so
//! both front ends and the unit tests plug in their own implementations.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod resource;
pub mod session;
pub mod transport;

pub use api::client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use resource::{IsEmpty, Presentation, RemoteResource, ResourceState, Ticket};
pub use session::{Session, SessionBackend, SessionStore};

//! Backend API surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` names every path the dashboard calls, `types` defines the wire
//! schema, `messages` turns failure bodies into readable text, and `client`
//! executes requests over an injected transport and session.

pub mod client;
pub mod endpoints;
pub mod messages;
pub mod types;

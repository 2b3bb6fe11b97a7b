//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and request plumbing from page and
//! component markup to improve reuse and testability.

pub mod auth;
pub mod fetch;
pub mod format;

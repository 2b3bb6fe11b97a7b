//! Remote resource lifecycle shared by every fetch-bound panel.
//!
//! DESIGN
//! ======
//! A [`RemoteResource`] is always in exactly one of three states: pending,
//! loaded with a value, or failed with a message. Every activation (mount,
//! dependency change, manual refresh) goes back to pending and hands out a
//! [`Ticket`]. Only the most recent ticket may commit a result, so a slow
//! response from a superseded request can never overwrite a newer one.
//!
//! Rendering decisions live in [`RemoteResource::presentation`] so every panel
//! follows the same order: loading, then error, then "no data", then data.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::fmt::Display;

/// Payload types that can be loaded yet hold nothing worth showing.
pub trait IsEmpty {
    fn is_empty(&self) -> bool;
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResourceState<T> {
    Pending,
    Loaded(T),
    Failed(String),
}

/// Proof of which activation a result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a ticket is needed to commit the request's result"]
pub struct Ticket(u64);

/// What a panel should draw for its resource right now.
#[derive(Debug, PartialEq)]
pub enum Presentation<'a, T> {
    Loading,
    Failed(&'a str),
    Empty,
    Ready(&'a T),
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoteResource<T> {
    state: ResourceState<T>,
    generation: u64,
}

impl<T> Default for RemoteResource<T> {
    fn default() -> Self {
        Self { state: ResourceState::Pending, generation: 0 }
    }
}

impl<T> RemoteResource<T> {
    /// A resource whose first request has not resolved yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new activation: go back to pending and supersede any request
    /// still in flight.
    pub fn begin(&mut self) -> Ticket {
        self.generation += 1;
        self.state = ResourceState::Pending;
        Ticket(self.generation)
    }

    /// Record the outcome of the request that was issued with `ticket`.
    ///
    /// Returns `false`, leaving the state untouched, when a later activation
    /// has superseded the ticket.
    pub fn commit<E: Display>(&mut self, ticket: Ticket, result: Result<T, E>) -> bool {
        if ticket.0 != self.generation {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation,
                "discarding stale response"
            );
            return false;
        }
        self.state = match result {
            Ok(value) => ResourceState::Loaded(value),
            Err(err) => ResourceState::Failed(err.to_string()),
        };
        true
    }

    #[must_use]
    pub fn state(&self) -> &ResourceState<T> {
        &self.state
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.state, ResourceState::Pending)
    }

    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match &self.state {
            ResourceState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            ResourceState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

impl<T: IsEmpty> RemoteResource<T> {
    #[must_use]
    pub fn presentation(&self) -> Presentation<'_, T> {
        match &self.state {
            ResourceState::Pending => Presentation::Loading,
            ResourceState::Failed(message) => Presentation::Failed(message.as_str()),
            ResourceState::Loaded(value) if value.is_empty() => Presentation::Empty,
            ResourceState::Loaded(value) => Presentation::Ready(value),
        }
    }
}

//! Geolocation seam
//!
//! Single-shot request/response wrapper around whatever can answer "where is
//! the user right now". The browser build backs this with
//! `navigator.geolocation`; native callers and tests plug in their own
//! provider. No timeout and no retry: a failed attempt is terminal for that
//! press only.

use crate::error::{Error, Result};
use crate::picker::Coordinates;
use std::future::Future;

/// An asynchronous source of the user's current position
pub trait LocationProvider: Send {
    /// Whether the capability exists at all
    fn is_available(&self) -> bool;

    /// Request the current position once
    ///
    /// Errors carry a human-readable reason suitable for showing directly
    /// to the user.
    fn current_position(&self) -> impl Future<Output = Result<Coordinates>> + Send;
}

/// Provider that always answers with a fixed position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

impl LocationProvider for FixedLocation {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Ok(self.0)
    }
}

/// Provider for hosts without any geolocation capability
#[derive(Debug, Clone, Copy)]
pub struct Unavailable;

impl LocationProvider for Unavailable {
    fn is_available(&self) -> bool {
        false
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Err(Error::LocationUnavailable(
            "Geolocation is not supported".to_string(),
        ))
    }
}

/// Test double: a provider that fails every request with the given reason
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct Failing(pub String);

#[cfg(test)]
impl LocationProvider for Failing {
    fn is_available(&self) -> bool {
        true
    }

    async fn current_position(&self) -> Result<Coordinates> {
        Err(Error::LocationUnavailable(self.0.clone()))
    }
}

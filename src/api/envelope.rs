//! Response envelope types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::task::domain::iso8601_millis;

/// Uniform JSON wrapper for API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Envelope<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    count: Option<usize>,
}

impl<T> Envelope<T> {
    /// Wraps a successful payload.
    #[must_use]
    pub const fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            count: None,
        }
    }

    /// Attaches a human-readable message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attaches an item count.
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Returns whether the envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }
}

impl Envelope<()> {
    /// Builds a failure envelope carrying only a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            count: None,
        }
    }
}

/// Body of the `/api/status` probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    success: bool,
    message: &'static str,
    #[serde(with = "iso8601_millis")]
    timestamp: DateTime<Utc>,
    version: &'static str,
}

impl StatusReport {
    /// Message reported while the server is accepting requests.
    pub const RUNNING: &'static str = "Demo Task Manager API is running";

    /// Builds a report stamped with `timestamp`.
    #[must_use]
    pub const fn running(timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            message: Self::RUNNING,
            timestamp,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

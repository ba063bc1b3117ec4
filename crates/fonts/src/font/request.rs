//! Font request state machine
//!
//! Tracks the asynchronous resolution of a font address:
//!
//! ```text
//! Submitted ──begin──▶ Loading ──resolved──▶ Loaded
//!     │                   │
//!     └──timeout/fail─────┴──timeout/fail──▶ NotFound
//! ```
//!
//! Loaded and NotFound are terminal. There is no retry and no explicit
//! cancel; a caller that no longer needs the font drops its handle.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lifecycle state of a font request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    /// Created, resolution not yet started
    Submitted,
    /// The resolver is fetching and parsing the font
    Loading,
    /// Glyphs and metrics are available
    Loaded,
    /// Resolution failed or timed out; the font is unusable
    NotFound,
}

impl RequestStatus {
    /// Whether no further transitions can happen
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Loaded | Self::NotFound)
    }
}

/// Pending resolution of a font from an address
#[derive(Debug, Clone)]
pub struct FontRequest {
    address: String,
    pixel_size: u32,
    timeout: Duration,
    elapsed: Duration,
    status: RequestStatus,
}

impl FontRequest {
    /// Create a request in the `Submitted` state
    pub fn new(address: impl Into<String>, pixel_size: u32, timeout: Duration) -> Self {
        Self {
            address: address.into(),
            pixel_size,
            timeout,
            elapsed: Duration::ZERO,
            status: RequestStatus::Submitted,
        }
    }

    /// Address being resolved
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Requested pixel size
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Time allowed before the request gives up
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Time accumulated through polling
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Current status
    pub fn status(&self) -> RequestStatus {
        self.status
    }

    /// Accumulate polled time; terminal requests stop counting
    pub fn advance(&mut self, delta: Duration) {
        if !self.status.is_terminal() {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Whether the accumulated time has reached the timeout
    pub fn is_expired(&self) -> bool {
        self.elapsed >= self.timeout
    }

    /// Submitted -> Loading
    pub fn begin_loading(&mut self) {
        if self.status == RequestStatus::Submitted {
            self.status = RequestStatus::Loading;
        }
    }

    /// Non-terminal -> Loaded
    pub fn complete(&mut self) {
        if !self.status.is_terminal() {
            self.status = RequestStatus::Loaded;
        }
    }

    /// Non-terminal -> NotFound
    pub fn fail(&mut self) {
        if !self.status.is_terminal() {
            self.status = RequestStatus::NotFound;
        }
    }

    /// Fail the request if it is still pending and out of time
    ///
    /// Returns true when this call caused the transition.
    pub fn expire_if_due(&mut self) -> bool {
        if !self.status.is_terminal() && self.is_expired() {
            self.status = RequestStatus::NotFound;
            true
        } else {
            false
        }
    }
}

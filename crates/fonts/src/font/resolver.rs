//! Font resolution seam
//!
//! Fetching bytes for an address and parsing them into glyph metrics happens
//! outside this crate. A [`FontResolver`] reports progress without blocking;
//! the library polls it once per `poll` call.

use crate::glyph::Glyph;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Parsed font payload handed back by a resolver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontData {
    /// Family name
    pub family_name: String,
    /// Line height in 26.6 units at the reference pixel size
    pub line_height: u32,
    /// Every glyph of the font
    pub glyphs: Vec<Glyph>,
}

/// Outcome of asking a resolver about an address
#[derive(Debug, Clone)]
pub enum Resolution {
    /// Still fetching or parsing
    Pending,
    /// Parsed payload is available
    Ready(FontData),
    /// Fetch or parse failed
    Failed(String),
}

/// Source of font data for addresses
///
/// Implementations must never block; long-running work is started in
/// [`begin`](Self::begin) and observed through [`resolve`](Self::resolve).
pub trait FontResolver {
    /// Start resolving `address` at `pixel_size`
    fn begin(&mut self, address: &str, pixel_size: u32);

    /// Report the current state of a resolution started with `begin`
    fn resolve(&mut self, address: &str, pixel_size: u32) -> Resolution;
}

/// In-process resolver fed explicitly with payloads or failures
///
/// Addresses without a delivered payload stay pending, which is how the
/// timeout path is exercised.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    fonts: HashMap<String, FontData>,
    failures: HashMap<String, String>,
    begun: HashSet<String>,
}

impl MemoryResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `data` available for `address`
    pub fn deliver(&mut self, address: impl Into<String>, data: FontData) {
        let address = address.into();
        self.failures.remove(&address);
        self.fonts.insert(address, data);
    }

    /// Make `address` fail with `reason`
    pub fn fail(&mut self, address: impl Into<String>, reason: impl Into<String>) {
        let address = address.into();
        self.fonts.remove(&address);
        self.failures.insert(address, reason.into());
    }

    /// Whether a resolution for `address` was started
    pub fn has_begun(&self, address: &str) -> bool {
        self.begun.contains(address)
    }
}

impl FontResolver for MemoryResolver {
    fn begin(&mut self, address: &str, _pixel_size: u32) {
        self.begun.insert(address.to_string());
    }

    fn resolve(&mut self, address: &str, _pixel_size: u32) -> Resolution {
        if let Some(reason) = self.failures.get(address) {
            Resolution::Failed(reason.clone())
        } else if let Some(data) = self.fonts.get(address) {
            Resolution::Ready(data.clone())
        } else {
            Resolution::Pending
        }
    }
}

//! Font family name and line metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family name with a bounded length
///
/// Names longer than [`FontName::MAX_LEN`] bytes are truncated at the last
/// character boundary that fits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct FontName(String);

impl FontName {
    /// Maximum length in bytes
    pub const MAX_LEN: usize = 255;

    /// Create a name, truncating if needed
    pub fn new(name: &str) -> Self {
        let mut end = name.len().min(Self::MAX_LEN);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        Self(name[..end].to_string())
    }

    /// Name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for FontName {
    fn from(name: String) -> Self {
        Self::new(&name)
    }
}

impl From<FontName> for String {
    fn from(name: FontName) -> Self {
        name.0
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vertical metrics and requested size of a font
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontMetrics {
    /// Baseline-to-baseline distance in 26.6 units at the reference pixel size
    pub line_height: u32,
    /// Pixel size the font was requested at
    pub pixel_size: u32,
}

impl FontMetrics {
    /// Create metrics
    pub fn new(line_height: u32, pixel_size: u32) -> Self {
        Self {
            line_height,
            pixel_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_unchanged() {
        let name = FontName::new("Cascadia Mono");
        assert_eq!(name.as_str(), "Cascadia Mono");
        assert_eq!(name.to_string(), "Cascadia Mono");
    }

    #[test]
    fn test_long_name_truncated() {
        let long = "x".repeat(300);
        assert_eq!(FontName::new(&long).as_str().len(), FontName::MAX_LEN);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 254 ASCII bytes then a two-byte character straddling the limit
        let name = format!("{}é", "a".repeat(254));
        let truncated = FontName::new(&name);
        assert_eq!(truncated.as_str().len(), 254);
    }
}

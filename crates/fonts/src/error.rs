//! Error types for font and layout operations

use crate::config::ConfigError;
use crate::font::RequestStatus;

/// Result type for font operations
pub type FontResult<T> = Result<T, FontError>;

/// Errors that can occur during font authoring and layout
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// A kerning entry for this character pair already exists
    #[error("Kerning for character '{next}' already exists on glyph '{character}'")]
    DuplicateKerning {
        /// Glyph the kerning was being added to
        character: char,
        /// Following character of the rejected pair
        next: char,
    },

    /// No glyph for the character and no fallback glyph in the font
    #[error("Character '{0}' not found in font and no fallback glyph is available")]
    GlyphNotFound(char),

    /// Two glyphs in one font claim the same character
    #[error("Font already has a glyph for character '{0}'")]
    DuplicateGlyph(char),

    /// Character outside the glyph table's 16-bit range
    #[error("Character '{0}' is outside the supported glyph table range")]
    UnsupportedCharacter(char),

    /// Pixel size must be non-zero
    #[error("Invalid pixel size: {0}")]
    InvalidPixelSize(u32),

    /// Glyph handle is stale or belongs to another store
    #[error("Glyph handle is no longer valid")]
    InvalidGlyphHandle,

    /// Font handle is stale or belongs to another library
    #[error("Font handle is no longer valid")]
    InvalidFontHandle,

    /// Font exists but has not finished loading
    #[error("Font is not loaded (status: {status:?})")]
    FontNotLoaded {
        /// Status observed when the access was attempted
        status: RequestStatus,
    },

    /// Caller-supplied vertex buffer cannot hold every quad
    #[error("Vertex buffer too small: {required} vertices required, {available} available")]
    BufferTooSmall {
        /// Vertices the layout would emit
        required: usize,
        /// Length of the supplied buffer
        available: usize,
    },

    /// Configuration failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

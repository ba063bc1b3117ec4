//! Read-only font access used by layout

use super::{Font, FontMetrics};
use crate::error::{FontError, FontResult};
use crate::foundation::fixed::REFERENCE_PIXEL_SIZE;
use crate::glyph::{Glyph, GlyphStore, Kerning};

/// Capabilities layout needs from a font
///
/// Implementations must be safe to share across threads while no glyph in
/// the font is being mutated.
pub trait FontFace {
    /// Line height and pixel size
    fn metrics(&self) -> FontMetrics;

    /// Glyph mapped to `character`, without fallback
    fn lookup(&self, character: char) -> Option<&Glyph>;

    /// Character substituted for unmapped codes
    fn fallback_character(&self) -> char {
        '?'
    }

    /// Pixel size line heights are authored at
    fn reference_pixel_size(&self) -> u32 {
        REFERENCE_PIXEL_SIZE
    }

    /// Resolve a character, falling back to the fallback glyph
    fn glyph(&self, character: char) -> FontResult<&Glyph> {
        self.lookup(character)
            .or_else(|| self.lookup(self.fallback_character()))
            .ok_or(FontError::GlyphNotFound(character))
    }

    /// Kerning pairs of the glyph that `character` resolves to
    fn kernings_of(&self, character: char) -> &[Kerning] {
        self.glyph(character).map_or(&[][..], Glyph::kernings)
    }
}

/// A font borrowed together with the store its glyph keys point into
#[derive(Debug, Clone, Copy)]
pub struct FontView<'a> {
    font: &'a Font,
    glyphs: &'a GlyphStore,
    fallback: char,
    reference_pixel_size: u32,
}

impl<'a> FontView<'a> {
    /// Borrow a font with default fallback and reference size
    pub fn new(font: &'a Font, glyphs: &'a GlyphStore) -> Self {
        Self {
            font,
            glyphs,
            fallback: '?',
            reference_pixel_size: REFERENCE_PIXEL_SIZE,
        }
    }

    /// Override the fallback character
    pub fn with_fallback(mut self, fallback: char) -> Self {
        self.fallback = fallback;
        self
    }

    /// Override the reference pixel size
    pub fn with_reference_pixel_size(mut self, reference_pixel_size: u32) -> Self {
        self.reference_pixel_size = reference_pixel_size;
        self
    }

    /// Underlying font
    pub fn font(&self) -> &'a Font {
        self.font
    }
}

impl FontFace for FontView<'_> {
    fn metrics(&self) -> FontMetrics {
        self.font.metrics()
    }

    fn lookup(&self, character: char) -> Option<&Glyph> {
        self.font
            .glyph_table()
            .lookup(character)
            .and_then(|key| self.glyphs.get(key))
    }

    fn fallback_character(&self) -> char {
        self.fallback
    }

    fn reference_pixel_size(&self) -> u32 {
        self.reference_pixel_size
    }
}

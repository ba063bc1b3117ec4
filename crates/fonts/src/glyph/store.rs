//! Glyph arena
//!
//! Glyphs are created independently of fonts and may be shared by more than
//! one font table. The store hands out generation-checked keys, so a key
//! held by a font after its glyph was destroyed simply stops resolving.

use super::{Glyph, GlyphKey, Kerning};
use crate::error::{FontError, FontResult};
use crate::foundation::collections::GlyphMap;
use crate::foundation::math::FixedVec2;

/// Arena of glyph records addressed by [`GlyphKey`]
#[derive(Debug, Default)]
pub struct GlyphStore {
    glyphs: GlyphMap<Glyph>,
}

impl GlyphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Author a new glyph and return its key
    pub fn create_glyph(
        &mut self,
        character: char,
        advance: FixedVec2,
        bearing: FixedVec2,
        offset: FixedVec2,
        size: FixedVec2,
        kernings: &[Kerning],
    ) -> FontResult<GlyphKey> {
        let glyph = Glyph::new(character, advance, bearing, offset, size).with_kernings(kernings)?;
        Ok(self.glyphs.insert(glyph))
    }

    /// Insert an already built glyph after checking its kerning invariant
    pub fn insert(&mut self, glyph: Glyph) -> FontResult<GlyphKey> {
        glyph.validate()?;
        Ok(self.glyphs.insert(glyph))
    }

    /// Look up a glyph
    pub fn get(&self, key: GlyphKey) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    /// Look up a glyph for mutation
    pub fn get_mut(&mut self, key: GlyphKey) -> Option<&mut Glyph> {
        self.glyphs.get_mut(key)
    }

    /// Destroy a glyph, returning it if the key was live
    pub fn remove(&mut self, key: GlyphKey) -> Option<Glyph> {
        self.glyphs.remove(key)
    }

    /// Whether the key refers to a live glyph
    pub fn contains(&self, key: GlyphKey) -> bool {
        self.glyphs.contains_key(key)
    }

    /// Number of live glyphs
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Add a kerning pair to a stored glyph
    pub fn add_kerning(&mut self, key: GlyphKey, next_character: char, amount: FixedVec2) -> FontResult<()> {
        self.glyphs
            .get_mut(key)
            .ok_or(FontError::InvalidGlyphHandle)?
            .add_kerning(next_character, amount)
    }

    /// Kerning adjustment of a stored glyph, zero when the pair is absent
    pub fn get_kerning(&self, key: GlyphKey, next_character: char) -> FontResult<FixedVec2> {
        self.glyphs
            .get(key)
            .map(|glyph| glyph.get_kerning(next_character))
            .ok_or(FontError::InvalidGlyphHandle)
    }

    /// Remove every kerning pair from a stored glyph
    pub fn clear_kernings(&mut self, key: GlyphKey) -> FontResult<()> {
        self.glyphs
            .get_mut(key)
            .ok_or(FontError::InvalidGlyphHandle)?
            .clear_kernings();
        Ok(())
    }
}

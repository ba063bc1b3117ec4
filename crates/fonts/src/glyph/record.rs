//! Glyph metrics record

use super::Kerning;
use crate::error::{FontError, FontResult};
use crate::foundation::math::FixedVec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual metrics for a single character
///
/// All vectors are 26.6 fixed point at the font's design size. The kerning
/// list is append-only with unique `next_character` entries; it can only be
/// changed through [`add_kerning`](Self::add_kerning) and
/// [`clear_kernings`](Self::clear_kernings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyph {
    character: char,
    advance: FixedVec2,
    bearing: FixedVec2,
    offset: FixedVec2,
    size: FixedVec2,
    #[serde(default)]
    kernings: Vec<Kerning>,
}

impl Glyph {
    /// Create a glyph with no kerning pairs
    pub fn new(
        character: char,
        advance: FixedVec2,
        bearing: FixedVec2,
        offset: FixedVec2,
        size: FixedVec2,
    ) -> Self {
        Self {
            character,
            advance,
            bearing,
            offset,
            size,
            kernings: Vec::new(),
        }
    }

    /// Attach an initial set of kerning pairs, rejecting duplicates
    pub fn with_kernings(mut self, kernings: &[Kerning]) -> FontResult<Self> {
        self.kernings.reserve(kernings.len());
        for kerning in kernings {
            self.add_kerning(kerning.next_character, kerning.amount)?;
        }
        Ok(self)
    }

    /// Character this glyph draws
    pub fn character(&self) -> char {
        self.character
    }

    /// Pen advance after drawing this glyph
    pub fn advance(&self) -> FixedVec2 {
        self.advance
    }

    /// Distance from the pen position to the glyph's visual top-left
    pub fn bearing(&self) -> FixedVec2 {
        self.bearing
    }

    /// Offset applied to the pen position before placing the quad
    pub fn offset(&self) -> FixedVec2 {
        self.offset
    }

    /// Bounding box of the glyph bitmap
    pub fn size(&self) -> FixedVec2 {
        self.size
    }

    /// Kerning pairs in insertion order
    pub fn kernings(&self) -> &[Kerning] {
        &self.kernings
    }

    /// Kerning adjustment before `next_character`, or zero if none
    pub fn get_kerning(&self, next_character: char) -> FixedVec2 {
        self.kernings
            .iter()
            .find(|k| k.next_character == next_character)
            .map_or_else(FixedVec2::zeros, |k| k.amount)
    }

    /// Whether a kerning pair exists for `next_character`
    pub fn contains_kerning(&self, next_character: char) -> bool {
        self.kernings.iter().any(|k| k.next_character == next_character)
    }

    /// Append a kerning pair
    ///
    /// Fails with [`FontError::DuplicateKerning`] if `next_character` already
    /// has an entry.
    pub fn add_kerning(&mut self, next_character: char, amount: FixedVec2) -> FontResult<()> {
        if self.contains_kerning(next_character) {
            return Err(FontError::DuplicateKerning {
                character: self.character,
                next: next_character,
            });
        }

        self.kernings.push(Kerning::new(next_character, amount));
        Ok(())
    }

    /// Remove every kerning pair
    pub fn clear_kernings(&mut self) {
        self.kernings.clear();
    }

    /// Check invariants of a glyph built outside [`add_kerning`](Self::add_kerning),
    /// e.g. one deserialized from a payload
    pub fn validate(&self) -> FontResult<()> {
        for (i, kerning) in self.kernings.iter().enumerate() {
            if self.kernings[..i]
                .iter()
                .any(|k| k.next_character == kerning.next_character)
            {
                return Err(FontError::DuplicateKerning {
                    character: self.character,
                    next: kerning.next_character,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.character)
    }
}

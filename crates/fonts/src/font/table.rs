//! Character-indexed glyph table

use crate::error::{FontError, FontResult};
use crate::foundation::collections::GlyphKey;
use crate::glyph::GlyphStore;

/// Highest character code a table can map (one 16-bit unit)
pub const MAX_CHARACTER: u32 = 0xFFFF;

/// Glyph keys indexed by character code
///
/// Slot 0 is never mapped; `'\0'` always resolves through the fallback.
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    slots: Vec<Option<GlyphKey>>,
}

impl GlyphTable {
    /// Build a table from glyph keys, reading each glyph's character
    pub fn build(store: &GlyphStore, keys: &[GlyphKey]) -> FontResult<Self> {
        let mut table = Self::default();
        for &key in keys {
            let glyph = store.get(key).ok_or(FontError::InvalidGlyphHandle)?;
            table.insert(glyph.character(), key)?;
        }
        Ok(table)
    }

    /// Map `character` to `key`
    ///
    /// Rejects `'\0'` and codes above [`MAX_CHARACTER`].
    pub fn insert(&mut self, character: char, key: GlyphKey) -> FontResult<()> {
        let code = character as u32;
        if code == 0 || code > MAX_CHARACTER {
            return Err(FontError::UnsupportedCharacter(character));
        }

        let index = code as usize;
        if index >= self.slots.len() {
            self.slots.resize(index + 1, None);
        }
        if self.slots[index].is_some() {
            return Err(FontError::DuplicateGlyph(character));
        }

        self.slots[index] = Some(key);
        Ok(())
    }

    /// Key mapped to `character`, without fallback
    pub fn lookup(&self, character: char) -> Option<GlyphKey> {
        match character as usize {
            0 => None,
            index => self.slots.get(index).copied().flatten(),
        }
    }

    /// Key stored at a table position
    pub fn get(&self, index: usize) -> Option<GlyphKey> {
        self.slots.get(index).copied().flatten()
    }

    /// Table length (highest mapped code + 1)
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether nothing is mapped
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Number of mapped characters
    pub fn glyph_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Every mapped key in character order
    pub fn keys(&self) -> impl Iterator<Item = GlyphKey> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}

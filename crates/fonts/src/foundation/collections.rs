//! Specialized collection types

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generation-checked handle to a glyph in a [`GlyphStore`](crate::glyph::GlyphStore)
    pub struct GlyphKey;

    /// Generation-checked handle to a font in a [`FontLibrary`](crate::font::FontLibrary)
    pub struct FontKey;
}

/// Handle-based map for glyph records
pub type GlyphMap<T> = SlotMap<GlyphKey, T>;

/// Handle-based map for font records
pub type FontMap<T> = SlotMap<FontKey, T>;

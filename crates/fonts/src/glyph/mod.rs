//! Glyph records and kerning
//!
//! A glyph holds the visual metrics of one character in 26.6 fixed point
//! plus the kerning pairs that start with it. Glyphs live in a
//! [`GlyphStore`] arena and fonts reference them by [`GlyphKey`].

pub mod kerning;
pub mod record;
pub mod store;

pub use kerning::*;
pub use record::*;
pub use store::*;

pub use crate::foundation::collections::GlyphKey;

//! Text layout engine
//!
//! Converts text strings into positioned quads for rendering. Handles pen
//! advance, line breaks, baseline alignment and hit testing.
//!
//! # Layout Coordinate System
//!
//! - Origin (0, 0) is the pen position of the first character
//! - +X axis points right
//! - Each line break moves the pen to negative Y by one scaled line height
//! - Output coordinates are divided by `64 * pixel_size`, so they are
//!   independent of the requested size; multiply by the render scale
//!
//! All functions are pure over a [`FontFace`](crate::font::FontFace) and
//! may run concurrently as long as nobody mutates the font's glyphs. The
//! font must be loaded; layout on a pending font sees an empty table.

pub mod quads;
pub mod geometry;
pub mod hit_test;

pub use quads::*;
pub use geometry::*;
pub use hit_test::*;

#[cfg(test)]
pub(crate) mod test_font {
    use crate::font::{FontFace, FontMetrics};
    use crate::foundation::math::FixedVec2;
    use crate::glyph::Glyph;

    /// Minimal font face backed by a glyph list
    pub struct TestFont {
        pub metrics: FontMetrics,
        pub glyphs: Vec<Glyph>,
    }

    impl TestFont {
        pub fn new(line_height: u32, pixel_size: u32) -> Self {
            Self {
                metrics: FontMetrics::new(line_height, pixel_size),
                glyphs: Vec::new(),
            }
        }

        pub fn with_glyph(mut self, character: char, advance: i32, bearing_y: i32, offset: FixedVec2, size: FixedVec2) -> Self {
            self.glyphs.push(Glyph::new(
                character,
                FixedVec2::new(advance, 0),
                FixedVec2::new(0, bearing_y),
                offset,
                size,
            ));
            self
        }

        pub fn with_simple(self, character: char, advance: i32) -> Self {
            self.with_glyph(character, advance, 0, FixedVec2::zeros(), FixedVec2::zeros())
        }
    }

    impl FontFace for TestFont {
        fn metrics(&self) -> FontMetrics {
            self.metrics
        }

        fn lookup(&self, character: char) -> Option<&Glyph> {
            self.glyphs.iter().find(|g| g.character() == character)
        }
    }
}

//! Pen walk over a text buffer
//!
//! [`GlyphQuads`] is the single implementation of the layout algorithm;
//! vertex generation, sizing and hit testing all consume it, so they agree
//! on every position without allocating intermediate buffers.

use crate::error::FontResult;
use crate::font::FontFace;
use crate::foundation::fixed::{descale, scale_line_height};
use crate::foundation::math::{saturating_add, widen, PenVec2, Vec2};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

/// One laid-out character in 26.6 units at pen precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphQuad {
    /// Position of the character in the text, counted in chars
    pub index: usize,
    /// Character as it appeared in the text (before fallback)
    pub character: char,
    /// Top-left, top-right, bottom-right, bottom-left
    pub corners: [PenVec2; 4],
}

impl GlyphQuad {
    /// Top-left corner, the quad's anchor
    pub fn top_left(&self) -> PenVec2 {
        self.corners[0]
    }
}

/// Iterator placing each non-line-break character of a text
///
/// Yields an error and then stops if a character has neither a glyph nor a
/// fallback glyph.
pub struct GlyphQuads<'a, F: FontFace + ?Sized> {
    font: &'a F,
    chars: Peekable<Enumerate<Chars<'a>>>,
    cursor: PenVec2,
    line_advance: i64,
    pixel_size: u32,
    failed: bool,
}

impl<'a, F: FontFace + ?Sized> GlyphQuads<'a, F> {
    /// Start walking `text` with the pen at the origin
    pub fn new(font: &'a F, text: &'a str) -> Self {
        let metrics = font.metrics();
        Self {
            font,
            chars: text.chars().enumerate().peekable(),
            cursor: PenVec2::zeros(),
            line_advance: scale_line_height(metrics.line_height, metrics.pixel_size, font.reference_pixel_size()),
            pixel_size: metrics.pixel_size,
            failed: false,
        }
    }

    /// Current pen position in 26.6 units
    pub fn cursor(&self) -> PenVec2 {
        self.cursor
    }

    /// Pixel size used to normalize output
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    /// Pen position as a normalized extent with Y pointing up
    pub fn extent(&self) -> Vec2 {
        descale(PenVec2::new(self.cursor.x, self.cursor.y.saturating_neg()), self.pixel_size)
    }

    fn line_break(&mut self) {
        self.cursor.x = 0;
        self.cursor.y = self.cursor.y.saturating_sub(self.line_advance);
    }
}

impl<F: FontFace + ?Sized> Iterator for GlyphQuads<'_, F> {
    type Item = FontResult<GlyphQuad>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        loop {
            let (index, character) = self.chars.next()?;
            match character {
                '\n' => self.line_break(),
                '\r' => {
                    self.line_break();
                    // \r\n is one break
                    self.chars.next_if(|&(_, next)| next == '\n');
                }
                _ => {
                    let glyph = match self.font.glyph(character) {
                        Ok(glyph) => glyph,
                        Err(e) => {
                            self.failed = true;
                            return Some(Err(e));
                        }
                    };

                    let size = widen(glyph.size());
                    let mut origin = saturating_add(self.cursor, widen(glyph.offset()));
                    origin.y = origin.y.saturating_sub(size.y - i64::from(glyph.bearing().y));

                    let corners = [
                        origin,
                        saturating_add(origin, PenVec2::new(size.x, 0)),
                        saturating_add(origin, size),
                        saturating_add(origin, PenVec2::new(0, size.y)),
                    ];

                    // Only horizontal advance; one baseline per line
                    self.cursor.x = self.cursor.x.saturating_add(i64::from(glyph.advance().x));

                    return Some(Ok(GlyphQuad {
                        index,
                        character,
                        corners,
                    }));
                }
            }
        }
    }
}

/// Number of characters in `text` that produce a quad
pub fn quad_count(text: &str) -> usize {
    text.chars().filter(|&c| c != '\n' && c != '\r').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FontError;
    use crate::foundation::math::FixedVec2;
    use crate::layout::test_font::TestFont;
    use approx::assert_relative_eq;

    #[test]
    fn test_quad_count_skips_breaks() {
        assert_eq!(quad_count(""), 0);
        assert_eq!(quad_count("ab\r\ncd\n"), 4);
        assert_eq!(quad_count("\r\r\n"), 0);
    }

    #[test]
    fn test_indices_skip_line_breaks() {
        let font = TestFont::new(32, 32).with_simple('a', 64).with_simple('b', 64);
        let indices: Vec<usize> = GlyphQuads::new(&font, "a\r\nb")
            .map(|q| q.unwrap().index)
            .collect();
        assert_eq!(indices, vec![0, 3]);
    }

    #[test]
    fn test_corner_order() {
        let font = TestFont::new(32, 32).with_glyph(
            'A',
            640,
            700,
            FixedVec2::new(10, 0),
            FixedVec2::new(500, 700),
        );
        let quad = GlyphQuads::new(&font, "A").next().unwrap().unwrap();

        // size.y == bearing.y so no baseline shift
        assert_eq!(quad.corners[0], PenVec2::new(10, 0));
        assert_eq!(quad.corners[1], PenVec2::new(510, 0));
        assert_eq!(quad.corners[2], PenVec2::new(510, 700));
        assert_eq!(quad.corners[3], PenVec2::new(10, 700));
    }

    #[test]
    fn test_baseline_correction() {
        let font = TestFont::new(32, 32).with_glyph('g', 512, 400, FixedVec2::zeros(), FixedVec2::new(448, 600));
        let quad = GlyphQuads::new(&font, "g").next().unwrap().unwrap();
        assert_eq!(quad.top_left(), PenVec2::new(0, -200));
    }

    #[test]
    fn test_vertical_advance_ignored() {
        let mut font = TestFont::new(32, 32);
        font.glyphs.push(crate::glyph::Glyph::new(
            'v',
            FixedVec2::new(100, 50),
            FixedVec2::zeros(),
            FixedVec2::zeros(),
            FixedVec2::zeros(),
        ));
        let mut quads = GlyphQuads::new(&font, "vv");
        quads.next();
        let second = quads.next().unwrap().unwrap();
        assert_eq!(second.top_left(), PenVec2::new(100, 0));
        assert_eq!(quads.cursor(), PenVec2::new(200, 0));
    }

    #[test]
    fn test_stops_after_missing_glyph() {
        let font = TestFont::new(32, 32).with_simple('a', 64);
        let results: Vec<_> = GlyphQuads::new(&font, "aza").collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(FontError::GlyphNotFound('z'))));
    }

    #[test]
    fn test_line_height_scales_with_pixel_size() {
        let font = TestFont::new(32, 64).with_simple('a', 64);
        let mut quads = GlyphQuads::new(&font, "\n");
        assert!(quads.next().is_none());
        assert_eq!(quads.cursor(), PenVec2::new(0, -64));
    }

    #[test]
    fn test_pen_walks_past_32_bit_range() {
        let font = TestFont::new(2048, 32).with_glyph(
            'W',
            i32::MAX,
            0,
            FixedVec2::new(i32::MAX, 0),
            FixedVec2::new(i32::MAX, i32::MAX),
        );
        let mut quads = GlyphQuads::new(&font, "WW");
        quads.next().unwrap().unwrap();
        let second = quads.next().unwrap().unwrap();

        assert_eq!(second.top_left(), PenVec2::new(2 * i64::from(i32::MAX), -i64::from(i32::MAX)));
        assert_eq!(second.corners[2].x, 3 * i64::from(i32::MAX));
        assert_eq!(quads.cursor(), PenVec2::new(2 * i64::from(i32::MAX), 0));
    }

    #[test]
    fn test_extent_of_saturated_pen() {
        let font = TestFont::new(u32::MAX, u32::MAX).with_simple('a', 64);
        let text = "\n".repeat(32);
        let mut quads = GlyphQuads::new(&font, &text);
        assert!(quads.next().is_none());
        assert_eq!(quads.cursor().y, i64::MIN);

        let extent = quads.extent();
        assert!(extent.y.is_finite());
        assert!(extent.y > 0.0);
        assert_relative_eq!(extent.x, 0.0);
    }
}

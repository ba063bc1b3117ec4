//! Nearest-character queries

use super::GlyphQuads;
use crate::error::FontResult;
use crate::font::FontFace;
use crate::foundation::fixed::descale;
use crate::foundation::math::{distance_squared, Vec2};

/// Index of the character whose top-left vertex is nearest to `position`
///
/// `position` is in the same normalized space as generated vertices.
/// Line breaks are never candidates. Ties keep the earliest index. Returns
/// `None` for empty text or text made only of line breaks.
pub fn try_index_of<F: FontFace + ?Sized>(font: &F, text: &str, position: Vec2) -> FontResult<Option<usize>> {
    if text.is_empty() {
        return Ok(None);
    }

    let quads = GlyphQuads::new(font, text);
    let pixel_size = quads.pixel_size();
    let mut nearest: Option<(usize, f32)> = None;

    for quad in quads {
        let quad = quad?;
        let distance = distance_squared(&descale(quad.top_left(), pixel_size), &position);
        if nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((quad.index, distance));
        }
    }

    Ok(nearest.map(|(index, _)| index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::test_font::TestFont;

    fn font() -> TestFont {
        // 0.5 em wide characters at 32px
        TestFont::new(32, 32)
            .with_simple('a', 1024)
            .with_simple('b', 1024)
    }

    #[test]
    fn test_empty_text_not_found() {
        assert_eq!(try_index_of(&font(), "", Vec2::zeros()).unwrap(), None);
    }

    #[test]
    fn test_only_line_breaks_not_found() {
        assert_eq!(try_index_of(&font(), "\r\n\n", Vec2::zeros()).unwrap(), None);
    }

    #[test]
    fn test_nearest_character() {
        let f = font();
        assert_eq!(try_index_of(&f, "abab", Vec2::new(0.1, 0.0)).unwrap(), Some(0));
        assert_eq!(try_index_of(&f, "abab", Vec2::new(0.45, 0.0)).unwrap(), Some(1));
        assert_eq!(try_index_of(&f, "abab", Vec2::new(5.0, 0.0)).unwrap(), Some(3));
    }

    #[test]
    fn test_tie_prefers_earliest() {
        // Exactly between the first two top-left corners
        assert_eq!(try_index_of(&font(), "ab", Vec2::new(0.25, 0.0)).unwrap(), Some(0));
    }

    #[test]
    fn test_index_counts_line_breaks() {
        // 16px line height in 26.6 puts the second line at y = -0.5
        let f = TestFont::new(1024, 32).with_simple('a', 1024).with_simple('b', 1024);
        assert_eq!(try_index_of(&f, "a\r\nb", Vec2::new(0.0, -0.5)).unwrap(), Some(3));
        assert_eq!(try_index_of(&f, "a\nb", Vec2::new(0.0, -0.4)).unwrap(), Some(2));
    }

    #[test]
    fn test_long_line_picks_last_character() {
        let f = TestFont::new(2048, 32).with_simple('a', 640);
        let text = "a".repeat(3_400_000);
        assert_eq!(try_index_of(&f, &text, Vec2::new(2.0e6, 0.0)).unwrap(), Some(3_399_999));
    }

    #[test]
    fn test_missing_glyph_is_error() {
        assert!(try_index_of(&font(), "az", Vec2::zeros()).is_err());
    }
}

//! Vertex generation and text measurement

use super::{quad_count, GlyphQuads};
use crate::error::{FontError, FontResult};
use crate::font::FontFace;
use crate::foundation::fixed::descale;
use crate::foundation::math::Vec2;

/// Vertices emitted per character
pub const VERTICES_PER_QUAD: usize = 4;

/// Laid-out text: four vertices per drawn character
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextGeometry {
    /// Quad corners, normalized by `64 * pixel_size`
    pub vertices: Vec<Vec2>,
    /// Final pen position with Y pointing up
    pub max_extent: Vec2,
}

impl TextGeometry {
    /// Number of emitted vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of emitted quads
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    /// Corners of one quad
    pub fn quad(&self, quad: usize) -> Option<&[Vec2]> {
        let start = quad * VERTICES_PER_QUAD;
        self.vertices.get(start..start + VERTICES_PER_QUAD)
    }
}

/// Bounding box of laid-out quads
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextBounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl TextBounds {
    /// Calculate width of bounding box
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Calculate height of bounding box
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

/// Lay out `text` into a caller-provided buffer
///
/// Returns the number of vertices written and the max extent. Fails before
/// writing anything if `vertices` cannot hold every quad, so a fixed-size
/// stack array is a valid buffer for bounded text.
pub fn generate_vertices_into<F: FontFace + ?Sized>(
    font: &F,
    text: &str,
    vertices: &mut [Vec2],
) -> FontResult<(usize, Vec2)> {
    let required = quad_count(text) * VERTICES_PER_QUAD;
    if vertices.len() < required {
        return Err(FontError::BufferTooSmall {
            required,
            available: vertices.len(),
        });
    }

    let mut quads = GlyphQuads::new(font, text);
    let pixel_size = quads.pixel_size();
    let mut count = 0;
    for quad in quads.by_ref() {
        for corner in quad?.corners {
            vertices[count] = descale(corner, pixel_size);
            count += 1;
        }
    }

    log::trace!("Laid out {} chars into {} vertices", text.len(), count);
    Ok((count, quads.extent()))
}

/// Lay out `text` into newly allocated geometry
///
/// # Example
///
/// ```no_run
/// # use fonts::prelude::*;
/// # fn demo(view: &FontView) -> FontResult<()> {
/// let geometry = generate_vertices(view, "Hello")?;
/// assert_eq!(geometry.vertex_count(), 20); // 5 chars × 4 vertices
/// # Ok(())
/// # }
/// ```
pub fn generate_vertices<F: FontFace + ?Sized>(font: &F, text: &str) -> FontResult<TextGeometry> {
    let mut vertices = vec![Vec2::zeros(); quad_count(text) * VERTICES_PER_QUAD];
    let (count, max_extent) = generate_vertices_into(font, text, &mut vertices)?;
    vertices.truncate(count);

    Ok(TextGeometry {
        vertices,
        max_extent,
    })
}

/// Size of the text block: the final pen position with Y pointing up
pub fn calculate_size<F: FontFace + ?Sized>(font: &F, text: &str) -> FontResult<Vec2> {
    let mut quads = GlyphQuads::new(font, text);
    for quad in quads.by_ref() {
        quad?;
    }
    Ok(quads.extent())
}

/// Visual bounding box of every emitted vertex
///
/// Unlike [`calculate_size`] this follows the quads themselves, so bearings
/// and descenders are included. Empty text yields a zero box.
pub fn calculate_bounds<F: FontFace + ?Sized>(font: &F, text: &str) -> FontResult<TextBounds> {
    let mut quads = GlyphQuads::new(font, text);
    let pixel_size = quads.pixel_size();
    let mut bounds: Option<TextBounds> = None;

    for quad in quads.by_ref() {
        for corner in quad?.corners {
            let v = descale(corner, pixel_size);
            let b = bounds.get_or_insert(TextBounds {
                min_x: v.x,
                min_y: v.y,
                max_x: v.x,
                max_y: v.y,
            });
            b.min_x = b.min_x.min(v.x);
            b.min_y = b.min_y.min(v.y);
            b.max_x = b.max_x.max(v.x);
            b.max_y = b.max_y.max(v.y);
        }
    }

    Ok(bounds.unwrap_or_default())
}

/// Text layout bound to one font
///
/// Convenience wrapper over the free functions for callers laying out many
/// strings with the same font.
pub struct TextLayout<'a, F: FontFace + ?Sized> {
    font: &'a F,
}

impl<'a, F: FontFace + ?Sized> TextLayout<'a, F> {
    /// Create a new text layout engine
    pub fn new(font: &'a F) -> Self {
        Self { font }
    }

    /// Convert a text string into positioned quads
    pub fn layout_text(&self, text: &str) -> FontResult<TextGeometry> {
        generate_vertices(self.font, text)
    }

    /// Size of the text block
    pub fn calculate_size(&self, text: &str) -> FontResult<Vec2> {
        calculate_size(self.font, text)
    }

    /// Calculate bounding box for a text string
    pub fn calculate_bounds(&self, text: &str) -> FontResult<TextBounds> {
        calculate_bounds(self.font, text)
    }

    /// Index of the character nearest to `position`
    pub fn index_of(&self, text: &str, position: Vec2) -> FontResult<Option<usize>> {
        super::try_index_of(self.font, text, position)
    }

    /// Get the font used by this layout engine
    pub fn font(&self) -> &'a F {
        self.font
    }
}

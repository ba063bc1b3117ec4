//! Font record

use super::{FontMetrics, FontName, FontRequest, GlyphTable, RequestStatus};
use crate::foundation::collections::{FontKey, GlyphKey};
use std::fmt;

/// A font: family name, metrics and its character-indexed glyph table
///
/// The table holds keys, not glyphs. Glyphs a font materialized from a
/// resolved request are recorded as owned and destroyed with the font;
/// glyphs passed in when the font was built from a list are only
/// referenced.
#[derive(Debug, Clone)]
pub struct Font {
    key: FontKey,
    name: FontName,
    metrics: FontMetrics,
    table: GlyphTable,
    request: Option<FontRequest>,
    owned_glyphs: Vec<GlyphKey>,
}

impl Font {
    pub(crate) fn from_table(key: FontKey, name: FontName, metrics: FontMetrics, table: GlyphTable) -> Self {
        Self {
            key,
            name,
            metrics,
            table,
            request: None,
            owned_glyphs: Vec::new(),
        }
    }

    pub(crate) fn from_request(key: FontKey, request: FontRequest) -> Self {
        Self {
            key,
            name: FontName::default(),
            metrics: FontMetrics::new(0, request.pixel_size()),
            table: GlyphTable::default(),
            request: Some(request),
            owned_glyphs: Vec::new(),
        }
    }

    /// Fill in data produced by a resolved request
    pub(crate) fn populate(&mut self, name: FontName, line_height: u32, table: GlyphTable, owned: Vec<GlyphKey>) {
        self.name = name;
        self.metrics.line_height = line_height;
        self.table = table;
        self.owned_glyphs = owned;
    }

    pub(crate) fn request_mut(&mut self) -> Option<&mut FontRequest> {
        self.request.as_mut()
    }

    pub(crate) fn take_owned_glyphs(&mut self) -> Vec<GlyphKey> {
        std::mem::take(&mut self.owned_glyphs)
    }

    /// Handle of this font in its library
    pub fn key(&self) -> FontKey {
        self.key
    }

    /// Family name
    pub fn family_name(&self) -> &FontName {
        &self.name
    }

    /// Line height and pixel size
    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }

    /// Baseline-to-baseline distance at the reference pixel size
    pub fn line_height(&self) -> u32 {
        self.metrics.line_height
    }

    /// Requested pixel size
    pub fn pixel_size(&self) -> u32 {
        self.metrics.pixel_size
    }

    /// Character-indexed glyph table
    pub fn glyph_table(&self) -> &GlyphTable {
        &self.table
    }

    /// Number of mapped glyphs
    pub fn glyph_count(&self) -> usize {
        self.table.glyph_count()
    }

    /// Glyph key at a table position
    pub fn glyph_at(&self, index: usize) -> Option<GlyphKey> {
        self.table.get(index)
    }

    /// Pending or finished request, if the font was requested by address
    pub fn request(&self) -> Option<&FontRequest> {
        self.request.as_ref()
    }

    /// Load status; fonts built from glyphs are always loaded
    pub fn status(&self) -> RequestStatus {
        self.request
            .as_ref()
            .map_or(RequestStatus::Loaded, FontRequest::status)
    }

    /// Whether the font may be used for layout
    pub fn is_loaded(&self) -> bool {
        self.status() == RequestStatus::Loaded
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (`{:?}`)", self.name, self.key)
    }
}

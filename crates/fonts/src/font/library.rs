//! Font library
//!
//! Owns the glyph arena, every font, and the resolver used for fonts
//! requested by address. Driven by a single-threaded event loop that calls
//! [`FontLibrary::poll`] or [`FontLibrary::update`] with elapsed time.

use super::{
    Font, FontData, FontMetrics, FontName, FontRequest, FontResolver, FontView,
    GlyphTable, Resolution, RequestStatus,
};
use crate::config::{Config, FontSystemConfig};
use crate::error::{FontError, FontResult};
use crate::foundation::collections::{FontKey, FontMap, GlyphKey};
use crate::foundation::fixed::FIXED_ONE;
use crate::foundation::math::FixedVec2;
use crate::glyph::{Glyph, GlyphStore, Kerning};
use std::time::Duration;

/// Storage and lifecycle management for fonts and glyphs
pub struct FontLibrary {
    config: FontSystemConfig,
    glyphs: GlyphStore,
    fonts: FontMap<Font>,
    resolver: Box<dyn FontResolver>,
}

impl FontLibrary {
    /// Create a library with default configuration
    pub fn new(resolver: Box<dyn FontResolver>) -> Self {
        Self::with_config(FontSystemConfig::default(), resolver)
    }

    /// Create a library with explicit configuration
    pub fn with_config(config: FontSystemConfig, resolver: Box<dyn FontResolver>) -> Self {
        Self {
            config,
            glyphs: GlyphStore::new(),
            fonts: FontMap::with_key(),
            resolver,
        }
    }

    /// Create a library configured from a TOML or RON file
    pub fn from_config_file(path: &str, resolver: Box<dyn FontResolver>) -> FontResult<Self> {
        let config = FontSystemConfig::load_from_file(path)?;
        log::debug!("Loaded font configuration from {}", path);
        Ok(Self::with_config(config, resolver))
    }

    /// Active configuration
    pub fn config(&self) -> &FontSystemConfig {
        &self.config
    }

    /// Glyph arena
    pub fn glyphs(&self) -> &GlyphStore {
        &self.glyphs
    }

    /// Glyph arena, mutable
    ///
    /// Kerning changes made here must not overlap with layout reading the
    /// same glyphs.
    pub fn glyphs_mut(&mut self) -> &mut GlyphStore {
        &mut self.glyphs
    }

    /// Author a glyph that fonts can later reference
    pub fn create_glyph(
        &mut self,
        character: char,
        advance: FixedVec2,
        bearing: FixedVec2,
        offset: FixedVec2,
        size: FixedVec2,
        kernings: &[Kerning],
    ) -> FontResult<GlyphKey> {
        self.glyphs.create_glyph(character, advance, bearing, offset, size, kernings)
    }

    /// Look up a glyph
    pub fn glyph(&self, key: GlyphKey) -> Option<&Glyph> {
        self.glyphs.get(key)
    }

    /// Destroy an independently created glyph
    ///
    /// Fonts still referencing it fall back for that character afterwards.
    pub fn destroy_glyph(&mut self, key: GlyphKey) -> bool {
        self.glyphs.remove(key).is_some()
    }

    /// Add a kerning pair to a glyph
    pub fn add_kerning(&mut self, glyph: GlyphKey, next_character: char, amount: FixedVec2) -> FontResult<()> {
        self.glyphs.add_kerning(glyph, next_character, amount)
    }

    /// Kerning between a glyph and the next character, zero if absent
    pub fn get_kerning(&self, glyph: GlyphKey, next_character: char) -> FontResult<FixedVec2> {
        self.glyphs.get_kerning(glyph, next_character)
    }

    /// Remove every kerning pair of a glyph
    pub fn clear_kernings(&mut self, glyph: GlyphKey) -> FontResult<()> {
        self.glyphs.clear_kernings(glyph)
    }

    /// Build a loaded font from existing glyphs
    ///
    /// The family name is empty and the line height is one em at the
    /// reference pixel size.
    pub fn create_font(&mut self, glyphs: &[GlyphKey], pixel_size: u32) -> FontResult<FontKey> {
        let line_height = self.config.reference_pixel_size.saturating_mul(FIXED_ONE as u32);
        self.create_named_font("", line_height, glyphs, pixel_size)
    }

    /// Build a loaded font from existing glyphs with explicit name and line height
    pub fn create_named_font(
        &mut self,
        family_name: &str,
        line_height: u32,
        glyphs: &[GlyphKey],
        pixel_size: u32,
    ) -> FontResult<FontKey> {
        if pixel_size == 0 {
            return Err(FontError::InvalidPixelSize(pixel_size));
        }

        let table = GlyphTable::build(&self.glyphs, glyphs)?;
        let name = FontName::new(family_name);
        let metrics = FontMetrics::new(line_height, pixel_size);
        let key = self
            .fonts
            .insert_with_key(|key| Font::from_table(key, name, metrics, table));

        log::debug!("Created font {:?} with {} glyphs at {}px", key, glyphs.len(), pixel_size);
        Ok(key)
    }

    /// Request a font by address; it starts in `Submitted`
    pub fn request_font(&mut self, address: &str, pixel_size: u32, timeout: Duration) -> FontResult<FontKey> {
        if pixel_size == 0 {
            return Err(FontError::InvalidPixelSize(pixel_size));
        }

        let request = FontRequest::new(address, pixel_size, timeout);
        let key = self
            .fonts
            .insert_with_key(|key| Font::from_request(key, request));

        log::debug!("Submitted font request {:?} for '{}' at {}px", key, address, pixel_size);
        Ok(key)
    }

    /// Request a font using the configured pixel size and timeout
    pub fn request_default(&mut self, address: &str) -> FontResult<FontKey> {
        let pixel_size = self.config.default_pixel_size;
        let timeout = self.config.timeout();
        self.request_font(address, pixel_size, timeout)
    }

    /// Advance a font request by `delta` and return its status
    ///
    /// On the first poll the resolver is asked to begin and the request moves
    /// to `Loading`. A payload that arrives is materialized into glyphs and the
    /// request becomes `Loaded`; a resolver failure, an invalid payload, or
    /// the timeout elapsing first makes it `NotFound`. Fonts that were not
    /// requested, and finished requests, are left untouched.
    pub fn poll(&mut self, key: FontKey, delta: Duration) -> FontResult<RequestStatus> {
        let font = self.fonts.get_mut(key).ok_or(FontError::InvalidFontHandle)?;
        let Some(request) = font.request_mut() else {
            return Ok(RequestStatus::Loaded);
        };
        if request.status().is_terminal() {
            return Ok(request.status());
        }

        if request.status() == RequestStatus::Submitted {
            self.resolver.begin(request.address(), request.pixel_size());
            request.begin_loading();
            log::debug!("Font request {:?} for '{}' is loading", key, request.address());
        }

        request.advance(delta);

        match self.resolver.resolve(request.address(), request.pixel_size()) {
            Resolution::Ready(data) => match materialize(&mut self.glyphs, data) {
                Ok((name, line_height, table, owned)) => {
                    request.complete();
                    log::info!(
                        "Loaded font '{}' from '{}' ({} glyphs)",
                        name,
                        request.address(),
                        owned.len()
                    );
                    font.populate(name, line_height, table, owned);
                }
                Err(e) => {
                    log::warn!("Font payload for '{}' rejected: {}", request.address(), e);
                    request.fail();
                }
            },
            Resolution::Failed(reason) => {
                log::warn!("Font '{}' could not be resolved: {}", request.address(), reason);
                request.fail();
            }
            Resolution::Pending => {
                if request.expire_if_due() {
                    log::warn!(
                        "Font request for '{}' timed out after {:?}",
                        request.address(),
                        request.elapsed()
                    );
                }
            }
        }

        Ok(font.status())
    }

    /// Poll every pending request; returns how many are still pending
    pub fn update(&mut self, delta: Duration) -> usize {
        let pending: Vec<FontKey> = self
            .fonts
            .iter()
            .filter(|(_, font)| !font.status().is_terminal())
            .map(|(key, _)| key)
            .collect();

        pending
            .into_iter()
            .filter_map(|key| self.poll(key, delta).ok())
            .filter(|status| !status.is_terminal())
            .count()
    }

    /// Status of a font
    pub fn status(&self, key: FontKey) -> FontResult<RequestStatus> {
        self.fonts
            .get(key)
            .map(Font::status)
            .ok_or(FontError::InvalidFontHandle)
    }

    /// Look up a font regardless of status
    pub fn font(&self, key: FontKey) -> Option<&Font> {
        self.fonts.get(key)
    }

    /// Number of fonts, pending ones included
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Borrow a loaded font for layout
    pub fn view(&self, key: FontKey) -> FontResult<FontView<'_>> {
        let font = self.fonts.get(key).ok_or(FontError::InvalidFontHandle)?;
        let status = font.status();
        if status != RequestStatus::Loaded {
            return Err(FontError::FontNotLoaded { status });
        }

        Ok(FontView::new(font, &self.glyphs)
            .with_fallback(self.config.fallback_character)
            .with_reference_pixel_size(self.config.reference_pixel_size))
    }

    /// Resolve a character in a loaded font, with fallback
    pub fn get_glyph(&self, key: FontKey, character: char) -> FontResult<&Glyph> {
        let font = self.fonts.get(key).ok_or(FontError::InvalidFontHandle)?;
        let table = font.glyph_table();
        let resolve = |c: char| table.lookup(c).and_then(|k| self.glyphs.get(k));

        resolve(character)
            .or_else(|| resolve(self.config.fallback_character))
            .ok_or(FontError::GlyphNotFound(character))
    }

    /// Dispose a font
    ///
    /// Glyphs it materialized from a request are destroyed with it; glyphs
    /// it only referenced stay in the store.
    pub fn dispose_font(&mut self, key: FontKey) -> bool {
        let Some(mut font) = self.fonts.remove(key) else {
            return false;
        };

        let owned = font.take_owned_glyphs();
        for glyph in &owned {
            self.glyphs.remove(*glyph);
        }

        log::debug!("Disposed font {} and {} owned glyphs", font, owned.len());
        true
    }
}

/// Insert payload glyphs and build the font's table
///
/// Inserted glyphs are removed again if the payload turns out invalid.
fn materialize(
    store: &mut GlyphStore,
    data: FontData,
) -> FontResult<(FontName, u32, GlyphTable, Vec<GlyphKey>)> {
    let mut owned = Vec::with_capacity(data.glyphs.len());
    let mut table = GlyphTable::default();

    for glyph in data.glyphs {
        let character = glyph.character();
        let inserted = store
            .insert(glyph)
            .and_then(|key| {
                owned.push(key);
                table.insert(character, key)
            });

        if let Err(e) = inserted {
            for key in owned {
                store.remove(key);
            }
            return Err(e);
        }
    }

    Ok((FontName::new(&data.family_name), data.line_height, table, owned))
}

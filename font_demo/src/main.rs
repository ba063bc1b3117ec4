//! Font layout demo application
//!
//! Requests a synthetic monospace font through an in-memory resolver, polls
//! it to completion the way a frame loop would, then lays out a few strings
//! and logs the resulting geometry.
//!
//! Usage: `font_demo [config.toml|config.ron]`

use fonts::prelude::*;
use std::time::Duration;

/// Simulated frame time for polling
const FRAME: Duration = Duration::from_millis(16);

/// Errors surfaced by the demo
#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    #[error("Font '{0}' did not load (status: {1:?})")]
    NotLoaded(String, RequestStatus),
}

/// Resolver that "parses" after a fixed number of frames
struct SyntheticResolver {
    frames_left: u32,
}

impl FontResolver for SyntheticResolver {
    fn begin(&mut self, address: &str, pixel_size: u32) {
        log::info!("Resolving '{}' at {}px", address, pixel_size);
    }

    fn resolve(&mut self, address: &str, _pixel_size: u32) -> Resolution {
        if self.frames_left > 0 {
            self.frames_left -= 1;
            return Resolution::Pending;
        }

        if address.starts_with("missing/") {
            return Resolution::Failed(format!("no data at '{}'", address));
        }

        Resolution::Ready(monospace_font())
    }
}

/// Printable ASCII, 10px advance, 12px tall with 3px descent
fn monospace_font() -> FontData {
    let glyphs = (' '..='~')
        .map(|character| {
            Glyph::new(
                character,
                FixedVec2::new(10 * 64, 0),
                FixedVec2::new(64, 9 * 64),
                FixedVec2::new(64, 0),
                FixedVec2::new(8 * 64, 12 * 64),
            )
        })
        .collect();

    FontData {
        family_name: "Synthetic Mono".to_string(),
        line_height: 16 * 64,
        glyphs,
    }
}

fn build_library() -> FontLibrary {
    let resolver = || Box::new(SyntheticResolver { frames_left: 3 });
    match std::env::args().nth(1) {
        Some(path) => FontLibrary::from_config_file(&path, resolver()).unwrap_or_else(|e| {
            log::warn!("{}, using defaults", e);
            FontLibrary::new(resolver())
        }),
        None => FontLibrary::new(resolver()),
    }
}

fn wait_for(library: &mut FontLibrary, font: FontKey) -> Result<RequestStatus, FontError> {
    loop {
        let status = library.poll(font, FRAME)?;
        if status.is_terminal() {
            return Ok(status);
        }
    }
}

fn run() -> Result<(), DemoError> {
    let mut library = build_library();
    log::info!("Using config: {:?}", library.config());

    let address = "fonts/synthetic-mono.ttf";
    let font = library.request_default(address)?;
    let status = wait_for(&mut library, font)?;
    if status != RequestStatus::Loaded {
        return Err(DemoError::NotLoaded(address.to_string(), status));
    }

    let view = library.view(font)?;
    log::info!("Loaded {} with {} glyphs", view.font(), view.font().glyph_count());

    for text in ["Hello", "Hello\nWorld", "CRLF\r\nline", "tab\tis fallback"] {
        let geometry = generate_vertices(&view, text)?;
        let bounds = calculate_bounds(&view, text)?;
        log::info!(
            "{:?}: {} vertices, extent ({:.4}, {:.4}), bounds {:.4}x{:.4}",
            text,
            geometry.vertex_count(),
            geometry.max_extent.x,
            geometry.max_extent.y,
            bounds.width(),
            bounds.height()
        );
    }

    let point = Vec2::new(2.1, -0.5);
    match try_index_of(&view, "Hello\nWorld", point)? {
        Some(index) => log::info!("Nearest character to {:?} is index {}", point, index),
        None => log::info!("No character near {:?}", point),
    }

    let missing = library.request_font("missing/font.ttf", 32, Duration::from_millis(100))?;
    let missing_status = wait_for(&mut library, missing)?;
    log::info!("Request for a missing font ended as {:?}", missing_status);
    library.dispose_font(missing);

    Ok(())
}

fn main() {
    fonts::foundation::logging::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

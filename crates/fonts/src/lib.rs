//! # Fonts
//!
//! Font and glyph data model with fixed-point text layout.
//!
//! ## Features
//!
//! - **Glyph Records**: 26.6 fixed-point metrics with per-glyph kerning pairs
//! - **Font Requests**: Non-blocking resolution of fonts by address with timeout
//! - **Text Layout**: Quad vertices, text extent and nearest-character queries
//! - **Shared Glyphs**: Generation-checked glyph handles referenced by many fonts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use fonts::prelude::*;
//! use std::time::Duration;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut library = FontLibrary::new(Box::new(MemoryResolver::new()));
//!     let font = library.request_font("fonts/mono.ttf", 32, Duration::from_secs(2))?;
//!
//!     while library.poll(font, Duration::from_millis(16))? == RequestStatus::Loading {
//!         // keep the event loop running
//!     }
//!
//!     if library.status(font)? == RequestStatus::Loaded {
//!         let view = library.view(font)?;
//!         let geometry = generate_vertices(&view, "Hello\nWorld")?;
//!         println!("{} vertices, extent {:?}", geometry.vertex_count(), geometry.max_extent);
//!     }
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod error;
pub mod glyph;
pub mod font;
pub mod layout;

pub use error::{FontError, FontResult};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        FontError, FontResult,
        config::{Config, FontSystemConfig},
        font::{
            Font, FontData, FontFace, FontKey, FontLibrary, FontMetrics, FontName,
            FontResolver, FontView, MemoryResolver, RequestStatus, Resolution,
        },
        foundation::math::{FixedVec2, PenVec2, Vec2},
        glyph::{Glyph, GlyphKey, GlyphStore, Kerning},
        layout::{
            calculate_bounds, calculate_size, generate_vertices, generate_vertices_into,
            try_index_of, TextBounds, TextGeometry, TextLayout,
        },
    };
}

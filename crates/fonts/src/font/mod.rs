//! Fonts, font requests and the font library
//!
//! A font is a family name, line metrics and a table mapping character
//! codes to glyph keys. Fonts are either built synchronously from existing
//! glyphs or requested by address and resolved asynchronously through a
//! [`FontResolver`].

pub mod name;
pub mod table;
pub mod request;
pub mod record;
pub mod face;
pub mod resolver;
pub mod library;

pub use name::*;
pub use table::*;
pub use request::*;
pub use record::*;
pub use face::*;
pub use resolver::*;
pub use library::*;

pub use crate::foundation::collections::FontKey;

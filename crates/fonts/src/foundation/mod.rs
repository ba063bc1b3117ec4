//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math types (nalgebra aliases)
//! - Fixed-point 26.6 conversion
//! - Generation-checked handles for glyphs and fonts
//! - Logging utilities

pub mod math;
pub mod fixed;
pub mod collections;
pub mod logging;

//! Data models for parsed keymaps, legends, and the physical topology.
//!
//! This module contains the core data structures used throughout the
//! application. Models are independent of parsing and rendering logic.

pub mod glyph;
pub mod keymap;
pub mod topology;

// Re-export all model types
pub use glyph::Glyph;
pub use keymap::{Keymap, Layer};
pub use topology::{KeyShape, PhysicalKey};

//! Preonic Layout Library
//!
//! This library provides core functionality for the Preonic layout renderer,
//! including parsing Kaleidoscope `KEYMAPS(...)` declarations, resolving key
//! tokens to legends, and generating SVG layout cards.

// Module declarations
pub mod constants;
pub mod models;
pub mod parser;
pub mod render;
pub mod theme;

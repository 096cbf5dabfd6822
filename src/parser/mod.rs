//! Parsing of Kaleidoscope sketch sources.

pub mod keymap;

// Re-export the parser entry points
pub use keymap::{find_keymaps_block, parse_keymap_file, parse_keymap_str};

//! Layout and SVG rendering for the parsed keymap.

pub mod icons;
pub mod legend;
pub mod layout;
pub mod metrics;
pub mod svg;

// Re-export the renderer entry points
pub use layout::{build_layout, KeyCell, LayoutModel};
pub use legend::resolve;
pub use svg::render_svg;

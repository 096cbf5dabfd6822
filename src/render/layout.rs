//! Grid layout engine.
//!
//! Zips each display layer's flat token sequence onto the fixed physical
//! topology, producing the per-key, per-layer glyph model the renderer
//! consumes. Layers shorter than the physical key count leave trailing
//! keys empty; layers missing from the keymap render nothing.

use crate::models::{topology, Glyph, Keymap, PhysicalKey};
use crate::render::legend;

/// One physical key with its resolved glyph for every display layer.
///
/// `glyphs` is parallel to [`LayoutModel::layer_names`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyCell {
    /// Position and shape in the fixed topology
    pub key: PhysicalKey,
    /// Resolved legend per display layer, in display order
    pub glyphs: Vec<Glyph>,
}

/// Complete symbolic rendering model: every renderable key with its
/// per-layer legends, in render order.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutModel {
    /// Display layer names, in display order
    pub layer_names: Vec<String>,
    /// Keys in render order (top row first, then the grid row-major)
    pub keys: Vec<KeyCell>,
}

/// Builds the layout model for the given display layers.
///
/// `layer_order` names the layers to overlay, in display order; names
/// absent from the keymap contribute only empty glyphs.
#[must_use]
pub fn build_layout(keymap: &Keymap, layer_order: &[String]) -> LayoutModel {
    let layers: Vec<_> = layer_order.iter().map(|name| keymap.get(name)).collect();

    let keys = topology::preonic()
        .into_iter()
        .map(|key| {
            let glyphs = layers
                .iter()
                .map(|layer| match (key.token_index, layer) {
                    (Some(index), Some(layer)) => layer
                        .token(index)
                        .map_or(Glyph::Empty, legend::resolve),
                    _ => Glyph::Empty,
                })
                .collect();
            KeyCell { key, glyphs }
        })
        .collect();

    LayoutModel {
        layer_names: layer_order.to_vec(),
        keys,
    }
}

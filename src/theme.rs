//! Visual theme configuration.
//!
//! A [`Theme`] holds every spacing, sizing, and color value the renderer
//! consumes, plus the per-layer legend styles. Two built-in presets are
//! provided; custom themes load from TOML files. The renderer is
//! parameterized purely by these fields and never branches on which
//! preset a theme came from.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Corner of the keycap a layer's legends anchor to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Bottom-left corner, start-anchored text
    LowerLeft,
    /// Bottom-right corner, end-anchored text
    LowerRight,
    /// Top-right corner, end-anchored text
    UpperRight,
    /// Top-left corner, start-anchored text
    UpperLeft,
}

impl Anchor {
    /// Right-hand corners end-anchor their text so multi-character
    /// legends do not overflow the key.
    #[must_use]
    pub const fn is_right(self) -> bool {
        matches!(self, Self::LowerRight | Self::UpperRight)
    }
}

/// Legend styling for one display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerStyle {
    /// Layer identifier as written in the sketch (e.g. "QWERTY")
    pub name: String,
    /// Legend color for this layer
    pub color: String,
    /// Keycap corner this layer's legends anchor to
    pub anchor: Anchor,
}

impl LayerStyle {
    /// Creates a layer style.
    pub fn new(name: impl Into<String>, color: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            anchor,
        }
    }

    /// Lowercase identifier used by layer-shift keys to reference this
    /// layer (e.g. "fun" for the FUN layer).
    #[must_use]
    pub fn slug(&self) -> String {
        self.name.to_lowercase()
    }
}

/// Complete visual configuration for one rendering run.
///
/// Immutable after construction; both presets and TOML-loaded themes go
/// through the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Keycap width in user units
    pub key_width: f32,
    /// Keycap height in user units
    pub key_height: f32,
    /// Gap between adjacent keys
    pub key_gap: f32,
    /// Outer padding around the board
    pub padding: f32,
    /// Legend font size
    pub text_size: f32,
    /// Inset of legends from their anchor corner
    pub legend_offset: f32,
    /// Gap between an icon and its trailing text
    pub icon_text_offset: f32,
    /// Scale factor applied to icon markup
    pub icon_scale: f32,
    /// Overall document scale factor
    pub scale: f32,
    /// Stroke width of keycap outlines
    pub stroke_width: f32,
    /// Stroke width of icon legends
    pub legend_stroke_width: f32,
    /// Document background color
    pub background: String,
    /// Fill of the rounded board plate
    pub board_fill: String,
    /// Primary text color (fixed legends, knob icon)
    pub text: String,
    /// De-emphasized text color (knob arc label)
    pub muted: String,
    /// Keycap outline stroke color
    pub stroke: String,
    /// Whether the decorative butterfly branding is drawn
    pub show_branding: bool,
    /// Display layers in overlay order
    pub layers: Vec<LayerStyle>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::stickers()
    }
}

impl Theme {
    /// Dark preset matching the printed keycap stickers: black
    /// background, bright legends, branding on.
    #[must_use]
    pub fn stickers() -> Self {
        Self {
            key_width: 32.0,
            key_height: 32.0,
            key_gap: 10.0,
            padding: 30.0,
            text_size: 6.25,
            legend_offset: 3.0,
            icon_text_offset: 2.0,
            icon_scale: 0.3,
            scale: 1.33,
            stroke_width: 0.7,
            legend_stroke_width: 2.0,
            background: "#000000".to_string(),
            board_fill: "#111111".to_string(),
            text: "#ffffff".to_string(),
            muted: "#888888".to_string(),
            stroke: "#333333".to_string(),
            show_branding: true,
            layers: vec![
                LayerStyle::new("QWERTY", "#ffffff", Anchor::LowerLeft),
                LayerStyle::new("LOWER", "#66b3ff", Anchor::LowerRight),
                LayerStyle::new("RAISE", "#ff944d", Anchor::UpperRight),
                LayerStyle::new("FUN", "#66ff66", Anchor::UpperLeft),
            ],
        }
    }

    /// Light preset for printable layout cards: white background, muted
    /// legends, branding off. Geometry matches the stickers preset.
    #[must_use]
    pub fn layout_card() -> Self {
        Self {
            background: "#ffffff".to_string(),
            board_fill: "#f7f7f2".to_string(),
            text: "#222222".to_string(),
            muted: "#777777".to_string(),
            stroke: "#999999".to_string(),
            show_branding: false,
            layers: vec![
                LayerStyle::new("QWERTY", "#222222", Anchor::LowerLeft),
                LayerStyle::new("LOWER", "#2a6fbb", Anchor::LowerRight),
                LayerStyle::new("RAISE", "#c06a1f", Anchor::UpperRight),
                LayerStyle::new("FUN", "#2f8f2f", Anchor::UpperLeft),
            ],
            ..Self::stickers()
        }
    }

    /// Looks up a built-in preset by name.
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "stickers" => Some(Self::stickers()),
            "layout-card" => Some(Self::layout_card()),
            _ => None,
        }
    }

    /// Loads a theme from a TOML file. Missing fields fall back to the
    /// stickers preset values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse theme file: {}", path.display()))
    }

    /// Legend color for the layer with the given slug, if it is themed.
    #[must_use]
    pub fn layer_color(&self, slug: &str) -> Option<&str> {
        self.layers
            .iter()
            .find(|layer| layer.slug() == slug)
            .map(|layer| layer.color.as_str())
    }

    /// Display layer names in overlay order.
    #[must_use]
    pub fn layer_order(&self) -> Vec<String> {
        self.layers.iter().map(|layer| layer.name.clone()).collect()
    }
}

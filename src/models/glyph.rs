//! Resolved legend forms for a single key on a single layer.

/// Renderable form of one key token after legend resolution.
///
/// Resolution is a total function: every token string maps to exactly one
/// variant. Sentinels (`___`, `XXX`, empty) become [`Glyph::Empty`] and
/// unknown tokens degrade to [`Glyph::Text`] rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glyph {
    /// Transparent key, nothing is rendered
    Empty,
    /// Plain text legend
    Text(String),
    /// Hand-authored vector path markup
    Icon(String),
    /// Icon followed by a short text legend
    IconText {
        /// Vector path markup for the icon part
        icon: String,
        /// Text placed next to the icon
        text: String,
    },
    /// Key that switches to another layer
    LayerRef {
        /// Title-cased display label (e.g. "Fun")
        label: String,
        /// Lowercase slug of the referenced layer (e.g. "fun"), used to
        /// pick up the destination layer's legend color
        layer: String,
    },
}

impl Glyph {
    /// Returns `true` when nothing is rendered for this glyph.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

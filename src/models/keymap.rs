//! Parsed keymap artifacts: named layers and their ordered key tokens.

/// One named layer from a `KEYMAPS(...)` declaration.
///
/// Tokens are kept in source order; a token's position in the sequence
/// determines which physical key it lands on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Layer identifier from the `[NAME] = KEYMAP` clause (e.g. "QWERTY")
    pub name: String,
    /// Raw key token expressions in source order
    pub tokens: Vec<String>,
}

impl Layer {
    /// Creates an empty layer with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tokens: Vec::new(),
        }
    }

    /// Gets the token at a sequence position, if the layer is long enough.
    #[must_use]
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }
}

/// All layers extracted from one keymap declaration, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keymap {
    /// Layers in declaration order
    pub layers: Vec<Layer>,
}

impl Keymap {
    /// Looks up a layer by its identifier.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Layer identifiers in declaration order.
    #[must_use]
    pub fn layer_names(&self) -> Vec<&str> {
        self.layers.iter().map(|layer| layer.name.as_str()).collect()
    }
}

//! Fixed physical topology of the Keyboardio Preonic.
//!
//! The device has a short top row (two standard keys under the display
//! plus a rotary volume knob) above a 5×12 ortho grid with a double-wide
//! space bar and two homing keys. The topology is expressed as a
//! declarative table consumed uniformly by the layout engine and the
//! renderer; no special-case positions are hard-coded elsewhere.

// Row and column values fit comfortably in u8
#![allow(clippy::cast_possible_truncation)]

/// Number of token slots the keymap macro assigns to the top row.
pub const TOP_ROW_TOKENS: usize = 5;

/// Main grid row count.
pub const GRID_ROWS: usize = 5;

/// Main grid column count.
pub const GRID_COLS: usize = 12;

/// Token count of a complete layer (top row plus main grid).
pub const LAYER_TOKENS: usize = TOP_ROW_TOKENS + GRID_ROWS * GRID_COLS;

/// Keycap outline variant for one physical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyShape {
    /// Regular 1u DSA keycap
    Standard,
    /// 1u keycap with a homing bar (F/J positions)
    Homing,
    /// 2u space bar spanning two grid columns
    DoubleWide,
    /// Rotary volume control with fixed decoration, not driven by layers
    RotaryControl,
}

/// Position and shape of one renderable key in the fixed topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalKey {
    /// Render row (0 = top row, 1..=5 = main grid)
    pub row: u8,
    /// Render column (0..=11)
    pub col: u8,
    /// Keycap outline variant
    pub shape: KeyShape,
    /// Position in a layer's flat token sequence, `None` for keys whose
    /// rendering is fixed decoration (the knob)
    pub token_index: Option<usize>,
}

impl PhysicalKey {
    const fn new(row: u8, col: u8, shape: KeyShape, token_index: Option<usize>) -> Self {
        Self {
            row,
            col,
            shape,
            token_index,
        }
    }
}

/// Builds the Preonic key table in render order (top row, then the main
/// grid row-major).
///
/// Token indexing is positional: top-row slots 0..5 sit at virtual
/// columns 7..=11, and main-grid index = 5 + row*12 + col. Columns 7 and
/// 8 of the top row are covered by the rotary display and absorb indices
/// 0 and 1 without producing a key; the knob at column 11 absorbs index
/// 4. The space bar's first half (grid row 4, column 5) is the one
/// `DoubleWide` key; its second half (column 6) absorbs its index and is
/// suppressed entirely.
#[must_use]
pub fn preonic() -> Vec<PhysicalKey> {
    let mut keys = Vec::with_capacity(62);

    keys.push(PhysicalKey::new(0, 9, KeyShape::Standard, Some(2)));
    keys.push(PhysicalKey::new(0, 10, KeyShape::Standard, Some(3)));
    keys.push(PhysicalKey::new(0, 11, KeyShape::RotaryControl, None));

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            if row == 4 && col == 6 {
                // Second half of the space bar, merged into column 5
                continue;
            }
            let shape = if row == 4 && col == 5 {
                KeyShape::DoubleWide
            } else if row == 2 && (col == 4 || col == 7) {
                KeyShape::Homing
            } else {
                KeyShape::Standard
            };
            let index = TOP_ROW_TOKENS + row * GRID_COLS + col;
            keys.push(PhysicalKey::new(
                (row + 1) as u8,
                col as u8,
                shape,
                Some(index),
            ));
        }
    }

    keys
}

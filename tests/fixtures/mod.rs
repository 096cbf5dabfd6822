//! Shared test fixtures for E2E tests.
#![allow(dead_code)] // Some fixtures reserved for future tests

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Number of tokens one full layer carries (5 top-row + 5x12 grid).
pub const LAYER_TOKENS: usize = 65;

/// A full 65-token QWERTY layer in the order the firmware declares it.
pub fn qwerty_tokens() -> Vec<String> {
    let mut tokens: Vec<String> = Vec::with_capacity(LAYER_TOKENS);

    // Top function row; the first two and the last slot sit under the
    // display area and the volume knob.
    tokens.extend(to_owned(&[
        "___",
        "___",
        "Consumer_PlaySlashPause",
        "Key_LEDEffectNext",
        "___",
    ]));

    // Number row
    tokens.extend(to_owned(&[
        "Key_Backtick",
        "Key_1",
        "Key_2",
        "Key_3",
        "Key_4",
        "Key_5",
        "Key_6",
        "Key_7",
        "Key_8",
        "Key_9",
        "Key_0",
        "Key_Minus",
    ]));

    // Top letter row
    tokens.extend(to_owned(&[
        "Key_Tab",
        "Key_Q",
        "Key_W",
        "Key_E",
        "Key_R",
        "Key_T",
        "Key_Y",
        "Key_U",
        "Key_I",
        "Key_O",
        "Key_P",
        "Key_Backspace",
    ]));

    // Home row
    tokens.extend(to_owned(&[
        "Key_Escape",
        "Key_A",
        "Key_S",
        "Key_D",
        "Key_F",
        "Key_G",
        "Key_H",
        "Key_J",
        "Key_K",
        "Key_L",
        "Key_Semicolon",
        "Key_Quote",
    ]));

    // Bottom letter row
    tokens.extend(to_owned(&[
        "Key_LeftShift",
        "Key_Z",
        "Key_X",
        "Key_C",
        "Key_V",
        "Key_B",
        "Key_N",
        "Key_M",
        "Key_Comma",
        "Key_Period",
        "Key_Slash",
        "Key_Enter",
    ]));

    // Thumb row; indices 58 and 59 merge into the double-wide bar
    tokens.extend(to_owned(&[
        "Key_Hyper",
        "Key_LeftControl",
        "Key_LeftAlt",
        "Key_LeftGui",
        "ShiftToLayer(FUN)",
        "Key_Space",
        "Key_Backspace",
        "ShiftToLayer(LOWER)",
        "ShiftToLayer(RAISE)",
        "Key_LeftArrow",
        "Key_DownArrow",
        "Key_RightArrow",
    ]));

    assert_eq!(tokens.len(), LAYER_TOKENS);
    tokens
}

/// A 65-token layer that is `___` everywhere except the given overrides.
pub fn sparse_tokens(overrides: &[(usize, &str)]) -> Vec<String> {
    let mut tokens = vec!["___".to_string(); LAYER_TOKENS];
    for (index, token) in overrides {
        tokens[*index] = (*token).to_string();
    }
    tokens
}

/// Wraps the given layers into a minimal but realistic sketch source,
/// formatted the way the firmware formats its keymap: one layer header
/// line, grid rows on their own lines, and a `),` closing line.
pub fn sketch_source(layers: &[(&str, Vec<String>)]) -> String {
    let mut source = String::from(
        "// Minimal test sketch\n#include \"Kaleidoscope.h\"\n\nKEYMAPS(\n",
    );
    for (name, tokens) in layers {
        source.push_str(&format!("  [{name}] = KEYMAP(\n"));
        let (top_row, grid) = tokens.split_at(tokens.len().min(5));
        source.push_str("    ");
        source.push_str(&top_row.join(", "));
        source.push_str(",\n");
        for row in grid.chunks(12) {
            source.push_str("    ");
            source.push_str(&row.join(", "));
            source.push_str(",\n");
        }
        source.push_str("  ),\n");
    }
    source.push_str(");\n\nvoid setup() {\n  Kaleidoscope.setup();\n}\n");
    source
}

/// Writes sketch source to a temp .ino file.
///
/// # Returns
/// The file path and the `TempDir` guard keeping it alive.
pub fn create_temp_sketch(source: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("Preonic.ino");
    fs::write(&path, source).expect("Failed to write sketch file");
    (path, temp_dir)
}

fn to_owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| (*t).to_string()).collect()
}

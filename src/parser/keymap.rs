//! Kaleidoscope keymap parsing.
//!
//! This module extracts the `KEYMAPS(...)` macro invocation from a sketch
//! source file and splits it into named layers of raw key tokens. Tokens
//! are comma-separated at parenthesis depth zero, so parameterized keys
//! like `LSHIFT(Key_1)` or `M(MACRO_BT_PAIR)` stay intact.

use crate::constants::APP_BINARY_NAME;
use crate::models::{Keymap, Layer};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// Parses the keymap declaration from a sketch file.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - No `KEYMAPS(...)` declaration in the source
pub fn parse_keymap_file(path: &Path) -> Result<Keymap> {
    // Check if file exists first to provide better error message
    if !path.exists() {
        anyhow::bail!(
            "Sketch file not found: {}\n\n\
             Please check the file path and try again.\n\
             Usage example: {} Preonic.ino",
            path.display(),
            APP_BINARY_NAME
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sketch file: {}", path.display()))?;

    parse_keymap_str(&content)
        .with_context(|| format!("Failed to parse keymap from: {}", path.display()))
}

/// Returns the argument text of the `KEYMAPS(...)` invocation, or `None`
/// when the source contains no keymap declaration.
#[must_use]
pub fn find_keymaps_block(content: &str) -> Option<&str> {
    // Fixed pattern, cannot fail to compile
    let keymaps = Regex::new(r"(?s)KEYMAPS\((.*?)\);").unwrap();
    keymaps
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Parses a keymap declaration from sketch source text.
///
/// A line matching `[NAME] = KEYMAP` opens a new layer and the rest of
/// that line is discarded. Other non-blank lines are tokenized onto the
/// currently open layer. Lines containing `//` are skipped wholesale:
/// inline trailing comments after real tokens are not supported, which is
/// a documented limitation of the format.
///
/// # Errors
///
/// Returns an error when the source has no `KEYMAPS(...)` declaration.
pub fn parse_keymap_str(content: &str) -> Result<Keymap> {
    let Some(block) = find_keymaps_block(content) else {
        anyhow::bail!("No KEYMAPS(...) declaration found in sketch source");
    };

    let layer_open = Regex::new(r"^\s*\[(\w+)\]\s*=\s*KEYMAP").unwrap();
    let mut keymap = Keymap::default();

    for line in block.split('\n') {
        // Check for layer definition
        if let Some(caps) = layer_open.captures(line) {
            keymap.layers.push(Layer::new(&caps[1]));
            continue;
        }

        // Skip lines outside any layer, blank lines, and comment lines
        if line.trim().is_empty() || line.contains("//") {
            continue;
        }
        let Some(current) = keymap.layers.last_mut() else {
            continue;
        };

        current.tokens.extend(tokenize_line(line.trim()));
    }

    Ok(keymap)
}

/// Splits one source line into key tokens.
///
/// Commas separate tokens only at parenthesis depth zero; parentheses
/// inside a token are retained as part of its text. A `(` seen with no
/// token underway opens the surrounding argument list and is dropped.
/// Blank results and structural leftovers (`(`, `)`, the `KEYMAP`
/// sentinel) are filtered out.
fn tokenize_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0i32;

    for ch in line.chars() {
        match ch {
            '(' if current.is_empty() => {}
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth -= 1;
                current.push(ch);
                if depth == 0 {
                    tokens.push(current.trim().to_string());
                    current.clear();
                }
            }
            ',' if depth == 0 => {
                if !current.is_empty() {
                    tokens.push(current.trim().to_string());
                }
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current.trim().to_string());
    }

    tokens.retain(|t| !t.is_empty() && t != "(" && t != ")" && t != "KEYMAP");
    tokens
}

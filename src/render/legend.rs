//! Key token to legend resolution.
//!
//! [`resolve`] maps every raw key token to exactly one [`Glyph`]. The
//! precedence is fixed: sentinels, layer-shift keys, shifted characters,
//! the fixed mapping table, single-character keys, then a prefix-stripping
//! fallback. The fallback guarantees the function is total; resolution
//! never fails on an unknown token.

use crate::models::Glyph;
use crate::render::icons::{self, MouseButton, Quadrant};
use regex::Regex;

/// Resolves a raw key token to its renderable legend.
///
/// Pure and deterministic: the result depends only on the token text and
/// the fixed tables below.
#[must_use]
pub fn resolve(token: &str) -> Glyph {
    let token = token.trim();

    if token.is_empty() || token == "___" || token == "XXX" {
        return Glyph::Empty;
    }

    if let Some(glyph) = layer_shift(token) {
        return glyph;
    }

    if let Some(glyph) = shifted_character(token) {
        return glyph;
    }

    if let Some(glyph) = fixed_mapping(token) {
        return glyph;
    }

    // Single letters and numbers: Key_A -> "A"
    if token.starts_with("Key_") && token.len() == 5 {
        return Glyph::Text(token[4..].to_string());
    }

    Glyph::Text(strip_known_affixes(token))
}

/// Matches `ShiftToLayer(NAME)` (whitespace-insensitive) into a layer
/// reference carrying the title-cased label and the lowercase slug.
fn layer_shift(token: &str) -> Option<Glyph> {
    let squeezed = token.replace(' ', "");
    // Fixed pattern, cannot fail to compile
    let shift_to_layer = Regex::new(r"^ShiftToLayer\((\w+)\)").unwrap();
    let caps = shift_to_layer.captures(&squeezed)?;
    let name = &caps[1];

    Some(Glyph::LayerRef {
        label: title_case(name),
        layer: name.to_lowercase(),
    })
}

/// Matches `LSHIFT(Key_X)` against the shifted-character table. Keys not
/// in the table render as a shift arrow plus the base key name.
fn shifted_character(token: &str) -> Option<Glyph> {
    let lshift = Regex::new(r"^LSHIFT\(Key_(.+?)\)").unwrap();
    let caps = lshift.captures(token)?;
    let base = &caps[1];

    let shifted = match base {
        "1" => "!",
        "2" => "@",
        "3" => "#",
        "4" => "$",
        "5" => "%",
        "6" => "^",
        "7" => "&",
        "8" => "*",
        "9" => "(",
        "0" => ")",
        "Minus" => "_",
        "Equals" => "+",
        "LeftBracket" => "{",
        "RightBracket" => "}",
        "Backslash" => "|",
        "Semicolon" => ":",
        "Quote" => "\"",
        "Comma" => "<",
        "Period" => ">",
        "Slash" => "?",
        "Backtick" => "~",
        _ => return Some(Glyph::Text(format!("⇧{base}"))),
    };

    Some(Glyph::Text(shifted.to_string()))
}

fn text(value: &str) -> Glyph {
    Glyph::Text(value.to_string())
}

fn icon_text(icon: String, value: &str) -> Glyph {
    Glyph::IconText {
        icon,
        text: value.to_string(),
    }
}

/// Exact-match table for navigation, editing, modifier, media, mouse and
/// macro tokens. Icon entries reference the hand-authored path tables.
fn fixed_mapping(token: &str) -> Option<Glyph> {
    let glyph = match token {
        "Key_LeftArrow" => text("←"),
        "Key_RightArrow" => text("→"),
        "Key_UpArrow" => text("↑"),
        "Key_DownArrow" => text("↓"),
        "Key_Backspace" => text("Bksp"),
        "Key_Enter" => text("Enter"),
        "Key_Escape" => text("Esc"),
        "Key_Delete" => text("Del"),
        "Key_LeftControl" => text("Ctrl"),
        "Key_LeftAlt" => text("Alt"),
        "Key_RightAlt" => text("AltGr"),
        "Key_LeftGui" => text("Cmd"),
        "Key_Space" => text("Space"),
        "Key_Tab" => text("Tab"),
        "Key_Star" => text("*"),
        "Key_Plus" => text("+"),
        "Key_Backtick" => text("`"),
        "Key_Semicolon" => text(";"),
        "Key_Quote" => text("'"),
        "Key_Comma" => text(","),
        "Key_Period" => text("."),
        "Key_Slash" => text("/"),
        "Key_Equals" => text("="),
        "Key_Minus" => text("-"),
        "Key_LeftBracket" => text("["),
        "Key_RightBracket" => text("]"),
        "Key_Backslash" => text("\\"),
        "Key_CapsLock" => text("Caps"),
        "Key_LeftShift" => text("Shift"),
        "Consumer_ScanNextTrack" => Glyph::Icon(icons::next_track()),
        "Consumer_ScanPreviousTrack" => Glyph::Icon(icons::prev_track()),
        "Consumer_Mute" => Glyph::Icon(icons::mute()),
        "Consumer_VolumeIncrement" => Glyph::Icon(icons::volume_up()),
        "Consumer_VolumeDecrement" => Glyph::Icon(icons::volume_down()),
        "Key_mouseBtnL" => Glyph::Icon(icons::mouse_button(MouseButton::Left)),
        "Key_mouseBtnM" => Glyph::Icon(icons::mouse_button(MouseButton::Middle)),
        "Key_mouseBtnR" => Glyph::Icon(icons::mouse_button(MouseButton::Right)),
        "Key_mouseWarpNW" => Glyph::Icon(icons::warp(Quadrant::NorthWest)),
        "Key_mouseWarpNE" => Glyph::Icon(icons::warp(Quadrant::NorthEast)),
        "Key_mouseWarpSW" => Glyph::Icon(icons::warp(Quadrant::SouthWest)),
        "Key_mouseWarpSE" => Glyph::Icon(icons::warp(Quadrant::SouthEast)),
        "Key_mouseWarpEnd" => Glyph::Icon(icons::warp_end()),
        "Key_mouseUp" => icon_text(icons::mouse(), "↑"),
        "Key_mouseDown" => icon_text(icons::mouse(), "↓"),
        "Key_mouseLeft" => icon_text(icons::mouse(), "←"),
        "Key_mouseRight" => icon_text(icons::mouse(), "→"),
        "Key_mouseL" => icon_text(icons::mouse(), "←"),
        "Key_mouseDn" => icon_text(icons::mouse(), "↓"),
        "Key_mouseR" => icon_text(icons::mouse(), "→"),
        "Key_LEDEffectNext" => Glyph::Icon(icons::led_effect()),
        "M(MACRO_BT_OFF)" => Glyph::Icon(icons::usb()),
        "M(MACRO_BT_SELECT_1)" => icon_text(icons::bluetooth(), "1"),
        "M(MACRO_BT_SELECT_2)" => icon_text(icons::bluetooth(), "2"),
        "M(MACRO_BT_SELECT_3)" => icon_text(icons::bluetooth(), "3"),
        "M(MACRO_BT_SELECT_4)" => icon_text(icons::bluetooth(), "4"),
        "M(MACRO_BT_PAIR)" => Glyph::Icon(icons::bluetooth_pair()),
        "M(MACRO_FLASH_ERASE)" => text("⚡"),
        "M(MACRO_ANY)" => text("Any"),
        "Key_Hyper" => text("Hyper"),
        "Key_ToggleKeyclick" => Glyph::Icon(icons::keyclick()),
        _ => return None,
    };

    Some(glyph)
}

/// Fallback for tokens no other rule claims: strip the known prefixes
/// (`Key_`, `Consumer_`, `M(MACRO_`) and a trailing `)` and show the rest.
fn strip_known_affixes(token: &str) -> String {
    let mut rest = token;
    for prefix in ["Key_", "Consumer_", "M(MACRO_"] {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
        }
    }
    rest.strip_suffix(')').unwrap_or(rest).to_string()
}

/// Title-cases an identifier the way the layer labels are displayed:
/// letters following a non-letter are uppercased, the rest lowered
/// ("FUN" -> "Fun", "FN_KEYS" -> "Fn_Keys").
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut prev_alpha = false;

    for ch in name.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }

    out
}

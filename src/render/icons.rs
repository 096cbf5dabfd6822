//! Hand-authored vector icon markup for special keys.
//!
//! Each builder returns the inner SVG markup for one icon, drawn on a
//! nominal 24x24 canvas with `currentColor`-style stroking applied by
//! the renderer. The paths are fixed literals; composition (mouse button
//! bars, warp quadrants) is the only logic here.

use crate::render::metrics;

/// Mouse button positions for the button-bar overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Middle button / wheel
    Middle,
    /// Right button
    Right,
}

/// Screen quadrants for mouse warp keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quadrant {
    /// Top-left quadrant
    NorthWest,
    /// Top-right quadrant
    NorthEast,
    /// Bottom-left quadrant
    SouthWest,
    /// Bottom-right quadrant
    SouthEast,
}

/// Plain mouse outline with tail.
#[must_use]
pub fn mouse() -> String {
    r#"<path d="m6.0006 9.9714v10c0 4 12 4 12 0v-10s0-4-6-4c-6 0-6 4-6 4z"/>
<path d="m11.656 6.8328s0-3 1-4 2-2-1-2" stroke-width="1.5"/>"#
        .to_string()
}

/// Mouse outline with one button highlighted.
#[must_use]
pub fn mouse_button(button: MouseButton) -> String {
    let button_x = match button {
        MouseButton::Left => 8.0,
        MouseButton::Middle => 11.25,
        MouseButton::Right => 14.5,
    };
    format!(
        "<g transform=\"translate(-4,0)\">\n{}\n<rect x=\"{button_x}\" y=\"8\" width=\"1.5\" height=\"5\" fill=\"currentColor\" opacity=\"1\"/>\n</g>",
        mouse()
    )
}

/// Bluetooth rune.
#[must_use]
pub fn bluetooth() -> String {
    r#"<path d="M7.32,8.1l9.35,7.8-4.68,3.9V4.2l4.68,3.9-9.35,7.8"/>"#.to_string()
}

/// Bluetooth rune struck through.
#[must_use]
pub fn bluetooth_off() -> String {
    bluetooth() + r#"<path d="M4,4 L20,20" stroke="currentColor" stroke-width="2"/>"#
}

/// Bluetooth rune with a pairing loupe.
#[must_use]
pub fn bluetooth_pair() -> String {
    r#"<g transform="translate(0,0)">
    <path d="M7.32,8.1l9.35,7.8-4.68,3.9V4.2l4.68,3.9-9.35,7.8"/>
    <path d="M28,9 a5,5 0 1,0 10,0 a5,5 0 1,0 -10,0 M28,12 L22,17" />
</g>"#
        .to_string()
}

/// Speaker with two sound waves.
#[must_use]
pub fn volume_up() -> String {
    r#"<path d="M12,7 L12,17 L7,13 L4,13 L4,11 L7,11 L12,7 Z" rx="1"/>
<path d="M15,9 C17,11 17,13 15,15" rx="0.5"/>
<path d="M17,7 C20,10 20,14 17,17" rx="0.5"/>"#
        .to_string()
}

/// Speaker with one sound wave.
#[must_use]
pub fn volume_down() -> String {
    r#"<path d="M12,7 L12,17 L7,13 L4,13 L4,11 L7,11 L12,7 Z" rx="1"/>
<path d="M15,9 C17,11 17,13 15,15" rx="0.5"/>"#
        .to_string()
}

/// Speaker with a strike cross.
#[must_use]
pub fn mute() -> String {
    r#"<path d="M12,7 L12,17 L7,13 L4,13 L4,11 L7,11 L12,7 Z" rx="1"/>
<line x1="15" y1="9" x2="20" y2="15"/>
<line x1="20" y1="9" x2="15" y2="15"/>"#
        .to_string()
}

/// Previous-track transport symbol.
#[must_use]
pub fn prev_track() -> String {
    r#"<path d="m6.2286 6v12" stroke-linecap="round"/>
<path rx="1" d="m18.8 6-9 6 9 6z" stroke-linejoin="round"/>"#
        .to_string()
}

/// Next-track transport symbol.
#[must_use]
pub fn next_track() -> String {
    r#"<path d="m18.8 6v12" stroke-linecap="round"/>
<path rx="1" d="m6.2286 6 9 6-9 6z" stroke-linejoin="round"/>"#
        .to_string()
}

/// Sun burst for the LED effect key.
#[must_use]
pub fn led_effect() -> String {
    r#"<circle cx="12" cy="12" r="5"/>
<path d="M12,3 L12,7 M21,12 L17,12 M12,21 L12,17 M3,12 L7,12"/>
<path d="M18.4,5.6 L15.6,8.4 M18.4,18.4 L15.6,15.6 M5.6,18.4 L8.4,15.6 M5.6,5.6 L8.4,8.4" stroke-width="1.5"/>"#
        .to_string()
}

/// Play/pause transport symbol (used on the volume knob).
#[must_use]
pub fn play_pause() -> String {
    r#"<g stroke-linecap="round" stroke-linejoin="round">
<path rx="1" d="m7 6v12l7-6z"/>
<path d="m16.2 6v12m3-12v12"/>
</g>"#
        .to_string()
}

/// Key with sound waves for the keyclick toggle.
#[must_use]
pub fn keyclick() -> String {
    r#"<rect x="6" y="8" width="8" height="8" rx="1"/>
<path d="M16,10 C18,12 18,12 16,14" stroke-width="1.5"/>
<path d="M18,8 C21,12 21,12 18,16" stroke-width="1.5"/>"#
        .to_string()
}

/// USB plug for the wired-mode macro.
#[must_use]
pub fn usb() -> String {
    r#"<path d="M8,4 L16,4 L16,8 L18,8 L18,16 L14,16 L14,20 L10,20 L10,16 L6,16 L6,8 L8,8 Z" rx="1"/>
<path d="M10,4 L10,8 M14,4 L14,8" stroke-width="1"/>"#
        .to_string()
}

/// Mouse next to a screen with one quadrant filled.
#[must_use]
pub fn warp(quadrant: Quadrant) -> String {
    let fill = match quadrant {
        Quadrant::NorthWest => "M4,4 L12,4 L12,12 L4,12 Z",
        Quadrant::NorthEast => "M12,4 L20,4 L20,12 L12,12 Z",
        Quadrant::SouthWest => "M4,12 L12,12 L12,20 L4,20 Z",
        Quadrant::SouthEast => "M12,12 L20,12 L20,20 L12,20 Z",
    };
    let mouse_width = metrics::path_width(&mouse());
    format!(
        "<g transform=\"translate({},0)\">\n{}\n</g>\n<g transform=\"translate(6,0)\">\n<rect x=\"4\" y=\"4\" width=\"16\" height=\"16\" rx=\"1\" fill=\"none\"/>\n<path d=\"{fill}\" fill=\"currentColor\"/>\n</g>",
        -mouse_width,
        mouse()
    )
}

/// Mouse next to an empty screen, ends warp mode.
#[must_use]
pub fn warp_end() -> String {
    let mouse_width = metrics::path_width(&mouse());
    format!(
        "<g transform=\"translate({},0)\">\n{}\n</g>\n<g transform=\"translate(6,0)\">\n<rect x=\"4\" y=\"4\" width=\"16\" height=\"16\" fill=\"none\"/>\n</g>",
        -mouse_width,
        mouse()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icons_have_measurable_extents() {
        for icon in [
            mouse(),
            bluetooth(),
            volume_up(),
            prev_track(),
            play_pause(),
            usb(),
        ] {
            assert!(metrics::path_width(&icon) > 0.0);
        }
    }

    #[test]
    fn test_mouse_button_positions_differ() {
        let left = mouse_button(MouseButton::Left);
        let right = mouse_button(MouseButton::Right);
        assert_ne!(left, right);
        assert!(left.contains("x=\"8\""));
        assert!(right.contains("x=\"14.5\""));
    }

    #[test]
    fn test_warp_quadrants_fill_distinct_regions() {
        let quadrants = [
            Quadrant::NorthWest,
            Quadrant::NorthEast,
            Quadrant::SouthWest,
            Quadrant::SouthEast,
        ];
        let rendered: Vec<String> = quadrants.iter().map(|q| warp(*q)).collect();
        for (i, a) in rendered.iter().enumerate() {
            for b in &rendered[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

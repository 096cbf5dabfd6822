//! SVG document assembly.
//!
//! Walks the layout model in render order and emits one self-contained
//! SVG document. All colors, spacing, and sizing come from the [`Theme`];
//! the only shape decisions made here are which keycap outline a key's
//! [`KeyShape`] selects and which corner a layer's legends anchor to.

use crate::render::layout::LayoutModel;
use crate::render::{icons, metrics};
use crate::models::{Glyph, KeyShape, PhysicalKey};
use crate::theme::{Anchor, Theme};
use std::fmt::Write;

/// Standard DSA keycap outline, 32x32 with rounded organic corners.
const DSA_KEY: &str = "M31.98,28.85c-.16,1.71-1.36,2.98-3.09,3.12-3.97.37-8.43.59-12.42.6h-.02c-4.13-.02-8.31-.2-12.42-.6h.03c-1.7-.16-2.99-1.36-3.11-3.09h-.01c-.37-3.97-.6-8.43-.59-12.42-.01-4.14.18-8.32.6-12.43v.03c.17-1.72,1.33-2.95,3.08-3.11h0c4.13-.4,8.28-.6,12.43-.6h0c4.13,0,8.31.19,12.42.6h-.03c1.68.12,3.02,1.39,3.1,3.09h.02c.4,4.12.6,8.26.6,12.41h-.01c0,4.14-.18,8.32-.6,12.43";

/// Two-unit spacebar outline.
const SPACE_KEY: &str = "M85.31.35H1.12h0c-.68-.04-.8.45-.78,1.04.71,10.07.76,20.54,0,30.61,0,.35-.02.71.15,1.01.15.18.39.24.63.22h0c.62-.21,84.4.4,84.81-.21.12-.23.17-.5.16-.78-.3-4.31-.51-9.43-.55-13.76-.04-5.49.17-11.62.55-17.1,0-.29-.03-.59-.17-.82-.16-.17-.38-.22-.63-.21";

/// Homing keycap outline with a deeper dish.
const HOMING_KEY: &str = "M28.1,30.72c1.35-.18,2.39-1.24,2.57-2.58h0c1.4-7.96,1.43-16.19,0-24.16h0c-.17-1.32-1.21-2.38-2.55-2.55h.01c-3.98-.73-8.04-1.07-12.09-1.08h.02c-4.06-.02-8.13.34-12.12,1.08h.03c-1.33.18-2.4,1.22-2.55,2.57h0C-.01,11.96,0,20.19,1.41,28.16h0c.18,1.32,1.21,2.38,2.55,2.55h-.01c7.97,1.44,16.23,1.47,24.19,0";

/// Rotary volume knob outline.
const KNOB: &str = "M39.45,19.9C39.45,9.1,30.7.35,19.9.35S.35,9.1.35,19.9s8.75,19.55,19.55,19.55,19.55-8.75,19.55-19.55";

/// Butterfly logo path data, drawn at 1/36 scale inside the top-left
/// vacant area. Entries are (transform attribute, path data); the two
/// antennae carry rotation matrices.
const BUTTERFLY: [(&str, &str); 7] = [
    ("", "M422.6 261.1c-21.2 0-38.7 35-38.7 95.2 0 60.3 15.6 188.3 38.7 188.3 23.1 0 38.7-128 38.7-188.3 0-60.3-17.5-95.2-38.7-95.2"),
    (
        " transform=\"matrix(.8869 -.4619 .4619 .8869 -55.651 199.1881)\"",
        "M369.5 176.6h19v73.4h-19z",
    ),
    (
        " transform=\"matrix(.4618 -.887 .887 .4618 61.4743 527.8238)\"",
        "M429 203.8h73.4v19H429z",
    ),
    ("", "M58 90.4C17.2 80.7-6.2 105.3 1.2 154c15.5 101.9 52 164.5 129.9 183.5 59.3 14.4 221.8 20 221.8 20-33.3-162.4-195.1-243.4-294.9-267.1"),
    ("", "M355 389.5s-71.1-5.6-119-1.6c-61 5.1-98 25.6-98 96.2 0 103.5 99.5 150.2 150.4 147.5 20.9-1.1 56.9-44.1 69.5-77.5 8.3-21.9 11.9-42.3 8.9-73.9-1.8-19.4-11.8-90.7-11.8-90.7"),
    ("", "M786.7 90.4c-99.8 23.7-261.7 104.7-295 267.1 0 0 162.6-5.6 221.8-20 77.9-19 114.4-81.6 129.9-183.5 7.5-48.7-15.9-73.3-56.7-63.6"),
    ("", "M608.7 387.9c-47.8-4-119 1.6-119 1.6s-10 71.4-11.8 90.7c-3 31.6.7 51.9 8.9 73.9 12.6 33.4 48.5 76.4 69.5 77.5 50.8 2.7 150.4-44 150.4-147.5 0-70.6-37-91.1-98-96.2"),
];

/// Renders the complete SVG document for the layout model.
#[must_use]
pub fn render_svg(model: &LayoutModel, theme: &Theme) -> String {
    let board_width = 12.0f32.mul_add(theme.key_width + theme.key_gap, -theme.key_gap);
    let board_height = 6.0f32.mul_add(theme.key_height + theme.key_gap, -theme.key_gap);
    let padding = theme.padding;

    let mut svg = String::new();
    writeln!(
        svg,
        "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
         <svg width=\"{}\" height=\"{}\" \n     xmlns=\"http://www.w3.org/2000/svg\">",
        theme.scale * 3.0f32.mul_add(padding, board_width),
        theme.scale * 3.0f32.mul_add(padding, board_height),
    )
    .unwrap();
    writeln!(
        svg,
        "    <style>\n        @import url('https://fonts.googleapis.com/css2?family=Roboto:wght@400;700&amp;display=swap');\n        text {{ font-family: 'Gorton Perfected', sans-serif; }}\n    </style>"
    )
    .unwrap();
    writeln!(svg, "    <g transform=\"scale({})\">", theme.scale).unwrap();
    writeln!(
        svg,
        "    <rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
        3.0f32.mul_add(padding, board_width),
        3.0f32.mul_add(padding, board_height),
        theme.background,
    )
    .unwrap();
    writeln!(
        svg,
        "    <rect x=\"{padding}\" y=\"{padding}\" width=\"{}\" height=\"{}\" rx=\"8\" fill=\"{}\"/>",
        board_width + padding,
        board_height + padding,
        theme.board_fill,
    )
    .unwrap();
    writeln!(svg, "    <g transform=\"translate({padding}, {padding})\">").unwrap();

    if theme.show_branding {
        branding(&mut svg, theme);
    }

    for cell in &model.keys {
        match cell.key.shape {
            KeyShape::RotaryControl => knob(&mut svg, theme, &cell.key),
            KeyShape::DoubleWide => space_bar(&mut svg, theme, &cell.key),
            KeyShape::Standard | KeyShape::Homing => {
                standard_key(&mut svg, theme, &cell.key, &cell.glyphs);
            }
        }
    }

    svg.push_str("</g></g></svg>");
    svg
}

/// Butterfly logo in the vacant top-left area.
fn branding(svg: &mut String, theme: &Theme) {
    writeln!(
        svg,
        "    <g transform=\"translate({}, {})\">",
        theme.key_width + theme.key_gap,
        theme.key_gap * 2.0,
    )
    .unwrap();
    writeln!(
        svg,
        "        <circle cx=\"11.875\" cy=\"9.5\" r=\"19.55\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        theme.stroke, theme.stroke_width,
    )
    .unwrap();
    writeln!(svg, "        <g transform=\"scale(0.028)\">").unwrap();
    for (transform, data) in BUTTERFLY {
        writeln!(
            svg,
            "            <path fill=\"{}\" stroke=\"{}\" stroke-width=\"3\"{transform} d=\"{data}\"/>",
            theme.text, theme.stroke,
        )
        .unwrap();
    }
    writeln!(svg, "        </g>\n    </g>").unwrap();
}

fn key_origin(theme: &Theme, key: &PhysicalKey) -> (f32, f32) {
    (
        f32::from(key.col) * (theme.key_width + theme.key_gap),
        f32::from(key.row) * (theme.key_height + theme.key_gap),
    )
}

/// Volume knob with the curved "-VOL+" label and play/pause glyph.
fn knob(svg: &mut String, theme: &Theme, key: &PhysicalKey) {
    let (x, y) = key_origin(theme, key);
    writeln!(
        svg,
        "        <g transform=\"translate({}, {})\">",
        x + theme.key_width / 2.0,
        y + theme.key_gap,
    )
    .unwrap();
    writeln!(
        svg,
        "            <path d=\"{KNOB}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        theme.stroke, theme.stroke_width,
    )
    .unwrap();
    writeln!(
        svg,
        "            <path id=\"curve_{}_{}\" fill=\"none\" d=\"M-10,0 A10,10 0 0,1 10,0\"/>",
        key.row, key.col,
    )
    .unwrap();
    writeln!(
        svg,
        "            <g transform=\"translate({}, {})\">\n                <text fill=\"{}\" font-size=\"{}\">\n                    <textPath href=\"#curve_{}_{}\" startOffset=\"50%\" text-anchor=\"middle\">-VOL+</textPath>\n                </text>\n            </g>",
        theme.key_width / 2.0 + 4.0,
        theme.key_height / 2.0 + 2.0,
        theme.muted,
        theme.text_size,
        key.row,
        key.col,
    )
    .unwrap();
    writeln!(
        svg,
        "            <g transform=\"translate(13, 15) scale(0.5)\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\">\n                {}\n            </g>\n        </g>",
        theme.text,
        icons::play_pause(),
    )
    .unwrap();
}

/// Double-wide bar with its fixed Space and Backspace legends, colored
/// by the first two display layers.
fn space_bar(svg: &mut String, theme: &Theme, key: &PhysicalKey) {
    let (x, y) = key_origin(theme, key);
    let space_width = metrics::path_width(SPACE_KEY);
    let primary = theme
        .layers
        .first()
        .map_or(theme.text.as_str(), |layer| layer.color.as_str());
    let secondary = theme
        .layers
        .get(1)
        .map_or(theme.text.as_str(), |layer| layer.color.as_str());

    writeln!(
        svg,
        "        <g transform=\"translate({}, {})\">",
        x + theme.key_gap,
        y + theme.key_height / 2.0,
    )
    .unwrap();
    writeln!(
        svg,
        "            <path d=\"{SPACE_KEY}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        theme.stroke, theme.stroke_width,
    )
    .unwrap();
    writeln!(
        svg,
        "            <text x=\"{}\" y=\"{}\" fill=\"{primary}\" font-size=\"{}\" text-anchor=\"start\">Space</text>",
        theme.legend_offset,
        theme.key_height - theme.legend_offset,
        theme.text_size,
    )
    .unwrap();
    writeln!(
        svg,
        "            <text x=\"{}\" y=\"{}\" fill=\"{secondary}\" font-size=\"{}\" text-anchor=\"end\">Bksp</text>\n        </g>",
        space_width - 19.0,
        theme.key_height - theme.legend_offset,
        theme.text_size,
    )
    .unwrap();
}

/// One standard or homing keycap with its per-layer legends.
fn standard_key(svg: &mut String, theme: &Theme, key: &PhysicalKey, glyphs: &[Glyph]) {
    let (x, y) = key_origin(theme, key);
    let outline = if key.shape == KeyShape::Homing {
        HOMING_KEY
    } else {
        DSA_KEY
    };

    writeln!(
        svg,
        "        <g transform=\"translate({}, {})\">",
        x + theme.key_width / 2.0,
        y + theme.key_height / 2.0,
    )
    .unwrap();
    writeln!(
        svg,
        "            <path d=\"{outline}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
        theme.stroke, theme.stroke_width,
    )
    .unwrap();

    for (glyph, style) in glyphs.iter().zip(&theme.layers) {
        legend(svg, theme, glyph, style.anchor, &style.color);
    }

    writeln!(svg, "        </g>").unwrap();
}

/// Anchor-corner coordinates in keycap-local space.
fn anchor_point(theme: &Theme, anchor: Anchor) -> (f32, f32) {
    let lo = theme.legend_offset;
    match anchor {
        Anchor::LowerLeft => (lo, theme.key_height - lo),
        Anchor::LowerRight => (theme.key_width - lo, theme.key_height - lo),
        Anchor::UpperRight => (theme.key_width - lo, theme.text_size + lo),
        Anchor::UpperLeft => (lo, theme.text_size + lo),
    }
}

/// Emits one legend at its layer's anchor corner.
fn legend(svg: &mut String, theme: &Theme, glyph: &Glyph, anchor: Anchor, color: &str) {
    let (ax, ay) = anchor_point(theme, anchor);
    match glyph {
        Glyph::Empty => {}
        Glyph::Text(text) => text_legend(svg, theme, text, anchor, color),
        Glyph::LayerRef { label, layer } => {
            // Legend takes the destination layer's color wherever it sits
            let color = theme.layer_color(layer).unwrap_or(&theme.text).to_string();
            text_legend(svg, theme, label, anchor, &color);
        }
        Glyph::Icon(markup) => {
            let width = metrics::path_width(markup) * theme.icon_scale;
            let x_pos = if anchor == Anchor::UpperLeft {
                theme.legend_offset
            } else {
                theme.key_width - width - 2.0
            };
            writeln!(
                svg,
                "            <g transform=\"translate({x_pos},{}) scale({})\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\">\n                {markup}\n            </g>",
                theme.legend_offset, theme.icon_scale, theme.legend_stroke_width,
            )
            .unwrap();
        }
        Glyph::IconText { icon, text } => {
            let width = metrics::path_width(icon) * theme.icon_scale;
            let height = metrics::path_height(icon) * theme.icon_scale;
            let x_pos = if anchor == Anchor::UpperLeft {
                ax
            } else {
                ax - 2.0 * width
            };
            writeln!(
                svg,
                "            <g transform=\"translate({x_pos},{}) scale({})\" fill=\"none\" stroke=\"{color}\" stroke-width=\"{}\">\n                {icon}\n            </g>",
                ay - height, theme.icon_scale, theme.legend_stroke_width,
            )
            .unwrap();
            writeln!(
                svg,
                "            <text x=\"{}\" y=\"{ay}\" fill=\"{color}\" font-size=\"{}\" text-anchor=\"start\">{}</text>",
                x_pos + width + theme.icon_text_offset,
                theme.text_size,
                escape(text),
            )
            .unwrap();
        }
    }
}

fn text_legend(svg: &mut String, theme: &Theme, text: &str, anchor: Anchor, color: &str) {
    if text.is_empty() {
        return;
    }
    let (ax, ay) = anchor_point(theme, anchor);
    let text_anchor = if anchor.is_right() { "end" } else { "start" };
    writeln!(
        svg,
        "            <text x=\"{ax}\" y=\"{ay}\" fill=\"{color}\" font-size=\"{}\" text-anchor=\"{text_anchor}\">{}</text>",
        theme.text_size,
        escape(text),
    )
    .unwrap();
}

/// Escapes the XML-reserved characters that can appear in legends
/// (shifted comma and period produce `<` and `>`).
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{topology, Keymap, Layer};
    use crate::render::layout::build_layout;

    fn keymap_with_tokens(tokens: &[(usize, &str)]) -> Keymap {
        let mut layer = Layer::new("QWERTY");
        layer.tokens = vec!["___".to_string(); topology::LAYER_TOKENS];
        for (index, token) in tokens {
            layer.tokens[*index] = (*token).to_string();
        }
        Keymap {
            layers: vec![layer],
        }
    }

    fn render(keymap: &Keymap, theme: &Theme) -> String {
        let model = build_layout(keymap, &theme.layer_order());
        render_svg(&model, theme)
    }

    #[test]
    fn test_document_structure() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[]), &theme);

        assert!(svg.starts_with("<?xml version=\"1.0\""));
        assert!(svg.ends_with("</g></g></svg>"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("scale(1.33)"));
    }

    #[test]
    fn test_knob_and_space_bar_are_always_present() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[]), &theme);

        assert!(svg.contains("-VOL+"));
        assert!(svg.contains("curve_0_11"));
        assert!(svg.contains(">Space</text>"));
        assert!(svg.contains(">Bksp</text>"));
    }

    #[test]
    fn test_branding_follows_theme_flag() {
        let keymap = keymap_with_tokens(&[]);
        let dark = render(&keymap, &Theme::stickers());
        let light = render(&keymap, &Theme::layout_card());

        assert!(dark.contains("scale(0.028)"));
        assert!(!light.contains("scale(0.028)"));
    }

    #[test]
    fn test_legends_render_with_layer_color() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[(5, "Key_Q")]), &theme);
        assert!(svg.contains(">Q</text>"));
        assert!(svg.contains("fill=\"#ffffff\" font-size=\"6.25\" text-anchor=\"start\">Q</text>"));
    }

    #[test]
    fn test_layer_ref_takes_destination_layer_color() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[(5, "ShiftToLayer(FUN)")]), &theme);
        assert!(svg.contains("fill=\"#66ff66\""));
        assert!(svg.contains(">Fun</text>"));
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[(5, "LSHIFT(Key_Comma)")]), &theme);
        assert!(svg.contains(">&lt;</text>"));
        assert!(!svg.contains("><</text>"));
    }

    #[test]
    fn test_presets_differ_only_in_appearance() {
        let keymap = keymap_with_tokens(&[(5, "Key_Q"), (6, "Key_Tab")]);
        let dark = render(&keymap, &Theme::stickers());
        let light = render(&keymap, &Theme::layout_card());

        assert!(dark.contains(">Q</text>") && light.contains(">Q</text>"));
        assert!(dark.contains(">Tab</text>") && light.contains(">Tab</text>"));
        assert!(dark.contains("fill=\"#000000\""));
        assert!(light.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_homing_keys_use_dished_outline() {
        let theme = Theme::stickers();
        let svg = render(&keymap_with_tokens(&[]), &theme);
        assert_eq!(svg.matches(HOMING_KEY).count(), 2);
    }
}

//! End-to-end rendering tests: sketch source in, SVG document out.

use preonic_layout::parser;
use preonic_layout::render::{build_layout, render_svg};
use preonic_layout::theme::Theme;

mod fixtures;
use fixtures::*;

fn render_sketch(source: &str, theme: &Theme) -> String {
    let keymap = parser::parse_keymap_str(source).expect("Failed to parse sketch");
    let model = build_layout(&keymap, &theme.layer_order());
    render_svg(&model, theme)
}

#[test]
fn test_full_sketch_renders_every_layer() {
    let source = sketch_source(&[
        ("QWERTY", qwerty_tokens()),
        ("LOWER", sparse_tokens(&[(6, "LSHIFT(Key_1)"), (16, "Key_F1")])),
        ("RAISE", sparse_tokens(&[(6, "Key_1")])),
        ("FUN", sparse_tokens(&[(17, "Consumer_VolumeIncrement")])),
    ]);
    let svg = render_sketch(&source, &Theme::stickers());

    // QWERTY legends
    assert!(svg.contains(">Q</text>"));
    assert!(svg.contains(">Tab</text>"));
    assert!(svg.contains(">Esc</text>"));
    // LOWER shifted number and function key
    assert!(svg.contains(">!</text>"));
    assert!(svg.contains(">F1</text>"));
    // FUN icon legend is stroked in the FUN layer color
    assert!(svg.contains("stroke=\"#66ff66\""));
}

#[test]
fn test_trailing_structural_tokens_do_not_shift_the_grid() {
    // The layer-closing "),"  lines leave a structural leftover token at
    // the end of each layer; positional indexing must keep it inert.
    let source = sketch_source(&[("QWERTY", qwerty_tokens())]);
    let svg = render_sketch(&source, &Theme::stickers());

    assert!(svg.contains(">Q</text>"));
    assert!(!svg.contains(">),</text>"));
}

#[test]
fn test_layer_shift_keys_take_destination_colors() {
    let source = sketch_source(&[("QWERTY", qwerty_tokens())]);
    let svg = render_sketch(&source, &Theme::stickers());

    // ShiftToLayer(LOWER) on the QWERTY layer renders "Lower" in the
    // LOWER layer's blue, not in the QWERTY white
    assert!(svg.contains("fill=\"#66b3ff\" font-size=\"6.25\" text-anchor=\"start\">Lower</text>"));
    assert!(svg.contains(">Raise</text>"));
    assert!(svg.contains(">Fun</text>"));
}

#[test]
fn test_presets_render_identical_legends_in_different_colors() {
    let source = sketch_source(&[
        ("QWERTY", qwerty_tokens()),
        ("LOWER", sparse_tokens(&[(6, "LSHIFT(Key_1)")])),
    ]);
    let dark = render_sketch(&source, &Theme::stickers());
    let light = render_sketch(&source, &Theme::layout_card());

    for legend in [">Q</text>", ">Tab</text>", ">!</text>", ">Space</text>"] {
        assert!(dark.contains(legend), "stickers missing {legend}");
        assert!(light.contains(legend), "layout-card missing {legend}");
    }

    assert!(dark.contains("fill=\"#000000\""));
    assert!(dark.contains("fill=\"#66b3ff\""));
    assert!(light.contains("fill=\"#ffffff\""));
    assert!(light.contains("fill=\"#2a6fbb\""));
    assert!(!light.contains("fill=\"#66b3ff\""));
}

#[test]
fn test_layers_missing_from_sketch_render_nothing() {
    // Theme expects four layers but the sketch only declares one
    let source = sketch_source(&[("QWERTY", sparse_tokens(&[(5, "Key_Z")]))]);
    let svg = render_sketch(&source, &Theme::stickers());

    assert!(svg.contains(">Z</text>"));
    // Fixed furniture is still drawn
    assert!(svg.contains("-VOL+"));
    assert!(svg.contains(">Space</text>"));
}

#[test]
fn test_sentinel_tokens_render_no_legend() {
    let source = sketch_source(&[(
        "QWERTY",
        sparse_tokens(&[(5, "___"), (6, "XXX"), (7, "Key_K")]),
    )]);
    let svg = render_sketch(&source, &Theme::stickers());

    assert!(svg.contains(">K</text>"));
    assert!(!svg.contains(">___</text>"));
    assert!(!svg.contains(">XXX</text>"));
}

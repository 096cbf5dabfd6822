//! Preonic Layout - keymap to SVG renderer
//!
//! Reads the `KEYMAPS(...)` declaration from a Kaleidoscope sketch and
//! renders the layers as a single themed SVG layout card.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use preonic_layout::constants::{APP_BINARY_NAME, APP_NAME};
use preonic_layout::parser;
use preonic_layout::render::{build_layout, render_svg};
use preonic_layout::theme::Theme;
use std::fs;
use std::path::PathBuf;

/// Built-in theme presets selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ThemePreset {
    /// Dark theme matching the printed keycap stickers
    Stickers,
    /// Light theme for printable layout cards
    LayoutCard,
}

/// Preonic Layout - keymap to SVG renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Kaleidoscope sketch (.ino) containing KEYMAPS(...)
    #[arg(value_name = "SKETCH")]
    sketch_path: PathBuf,

    /// Output SVG file
    #[arg(short, long, value_name = "FILE", default_value = "layout.svg")]
    output: PathBuf,

    /// Built-in theme preset
    #[arg(long, value_enum, default_value_t = ThemePreset::Stickers)]
    theme: ThemePreset,

    /// Custom theme TOML file (overrides --theme)
    #[arg(long, value_name = "FILE")]
    theme_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!();

    // Validate the sketch path before attempting to parse
    if !cli.sketch_path.exists() {
        eprintln!("Error: Sketch file not found: {}", cli.sketch_path.display());
        eprintln!();
        eprintln!("Please provide a valid path to a Kaleidoscope sketch.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  {} Preonic.ino", APP_BINARY_NAME);
        eprintln!("  {} path/to/Preonic.ino -o layout.svg", APP_BINARY_NAME);
        eprintln!();
        eprintln!("For more options, run:");
        eprintln!("  {} --help", APP_BINARY_NAME);
        std::process::exit(1);
    }

    let theme = match cli.theme_file {
        Some(path) => Theme::load(&path)?,
        None => match cli.theme {
            ThemePreset::Stickers => Theme::stickers(),
            ThemePreset::LayoutCard => Theme::layout_card(),
        },
    };

    let keymap = parser::parse_keymap_file(&cli.sketch_path)?;
    let model = build_layout(&keymap, &theme.layer_order());
    let svg = render_svg(&model, &theme);

    fs::write(&cli.output, svg)?;
    println!("✓ Generated layout at: {}", cli.output.display());

    Ok(())
}

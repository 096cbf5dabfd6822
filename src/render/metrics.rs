//! Bounding-box estimates for hand-authored icon path markup.
//!
//! Every numeric literal in the markup is read in source order and
//! treated as an alternating x,y pair. This is a heuristic, not a path
//! grammar: command letters with other operand counts (elliptical arcs
//! in particular) are knowingly misread. The icon tables were authored
//! and positioned against this estimate, so it stays as-is.

use regex::Regex;

/// Extracts every numeric literal (optionally signed or fractional) in
/// order of appearance.
fn coordinates(path: &str) -> Vec<f32> {
    // Fixed pattern, cannot fail to compile
    let number = Regex::new(r"[-+]?\d*\.?\d+").unwrap();
    number
        .find_iter(path)
        .filter_map(|m| m.as_str().parse::<f32>().ok())
        .collect()
}

fn extent(values: impl Iterator<Item = f32>) -> f32 {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut seen = false;

    for value in values {
        seen = true;
        min = min.min(value);
        max = max.max(value);
    }

    if seen {
        max - min
    } else {
        0.0
    }
}

/// Estimated width of the path markup (max minus min over even-indexed
/// literals). Markup with no numeric literals yields 0.
#[must_use]
pub fn path_width(path: &str) -> f32 {
    extent(coordinates(path).into_iter().step_by(2))
}

/// Estimated height of the path markup (max minus min over odd-indexed
/// literals). Markup with no numeric literals yields 0.
#[must_use]
pub fn path_height(path: &str) -> f32 {
    extent(coordinates(path).into_iter().skip(1).step_by(2))
}

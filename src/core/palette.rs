//! Cosmetic color assignment. Randomization goes through a seedable RNG so
//! tests can pin the resulting order.

use rand::prelude::*;

/// Fisher–Yates shuffle of the configured palette.
pub fn shuffled(colors: &[&'static str], rng: &mut StdRng) -> Vec<&'static str> {
    let mut out = colors.to_vec();
    out.shuffle(rng);
    out
}

/// Palette rotated by a fixed start offset; used by the static wheel so
/// coloring varies run to run without any animation.
pub fn rotated_by(colors: &[&'static str], offset: usize) -> Vec<&'static str> {
    let mut out = colors.to_vec();
    if !out.is_empty() {
        let len = out.len();
        out.rotate_left(offset % len);
    }
    out
}

/// Fill color for slice `index`, cycling the palette.
pub fn color_for<'a>(palette: &[&'a str], index: usize) -> &'a str {
    if palette.is_empty() {
        "#888888"
    } else {
        palette[index % palette.len()]
    }
}

// Host-side tests for palette randomization.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/palette.rs"]
mod palette;

use palette::*;
use rand::prelude::*;

const COLORS: &[&str] = &["#a", "#b", "#c", "#d", "#e"];

#[test]
fn shuffle_is_a_seeded_permutation() {
    let mut rng_a = StdRng::seed_from_u64(42);
    let mut rng_b = StdRng::seed_from_u64(42);
    let a = shuffled(COLORS, &mut rng_a);
    let b = shuffled(COLORS, &mut rng_b);
    assert_eq!(a, b, "same seed, same order");

    let mut sorted = a.clone();
    sorted.sort_unstable();
    let mut reference = COLORS.to_vec();
    reference.sort_unstable();
    assert_eq!(sorted, reference, "shuffle must keep every color");
}

#[test]
fn rotation_preserves_order_and_wraps() {
    assert_eq!(rotated_by(&["#a", "#b", "#c"], 1), vec!["#b", "#c", "#a"]);
    assert_eq!(
        rotated_by(&["#a", "#b", "#c"], 4),
        rotated_by(&["#a", "#b", "#c"], 1)
    );
    assert_eq!(rotated_by(&[], 3), Vec::<&str>::new());
}

#[test]
fn colors_cycle_over_the_palette() {
    assert_eq!(color_for(COLORS, 0), "#a");
    assert_eq!(color_for(COLORS, 5), "#a");
    assert_eq!(color_for(COLORS, 7), "#c");
    assert_eq!(color_for(&[], 3), "#888888");
}

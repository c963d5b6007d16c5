// Host-side tests for slice geometry and the pointer resolver.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
#[path = "../src/core/geometry.rs"]
mod geometry;

use geometry::*;

#[test]
fn adjacent_slices_share_exactly_one_endpoint() {
    for count in 2..=12 {
        for index in 0..count - 1 {
            let (_, end) = slice_span(count, index);
            let (next_start, _) = slice_span(count, index + 1);
            assert_eq!(end, next_start, "seam mismatch at {count}/{index}");
        }
    }
}

#[test]
fn spans_tile_the_full_circle() {
    for count in 1..=12 {
        let total: f64 = (0..count)
            .map(|i| {
                let (start, end) = slice_span(count, i);
                end - start
            })
            .sum();
        assert!((total - 1.0).abs() < 1e-9, "count {count}: total {total}");
    }
}

#[test]
fn even_counts_offset_by_half_a_slice() {
    assert_eq!(slice_span(4, 0).0, 0.5 / 4.0);
    assert_eq!(slice_span(6, 0).0, 0.5 / 6.0);
    assert_eq!(slice_span(3, 0).0, 0.0);
    assert_eq!(slice_span(7, 0).0, 0.0);
}

#[test]
fn single_choice_draws_a_full_circle() {
    let path = slice_path(1, 0);
    assert!(path.contains("A 1 1 0 1 1"), "large-arc flag missing: {path}");
}

#[test]
fn multi_choice_slices_use_small_arcs() {
    for count in 2..=9 {
        for index in 0..count {
            let path = slice_path(count, index);
            assert!(path.contains("A 1 1 0 0 1"), "unexpected arc in {path}");
            assert!(path.ends_with("L 0 0"), "slice not closed at center: {path}");
        }
    }
}

#[test]
fn resolver_inverts_slice_placement() {
    // Rotation i * 360/N centers slice i under the pointer; nudges of less
    // than half a slice must not change the result.
    for count in 1..=9 {
        let slice_deg = 360.0 / count as f64;
        for index in 0..count {
            let center = index as f64 * slice_deg;
            assert_eq!(choice_index_at(center, count), Some(index));
            assert_eq!(choice_index_at(center + 0.4 * slice_deg, count), Some(index));
            assert_eq!(choice_index_at(center - 0.4 * slice_deg, count), Some(index));
        }
    }
}

#[test]
fn resolver_is_periodic_over_whole_turns() {
    for count in 1..=9 {
        for index in 0..count {
            let center = index as f64 * 360.0 / count as f64;
            assert_eq!(
                choice_index_at(center + 5.0 * 360.0, count),
                choice_index_at(center, count)
            );
        }
    }
}

#[test]
fn resolver_handles_negative_rotation() {
    assert_eq!(choice_index_at(-360.0, 4), choice_index_at(0.0, 4));
}

#[test]
fn resolver_with_no_choices_is_none() {
    assert_eq!(choice_index_at(123.0, 0), None);
}

#[test]
fn peg_count_matches_reference_cases() {
    assert_eq!(peg_count(7, 35), 35);
    assert_eq!(peg_count(6, 50), 54);
    assert_eq!(peg_count(0, 35), 0);
}

#[test]
fn peg_count_is_a_multiple_of_choice_count_and_reaches_minimum() {
    for count in 1..=16 {
        for minimum in [1, 35, 50] {
            let pegs = peg_count(count, minimum);
            assert_eq!(pegs % count, 0, "{pegs} pegs not divisible by {count}");
            assert!(pegs >= minimum);
            // Smallest such multiple
            assert!(pegs - count < minimum, "{pegs} overshoots minimum {minimum}");
        }
    }
}

#[test]
fn circle_points_lie_on_the_unit_circle() {
    for i in 0..16 {
        let (x, y) = circle_point(i as f64 / 16.0);
        assert!((x * x + y * y - 1.0).abs() < 1e-12);
    }
}

//! Slice geometry in viewBox units: the wheel rim is the unit circle at
//! the origin and angles are expressed in turns (1.0 = 360°).

use std::f64::consts::TAU;

/// Point on the unit circle at `turn` full turns from the +x axis.
#[inline]
pub fn circle_point(turn: f64) -> (f64, f64) {
    ((TAU * turn).cos(), (TAU * turn).sin())
}

/// Angular offset applied to every slice, in turns.
///
/// Even counts are shifted by half a slice so a slice, not a seam, sits at
/// angle zero under the pointer.
#[inline]
pub fn slice_offset(count: usize) -> f64 {
    if count % 2 == 0 {
        0.5 / count as f64
    } else {
        0.0
    }
}

/// Angular span of slice `index` as `(start, end)` in turns.
///
/// Both bounds are computed from the same expression so adjacent slices
/// share their boundary exactly.
pub fn slice_span(count: usize, index: usize) -> (f64, f64) {
    debug_assert!(index < count);
    let per = 1.0 / count as f64;
    let offset = slice_offset(count);
    (
        offset + per * index as f64,
        offset + per * (index + 1) as f64,
    )
}

/// SVG path for slice `index`: an arc along the rim closed through the
/// center. With a single choice the arc spans the whole circle, so the
/// large-arc flag keeps it from degenerating into a line.
pub fn slice_path(count: usize, index: usize) -> String {
    let (start, end) = slice_span(count, index);
    let (sx, sy) = circle_point(start);
    let (ex, ey) = circle_point(end);
    let large = if count > 1 { 0 } else { 1 };
    format!("M {sx} {sy} A 1 1 0 {large} 1 {ex} {ey} L 0 0")
}

/// Rotation, in turns, that lays a label along the bisector of its slice,
/// reading outward from the center.
#[inline]
pub fn label_turn(count: usize, index: usize) -> f64 {
    0.5 + (count - index) as f64 / count as f64
}

/// Slice index currently under the fixed pointer, or `None` with no
/// slices. The half-slice term re-centers the lookup so the slice spanning
/// the pointer, rather than a boundary, is selected.
pub fn choice_index_at(rotation_deg: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let perc = (rotation_deg / 360.0 + 1.0 / (2.0 * count as f64)).rem_euclid(1.0);
    let index = (perc * count as f64).floor() as usize;
    Some(index.min(count - 1))
}

/// Decorative peg count: the smallest multiple of the choice count that
/// reaches `minimum`, so pegs land exactly on slice boundaries.
pub fn peg_count(choice_count: usize, minimum: usize) -> usize {
    if choice_count == 0 {
        return 0;
    }
    choice_count * minimum.div_ceil(choice_count)
}

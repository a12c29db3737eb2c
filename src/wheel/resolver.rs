use std::f64::consts::{PI, TAU};

/// Angle of the fixed pointer, 12 o'clock in the wheel's y-down frame.
pub const POINTER_ANGLE: f64 = 3.0 * PI / 2.0;

/// Width of one slice for a pool of `count` names.
pub fn slice_angle(count: usize) -> f64 {
    TAU / count as f64
}

/// Map a resting rotation to the index of the slice under the pointer.
///
/// Returns `None` for an empty pool. The arithmetic mirrors the renderer,
/// which draws slice `i` starting at `rotation + i * slice_angle`.
pub fn resolve(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let raw = (POINTER_ANGLE - rotation + TAU) % TAU;
    let index = (raw / slice_angle(count)).floor() as usize % count;
    Some(index)
}

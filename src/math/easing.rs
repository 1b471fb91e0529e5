/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Quadratic ease-in/ease-out over `[0, 1]`, split at the midpoint.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Height along a there-and-back dip from `start` down to `end` and back.
///
/// `progress` runs over `[0, 1]`; the turning point is at `0.5`.
#[must_use]
pub fn dip_height(start: f64, end: f64, progress: f64) -> f64 {
    let progress = progress.clamp(0.0, 1.0);
    let eased = ease_in_out_quad(progress);
    if progress < 0.5 {
        lerp(start, end, eased * 2.0)
    } else {
        lerp(end, start, (eased - 0.5) * 2.0)
    }
}

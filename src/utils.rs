use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

// --- Helper Functions ---

/// Uniformly distributed direction on the unit circle.
pub fn random_unit_vector<R: Rng + ?Sized>(rng: &mut R) -> Vec2 {
    let angle = rng.gen_range(0.0..TAU);
    Vec2::from_angle(angle)
}

/// Normalizes `v`, returning `fallback` when `v` has no usable length.
pub fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let n = v.normalize_or_zero();
    if n == Vec2::ZERO { fallback } else { n }
}

/// Like `f32::clamp` but never panics: an empty range collapses to its midpoint.
pub fn clamp_span(value: f32, min: f32, max: f32) -> f32 {
    if min > max {
        (min + max) * 0.5
    } else {
        value.clamp(min, max)
    }
}

//! Scalar shaping functions shared by the builders.

use std::f64::consts::PI;

/// Thickness never drops below this, even with `endTaper = 1`.
pub const MIN_EFFECTIVE_THICKNESS: f64 = 0.05;

/// Exponent applied to the tail ramp of the fork displacement.
pub const FORK_RAMP_EXPONENT: f64 = 1.25;

/// Progress at which the extra end taper starts to kick in.
pub const END_TAPER_START: f64 = 0.85;

/// Clamped cubic Hermite ease between `edge0` and `edge1`.
///
/// A zero-width (or inverted) edge degenerates to a step at `edge0`.
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge1 <= edge0 {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// `sin(π·progress)^power`: 0 at both ends, 1 at mid-arc.
pub fn bell(progress: f64, power: f64) -> f64 {
    (PI * progress.clamp(0.0, 1.0)).sin().max(0.0).powf(power)
}

/// Bell-shaped stroke thickness with an extra taper near the end of the arc.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessProfile {
    pub min: f64,
    pub base: f64,
    pub bell_power: f64,
    pub end_taper: f64,
}

impl ThicknessProfile {
    /// `floor` keeps the thinnest part of the stroke visible whatever `variation` says.
    pub fn new(base: f64, variation: f64, floor: f64, bell_power: f64, end_taper: f64) -> Self {
        Self {
            min: floor.max(base * (1.0 - variation)),
            base,
            bell_power,
            end_taper,
        }
    }

    pub fn end_factor(&self, progress: f64) -> f64 {
        1.0 - self.end_taper * smoothstep(END_TAPER_START, 1.0, progress)
    }

    pub fn at(&self, progress: f64) -> f64 {
        let body = self.min + (self.base - self.min) * bell(progress, self.bell_power);
        (body * self.end_factor(progress)).max(MIN_EFFECTIVE_THICKNESS)
    }
}

/// Radial displacement that ramps from 0 at `window_start` to `max_px` at `window_end`.
pub fn fork_offset(max_px: f64, window_start: f64, window_end: f64, theta: f64) -> f64 {
    max_px * smoothstep(window_start, window_end, theta).powf(FORK_RAMP_EXPONENT)
}

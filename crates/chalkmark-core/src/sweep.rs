//! Angular domain and per-sample band geometry shared by both ring builders.

use crate::geom::{ContentBox, Point};
use crate::random::Phases;
use crate::shaping::{ThicknessProfile, fork_offset};
use crate::style::StrokeStyle;
use euclid::default::Vector2D;
use serde::Serialize;
use std::f64::consts::TAU;

/// Floor for the minimum derived overshoot, in degrees.
pub const MIN_DERIVED_OVERSHOOT_DEG: f64 = 4.0;

/// Denominator floor used when deriving the ellipse normal.
pub const RADIUS_EPSILON: f64 = 1e-3;

/// The swept angle range of a ring, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sweep {
    pub theta_start: f64,
    pub theta_end: f64,
    pub overshoot_start: f64,
    pub overshoot_end: f64,
    /// Length of the tail window, already floored.
    pub over_window: f64,
    pub feather: f64,
    pub segments: usize,
}

impl Sweep {
    /// Derives the sweep from a sanitized style.
    pub fn from_style(style: &StrokeStyle) -> Self {
        let gap = style.gap_deg.to_radians();
        let (overshoot_start, overshoot_end) = match style.overshoot_deg {
            Some(deg) => (deg.to_radians(), deg.to_radians()),
            None => {
                let overlap = MIN_DERIVED_OVERSHOOT_DEG
                    .to_radians()
                    .max(gap * style.overlap_ratio);
                let start = (gap + overlap) / 2.0;
                (start, start + style.end_bias_deg.to_radians())
            }
        };
        let core_start = style.core_start_deg.to_radians();
        Self {
            theta_start: core_start - overshoot_start,
            theta_end: core_start + (TAU - gap) + overshoot_end,
            overshoot_start,
            overshoot_end,
            over_window: style
                .over_window_deg
                .max(style.min_over_window_deg)
                .to_radians(),
            feather: style.feather_deg.to_radians(),
            segments: style.segments.max(1),
        }
    }

    /// `(2π − gap) + overshootStart + overshootEnd`.
    pub fn total(&self) -> f64 {
        self.theta_end - self.theta_start
    }

    /// Angle at which the fork displacement starts ramping up.
    pub fn fork_window_start(&self) -> f64 {
        self.theta_end - self.over_window
    }

    /// Angle at which layered rings switch from the under band to the over band.
    pub fn split_angle(&self) -> f64 {
        self.fork_window_start() - self.feather
    }

    pub fn progress_at(&self, index: usize) -> f64 {
        index as f64 / self.segments as f64
    }

    pub fn angle_at(&self, index: usize) -> f64 {
        self.theta_start + self.progress_at(index) * self.total()
    }

    pub fn sample_count(&self) -> usize {
        self.segments + 1
    }

    /// Iterates the `segments + 1` samples of the band around `content`.
    pub fn samples<'a>(
        &'a self,
        content: ContentBox,
        style: &StrokeStyle,
        phases: Phases,
    ) -> BandSamples<'a> {
        let content = content.normalized();
        BandSamples {
            sweep: self,
            rx: content.width / 2.0,
            ry: content.height / 2.0,
            profile: ThicknessProfile::new(
                style.base_width,
                style.variation,
                style.min_thickness,
                style.bell_power,
                style.end_taper,
            ),
            bulge_px: style.bulge_px,
            fork_px: style.fork_offset_px,
            wobble: style.wobble,
            phases,
            next: 0,
        }
    }
}

/// One sample of the band: the centerline angle plus both edge vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSample {
    pub index: usize,
    pub theta: f64,
    pub progress: f64,
    pub thickness: f64,
    pub fork: f64,
    /// Unit outward normal of the bulged ellipse at `theta`.
    pub normal: Vector2D<f64>,
    pub outer: Point,
    pub inner: Point,
}

pub struct BandSamples<'a> {
    sweep: &'a Sweep,
    rx: f64,
    ry: f64,
    profile: ThicknessProfile,
    bulge_px: f64,
    fork_px: f64,
    wobble: f64,
    phases: Phases,
    next: usize,
}

impl BandSamples<'_> {
    fn sample(&self, index: usize) -> BandSample {
        let theta = self.sweep.angle_at(index);
        let progress = self.sweep.progress_at(index);
        let thickness = self.profile.at(progress);

        let rx = self.rx + self.bulge_px * (2.0 * theta + self.phases.bulge).sin();
        let ry = self.ry + self.bulge_px * 0.8 * (2.2 * theta + self.phases.bulge * 0.9).cos();

        let (sin, cos) = theta.sin_cos();
        let n = Vector2D::new(cos / rx.max(RADIUS_EPSILON), sin / ry.max(RADIUS_EPSILON));
        let len = n.length();
        let normal = if len > 0.0 && len.is_finite() {
            n / len
        } else {
            Vector2D::new(cos, sin)
        };

        let fork = fork_offset(
            self.fork_px,
            self.sweep.fork_window_start(),
            self.sweep.theta_end,
            theta,
        );

        let jitter_x = self.wobble * 0.6 * (7.0 * theta + self.phases.jitter * 0.7).sin();
        let jitter_y = self.wobble * 0.6 * (5.0 * theta + self.phases.jitter * 0.9).cos();

        // Both edges move out by `fork` so the tail lifts as a whole, without a seam.
        let half = thickness / 2.0;
        let outer = Point::new(
            (rx + half + fork) * cos + jitter_x,
            (ry + half + fork) * sin + jitter_y,
        );
        let inner = Point::new(
            (rx - half + fork) * cos - jitter_x,
            (ry - half + fork) * sin - jitter_y,
        );

        BandSample {
            index,
            theta,
            progress,
            thickness,
            fork,
            normal,
            outer,
            inner,
        }
    }
}

impl Iterator for BandSamples<'_> {
    type Item = BandSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.sweep.segments {
            return None;
        }
        let s = self.sample(self.next);
        self.next += 1;
        Some(s)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.sweep.segments + 1).saturating_sub(self.next);
        (left, Some(left))
    }
}

impl ExactSizeIterator for BandSamples<'_> {}

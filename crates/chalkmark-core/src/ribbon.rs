//! Wavy highlighter band the size of the content box.

use crate::error::Result;
use crate::geom::{Contour, Point, Smoothing};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Smallest accepted explicit sampling step, in px.
pub const MIN_STEP: f64 = 1.0;

/// Upper bound on samples per edge. Wider boxes get a proportionally larger step.
pub const MAX_SAMPLES: usize = 20_000;

#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, setter(strip_option))]
#[serde(default, rename_all = "camelCase")]
pub struct RibbonStyle {
    /// Number of full sine periods across the width.
    pub cycles: f64,
    /// Wave amplitude in px. Derived from the height when unset.
    pub amplitude: Option<f64>,
    /// Horizontal sampling step in px. Derived from the width when unset.
    pub step: Option<f64>,
    /// CSS color. Not interpreted by the geometry.
    #[builder(setter(into))]
    pub color: String,
    /// Horizontal growth of the drawing surface around the measured content, in px.
    pub inflate_x: f64,
    /// Vertical growth of the drawing surface around the measured content, in px.
    pub inflate_y: f64,
}

impl Default for RibbonStyle {
    fn default() -> Self {
        Self {
            cycles: 2.0,
            amplitude: None,
            step: None,
            color: "rgba(255, 81, 28, 0.22)".to_string(),
            inflate_x: 16.0,
            inflate_y: 12.0,
        }
    }
}

impl RibbonStyle {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone)]
pub struct RibbonPathBuilder {
    cycles: f64,
    amplitude: Option<f64>,
    step: Option<f64>,
}

impl RibbonPathBuilder {
    pub fn new(style: &RibbonStyle) -> Self {
        Self {
            cycles: if style.cycles.is_finite() {
                style.cycles
            } else {
                2.0
            },
            amplitude: style.amplitude.filter(|a| a.is_finite()),
            step: style
                .step
                .filter(|s| s.is_finite() && *s > 0.0)
                .map(|s| s.max(MIN_STEP)),
        }
    }

    /// `floor(width / 36)`, kept within 12..=28 px.
    pub fn default_step(width: f64) -> f64 {
        (width / 36.0).floor().clamp(12.0, 28.0)
    }

    /// 12% of the height, kept within 2..=6 px.
    pub fn default_amplitude(height: f64) -> f64 {
        (height * 0.12).clamp(2.0, 6.0)
    }

    pub fn step_for(&self, width: f64) -> f64 {
        self.step
            .unwrap_or_else(|| Self::default_step(width))
            .max(width / MAX_SAMPLES as f64)
    }

    pub fn amplitude_for(&self, height: f64) -> f64 {
        self.amplitude
            .unwrap_or_else(|| Self::default_amplitude(height))
    }

    /// Builds the band over `[0, width] × [wave, wave + height]`.
    ///
    /// `outer` holds the top edge and `inner` the bottom edge, both left to right.
    pub fn build(&self, width: f64, height: f64) -> Contour {
        if !(width.is_finite() && width > 0.0) {
            tracing::debug!(width, "ribbon skipped: degenerate width");
            return Contour::empty(Smoothing::QuadraticMidpoint);
        }
        let height = if height.is_finite() {
            height.max(0.0)
        } else {
            0.0
        };
        let step = self.step_for(width);
        let amplitude = self.amplitude_for(height);
        let wave = |x: f64| amplitude * (x / width * TAU * self.cycles).sin();

        let count = ((width / step).floor() as usize).min(MAX_SAMPLES) + 1;
        let mut contour = Contour::with_capacity(count + 1, Smoothing::QuadraticMidpoint);
        for k in 0..count {
            let x = k as f64 * step;
            let y = wave(x);
            contour.push(Point::new(x, y), Point::new(x, y + height));
        }

        // The last sample always lands exactly on the right edge with the analytic end value.
        let end_y = amplitude * (TAU * self.cycles).sin();
        let end_top = Point::new(width, end_y);
        let end_bottom = Point::new(width, end_y + height);
        if count == 1 {
            contour.push(end_top, end_bottom);
        } else {
            contour.outer[count - 1] = end_top;
            contour.inner[count - 1] = end_bottom;
        }
        tracing::trace!(samples = contour.len(), step, amplitude, "ribbon built");
        contour
    }
}

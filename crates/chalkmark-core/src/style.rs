use crate::error::{Error, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Largest accepted gap; a full turn would leave nothing to draw.
pub const MAX_GAP_DEG: f64 = 359.9;
pub const MAX_SEGMENTS: usize = 20_000;

/// Style of a ring (or layered ring) annotation.
///
/// All fields have defaults; [`StrokeStyle::default`] is the single-band ring preset and
/// [`StrokeStyle::layered`] the over/under preset. Values are not validated on construction:
/// builders work from [`StrokeStyle::sanitized`], which clamps everything into a drawable range.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(default, setter(strip_option), build_fn(validate = "Self::validate"))]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Target mid-arc thickness in px.
    pub base_width: f64,
    /// How much thinner the ends get relative to `base_width` (0..1).
    pub variation: f64,
    /// Edge jitter amplitude (0..2).
    pub wobble: f64,
    /// Angular opening left unfilled, in degrees.
    pub gap_deg: f64,
    /// Explicit symmetric overshoot in degrees. Overrides `overlap_ratio` when set.
    pub overshoot_deg: Option<f64>,
    /// Overshoot relative to the gap when `overshoot_deg` is not set (0..1).
    pub overlap_ratio: f64,
    /// Amplitude of the radius modulation, in px.
    pub bulge_px: f64,
    /// Exponent of the thickness bell; higher concentrates thickness at mid-arc.
    pub bell_power: f64,
    /// Extra thinning over the last 15% of the arc (0..1).
    pub end_taper: f64,
    /// Length of the tail window in which the fork displacement ramps up, in degrees.
    pub over_window_deg: f64,
    /// Maximum radial displacement reached at the end of the tail window, in px.
    pub fork_offset_px: f64,
    /// Layered rings only: how far the under/over split is moved back, in degrees.
    pub feather_deg: f64,
    /// Output rotation in degrees, applied by the renderer.
    pub rotate: f64,
    /// CSS color. Not interpreted by the geometry.
    #[builder(setter(into))]
    pub stroke: String,

    pub segments: usize,
    /// Angle at which the nominal (gap-bounded) arc starts, in degrees.
    pub core_start_deg: f64,
    /// Extra overshoot given to the tail so it visually overtakes the start, in degrees.
    pub end_bias_deg: f64,
    /// Floor for the thinnest part of the stroke, in px.
    pub min_thickness: f64,
    /// Floor for `over_window_deg`.
    pub min_over_window_deg: f64,
    /// Floor for the viewport padding, in px.
    pub min_pad: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::ring()
    }
}

impl StrokeStyle {
    /// Single-band ring preset.
    pub fn ring() -> Self {
        Self {
            base_width: 3.0,
            variation: 0.72,
            wobble: 0.7,
            gap_deg: 26.0,
            overshoot_deg: None,
            overlap_ratio: 0.2,
            bulge_px: 2.5,
            bell_power: 1.6,
            end_taper: 0.25,
            over_window_deg: 24.0,
            fork_offset_px: 3.0,
            feather_deg: 3.0,
            rotate: 0.0,
            stroke: "#fff".to_string(),
            segments: 220,
            core_start_deg: -30.0,
            end_bias_deg: 2.0,
            min_thickness: 0.7,
            min_over_window_deg: 12.0,
            min_pad: 16.0,
        }
    }

    /// Over/under preset used by the layered ring.
    pub fn layered() -> Self {
        Self {
            gap_deg: 20.0,
            overlap_ratio: 0.35,
            bulge_px: 2.0,
            bell_power: 1.8,
            end_taper: 0.32,
            over_window_deg: 60.0,
            fork_offset_px: 3.0,
            feather_deg: 3.0,
            min_over_window_deg: 20.0,
            min_pad: 18.0,
            ..Self::ring()
        }
    }

    /// Parses a JSON object. Missing keys take the ring preset's values.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses a JSON object, filling missing keys from `preset`.
    pub fn from_json_with_preset(text: &str, preset: &StrokeStyle) -> Result<Self> {
        Self::from_value_with_preset(serde_json::from_str(text)?, preset)
    }

    /// Applies the keys of a JSON object over `preset`.
    pub fn from_value_with_preset(
        overrides: serde_json::Value,
        preset: &StrokeStyle,
    ) -> Result<Self> {
        let serde_json::Value::Object(overrides) = overrides else {
            return Err(Error::InvalidStyle {
                message: "expected a JSON object".to_string(),
            });
        };
        let mut base = serde_json::to_value(preset)?;
        if let serde_json::Value::Object(map) = &mut base {
            for (k, v) in overrides {
                map.insert(k, v);
            }
        }
        Ok(serde_json::from_value(base)?)
    }

    /// Returns a copy with every value clamped into the range the builders can draw.
    ///
    /// Out-of-range values are a visual-quality issue, never an error.
    pub fn sanitized(&self) -> StrokeStyle {
        let d = Self::ring();
        let min_thickness = finite_or(self.min_thickness, d.min_thickness).max(0.01);
        let out = StrokeStyle {
            base_width: finite_or(self.base_width, d.base_width).max(min_thickness),
            variation: clamp_finite(self.variation, 0.0, 1.0, d.variation),
            wobble: clamp_finite(self.wobble, 0.0, 2.0, d.wobble),
            gap_deg: clamp_finite(self.gap_deg, 0.0, MAX_GAP_DEG, d.gap_deg),
            overshoot_deg: self
                .overshoot_deg
                .filter(|v| v.is_finite())
                .map(|v| v.clamp(0.0, 360.0)),
            overlap_ratio: clamp_finite(self.overlap_ratio, 0.0, 1.0, d.overlap_ratio),
            bulge_px: finite_or(self.bulge_px, d.bulge_px).max(0.0),
            bell_power: finite_or(self.bell_power, d.bell_power).max(0.05),
            end_taper: clamp_finite(self.end_taper, 0.0, 1.0, d.end_taper),
            over_window_deg: clamp_finite(self.over_window_deg, 0.0, 360.0, d.over_window_deg),
            fork_offset_px: finite_or(self.fork_offset_px, d.fork_offset_px).max(0.0),
            feather_deg: clamp_finite(self.feather_deg, 0.0, 360.0, d.feather_deg),
            rotate: finite_or(self.rotate, 0.0),
            stroke: self.stroke.clone(),
            segments: self.segments.clamp(1, MAX_SEGMENTS),
            core_start_deg: finite_or(self.core_start_deg, d.core_start_deg),
            end_bias_deg: clamp_finite(self.end_bias_deg, 0.0, 90.0, d.end_bias_deg),
            min_thickness,
            min_over_window_deg: clamp_finite(
                self.min_over_window_deg,
                0.0,
                360.0,
                d.min_over_window_deg,
            ),
            min_pad: finite_or(self.min_pad, d.min_pad).max(0.0),
        };
        if out != *self {
            tracing::debug!(style = ?self, "stroke style clamped into drawable range");
        }
        out
    }
}

impl StrokeStyleBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        let checked = [
            ("baseWidth", self.base_width),
            ("variation", self.variation),
            ("wobble", self.wobble),
            ("gapDeg", self.gap_deg),
            ("overshootDeg", self.overshoot_deg.flatten()),
            ("overlapRatio", self.overlap_ratio),
            ("bulgePx", self.bulge_px),
            ("bellPower", self.bell_power),
            ("endTaper", self.end_taper),
            ("overWindowDeg", self.over_window_deg),
            ("forkOffsetPx", self.fork_offset_px),
            ("featherDeg", self.feather_deg),
            ("rotate", self.rotate),
        ];
        for (name, value) in checked {
            if let Some(v) = value {
                if !v.is_finite() {
                    return Err(format!("{name} must be finite, got {v}"));
                }
            }
        }
        Ok(())
    }
}

impl From<StrokeStyleBuilderError> for Error {
    fn from(value: StrokeStyleBuilderError) -> Self {
        Error::InvalidStyle {
            message: value.to_string(),
        }
    }
}

fn finite_or(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v } else { fallback }
}

fn clamp_finite(v: f64, lo: f64, hi: f64, fallback: f64) -> f64 {
    finite_or(v, fallback).clamp(lo, hi)
}

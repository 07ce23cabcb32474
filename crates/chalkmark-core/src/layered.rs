//! Two-band ring that fakes the stroke crossing under and then over itself near the tail.

use crate::geom::{Band, ContentBox, Contour, GeneratedPath, Layer, Smoothing};
use crate::random::Phases;
use crate::style::StrokeStyle;
use crate::sweep::Sweep;
use rand::Rng;

/// Output of [`LayeredRingPathBuilder`]. Either half may be empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LayeredRing {
    pub under: Contour,
    pub over: Contour,
    /// Samples with an angle below this went to `under`.
    pub split_angle: f64,
    pub sweep: Sweep,
}

impl LayeredRing {
    /// Both halves in paint order: under first.
    pub fn into_generated_path(self) -> GeneratedPath {
        GeneratedPath {
            layers: vec![
                Layer {
                    band: Some(Band::Under),
                    contour: self.under,
                },
                Layer {
                    band: Some(Band::Over),
                    contour: self.over,
                },
            ],
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayeredRingPathBuilder {
    style: StrokeStyle,
    sweep: Sweep,
}

impl LayeredRingPathBuilder {
    pub fn new(style: &StrokeStyle) -> Self {
        let style = style.sanitized();
        let sweep = Sweep::from_style(&style);
        Self { style, sweep }
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn sweep(&self) -> &Sweep {
        &self.sweep
    }

    pub fn build<R: Rng + ?Sized>(&self, width: f64, height: f64, rng: &mut R) -> LayeredRing {
        let phases = Phases::draw(rng);
        self.build_with_phases(ContentBox::new(width, height), phases)
    }

    pub fn build_with_phases(&self, content: ContentBox, phases: Phases) -> LayeredRing {
        let split_angle = self.sweep.split_angle();
        let mut under = Contour::empty(Smoothing::Linear);
        let mut over = Contour::empty(Smoothing::Linear);

        if content.is_degenerate() {
            tracing::debug!(
                width = content.width,
                height = content.height,
                "layered ring skipped: degenerate content box"
            );
        } else {
            // The split only decides which contour a sample lands in; the sample itself is
            // computed exactly as for a single-band ring.
            for s in self.sweep.samples(content, &self.style, phases) {
                if s.theta < split_angle {
                    under.push(s.outer, s.inner);
                } else {
                    over.push(s.outer, s.inner);
                }
            }
            if under.is_empty() || over.is_empty() {
                tracing::debug!(
                    under = under.len(),
                    over = over.len(),
                    "layered ring has an empty half"
                );
            }
        }

        LayeredRing {
            under,
            over,
            split_angle,
            sweep: self.sweep,
        }
    }
}

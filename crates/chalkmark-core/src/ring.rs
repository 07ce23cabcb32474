//! Single-band ring: an ellipse-hugging stroke with a gap and overshooting, tapered ends.

use crate::geom::{ContentBox, Contour, Smoothing};
use crate::random::Phases;
use crate::style::StrokeStyle;
use crate::sweep::Sweep;
use rand::Rng;

#[derive(Debug, Clone)]
pub struct RingPathBuilder {
    style: StrokeStyle,
    sweep: Sweep,
}

impl RingPathBuilder {
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

    /// Builds the ring around a `width × height` box centered at the origin, drawing fresh
    /// phases from `rng`.
    pub fn build<R: Rng + ?Sized>(&self, width: f64, height: f64, rng: &mut R) -> Contour {
        let phases = Phases::draw(rng);
        self.build_with_phases(ContentBox::new(width, height), phases)
    }

    pub fn build_with_phases(&self, content: ContentBox, phases: Phases) -> Contour {
        if content.is_degenerate() {
            tracing::debug!(
                width = content.width,
                height = content.height,
                "ring skipped: degenerate content box"
            );
            return Contour::empty(Smoothing::Linear);
        }

        let mut contour = Contour::with_capacity(self.sweep.sample_count(), Smoothing::Linear);
        for s in self.sweep.samples(content, &self.style, phases) {
            contour.push(s.outer, s.inner);
        }
        tracing::trace!(samples = contour.len(), "ring built");
        contour
    }
}

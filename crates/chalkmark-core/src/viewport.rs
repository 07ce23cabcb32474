//! Drawing surface sizing around the content box.

use crate::geom::{ContentBox, Point};
use crate::ribbon::RibbonStyle;
use crate::style::StrokeStyle;
use serde::Serialize;

/// Constant slack added to the style-derived ring margin, in px.
pub const PAD_SLACK: f64 = 12.0;

/// A drawing surface positioned relative to the content box's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    /// Surface offset from the content's top-left corner (`-pad` for rings).
    pub offset_x: f64,
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Margin that keeps the widest possible ring stroke on the surface.
    pub fn ring_pad(style: &StrokeStyle) -> f64 {
        let wanted = style.base_width * 4.0
            + style.bulge_px * 3.0
            + style.wobble * 4.0
            + style.fork_offset_px * 2.0
            + PAD_SLACK;
        style.min_pad.max(wanted.ceil())
    }

    /// `(w + 2·pad) × (h + 2·pad)`, offset by `(-pad, -pad)`.
    pub fn for_ring(content: ContentBox, style: &StrokeStyle) -> Self {
        let content = content.normalized();
        let pad = Self::ring_pad(&style.sanitized());
        Self {
            offset_x: -pad,
            offset_y: -pad,
            width: content.width + pad * 2.0,
            height: content.height + pad * 2.0,
        }
    }

    /// The content grown by the ribbon's inflation, centered on the content.
    pub fn for_ribbon(content: ContentBox, style: &RibbonStyle) -> Self {
        let content = content.normalized();
        let grow_x = finite_non_negative(style.inflate_x);
        let grow_y = finite_non_negative(style.inflate_y);
        Self {
            offset_x: -grow_x / 2.0,
            offset_y: -grow_y / 2.0,
            width: content.width + grow_x,
            height: content.height + grow_y,
        }
    }

    /// Where ring contours (built around the origin) must be translated to.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

fn finite_non_negative(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

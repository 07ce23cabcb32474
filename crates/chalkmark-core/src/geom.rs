use serde::{Deserialize, Serialize};

pub type Point = euclid::default::Point2D<f64>;

/// Measured size of the annotated content, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentBox {
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Negative and non-finite dimensions collapse to zero.
    pub fn normalized(self) -> Self {
        fn clean(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 { v } else { 0.0 }
        }
        Self {
            width: clean(self.width),
            height: clean(self.height),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        let n = self.normalized();
        n.width <= 0.0 || n.height <= 0.0
    }
}

/// How the vertices of a [`Contour`] are joined when serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Smoothing {
    /// Straight segments between consecutive vertices.
    #[default]
    Linear,
    /// Quadratic curves through the midpoints of consecutive vertices.
    QuadraticMidpoint,
}

/// A closed, fillable band: `outer` is walked forward, `inner` backward.
///
/// Both sequences are stored in sweep order and always have the same length. A contour without
/// vertices means "nothing to draw".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Contour {
    pub outer: Vec<Point>,
    pub inner: Vec<Point>,
    pub smoothing: Smoothing,
}

impl Contour {
    pub fn empty(smoothing: Smoothing) -> Self {
        Self {
            outer: Vec::new(),
            inner: Vec::new(),
            smoothing,
        }
    }

    pub fn with_capacity(capacity: usize, smoothing: Smoothing) -> Self {
        Self {
            outer: Vec::with_capacity(capacity),
            inner: Vec::with_capacity(capacity),
            smoothing,
        }
    }

    pub fn push(&mut self, outer: Point, inner: Point) {
        self.outer.push(outer);
        self.inner.push(inner);
    }

    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Number of samples (vertex pairs).
    pub fn len(&self) -> usize {
        self.outer.len()
    }

    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.outer.iter().chain(self.inner.iter())
    }

    pub fn is_finite(&self) -> bool {
        self.points().all(|p| p.x.is_finite() && p.y.is_finite())
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty contour.
    pub fn bounds(&self) -> Option<(Point, Point)> {
        let mut it = self.points();
        let first = *it.next()?;
        let (mut min, mut max) = (first, first);
        for p in it {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }

    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        let v = euclid::default::Vector2D::new(dx, dy);
        Self {
            outer: self.outer.iter().map(|p| *p + v).collect(),
            inner: self.inner.iter().map(|p| *p + v).collect(),
            smoothing: self.smoothing,
        }
    }
}

/// Which half of a layered ring a contour belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Band {
    /// Drawn first, at lower opacity.
    Under,
    /// Drawn second, at higher opacity, so the tail appears to cross above the start.
    Over,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub band: Option<Band>,
    pub contour: Contour,
}

/// The output of any builder, in paint order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeneratedPath {
    pub layers: Vec<Layer>,
}

impl GeneratedPath {
    pub fn single(contour: Contour) -> Self {
        Self {
            layers: vec![Layer {
                band: None,
                contour,
            }],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|l| l.contour.is_empty())
    }

    pub fn contours(&self) -> impl Iterator<Item = &Contour> {
        self.layers.iter().map(|l| &l.contour)
    }

    pub fn layer(&self, band: Band) -> Option<&Contour> {
        self.layers
            .iter()
            .find(|l| l.band == Some(band))
            .map(|l| &l.contour)
    }
}

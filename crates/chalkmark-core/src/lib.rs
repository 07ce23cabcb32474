#![forbid(unsafe_code)]

//! Procedural geometry for hand-drawn annotation marks.
//!
//! `chalkmark-core` turns a measured content box plus a [`StrokeStyle`] into closed vector
//! contours that look like a chalk circle drawn around the content (with a gap, overshooting
//! tapered ends and wobble), a two-layer variant that fakes the stroke crossing over itself, or
//! a wavy highlighter ribbon.
//!
//! Everything in this crate is a pure function of its inputs and of the random draws taken from
//! the injected [`rand::Rng`]. Rendering lives in `chalkmark-render`.

pub mod error;
pub mod geom;
pub mod layered;
pub mod mark;
pub mod path;
pub mod random;
pub mod ribbon;
pub mod ring;
pub mod shaping;
pub mod style;
pub mod sweep;
pub mod viewport;

pub use error::{Error, Result};
pub use geom::{Band, ContentBox, Contour, GeneratedPath, Layer, Point, Smoothing};
pub use layered::{LayeredRing, LayeredRingPathBuilder};
pub use mark::{Mark, generate};
pub use path::PathOp;
pub use random::{Phases, seeded_rng};
pub use ribbon::{RibbonPathBuilder, RibbonStyle, RibbonStyleBuilder};
pub use ring::RingPathBuilder;
pub use style::{StrokeStyle, StrokeStyleBuilder};
pub use sweep::{BandSample, Sweep};
pub use viewport::Viewport;

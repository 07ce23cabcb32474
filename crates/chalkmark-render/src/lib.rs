#![forbid(unsafe_code)]

//! SVG rendering for `chalkmark-core` geometry.
//!
//! The geometry crate only produces contours; this crate decides how they are painted (opacity
//! per band, chalk displacement filter, ribbon blur) and owns the overlay lifecycle that
//! regenerates a mark whenever the measured content changes.

pub mod color;
pub mod overlay;
pub mod svg;

pub use color::Paint;
pub use overlay::AnnotationOverlay;
pub use svg::{LayerPaint, SvgRenderOptions, render_mark_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid color: {value}")]
    InvalidColor { value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

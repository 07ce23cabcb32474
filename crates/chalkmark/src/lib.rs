#![forbid(unsafe_code)]

//! `chalkmark` draws procedural, hand-drawn looking annotation marks around a content box:
//! chalk rings, layered rings that fake a self-crossing stroke, and wavy highlighter ribbons.
//!
//! Geometry lives in `chalkmark-core` and is re-exported here.
//!
//! # Features
//!
//! - `render`: SVG overlay output (`chalkmark::render`)
//! - `raster`: PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use chalkmark_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use chalkmark_render::color::Paint;
    pub use chalkmark_render::Error as RenderError;
    pub use chalkmark_render::svg::{
        FILTER_SEED_RANGE, LayerPaint, SvgRenderOptions, render_generated_svg,
    };
    pub use chalkmark_render::{AnnotationOverlay, render_mark_svg};

    use chalkmark_core::{ContentBox, Mark, seeded_rng};

    #[cfg(feature = "raster")]
    pub mod raster;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Render(#[from] RenderError),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several overlays can
    /// be inlined in one document without their filter ids colliding.
    ///
    /// Unsupported characters become `-`, and the result always starts with an ASCII letter
    /// (`c-` is prefixed when needed).
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "c-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }
        if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic()) {
            out.insert_str(0, "c-");
        }
        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "c" {
            return "c-untitled".to_string();
        }
        out.to_string()
    }

    /// Bundles a mark with SVG options and an optional seed for one-shot headless rendering.
    ///
    /// Every call draws fresh randomness unless `seed` is set, in which case each call renders
    /// the same output.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessRenderer {
        pub mark: Mark,
        pub svg: SvgRenderOptions,
        pub seed: Option<u64>,
    }

    impl HeadlessRenderer {
        pub fn new(mark: Mark) -> Self {
            Self {
                mark,
                ..Default::default()
            }
        }

        pub fn with_seed(mut self, seed: u64) -> Self {
            self.seed = Some(seed);
            self
        }

        pub fn with_id(mut self, id: &str) -> Self {
            self.svg.id = sanitize_svg_id(id);
            self
        }

        pub fn render_svg(&self, width: f64, height: f64) -> Result<String> {
            let mut rng = seeded_rng(self.seed);
            Ok(render_mark_svg(
                ContentBox::new(width, height),
                &self.mark,
                &mut rng,
                &self.svg,
            )?)
        }

        #[cfg(feature = "raster")]
        pub fn render_png(
            &self,
            width: f64,
            height: f64,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_png(&self.render_svg(width, height)?, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg(
            &self,
            width: f64,
            height: f64,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_jpeg(&self.render_svg(width, height)?, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf(&self, width: f64, height: f64) -> raster::Result<Vec<u8>> {
            raster::svg_to_pdf(&self.render_svg(width, height)?)
        }
    }

}

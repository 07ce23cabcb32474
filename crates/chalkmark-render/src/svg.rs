use crate::Result;
use crate::color::Paint;
use chalkmark_core::path::fmt_coord;
use chalkmark_core::{Band, ContentBox, Contour, GeneratedPath, Mark, Viewport, generate};
use rand::Rng;
use std::fmt::Write as _;

/// Upper bound (exclusive) of the random turbulence seed.
pub const FILTER_SEED_RANGE: u32 = 10_000;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Id prefix for the filters defined inside the SVG. Must be unique per document when
    /// several overlays are inlined together.
    pub id: String,
    /// When true, rings get the chalk displacement filter and ribbons the blur filter.
    pub filters: bool,
    /// Fixed turbulence seed. Drawn from the RNG when unset.
    pub filter_seed: Option<u32>,
    /// Extra class added to the root element.
    pub class: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            id: "chalkmark".to_string(),
            filters: true,
            filter_seed: None,
            class: None,
        }
    }
}

/// Opacity and edge stroke used for one painted layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPaint {
    pub fill_opacity: f64,
    pub edge_width: f64,
    pub edge_opacity: f64,
}

impl LayerPaint {
    pub const RING: LayerPaint = LayerPaint {
        fill_opacity: 0.86,
        edge_width: 1.0,
        edge_opacity: 0.78,
    };
    pub const UNDER: LayerPaint = LayerPaint {
        fill_opacity: 0.72,
        edge_width: 0.8,
        edge_opacity: 0.58,
    };
    pub const OVER: LayerPaint = LayerPaint {
        fill_opacity: 0.9,
        edge_width: 1.05,
        edge_opacity: 0.82,
    };
    pub const RIBBON: LayerPaint = LayerPaint {
        fill_opacity: 1.0,
        edge_width: 1.2,
        edge_opacity: 0.5,
    };

    pub fn for_band(band: Option<Band>) -> LayerPaint {
        match band {
            None => Self::RING,
            Some(Band::Under) => Self::UNDER,
            Some(Band::Over) => Self::OVER,
        }
    }
}

/// Generates `mark` around `content` and renders it as a standalone SVG overlay.
///
/// The SVG covers [`Mark::viewport`]; position it at the viewport offset relative to the
/// content's top-left corner.
pub fn render_mark_svg<R: Rng + ?Sized>(
    content: ContentBox,
    mark: &Mark,
    rng: &mut R,
    options: &SvgRenderOptions,
) -> Result<String> {
    let path = generate(content, mark, rng);
    let viewport = mark.viewport(content);
    let seed = options
        .filter_seed
        .unwrap_or_else(|| rng.gen_range(0..FILTER_SEED_RANGE));
    render_generated_svg(&path, mark, &viewport, seed, options)
}

/// Renders already generated geometry. `seed` feeds the chalk turbulence filter.
pub fn render_generated_svg(
    path: &GeneratedPath,
    mark: &Mark,
    viewport: &Viewport,
    seed: u32,
    options: &SvgRenderOptions,
) -> Result<String> {
    let mut out = String::new();
    let kind = match mark {
        Mark::Ring(_) | Mark::LayeredRing(_) => "ring",
        Mark::Ribbon(_) => "ribbon",
    };
    let class = match &options.class {
        Some(extra) => format!("chalkmark-{kind} {}", escape_xml(extra)),
        None => format!("chalkmark-{kind}"),
    };
    let _ = write!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" width="{w}" height="{h}" viewBox="0 0 {w} {h}" overflow="visible" aria-hidden="true">"#,
        w = fmt_coord(viewport.width),
        h = fmt_coord(viewport.height),
    );

    match mark {
        Mark::Ring(style) | Mark::LayeredRing(style) => {
            let paint = Paint::parse(&style.stroke)?;
            let filter_id = format!("{}-chalk", escape_xml(&options.id));
            if options.filters {
                push_chalk_filter(&mut out, &filter_id, seed);
            }
            let center = viewport.center();
            let (cx, cy) = (fmt_coord(center.x), fmt_coord(center.y));
            let _ = write!(
                &mut out,
                r#"<g transform="rotate({r} {cx} {cy}) translate({cx} {cy})""#,
                r = fmt_coord(style.rotate),
            );
            if options.filters {
                let _ = write!(&mut out, r#" filter="url(#{filter_id})""#);
            }
            out.push('>');
            for layer in &path.layers {
                push_band(&mut out, &layer.contour, &paint, LayerPaint::for_band(layer.band));
            }
            out.push_str("</g>");
        }
        Mark::Ribbon(style) => {
            let paint = Paint::parse(&style.color)?;
            let filter_id = format!("{}-ribbon-blur", escape_xml(&options.id));
            if options.filters {
                let _ = write!(
                    &mut out,
                    r#"<defs><filter id="{filter_id}"><feGaussianBlur stdDeviation="0.9"/></filter></defs>"#
                );
            }
            let filter_attr = if options.filters {
                format!(r#" filter="url(#{filter_id})""#)
            } else {
                String::new()
            };
            for contour in path.contours().filter(|c| !c.is_empty()) {
                let d = contour.to_svg_path_data();
                let _ = write!(
                    &mut out,
                    r#"<path d="{d}" fill="{fill}"{fill_alpha} stroke="none"{filter_attr}/>"#,
                    fill = paint.hex(),
                    fill_alpha = alpha_attr("fill-opacity", &paint),
                );
                let _ = write!(
                    &mut out,
                    r#"<path d="{d}" fill="none" stroke="{stroke}"{stroke_alpha} stroke-width="{sw}" opacity="{op}" stroke-linejoin="round" stroke-linecap="round"{filter_attr}/>"#,
                    stroke = paint.hex(),
                    stroke_alpha = alpha_attr("stroke-opacity", &paint),
                    sw = fmt_coord(LayerPaint::RIBBON.edge_width),
                    op = fmt_coord(LayerPaint::RIBBON.edge_opacity),
                );
            }
        }
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn push_chalk_filter(out: &mut String, id: &str, seed: u32) {
    let _ = write!(
        out,
        r#"<defs><filter id="{id}" x="-10%" y="-10%" width="120%" height="120%"><feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="2" seed="{seed}" result="noise"/><feDisplacementMap in="SourceGraphic" in2="noise" scale="1.3" xChannelSelector="R" yChannelSelector="G"/><feGaussianBlur stdDeviation="0.25"/></filter></defs>"#
    );
}

/// A filled evenodd band plus a thin edge stroke along the same outline.
fn push_band(out: &mut String, contour: &Contour, paint: &Paint, layer: LayerPaint) {
    if contour.is_empty() {
        return;
    }
    let d = contour.to_svg_path_data();
    let _ = write!(
        out,
        r#"<path d="{d}" fill="{fill}"{fill_alpha} fill-rule="evenodd" clip-rule="evenodd" opacity="{op}"/>"#,
        fill = paint.hex(),
        fill_alpha = alpha_attr("fill-opacity", paint),
        op = fmt_coord(layer.fill_opacity),
    );
    let _ = write!(
        out,
        r#"<path d="{d}" fill="none" stroke="{stroke}"{stroke_alpha} stroke-width="{sw}" opacity="{op}"/>"#,
        stroke = paint.hex(),
        stroke_alpha = alpha_attr("stroke-opacity", paint),
        sw = fmt_coord(layer.edge_width),
        op = fmt_coord(layer.edge_opacity),
    );
}

fn alpha_attr(name: &str, paint: &Paint) -> String {
    if paint.is_opaque() {
        String::new()
    } else {
        format!(r#" {name}="{}""#, fmt_coord(paint.alpha()))
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

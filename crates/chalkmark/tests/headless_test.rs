#![cfg(feature = "render")]

use chalkmark::render::{HeadlessRenderer, sanitize_svg_id};
use chalkmark::{Mark, RibbonStyle};

#[test]
fn ribbon_overlay_covers_the_inflated_surface() {
    let style = RibbonStyle {
        color: "rgba(80, 200, 120, 0.3)".to_string(),
        ..Default::default()
    };
    let svg = HeadlessRenderer::new(Mark::Ribbon(style))
        .render_svg(200.0, 20.0)
        .unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let root = doc.root_element();
    assert_eq!(root.attribute("viewBox"), Some("0 0 216 32"));
    assert!(root.attribute("class").unwrap().contains("chalkmark-ribbon"));
}

#[test]
fn ids_are_made_safe_for_inlining() {
    let svg = HeadlessRenderer::new(Mark::ring())
        .with_seed(1)
        .with_id("#hero <title>")
        .render_svg(80.0, 20.0)
        .unwrap();
    let id = sanitize_svg_id("#hero <title>");
    assert!(svg.contains(&format!("url(#{id}-chalk)")));
    assert!(roxmltree::Document::parse(&svg).is_ok());
}

#[cfg(feature = "raster")]
#[test]
fn ring_rasterizes_to_png_and_pdf() {
    use chalkmark::render::raster::RasterOptions;

    let renderer = HeadlessRenderer::new(Mark::layered_ring()).with_seed(3);
    let png = renderer
        .render_png(100.0, 40.0, &RasterOptions::default())
        .unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    let pdf = renderer.render_pdf(100.0, 40.0).unwrap();
    assert!(pdf.starts_with(b"%PDF-"));
}

use chalkmark_core::{ContentBox, Mark, StrokeStyle, seeded_rng};
use chalkmark_render::{AnnotationOverlay, SvgRenderOptions, render_mark_svg};

fn options() -> SvgRenderOptions {
    SvgRenderOptions {
        filter_seed: Some(77),
        ..Default::default()
    }
}

fn path_data(svg: &str) -> Vec<String> {
    let doc = roxmltree::Document::parse(svg).unwrap();
    doc.descendants()
        .filter(|n| n.has_tag_name("path"))
        .map(|n| n.attribute("d").unwrap().to_string())
        .collect()
}

fn assert_valid_path_data(d: &str) {
    let mut segments = 0;
    for seg in svgtypes::PathParser::from(d) {
        seg.unwrap_or_else(|e| panic!("invalid path data {d:?}: {e}"));
        segments += 1;
    }
    assert!(segments > 0);
}

#[test]
fn every_mark_renders_well_formed_svg() {
    let content = ContentBox::new(140.0, 32.0);
    for mark in [Mark::ring(), Mark::layered_ring(), Mark::ribbon()] {
        let svg = render_mark_svg(content, &mark, &mut seeded_rng(Some(11)), &options()).unwrap();
        let doc = roxmltree::Document::parse(&svg).unwrap();
        let root = doc.root_element();
        assert_eq!(root.tag_name().name(), "svg");

        let vp = mark.viewport(content);
        assert_eq!(root.attribute("width").unwrap().parse::<f64>().unwrap(), vp.width);
        assert_eq!(root.attribute("height").unwrap().parse::<f64>().unwrap(), vp.height);

        for d in path_data(&svg) {
            assert_valid_path_data(&d);
        }
    }
}

#[test]
fn ring_path_closes_and_uses_straight_segments() {
    let svg = render_mark_svg(
        ContentBox::new(100.0, 40.0),
        &Mark::ring(),
        &mut seeded_rng(Some(3)),
        &options(),
    )
    .unwrap();
    let d = &path_data(&svg)[0];
    assert!(d.starts_with("M "));
    assert!(d.ends_with(" Z"));
    assert!(!d.contains('Q'));
    // 221 outer + 221 inner points: one move and 441 lines.
    assert_eq!(d.matches(" L ").count(), 441);
}

#[test]
fn chalk_filter_is_referenced_by_the_ring_group() {
    let svg = render_mark_svg(
        ContentBox::new(60.0, 24.0),
        &Mark::layered_ring(),
        &mut seeded_rng(Some(5)),
        &SvgRenderOptions {
            id: "note-3".to_string(),
            ..options()
        },
    )
    .unwrap();
    let doc = roxmltree::Document::parse(&svg).unwrap();
    let filter = doc.descendants().find(|n| n.has_tag_name("filter")).unwrap();
    assert_eq!(filter.attribute("id"), Some("note-3-chalk"));
    let turbulence = filter
        .children()
        .find(|n| n.has_tag_name("feTurbulence"))
        .unwrap();
    assert_eq!(turbulence.attribute("seed"), Some("77"));

    let group = doc.descendants().find(|n| n.has_tag_name("g")).unwrap();
    assert_eq!(group.attribute("filter"), Some("url(#note-3-chalk)"));
}

#[test]
fn seeded_renders_are_reproducible_and_draw_the_filter_seed() {
    let content = ContentBox::new(100.0, 40.0);
    let opts = SvgRenderOptions::default();
    let a = render_mark_svg(content, &Mark::ring(), &mut seeded_rng(Some(9)), &opts).unwrap();
    let b = render_mark_svg(content, &Mark::ring(), &mut seeded_rng(Some(9)), &opts).unwrap();
    assert_eq!(a, b);

    let doc = roxmltree::Document::parse(&a).unwrap();
    let seed: u32 = doc
        .descendants()
        .find(|n| n.has_tag_name("feTurbulence"))
        .and_then(|n| n.attribute("seed"))
        .unwrap()
        .parse()
        .unwrap();
    assert!(seed < chalkmark_render::svg::FILTER_SEED_RANGE);
}

#[test]
fn overlay_follows_the_element_lifecycle() {
    let mut overlay = AnnotationOverlay::new(Mark::ring(), options(), seeded_rng(Some(21)));
    assert!(overlay.svg().is_none());

    overlay.set_content_size(ContentBox::new(100.0, 40.0)).unwrap();
    assert_eq!(overlay.viewport().unwrap().width, 182.0);

    let style = StrokeStyle {
        gap_deg: 40.0,
        ..StrokeStyle::layered()
    };
    overlay.set_mark(Mark::LayeredRing(style)).unwrap();
    assert_eq!(path_data(overlay.svg().unwrap()).len(), 4);
}

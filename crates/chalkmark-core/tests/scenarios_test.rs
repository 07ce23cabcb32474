use chalkmark_core::{
    ContentBox, LayeredRingPathBuilder, Mark, Phases, RibbonPathBuilder, RibbonStyleBuilder,
    RingPathBuilder, StrokeStyle, StrokeStyleBuilder, Viewport, generate, seeded_rng,
};

fn assert_all_finite(path: &chalkmark_core::GeneratedPath) {
    for c in path.contours() {
        assert!(c.is_finite(), "non-finite coordinate in {c:?}");
    }
}

#[test]
fn scenario_ring_100x40() {
    let style = StrokeStyleBuilder::default()
        .gap_deg(26.0)
        .base_width(3.0)
        .bell_power(1.8)
        .build()
        .unwrap();
    let c = RingPathBuilder::new(&style).build(100.0, 40.0, &mut seeded_rng(Some(42)));

    assert_eq!(c.outer.len(), 221);
    assert_eq!(c.inner.len(), 221);
    for p in [c.outer[0], c.outer[220]] {
        let r = p.to_vector().length();
        assert!(r.is_finite() && r > 0.0);
    }
    assert!(c.outer.windows(2).all(|w| w[0] != w[1]));
    assert!(c.inner.windows(2).all(|w| w[0] != w[1]));
}

#[test]
fn scenario_degenerate_width() {
    for mark in [Mark::ring(), Mark::layered_ring()] {
        let path = generate(ContentBox::new(0.0, 40.0), &mark, &mut seeded_rng(Some(1)));
        assert!(path.is_empty());
        assert_all_finite(&path);
    }
}

#[test]
fn scenario_ribbon_200x20_two_cycles() {
    let style = RibbonStyleBuilder::default().cycles(2.0).build().unwrap();
    let b = RibbonPathBuilder::new(&style);
    let c = b.build(200.0, 20.0);
    let amp = b.amplitude_for(20.0);

    assert!(c.outer[0].y.abs() < 1e-12);
    let last = c.outer[c.len() - 1];
    assert!((last.y - amp * (4.0 * std::f64::consts::PI).sin()).abs() < 1e-12);
    for (top, bottom) in c.outer.iter().zip(&c.inner) {
        assert!((bottom.y - top.y - 20.0).abs() < 1e-9);
        assert!(top.y.abs() <= amp + 1e-9);
    }
}

#[test]
fn builds_are_deterministic_for_a_fixed_seed() {
    let content = ContentBox::new(160.0, 36.0);
    for mark in [Mark::ring(), Mark::layered_ring(), Mark::ribbon()] {
        let a = generate(content, &mark, &mut seeded_rng(Some(2024)));
        let b = generate(content, &mark, &mut seeded_rng(Some(2024)));
        assert_eq!(a, b);
        let da: Vec<String> = a.contours().map(|c| c.to_svg_path_data()).collect();
        let db: Vec<String> = b.contours().map(|c| c.to_svg_path_data()).collect();
        assert_eq!(da, db);
    }
}

#[test]
fn thickness_profile_peaks_mid_arc_along_the_ring() {
    // Without wobble the band width at a sample is exactly its thickness along each axis.
    let style = StrokeStyleBuilder::default()
        .wobble(0.0)
        .bell_power(1.8)
        .end_taper(0.3)
        .build()
        .unwrap();
    let builder = RingPathBuilder::new(&style);
    let sweep = *builder.sweep();
    let samples: Vec<_> = sweep
        .samples(ContentBox::new(100.0, 40.0), builder.style(), Phases::default())
        .collect();
    let mid = samples[110].thickness;
    assert!(mid >= samples[0].thickness);
    assert!(mid >= samples[220].thickness);
}

#[test]
fn layered_split_partitions_samples_for_many_styles() {
    let content = ContentBox::new(90.0, 30.0);
    for (window, feather) in [(24.0, 3.0), (60.0, 5.0), (84.0, 4.0), (200.0, 100.0)] {
        let style = StrokeStyle {
            over_window_deg: window,
            feather_deg: feather,
            ..StrokeStyle::layered()
        };
        let builder = LayeredRingPathBuilder::new(&style);
        let ring = builder.build(content.width, content.height, &mut seeded_rng(Some(7)));
        assert_eq!(ring.under.len() + ring.over.len(), 221);

        let sweep = builder.sweep();
        if sweep.over_window + sweep.feather < sweep.total() {
            assert!(ring.split_angle > sweep.theta_start);
            assert!(ring.split_angle < sweep.theta_end);
        }
    }
}

#[test]
fn ring_fits_inside_its_viewport() {
    let content = ContentBox::new(100.0, 40.0);
    let style = StrokeStyle::ring();
    let vp = Viewport::for_ring(content, &style);
    let c = RingPathBuilder::new(&style).build(100.0, 40.0, &mut seeded_rng(Some(5)));
    let (min, max) = c.bounds().unwrap();
    assert!(min.x > -vp.width / 2.0 && max.x < vp.width / 2.0);
    assert!(min.y > -vp.height / 2.0 && max.y < vp.height / 2.0);
}

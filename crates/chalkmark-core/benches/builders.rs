use chalkmark_core::{
    ContentBox, LayeredRingPathBuilder, Phases, RibbonPathBuilder, RibbonStyle, RingPathBuilder,
    StrokeStyle,
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_builders(c: &mut Criterion) {
    let content = ContentBox::new(240.0, 48.0);
    let phases = Phases::new(1.3, 4.2);
    let ring = RingPathBuilder::new(&StrokeStyle::ring());
    let layered = LayeredRingPathBuilder::new(&StrokeStyle::layered());
    let ribbon = RibbonPathBuilder::new(&RibbonStyle::default());

    let mut group = c.benchmark_group("builders");

    // Single builds are µs-scale, so batch them to get stable per-build signals.
    group.bench_function("ring_x100", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for _ in 0..100usize {
                acc ^= ring.build_with_phases(black_box(content), phases).len();
            }
            black_box(acc);
        });
    });

    group.bench_function("layered_ring_x100", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for _ in 0..100usize {
                let out = layered.build_with_phases(black_box(content), phases);
                acc ^= out.under.len() + out.over.len();
            }
            black_box(acc);
        });
    });

    group.bench_function("ring_path_data", |b| {
        let contour = ring.build_with_phases(content, phases);
        b.iter(|| black_box(contour.to_svg_path_data()));
    });

    group.bench_function("ribbon_x100", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for _ in 0..100usize {
                acc ^= ribbon.build(black_box(960.0), 32.0).len();
            }
            black_box(acc);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_builders);
criterion_main!(benches);

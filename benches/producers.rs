use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use frame_presenter::core::{
    DisplayContext, FrameProducer, GradientProducer, PixelBuffer, StaticProducer,
};

fn bench_gradient(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_frame");

    for &(width, height) in &[(500, 500), (1280, 720), (1920, 1080)] {
        let context = DisplayContext::new(width, height);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &context,
            |b, &context| {
                let mut producer = GradientProducer::new(context);
                b.iter(|| black_box(producer.next_frame()));
            },
        );
    }

    group.finish();
}

fn bench_static(c: &mut Criterion) {
    let mut producer = StaticProducer::solid(DisplayContext::new(500, 500), [30, 144, 255, 255]);
    c.bench_function("static_frame_500x500", |b| {
        b.iter(|| black_box(producer.next_frame()))
    });
}

fn bench_staging_copy(c: &mut Criterion) {
    let mut staging = PixelBuffer::new(500, 500);
    let frame = GradientProducer::new(DisplayContext::new(500, 500)).frame_at(1);
    c.bench_function("staging_copy_500x500", |b| {
        b.iter(|| staging.copy_from(black_box(&frame)))
    });
}

criterion_group!(benches, bench_gradient, bench_static, bench_staging_copy);
criterion_main!(benches);

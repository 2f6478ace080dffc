use criterion::{criterion_group, criterion_main, Criterion};
use resample_image::{ops, Image, ImageSize};
use std::hint::black_box;

fn sample_image() -> Image<u8, 3> {
    Image::from_size_val(
        ImageSize {
            width: 1920,
            height: 1080,
        },
        127,
    )
    .unwrap()
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("Image");

    group.bench_function("cast_and_scale_f32", |b| {
        let mut dst = Image::<f32, 3>::from_size_val(sample_image().size(), 0.0).unwrap();
        b.iter_batched(
            sample_image,
            |image| ops::cast_and_scale(black_box(&image), &mut dst, 1.0f32 / 255.0f32).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });

    group.bench_function("to_f32", |b| {
        b.iter_batched(
            sample_image,
            |image| ops::to_f32(black_box(&image)).unwrap(),
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_image);
criterion_main!(benches);

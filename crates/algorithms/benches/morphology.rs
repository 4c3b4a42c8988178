//! Benchmarks for morphology algorithms

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dipkit_algorithms::morphology::{dilate, StructuringElement};
use dipkit_core::Image;

fn create_test_image(size: usize) -> Image<u8> {
    // Varied surface with some structure
    let data = (0..size * size * 3)
        .map(|i| {
            let px = i / 3;
            ((px / size * 7 + px % size * 13 + i % 3 * 31) % 256) as u8
        })
        .collect();
    Image::from_vec(data, size, size, 3).unwrap()
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate");
    let se = StructuringElement::default();
    for size in [256, 512, 1024] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| dilate(black_box(&image), &se).unwrap())
        });
    }
    group.finish();
}

fn bench_dilate_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("morphology/dilate_element");
    let image = create_test_image(512);
    let elements = [
        ("diamond2", StructuringElement::Diamond(2)),
        ("cross2", StructuringElement::Cross(2)),
        ("square3", StructuringElement::Square(3)),
    ];
    for (name, se) in &elements {
        group.bench_with_input(BenchmarkId::from_parameter(name), se, |b, se| {
            b.iter(|| dilate(black_box(&image), se).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_dilate, bench_dilate_elements);
criterion_main!(benches);

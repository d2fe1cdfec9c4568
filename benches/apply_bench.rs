use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fixed_linalg::functions::{dot, normalize};
use fixed_linalg::prelude::*;
use fixed_linalg::pod::cast_vectors;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_buffer(len: usize, rng: &mut StdRng) -> Vec<f32> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

// Sum of every position in a packed array of 3-vectors, owned vs aligned.
fn bench_vector_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_add");
    let mut rng = StdRng::seed_from_u64(0);
    for count in [256usize, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        let raw = random_buffer(count * 3, &mut rng);
        let packed: Vec<Float3> = match cast_vectors::<f32, 3>(&raw) {
            Ok(slice) => slice.to_vec(),
            Err(err) => panic!("cast_vectors failed: {err}"),
        };
        let aligned: Vec<Float3A> = packed.iter().map(|v| v.realign()).collect();

        group.bench_with_input(BenchmarkId::new("packed", count), &count, |b, _| {
            b.iter(|| {
                packed
                    .iter()
                    .fold(Float3::default(), |acc, v| acc + *v)
            })
        });

        group.bench_with_input(BenchmarkId::new("aligned", count), &count, |b, _| {
            b.iter(|| {
                aligned
                    .iter()
                    .fold(Float3A::default(), |acc, v| acc + *v)
            })
        });
    }
    group.finish();
}

// Positions inside an interleaved position/normal buffer: strided views
// against copying each vertex into an owned vector first.
fn bench_view_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("view_add");
    let mut rng = StdRng::seed_from_u64(1);
    for vertices in [256usize, 4096] {
        group.throughput(Throughput::Elements(vertices as u64));
        let buffer = random_buffer(vertices * 6, &mut rng);
        let offset = Float3::splat(0.5);

        group.bench_with_input(BenchmarkId::new("view", vertices), &vertices, |b, _| {
            b.iter(|| {
                let mut acc = Float3::default();
                for chunk in buffer.chunks_exact(6) {
                    let Ok(position) = VectorView::<f32, 1, 3>::new(chunk) else {
                        continue;
                    };
                    acc += position + offset;
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("copy", vertices), &vertices, |b, _| {
            b.iter(|| {
                let mut acc = Float3::default();
                for chunk in buffer.chunks_exact(6) {
                    let position = Float3::from_fn(|i| chunk[i]);
                    acc += position + offset;
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    let mut rng = StdRng::seed_from_u64(2);
    let a = Float4x4::from_fn(|_, _| rng.gen_range(-1.0..1.0));
    let b = Float4x4::from_fn(|_, _| rng.gen_range(-1.0..1.0));
    let v = Float4::from_fn(|_| rng.gen_range(-1.0..1.0));

    group.bench_function("4x4_by_4x4", |bench| {
        bench.iter(|| black_box(&a).matmul(black_box(&b)))
    });
    group.bench_function("4x4_by_vector", |bench| {
        bench.iter(|| black_box(&a).mul_vector(black_box(&v)))
    });
    group.bench_function("transpose", |bench| {
        bench.iter(|| black_box(&a).transpose())
    });
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let mut rng = StdRng::seed_from_u64(3);
    for count in [256usize, 4096] {
        group.throughput(Throughput::Elements(count as u64));
        let vectors: Vec<Float3> = (0..count)
            .map(|_| Float3::from_fn(|_| rng.gen_range(0.1..1.0)))
            .collect();

        group.bench_with_input(BenchmarkId::new("normalize", count), &count, |b, _| {
            b.iter(|| vectors.iter().map(normalize).fold(0.0f32, |acc, n| acc + n.x()))
        });

        group.bench_with_input(BenchmarkId::new("dot", count), &count, |b, _| {
            b.iter(|| vectors.iter().map(|v| dot(v, v)).sum::<f32>())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_vector_add,
    bench_view_add,
    bench_matmul,
    bench_normalize
);
criterion_main!(benches);

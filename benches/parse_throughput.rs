use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use skeletongen_mcp::{header, skeleton};

/// Builds a header declaring one class with `size` method declarations.
fn synthetic_header(size: usize) -> String {
    let mut source = String::from("#if !defined(BENCH_H)\n#define BENCH_H\n\nclass Bench\n{\npublic:\n    Bench();\n    Bench(int seed, int stride);\n    ~Bench();\n");
    for i in 0..size {
        source.push_str(&format!("    unsigned int *compute{i}(int a, int b) const;\n"));
    }
    source.push_str("\nprivate:\n    int seed;\n    int stride;\n};\n#endif // BENCH_H\n");
    source
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("header_parse");

    for size in [10, 100, 500].iter() {
        let source = synthetic_header(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| header::parse(black_box(source)).unwrap());
        });
    }

    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_build");

    for size in [10, 100, 500].iter() {
        let source = synthetic_header(*size);
        let info = header::parse(&source).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &info, |b, info| {
            b.iter(|| skeleton::build(black_box(info), "", "bench"));
        });
    }

    group.finish();
}

fn bench_regenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("skeleton_rebuild");

    // Rebuilding over an already generated file exercises the merge path for
    // every member.
    let source = synthetic_header(100);
    let info = header::parse(&source).unwrap();
    let first = skeleton::build(&info, "", "bench");

    group.bench_function("preserve_100", |b| {
        b.iter(|| skeleton::build(black_box(&info), black_box(&first.content), "bench"));
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_generate, bench_regenerate);
criterion_main!(benches);

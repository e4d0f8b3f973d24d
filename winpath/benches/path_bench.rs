use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use winpath::path::unit::to_wide;
use winpath::path::normalize::normalize_units;
use winpath::path::{normalize_windows_path, split_path};
use winpath::{MemoryHost, PathConverter};

fn deep_path(depth: usize) -> String {
    let mut path = String::from(r"c:");
    for i in 0..depth {
        path.push_str(&format!(r"\segment{i}"));
        if i % 4 == 3 {
            path.push_str(r"\..\.");
        }
    }
    path
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize_windows_path(black_box(r"c:\absolute\path\to\file")));
    });

    group.bench_function("relative_path", |b| {
        b.iter(|| normalize_windows_path(black_box(r".\relative\path")));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| normalize_windows_path(black_box(r"c:/a/b/../c/./d")));
    });

    group.bench_function("wide_with_dots", |b| {
        let wide = to_wide(r"c:/a/b/../c/./d");
        b.iter(|| normalize_units(black_box(&wide)));
    });

    for depth in [8, 32, 128] {
        let path = deep_path(depth);
        group.bench_with_input(BenchmarkId::new("deep", depth), &path, |b, path| {
            b.iter(|| normalize_windows_path(black_box(path)));
        });
    }

    group.finish();
}

fn bench_split(c: &mut Criterion) {
    c.bench_function("split_path", |b| {
        b.iter(|| split_path(black_box(r"\\?\c:\some\deep\path\leaf.txt")));
    });
}

fn bench_converter(c: &mut Criterion) {
    let mut group = c.benchmark_group("converter");
    let converter = PathConverter::new(
        MemoryHost::new(r"C:\Users\build\workspace")
            .with_short_name(r"C:\Users\build\workspace", r"C:\Users\build\WORKSP~1"),
    );

    group.bench_function("as_windows_path", |b| {
        b.iter(|| converter.as_windows_path(black_box("src/main/../lib/mod.rs")));
    });

    group.bench_function("make_absolute", |b| {
        b.iter(|| converter.make_absolute(black_box("src/main/../lib/mod.rs")));
    });

    for missing in [0usize, 4, 16] {
        let mut path = String::from(r"C:\Users\build\workspace");
        for i in 0..missing {
            path.push_str(&format!(r"\new{i}"));
        }
        group.bench_with_input(
            BenchmarkId::new("as_short_windows_path", missing),
            &path,
            |b, path| {
                b.iter(|| converter.as_short_windows_path(black_box(path)));
            },
        );
    }

    group.bench_function("compare_absolute_paths", |b| {
        b.iter(|| {
            converter.compare_absolute_paths(
                black_box(r"C:\Program Files\Java"),
                black_box("c:/program files/java/"),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_split, bench_converter);
criterion_main!(benches);

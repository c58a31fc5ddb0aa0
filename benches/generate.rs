//! Generation benchmarks

use std::path::Path;

use colorschemes_core::core::plist::{binary, xml, Dictionary, Value};
use colorschemes_core::{GenerateContext, Palette, GENERATORS};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn generators_benchmark(c: &mut Criterion) {
    let palette = Palette::eighties();
    let ctx = GenerateContext::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("templates"));

    let mut group = c.benchmark_group("generators");

    group.bench_function("all", |b| {
        b.iter(|| {
            for generator in GENERATORS {
                let output = generator.generate(black_box(&palette), &ctx).unwrap();
                black_box(output);
            }
        })
    });

    for generator in GENERATORS.iter().filter(|g| g.is_binary()) {
        group.bench_function(generator.file_name, |b| {
            b.iter(|| black_box(generator.generate(black_box(&palette), &ctx).unwrap()))
        });
    }

    group.finish();
}

fn plist_benchmark(c: &mut Criterion) {
    let mut dict = Dictionary::new();
    for i in 0..64 {
        dict.insert(format!("key{}", i), Value::Data(vec![i as u8; 48]));
    }
    let value = Value::from(dict);

    let mut group = c.benchmark_group("plist");

    group.bench_function("xml", |b| {
        b.iter(|| black_box(xml::to_string(black_box(&value), true).unwrap()))
    });

    group.bench_function("binary", |b| {
        b.iter(|| black_box(binary::to_vec(black_box(&value), true)))
    });

    group.finish();
}

criterion_group!(benches, generators_benchmark, plist_benchmark);
criterion_main!(benches);

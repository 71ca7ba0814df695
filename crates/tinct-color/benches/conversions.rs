//! Benchmarks for the conversion chain and the operations built on it.
//!
//! Run with: `cargo bench -p tinct-color`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tinct_color::palette::parse_palette_text;
use tinct_color::{Gradient, MixSpace, Rgba};

fn sample_colors(n: usize) -> Vec<Rgba> {
    (0..n)
        .map(|i| {
            let t = i as f64 / n as f64;
            Rgba::new(t, (t * 7.0).fract(), (t * 13.0).fract(), 1.0)
        })
        .collect()
}

/// Benchmark RGBA to/from each derived space.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    for size in [1000, 10000].iter() {
        let colors = sample_colors(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("hsl_roundtrip", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_hsl().to_rgba()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("hsb_roundtrip", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_hsba().to_rgba()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("xyz_roundtrip", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_xyz().to_rgba()).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("lab_roundtrip", size), &colors, |b, v| {
            b.iter(|| v.iter().map(|c| black_box(c).to_lab().to_rgba()).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark mixing in every space.
fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix");
    let colors = sample_colors(1000);
    group.throughput(Throughput::Elements(1000));

    for space in MixSpace::ALL {
        group.bench_function(space.name(), |b| {
            b.iter(|| {
                colors
                    .windows(2)
                    .map(|w| w[0].mixed(black_box(&w[1]), 0.3, space))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark metrics, gradients and palette parsing.
fn bench_misc(c: &mut Criterion) {
    let colors = sample_colors(1000);

    c.bench_function("contrast_ratio_1000", |b| {
        b.iter(|| {
            colors
                .iter()
                .map(|x| black_box(x).contrast_ratio(&Rgba::WHITE))
                .sum::<f64>()
        })
    });

    let gradient = Gradient::new(colors[..8].to_vec());
    c.bench_function("gradient_palette_256_lab", |b| {
        b.iter(|| gradient.color_palette(black_box(256), MixSpace::Lab))
    });

    let text: String = colors.iter().map(|c| format!("{c}\n")).collect();
    c.bench_function("parse_palette_text_1000", |b| {
        b.iter(|| parse_palette_text(black_box(&text)))
    });
}

criterion_group!(benches, bench_convert, bench_mix, bench_misc);

criterion_main!(benches);

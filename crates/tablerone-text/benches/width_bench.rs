//! Benchmarks for display-width measurement and block rendering.
//!
//! Run with: cargo bench -p tablerone-text

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tablerone_core::Alignment;
use tablerone_text::{display_width, measure, render_block};

fn ascii_text(len: usize) -> String {
    "The quick brown fox jumps over the lazy dog. "
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn cjk_text(len: usize) -> String {
    "\u{4E2D}\u{6587}\u{6D4B}\u{8BD5}\u{6587}\u{672C}"
        .chars()
        .cycle()
        .take(len)
        .collect()
}

fn multiline_text(lines: usize) -> String {
    (0..lines)
        .map(|i| ascii_text(8 + i % 13))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_display_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_width");
    for len in [8, 64, 512] {
        let ascii = ascii_text(len);
        let cjk = cjk_text(len);
        group.throughput(Throughput::Bytes(ascii.len() as u64));
        group.bench_with_input(BenchmarkId::new("ascii", len), &ascii, |b, s| {
            b.iter(|| display_width(black_box(s)))
        });
        group.throughput(Throughput::Bytes(cjk.len() as u64));
        group.bench_with_input(BenchmarkId::new("cjk", len), &cjk, |b, s| {
            b.iter(|| display_width(black_box(s)))
        });
    }
    group.finish();
}

fn bench_render_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_block");
    for lines in [1, 8, 32] {
        let text = multiline_text(lines);
        let size = measure(&text);
        group.bench_with_input(BenchmarkId::new("center", lines), &text, |b, s| {
            b.iter(|| {
                render_block(
                    black_box(s),
                    size.width + 3,
                    size.height + 2,
                    Alignment::CENTER,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_display_width, bench_render_block);
criterion_main!(benches);

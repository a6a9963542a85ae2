//! Scanner and segmenter throughput.
//!
//! `scan` measures the external scanner alone, driven the way a parser
//! would drive it. `segment` adds the host-side directive walk.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use utl_scanner::ValidTokens;
use utl_template::segment;
use utlc::commands::scan_tokens;

/// Generate a page with N list rows, each with directives and a comment.
fn generate_page(rows: usize) -> String {
    let mut page = String::from("<html><body>\n[%- /* rows */ -%]\n<ul>\n");
    for i in 0..rows {
        page.push_str(&format!(
            "  <li class=\"row-{i}\">[% item{i}.name | escape %] ([% item{i}.count /* n */ %])</li>\n"
        ));
    }
    page.push_str("</ul>\n</body></html>\n");
    page
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/scan");

    for rows in [10, 100, 1000, 10000] {
        let source = generate_page(rows);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &source, |b, src| {
            b.iter(|| black_box(scan_tokens(src, ValidTokens::all())));
        });
    }

    group.finish();
}

fn bench_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner/segment");

    for rows in [10, 100, 1000, 10000] {
        let source = generate_page(rows);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &source, |b, src| {
            b.iter(|| black_box(segment(src)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scan, bench_segment);
criterion_main!(benches);

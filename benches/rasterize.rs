//! Criterion benchmarks for the rasterizer and encoders.
//!
//! Run with: `cargo bench`
//! Quick compile check: `cargo bench -- --test`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use gd_canvas::{Align, Canvas, FontSize, ImageFormat, Point, ShapeStyle};

const SIZE: u32 = 512;

fn star(n: usize, cx: f64, cy: f64, r: f64) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let a = i as f64 * std::f64::consts::PI * 2.0 * 2.0 / n as f64;
            Point::new((cx + r * a.cos()) as i64, (cy + r * a.sin()) as i64)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

fn bench_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");
    let mut img = Canvas::new(SIZE, SIZE).unwrap();
    for width in [1u32, 5, 20] {
        group.bench_function(format!("fan_width_{width}"), |b| {
            b.iter(|| {
                for i in 0..64i64 {
                    img.draw_line((0, i * 8), (511, 511 - i * 8), "red", black_box(width))
                        .unwrap();
                }
            });
        });
    }
    group.finish();
}

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shapes");
    let mut img = Canvas::new(SIZE, SIZE).unwrap();
    let style = ShapeStyle::new().line("black").fill("yellow").width(3);

    let points = star(101, 256.0, 256.0, 240.0);
    group.bench_function("polygon_star_101", |b| {
        b.iter(|| img.draw_polygon(black_box(&points), &style).unwrap());
    });
    group.bench_function("circle_400", |b| {
        b.iter(|| img.draw_circle((256, 256), black_box(400), &style).unwrap());
    });
    group.bench_function("ellipse_huge_clipped", |b| {
        b.iter(|| img.draw_ellipse((256, 256), black_box(1 << 20), 1 << 19, &style).unwrap());
    });
    group.bench_function("text_giant", |b| {
        b.iter(|| {
            img.draw_text(
                black_box("The quick brown fox jumps over the lazy dog"),
                (256, 256),
                FontSize::Giant,
                "blue",
                Align::default(),
                None,
            )
            .unwrap()
        });
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Encoders
// ---------------------------------------------------------------------------

fn bench_encode(c: &mut Criterion) {
    let mut img = Canvas::new(SIZE, SIZE).unwrap();
    img.clear_to("white").unwrap();
    img.draw_polygon(&star(31, 256.0, 256.0, 200.0), &ShapeStyle::new().line("black").fill("teal"))
        .unwrap();

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements((SIZE * SIZE) as u64));
    for format in [ImageFormat::Png, ImageFormat::Gif, ImageFormat::Bmp] {
        group.bench_function(format!("{format:?}"), |b| {
            b.iter(|| img.encode(black_box(format)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_lines, bench_shapes, bench_encode);
criterion_main!(benches);

//! Pixel-exact regression scenarios: line patterns, large coordinates, the
//! polygon fill overflow region, clipping, and palette capacity.

use gd_canvas::{points_from_rows, Canvas, DrawError, IndexArray, Limits, Point, PointD, Preset, ShapeStyle};

fn points(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn test_line_10x5_pattern() {
    let mut img = Canvas::new(10, 5).unwrap();
    img.draw_line((0, 0), (9, 4), "black", 1).unwrap();

    let expected = IndexArray::from_rows(&[
        [1, 0, 0, 0, 0],
        [1, 0, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 1, 0, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 1, 0],
        [0, 0, 0, 0, 1],
        [0, 0, 0, 0, 1],
    ])
    .unwrap();
    assert_eq!(img.export_array(), expected);
}

#[test]
fn test_diagonal_line() {
    let mut img = Canvas::new(10, 10).unwrap();
    img.draw_line((0, 0), (9, 9), "white", 1).unwrap();
    let arr = img.export_array();
    for x in 0..10 {
        for y in 0..10 {
            let want = if x == y { 2 } else { 0 };
            assert_eq!(arr.get(x, y), Some(want), "({x}, {y})");
        }
    }
}

fn thick_line(p1: (i64, i64), p2: (i64, i64)) -> IndexArray {
    let mut img = Canvas::new(10, 10).unwrap();
    img.draw_line(p1, p2, "white", 2).unwrap();
    img.export_array()
}

#[test]
fn test_thick_line_large_coordinates() {
    let reference = thick_line((0, 0), (10, 10));
    assert_eq!(thick_line((0, 0), (100, 100)), reference);
    assert_eq!(thick_line((-100, -100), (10, 10)), reference);
    let val = 1i64 << 30;
    assert_eq!(thick_line((-val, -val), (val, val)), reference);
}

#[test]
fn test_line_overflow_is_an_error() {
    let mut img = Canvas::new(10, 10).unwrap();
    let val = 1i64 << 33;
    let res = img.draw_line((-val, -val), (val, val), "white", 2);
    assert!(matches!(res, Err(DrawError::Overflow(_))));
    assert!(img.export_array().as_slice().iter().all(|&v| v == 0));
}

fn triangle(val: i64, fill: bool) -> IndexArray {
    let mut img = Canvas::new(10, 10).unwrap();
    let mut style = ShapeStyle::new().line("black");
    if fill {
        style = style.fill("red");
    }
    let tri = points(&[(-val, -val), (val, val), (-val, val)]);
    img.draw_polygon(&tri, &style).unwrap();
    img.export_array()
}

#[test]
fn test_polygon_outline_large_coordinates() {
    let reference = {
        let mut img = Canvas::new(10, 10).unwrap();
        let tri = points(&[(-1, -1), (11, 11), (-1, 11)]);
        img.draw_polygon(&tri, &ShapeStyle::new().line("black")).unwrap();
        img.export_array()
    };
    assert_eq!(triangle(100, false), reference);
    assert_eq!(triangle(1 << 30, false), reference);
}

#[test]
fn test_polygon_fill_large_coordinates() {
    let reference = {
        let mut img = Canvas::new(10, 10).unwrap();
        let tri = points(&[(-1, -1), (11, 11), (-1, 11)]);
        img.draw_polygon(&tri, &ShapeStyle::new().line("black").fill("red"))
            .unwrap();
        img.export_array()
    };
    // Red below the diagonal, black on it, nothing above it.
    assert_eq!(reference.get(0, 5), Some(5));
    assert_eq!(reference.get(4, 4), Some(1));
    assert_eq!(reference.get(5, 0), Some(0));

    for val in [100, 1 << 14, 1 << 15, 1 << 20, 1 << 30] {
        assert_eq!(triangle(val, true), reference, "magnitude {val}");
    }
}

#[test]
fn test_polygon_overflow_is_an_error() {
    let mut img = Canvas::new(10, 10).unwrap();
    let val = 1i64 << 33;
    let tri = points(&[(-val, -val), (val, val), (-val, val)]);
    let res = img.draw_polygon(&tri, &ShapeStyle::new().line("black").fill("red"));
    assert!(matches!(res, Err(DrawError::Overflow(_))));
}

#[test]
fn test_bezier_with_distant_control_points() {
    let mut img = Canvas::new(10, 10).unwrap();
    let res = img.draw_bezier(
        PointD::new(0.0, 0.0),
        PointD::new(9.0, 9.0),
        PointD::new(2e9, 0.0),
        PointD::new(0.0, 2e9),
        "white",
        1,
        Some(2.0),
    );
    assert!(matches!(res, Err(DrawError::CurveNotConverged { .. })));
    assert!(img.export_array().as_slice().iter().all(|&v| v == 0));
}

#[test]
fn test_point_rows_feed_drawing() {
    let pts = points_from_rows(&[[1i64, 1], [8, 1], [8, 8]]).unwrap();
    let mut img = Canvas::new(10, 10).unwrap();
    img.draw_polygon(&pts, &ShapeStyle::new().line("black").fill("red")).unwrap();
    img.draw_dots(&pts, 1, "blue").unwrap();
    assert_eq!(img.get_pixel_value((8, 8)).unwrap(), img.color_index("blue").unwrap());
    assert_eq!(img.get_pixel_value((7, 3)).unwrap(), img.color_index("red").unwrap());

    let bad = points_from_rows(&[vec![1i64, 1], vec![2, 2, 2]]);
    assert!(matches!(bad, Err(DrawError::Shape { .. })));
}

#[test]
fn test_clip_ignores_points_outside() {
    let draw = |p1: (i64, i64), p2: (i64, i64), path: &[(i64, i64)]| {
        let mut img = Canvas::new(10, 10).unwrap();
        img.set_clip_rect((2, 2), (7, 7)).unwrap();
        img.draw_line(p1, p2, "red", 1).unwrap();
        img.draw_polyline(&points(path), "blue", 1).unwrap();
        img.export_array()
    };
    let inside = draw((0, 0), (9, 9), &[(2, 7), (7, 2)]);
    assert_eq!(draw((-50, -50), (50, 50), &[(2, 7), (7, 2), (50, -50)]), inside);
    assert_eq!(inside.get(1, 1), Some(0));
    assert_eq!(inside.get(8, 8), Some(0));
    assert_eq!(inside.get(4, 4), Some(5));
}

#[test]
fn test_reset_clip_rect() {
    let mut img = Canvas::new(30, 20).unwrap();
    img.set_clip_rect((5, 5), (10, 10)).unwrap();
    img.reset_clip_rect();
    assert_eq!(img.clip_rect(), (Point::new(0, 0), Point::new(29, 19)));
}

#[test]
fn test_size_ceiling() {
    let limits = Limits::new(100 * 100);
    let img = Canvas::with_limits(100, 100, Preset::default(), limits).unwrap();
    assert!(img.export_array().as_slice().iter().all(|&v| v == 0));
    assert!(matches!(
        Canvas::with_limits(100, 101, Preset::default(), limits),
        Err(DrawError::OutOfMemory { .. })
    ));
}

#[test]
fn test_palette_capacity() {
    let mut img = Canvas::with_preset(4, 4, Preset::Named("BW")).unwrap();
    for i in 0..253u32 {
        img.add_color(format!("color_{i}"), (i as u8, 0, 0)).unwrap();
    }
    assert!(matches!(img.add_color("one_more", (1, 2, 3)), Err(DrawError::PaletteFull)));

    let mut small = Canvas::with_preset(4, 4, Preset::Named("BW")).unwrap();
    let a = small.add_color("a", (9, 9, 9)).unwrap();
    let b = small.add_color("b", (9, 9, 9)).unwrap();
    assert_ne!(a, b);
    assert!(matches!(small.add_color("a", (1, 1, 1)), Err(DrawError::DuplicateName(_))));
}

#[test]
fn test_array_round_trip() {
    let rows: Vec<Vec<u8>> = (0..6u8).map(|x| (0..4u8).map(|y| x * 4 + y).collect()).collect();
    let arr = IndexArray::from_rows(&rows).unwrap();
    let mut img = Canvas::new(6, 4).unwrap();
    img.import_array(&arr).unwrap();
    assert_eq!(img.export_array(), arr);
    assert_eq!(img.get_pixel_value((5, 2)).unwrap(), 22);

    img.clear();
    assert!(img.export_array().as_slice().iter().all(|&v| v == 0));

    let copy = Canvas::from_array(&arr).unwrap();
    assert_eq!(copy.export_array(), arr);
}

#[test]
fn test_equality() {
    let draw = || {
        let mut img = Canvas::new(20, 20).unwrap();
        img.draw_line((0, 3), (19, 12), "red", 3).unwrap();
        img
    };
    let (a, mut b) = (draw(), draw());
    assert!(a.equals(&b));
    b.draw_pixel((0, 0), "blue").unwrap();
    assert!(!a.equals(&b));
    assert!(!a.equals(&Canvas::new(20, 21).unwrap()));
}

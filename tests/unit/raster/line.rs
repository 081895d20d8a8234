use super::*;

fn canvas(width: u32, height: u32) -> CanvasBuffer {
    CanvasBuffer::new(width, height, 8192).unwrap()
}

fn points(line: PixelLine) -> Vec<(i64, i64)> {
    LineSteps::new(line).map(|p| (p.x, p.y)).collect()
}

fn points_within(line: PixelLine, min: (i64, i64), max: (i64, i64)) -> Vec<(i64, i64)> {
    let min = PixelPoint::new(min.0, min.1);
    let max = PixelPoint::new(max.0, max.1);
    LineSteps::within(line, min, max)
        .map(|p| (p.x, p.y))
        .collect()
}

#[test]
fn thickness_scales_with_width_and_has_a_floor() {
    assert_eq!(line_thickness(100, 3, 0.003), 3);
    assert_eq!(line_thickness(1920, 3, 0.003), 6);
    assert_eq!(line_thickness(8192, 3, 0.003), 25);
    assert_eq!(line_thickness(16, 3, 0.003), 3);
    assert_eq!(line_thickness(100, 0, 0.0), 0);
}

#[test]
fn half_thickness_floors() {
    assert_eq!(half_thickness(0), 0);
    assert_eq!(half_thickness(1), 0);
    assert_eq!(half_thickness(3), 1);
    assert_eq!(half_thickness(6), 3);
}

#[test]
fn steps_include_both_endpoints() {
    assert_eq!(
        points(PixelLine::new(0, 0, 3, 0)),
        vec![(0, 0), (1, 0), (2, 0), (3, 0)]
    );
    assert_eq!(
        points(PixelLine::new(2, 5, 2, 2)),
        vec![(2, 5), (2, 4), (2, 3), (2, 2)]
    );
}

#[test]
fn steps_on_a_diagonal_move_both_axes() {
    assert_eq!(
        points(PixelLine::new(0, 0, 3, 3)),
        vec![(0, 0), (1, 1), (2, 2), (3, 3)]
    );
    assert_eq!(
        points(PixelLine::new(3, 0, 0, 3)),
        vec![(3, 0), (2, 1), (1, 2), (0, 3)]
    );
}

#[test]
fn shallow_slope_tie_breaks_match_error_accumulator() {
    // dx=4, dy=-2, err=2: e2 == dx on the first step, so y moves together with x.
    assert_eq!(
        points(PixelLine::new(0, 0, 4, 2)),
        vec![(0, 0), (1, 1), (2, 1), (3, 2), (4, 2)]
    );
}

#[test]
fn degenerate_segment_is_one_point() {
    assert_eq!(points(PixelLine::new(7, -3, 7, -3)), vec![(7, -3)]);
}

#[test]
fn single_point_stamps_at_most_a_full_brush() {
    let mut c = canvas(20, 20);
    let ink = Rgba8::new(10, 20, 30, 230);
    draw_line(&mut c, PixelLine::new(10, 10, 10, 10), 2, ink);

    assert_eq!(c.painted_pixels(), 25);
    for y in 8..=12 {
        for x in 8..=12 {
            assert_eq!(c.pixel(x, y), Some(ink));
        }
    }
    assert_eq!(c.pixel(7, 10), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(13, 10), Some(Rgba8::TRANSPARENT));
}

#[test]
fn single_point_near_a_corner_is_clipped() {
    let mut c = canvas(20, 20);
    draw_line(&mut c, PixelLine::new(0, 0, 0, 0), 1, Rgba8::GUIDE_INK);
    assert_eq!(c.painted_pixels(), 4);
}

#[test]
fn line_fully_outside_leaves_canvas_untouched() {
    let mut c = canvas(16, 16);
    draw_line(&mut c, PixelLine::new(-50, -50, -10, -40), 1, Rgba8::GUIDE_INK);
    draw_line(&mut c, PixelLine::new(100, 0, 200, 15), 1, Rgba8::GUIDE_INK);
    draw_line(&mut c, PixelLine::new(0, 30, 15, 30), 3, Rgba8::GUIDE_INK);
    assert!(c.is_transparent());
}

#[test]
fn thick_horizontal_line_has_square_caps() {
    let mut c = canvas(20, 10);
    draw_line(&mut c, PixelLine::new(5, 5, 10, 5), 1, Rgba8::GUIDE_INK);

    // (10 - 5 + 1 + 2) columns × 3 rows.
    assert_eq!(c.painted_pixels(), 8 * 3);
    assert_eq!(c.pixel(4, 4), Some(Rgba8::GUIDE_INK));
    assert_eq!(c.pixel(11, 6), Some(Rgba8::GUIDE_INK));
    assert_eq!(c.pixel(12, 5), Some(Rgba8::TRANSPARENT));
    assert_eq!(c.pixel(7, 7), Some(Rgba8::TRANSPARENT));
}

#[test]
fn corner_to_corner_diagonal_touches_both_corners() {
    let mut c = canvas(10, 10);
    draw_line(&mut c, PixelLine::new(0, 0, 9, 9), 0, Rgba8::GUIDE_INK);
    assert_eq!(c.painted_pixels(), 10);
    for i in 0..10 {
        assert_eq!(c.pixel(i, i), Some(Rgba8::GUIDE_INK));
    }
}

#[test]
fn direction_does_not_change_covered_pixels_for_axis_aligned_lines() {
    let mut a = canvas(12, 12);
    let mut b = canvas(12, 12);
    draw_line(&mut a, PixelLine::new(1, 6, 10, 6), 1, Rgba8::GUIDE_INK);
    draw_line(&mut b, PixelLine::new(10, 6, 1, 6), 1, Rgba8::GUIDE_INK);
    assert_eq!(a, b);
}

#[test]
fn bounded_walk_matches_the_full_walk_inside_the_box() {
    let ends = [-9, -4, 0, 3, 7, 12];
    for &x1 in &ends {
        for &y1 in &ends {
            for (x2, y2) in [(11, 2), (-6, 8), (5, -7), (0, 0), (12, 12)] {
                let line = PixelLine::new(x1, y1, x2, y2);
                let expected: Vec<_> = points(line)
                    .into_iter()
                    .filter(|&(x, y)| (-1..=6).contains(&x) && (0..=4).contains(&y))
                    .collect();
                assert_eq!(points_within(line, (-1, 0), (6, 4)), expected, "{line:?}");
            }
        }
    }
}

#[test]
fn bounded_walk_jumps_over_far_away_stretches() {
    let line = PixelLine::new(-1_000_000_000_000, 5, 1_000_000_000_000, 6);
    assert_eq!(
        points_within(line, (0, 0), (9, 9)),
        (0..10).map(|x| (x, 6)).collect::<Vec<_>>()
    );

    let steep = PixelLine::new(3, -1_000_000_000, 5, 1_000_000_000);
    assert_eq!(
        points_within(steep, (0, 0), (9, 9)),
        (0..10).map(|y| (4, y)).collect::<Vec<_>>()
    );
}

#[test]
fn far_off_canvas_start_still_paints_the_visible_row() {
    let mut c = canvas(16, 16);
    draw_line(&mut c, PixelLine::new(-5_000_000_000, 8, 8, 8), 0, Rgba8::GUIDE_INK);
    assert_eq!(c.painted_pixels(), 9);
    assert_eq!(c.pixel(0, 8), Some(Rgba8::GUIDE_INK));
    assert_eq!(c.pixel(8, 8), Some(Rgba8::GUIDE_INK));
    assert_eq!(c.pixel(9, 8), Some(Rgba8::TRANSPARENT));
}

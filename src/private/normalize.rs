use num_traits::Float;
use tracing::debug;

use super::{Point, Rect};

/// Distance kept free between the drawing and every canvas edge.
pub const MARGIN: f64 = 10.0;

/// Guards `log10` results that land exactly on an integer from rounding
/// one order of magnitude short.
const ORDER_EPSILON: f64 = 1e-9;

/// Linearly maps `x` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// Reversed output ranges are allowed and flip the axis.
pub fn map<T: Float>(x: T, in_min: T, in_max: T, out_min: T, out_max: T) -> T {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// The power of ten just above `n`.
///
/// `order_up(87) == 100`, and an exact power of ten moves up a full order:
/// `order_up(100) == 1000`. Anything that is not strictly positive maps
/// to `1`.
pub fn order_up(n: f64) -> f64 {
    if n.is_nan() || n <= 0.0 {
        return 1.0;
    }
    let order = (n.log10() + ORDER_EPSILON).ceil();
    10f64.powi(order as i32)
}

/// The largest coordinate on either axis, never below zero.
pub fn max_coordinate(points: &[Point]) -> f64 {
    points
        .iter()
        .fold(0.0, |max: f64, p| max.max(p.x).max(p.y))
}

/// Rescales raw points into the pixel space of a square canvas.
///
/// Both axes share one domain, `[0, order_up(max)]`, so proportions are
/// preserved. x grows rightwards and y is flipped so that larger input
/// values end up higher on screen.
#[tracing::instrument(skip_all, fields(count = points.len(), canvas_size = canvas_size))]
pub fn normalize(points: &[Point], canvas_size: u32) -> Vec<Point> {
    let scale = order_up(max_coordinate(points));
    let area = Rect::inset_square(canvas_size as f64, MARGIN);

    debug!(scale, "shared scale");

    points
        .iter()
        .map(|p| Point {
            x: map(p.x, 0.0, scale, area.left(), area.right()),
            y: map(p.y, 0.0, scale, area.bottom(), area.top()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: u32 = 800;

    fn pts(raw: &[(i64, i64)]) -> Vec<Point> {
        raw.iter().map(|&(x, y)| Point::new(x as f64, y as f64)).collect()
    }

    #[test]
    fn order_up_moves_to_the_next_power_of_ten() {
        assert_eq!(order_up(87.0), 100.0);
        assert_eq!(order_up(100.0), 1000.0);
        assert_eq!(order_up(101.0), 1000.0);
        assert_eq!(order_up(999.0), 1000.0);
        assert_eq!(order_up(1000.0), 10000.0);
        assert_eq!(order_up(1.0), 10.0);
        assert_eq!(order_up(9.0), 10.0);
    }

    #[test]
    fn order_up_degenerate_inputs_fall_back_to_one() {
        assert_eq!(order_up(0.0), 1.0);
        assert_eq!(order_up(-50.0), 1.0);
        assert_eq!(order_up(::std::f64::NAN), 1.0);
    }

    #[test]
    fn map_handles_reversed_ranges() {
        assert_eq!(map(0.0, 0.0, 10.0, 790.0, 10.0), 790.0);
        assert_eq!(map(10.0, 0.0, 10.0, 790.0, 10.0), 10.0);
        assert_eq!(map(5.0f32, 0.0, 10.0, 0.0, 100.0), 50.0);
    }

    #[test]
    fn max_covers_both_axes() {
        assert_eq!(max_coordinate(&pts(&[(3, 90), (40, 2)])), 90.0);
        assert_eq!(max_coordinate(&pts(&[(-3, -9)])), 0.0);
        assert_eq!(max_coordinate(&[]), 0.0);
    }

    #[test]
    fn empty_input_normalizes_to_empty() {
        assert!(normalize(&[], CANVAS).is_empty());
    }

    #[test]
    fn origin_alone_stays_finite() {
        let out = normalize(&pts(&[(0, 0)]), CANVAS);
        assert_eq!(out.len(), 1);
        assert!(out[0].is_finite());
        assert_eq!(out[0], Point::new(10.0, 790.0));
    }

    #[test]
    fn square_lands_in_lower_left_of_canvas() {
        let out = normalize(&pts(&[(0, 0), (100, 0), (100, 100), (0, 100)]), CANVAS);
        assert_eq!(
            out.iter().map(|p| p.into_tuple()).collect::<Vec<_>>(),
            vec![(10.0, 790.0), (88.0, 790.0), (88.0, 712.0), (10.0, 712.0)]
        );
    }

    #[test]
    fn output_stays_inside_the_margins() {
        let raw = pts(&[(0, 0), (999, 0), (999, 999), (512, 3), (7, 640)]);
        let out = normalize(&raw, CANVAS);
        assert_eq!(out.len(), raw.len());
        let area = Rect::inset_square(CANVAS as f64, MARGIN);
        assert!(out.iter().all(|p| area.contains(p)));
    }

    #[test]
    fn larger_y_is_higher_on_screen() {
        let out = normalize(&pts(&[(0, 0), (0, 87)]), CANVAS);
        assert!(out[1].y < out[0].y);
    }

    #[test]
    fn distances_are_proportional_to_the_scale() {
        let out = normalize(&pts(&[(20, 5), (65, 5), (0, 80)]), CANVAS);
        let width = CANVAS as f64 - 2.0 * MARGIN;
        let ratio = (out[1].x - out[0].x) / width;
        assert!((ratio - 45.0 / 100.0).abs() < 1e-12);
    }
}

use super::{Color, Point, Rect, Vector};

/// A fixed-size raster surface with a current draw color.
///
/// Implementors only need to plot single pixels; lines are rasterized on
/// top of `draw_point`. Points outside of the surface must be ignored.
pub trait Canvas {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn set_draw_color(&mut self, color: Color);

    /// Plots one pixel in the current draw color.
    fn draw_point(&mut self, x: i32, y: i32);

    /// Draws a one pixel wide segment in the current draw color.
    ///
    /// Both endpoints are included. The segment is clipped to the surface
    /// before rasterizing, so far off-canvas endpoints stay cheap.
    fn draw_line(&mut self, start: Point, end: Point) {
        let (w, h) = self.size();
        if w == 0 || h == 0 {
            return;
        }
        let bounds = Rect::from_points(
            &Point { x: 0.0, y: 0.0 },
            &Point { x: (w - 1) as f64, y: (h - 1) as f64 },
        );
        if let Some((start, end)) = clip_line(start, end, &bounds) {
            bresenham(start.to_pixel(), end.to_pixel(), |x, y| self.draw_point(x, y));
        }
    }
}

/// Liang-Barsky clipping. Endpoints already inside `bounds` come back
/// untouched.
pub fn clip_line(start: Point, end: Point, bounds: &Rect) -> Option<(Point, Point)> {
    let d: Vector = end - start;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let checks = [
        (-d.x, start.x - bounds.left()),
        (d.x, bounds.right() - start.x),
        (-d.y, start.y - bounds.top()),
        (d.y, bounds.bottom() - start.y),
    ];

    for &(p, q) in &checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| Point { x: start.x + d.x * t, y: start.y + d.y * t };
    let clipped_start = if t0 == 0.0 { start } else { at(t0) };
    let clipped_end = if t1 == 1.0 { end } else { at(t1) };
    Some((clipped_start, clipped_end))
}

fn bresenham<F>((x0, y0): (i32, i32), (x1, y1): (i32, i32), mut plot: F)
where F: FnMut(i32, i32) {
    let (x0, y0, x1, y1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        plot(x as i32, y as i32);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Plotted {
        size: (u32, u32),
        points: Vec<(i32, i32)>,
    }

    impl Canvas for Plotted {
        fn size(&self) -> (u32, u32) { self.size }
        fn clear(&mut self, _: Color) { self.points.clear(); }
        fn set_draw_color(&mut self, _: Color) {}
        fn draw_point(&mut self, x: i32, y: i32) { self.points.push((x, y)); }
    }

    fn plotted() -> Plotted {
        Plotted { size: (100, 100), points: vec![] }
    }

    #[test]
    fn horizontal_line_includes_both_ends() {
        let mut c = plotted();
        c.draw_line(Point::new(2.0, 5.0), Point::new(6.0, 5.0));
        assert_eq!(c.points, vec![(2, 5), (3, 5), (4, 5), (5, 5), (6, 5)]);
    }

    #[test]
    fn diagonal_line_steps_both_axes() {
        let mut c = plotted();
        c.draw_line(Point::new(10.0, 10.0), Point::new(7.0, 13.0));
        assert_eq!(c.points, vec![(10, 10), (9, 11), (8, 12), (7, 13)]);
    }

    #[test]
    fn degenerate_line_plots_one_pixel() {
        let mut c = plotted();
        c.draw_line(Point::new(4.7, 8.2), Point::new(4.7, 8.2));
        assert_eq!(c.points, vec![(4, 8)]);
    }

    #[test]
    fn endpoints_truncate_toward_zero() {
        let mut c = plotted();
        c.draw_line(Point::new(1.9, 1.9), Point::new(3.9, 1.1));
        assert_eq!(c.points, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn far_away_segment_is_clipped_to_the_surface() {
        let mut c = plotted();
        c.draw_line(Point::new(-1.0e12, 50.0), Point::new(1.0e12, 50.0));
        assert!(c.points.len() >= 99 && c.points.len() <= 100);
        assert_eq!(c.points[0], (0, 50));
        assert!(c.points.iter().all(|&(x, y)| x >= 0 && x < 100 && y == 50));
    }

    #[test]
    fn segment_fully_outside_draws_nothing() {
        let mut c = plotted();
        c.draw_line(Point::new(-20.0, -5.0), Point::new(-1.0, 200.0));
        assert!(c.points.is_empty());
    }

    #[test]
    fn clipping_keeps_inside_endpoints_exact() {
        let bounds = Rect::from_points(&Point::new(0.0, 0.0), &Point::new(99.0, 99.0));
        let (a, b) = (Point::new(0.1, 98.7), Point::new(55.3, 0.3));
        assert_eq!(clip_line(a, b, &bounds), Some((a, b)));
    }
}

use super::{Canvas, Color, Point};

/// Angle samples taken per ring.
pub const RING_SAMPLES: i32 = 360;

/// Plots one ring of radius `radius` around `center`.
///
/// The sample angles are the integers `0..360` fed straight into `sin` and
/// `cos`, so they are radians, not degrees. This wraps the ring roughly 57
/// times with an uneven spread of pixels, which is the look the markers
/// have always had. Offsets are computed in `f32`; single precision
/// decides which samples truncate onto the axis pixels.
pub fn draw_ring<C: Canvas>(canvas: &mut C, center: Point, radius: i32, color: Color) {
    canvas.set_draw_color(color);

    let r = radius as f32;
    let limit = radius as i64 * radius as i64;
    for w in 0..RING_SAMPLES {
        let angle = w as f32;
        let dx = (r * angle.cos()) as i32;
        let dy = (r * angle.sin()) as i32;
        let (dx2, dy2) = (dx as i64 * dx as i64, dy as i64 * dy as i64);
        if dx2 + dy2 <= limit {
            canvas.draw_point((center.x + dx as f64) as i32, (center.y + dy as f64) as i32);
        }
    }
}

/// Draws a filled disc with a black outline band `border_width` thick.
///
/// Rings `0..radius - border_width` use `fill`, rings up to but excluding
/// `radius` use black.
pub fn draw_circle<C: Canvas>(canvas: &mut C, center: Point, radius: i32, fill: Color, border_width: i32) {
    let inner = (radius - border_width).max(0);

    for w in 0..inner {
        draw_ring(canvas, center, w, fill);
    }
    for w in inner..radius {
        draw_ring(canvas, center, w, Color::BLACK);
    }
}

pub fn draw_line<C: Canvas>(canvas: &mut C, start: Point, end: Point, color: Color) {
    canvas.set_draw_color(color);
    canvas.draw_line(start, end);
}

use super::{Canvas, Color};

/// An in-memory RGBA raster that the renderer draws into and the viewer
/// presents.
#[derive(Clone, Debug)]
pub struct Bitmap {
    data: Vec<Color>,
    width: usize,
    height: usize,
    draw_color: Color,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Bitmap {
        Bitmap {
            data: vec![Color::BLACK; width * height],
            width: width,
            height: height,
            draw_color: Color::WHITE,
        }
    }

    pub fn square(size: usize) -> Bitmap {
        Bitmap::new(size, size)
    }

    pub fn get(&self, x: usize, y: usize) -> Color {
        self.data[x + y * self.width]
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn pixels(&self) -> &[Color] {
        &self.data
    }

    /// Number of pixels that currently hold exactly `color`.
    pub fn count(&self, color: Color) -> usize {
        self.data.iter().filter(|&&c| c == color).count()
    }

    /// The raster as `0x00RRGGBB` words, row-major.
    pub fn to_rgb_buffer(&self) -> Vec<u32> {
        let mut out = Vec::with_capacity(self.data.len());
        self.write_rgb_buffer(&mut out);
        out
    }

    pub fn write_rgb_buffer(&self, out: &mut Vec<u32>) {
        out.clear();
        out.extend(self.data.iter().map(|c| c.to_rgb_u32()));
    }
}

impl Canvas for Bitmap {
    fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    fn clear(&mut self, color: Color) {
        for px in self.data.iter_mut() {
            *px = color;
        }
    }

    fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[x + y * self.width] = self.draw_color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[test]
    fn clear_fills_every_pixel() {
        let mut bmp = Bitmap::new(4, 3);
        bmp.clear(Color::WHITE);
        assert_eq!(bmp.count(Color::WHITE), 12);
    }

    #[test]
    fn points_outside_are_ignored() {
        let mut bmp = Bitmap::square(5);
        bmp.clear(Color::WHITE);
        bmp.set_draw_color(Color::BLACK);
        bmp.draw_point(-1, 2);
        bmp.draw_point(2, -1);
        bmp.draw_point(5, 0);
        bmp.draw_point(0, 5);
        assert_eq!(bmp.count(Color::BLACK), 0);

        bmp.draw_point(4, 4);
        assert_eq!(bmp.get(4, 4), Color::BLACK);
        assert_eq!(bmp.count(Color::BLACK), 1);
    }

    #[test]
    fn lines_use_the_current_draw_color() {
        let mut bmp = Bitmap::square(10);
        bmp.clear(Color::WHITE);
        bmp.set_draw_color(Color::LINE_RED);
        bmp.draw_line(Point::new(0.0, 0.0), Point::new(9.0, 9.0));
        assert_eq!(bmp.count(Color::LINE_RED), 10);
        for i in 0..10 {
            assert_eq!(bmp.get(i, i), Color::LINE_RED);
        }
    }

    #[test]
    fn rgb_buffer_is_row_major() {
        let mut bmp = Bitmap::new(2, 2);
        bmp.clear(Color::WHITE);
        bmp.set_draw_color(Color::LINE_RED);
        bmp.draw_point(1, 0);
        assert_eq!(bmp.to_rgb_buffer(), vec![0xFFFFFF, 0xC80000, 0xFFFFFF, 0xFFFFFF]);
    }
}

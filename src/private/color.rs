/// An 8-bit-per-channel RGBA color.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    /// Stroke color for polygon edges.
    pub const LINE_RED: Color = Color::rgb(200, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r: r, g: g, b: b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r: r, g: g, b: b, a: a }
    }

    pub const fn gray(tone: u8) -> Color {
        Color::rgb(tone, tone, tone)
    }

    /// Packs the color as `0x00RRGGBB`, dropping alpha.
    pub fn to_rgb_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

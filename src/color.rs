/// A 32 bit color, 8 bits per component, not premultiplied.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::new(0, 0, 0, 0xff);
    pub const WHITE: Color = Color::new(0xff, 0xff, 0xff, 0xff);
    /// The color a fresh paint carries: opaque black.
    pub const DEFAULT: Color = Color::BLACK;

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    /// Packs into ARGB word order, alpha in the high byte.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(argb: u32) -> Color {
        Color {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
            a: (argb >> 24) as u8,
        }
    }
}

impl Default for Color {
    fn default() -> Color {
        Color::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_packing() {
        let c = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.to_argb(), 0x7812_3456);
        assert_eq!(Color::from_argb(0x7812_3456), c);
    }

    #[test]
    fn consts() {
        assert_eq!(Color::TRANSPARENT.to_argb(), 0);
        assert_eq!(Color::BLACK.to_argb(), 0xff00_0000);
        assert_eq!(Color::WHITE.to_argb(), 0xffff_ffff);
        assert_eq!(Color::default(), Color::BLACK);
    }
}

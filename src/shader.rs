use crate::color::Color;

/// Produces source pixels for a horizontal span. Implementations are what a
/// paint points at; the rasterizer asks them for `count` pixels starting at
/// device position `(x, y)`.
pub trait Shader {
    fn shade_span(&self, x: i32, y: i32, dest: &mut [u32], count: usize);
}

pub struct SolidShader {
    color: u32,
}

impl SolidShader {
    pub fn new(color: Color) -> SolidShader {
        SolidShader {
            color: color.to_argb(),
        }
    }
}

impl Shader for SolidShader {
    fn shade_span(&self, _x: i32, _y: i32, dest: &mut [u32], count: usize) {
        for i in 0..count {
            dest[i] = self.color;
        }
    }
}

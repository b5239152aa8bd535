mod color;
mod fixed;
mod geom;
mod shader;

mod paint;
pub use paint::*;

pub use crate::color::Color;
pub use crate::fixed::Fixed;
pub use crate::geom::{try_unit_divide, valid_unit_divide};
pub use crate::shader::{Shader, SolidShader};

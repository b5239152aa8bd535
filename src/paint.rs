use std::sync::Arc;

use bitflags::bitflags;

use crate::color::Color;
use crate::fixed::Fixed;
use crate::shader::Shader;

/// What a draw call does with the geometry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PaintMode {
    /// Draw nothing.
    None,
    Fill,
    Stroke,
    /// Fill, then stroke the outline.
    FillStroke,
}

/// How a stroked contour ends.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineCap {
    None,
    Butt,
    Round,
    Square,
}

/// How two stroked segments meet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LineJoin {
    None,
    Miter,
    Round,
    Bevel,
}

/// Which spans of a self-intersecting contour count as inside.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

/// Speed/fidelity trade-off hint consulted by the pipeline.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Quality {
    Low,
    Medium,
    High,
}

bitflags! {
    /// Feature toggles orthogonal to the paint mode.
    #[derive(Clone, Copy, PartialEq, Eq, Debug)]
    pub struct PaintFlags: u32 {
        const ANTI_ALIAS = 1 << 0;
        const BITMAP_FILTER = 1 << 1;
    }
}

/// The full set of properties consulted when geometry is drawn: what to do
/// with it (mode), how outlines are built (cap, join, rule, stroke width),
/// and what pixels to source (color, alpha, shader).
///
/// Cloning a paint is cheap. The shader, if any, is shared between the
/// clones rather than duplicated; replacing it on one clone does not affect
/// the other.
#[derive(Clone)]
pub struct Paint {
    mode: PaintMode,
    flags: PaintFlags,
    cap: LineCap,
    join: LineJoin,
    rule: FillRule,
    color: Color,
    alpha: u8,
    width: Fixed,
    quality: Quality,
    shader: Option<Arc<dyn Shader>>,
}

impl Paint {
    pub fn new() -> Paint {
        Paint {
            mode: PaintMode::None,
            flags: PaintFlags::empty(),
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            rule: FillRule::EvenOdd,
            color: Color::DEFAULT,
            alpha: 0xff,
            width: Fixed::ONE,
            quality: Quality::Medium,
            shader: None,
        }
    }

    /// Resets every property to its default and drops the shader reference.
    pub fn clear(&mut self) {
        *self = Paint::new();
    }

    pub fn mode(&self) -> PaintMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: PaintMode) {
        self.mode = mode;
    }

    pub fn flags(&self) -> PaintFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: PaintFlags) {
        self.flags = flags;
    }

    pub fn cap(&self) -> LineCap {
        self.cap
    }

    pub fn set_cap(&mut self, cap: LineCap) {
        self.cap = cap;
    }

    pub fn join(&self) -> LineJoin {
        self.join
    }

    pub fn set_join(&mut self, join: LineJoin) {
        self.join = join;
    }

    pub fn rule(&self) -> FillRule {
        self.rule
    }

    pub fn set_rule(&mut self, rule: FillRule) {
        self.rule = rule;
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Paint-wide opacity, applied on top of the color or shader output.
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.alpha = alpha;
    }

    pub fn stroke_width(&self) -> Fixed {
        self.width
    }

    /// Width must be non-negative and finite.
    pub fn set_stroke_width(&mut self, width: Fixed) {
        debug_assert!(width >= Fixed::ZERO && width.is_finite());
        self.width = width;
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn set_quality(&mut self, quality: Quality) {
        self.quality = quality;
    }

    pub fn shader(&self) -> Option<&Arc<dyn Shader>> {
        self.shader.as_ref()
    }

    pub fn set_shader(&mut self, shader: Option<Arc<dyn Shader>>) {
        self.shader = shader;
    }
}

impl Default for Paint {
    fn default() -> Paint {
        Paint::new()
    }
}

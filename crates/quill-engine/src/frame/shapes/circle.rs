use crate::coords::Vec2;
use crate::frame::FrameContext;
use crate::frame::instances::CircleInstance;
use crate::paint::Color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CircleStyle {
    pub color: Color,
    /// Ring thickness relative to the radius; `0` fills the disc.
    pub border_width: f32,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self { color: Color::BLACK, border_width: 0.01 }
    }
}

impl FrameContext {
    /// Records a circle.
    pub fn circle(&mut self, center: Vec2, radius: f32, style: CircleStyle) {
        style.color.debug_assert_premul();
        let (depth, clip_id) = self.stamp();
        self.circles.push(CircleInstance {
            center: center.to_array(),
            radius: radius.abs(),
            border_width: style.border_width,
            color: style.color.to_array(),
            depth,
            clip_id,
        });
    }

    /// Records a solid circle.
    #[inline]
    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.circle(center, radius, CircleStyle { color, border_width: 0.0 });
    }
}

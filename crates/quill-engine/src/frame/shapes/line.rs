use crate::coords::Vec2;
use crate::frame::FrameContext;
use crate::frame::instances::LineInstance;
use crate::paint::Color;

impl FrameContext {
    /// Records a line segment `width` logical pixels thick.
    pub fn line(&mut self, start: Vec2, end: Vec2, color: Color, width: f32) {
        color.debug_assert_premul();
        let (depth, clip_id) = self.stamp();
        self.lines.push(LineInstance {
            start: start.to_array(),
            end: end.to_array(),
            color: color.to_array(),
            width,
            depth,
            clip_id,
        });
    }
}

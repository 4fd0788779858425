use crate::coords::{CornerRadii, Rect};
use crate::frame::FrameContext;
use crate::frame::instances::RectInstance;
use crate::paint::Color;

/// Edge softness used when none is given.
pub const DEFAULT_CRISPNESS: f32 = 0.005;

/// Fill, rounding and border of a rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectStyle {
    pub color: Color,
    pub corner_radii: CornerRadii,
    pub border_color: Color,
    pub border_width: f32,
    pub crispness: f32,
}

impl Default for RectStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            corner_radii: CornerRadii::zero(),
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            crispness: DEFAULT_CRISPNESS,
        }
    }
}

impl RectStyle {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Self { color, ..Self::default() }
    }

    #[inline]
    pub fn rounded(color: Color, radius: f32) -> Self {
        Self { color, corner_radii: CornerRadii::all(radius), ..Self::default() }
    }

    #[inline]
    pub fn with_border(mut self, width: f32, color: Color) -> Self {
        self.border_width = width;
        self.border_color = color;
        self
    }
}

impl FrameContext {
    /// Records a rectangle.
    pub fn rect(&mut self, rect: Rect, style: RectStyle) {
        style.color.debug_assert_premul();
        style.border_color.debug_assert_premul();
        let (depth, clip_id) = self.stamp();
        let r = rect.normalized();
        self.rects.push(RectInstance {
            origin: r.origin.to_array(),
            size: r.size.to_array(),
            corner_radii: style.corner_radii.to_array(),
            color: style.color.to_array(),
            border_color: style.border_color.to_array(),
            border_width: style.border_width,
            crispness: style.crispness,
            depth,
            clip_id,
        });
    }

    /// Records a solid, square-cornered rectangle.
    #[inline]
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rect(rect, RectStyle::solid(color));
    }
}

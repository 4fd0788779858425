use super::Vec2;

/// Edge insets (padding) in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Inset {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Inset {
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// `vertical` applies to top and bottom, `horizontal` to left and right.
    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    #[inline]
    pub fn horizontal(self) -> f32 {
        self.left + self.right
    }

    #[inline]
    pub fn vertical(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn top_left(self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn inflate_size(self, size: Vec2) -> Vec2 {
        Vec2::new(size.x + self.horizontal(), size.y + self.vertical())
    }

    #[inline]
    pub fn deflate_size(self, size: Vec2) -> Vec2 {
        Vec2::new(size.x - self.horizontal(), size.y - self.vertical())
    }
}

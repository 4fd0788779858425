use crate::input::PointerState;

/// Outcome of a pointer hit-test against one primitive's bounds.
///
/// Carries the frame's pointer flags so reactions can be chained without
/// recomputing geometry:
///
/// ```ignore
/// frame.hit_test(bounds)
///     .mouse_over(|| color = color.scale_alpha(0.9))
///     .mouse_down(|| *checked = !*checked);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HitResult {
    hit: bool,
    pointer: PointerState,
}

impl HitResult {
    #[inline]
    pub(crate) fn new(hit: bool, pointer: PointerState) -> Self {
        Self { hit, pointer }
    }

    /// Pointer is inside the bounds and the active clip.
    #[inline]
    pub fn is_hit(self) -> bool {
        self.hit
    }

    /// Hit and the primary button went down this frame.
    #[inline]
    pub fn is_down(self) -> bool {
        self.hit && self.pointer.down
    }

    /// Hit and the primary button is held.
    #[inline]
    pub fn is_pressed(self) -> bool {
        self.hit && self.pointer.pressed
    }

    /// Hit and the primary button was released this frame.
    #[inline]
    pub fn is_up(self) -> bool {
        self.hit && self.pointer.up
    }

    #[inline]
    pub fn mouse_over(self, f: impl FnOnce()) -> Self {
        if self.hit {
            f();
        }
        self
    }

    #[inline]
    pub fn mouse_down(self, f: impl FnOnce()) -> Self {
        if self.is_down() {
            f();
        }
        self
    }

    #[inline]
    pub fn mouse_press(self, f: impl FnOnce()) -> Self {
        if self.is_pressed() {
            f();
        }
        self
    }

    #[inline]
    pub fn mouse_up(self, f: impl FnOnce()) -> Self {
        if self.is_up() {
            f();
        }
        self
    }
}

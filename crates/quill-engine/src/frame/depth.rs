/// First depth handed out in a frame.
pub const FIRST_DEPTH: f32 = 1.0;

/// Monotonic paint-order token.
///
/// Later primitives get larger depths and are drawn on top of earlier ones,
/// regardless of which batch they end up in. `f32` represents every integer
/// exactly up to 2^24, which bounds the primitives per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DepthCounter {
    next: f32,
}

impl DepthCounter {
    const MAX_EXACT: f32 = 16_777_216.0;

    #[inline]
    pub const fn new() -> Self {
        Self { next: FIRST_DEPTH }
    }

    /// Returns the current depth and advances the counter.
    #[inline]
    pub fn next_depth(&mut self) -> f32 {
        debug_assert!(self.next < Self::MAX_EXACT, "depth counter exhausted f32 precision");
        let d = self.next;
        self.next += 1.0;
        d
    }

    /// The depth the next primitive will receive.
    #[inline]
    pub fn peek(&self) -> f32 {
        self.next
    }

    #[inline]
    pub fn reset(&mut self) {
        self.next = FIRST_DEPTH;
    }
}

impl Default for DepthCounter {
    fn default() -> Self {
        Self::new()
    }
}

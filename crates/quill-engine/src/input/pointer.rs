use crate::coords::Vec2;

/// Snapshot of the primary pointer for one frame.
///
/// This is what hit-tests consult. `down` and `up` are edge flags that are
/// true only on the frame the transition happened; `pressed` is the level
/// flag (button held).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Pointer position in logical pixels.
    pub position: Vec2,
    /// Pointer movement since the previous frame.
    pub delta: Vec2,
    /// Accumulated wheel delta for this frame, in logical pixels.
    pub scroll: Vec2,
    /// Primary button went down this frame.
    pub down: bool,
    /// Primary button is held.
    pub pressed: bool,
    /// Primary button was released this frame.
    pub up: bool,
}

impl PointerState {
    /// A pointer resting at `position` with no buttons or motion.
    #[inline]
    pub fn at(position: Vec2) -> Self {
        Self { position, ..Self::default() }
    }
}

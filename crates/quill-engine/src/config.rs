//! Engine configuration.
//!
//! Everything here is read once when a [`FrameContext`](crate::frame::FrameContext)
//! is created; nothing is reloaded mid-frame.

/// Default number of textures one image batch may bind.
pub const DEFAULT_MAX_TEXTURE_SLOTS: usize = 31;

/// Default outward tolerance for pointer containment tests.
pub const DEFAULT_HIT_TOLERANCE: f32 = 1.0;

/// Initial capacity (in records) of each per-kind buffer.
///
/// These only size the first allocation; buffers grow on demand and keep
/// their capacity across frames.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchCapacities {
    pub rects: usize,
    pub circles: usize,
    pub lines: usize,
    pub glyphs: usize,
    /// Per image batch.
    pub images: usize,
    pub clips: usize,
}

impl Default for BatchCapacities {
    fn default() -> Self {
        Self {
            rects: 1024,
            circles: 64,
            lines: 64,
            glyphs: 4096,
            images: 64,
            clips: 32,
        }
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub capacities: BatchCapacities,
    /// Distinct textures per image batch. Backends usually bind 31 or 32.
    pub max_texture_slots: usize,
    pub hit_tolerance: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            capacities: BatchCapacities::default(),
            max_texture_slots: DEFAULT_MAX_TEXTURE_SLOTS,
            hit_tolerance: DEFAULT_HIT_TOLERANCE,
        }
    }
}

impl EngineConfig {
    pub fn with_capacities(mut self, capacities: BatchCapacities) -> Self {
        self.capacities = capacities;
        self
    }

    /// # Panics
    /// Panics if `slots` is zero.
    pub fn with_max_texture_slots(mut self, slots: usize) -> Self {
        assert!(slots > 0, "an image batch needs at least one texture slot");
        self.max_texture_slots = slots;
        self
    }

    pub fn with_hit_tolerance(mut self, tolerance: f32) -> Self {
        self.hit_tolerance = tolerance.max(0.0);
        self
    }
}

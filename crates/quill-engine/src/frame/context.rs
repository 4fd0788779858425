use crate::config::EngineConfig;
use crate::coords::{CornerRadii, Rect};
use crate::input::PointerState;
use crate::render::RenderBackend;

use super::buffer::InstanceBuffer;
use super::clip::{ClipId, ClipRegion, ClipStack};
use super::depth::DepthCounter;
use super::hit::HitResult;
use super::instances::{
    CircleInstance, ClipInstance, GlyphInstance, ImageInstance, LineInstance, RectInstance,
};
use super::textures::{ImageBatch, ImageBatches};

/// Per-frame counters, mostly for diagnostics.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct FrameStats {
    pub frame_index: u64,
    pub rects: usize,
    pub circles: usize,
    pub lines: usize,
    pub glyphs: usize,
    pub images: usize,
    pub image_batches: usize,
    pub clips: usize,
    /// Depth values handed out (one per primitive call or glyph run).
    pub primitives: usize,
}

/// Owner of all frame-scoped state: depth counter, clip stack, primitive
/// batches and the pointer snapshot hit-tests read.
///
/// Lifecycle: [`begin_frame`](Self::begin_frame) → draw calls →
/// [`end_frame`](Self::end_frame) (or [`submit`](Self::submit)). Buffers keep
/// their capacity between frames.
#[derive(Debug)]
pub struct FrameContext {
    config: EngineConfig,
    recording: bool,
    frame_index: u64,
    pointer: PointerState,

    depth: DepthCounter,
    clips: ClipStack,

    pub(super) rects: InstanceBuffer<RectInstance>,
    pub(super) circles: InstanceBuffer<CircleInstance>,
    pub(super) lines: InstanceBuffer<LineInstance>,
    pub(crate) glyphs: InstanceBuffer<GlyphInstance>,
    pub(super) images: ImageBatches,
}

impl FrameContext {
    pub fn new(config: EngineConfig) -> Self {
        let caps = config.capacities;
        Self {
            recording: false,
            frame_index: 0,
            pointer: PointerState::default(),
            depth: DepthCounter::new(),
            clips: ClipStack::with_capacity(caps.clips),
            rects: InstanceBuffer::with_capacity("rect", caps.rects),
            circles: InstanceBuffer::with_capacity("circle", caps.circles),
            lines: InstanceBuffer::with_capacity("line", caps.lines),
            glyphs: InstanceBuffer::with_capacity("glyph", caps.glyphs),
            images: ImageBatches::new(config.max_texture_slots, caps.images),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ── lifecycle ─────────────────────────────────────────────────────────

    /// Starts recording a frame: rewinds every batch, resets depth to 1 and
    /// forgets last frame's clips and texture assignments.
    pub fn begin_frame(&mut self, pointer: PointerState) {
        debug_assert!(!self.recording, "begin_frame called while a frame is being recorded");

        self.rects.reset();
        self.circles.reset();
        self.lines.reset();
        self.glyphs.reset();
        self.images.reset();
        self.clips.reset();
        self.depth.reset();

        self.pointer = pointer;
        self.recording = true;
        log::trace!("frame {} begin", self.frame_index);
    }

    /// Finishes the frame and returns a read-only view of its batches.
    ///
    /// The view borrows the context, so the next frame cannot begin while a
    /// backend still reads this one.
    pub fn end_frame(&mut self) -> FrameOutput<'_> {
        debug_assert!(self.recording, "end_frame called without begin_frame");
        debug_assert!(
            self.clips.is_balanced(),
            "clip stack imbalance at end of frame: {} region(s) still open",
            self.clips.depth()
        );
        if !self.clips.is_balanced() {
            log::warn!(
                "frame {}: {} clip region(s) left open; closing them",
                self.frame_index,
                self.clips.depth()
            );
            self.clips.unwind();
        }

        self.recording = false;
        let stats = self.stats();
        log::trace!("frame {} end: {:?}", self.frame_index, stats);
        self.frame_index = self.frame_index.wrapping_add(1);

        FrameOutput {
            stats,
            rects: self.rects.as_slice(),
            circles: self.circles.as_slice(),
            lines: self.lines.as_slice(),
            glyphs: self.glyphs.as_slice(),
            images: self.images.batches(),
            clips: self.clips.regions(),
            clip_table: self.clips.table(),
        }
    }

    /// Ends the frame and hands it to `backend` for its single submission.
    pub fn submit<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) -> FrameStats {
        let output = self.end_frame();
        backend.submit_frame(&output);
        output.stats
    }

    #[inline]
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Index of the frame currently (or next) being recorded.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frame_index: self.frame_index,
            rects: self.rects.len(),
            circles: self.circles.len(),
            lines: self.lines.len(),
            glyphs: self.glyphs.len(),
            images: self.images.image_count(),
            image_batches: self.images.batches().len(),
            clips: self.clips.regions().len(),
            primitives: (self.depth.peek() - super::depth::FIRST_DEPTH) as usize,
        }
    }

    // ── depth ─────────────────────────────────────────────────────────────

    /// Returns the next paint-order token.
    #[inline]
    pub fn next_depth(&mut self) -> f32 {
        self.depth.next_depth()
    }

    /// The depth the next primitive will receive.
    #[inline]
    pub fn peek_depth(&self) -> f32 {
        self.depth.peek()
    }

    /// Depth and clip id for a primitive being submitted now.
    #[inline]
    pub(crate) fn stamp(&mut self) -> (f32, u32) {
        debug_assert!(self.recording, "primitive submitted outside begin_frame/end_frame");
        (self.depth.next_depth(), self.clips.current().0 as u32)
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Opens a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect, corner_radii: CornerRadii, softness: f32) -> ClipId {
        self.clips.push(rect, corner_radii, softness)
    }

    /// Closes the most recent clip region.
    pub fn pop_clip(&mut self) {
        self.clips.pop();
    }

    /// Runs `body` inside a clip region and closes it afterwards.
    ///
    /// `body` receives the rect as passed in (not intersected with enclosing
    /// clips). The region is closed whichever way `body` returns.
    pub fn with_clip<R>(
        &mut self,
        rect: Rect,
        corner_radii: CornerRadii,
        softness: f32,
        body: impl FnOnce(&mut Self, Rect) -> R,
    ) -> R {
        let id = self.clips.push(rect, corner_radii, softness);
        let out = body(self, rect);
        self.clips.pop_to(id);
        out
    }

    /// [`with_clip`](Self::with_clip) with square corners and a hard edge.
    pub fn clip<R>(&mut self, rect: Rect, body: impl FnOnce(&mut Self, Rect) -> R) -> R {
        self.with_clip(rect, CornerRadii::zero(), 0.0, body)
    }

    #[inline]
    pub fn current_clip(&self) -> ClipId {
        self.clips.current()
    }

    #[inline]
    pub fn clip_region(&self, id: ClipId) -> Option<&ClipRegion> {
        self.clips.region(id)
    }

    // ── input ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Tests the pointer against `bounds` and the active clip region.
    ///
    /// The clip test uses the region's rect intersected with every enclosing
    /// clip. Outside any clip scope only `bounds` is tested.
    pub fn hit_test(&self, bounds: Rect) -> HitResult {
        let tol = self.config.hit_tolerance;
        let p = self.pointer.position;
        let in_clip = match self.clips.current_region() {
            None => true,
            Some(region) => !region.effective.is_empty() && region.effective.hit_contains(p, tol),
        };
        HitResult::new(in_clip && bounds.hit_contains(p, tol), self.pointer)
    }
}

impl Default for FrameContext {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

/// Read-only view of a finished frame, consumed by a [`RenderBackend`].
///
/// Paint order across batches is given by the `depth` field of each record,
/// not by batch order.
#[derive(Debug, Copy, Clone)]
pub struct FrameOutput<'a> {
    pub stats: FrameStats,
    pub rects: &'a [RectInstance],
    pub circles: &'a [CircleInstance],
    pub lines: &'a [LineInstance],
    pub glyphs: &'a [GlyphInstance],
    pub images: &'a [ImageBatch],
    pub clips: &'a [ClipRegion],
    pub clip_table: &'a [ClipInstance],
}

impl FrameOutput<'_> {
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.circles.is_empty()
            && self.lines.is_empty()
            && self.glyphs.is_empty()
            && self.images.is_empty()
    }

    /// Every image record of the frame, across batches.
    pub fn image_instances(&self) -> impl Iterator<Item = &ImageInstance> + '_ {
        self.images.iter().flat_map(|b| b.instances().iter())
    }
}

use crate::coords::{CornerRadii, Rect};

use super::buffer::InstanceBuffer;
use super::instances::ClipInstance;

/// Identifier of a clip region within one frame.
///
/// `ClipId::NONE` (0) means "unclipped". Real ids start at 1, are unique for
/// the frame and grow with push order, so a nested clip always has a larger
/// id than every clip enclosing it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ClipId(pub u16);

impl ClipId {
    pub const NONE: ClipId = ClipId(0);

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// Index into the frame's clip table.
    #[inline]
    fn index(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }
}

/// A clip region pushed during the frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClipRegion {
    /// Rect as supplied by the caller.
    pub rect: Rect,
    pub corner_radii: CornerRadii,
    pub softness: f32,
    pub id: ClipId,
    /// Enclosing clip at push time.
    pub parent: ClipId,
    /// `rect` intersected with every enclosing clip. Zero-area when they
    /// don't overlap.
    pub effective: Rect,
}

/// Stack of active clip regions plus the table of every region pushed this
/// frame.
///
/// Primitives reference the region on top of the stack by id; hit-tests use
/// that region's `effective` rect, so ancestors are honoured too.
#[derive(Debug)]
pub struct ClipStack {
    regions: Vec<ClipRegion>,
    table: InstanceBuffer<ClipInstance>,
    active: Vec<ClipId>,
    /// Pushes refused because the frame ran out of ids. They sit above
    /// everything in `active` and are popped first.
    refused: usize,
}

impl ClipStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
            table: InstanceBuffer::with_capacity("clip", capacity),
            active: Vec::with_capacity(capacity),
            refused: 0,
        }
    }

    /// Drops every region. Keeps allocated capacity for reuse.
    pub fn reset(&mut self) {
        self.regions.clear();
        self.table.reset();
        self.active.clear();
        self.refused = 0;
    }

    /// Opens a clip region and returns its id.
    ///
    /// Calls must be balanced with [`pop`](Self::pop).
    ///
    /// Past `u16::MAX` regions in one frame the push is refused: nothing is
    /// opened and the current id comes back, so content stays under the
    /// enclosing clip. The refused push still needs its `pop`.
    pub fn push(&mut self, rect: Rect, corner_radii: CornerRadii, softness: f32) -> ClipId {
        let Some(id) = u16::try_from(self.regions.len() + 1).ok().map(ClipId) else {
            if self.refused == 0 {
                log::warn!("more than {} clip regions in one frame; further clips ignored", u16::MAX);
            }
            self.refused += 1;
            return self.current();
        };
        let parent = self.current();
        let rect = rect.normalized();

        let effective = match self.current_region() {
            None => rect,
            // No overlap: a zero-area rect so nothing inside can be hit or drawn.
            Some(p) => p.effective.intersect(rect).unwrap_or(Rect::new(0.0, 0.0, 0.0, 0.0)),
        };

        self.regions.push(ClipRegion { rect, corner_radii, softness, id, parent, effective });
        self.table.push(ClipInstance {
            rect: [rect.origin.x, rect.origin.y, rect.size.x, rect.size.y],
            effective: [effective.origin.x, effective.origin.y, effective.size.x, effective.size.y],
            corner_radii: corner_radii.to_array(),
            softness,
            parent: parent.0 as u32,
            _pad: [0; 2],
        });
        self.active.push(id);
        id
    }

    /// Closes the most recent clip region.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push`.
    ///
    /// Returns the closed id, `None` when the matching push was refused.
    pub fn pop(&mut self) -> Option<ClipId> {
        if self.refused > 0 {
            self.refused -= 1;
            return None;
        }
        debug_assert!(!self.active.is_empty(), "pop_clip called without matching push_clip");
        self.active.pop()
    }

    /// Closes the scope opened by the push that returned `id`.
    ///
    /// Regions pushed after `id` and never popped are closed too; that is a
    /// caller bug and asserts in debug builds. Regions enclosing `id` are
    /// never touched, even when `id` itself was already popped.
    pub fn pop_to(&mut self, id: ClipId) {
        if self.refused > 0 {
            self.refused -= 1;
            return;
        }
        let current = self.current();
        debug_assert!(current <= id, "clip {current:?} opened inside scoped clip {id:?} was never closed");
        if current < id {
            log::warn!("scoped clip {id:?} was already popped by its body");
        }
        // Ids grow with nesting: everything at or above `id` belongs to the scope.
        while self.active.last().is_some_and(|&top| top >= id) {
            self.active.pop();
        }
    }

    /// Id of the clip on top of the stack, `ClipId::NONE` when unclipped.
    #[inline]
    pub fn current(&self) -> ClipId {
        self.active.last().copied().unwrap_or(ClipId::NONE)
    }

    #[inline]
    pub fn current_region(&self) -> Option<&ClipRegion> {
        self.region(self.current())
    }

    #[inline]
    pub fn region(&self, id: ClipId) -> Option<&ClipRegion> {
        id.index().and_then(|i| self.regions.get(i))
    }

    /// Every region pushed this frame, in id order.
    #[inline]
    pub fn regions(&self) -> &[ClipRegion] {
        &self.regions
    }

    #[inline]
    pub fn table(&self) -> &[ClipInstance] {
        self.table.as_slice()
    }

    /// Number of currently open regions.
    #[inline]
    pub fn depth(&self) -> usize {
        self.active.len() + self.refused
    }

    #[inline]
    pub fn is_balanced(&self) -> bool {
        self.depth() == 0
    }

    /// Closes every open region.
    pub(crate) fn unwind(&mut self) {
        self.active.clear();
        self.refused = 0;
    }
}

use std::collections::HashMap;

use super::buffer::InstanceBuffer;
use super::instances::ImageInstance;

/// Opaque, backend-defined texture handle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct TextureId(pub u64);

/// Where a texture is bound for the current frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TextureBatch {
    pub batch_index: usize,
    pub slot: usize,
}

/// Assigns textures to (batch, slot) pairs so that no batch binds more than
/// `max_slots` distinct textures.
///
/// Assignments only hold for the frame they were made in.
#[derive(Debug)]
pub struct TextureBatcher {
    max_slots: usize,
    assigned: HashMap<TextureId, TextureBatch>,
    opened: usize,
    next_slot: usize,
}

impl TextureBatcher {
    pub fn new(max_slots: usize) -> Self {
        debug_assert!(max_slots > 0);
        Self { max_slots, assigned: HashMap::new(), opened: 0, next_slot: 0 }
    }

    #[inline]
    pub fn max_slots(&self) -> usize {
        self.max_slots
    }

    /// Returns the texture's batch/slot, assigning the next free slot on
    /// first sight. A full batch is only left behind when a new texture needs
    /// a slot.
    pub fn batch_for(&mut self, texture: TextureId) -> TextureBatch {
        self.assign(texture).0
    }

    /// Like [`batch_for`](Self::batch_for), also reporting whether the
    /// texture was seen for the first time this frame.
    pub(crate) fn assign(&mut self, texture: TextureId) -> (TextureBatch, bool) {
        if let Some(batch) = self.assigned.get(&texture) {
            return (*batch, false);
        }

        if self.opened == 0 {
            self.opened = 1;
        } else if self.next_slot == self.max_slots {
            self.opened += 1;
            self.next_slot = 0;
            log::debug!("texture batch {} opened", self.opened - 1);
        }

        let batch = TextureBatch { batch_index: self.opened - 1, slot: self.next_slot };
        debug_assert!(batch.slot < self.max_slots);
        self.next_slot += 1;
        self.assigned.insert(texture, batch);
        (batch, true)
    }

    /// Number of batch indices opened this frame.
    #[inline]
    pub fn batch_count(&self) -> usize {
        self.opened
    }

    pub fn reset(&mut self) {
        self.assigned.clear();
        self.opened = 0;
        self.next_slot = 0;
    }
}

/// Images sharing one draw call: at most `max_slots` textures.
#[derive(Debug)]
pub struct ImageBatch {
    textures: Vec<TextureId>,
    instances: InstanceBuffer<ImageInstance>,
}

impl ImageBatch {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            textures: Vec::new(),
            instances: InstanceBuffer::with_capacity("image", capacity),
        }
    }

    fn reset(&mut self) {
        self.textures.clear();
        self.instances.reset();
    }

    /// Textures to bind, indexed by `ImageInstance::texture_slot`.
    #[inline]
    pub fn textures(&self) -> &[TextureId] {
        &self.textures
    }

    #[inline]
    pub fn instances(&self) -> &[ImageInstance] {
        self.instances.as_slice()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.instances.as_bytes()
    }
}

/// Per-frame image batches. Batch storage is reused across frames.
#[derive(Debug)]
pub(crate) struct ImageBatches {
    batcher: TextureBatcher,
    batches: Vec<ImageBatch>,
    active: usize,
    capacity: usize,
}

impl ImageBatches {
    pub(crate) fn new(max_slots: usize, capacity: usize) -> Self {
        Self { batcher: TextureBatcher::new(max_slots), batches: Vec::new(), active: 0, capacity }
    }

    pub(crate) fn reset(&mut self) {
        for batch in &mut self.batches[..self.active] {
            batch.reset();
        }
        self.active = 0;
        self.batcher.reset();
    }

    /// Routes `instance` to its texture's batch and fills in the slot.
    pub(crate) fn push(&mut self, texture: TextureId, mut instance: ImageInstance) -> TextureBatch {
        let (tb, first_sight) = self.batcher.assign(texture);

        while self.active <= tb.batch_index {
            if self.active == self.batches.len() {
                self.batches.push(ImageBatch::with_capacity(self.capacity));
            } else {
                self.batches[self.active].reset();
            }
            self.active += 1;
        }

        let batch = &mut self.batches[tb.batch_index];
        if first_sight {
            debug_assert_eq!(batch.textures.len(), tb.slot);
            batch.textures.push(texture);
        }
        instance.texture_slot = tb.slot as u32;
        batch.instances.push(instance);
        tb
    }

    #[inline]
    pub(crate) fn batches(&self) -> &[ImageBatch] {
        &self.batches[..self.active]
    }

    pub(crate) fn image_count(&self) -> usize {
        self.batches().iter().map(|b| b.instances.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_texture_keeps_its_slot() {
        let mut b = TextureBatcher::new(4);
        let first = b.batch_for(TextureId(9));
        b.batch_for(TextureId(10));
        assert_eq!(b.batch_for(TextureId(9)), first);
    }

    #[test]
    fn full_batch_opens_next_index_lazily() {
        let mut b = TextureBatcher::new(2);
        assert_eq!(b.batch_for(TextureId(1)), TextureBatch { batch_index: 0, slot: 0 });
        assert_eq!(b.batch_for(TextureId(2)), TextureBatch { batch_index: 0, slot: 1 });
        // Exactly full: no empty batch opened yet.
        assert_eq!(b.batch_count(), 1);
        assert_eq!(b.batch_for(TextureId(3)), TextureBatch { batch_index: 1, slot: 0 });
        assert_eq!(b.batch_count(), 2);
    }

    #[test]
    fn reset_forgets_assignments() {
        let mut b = TextureBatcher::new(2);
        b.batch_for(TextureId(1));
        b.batch_for(TextureId(2));
        b.reset();
        assert_eq!(b.batch_count(), 0);
        assert_eq!(b.batch_for(TextureId(2)), TextureBatch { batch_index: 0, slot: 0 });
    }

    #[test]
    fn image_batches_record_textures_in_slot_order() {
        let mut images = ImageBatches::new(2, 1);
        let inst = ImageInstance { origin: [0.0; 2], size: [1.0; 2], texture_slot: 0, depth: 1.0, clip_id: 0 };
        images.push(TextureId(5), inst);
        images.push(TextureId(6), inst);
        images.push(TextureId(5), inst);
        images.push(TextureId(7), inst);

        let batches = images.batches();
        assert_eq!(batches.len(), 2);
        assert_eq!(batches[0].textures(), &[TextureId(5), TextureId(6)]);
        assert_eq!(batches[0].instances().iter().map(|i| i.texture_slot).collect::<Vec<_>>(), vec![0, 1, 0]);
        assert_eq!(batches[1].textures(), &[TextureId(7)]);
        assert_eq!(images.image_count(), 4);
    }
}

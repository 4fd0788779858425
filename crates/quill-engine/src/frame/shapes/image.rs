use crate::coords::Rect;
use crate::frame::FrameContext;
use crate::frame::instances::ImageInstance;
use crate::frame::textures::{TextureBatch, TextureId};

impl FrameContext {
    /// Records a textured quad and returns the batch/slot the texture was
    /// routed to for this frame.
    pub fn image(&mut self, rect: Rect, texture: TextureId) -> TextureBatch {
        let (depth, clip_id) = self.stamp();
        let r = rect.normalized();
        self.images.push(
            texture,
            ImageInstance {
                origin: r.origin.to_array(),
                size: r.size.to_array(),
                texture_slot: 0,
                depth,
                clip_id,
            },
        )
    }
}

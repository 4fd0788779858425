use crate::frame::instances::{
    CircleInstance, ClipInstance, GlyphInstance, ImageInstance, LineInstance, RectInstance,
};
use crate::frame::{FrameOutput, FrameStats, TextureId};

use super::RenderBackend;

/// Owned copy of one submitted frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedFrame {
    pub stats: FrameStats,
    pub rects: Vec<RectInstance>,
    pub circles: Vec<CircleInstance>,
    pub lines: Vec<LineInstance>,
    pub glyphs: Vec<GlyphInstance>,
    /// One entry per image batch: bound textures and their records.
    pub images: Vec<(Vec<TextureId>, Vec<ImageInstance>)>,
    pub clip_table: Vec<ClipInstance>,
}

impl RecordedFrame {
    /// Every depth value of the frame, across all kinds, in ascending order.
    pub fn depths(&self) -> Vec<f32> {
        let mut out: Vec<f32> = self
            .rects
            .iter()
            .map(|r| r.depth)
            .chain(self.circles.iter().map(|c| c.depth))
            .chain(self.lines.iter().map(|l| l.depth))
            .chain(self.glyphs.iter().map(|g| g.depth))
            .chain(self.images.iter().flat_map(|(_, i)| i.iter().map(|i| i.depth)))
            .collect();
        out.sort_by(f32::total_cmp);
        out.dedup();
        out
    }
}

/// Backend that keeps a copy of every frame it receives.
///
/// Handy for tests and for headless runs that only want to inspect output.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    frames: Vec<RecordedFrame>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    #[inline]
    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl RenderBackend for RecordingBackend {
    fn submit_frame(&mut self, frame: &FrameOutput<'_>) {
        self.frames.push(RecordedFrame {
            stats: frame.stats,
            rects: frame.rects.to_vec(),
            circles: frame.circles.to_vec(),
            lines: frame.lines.to_vec(),
            glyphs: frame.glyphs.to_vec(),
            images: frame
                .images
                .iter()
                .map(|b| (b.textures().to_vec(), b.instances().to_vec()))
                .collect(),
            clip_table: frame.clip_table.to_vec(),
        });
    }
}

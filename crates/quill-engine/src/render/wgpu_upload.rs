use crate::frame::{FrameOutput, TextureId};

use super::RenderBackend;

/// Smallest buffer ever allocated, in bytes.
const MIN_BUFFER_BYTES: u64 = 256;

/// Capacity a buffer grows to when `needed` bytes don't fit in `current`.
#[inline]
fn grown_capacity(current: u64, needed: u64) -> u64 {
    needed.max(current.saturating_mul(2)).max(MIN_BUFFER_BYTES)
}

/// A GPU buffer holding one kind of instance record.
///
/// Reallocated only when a frame outgrows it; otherwise rewritten in place.
#[derive(Debug)]
pub struct GpuInstanceBuffer {
    label: &'static str,
    usage: wgpu::BufferUsages,
    buffer: Option<wgpu::Buffer>,
    capacity: u64,
    len: u32,
}

impl GpuInstanceBuffer {
    fn new(label: &'static str, usage: wgpu::BufferUsages) -> Self {
        Self { label, usage: usage | wgpu::BufferUsages::COPY_DST, buffer: None, capacity: 0, len: 0 }
    }

    /// Buffer holding the last upload. `None` until something was uploaded.
    #[inline]
    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    /// Records uploaded by the last frame.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Allocated size in bytes.
    #[inline]
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Byte slice to bind for the last upload, `None` when it was empty.
    pub fn slice(&self) -> Option<wgpu::BufferSlice<'_>> {
        if self.len == 0 {
            return None;
        }
        self.buffer.as_ref().map(|b| b.slice(..))
    }

    fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, bytes: &[u8], count: usize) {
        self.len = count as u32;
        if bytes.is_empty() {
            return;
        }

        let needed = bytes.len() as u64;
        if self.buffer.is_none() || needed > self.capacity {
            let new_cap = grown_capacity(self.capacity, needed);
            log::debug!("{} gpu buffer: {} -> {} bytes", self.label, self.capacity, new_cap);
            self.buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some(self.label),
                size: new_cap,
                usage: self.usage,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
        }

        let Some(buffer) = self.buffer.as_ref() else { return };
        queue.write_buffer(buffer, 0, bytes);
    }
}

/// Uploaded image batch: its instance buffer and the textures to bind,
/// indexed by `ImageInstance::texture_slot`.
#[derive(Debug)]
pub struct GpuImageBatch {
    pub instances: GpuInstanceBuffer,
    pub textures: Vec<TextureId>,
}

/// Backend that uploads every batch of a frame into wgpu buffers.
///
/// Pipelines and draw calls are left to the caller: after
/// [`submit_frame`](RenderBackend::submit_frame) the buffers below hold the
/// frame's records, ready to bind as instance vertex buffers (and the clip
/// table as a storage buffer).
#[derive(Debug)]
pub struct WgpuUploader<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,

    pub rects: GpuInstanceBuffer,
    pub circles: GpuInstanceBuffer,
    pub lines: GpuInstanceBuffer,
    pub glyphs: GpuInstanceBuffer,
    pub clips: GpuInstanceBuffer,

    images: Vec<GpuImageBatch>,
    image_batches: usize,
}

impl<'a> WgpuUploader<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        let vertex = wgpu::BufferUsages::VERTEX;
        Self {
            device,
            queue,
            rects: GpuInstanceBuffer::new("quill rect instances", vertex),
            circles: GpuInstanceBuffer::new("quill circle instances", vertex),
            lines: GpuInstanceBuffer::new("quill line instances", vertex),
            glyphs: GpuInstanceBuffer::new("quill glyph instances", vertex),
            clips: GpuInstanceBuffer::new("quill clip table", wgpu::BufferUsages::STORAGE),
            images: Vec::new(),
            image_batches: 0,
        }
    }

    /// Image batches of the last frame, in batch-index order.
    #[inline]
    pub fn image_batches(&self) -> &[GpuImageBatch] {
        &self.images[..self.image_batches]
    }
}

impl RenderBackend for WgpuUploader<'_> {
    fn submit_frame(&mut self, frame: &FrameOutput<'_>) {
        let (device, queue) = (self.device, self.queue);

        self.rects.upload(device, queue, bytemuck::cast_slice(frame.rects), frame.rects.len());
        self.circles.upload(device, queue, bytemuck::cast_slice(frame.circles), frame.circles.len());
        self.lines.upload(device, queue, bytemuck::cast_slice(frame.lines), frame.lines.len());
        self.glyphs.upload(device, queue, bytemuck::cast_slice(frame.glyphs), frame.glyphs.len());
        self.clips.upload(device, queue, bytemuck::cast_slice(frame.clip_table), frame.clip_table.len());

        for (i, batch) in frame.images.iter().enumerate() {
            if i == self.images.len() {
                self.images.push(GpuImageBatch {
                    instances: GpuInstanceBuffer::new("quill image instances", wgpu::BufferUsages::VERTEX),
                    textures: Vec::new(),
                });
            }
            let gpu = &mut self.images[i];
            gpu.instances.upload(device, queue, batch.as_bytes(), batch.instances().len());
            gpu.textures.clear();
            gpu.textures.extend_from_slice(batch.textures());
        }
        self.image_batches = frame.images.len();

        log::trace!(
            "frame {} uploaded: {} rects, {} glyphs, {} image batches",
            frame.stats.frame_index,
            frame.rects.len(),
            frame.glyphs.len(),
            self.image_batches
        );
    }
}

//! Backend seam.
//!
//! The engine never talks to a GPU itself. A finished frame is handed to a
//! [`RenderBackend`] as a borrowed [`FrameOutput`](crate::frame::FrameOutput);
//! the backend uploads the batches and draws them in depth order.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - colors are linear premultiplied RGBA
//! - `clip_id` 0 means unclipped, otherwise it indexes the clip table at `id - 1`

mod backend;
mod recording;
mod wgpu_upload;

pub use backend::RenderBackend;
pub use recording::{RecordedFrame, RecordingBackend};
pub use wgpu_upload::{GpuInstanceBuffer, GpuImageBatch, WgpuUploader};

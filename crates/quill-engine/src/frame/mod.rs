//! Frame accumulation engine.
//!
//! Responsibilities:
//! - hand out monotonic depth values (paint order across every batch)
//! - keep the clip stack and the frame's clip table
//! - append primitives to per-kind, reusable instance buffers
//! - group images into texture-slot-bounded batches
//! - answer pointer hit-tests against bounds and the active clip

mod buffer;
mod clip;
mod context;
mod depth;
mod hit;
mod textures;

pub mod instances;
pub mod shapes;

pub use buffer::InstanceBuffer;
pub use clip::{ClipId, ClipRegion, ClipStack};
pub use context::{FrameContext, FrameOutput, FrameStats};
pub use depth::{DepthCounter, FIRST_DEPTH};
pub use hit::HitResult;
pub use shapes::{CircleStyle, GlyphQuad, RectStyle};
pub use textures::{ImageBatch, TextureBatch, TextureBatcher, TextureId};

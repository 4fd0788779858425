//! Quill engine crate.
//!
//! Immediate-mode draw accumulation: every frame, UI code calls drawing and
//! hit-test functions on a [`FrameContext`]; the context hands out paint-order
//! depth values, tracks nested clip regions, appends GPU-ready records to
//! per-kind batches and finally passes the frame to a
//! [`RenderBackend`](render::RenderBackend).

pub mod config;
pub mod coords;
pub mod error;
pub mod frame;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;

pub use config::{BatchCapacities, EngineConfig};
pub use error::EngineError;
pub use frame::{FrameContext, FrameOutput, FrameStats, HitResult};

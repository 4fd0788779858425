//! GPU-ready instance records.
//!
//! Every record is `#[repr(C)]` and `Pod` so a backend can upload a whole
//! batch with `bytemuck::cast_slice`. All fields are 4-byte scalars; there is
//! no implicit padding.

use bytemuck::{Pod, Zeroable};

/// Rectangle (optionally rounded and bordered).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    /// tl, tr, br, bl
    pub corner_radii: [f32; 4],
    pub color: [f32; 4],
    pub border_color: [f32; 4],
    pub border_width: f32,
    /// Edge softness of the SDF; larger values blur the edge.
    pub crispness: f32,
    pub depth: f32,
    pub clip_id: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct CircleInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub border_width: f32,
    pub color: [f32; 4],
    pub depth: f32,
    pub clip_id: u32,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct LineInstance {
    pub start: [f32; 2],
    pub end: [f32; 2],
    pub color: [f32; 4],
    pub width: f32,
    pub depth: f32,
    pub clip_id: u32,
}

/// One glyph quad sampling the font atlas.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GlyphInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub uv_min: [f32; 2],
    pub uv_max: [f32; 2],
    pub color: [f32; 4],
    pub crispness: f32,
    pub depth: f32,
    pub clip_id: u32,
}

/// Textured quad. `texture_slot` indexes the texture list of the image batch
/// this record lives in.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ImageInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub texture_slot: u32,
    pub depth: f32,
    pub clip_id: u32,
}

/// Clip table entry, indexed by `clip_id - 1` in shaders.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ClipInstance {
    /// Rect as pushed: x, y, w, h.
    pub rect: [f32; 4],
    /// Rect intersected with every enclosing clip: x, y, w, h.
    pub effective: [f32; 4],
    pub corner_radii: [f32; 4],
    pub softness: f32,
    /// Enclosing clip id, `0` for a root clip.
    pub parent: u32,
    pub _pad: [u32; 2],
}

//! Primitive submission helpers, one file per primitive kind.
//!
//! Each helper stamps the next depth and the active clip id and appends one
//! record to the kind's batch.

pub(crate) mod circle;
pub(crate) mod glyph;
pub(crate) mod image;
pub(crate) mod line;
pub(crate) mod rect;

pub use circle::CircleStyle;
pub use glyph::GlyphQuad;
pub use rect::RectStyle;

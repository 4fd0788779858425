//! Text: glyph metrics, the fontdue-backed glyph atlas and glyph-run layout.
//!
//! The frame engine only needs [`GlyphMetricsSource`]; rasterization stays
//! behind that trait.

mod atlas;
mod font_system;
mod layout;
mod metrics;

pub use atlas::GlyphAtlas;
pub use font_system::FontSystem;
pub use layout::{measure_text, TextStyle};
pub use metrics::{GlyphMetrics, GlyphMetricsSource, LINE_HEIGHT_RATIO, line_height};

use thiserror::Error;

/// Errors from engine setup paths (fonts, glyph atlas).
///
/// The per-frame draw path never returns errors.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("font load error: {0}")]
    FontLoad(String),

    #[error("glyph atlas is full ({width}x{height}); cannot place a {glyph_w}x{glyph_h} glyph")]
    AtlasFull { width: u32, height: u32, glyph_w: u32, glyph_h: u32 },
}

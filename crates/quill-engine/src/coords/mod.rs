//! Coordinate and geometry types shared by the frame engine and widgets.
//!
//! Canonical CPU space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down

mod corner_radii;
mod inset;
mod rect;
mod vec2;

pub use corner_radii::CornerRadii;
pub use inset::Inset;
pub use rect::Rect;
pub use vec2::Vec2;

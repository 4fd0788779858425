//! Color model shared between widgets and the instance buffers.
//!
//! Colors are linear premultiplied RGBA; backends blend with
//! `One, OneMinusSrcAlpha`.

pub mod color;

pub use color::Color;

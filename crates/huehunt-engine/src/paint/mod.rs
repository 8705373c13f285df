//! Paint model for overlay marks.
//!
//! Colors are premultiplied `f32` RGBA; the raster stores straight-alpha bytes,
//! so blending converts at the boundary.

pub mod color;

pub use color::Color;

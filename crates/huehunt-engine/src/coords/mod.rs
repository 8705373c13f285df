//! Raster coordinate types.
//!
//! Canonical space:
//! - pixels, origin top-left
//! - +X right, +Y down
//!
//! Angles measured with `atan2(dy, dx)` therefore run clockwise on screen.

mod point;
mod vec2;

pub use point::Point;
pub use vec2::Vec2;

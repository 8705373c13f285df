//! huehunt engine crate.
//!
//! Owns the CPU raster the color wheel is painted into, the wheel and overlay
//! renderers, and process-wide logging setup.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod wheel;

pub use coords::{Point, Vec2};
pub use raster::{Raster, RasterError};
pub use wheel::{DiscGeometry, Overlay, OverlayStyle, WheelRenderer, render_disc};

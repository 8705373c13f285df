//! Color wheel rendering.
//!
//! - [`render_disc`]: the hue/saturation disc at wheel lightness
//! - [`WheelRenderer::render_overlay`]: disc + highlight + markers
//!
//! Both are pure functions of their inputs; the only state is the
//! [`OverlayStyle`] held by the renderer.

mod disc;
mod geometry;
mod overlay;

pub use disc::{paint_disc, render_disc};
pub use geometry::DiscGeometry;
pub use overlay::{DEFAULT_HIGHLIGHT_THRESHOLD, Overlay, OverlayStyle, WheelRenderer};

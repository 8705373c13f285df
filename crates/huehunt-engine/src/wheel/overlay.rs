use huehunt_color::{Rgb, rgb_to_hsl, similarity};

use crate::coords::{Point, Vec2};
use crate::paint::Color;
use crate::raster::Raster;
use crate::scene::{Layer, Mark, MarkList};

use super::disc::{paint_disc, render_disc};
use super::DiscGeometry;

/// Similarity at or above which the overlay highlights a disc region.
pub const DEFAULT_HIGHLIGHT_THRESHOLD: f64 = 90.0;

/// What to draw on top of the disc after a guess.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Overlay {
    pub target: Rgb,
    pub click: Option<Point>,
    pub highlight_threshold: f64,
}

impl Overlay {
    pub fn new(target: Rgb) -> Self {
        Self { target, click: None, highlight_threshold: DEFAULT_HIGHLIGHT_THRESHOLD }
    }

    pub fn click(mut self, p: Point) -> Self {
        self.click = Some(p);
        self
    }

    pub fn highlight_threshold(mut self, t: f64) -> Self {
        self.highlight_threshold = t;
        self
    }
}

/// Visual parameters for overlay marks.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayStyle {
    /// Grid spacing of the highlight scan, in pixels on both axes.
    pub highlight_stride: u32,
    pub highlight_color: Color,
    pub ring_radius: f64,
    pub ring_width: f64,
    pub target_ring_color: Color,
    pub click_ring_color: Color,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            highlight_stride: 2,
            highlight_color: Color::from_straight(1.0, 1.0, 1.0, 0.35),
            ring_radius: 8.0,
            ring_width: 2.0,
            target_ring_color: Color::from_srgb_u8(255, 255, 255, 255),
            click_ring_color: Color::from_srgb_u8(0, 0, 0, 255),
        }
    }
}

/// Paints the wheel and its result overlay.
///
/// # Example
/// ```rust
/// use huehunt_color::Rgb;
/// use huehunt_engine::{Overlay, Point, WheelRenderer};
///
/// let renderer = WheelRenderer::new();
/// let mut raster = renderer.render_disc(300);
/// renderer.render_overlay(&mut raster, &Overlay::new(Rgb::new(255, 0, 0)).click(Point::new(299, 150)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WheelRenderer {
    style: OverlayStyle,
}

impl WheelRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: OverlayStyle) -> Self {
        Self { style }
    }

    #[inline]
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    /// See [`render_disc`].
    #[inline]
    pub fn render_disc(&self, side: u32) -> Raster {
        render_disc(side)
    }

    /// Repaints the base disc into `raster`, then paints, in order, the
    /// high-similarity highlight, the target ring and the click ring.
    pub fn render_overlay(&self, raster: &mut Raster, overlay: &Overlay) {
        paint_disc(raster);
        let marks = self.overlay_marks(raster, overlay);
        log::debug!(
            "overlay: {} highlight blocks, click={:?}",
            marks.count(Layer::Highlight),
            overlay.click
        );
        marks.paint(raster);
    }

    /// Builds the overlay marks for a raster holding the freshly painted disc.
    pub fn overlay_marks(&self, disc: &Raster, overlay: &Overlay) -> MarkList {
        let side = disc.side();
        let geometry = DiscGeometry::for_side(side);
        let stride = self.style.highlight_stride.max(1);
        let mut marks = MarkList::new();

        for y in (0..side).step_by(stride as usize) {
            for x in (0..side).step_by(stride as usize) {
                let p = Point::new(x, y);
                if !geometry.contains(p) {
                    continue;
                }
                let Ok(rgb) = disc.read_pixel(p) else { continue };
                if similarity(rgb, overlay.target) >= overlay.highlight_threshold {
                    marks.push(
                        Layer::Highlight,
                        Mark::Block { x, y, size: stride, color: self.style.highlight_color },
                    );
                }
            }
        }

        let target_at = geometry.position_of(rgb_to_hsl(overlay.target));
        marks.push(Layer::TargetMarker, self.ring(target_at, self.style.target_ring_color));

        if let Some(click) = overlay.click {
            marks.push(Layer::ClickMarker, self.ring(click.into(), self.style.click_ring_color));
        }

        marks
    }

    fn ring(&self, center: Vec2, color: Color) -> Mark {
        Mark::Ring {
            center,
            radius: self.style.ring_radius,
            width: self.style.ring_width,
            color,
        }
    }
}

//! Square RGBA8 raster the wheel is painted into.
//!
//! Pixels start fully transparent. Only the renderer writes; callers get
//! read-only access through [`Raster::read_pixel`] and friends.

mod error;

use std::path::Path;

use huehunt_color::Rgb;
use image::{Rgba, RgbaImage};

use crate::coords::Point;
use crate::paint::Color;

pub use error::RasterError;

/// Square straight-alpha RGBA8 buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    /// A fully transparent `side × side` raster.
    pub fn new(side: u32) -> Self {
        Self { image: RgbaImage::new(side, side) }
    }

    #[inline]
    pub fn side(&self) -> u32 {
        self.image.width()
    }

    /// Half-open containment: `[0, side)` on both axes.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x < self.side() && p.y < self.side()
    }

    /// Returns the RGB stored at `p`.
    ///
    /// Unpainted pixels read as black, the color channels of a transparent pixel.
    pub fn read_pixel(&self, p: Point) -> Result<Rgb, RasterError> {
        let [r, g, b, _] = self.checked(p)?.0;
        Ok(Rgb::new(r, g, b))
    }

    /// Straight-alpha bytes at `p`.
    pub fn read_rgba(&self, p: Point) -> Result<[u8; 4], RasterError> {
        Ok(self.checked(p)?.0)
    }

    /// Whether anything has been painted at `p`.
    pub fn is_painted(&self, p: Point) -> Result<bool, RasterError> {
        Ok(self.checked(p)?.0[3] > 0)
    }

    /// Resets every pixel to transparent, keeping the allocation.
    pub fn clear(&mut self) {
        for px in self.image.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
    }

    #[inline]
    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Writes the raster as a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RasterError> {
        self.image
            .save_with_format(path.as_ref(), image::ImageFormat::Png)?;
        log::debug!("raster saved to {}", path.as_ref().display());
        Ok(())
    }

    // ── renderer access ───────────────────────────────────────────────────

    /// Opaque write. Callers guarantee `x, y < side`.
    #[inline]
    pub(crate) fn put(&mut self, x: u32, y: u32, rgb: Rgb) {
        self.image.put_pixel(x, y, Rgba([rgb.r, rgb.g, rgb.b, 255]));
    }

    /// Source-over blend. Callers guarantee `x, y < side`.
    #[inline]
    pub(crate) fn blend(&mut self, x: u32, y: u32, color: Color) {
        let px = self.image.get_pixel_mut(x, y);
        px.0 = color.over(px.0);
    }

    #[inline]
    pub(crate) fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.image.get_pixel(x, y).0[3]
    }

    fn checked(&self, p: Point) -> Result<&Rgba<u8>, RasterError> {
        if !self.contains(p) {
            return Err(RasterError::OutOfBounds { x: p.x, y: p.y, side: self.side() });
        }
        Ok(self.image.get_pixel(p.x, p.y))
    }
}

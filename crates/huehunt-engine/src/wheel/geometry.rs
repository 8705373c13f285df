use huehunt_color::Hsl;

use crate::coords::{Point, Vec2};

/// Placement of the disc inside a square raster of side `n`:
/// center `(n / 2, n / 2)`, radius `n / 2`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DiscGeometry {
    pub center: Vec2,
    pub radius: f64,
}

impl DiscGeometry {
    pub fn for_side(side: u32) -> Self {
        let half = f64::from(side) / 2.0;
        Self { center: Vec2::new(half, half), radius: half }
    }

    /// Offset of pixel `(x, y)` from the center.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> Vec2 {
        Vec2::new(f64::from(x), f64::from(y)) - self.center
    }

    /// Hue (degrees) and saturation of a pixel, or `None` outside the disc.
    pub fn hue_saturation(&self, x: u32, y: u32) -> Option<(f64, f64)> {
        if self.radius <= 0.0 {
            return None;
        }
        let off = self.offset(x, y);
        let d = off.length();
        if d > self.radius {
            return None;
        }
        Some((off.angle(), d / self.radius))
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.hue_saturation(p.x, p.y).is_some()
    }

    /// Where a color sits on the wheel: polar `(h, s · radius)` to cartesian.
    pub fn position_of(&self, hsl: Hsl) -> Vec2 {
        self.center + Vec2::from_angle(hsl.h) * (hsl.s * self.radius)
    }
}

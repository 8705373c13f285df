use crate::coords::Vec2;
use crate::paint::Color;
use crate::raster::Raster;

/// Overlay primitive.
///
/// Extending the overlay:
/// - add a variant here
/// - rasterize it in [`Mark::paint`]
#[derive(Debug, Clone, PartialEq)]
pub enum Mark {
    /// `size × size` block anchored at `(x, y)`, blended only over pixels
    /// that are already painted so the fill never leaks outside the disc.
    Block { x: u32, y: u32, size: u32, color: Color },
    /// Circle outline: pixels whose distance from `center` lies within
    /// `radius ± width / 2`. May extend past the disc and is clipped to the raster.
    Ring { center: Vec2, radius: f64, width: f64, color: Color },
}

impl Mark {
    pub fn paint(&self, raster: &mut Raster) {
        match *self {
            Mark::Block { x, y, size, color } => paint_block(raster, x, y, size, color),
            Mark::Ring { center, radius, width, color } => {
                paint_ring(raster, center, radius, width, color)
            }
        }
    }
}

fn paint_block(raster: &mut Raster, x: u32, y: u32, size: u32, color: Color) {
    let side = raster.side();
    let x1 = x.saturating_add(size).min(side);
    let y1 = y.saturating_add(size).min(side);
    for py in y..y1 {
        for px in x..x1 {
            if raster.alpha_at(px, py) > 0 {
                raster.blend(px, py, color);
            }
        }
    }
}

fn paint_ring(raster: &mut Raster, center: Vec2, radius: f64, width: f64, color: Color) {
    if !center.is_finite() || raster.side() == 0 {
        return;
    }
    let half = width.max(0.0) / 2.0;
    let reach = radius + half + 1.0;
    let max = f64::from(raster.side() - 1);

    let x0 = (center.x - reach).floor().clamp(0.0, max) as u32;
    let x1 = (center.x + reach).ceil().clamp(0.0, max) as u32;
    let y0 = (center.y - reach).floor().clamp(0.0, max) as u32;
    let y1 = (center.y + reach).ceil().clamp(0.0, max) as u32;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let d = (Vec2::new(f64::from(px), f64::from(py)) - center).length();
            if (d - radius).abs() <= half {
                raster.blend(px, py, color);
            }
        }
    }
}

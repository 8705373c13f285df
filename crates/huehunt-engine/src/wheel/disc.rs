use huehunt_color::{WHEEL_LIGHTNESS, hsl_to_rgb};

use crate::raster::Raster;

use super::DiscGeometry;

/// Renders the hue/saturation disc into a fresh `side × side` raster.
///
/// Pixels farther than `side / 2` from the center stay transparent. Each disc
/// pixel gets hue `atan2(dy, dx)`, saturation `distance / radius` and
/// lightness 0.5. Identical `side` always yields an identical raster.
pub fn render_disc(side: u32) -> Raster {
    let mut raster = Raster::new(side);
    paint_disc(&mut raster);
    raster
}

/// Clears `raster` and paints the disc into it, reusing the allocation.
pub fn paint_disc(raster: &mut Raster) {
    raster.clear();
    let side = raster.side();
    let geometry = DiscGeometry::for_side(side);

    for y in 0..side {
        for x in 0..side {
            if let Some((h, s)) = geometry.hue_saturation(x, y) {
                raster.put(x, y, hsl_to_rgb(h, s, WHEEL_LIGHTNESS));
            }
        }
    }

    log::debug!("disc painted: {side}x{side}");
}

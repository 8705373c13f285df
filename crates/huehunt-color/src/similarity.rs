use crate::rgb::Rgb;

/// Score for channel-identical colors.
pub const MAX_SCORE: f64 = 100.0;
/// Score for opposite corners of the RGB cube.
pub const MIN_SCORE: f64 = 0.0;

/// Squared length of the RGB cube diagonal, `3 · 255²`.
const MAX_DISTANCE_SQ: u32 = 3 * 255 * 255;

/// Similarity of two colors as a percentage in `[0, 100]`.
///
/// `100 − 100 · ‖a − b‖ / √(3 · 255²)`, where `‖·‖` is the Euclidean distance
/// in RGB space. Symmetric; exactly 100 for identical colors and exactly 0 for
/// opposite cube corners (e.g. black and white).
pub fn similarity(a: Rgb, b: Rgb) -> f64 {
    let d2 = channel_sq(a.r, b.r) + channel_sq(a.g, b.g) + channel_sq(a.b, b.b);
    let ratio = f64::from(d2).sqrt() / f64::from(MAX_DISTANCE_SQ).sqrt();
    (MAX_SCORE - ratio * MAX_SCORE).clamp(MIN_SCORE, MAX_SCORE)
}

#[inline]
fn channel_sq(a: u8, b: u8) -> u32 {
    let d = u32::from(a.abs_diff(b));
    d * d
}

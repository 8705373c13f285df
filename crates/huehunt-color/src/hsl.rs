use crate::rgb::Rgb;

/// Hue / saturation / lightness.
///
/// - `h`: degrees in `[0, 360)`
/// - `s`, `l`: `[0, 1]`
#[derive(Debug, Copy, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Builds a normalized value: hue wrapped into `[0, 360)`, `s`/`l` clamped.
    #[inline]
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: normalize_hue(h),
            s: clamp_unit(s),
            l: clamp_unit(l),
        }
    }

    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }

    #[inline]
    pub fn is_achromatic(self) -> bool {
        self.s <= 0.0
    }
}

impl From<Rgb> for Hsl {
    #[inline]
    fn from(c: Rgb) -> Self {
        rgb_to_hsl(c)
    }
}

/// Converts HSL to 8-bit RGB, rounding each channel to the nearest integer.
///
/// The hue is wrapped modulo 360 first; `s` and `l` are clamped to `[0, 1]`.
/// Sector boundaries are continuous: at `h = 60k` both neighbouring sectors
/// produce the same channels.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = normalize_hue(h);
    let s = clamp_unit(s);
    let l = clamp_unit(l);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match hp as u8 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb::new(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

/// Converts 8-bit RGB to HSL.
///
/// Achromatic input (`max == min`) yields `s = 0` and, by convention, `h = 0`.
pub fn rgb_to_hsl(c: Rgb) -> Hsl {
    let max_u = c.r.max(c.g).max(c.b);
    let min_u = c.r.min(c.g).min(c.b);

    let r = f64::from(c.r) / 255.0;
    let g = f64::from(c.g) / 255.0;
    let b = f64::from(c.b) / 255.0;
    let max = f64::from(max_u) / 255.0;
    let min = f64::from(min_u) / 255.0;

    let l = (max + min) / 2.0;

    if max_u == min_u {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = max - min;
    let s = clamp_unit(d / (1.0 - (2.0 * l - 1.0).abs()));

    let sector = if max_u == c.r {
        ((g - b) / d).rem_euclid(6.0)
    } else if max_u == c.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: normalize_hue(sector * 60.0), s, l }
}

/// Wraps any finite angle into `[0, 360)`. Non-finite input maps to 0.
#[inline]
pub(crate) fn normalize_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[inline]
fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

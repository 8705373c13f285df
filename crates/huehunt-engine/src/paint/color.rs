use huehunt_color::Rgb;

/// Premultiplied RGBA paint color in `[0, 1]`.
///
/// Invariant:
/// - `rgb` components are already multiplied by `a`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    /// Creates a premultiplied color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_straight(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            f32::from(a) / 255.0,
        )
    }

    /// An [`Rgb`] with the given opacity.
    #[inline]
    pub fn from_rgb(rgb: Rgb, alpha: f32) -> Self {
        Self::from_straight(
            f32::from(rgb.r) / 255.0,
            f32::from(rgb.g) / 255.0,
            f32::from(rgb.b) / 255.0,
            alpha,
        )
    }

    /// Creates a premultiplied color from straight alpha components.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Returns a straight-alpha representation.
    ///
    /// For `a == 0`, RGB is returned as 0.
    #[inline]
    pub fn to_straight(self) -> (f32, f32, f32, f32) {
        if self.a <= 0.0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let inv = 1.0 / self.a;
            (self.r * inv, self.g * inv, self.b * inv, self.a)
        }
    }

    /// Straight-alpha bytes, rounded.
    pub fn to_srgba_u8(self) -> [u8; 4] {
        let (r, g, b, a) = self.to_straight();
        [to_byte(r), to_byte(g), to_byte(b), to_byte(a)]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a >= 1.0
    }

    /// Source-over composite of `self` onto a straight-alpha destination pixel.
    pub fn over(self, dst: [u8; 4]) -> [u8; 4] {
        let d = Color::from_srgb_u8(dst[0], dst[1], dst[2], dst[3]);
        let k = 1.0 - self.a;
        Color {
            r: self.r + d.r * k,
            g: self.g + d.g * k,
            b: self.b + d.b * k,
            a: self.a + d.a * k,
        }
        .to_srgba_u8()
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

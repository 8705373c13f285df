use rand::Rng;

use crate::hsl::{Hsl, hsl_to_rgb};
use crate::label::hue_label;
use crate::rgb::Rgb;

/// Lightness of every color on the wheel.
pub const WHEEL_LIGHTNESS: f64 = 0.5;

/// How round targets are drawn.
///
/// The two policies give different difficulty curves: `FullSaturation` keeps
/// every target on the rim, `AreaUniform` spreads targets evenly over the
/// whole disc (so pale targets near the center appear as often as their area
/// suggests).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TargetPolicy {
    /// Uniform hue, saturation fixed at 1.
    FullSaturation,
    /// Uniform hue, saturation `√u` for uniform `u`: uniform by disc area.
    #[default]
    AreaUniform,
}

impl TargetPolicy {
    /// Draws a wheel color (`l = 0.5`) under this policy.
    pub fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> Hsl {
        let h = rng.gen_range(0.0..360.0);
        let s = match self {
            TargetPolicy::FullSaturation => 1.0,
            TargetPolicy::AreaUniform => rng.r#gen::<f64>().sqrt(),
        };
        Hsl::new(h, s, WHEEL_LIGHTNESS)
    }
}

/// The color the player is hunting for in a round.
///
/// Immutable: each round gets a new value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TargetColor {
    hsl: Hsl,
    rgb: Rgb,
}

impl TargetColor {
    pub fn from_hsl(hsl: Hsl) -> Self {
        let hsl = Hsl::new(hsl.h, hsl.s, hsl.l);
        Self { hsl, rgb: hsl.to_rgb() }
    }

    /// A target at wheel lightness with the given hue and saturation.
    pub fn on_wheel(h: f64, s: f64) -> Self {
        Self::from_hsl(Hsl::new(h, s, WHEEL_LIGHTNESS))
    }

    pub fn random<R: Rng + ?Sized>(policy: TargetPolicy, rng: &mut R) -> Self {
        Self::from_hsl(policy.sample(rng))
    }

    #[inline]
    pub fn hsl(&self) -> Hsl {
        self.hsl
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// Canonical `#RRGGBB` form.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }

    /// Hue family name, prefixed with "Pale" for weakly saturated targets.
    pub fn label(&self) -> String {
        let family = hue_label(self.hsl);
        if family != "Gray" && self.hsl.s < 0.5 {
            format!("Pale {family}")
        } else {
            family.to_string()
        }
    }
}

impl From<Rgb> for TargetColor {
    /// A target known only by its RGB value; the HSL side is recovered by the
    /// inverse transform.
    fn from(rgb: Rgb) -> Self {
        Self { hsl: rgb.into(), rgb }
    }
}

use crate::hsl::{Hsl, normalize_hue};

/// Saturation below which a color reads as gray regardless of hue.
pub const GRAY_SATURATION: f64 = 0.08;

/// Hue families, each 30° wide and centred on a multiple of 30°.
const FAMILIES: [&str; 12] = [
    "Red",
    "Orange",
    "Yellow",
    "Chartreuse",
    "Green",
    "Spring Green",
    "Cyan",
    "Azure",
    "Blue",
    "Violet",
    "Magenta",
    "Rose",
];

/// Human-readable name of the hue family `hsl` belongs to.
pub fn hue_label(hsl: Hsl) -> &'static str {
    if hsl.s < GRAY_SATURATION {
        return "Gray";
    }
    let idx = (normalize_hue(hsl.h + 15.0) / 30.0) as usize;
    FAMILIES[idx % FAMILIES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(h: f64, s: f64) -> &'static str {
        hue_label(Hsl::new(h, s, 0.5))
    }

    #[test]
    fn family_centres() {
        assert_eq!(label(0.0, 1.0), "Red");
        assert_eq!(label(60.0, 1.0), "Yellow");
        assert_eq!(label(120.0, 1.0), "Green");
        assert_eq!(label(180.0, 1.0), "Cyan");
        assert_eq!(label(240.0, 1.0), "Blue");
        assert_eq!(label(300.0, 1.0), "Magenta");
    }

    #[test]
    fn red_wraps_around_zero() {
        assert_eq!(label(350.0, 1.0), "Red");
        assert_eq!(label(14.9, 1.0), "Red");
        assert_eq!(label(15.0, 1.0), "Orange");
        assert_eq!(label(344.0, 1.0), "Rose");
    }

    #[test]
    fn low_saturation_is_gray() {
        assert_eq!(label(120.0, 0.0), "Gray");
        assert_eq!(label(120.0, 0.05), "Gray");
        assert_eq!(label(120.0, 0.1), "Green");
    }
}

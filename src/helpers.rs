use crate::common::ColorValue;

// Expands a 2-bit hardware channel to 8 bits (0, 85, 170, 255).
pub fn scale_color(c: u8) -> ColorValue {
    ((c as u16 & 3) * 255 / 3) as ColorValue
}

// Brightens a channel toward white by 10% per emphasis step. Emphasis of
// 10 or more saturates at white rather than overshooting.
pub fn emphasize(c: ColorValue, emphasis: u8) -> ColorValue {
    if emphasis == 0 {
        return c;
    }
    let t = f32::min(emphasis as f32 * 0.1, 1.0);
    let c = c as f32;
    (c + (255.0 - c) * t) as ColorValue
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_color_uses_exact_thirds() {
        assert_eq!(scale_color(0), 0);
        assert_eq!(scale_color(1), 85);
        assert_eq!(scale_color(2), 170);
        assert_eq!(scale_color(3), 255);
    }

    #[test]
    fn emphasis_zero_is_identity() {
        for c in [0, 85, 170, 255] {
            assert_eq!(emphasize(c, 0), c);
        }
    }

    #[test]
    fn emphasis_moves_toward_white() {
        assert_eq!(emphasize(0, 1), 25);
        assert_eq!(emphasize(255, 3), 255);
        assert!(emphasize(85, 2) > 85);
    }

    #[test]
    fn large_emphasis_saturates() {
        assert_eq!(emphasize(0, 10), 255);
        assert_eq!(emphasize(85, 40), 255);
        assert_eq!(emphasize(170, 255), 255);
    }
}

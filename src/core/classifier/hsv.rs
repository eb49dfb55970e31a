//! RGB to HSV conversion in the half-angle byte convention.
//!
//! Hue is scaled to 0-179 (degrees / 2), saturation and value to 0-255.
//! The classifier thresholds are tuned to exactly this scaling, so it must
//! not be swapped for the 0-359 or 0.0-1.0 conventions.

/// Convert an 8-bit RGB pixel to (hue, saturation, value) bytes.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    let v = max;

    let s = if max == 0 {
        0
    } else {
        let delta = (max - min) as f32;
        (255.0 * delta / max as f32).round() as u8
    };

    let h = if max == min {
        0
    } else {
        let delta = (max - min) as f32;
        let rf = r as f32;
        let gf = g as f32;
        let bf = b as f32;

        let mut degrees = if max == r {
            60.0 * (gf - bf) / delta
        } else if max == g {
            120.0 + 60.0 * (bf - rf) / delta
        } else {
            240.0 + 60.0 * (rf - gf) / delta
        };

        if degrees < 0.0 {
            degrees += 360.0;
        }

        // Half-angle representation; 360 wraps back to 0.
        ((degrees / 2.0).round() as u16 % 180) as u8
    };

    (h, s, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_red_has_zero_hue() {
        assert_eq!(rgb_to_hsv(255, 0, 0), (0, 255, 255));
    }

    #[test]
    fn pure_green_has_hue_60() {
        assert_eq!(rgb_to_hsv(0, 255, 0), (60, 255, 255));
    }

    #[test]
    fn pure_blue_has_hue_120() {
        assert_eq!(rgb_to_hsv(0, 0, 255), (120, 255, 255));
    }

    #[test]
    fn white_has_zero_saturation_full_value() {
        assert_eq!(rgb_to_hsv(255, 255, 255), (0, 0, 255));
    }

    #[test]
    fn black_has_zero_everything() {
        assert_eq!(rgb_to_hsv(0, 0, 0), (0, 0, 0));
    }

    #[test]
    fn grey_has_zero_saturation() {
        let (_, s, v) = rgb_to_hsv(128, 128, 128);
        assert_eq!(s, 0);
        assert_eq!(v, 128);
    }

    #[test]
    fn hue_is_always_below_180() {
        // Sweep a coarse grid of the RGB cube
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(17) {
                for b in (0..=255u16).step_by(17) {
                    let (h, _, _) = rgb_to_hsv(r as u8, g as u8, b as u8);
                    assert!(h < 180, "hue {} out of range for rgb({},{},{})", h, r, g, b);
                }
            }
        }
    }

    #[test]
    fn imessage_bubble_blue_lands_in_blue_band() {
        // iMessage send-bubble blue, roughly #1982FC
        let (h, s, _) = rgb_to_hsv(0x19, 0x82, 0xFC);
        assert!((100..=140).contains(&h), "hue was {}", h);
        assert!(s > 50);
    }
}

//! Color math for the swatch picker — direct conversions without external
//! dependencies. All functions use normalized f64 in 0.0–1.0.

/// HSB/HSV → RGB. All values 0.0–1.0.
pub(crate) fn hsb_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let h6 = (h * 6.0) % 6.0;
    let i = h6.floor() as u32;
    let f = h6 - h6.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match i % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// RGB → HSB/HSV. All values 0.0–1.0.
pub(crate) fn rgb_to_hsb(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / delta + 2.0) / 6.0
    } else {
        ((r - g) / delta + 4.0) / 6.0
    };

    (h, s, v)
}

/// Saturation/brightness area coordinates → `(saturation, brightness)`.
///
/// `x` runs from gray (0.0) to the full hue (1.0); `y` runs from full
/// brightness (0.0) down to black (1.0).
pub(crate) fn area_to_sb(x: f64, y: f64) -> (f64, f64) {
    (x.clamp(0.0, 1.0), 1.0 - y.clamp(0.0, 1.0))
}

/// Saturation and brightness → area coordinates, the inverse of [`area_to_sb`].
pub(crate) fn sb_to_area(s: f64, b: f64) -> (f64, f64) {
    (s.clamp(0.0, 1.0), 1.0 - b.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f64, f64, f64), b: (f64, f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9 && (a.2 - b.2).abs() < 1e-9
    }

    #[test]
    fn test_hsb_rgb_primaries() {
        assert!(close(hsb_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0)));
        assert!(close(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), (0.0, 0.0, 1.0)));
        assert!(close(rgb_to_hsb(0.0, 0.0, 1.0), (2.0 / 3.0, 1.0, 1.0)));
        assert!(close(rgb_to_hsb(0.5, 0.5, 0.5), (0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_area_edges() {
        assert_eq!(area_to_sb(0.0, 0.0), (0.0, 1.0));
        assert_eq!(area_to_sb(1.0, 0.0), (1.0, 1.0));
        assert_eq!(area_to_sb(0.4, 1.0), (0.4, 0.0));
        // Out-of-area pointer positions clamp to the border.
        assert_eq!(area_to_sb(-1.0, 2.0), (0.0, 0.0));
    }

    #[test]
    fn test_area_inverse() {
        for &(x, y) in &[(0.1, 0.2), (0.6, 0.5), (0.9, 0.8)] {
            let (s, b) = area_to_sb(x, y);
            let (bx, by) = sb_to_area(s, b);
            assert!((bx - x).abs() < 1e-9 && (by - y).abs() < 1e-9);
        }
    }

    #[test]
    fn test_area_and_hue_reach_muted_colors() {
        use crate::color::HexColor;
        use std::collections::HashSet;

        // Hue slider in 5 degree steps, area on a 60x60 grid.
        let mut wanted: HashSet<&str> =
            ["#336699", "#996633", "#808080", "#000000", "#ffffff", "#00ff00"]
                .into_iter()
                .collect();
        'sweep: for hi in 0..=72 {
            let hue = hi as f64 / 72.0;
            for xi in 0..=60 {
                for yi in 0..=60 {
                    let (s, b) = area_to_sb(xi as f64 / 60.0, yi as f64 / 60.0);
                    wanted.remove(HexColor::from_hsb(hue, s, b).as_str());
                    if wanted.is_empty() {
                        break 'sweep;
                    }
                }
            }
        }
        assert!(wanted.is_empty(), "unreachable: {wanted:?}");
    }

    #[test]
    fn test_gray_sits_on_left_edge() {
        let (h, s, b) = rgb_to_hsb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
        assert_eq!((h, s), (0.0, 0.0));
        let (x, y) = sb_to_area(s, b);
        assert_eq!(x, 0.0);
        assert!((y - 0.498).abs() < 1e-3);
    }
}

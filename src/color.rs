//! HexColor type — the canonical key color value.
//!
//! Always `#` followed by six lowercase hex digits. Every value stored by the
//! picker or written back to the host widget goes through this type.

use std::fmt;
use std::str::FromStr;

use floem::peniko::Color;

use crate::error::ColorError;
use crate::math;

/// A validated `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HexColor(String);

impl HexColor {
    /// Validate and canonicalize raw user text.
    ///
    /// Surrounding whitespace is trimmed and the leading `#` is optional.
    /// `#rgb` shorthand expands to `#rrggbb`. The result is lowercase.
    pub fn normalize(raw: &str) -> Result<Self, ColorError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ColorError::Empty);
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(trimmed.to_string()));
        }
        let mut out = String::with_capacity(7);
        out.push('#');
        match digits.len() {
            3 => {
                for c in digits.chars() {
                    let c = c.to_ascii_lowercase();
                    out.push(c);
                    out.push(c);
                }
            }
            6 => out.push_str(&digits.to_ascii_lowercase()),
            _ => return Err(ColorError::InvalidFormat(trimmed.to_string())),
        }
        Ok(Self(out))
    }

    /// White, the value used when the host widget has nothing usable.
    pub fn white() -> Self {
        Self("#ffffff".to_string())
    }

    /// Create from 0–255 RGB values.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{:02x}{:02x}{:02x}", r, g, b))
    }

    /// Create from 0.0–1.0 RGB values, clamping out-of-range components.
    pub fn from_rgb_f64(r: f64, g: f64, b: f64) -> Self {
        let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::from_rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// Create from HSB/HSV values (all 0.0–1.0).
    pub fn from_hsb(h: f64, s: f64, b: f64) -> Self {
        let (r, g, bl) = math::hsb_to_rgb(h, s, b);
        Self::from_rgb_f64(r, g, bl)
    }

    /// The canonical `#rrggbb` string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into 0–255 RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        // The invariant guarantees seven ASCII bytes of valid hex.
        let channel = |i: usize| u8::from_str_radix(&self.0[i..i + 2], 16).unwrap_or(0);
        (channel(1), channel(3), channel(5))
    }

    /// Convert to HSB (all 0.0–1.0). Returns (h, s, b).
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        let (r, g, b) = self.rgb();
        math::rgb_to_hsb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Opaque Floem color for painting swatches.
    pub fn to_color(&self) -> Color {
        let (r, g, b) = self.rgb();
        Color::rgb8(r, g, b)
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::white()
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Result<String, ColorError> {
        HexColor::normalize(raw).map(|c| c.to_string())
    }

    #[test]
    fn test_shorthand_expands_by_duplication() {
        assert_eq!(norm("#abc").unwrap(), "#aabbcc");
        assert_eq!(norm("f0a").unwrap(), "#ff00aa");
        assert_eq!(norm("#FA0").unwrap(), "#ffaa00");
        assert_eq!(norm("000").unwrap(), "#000000");
    }

    #[test]
    fn test_six_digits_lowercased() {
        assert_eq!(norm("  #ABCDEF ").unwrap(), "#abcdef");
        assert_eq!(norm("12aB9f").unwrap(), "#12ab9f");
        assert_eq!(norm("#112233").unwrap(), "#112233");
    }

    #[test]
    fn test_rejects_everything_else() {
        assert_eq!(norm(""), Err(ColorError::Empty));
        assert_eq!(norm("   "), Err(ColorError::Empty));
        assert_eq!(norm("#"), Err(ColorError::Empty));
        for bad in ["12", "#abcd", "#abcde", "#1234567", "xyz123", "##abc", "#ab c", "gggggg", "#ａｂｃ"] {
            assert!(
                matches!(norm(bad), Err(ColorError::InvalidFormat(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_from_str_matches_normalize() {
        let parsed: HexColor = "ABC".parse().unwrap();
        assert_eq!(parsed, HexColor::normalize("#aabbcc").unwrap());
        assert!("nope".parse::<HexColor>().is_err());
    }

    #[test]
    fn test_rgb_components() {
        let c = HexColor::normalize("#ff8001").unwrap();
        assert_eq!(c.rgb(), (255, 128, 1));
        assert_eq!(HexColor::from_rgb(255, 128, 1), c);
    }

    #[test]
    fn test_from_rgb_f64_clamps_and_rounds() {
        assert_eq!(HexColor::from_rgb_f64(1.2, -0.1, 0.5).as_str(), "#ff0080");
    }

    #[test]
    fn test_from_hsb_primaries() {
        assert_eq!(HexColor::from_hsb(0.0, 1.0, 1.0).as_str(), "#ff0000");
        assert_eq!(HexColor::from_hsb(1.0 / 3.0, 1.0, 1.0).as_str(), "#00ff00");
        assert_eq!(HexColor::from_hsb(0.5, 0.0, 1.0).as_str(), "#ffffff");
        assert_eq!(HexColor::from_hsb(0.5, 1.0, 0.0).as_str(), "#000000");
    }

    #[test]
    fn test_default_is_white() {
        assert_eq!(HexColor::default().as_str(), "#ffffff");
    }
}

//! Color math - RGB, hex and HSL conversions.
//!
//! All conversions originate from [`Rgb`], the canonical 8-bit sRGB unit.
//! Hex is lossless in both directions; HSL is derived for display only and is
//! never converted back.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// CSS functional notation, e.g. `rgb(255, 0, 0)`.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to HSL using the max/min channel formula.
    ///
    /// Hue is in `[0, 360)`, saturation and lightness in `[0, 100]`, all
    /// rounded to the nearest integer. Grays yield hue 0 and saturation 0.
    pub fn to_hsl(self) -> Hsl {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);

        let max_f = f64::from(max) / 255.0;
        let min_f = f64::from(min) / 255.0;
        let lightness = (max_f + min_f) / 2.0;

        if max == min {
            return Hsl {
                h: 0,
                s: 0,
                l: percent(lightness),
            };
        }

        let delta = max_f - min_f;
        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        // Compare on the integer channels so ties pick a stable segment
        let segment = if max == self.r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        let hue = ((segment * 60.0).round() as u16) % 360;

        Hsl {
            h: hue,
            s: percent(saturation),
            l: percent(lightness),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s).ok_or_else(|| ColorError::InvalidFormat(s.to_string()))
    }
}

/// A rounded HSL triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub h: u16,
    /// Saturation percent, `[0, 100]`
    pub s: u8,
    /// Lightness percent, `[0, 100]`
    pub l: u8,
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

#[inline]
fn percent(unit: f64) -> u8 {
    (unit * 100.0).round().clamp(0.0, 100.0) as u8
}

#[inline]
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Render channels as lowercase `#rrggbb`. Out-of-range inputs are clamped.
pub fn rgb_to_hex(r: i32, g: i32, b: i32) -> String {
    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b)).to_hex()
}

/// Parse `#rrggbb` (either case). Anything else is rejected, no partial parsing.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
}

/// Format as `hsl(h, s%, l%)`. Out-of-range inputs are clamped.
pub fn rgb_to_hsl(r: i32, g: i32, b: i32) -> String {
    Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
        .to_hsl()
        .to_string()
}

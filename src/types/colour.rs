//! Colour type and channel arithmetic.

use std::fmt;

use image::Rgba;

/// Clamp a channel value into `0..=255`.
///
/// The value is truncated toward zero before clamping, so `254.9` maps to
/// `254` and `-0.5` maps to `0`. NaN maps to `0`.
pub fn clamp(v: f64) -> u8 {
    (v as i64).clamp(0, 255) as u8
}

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Build a colour from unit floats (`0.0..=1.0` per channel).
    pub fn from_unit(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self::new(
            clamp(r * 255.0),
            clamp(g * 255.0),
            clamp(b * 255.0),
            clamp(a * 255.0),
        )
    }

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Scale the RGB channels by `factor` (expected below 1). Alpha is kept.
    pub fn darken(self, factor: f64) -> Self {
        self.scale_rgb(factor)
    }

    /// Scale the RGB channels by `factor` (expected above 1). Alpha is kept.
    pub fn lighten(self, factor: f64) -> Self {
        self.scale_rgb(factor)
    }

    fn scale_rgb(self, factor: f64) -> Self {
        Self::new(
            clamp(self.r as f64 * factor),
            clamp(self.g as f64 * factor),
            clamp(self.b as f64 * factor),
            self.a,
        )
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl From<Colour> for Rgba<u8> {
    fn from(c: Colour) -> Self {
        Rgba(c.to_rgba())
    }
}

impl From<Rgba<u8>> for Colour {
    fn from(p: Rgba<u8>) -> Self {
        let [r, g, b, a] = p.0;
        Self::new(r, g, b, a)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

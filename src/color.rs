//! RGBA colors with hex round-tripping.
//!
//! Materials and lights store colors as linear `f32` channels in `[0, 1]`.
//! The control surface speaks `#RRGGBB` strings (color-picker output), so
//! [`Color::from_hex`] and [`Color::to_hex`] convert between the two.

use glam::Vec4;

/// An RGBA color with `f32` channels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const WHITE: Color = Color::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgba(0.0, 0.0, 0.0, 1.0);
    pub const RED: Color = Color::rgba(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Color = Color::rgba(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::rgba(0.0, 0.0, 1.0, 1.0);

    /// An opaque color with random RGB channels, used as the default
    /// material for freshly added shapes.
    pub fn random() -> Self {
        Self::rgb(rand::random(), rand::random(), rand::random())
    }

    /// Component-wise product of two colors (including alpha).
    pub fn modulate(self, other: Color) -> Color {
        Color::rgba(
            self.r * other.r,
            self.g * other.g,
            self.b * other.b,
            self.a * other.a,
        )
    }

    /// Scales the RGB channels, leaving alpha untouched.
    pub fn scale_rgb(self, factor: f32) -> Color {
        Color::rgba(self.r * factor, self.g * factor, self.b * factor, self.a)
    }

    /// Replaces the RGB channels, keeping the current alpha.
    pub fn set_rgb(&mut self, other: Color) {
        self.r = other.r;
        self.g = other.g;
        self.b = other.b;
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    /// Parses a `#RRGGBB` string into an opaque color.
    pub fn from_hex(hex: &str) -> Result<Color, ColorParseError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(ColorParseError::Length(digits.len()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::Digit(digits.to_string()))
        };
        let r = channel(0..2)? as f32 / 255.0;
        let g = channel(2..4)? as f32 / 255.0;
        let b = channel(4..6)? as f32 / 255.0;
        Ok(Color::rgb(r, g, b))
    }

    /// Formats the RGB channels as `#RRGGBB`, dropping alpha.
    pub fn to_hex(self) -> String {
        let quantize = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }
}

impl From<Color> for [f32; 4] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

/// Errors from parsing a hex color string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The string did not contain exactly six hex digits.
    Length(usize),
    /// A channel was not valid hexadecimal.
    Digit(String),
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorParseError::Length(n) => {
                write!(f, "expected 6 hex digits, got {}", n)
            }
            ColorParseError::Digit(s) => write!(f, "invalid hex digits in '{}'", s),
        }
    }
}

impl std::error::Error for ColorParseError {}

//! Color literal parsing
//!
//! Parses the color literals accepted on the command line (`--palette`) into
//! normalized RGBA values. Recognizes hex forms (`#RGB`, `#RRGGBB`,
//! `#RRGGBBAA`), functional forms (`rgb(...)`, `rgba(...)`), and a table of
//! common named colors.

use thiserror::Error;

/// A normalized RGBA color, each component in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Build a fully opaque color from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, 255)
    }

    /// Build a color from 8-bit channels including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Convert to an egui color for rendering.
    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }
}

/// Failure to interpret a color literal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("unrecognized color literal {0:?}")]
    Unrecognized(String),
    #[error("invalid channel value in color literal {0:?}")]
    InvalidChannel(String),
}

/// Parse a color literal into a normalized [`Color`].
pub fn parse_color(input: &str) -> Result<Color, ColorParseError> {
    let s = input.trim();
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex, input);
    }
    if let Some(body) = s
        .strip_prefix("rgba(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(body, true, input);
    }
    if let Some(body) = s
        .strip_prefix("rgb(")
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(body, false, input);
    }
    named_color(s).ok_or_else(|| ColorParseError::Unrecognized(input.to_string()))
}

fn parse_hex(hex: &str, input: &str) -> Result<Color, ColorParseError> {
    if !hex.is_ascii() {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }

    let channel = |range: &str| {
        u8::from_str_radix(range, 16)
            .map_err(|_| ColorParseError::InvalidChannel(input.to_string()))
    };

    match hex.len() {
        // Single-digit channels: 0xF expands to 0xFF.
        3 => {
            let digit = |range: &str| channel(range).map(|v| v * 17);
            Ok(Color::from_rgb8(
                digit(&hex[0..1])?,
                digit(&hex[1..2])?,
                digit(&hex[2..3])?,
            ))
        }
        6 => Ok(Color::from_rgb8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Ok(Color::from_rgba8(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => Err(ColorParseError::Unrecognized(input.to_string())),
    }
}

fn parse_functional(body: &str, with_alpha: bool, input: &str) -> Result<Color, ColorParseError> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    }

    let channel = |part: &str| {
        part.parse::<u8>()
            .map_err(|_| ColorParseError::InvalidChannel(input.to_string()))
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;

    let a = if with_alpha {
        parts[3]
            .parse::<f32>()
            .map_err(|_| ColorParseError::InvalidChannel(input.to_string()))?
            .clamp(0.0, 1.0)
    } else {
        1.0
    };

    let mut color = Color::from_rgb8(r, g, b);
    color.a = a;
    Ok(color)
}

fn named_color(name: &str) -> Option<Color> {
    let (r, g, b) = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "gray" | "grey" => (128, 128, 128),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        _ => return None,
    };
    Some(Color::from_rgb8(r, g, b))
}

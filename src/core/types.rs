/// Common type definitions shared by the canvas, paint and path layers.

use super::error::Error;
use std::str::FromStr;

/// Stroke end-cap style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cap {
    Butt,
    #[default]
    Round,
    Square,
}

impl FromStr for Cap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "butt" => Ok(Cap::Butt),
            "round" => Ok(Cap::Round),
            "square" => Ok(Cap::Square),
            _ => Err(Error::UnknownCap(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Cap {
    type Error = Error;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Cap::Butt),
            1 => Ok(Cap::Round),
            2 => Ok(Cap::Square),
            _ => Err(Error::UnknownCap(ordinal.to_string())),
        }
    }
}

/// Path rendering mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Style {
    #[default]
    Fill,
    Stroke,
}

impl FromStr for Style {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fill" => Ok(Style::Fill),
            "stroke" => Ok(Style::Stroke),
            _ => Err(Error::UnknownStyle(s.to_string())),
        }
    }
}

impl TryFrom<i32> for Style {
    type Error = Error;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Style::Fill),
            1 => Ok(Style::Stroke),
            _ => Err(Error::UnknownStyle(ordinal.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Default,
    Monospace,
    SansSerif,
    Serif,
}

impl FontFamily {
    /// Family name understood by Cairo's toy font API.
    pub fn face_name(self) -> &'static str {
        match self {
            FontFamily::Default => super::config::DEFAULT_FONT_FACE,
            FontFamily::Monospace => "monospace",
            FontFamily::SansSerif => "sans-serif",
            FontFamily::Serif => "serif",
        }
    }
}

impl FromStr for FontFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(FontFamily::Default),
            "monospace" => Ok(FontFamily::Monospace),
            "sans_serif" | "sans-serif" => Ok(FontFamily::SansSerif),
            "serif" => Ok(FontFamily::Serif),
            _ => Err(Error::UnknownFontFamily(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    pub fn slant(self) -> cairo::FontSlant {
        match self {
            FontStyle::Italic | FontStyle::BoldItalic => cairo::FontSlant::Italic,
            FontStyle::Normal | FontStyle::Bold => cairo::FontSlant::Normal,
        }
    }

    pub fn weight(self) -> cairo::FontWeight {
        match self {
            FontStyle::Bold | FontStyle::BoldItalic => cairo::FontWeight::Bold,
            FontStyle::Normal | FontStyle::Italic => cairo::FontWeight::Normal,
        }
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(FontStyle::Normal),
            "bold" => Ok(FontStyle::Bold),
            "italic" => Ok(FontStyle::Italic),
            "bold_italic" => Ok(FontStyle::BoldItalic),
            _ => Err(Error::UnknownFontStyle(s.to_string())),
        }
    }
}

/// Typeface and size carried by a paint
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    pub style: FontStyle,
    pub size: f64,
}

impl Font {
    pub fn new(family: FontFamily, style: FontStyle, size: f64) -> Self {
        Self {
            family,
            style,
            size,
        }
    }

    /// Font options shared by every drawing and measuring context.
    pub fn rendering_options() -> Result<cairo::FontOptions, cairo::Error> {
        let mut options = cairo::FontOptions::new()?;
        options.set_antialias(super::config::ANTIALIAS);
        Ok(options)
    }

    /// Select this font on a Cairo context.
    pub fn apply(&self, cr: &cairo::Context) {
        cr.select_font_face(self.family.face_name(), self.style.slant(), self.style.weight());
        cr.set_font_size(self.size);
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(
            FontFamily::Default,
            FontStyle::Normal,
            super::config::DEFAULT_TEXT_SIZE,
        )
    }
}

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f64 / 255.0,
            g: ((hex >> 8) & 0xFF) as f64 / 255.0,
            b: (hex & 0xFF) as f64 / 255.0,
            a: alpha,
        }
    }

    /// Convert a packed ARGB paint color. Only the RGB bits are used; the
    /// result is always opaque.
    pub fn from_packed(argb: u32) -> Self {
        Self::from_hex(argb & 0x00FF_FFFF, 1.0)
    }

    pub fn apply(&self, cr: &cairo::Context) {
        cr.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

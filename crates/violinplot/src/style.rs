//! Figure styling.
//!
//! ## Purpose
//!
//! This module defines [`FigureStyle`], the appearance of a rendered figure:
//! canvas size, title and axis labels, palette, fill transparency, colours of
//! the inner markers, point radius and grid. Styles are plain serde structs
//! and can be loaded from JSON; every field has a default, so a style file
//! only needs the fields it changes.
//!
//! ## Design notes
//!
//! * **Hex colours**: [`Color`] (de)serializes as `"#rrggbb"`.
//! * **Palette cycling**: Silhouettes are coloured by hue level when a hue
//!   column exists, by category otherwise; the palette repeats if short.

// External dependencies
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Internal dependencies
use crate::errors::{PlotError, PlotResult};

// ============================================================================
// Colour
// ============================================================================

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a colour from its channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn parse(text: &str) -> PlotResult<Self> {
        let hex = text.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(PlotError::InvalidColor(text.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| PlotError::InvalidColor(text.to_string()))
        };
        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Colour for the drawing backend.
    pub fn to_rgb(&self) -> RGBColor {
        RGBColor(self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Color {
    type Error = PlotError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

// ============================================================================
// Figure Style
// ============================================================================

/// Appearance of a rendered figure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FigureStyle {
    /// Canvas width in pixels.
    pub width: u32,

    /// Canvas height in pixels.
    pub height: u32,

    /// Figure title.
    pub title: Option<String>,

    /// Value-axis label.
    pub value_label: Option<String>,

    /// Category-axis label.
    pub category_label: Option<String>,

    /// Silhouette fill colours.
    pub palette: Vec<Color>,

    /// Silhouette fill opacity in [0, 1].
    pub fill_alpha: f64,

    /// Silhouette outline colour.
    pub outline: Color,

    /// Outline stroke width in pixels.
    pub outline_width: u32,

    /// Colour of box, median, quartile and rug markers.
    pub inner_color: Color,

    /// Colour of jitter, swarm and rain points (`None` uses the fill colour).
    pub point_color: Option<Color>,

    /// Point radius in pixels.
    pub point_radius: u32,

    /// Draw the background grid.
    pub grid: bool,

    /// Canvas background.
    pub background: Color,

    /// Label font size in pixels.
    pub font_size: u32,

    /// Draw a legend of hue levels.
    pub legend: bool,
}

impl Default for FigureStyle {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: None,
            value_label: None,
            category_label: None,
            palette: vec![
                Color::rgb(0x4c, 0x72, 0xb0),
                Color::rgb(0xdd, 0x84, 0x52),
                Color::rgb(0x55, 0xa8, 0x68),
                Color::rgb(0xc4, 0x4e, 0x52),
                Color::rgb(0x81, 0x72, 0xb3),
                Color::rgb(0x93, 0x78, 0x60),
            ],
            fill_alpha: 0.7,
            outline: Color::rgb(0x33, 0x33, 0x33),
            outline_width: 1,
            inner_color: Color::rgb(0x22, 0x22, 0x22),
            point_color: None,
            point_radius: 3,
            grid: true,
            background: Color::rgb(0xff, 0xff, 0xff),
            font_size: 14,
            legend: true,
        }
    }
}

impl FigureStyle {
    /// Parse a style from JSON text.
    pub fn from_json_str(json: &str) -> PlotResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> PlotResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serialize the style as pretty-printed JSON.
    pub fn to_json(&self) -> PlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the figure title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set both axis labels.
    pub fn with_labels(mut self, category: impl Into<String>, value: impl Into<String>) -> Self {
        self.category_label = Some(category.into());
        self.value_label = Some(value.into());
        self
    }

    /// Set the canvas size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fill colour for a palette slot.
    pub fn fill(&self, slot: usize) -> Color {
        if self.palette.is_empty() {
            return self.outline;
        }
        self.palette[slot % self.palette.len()]
    }

    /// Fill opacity clamped to [0, 1].
    pub fn alpha(&self) -> f64 {
        if self.fill_alpha.is_finite() {
            self.fill_alpha.clamp(0.0, 1.0)
        } else {
            1.0
        }
    }
}

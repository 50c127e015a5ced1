//! Render style configuration.

use crate::renderer::{RenderResult, RendererError};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// How shapes are painted.
///
/// Missing fields in JSON fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderStyle {
    /// Stroke width for every shape, in surface units.
    pub stroke_width: f64,
    /// Alpha of the fill under rectangle strokes.
    pub fill_alpha: f32,
    /// Surface background.
    pub background: SerializableColor,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            stroke_width: Self::DEFAULT_STROKE_WIDTH,
            fill_alpha: Self::DEFAULT_FILL_ALPHA,
            background: SerializableColor::white(),
        }
    }
}

impl RenderStyle {
    pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;
    pub const DEFAULT_FILL_ALPHA: f32 = 0.3;

    /// Parse a style from JSON and validate it.
    pub fn from_json(json: &str) -> RenderResult<Self> {
        let style: Self = serde_json::from_str(json)?;
        style.validate()?;
        log::debug!("Loaded render style: {style:?}");
        Ok(style)
    }

    /// Check that the values can be painted.
    pub fn validate(&self) -> RenderResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(RendererError::InvalidStyle(format!(
                "stroke width must be positive, got {}",
                self.stroke_width
            )));
        }
        if !(0.0..=1.0).contains(&self.fill_alpha) {
            return Err(RendererError::InvalidStyle(format!(
                "fill alpha must be within 0..=1, got {}",
                self.fill_alpha
            )));
        }
        Ok(())
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_fill_alpha(mut self, alpha: f32) -> Self {
        self.fill_alpha = alpha;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color.into();
        self
    }

    pub fn background_color(&self) -> Color {
        self.background.into()
    }

    /// Fill color for a shape drawn in `color`: same hue at the fill alpha.
    pub fn fill_color(&self, color: Color) -> Color {
        color.with_alpha(self.fill_alpha)
    }
}

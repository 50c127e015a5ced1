//! Renderer trait abstraction.

use crate::commands::{DrawCommand, build_commands};
use crate::style::RenderStyle;
use inkpad_core::{DrawingModel, Snapshot};
use kurbo::Size;
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Invalid render style: {0}")]
    InvalidStyle(String),
    #[error("Config parse failed: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Context for a single render frame.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Shapes to paint, back to front.
    pub snapshot: Snapshot<'a>,
    /// Viewport size in physical pixels.
    pub viewport_size: Size,
    /// Device pixel ratio (for HiDPI).
    pub scale_factor: f64,
    /// Stroke, fill and background settings.
    pub style: &'a RenderStyle,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(snapshot: Snapshot<'a>, viewport_size: Size, style: &'a RenderStyle) -> Self {
        Self {
            snapshot,
            viewport_size,
            scale_factor: 1.0,
            style,
        }
    }

    /// Render context over a model's current state.
    pub fn for_model(model: &'a DrawingModel, viewport_size: Size, style: &'a RenderStyle) -> Self {
        Self::new(model.snapshot(), viewport_size, style)
    }

    /// Set the scale factor for HiDPI.
    pub fn with_scale_factor(mut self, scale_factor: f64) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Reject frames that cannot be mapped to physical pixels.
    pub fn check(&self) -> RenderResult<()> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(RendererError::RenderFailed(format!(
                "invalid scale factor {}",
                self.scale_factor
            )));
        }
        Ok(())
    }

    /// Commands for every shape in the snapshot.
    pub fn commands(&self) -> Vec<DrawCommand> {
        build_commands(self.snapshot, self.style)
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the frame for the given context.
    ///
    /// Called once per repaint request. The snapshot is only valid for the
    /// duration of the call; implementations copy out what they keep.
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext<'_>) -> Color {
        ctx.style.background_color()
    }
}

/// Headless renderer that keeps the last frame's command list.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    background: Option<Color>,
    commands: Vec<DrawCommand>,
    frames: usize,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last built frame.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Background the last frame was cleared to.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Number of frames built so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl Renderer for CommandRecorder {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        ctx.check()?;
        self.background = Some(self.background_color(ctx));
        self.commands = ctx.commands();
        self.frames += 1;
        log::trace!("Recorded frame {} with {} commands", self.frames, self.commands.len());
        Ok(())
    }
}

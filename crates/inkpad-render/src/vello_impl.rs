//! Vello-based renderer implementation.

use crate::commands::DrawCommand;
use crate::renderer::{RenderContext, RenderResult, Renderer};
use kurbo::{Affine, Rect, Stroke};
use peniko::Fill;
use vello::Scene;

/// Vello-based renderer for GPU-accelerated 2D graphics.
///
/// Builds a [`Scene`]; presenting it to a surface is up to the host.
pub struct VelloRenderer {
    /// The Vello scene being built.
    scene: Scene,
}

impl Default for VelloRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl VelloRenderer {
    /// Create a new Vello renderer.
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
        }
    }

    /// Get the built scene for rendering.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Take ownership of the scene (resets internal scene).
    pub fn take_scene(&mut self) -> Scene {
        std::mem::take(&mut self.scene)
    }

    fn render_command(&mut self, command: &DrawCommand, transform: Affine) {
        match command {
            DrawCommand::Fill { path, color } => {
                self.scene.fill(Fill::NonZero, transform, *color, None, path);
            }
            DrawCommand::Stroke { path, color, width } => {
                let stroke = Stroke::new(*width);
                self.scene.stroke(&stroke, transform, *color, None, path);
            }
        }
    }
}

impl Renderer for VelloRenderer {
    fn build_scene(&mut self, ctx: &RenderContext<'_>) -> RenderResult<()> {
        ctx.check()?;
        self.scene.reset();

        // Background covers the whole viewport in physical pixels
        let viewport = Rect::new(0.0, 0.0, ctx.viewport_size.width, ctx.viewport_size.height);
        self.scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            self.background_color(ctx),
            None,
            &viewport,
        );

        let transform = Affine::scale(ctx.scale_factor);
        for command in ctx.commands() {
            self.render_command(&command, transform);
        }

        Ok(())
    }
}

//! Backend-independent drawing commands built from a model snapshot.

use crate::style::RenderStyle;
use inkpad_core::{Shape, Snapshot};
use kurbo::BezPath;
use peniko::Color;

/// One primitive paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the path's interior (non-zero winding).
    Fill { path: BezPath, color: Color },
    /// Stroke the path outline.
    Stroke {
        path: BezPath,
        color: Color,
        width: f64,
    },
}

impl DrawCommand {
    pub fn path(&self) -> &BezPath {
        match self {
            DrawCommand::Fill { path, .. } | DrawCommand::Stroke { path, .. } => path,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            DrawCommand::Fill { color, .. } | DrawCommand::Stroke { color, .. } => *color,
        }
    }

    pub fn is_fill(&self) -> bool {
        matches!(self, DrawCommand::Fill { .. })
    }
}

/// Commands for a single shape.
///
/// Filled modes get a translucent fill first, then every shape is stroked in
/// its own color.
pub fn shape_commands(shape: &Shape, style: &RenderStyle) -> Vec<DrawCommand> {
    let path = shape.to_path();
    let mut commands = Vec::with_capacity(2);

    if shape.mode().is_filled() {
        commands.push(DrawCommand::Fill {
            path: path.clone(),
            color: style.fill_color(shape.color()),
        });
    }
    commands.push(DrawCommand::Stroke {
        path,
        color: shape.color(),
        width: style.stroke_width,
    });

    commands
}

/// Commands for a whole snapshot, back to front.
pub fn build_commands(snapshot: Snapshot<'_>, style: &RenderStyle) -> Vec<DrawCommand> {
    snapshot
        .iter()
        .flat_map(|shape| shape_commands(shape, style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkpad_core::{DrawingMode, Geometry, Polyline, Rectangle};
    use kurbo::Point;

    #[test]
    fn test_line_is_stroke_only() {
        let line = Shape::new(
            Geometry::Polyline(Polyline::from_points(vec![Point::ZERO, Point::new(5.0, 5.0)])),
            Color::BLACK,
        );
        let commands = shape_commands(&line, &RenderStyle::default());

        assert_eq!(commands.len(), 1);
        match &commands[0] {
            DrawCommand::Stroke { color, width, .. } => {
                assert_eq!(*color, Color::BLACK);
                assert!((width - 3.0).abs() < f64::EPSILON);
            }
            other => panic!("expected stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_rectangle_filled_before_stroked() {
        let color = Color::from_rgba8(0, 0, 255, 255);
        let rect = Shape::new(
            Geometry::Rectangle(Rectangle::new(Point::new(1.0, 1.0), 4.0, 4.0)),
            color,
        );
        assert_eq!(rect.mode(), DrawingMode::Rectangle);

        let commands = shape_commands(&rect, &RenderStyle::default());
        assert_eq!(commands.len(), 2);
        assert!(commands[0].is_fill());
        assert!((commands[0].color().components[3] - 0.3).abs() < f32::EPSILON);
        assert!(!commands[1].is_fill());
        assert_eq!(commands[1].color(), color);
        assert_eq!(commands[0].path(), commands[1].path());
    }

    #[test]
    fn test_custom_stroke_width() {
        let line = Shape::new(Geometry::Polyline(Polyline::from_points(vec![Point::ZERO])), Color::BLACK);
        let style = RenderStyle::default().with_stroke_width(8.0);
        match &shape_commands(&line, &style)[0] {
            DrawCommand::Stroke { width, .. } => assert!((width - 8.0).abs() < f64::EPSILON),
            other => panic!("expected stroke, got {other:?}"),
        }
    }
}

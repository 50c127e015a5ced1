//! Shape definitions for the sketch surface.

mod polyline;
mod rectangle;

pub use polyline::Polyline;
pub use rectangle::Rectangle;

use kurbo::{BezPath, Point, Rect};
use peniko::Color;

/// How a stroke builds its geometry and how the finished shape is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DrawingMode {
    /// Freehand polyline following the pointer. Stroked only.
    #[default]
    Line,
    /// Axis-aligned rectangle spanned from the anchor point. Filled and stroked.
    Rectangle,
}

impl DrawingMode {
    /// Toggle between line and rectangle.
    pub fn toggle(self) -> Self {
        match self {
            DrawingMode::Line => DrawingMode::Rectangle,
            DrawingMode::Rectangle => DrawingMode::Line,
        }
    }

    /// Get display name for this mode.
    pub fn name(self) -> &'static str {
        match self {
            DrawingMode::Line => "Line",
            DrawingMode::Rectangle => "Rectangle",
        }
    }

    /// Whether shapes drawn in this mode get a translucent fill under the stroke.
    pub fn is_filled(self) -> bool {
        matches!(self, DrawingMode::Rectangle)
    }
}

/// Geometry of a shape, one variant per drawing mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polyline(Polyline),
    Rectangle(Rectangle),
}

impl Geometry {
    /// Starting geometry for a stroke begun at `point` in `mode`.
    ///
    /// A single-point polyline for lines, a zero-size rectangle for rectangles.
    pub fn start(mode: DrawingMode, point: Point) -> Self {
        match mode {
            DrawingMode::Line => Geometry::Polyline(Polyline::from_points(vec![point])),
            DrawingMode::Rectangle => Geometry::Rectangle(Rectangle::from_corners(point, point)),
        }
    }

    /// The mode this geometry belongs to.
    pub fn mode(&self) -> DrawingMode {
        match self {
            Geometry::Polyline(_) => DrawingMode::Line,
            Geometry::Rectangle(_) => DrawingMode::Rectangle,
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            Geometry::Polyline(p) => p.bounds(),
            Geometry::Rectangle(r) => r.as_rect(),
        }
    }

    pub fn to_path(&self) -> BezPath {
        match self {
            Geometry::Polyline(p) => p.to_path(),
            Geometry::Rectangle(r) => r.to_path(),
        }
    }

    /// Get the polyline if this is line geometry.
    pub fn as_polyline(&self) -> Option<&Polyline> {
        match self {
            Geometry::Polyline(p) => Some(p),
            _ => None,
        }
    }

    /// Get the rectangle if this is rectangle geometry.
    pub fn as_rectangle(&self) -> Option<&Rectangle> {
        match self {
            Geometry::Rectangle(r) => Some(r),
            _ => None,
        }
    }
}

/// A drawn shape: geometry plus the color it was drawn with.
///
/// Fields are private. Once a shape lands in the model's history there is no
/// way to reach its geometry or color mutably, so committed shapes never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: Geometry,
    color: Color,
}

impl Shape {
    /// Create a shape from existing geometry.
    pub fn new(geometry: Geometry, color: Color) -> Self {
        Self { geometry, color }
    }

    /// Begin a new in-progress shape at `point`.
    pub(crate) fn start(mode: DrawingMode, color: Color, point: Point) -> Self {
        Self::new(Geometry::start(mode, point), color)
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub(crate) fn geometry_mut(&mut self) -> &mut Geometry {
        &mut self.geometry
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mode(&self) -> DrawingMode {
        self.geometry.mode()
    }

    /// Get the bounding box in surface coordinates.
    pub fn bounds(&self) -> Rect {
        self.geometry.bounds()
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        self.geometry.to_path()
    }
}

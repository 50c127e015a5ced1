//! Freehand polyline geometry.

use kurbo::{BezPath, Point, Rect};

/// An ordered series of points joined by straight segments.
///
/// Points are only ever appended; nothing removes a point once added.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Create a new empty polyline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Add a point to the end of the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A polyline with fewer than two points has no length.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }

    pub fn bounds(&self) -> Rect {
        let Some(first) = self.points.first() else {
            return Rect::ZERO;
        };

        self.points
            .iter()
            .skip(1)
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();

        let Some(first) = self.points.first() else {
            return path;
        };

        path.move_to(*first);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_polyline_creation() {
        let line = Polyline::new();
        assert!(line.is_empty());
        assert!(line.is_degenerate());
        assert_eq!(line.bounds(), Rect::ZERO);
    }

    #[test]
    fn test_add_points() {
        let mut line = Polyline::from_points(vec![Point::new(0.0, 0.0)]);
        line.add_point(Point::new(10.0, 10.0));
        assert_eq!(line.len(), 2);
        assert!(!line.is_degenerate());
        assert_eq!(line.points()[1], Point::new(10.0, 10.0));
    }

    #[test]
    fn test_bounds() {
        let line = Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(100.0, 50.0),
            Point::new(50.0, 100.0),
        ]);

        let bounds = line.bounds();
        assert!((bounds.x0).abs() < f64::EPSILON);
        assert!((bounds.y0).abs() < f64::EPSILON);
        assert!((bounds.x1 - 100.0).abs() < f64::EPSILON);
        assert!((bounds.y1 - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_single_point_path() {
        let line = Polyline::from_points(vec![Point::new(5.0, 5.0)]);
        let path = line.to_path();
        let elements = path.elements();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0], PathEl::MoveTo(Point::new(5.0, 5.0)));
    }

    #[test]
    fn test_to_path_follows_points() {
        let line = Polyline::from_points(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        let path = line.to_path();
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(Point::new(0.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 0.0)),
                PathEl::LineTo(Point::new(10.0, 10.0)),
            ]
        );
    }
}

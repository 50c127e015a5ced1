//! Pointer input adapters for the drawing model.
//!
//! Hosts report every pointer that is down in an event; only the first one
//! draws. Multi-pointer drawing is not supported.

use crate::model::DrawingModel;
use kurbo::Point;

/// Pointer event for unified mouse/touch handling.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down { positions: Vec<Point> },
    Move { positions: Vec<Point> },
    Up { positions: Vec<Point> },
}

impl PointerEvent {
    /// Single-pointer down event.
    pub fn down(position: Point) -> Self {
        PointerEvent::Down {
            positions: vec![position],
        }
    }

    /// Single-pointer move event.
    pub fn moved(position: Point) -> Self {
        PointerEvent::Move {
            positions: vec![position],
        }
    }

    /// Single-pointer up event.
    pub fn up(position: Point) -> Self {
        PointerEvent::Up {
            positions: vec![position],
        }
    }

    /// Positions of every pointer in the event.
    pub fn positions(&self) -> &[Point] {
        match self {
            PointerEvent::Down { positions }
            | PointerEvent::Move { positions }
            | PointerEvent::Up { positions } => positions,
        }
    }

    /// The pointer that drives drawing, if any.
    pub fn primary(&self) -> Option<Point> {
        self.positions().first().copied()
    }
}

impl DrawingModel {
    /// Pointer pressed: begin a stroke at the first pointer.
    pub fn on_pointer_down(&mut self, positions: &[Point]) {
        let Some(&point) = positions.first() else {
            return;
        };
        self.begin_stroke(point);
    }

    /// Pointer dragged: extend the stroke to the first pointer.
    pub fn on_pointer_move(&mut self, positions: &[Point]) {
        let Some(&point) = positions.first() else {
            return;
        };
        self.update_stroke(point);
    }

    /// Pointer released: commit the stroke.
    ///
    /// The release positions are not used, even when the set is empty; the
    /// shape is committed as it stood after the last move.
    pub fn on_pointer_up(&mut self, _positions: &[Point]) {
        self.end_stroke();
    }

    /// Dispatch a pointer event to the matching adapter.
    pub fn handle_pointer(&mut self, event: &PointerEvent) {
        match event {
            PointerEvent::Down { positions } => self.on_pointer_down(positions),
            PointerEvent::Move { positions } => self.on_pointer_move(positions),
            PointerEvent::Up { positions } => self.on_pointer_up(positions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::DrawingMode;

    #[test]
    fn test_primary_pointer() {
        let event = PointerEvent::Move {
            positions: vec![Point::new(1.0, 1.0), Point::new(9.0, 9.0)],
        };
        assert_eq!(event.primary(), Some(Point::new(1.0, 1.0)));
        assert_eq!(PointerEvent::Up { positions: vec![] }.primary(), None);
    }

    #[test]
    fn test_only_first_pointer_draws() {
        let mut model = DrawingModel::new();
        let second = Point::new(100.0, 100.0);

        model.on_pointer_down(&[Point::new(0.0, 0.0), second]);
        model.on_pointer_move(&[Point::new(5.0, 0.0), second]);
        model.on_pointer_up(&[Point::new(5.0, 0.0), second]);

        let line = model.history()[0].geometry().as_polyline().unwrap();
        assert_eq!(line.points(), &[Point::new(0.0, 0.0), Point::new(5.0, 0.0)]);
    }

    #[test]
    fn test_empty_down_and_move_ignored() {
        let mut model = DrawingModel::new();
        model.on_pointer_down(&[]);
        assert!(!model.is_drawing());

        model.on_pointer_down(&[Point::ZERO]);
        model.on_pointer_move(&[]);
        assert!(model.is_drawing());
        let line = model.in_progress().unwrap().geometry().as_polyline().unwrap();
        assert_eq!(line.len(), 1);
    }

    #[test]
    fn test_empty_up_still_commits() {
        let mut model = DrawingModel::new();
        model.on_pointer_down(&[Point::new(0.0, 0.0)]);
        model.on_pointer_move(&[Point::new(5.0, 5.0)]);
        model.on_pointer_up(&[]);
        assert!(!model.is_drawing());
        assert_eq!(model.len(), 1);

        model.on_pointer_down(&[Point::new(9.0, 9.0)]);
        model.on_pointer_up(&[Point::new(9.0, 9.0)]);
        assert_eq!(model.len(), 2);

        let first = model.history()[0].geometry().as_polyline().unwrap();
        assert_eq!(first.points(), &[Point::new(0.0, 0.0), Point::new(5.0, 5.0)]);
    }

    #[test]
    fn test_release_position_not_added() {
        let mut model = DrawingModel::new();
        model.handle_pointer(&PointerEvent::down(Point::new(0.0, 0.0)));
        model.handle_pointer(&PointerEvent::moved(Point::new(3.0, 0.0)));
        model.handle_pointer(&PointerEvent::up(Point::new(50.0, 50.0)));

        let line = model.history()[0].geometry().as_polyline().unwrap();
        assert_eq!(line.len(), 2);
    }

    #[test]
    fn test_rectangle_drag() {
        let mut model = DrawingModel::new();
        model.set_mode(DrawingMode::Rectangle);
        model.handle_pointer(&PointerEvent::down(Point::new(20.0, 20.0)));
        model.handle_pointer(&PointerEvent::moved(Point::new(10.0, 30.0)));
        model.handle_pointer(&PointerEvent::up(Point::new(10.0, 30.0)));

        let rect = model.history()[0].geometry().as_rectangle().unwrap();
        assert_eq!(rect.as_rect(), kurbo::Rect::new(10.0, 20.0, 20.0, 30.0));
    }
}

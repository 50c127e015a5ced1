//! Drawing model: committed history, the active stroke, and undo/clear.

use crate::repaint::RepaintSignal;
use crate::shapes::{DrawingMode, Geometry, Rectangle, Shape};
use kurbo::{Point, Rect};
use peniko::Color;

/// State of the single stroke a model can have in flight.
#[derive(Debug, Clone, Default)]
pub enum StrokeState {
    /// No pointer is down.
    #[default]
    Idle,
    /// A pointer is down and a shape is being built.
    Active {
        /// Where the stroke began. Fixed corner for rectangles.
        anchor: Point,
        /// Shape under construction. Mode and color were captured at begin.
        shape: Shape,
    },
}

/// Accumulates shapes drawn from pointer input.
///
/// One stroke at a time: [`begin_stroke`](Self::begin_stroke) starts it,
/// [`update_stroke`](Self::update_stroke) grows it and
/// [`end_stroke`](Self::end_stroke) commits it to the history. Calls that
/// arrive out of order are ignored rather than reported. Every change to what
/// should be on screen raises a request on [`repaint`](Self::repaint).
#[derive(Debug)]
pub struct DrawingModel {
    /// Committed shapes, back to front.
    history: Vec<Shape>,
    stroke: StrokeState,
    mode: DrawingMode,
    color: Color,
    repaint: RepaintSignal,
}

impl Default for DrawingModel {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingModel {
    /// Create an empty model drawing black lines.
    pub fn new() -> Self {
        Self::with_defaults(DrawingMode::Line, Color::BLACK)
    }

    /// Create an empty model with a starting mode and color.
    pub fn with_defaults(mode: DrawingMode, color: Color) -> Self {
        Self {
            history: Vec::new(),
            stroke: StrokeState::Idle,
            mode,
            color,
            repaint: RepaintSignal::new(),
        }
    }

    /// Set the mode for the next stroke. The active stroke keeps its own.
    pub fn set_mode(&mut self, mode: DrawingMode) {
        self.mode = mode;
    }

    /// Set the color for the next stroke. The active stroke keeps its own.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn mode(&self) -> DrawingMode {
        self.mode
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Start a stroke at `point` using the current mode and color.
    ///
    /// If a stroke is already active it is dropped without being committed.
    /// There is no separate cancel operation; beginning again is how an
    /// unfinished stroke goes away.
    pub fn begin_stroke(&mut self, point: Point) {
        if self.is_drawing() {
            log::warn!("Stroke begun at {point:?} while another was active; discarding the active stroke");
        }

        log::debug!("Begin {} stroke at {point:?}", self.mode.name());
        self.stroke = StrokeState::Active {
            anchor: point,
            shape: Shape::start(self.mode, self.color, point),
        };
        self.repaint.request();
    }

    /// Extend the active stroke to `point`. No-op when idle.
    ///
    /// Lines append the point. Rectangles are rebuilt from scratch as the
    /// bounding box of the anchor and `point`.
    pub fn update_stroke(&mut self, point: Point) {
        let StrokeState::Active { anchor, shape } = &mut self.stroke else {
            return;
        };

        match shape.geometry_mut() {
            Geometry::Polyline(line) => line.add_point(point),
            Geometry::Rectangle(rect) => *rect = Rectangle::from_corners(*anchor, point),
        }
        log::trace!("Stroke updated to {point:?}");
        self.repaint.request();
    }

    /// Commit the active stroke to the top of the history. No-op when idle.
    ///
    /// Nothing is filtered: a stroke that never moved commits as a single-point
    /// line or a zero-size rectangle.
    pub fn end_stroke(&mut self) {
        let StrokeState::Active { shape, .. } = std::mem::take(&mut self.stroke) else {
            return;
        };

        log::debug!("Commit {} shape #{}", shape.mode().name(), self.history.len() + 1);
        self.history.push(shape);
        self.repaint.request();
    }

    /// Drop every committed shape and any active stroke.
    pub fn clear(&mut self) {
        log::debug!("Clear {} shapes", self.history.len());
        self.history.clear();
        self.stroke = StrokeState::Idle;
        self.repaint.request();
    }

    /// Remove the most recently committed shape.
    ///
    /// The active stroke, if any, is untouched. Returns the removed shape, or
    /// `None` when the history is empty.
    pub fn undo(&mut self) -> Option<Shape> {
        let shape = self.history.pop()?;
        log::debug!("Undo {} shape, {} remain", shape.mode().name(), self.history.len());
        self.repaint.request();
        Some(shape)
    }

    /// Read view of everything to paint, back to front.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            committed: &self.history,
            in_progress: self.in_progress(),
        }
    }

    /// Committed shapes, back to front.
    pub fn history(&self) -> &[Shape] {
        &self.history
    }

    /// The shape under construction, if a stroke is active.
    pub fn in_progress(&self) -> Option<&Shape> {
        match &self.stroke {
            StrokeState::Active { shape, .. } => Some(shape),
            StrokeState::Idle => None,
        }
    }

    /// Where the active stroke began.
    pub fn anchor(&self) -> Option<Point> {
        match &self.stroke {
            StrokeState::Active { anchor, .. } => Some(*anchor),
            StrokeState::Idle => None,
        }
    }

    pub fn stroke_state(&self) -> &StrokeState {
        &self.stroke
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self.stroke, StrokeState::Active { .. })
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn repaint(&self) -> &RepaintSignal {
        &self.repaint
    }

    /// Subscribe to repaint requests.
    pub fn on_repaint(&mut self, listener: impl FnMut() + 'static) {
        self.repaint.subscribe(listener);
    }

    /// Consume the pending repaint request, returning whether there was one.
    pub fn take_repaint_request(&mut self) -> bool {
        self.repaint.take()
    }
}

/// Momentary read view of a model for one render pass.
///
/// Borrows the model, so it cannot be held across mutations.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Committed shapes, back to front.
    pub committed: &'a [Shape],
    /// Shape being drawn, painted over everything committed.
    pub in_progress: Option<&'a Shape>,
}

impl<'a> Snapshot<'a> {
    /// All shapes in paint order: history first, then the active stroke.
    pub fn iter(self) -> impl Iterator<Item = &'a Shape> {
        self.committed.iter().chain(self.in_progress)
    }

    pub fn len(&self) -> usize {
        self.committed.len() + usize::from(self.in_progress.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Union of every shape's bounds.
    pub fn bounds(&self) -> Option<Rect> {
        self.iter().map(Shape::bounds).reduce(|acc, b| acc.union(b))
    }
}

//! Inkpad Core Library
//!
//! Platform-agnostic drawing model for the inkpad sketch surface: pointer
//! strokes become lines and rectangles, kept in paint order with undo and clear.
//! Nothing here touches a graphics context; renderers read a [`Snapshot`].

pub mod input;
pub mod model;
pub mod repaint;
pub mod shapes;

pub use input::PointerEvent;
pub use model::{DrawingModel, Snapshot, StrokeState};
pub use repaint::RepaintSignal;
pub use shapes::{DrawingMode, Geometry, Polyline, Rectangle, Shape};

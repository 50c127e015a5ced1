//! Repaint requests raised by the drawing model.
//!
//! The model never draws. When its picture changes it raises a request; the
//! host either polls [`RepaintSignal::take`] once per frame or subscribes a
//! listener that schedules its own redraw.

use std::fmt;

type Listener = Box<dyn FnMut()>;

/// Pending-repaint flag plus subscribed listeners.
#[derive(Default)]
pub struct RepaintSignal {
    pending: bool,
    listeners: Vec<Listener>,
}

impl RepaintSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe a listener, called synchronously on every request.
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Raise a request: mark pending and notify every listener.
    pub fn request(&mut self) {
        self.pending = true;
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Whether a request is waiting to be consumed.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consume the pending request, returning whether there was one.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl fmt::Debug for RepaintSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RepaintSignal")
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

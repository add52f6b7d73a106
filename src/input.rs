// Touch event abstraction: only the first contact's page coordinates are read

use web_sys::TouchEvent;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub page_x: f64,
    pub page_y: f64,
}

impl TouchPoint {
    pub fn new(page_x: f64, page_y: f64) -> Self {
        Self { page_x, page_y }
    }
}

/// What the handler needs from a touch event.
pub trait TouchInput {
    /// First active contact, `None` when the event carries no touches.
    fn first_touch(&self) -> Option<TouchPoint>;
    fn prevent_default(&self);
    fn stop_propagation(&self);
}

impl TouchInput for TouchEvent {
    fn first_touch(&self) -> Option<TouchPoint> {
        self.touches()
            .item(0)
            .map(|t| TouchPoint::new(t.page_x() as f64, t.page_y() as f64))
    }

    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }

    fn stop_propagation(&self) {
        web_sys::Event::stop_propagation(self);
    }
}

// Quadratic ease-in-out and the bounded run that walks it frame by frame

/// Standard symmetric quadratic ease-in-out.
/// `t` = current iteration, `b` = start value, `c` = change in value, `d` = total iterations.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// One easing run: interpolates from `(from_x, from_y)` by `(change_x, change_y)`
/// over `total` frames. Values are captured when the run starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasingRun {
    pub iteration: u32,
    pub total: u32,
    pub from_x: f64,
    pub from_y: f64,
    pub change_x: f64,
    pub change_y: f64,
}

impl EasingRun {
    pub fn new(from: (f64, f64), change: (f64, f64), total: u32) -> Self {
        Self {
            iteration: 0,
            total: total.max(1),
            from_x: from.0,
            from_y: from.1,
            change_x: change.0,
            change_y: change.1,
        }
    }

    /// Advance one frame and return the eased pair for it.
    /// Returns `None` once the run has already delivered its last frame.
    pub fn step(&mut self) -> Option<(f64, f64)> {
        if self.is_finished() {
            return None;
        }
        self.iteration += 1;
        Some(self.value_at(self.iteration))
    }

    pub fn value_at(&self, iteration: u32) -> (f64, f64) {
        let t = iteration as f64;
        let d = self.total as f64;
        (
            ease_in_out_quad(t, self.from_x, self.change_x, d),
            ease_in_out_quad(t, self.from_y, self.change_y, d),
        )
    }

    /// Final position of the run (`from + change`).
    pub fn target(&self) -> (f64, f64) {
        self.value_at(self.total)
    }

    pub fn is_finished(&self) -> bool {
        self.iteration >= self.total
    }

    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.iteration)
    }
}

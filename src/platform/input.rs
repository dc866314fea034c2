//! Jump input latch
//!
//! A press is remembered with its timestamp and stays held for a short
//! window, so a tap that lands between two frames is not lost. The latch is
//! consumed as soon as it produces a jump, so one press never jumps twice.

/// Timestamped, self-expiring jump press
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpLatch {
    pressed_at: Option<f64>,
    window_ms: f64,
}

impl JumpLatch {
    pub fn new(window_ms: f64) -> Self {
        Self {
            pressed_at: None,
            window_ms,
        }
    }

    /// Record a press at `now_ms` (a repeated press restarts the window)
    pub fn press(&mut self, now_ms: f64) {
        self.pressed_at = Some(now_ms);
    }

    /// Whether a press is still inside its window at `now_ms`
    pub fn is_held(&self, now_ms: f64) -> bool {
        self.pressed_at
            .is_some_and(|t| (0.0..self.window_ms).contains(&(now_ms - t)))
    }

    /// The press produced a jump; forget it
    pub fn consume(&mut self) {
        self.pressed_at = None;
    }

    pub fn window_ms(&self) -> f64 {
        self.window_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_expires_after_window() {
        let mut latch = JumpLatch::new(100.0);
        assert!(!latch.is_held(0.0));

        latch.press(1000.0);
        assert!(latch.is_held(1000.0));
        assert!(latch.is_held(1099.9));
        assert!(!latch.is_held(1100.0));
    }

    #[test]
    fn test_consume_clears_press() {
        let mut latch = JumpLatch::new(100.0);
        latch.press(0.0);
        latch.consume();
        assert!(!latch.is_held(10.0));
    }

    #[test]
    fn test_repress_restarts_window() {
        let mut latch = JumpLatch::new(100.0);
        latch.press(0.0);
        latch.press(80.0);
        assert!(latch.is_held(150.0));
    }

    #[test]
    fn test_clock_going_backwards_is_not_held() {
        let mut latch = JumpLatch::new(100.0);
        latch.press(500.0);
        assert!(!latch.is_held(400.0));
    }
}

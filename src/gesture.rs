//! Mouse drag tracking.
//!
//! Turns a press, any number of drags and a release into at most one
//! horizontal swipe. Short drags and mostly vertical drags produce nothing,
//! so the quiz core only ever sees left or right.

use crate::models::SwipeDirection;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: i32 = 2;

#[derive(Debug, Clone, Copy)]
struct Press {
    column: u16,
    row: u16,
}

/// Follows a single pointer from press to release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u16,
    press: Option<Press>,
    offset: i32,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            threshold: threshold.max(1),
            press: None,
            offset: 0,
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.press = Some(Press { column, row });
        self.offset = 0;
    }

    /// Update the pointer and return the horizontal offset from the press.
    pub fn drag(&mut self, column: u16) -> Option<i32> {
        let press = self.press?;
        self.offset = column as i32 - press.column as i32;
        Some(self.offset)
    }

    /// Finish the gesture. Returns a swipe only for long, mostly horizontal drags.
    pub fn release(&mut self, column: u16, row: u16) -> Option<SwipeDirection> {
        let press = self.press.take()?;
        self.offset = 0;

        let dx = column as i32 - press.column as i32;
        let dy = row as i32 - press.row as i32;

        if dx.abs() < self.threshold as i32 || dy.abs() * CELL_ASPECT > dx.abs() {
            return None;
        }

        if dx > 0 {
            Some(SwipeDirection::Right)
        } else {
            Some(SwipeDirection::Left)
        }
    }

    pub fn cancel(&mut self) {
        self.press = None;
        self.offset = 0;
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_horizontal_drag_is_a_swipe() {
        let mut tracker = SwipeTracker::new(6);
        tracker.press(10, 4);
        assert_eq!(tracker.drag(14), Some(4));
        assert_eq!(tracker.drag(20), Some(10));

        assert_eq!(tracker.release(20, 4), Some(SwipeDirection::Right));
        assert_eq!(tracker.offset(), 0);
        assert!(tracker.drag(30).is_none());
    }

    #[test]
    fn leftward_drag_swipes_left() {
        let mut tracker = SwipeTracker::new(6);
        tracker.press(30, 7);
        assert_eq!(tracker.release(12, 8), Some(SwipeDirection::Left));
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut tracker = SwipeTracker::new(6);
        tracker.press(10, 4);
        assert!(tracker.release(15, 4).is_none());
    }

    #[test]
    fn vertical_drag_is_filtered_out() {
        let mut tracker = SwipeTracker::new(6);
        tracker.press(10, 2);
        assert!(tracker.release(18, 12).is_none());
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut tracker = SwipeTracker::new(6);
        assert!(tracker.drag(40).is_none());
        assert!(tracker.release(40, 1).is_none());
    }

    #[test]
    fn cancel_forgets_the_press() {
        let mut tracker = SwipeTracker::new(6);
        tracker.press(0, 3);
        assert_eq!(tracker.drag(9), Some(9));

        tracker.cancel();
        assert_eq!(tracker.offset(), 0);
        assert!(tracker.release(20, 3).is_none());
    }
}

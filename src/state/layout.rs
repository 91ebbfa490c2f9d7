//! Player sizing.

use crate::constants::{PLAYER_MIN_HEIGHT, PLAYER_MIN_WIDTH};

/// Size of the embedded player area in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSize {
    pub width: f64,
    pub height: f64,
}

impl PlayerSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: width.max(PLAYER_MIN_WIDTH),
            height: height.max(PLAYER_MIN_HEIGHT),
        }
    }

    /// Size after dragging the resize handle by `(dx, dy)` from `self`.
    pub fn dragged_by(self, dx: f64, dy: f64) -> Self {
        Self::new(self.width + dx, self.height + dy)
    }
}

/// An in-progress resize drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    pub origin_x: f64,
    pub origin_y: f64,
    pub start: PlayerSize,
}

impl ResizeDrag {
    pub fn size_at(&self, x: f64, y: f64) -> PlayerSize {
        self.start.dragged_by(x - self.origin_x, y - self.origin_y)
    }
}

use serde::{Deserialize, Serialize};

use crate::models::{ClickEvent, Point, Position};

/// Height of the button strip below the grid, as a fraction of a cell.
const BUTTON_STRIP_RATIO: f64 = 0.5;
/// Gap between the grid and the button strip, as a fraction of a cell.
const BUTTON_GAP_RATIO: f64 = 0.15;

/// An axis-aligned region in board pixels. Right and bottom edges are exclusive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

/// Pixel geometry of the board as drawn by the client.
///
/// This is the only place screen coordinates enter the game; everything
/// downstream works on grid positions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoardLayout {
    pub origin_x: f64,
    pub origin_y: f64,
    pub cell_size: f64,
    pub rows: usize,
    pub cols: usize,
}

impl BoardLayout {
    pub fn new(origin_x: f64, origin_y: f64, cell_size: f64, rows: usize, cols: usize) -> Self {
        Self {
            origin_x,
            origin_y,
            cell_size,
            rows,
            cols,
        }
    }

    pub fn grid_region(&self) -> Rect {
        Rect {
            x: self.origin_x,
            y: self.origin_y,
            width: self.cols as f64 * self.cell_size,
            height: self.rows as f64 * self.cell_size,
        }
    }

    fn button_strip(&self) -> Rect {
        let grid = self.grid_region();
        Rect {
            x: grid.x,
            y: grid.y + grid.height + self.cell_size * BUTTON_GAP_RATIO,
            width: grid.width,
            height: self.cell_size * BUTTON_STRIP_RATIO,
        }
    }

    /// Left half of the strip below the grid.
    pub fn reset_region(&self) -> Rect {
        let strip = self.button_strip();
        Rect {
            width: strip.width / 2.0,
            ..strip
        }
    }

    /// Right half of the strip below the grid.
    pub fn exit_region(&self) -> Rect {
        let strip = self.button_strip();
        Rect {
            x: strip.x + strip.width / 2.0,
            width: strip.width / 2.0,
            ..strip
        }
    }

    pub fn cell_at_point(&self, point: Point) -> Option<Position> {
        if !self.grid_region().contains(point) {
            return None;
        }

        let row = ((point.y - self.origin_y) / self.cell_size) as usize;
        let col = ((point.x - self.origin_x) / self.cell_size) as usize;

        // Float rounding at the far edge can land one past the last cell
        Some(Position::new(row.min(self.rows - 1), col.min(self.cols - 1)))
    }

    /// The button under a raw click, if any. Exit wins over reset.
    /// Clicks that miss both are left for the grid to resolve.
    pub fn control_at_point(&self, point: Point) -> Option<ClickEvent> {
        if self.exit_region().contains(point) {
            Some(ClickEvent::Exit)
        } else if self.reset_region().contains(point) {
            Some(ClickEvent::Reset)
        } else {
            None
        }
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(50.0, 50.0, 75.0, 4, 4)
    }
}

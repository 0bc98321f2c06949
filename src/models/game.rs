use serde::{Deserialize, Serialize};

/// Where the game currently is in a turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnState {
    /// No selection in progress
    Idle,
    /// One or more cubes chosen
    Selecting,
    /// The player asked to leave; no further events are processed
    GameOver,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True iff the positions differ and touch, diagonals included.
    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let row_diff = self.row.abs_diff(other.row);
        let col_diff = self.col.abs_diff(other.col);

        row_diff <= 1 && col_diff <= 1 && (row_diff + col_diff > 0)
    }
}

/// A raw click coordinate reported by the client, in board pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A classified input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    Cell(Position),
    Reset,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacent_positions() {
        let pos1 = Position::new(0, 0);
        let pos2 = Position::new(0, 1);
        let pos3 = Position::new(1, 1);
        let pos4 = Position::new(2, 2);

        assert!(pos1.is_adjacent_to(&pos2));
        assert!(pos2.is_adjacent_to(&pos3));
        assert!(pos1.is_adjacent_to(&pos3));
        assert!(!pos1.is_adjacent_to(&pos4));
        assert!(!pos1.is_adjacent_to(&pos1));
    }

    #[test]
    fn test_turn_state_serializes_snake_case() {
        let json = serde_json::to_string(&TurnState::GameOver).unwrap();
        assert_eq!(json, "\"game_over\"");
    }
}

pub mod game;

pub use game::{ClickEvent, Point, Position, TurnState};

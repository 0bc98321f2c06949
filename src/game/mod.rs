// Game engine modules

pub mod cube;
pub mod display;
pub mod engine;
pub mod error;
pub mod grid;
pub mod layout;
pub mod scorer;
pub mod validator;

pub use display::DisplayCommand;
pub use engine::{Game, Transition};
pub use error::GameError;
pub use grid::Grid;
pub use layout::BoardLayout;

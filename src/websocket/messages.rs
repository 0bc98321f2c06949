use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::{BoardLayout, DisplayCommand};

/// Messages sent from client to server
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Raw click in board pixels; the server decides what was hit
    Click {
        x: f64,
        y: f64,
    },
    /// Click already resolved to a grid cell by the client
    SelectCell {
        row: usize,
        col: usize,
    },
    Reset,
    Exit,
}

/// Messages sent from server to client
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Welcome {
        session_id: Uuid,
        layout: BoardLayout,
        letters: Vec<Vec<String>>,
    },
    /// Every display command produced by one client event, in order
    Display {
        commands: Vec<DisplayCommand>,
    },
    GameOver {
        found_words: Vec<String>,
        score: u32,
    },
    Error {
        message: String,
    },
}

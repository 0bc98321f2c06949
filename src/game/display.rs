use serde::{Deserialize, Serialize};

use crate::models::Position;

/// How a cell is drawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CellStyle {
    Default,
    /// The most recently selected cube of the current path
    Selected,
    /// Earlier cubes of the current path
    Confirmed,
}

impl CellStyle {
    pub fn text_color(&self) -> &'static str {
        match self {
            CellStyle::Default => "black",
            CellStyle::Selected => "blue",
            CellStyle::Confirmed => "DarkSeaGreen1",
        }
    }

    pub fn fill_color(&self) -> &'static str {
        match self {
            CellStyle::Default => "white",
            CellStyle::Selected => "powder blue",
            CellStyle::Confirmed => "green",
        }
    }
}

/// Drawing instructions emitted by the game. The game never reads display state back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayCommand {
    SetCell {
        row: usize,
        col: usize,
        text: String,
        style: CellStyle,
        foreground: String,
        background: String,
    },
    /// Restore a cell to default styling
    ClearCell {
        row: usize,
        col: usize,
        text: String,
        foreground: String,
        background: String,
    },
    SetCurrentWord {
        text: String,
    },
    AppendFoundWord {
        word: String,
        score: u32,
    },
    SetScore {
        total: u32,
    },
    /// Redraw every cell's letter after a shuffle
    RedrawGrid {
        letters: Vec<Vec<String>>,
    },
    /// Clear all text areas and cell colours
    ResetDisplay,
}

impl DisplayCommand {
    /// Paint a cell in `style`, carrying the style's colours.
    pub fn set_cell(position: Position, text: impl Into<String>, style: CellStyle) -> Self {
        DisplayCommand::SetCell {
            row: position.row,
            col: position.col,
            text: text.into(),
            style,
            foreground: style.text_color().to_string(),
            background: style.fill_color().to_string(),
        }
    }

    pub fn clear_cell(position: Position, text: impl Into<String>) -> Self {
        let style = CellStyle::Default;
        DisplayCommand::ClearCell {
            row: position.row,
            col: position.col,
            text: text.into(),
            foreground: style.text_color().to_string(),
            background: style.fill_color().to_string(),
        }
    }
}

/// Receiver of display commands.
pub trait DisplaySink {
    fn emit(&mut self, command: DisplayCommand);
}

impl DisplaySink for Vec<DisplayCommand> {
    fn emit(&mut self, command: DisplayCommand) {
        self.push(command);
    }
}

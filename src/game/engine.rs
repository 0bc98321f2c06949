use std::sync::Arc;

use rand::{rngs::StdRng, SeedableRng};

use super::{
    cube::CubeId,
    display::{CellStyle, DisplayCommand, DisplaySink},
    error::GameError,
    grid::Grid,
    scorer::Scorer,
    validator::WordValidator,
};
use crate::{
    dictionary::Lexicon,
    models::{ClickEvent, Point, Position, TurnState},
};

/// What a single event did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// First cube of a new path selected
    Started,
    /// Path grew by one cube
    Extended,
    /// Tail re-clicked; the path was checked against the lexicon
    Committed { word: String, accepted: bool },
    /// Path discarded without checking
    Aborted,
    /// Board shaken and found words cleared
    Reset,
    Exited,
    /// The event had no effect
    Ignored,
}

/// One player's Boggle game: the board, the path being traced and the words found so far.
///
/// Events are applied one at a time; each call emits all of its display
/// commands to the sink before returning.
pub struct Game<S: DisplaySink> {
    grid: Grid,
    validator: WordValidator,
    sink: S,
    rng: StdRng,
    state: TurnState,
    path: Vec<CubeId>,
    found_words: Vec<String>,
}

impl<S: DisplaySink> Game<S> {
    pub fn new(grid: Grid, lexicon: Arc<Lexicon>, sink: S) -> Self {
        Self::with_rng(grid, lexicon, sink, StdRng::from_os_rng())
    }

    pub fn with_rng(grid: Grid, lexicon: Arc<Lexicon>, sink: S, rng: StdRng) -> Self {
        Self {
            grid,
            validator: WordValidator::new(lexicon),
            sink,
            rng,
            state: TurnState::Idle,
            path: Vec::new(),
            found_words: Vec::new(),
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    #[cfg(test)]
    pub fn path(&self) -> &[CubeId] {
        &self.path
    }

    pub fn found_words(&self) -> &[String] {
        &self.found_words
    }

    pub fn score(&self) -> u32 {
        Scorer::total_score(self.found_words.as_slice())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// The word spelled by the current path
    pub fn current_word(&self) -> Result<String, GameError> {
        self.validator.extract_word(&self.grid, &self.path)
    }

    /// Resolve a raw click to a button or a grid cell, then apply it.
    /// Buttons are checked before the grid.
    pub fn handle_point(&mut self, point: Point) -> Result<Transition, GameError> {
        let event = match self.grid.layout().control_at_point(point) {
            Some(event) => event,
            None => match self.grid.cell_at_point(point) {
                Some(position) => ClickEvent::Cell(position),
                None => return Ok(Transition::Ignored),
            },
        };
        self.handle_click(event)
    }

    pub fn handle_click(&mut self, event: ClickEvent) -> Result<Transition, GameError> {
        if self.state == TurnState::GameOver {
            tracing::warn!("Ignoring {:?} after game over", event);
            return Ok(Transition::Ignored);
        }

        let transition = match event {
            ClickEvent::Exit => {
                self.state = TurnState::GameOver;
                Transition::Exited
            }
            ClickEvent::Reset => {
                self.new_game()?;
                Transition::Reset
            }
            ClickEvent::Cell(Position { row, col }) => {
                let clicked = self.grid.cube_at(row, col)?.id();
                self.click_cube(clicked)?
            }
        };

        tracing::debug!("{:?} -> {:?} (state {:?})", event, transition, self.state);
        Ok(transition)
    }

    /// Shake the board and start over with no found words.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.grid.shuffle(&mut self.rng)?;
        self.path.clear();
        self.found_words.clear();
        self.state = TurnState::Idle;

        self.sink.emit(DisplayCommand::ResetDisplay);
        self.sink.emit(DisplayCommand::RedrawGrid {
            letters: self.grid.letters(),
        });
        Ok(())
    }

    fn click_cube(&mut self, clicked: CubeId) -> Result<Transition, GameError> {
        let Some(&tail) = self.path.last() else {
            self.select(clicked, None)?;
            self.state = TurnState::Selecting;
            return Ok(Transition::Started);
        };

        if clicked == tail {
            return self.commit();
        }

        if self.path.contains(&clicked) || !self.grid.are_adjacent(clicked, tail)? {
            self.reset_turn()?;
            return Ok(Transition::Aborted);
        }

        self.select(clicked, Some(tail))?;
        debug_assert!(self
            .validator
            .is_valid_path(&self.grid, &self.path)
            .unwrap_or(false));
        Ok(Transition::Extended)
    }

    /// Highlight `cube` as the new tail, demoting the previous tail.
    fn select(&mut self, cube: CubeId, previous_tail: Option<CubeId>) -> Result<(), GameError> {
        if let Some(tail) = previous_tail {
            self.paint(tail, CellStyle::Confirmed)?;
        }
        self.paint(cube, CellStyle::Selected)?;
        self.path.push(cube);

        let text = self.current_word()?;
        self.sink.emit(DisplayCommand::SetCurrentWord { text });
        Ok(())
    }

    fn commit(&mut self) -> Result<Transition, GameError> {
        let word = self.current_word()?;
        let accepted =
            self.validator.is_valid_word(&word) && !self.found_words.iter().any(|w| *w == word);

        if accepted {
            let points = Scorer::word_score(&word);
            self.found_words.push(word.clone());
            let total = self.score();
            tracing::info!("Found word {} (+{}, total {})", word, points, total);

            self.sink.emit(DisplayCommand::AppendFoundWord {
                word: word.clone(),
                score: points,
            });
            self.sink.emit(DisplayCommand::SetScore { total });
        }

        self.reset_turn()?;
        Ok(Transition::Committed { word, accepted })
    }

    /// Drop the current path and restore its cells to default styling.
    fn reset_turn(&mut self) -> Result<(), GameError> {
        for id in std::mem::take(&mut self.path) {
            let position = self.grid.position_of(id)?;
            let text = self.grid.cube(id)?.visible_face();
            self.sink.emit(DisplayCommand::clear_cell(position, text));
        }
        self.sink.emit(DisplayCommand::SetCurrentWord {
            text: String::new(),
        });
        self.state = TurnState::Idle;
        Ok(())
    }

    fn paint(&mut self, id: CubeId, style: CellStyle) -> Result<(), GameError> {
        let position = self.grid.position_of(id)?;
        let text = self.grid.cube(id)?.visible_face();
        self.sink.emit(DisplayCommand::set_cell(position, text, style));
        Ok(())
    }
}

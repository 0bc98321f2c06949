use std::collections::HashSet;
use std::sync::Arc;

use super::{cube::CubeId, error::GameError, grid::Grid};
use crate::dictionary::Lexicon;

pub struct WordValidator {
    lexicon: Arc<Lexicon>,
}

impl WordValidator {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Check if word exists in the lexicon
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    /// Validate that cubes form a valid path on the grid:
    /// non-empty, no cube twice, each step to a touching cell.
    pub fn is_valid_path(&self, grid: &Grid, path: &[CubeId]) -> Result<bool, GameError> {
        if path.is_empty() {
            return Ok(false);
        }

        let unique: HashSet<_> = path.iter().collect();
        if unique.len() != path.len() {
            return Ok(false);
        }

        for window in path.windows(2) {
            if !grid.are_adjacent(window[0], window[1])? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    /// Concatenate the visible faces along the path
    pub fn extract_word(&self, grid: &Grid, path: &[CubeId]) -> Result<String, GameError> {
        path.iter()
            .map(|id| grid.cube(*id).map(|cube| cube.visible_face()))
            .collect()
    }
}

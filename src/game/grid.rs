use std::fmt;

use rand::{seq::SliceRandom, Rng};

use super::{
    cube::{Cube, CubeId},
    error::GameError,
    layout::BoardLayout,
};
use crate::{
    models::{Point, Position},
    utils::cube_faces::standard_face_sets,
};

/// Rows and columns of the standard board
pub const GRID_SIZE: usize = 4;

/// A fixed arrangement of cells, each holding exactly one cube.
///
/// `cells` (position to cube) and `positions` (cube to position) are kept
/// in lockstep, so the arrangement is a bijection after every call.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cubes: Vec<Cube>,
    /// Row-major cell contents
    cells: Vec<CubeId>,
    /// Indexed by `CubeId`
    positions: Vec<Position>,
    layout: BoardLayout,
}

impl Grid {
    /// Build a grid with one cube per face set; cube `i` goes to `(i / cols, i % cols)`.
    ///
    /// Panics if the number of face sets does not fill the grid exactly.
    pub fn new(
        rows: usize,
        cols: usize,
        face_sets: Vec<Vec<String>>,
        layout: BoardLayout,
    ) -> Self {
        assert_eq!(
            face_sets.len(),
            rows * cols,
            "a {}x{} grid needs exactly {} cubes",
            rows,
            cols,
            rows * cols
        );

        let cubes: Vec<Cube> = face_sets
            .into_iter()
            .enumerate()
            .map(|(i, faces)| Cube::new(CubeId(i), faces))
            .collect();
        let cells = (0..cubes.len()).map(CubeId).collect();
        let positions = (0..cubes.len())
            .map(|i| Position::new(i / cols, i % cols))
            .collect();

        Self {
            rows,
            cols,
            cubes,
            cells,
            positions,
            layout,
        }
    }

    /// The 4x4 board with the sixteen standard cubes.
    pub fn standard(layout: BoardLayout) -> Self {
        Self::new(GRID_SIZE, GRID_SIZE, standard_face_sets(), layout)
    }

    #[cfg(test)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[cfg(test)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.rows || col >= self.cols {
            return Err(GameError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Put `id` at `(row, col)`. Whatever cube sat there moves to the cell
    /// `id` left, so no cell is ever empty and no cube sits twice.
    pub fn place_cube(&mut self, row: usize, col: usize, id: CubeId) -> Result<(), GameError> {
        let target = self.index_of(row, col)?;
        let from = self.position_of(id)?;
        let source = self.index_of(from.row, from.col)?;

        let displaced = self.cells[target];
        self.cells.swap(source, target);
        self.positions[displaced.0] = from;
        self.positions[id.0] = Position::new(row, col);
        Ok(())
    }

    pub fn cube_at(&self, row: usize, col: usize) -> Result<&Cube, GameError> {
        let index = self.index_of(row, col)?;
        Ok(&self.cubes[self.cells[index].0])
    }

    pub fn cube(&self, id: CubeId) -> Result<&Cube, GameError> {
        self.cubes.get(id.0).ok_or(GameError::NotFound(id))
    }

    #[cfg(test)]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    pub fn position_of(&self, id: CubeId) -> Result<Position, GameError> {
        self.positions
            .get(id.0)
            .copied()
            .ok_or(GameError::NotFound(id))
    }

    pub fn cell_at_point(&self, point: Point) -> Option<Position> {
        self.layout.cell_at_point(point)
    }

    /// Whether two cubes sit on touching cells, diagonals included.
    /// A cube is never adjacent to itself.
    pub fn are_adjacent(&self, a: CubeId, b: CubeId) -> Result<bool, GameError> {
        let pos_a = self.position_of(a)?;
        let pos_b = self.position_of(b)?;
        Ok(pos_a.is_adjacent_to(&pos_b))
    }

    /// Roll every cube and deal them onto a fresh random arrangement.
    pub fn shuffle(&mut self, rng: &mut impl Rng) -> Result<(), GameError> {
        for cube in &mut self.cubes {
            cube.randomize_face(rng);
        }

        let mut order = self.cells.clone();
        order.shuffle(rng);
        // Cells before `index` are already final, so each swap only disturbs later cells
        for (index, id) in order.into_iter().enumerate() {
            self.place_cube(index / self.cols, index % self.cols, id)?;
        }

        tracing::debug!("Shuffled grid:\n{}", self);
        Ok(())
    }

    /// Visible faces in row-major order, one inner vector per row.
    pub fn letters(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|id| self.cubes[id.0].visible_face().to_string())
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, letters) in self.letters().iter().enumerate() {
            write!(f, "{}:", row)?;
            for letter in letters {
                write!(f, " [{}]", letter)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn standard_grid() -> Grid {
        Grid::standard(BoardLayout::default())
    }

    fn assert_bijection(grid: &Grid) {
        let mut seen = HashSet::new();
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                let cube = grid.cube_at(row, col).unwrap();
                assert!(seen.insert(cube.id()), "cube {} placed twice", cube.id());
                assert_eq!(
                    grid.position_of(cube.id()).unwrap(),
                    Position::new(row, col)
                );
            }
        }
        assert_eq!(seen.len(), grid.rows() * grid.cols());
    }

    #[test]
    fn test_grid_generation() {
        let grid = standard_grid();
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.letters().len(), 4);
        assert!(grid.letters().iter().all(|row| row.len() == 4));
        assert_bijection(&grid);
    }

    #[test]
    fn test_reverse_lookup_round_trip() {
        let grid = standard_grid();
        for row in 0..4 {
            for col in 0..4 {
                let id = grid.cube_at(row, col).unwrap().id();
                assert_eq!(grid.position_of(id).unwrap(), Position::new(row, col));
            }
        }
    }

    #[test]
    fn test_out_of_bounds() {
        let grid = standard_grid();
        assert_eq!(
            grid.cube_at(4, 0).unwrap_err(),
            GameError::OutOfBounds {
                row: 4,
                col: 0,
                rows: 4,
                cols: 4
            }
        );
        assert!(grid.cube_at(0, 7).is_err());
    }

    #[test]
    fn test_unknown_cube_not_found() {
        let grid = standard_grid();
        assert_eq!(
            grid.position_of(CubeId(99)).unwrap_err(),
            GameError::NotFound(CubeId(99))
        );
        assert!(grid.are_adjacent(CubeId(0), CubeId(99)).is_err());
    }

    #[test]
    fn test_place_cube_swaps_displaced_cube() {
        let mut grid = standard_grid();
        grid.place_cube(3, 3, CubeId(0)).unwrap();

        assert_eq!(grid.cube_at(3, 3).unwrap().id(), CubeId(0));
        assert_eq!(grid.cube_at(0, 0).unwrap().id(), CubeId(15));
        assert_bijection(&grid);

        assert!(grid.place_cube(4, 4, CubeId(1)).is_err());
        assert_bijection(&grid);
    }

    #[test]
    fn test_adjacency_symmetric_and_irreflexive() {
        let mut grid = standard_grid();
        let mut rng = StdRng::seed_from_u64(5);
        grid.shuffle(&mut rng).unwrap();

        for a in 0..16 {
            assert!(!grid.are_adjacent(CubeId(a), CubeId(a)).unwrap());
            for b in 0..16 {
                assert_eq!(
                    grid.are_adjacent(CubeId(a), CubeId(b)).unwrap(),
                    grid.are_adjacent(CubeId(b), CubeId(a)).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_adjacency_neighbourhood() {
        let grid = standard_grid();
        // Fresh grid: cube i sits at (i / 4, i % 4)
        assert!(grid.are_adjacent(CubeId(0), CubeId(1)).unwrap());
        assert!(grid.are_adjacent(CubeId(0), CubeId(5)).unwrap());
        assert!(!grid.are_adjacent(CubeId(0), CubeId(10)).unwrap());
        assert!(!grid.are_adjacent(CubeId(3), CubeId(4)).unwrap());
        // Corner has three neighbours, centre cell eight
        let count = |id: usize| {
            (0..16)
                .filter(|&other| grid.are_adjacent(CubeId(id), CubeId(other)).unwrap())
                .count()
        };
        assert_eq!(count(0), 3);
        assert_eq!(count(5), 8);
    }

    #[test]
    fn test_shuffle_preserves_bijection_and_faces() {
        let mut grid = standard_grid();
        let before: Vec<Vec<String>> =
            grid.cubes().iter().map(|c| c.faces().to_vec()).collect();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            grid.shuffle(&mut rng).unwrap();
            assert_bijection(&grid);
            for cube in grid.cubes() {
                assert_eq!(cube.faces(), before[cube.id().0].as_slice());
                assert!(cube.faces().iter().any(|f| f == cube.visible_face()));
            }
        }
    }

    #[test]
    fn test_shuffle_moves_cubes() {
        let mut grid = standard_grid();
        let mut rng = StdRng::seed_from_u64(7);
        grid.shuffle(&mut rng).unwrap();

        let moved = (0..16)
            .filter(|&i| grid.position_of(CubeId(i)).unwrap() != Position::new(i / 4, i % 4))
            .count();
        assert!(moved > 0);
    }

    #[test]
    fn test_shuffle_is_seed_deterministic() {
        let mut a = standard_grid();
        let mut b = standard_grid();
        a.shuffle(&mut StdRng::seed_from_u64(11)).unwrap();
        b.shuffle(&mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.letters(), b.letters());
        for id in 0..16 {
            assert_eq!(
                a.position_of(CubeId(id)).unwrap(),
                b.position_of(CubeId(id)).unwrap()
            );
        }
    }

    #[test]
    fn test_cell_at_point_resolves_cube() {
        let grid = standard_grid();
        let pos = grid.cell_at_point(Point::new(140.0, 210.0)).unwrap();
        assert_eq!(pos, Position::new(2, 1));
        assert_eq!(grid.cube_at(pos.row, pos.col).unwrap().id(), CubeId(9));
        assert_eq!(grid.cell_at_point(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_display_lists_rows() {
        let grid = standard_grid();
        let rendered = grid.to_string();
        assert_eq!(rendered.lines().count(), 4);
        assert!(rendered.starts_with("0: [A] [T] [J] [A]"));
    }
}

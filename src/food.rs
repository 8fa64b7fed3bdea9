use rand::Rng;

use crate::grid::{Grid, Position};

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Moves the food to a uniformly random cell.
    ///
    /// Cells occupied by the snake are not excluded, so food may land under
    /// the body.
    pub fn relocate<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: &Grid) {
        self.position = grid.random_cell(rng);
    }
}

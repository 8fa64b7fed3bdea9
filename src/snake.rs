use std::collections::VecDeque;

use crate::grid::{Grid, Position};
use crate::input::Direction;

/// Ordered chain of cells, head first.
///
/// Movement is a shift register: on every step each follower takes the
/// position its predecessor held before the step. Pushing the new head at the
/// front and dropping the back segment is exactly that shift, including for a
/// freshly grown sentinel tail, which is overwritten before it ever moves.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Position>,
    heading: Direction,
}

impl Snake {
    /// Creates a snake of `length` segments stacked on `start`.
    ///
    /// The stacked followers separate from the head one step at a time.
    #[must_use]
    pub fn new(start: Position, length: usize, heading: Direction) -> Self {
        assert!(length >= 1, "snake length must be at least 1");

        Self {
            body: std::iter::repeat_n(start, length).collect(),
            heading,
        }
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Position>, heading: Direction) -> Self {
        assert!(!segments.is_empty(), "snake length must be at least 1");

        Self {
            body: VecDeque::from(segments),
            heading,
        }
    }

    /// Sets the heading unconditionally. Reversal filtering happens upstream.
    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    /// Appends one segment at the off-board sentinel.
    pub fn grow(&mut self) {
        self.body.push_back(Position::SENTINEL);
    }

    /// Moves one cell along the heading without clamping to the board.
    pub fn advance(&mut self, grid: &Grid) {
        let next_head = self.next_head_position(grid);

        self.body.push_front(next_head);
        let _ = self.body.pop_back();
    }

    /// Returns where the head lands on the next step.
    #[must_use]
    pub fn next_head_position(&self, grid: &Grid) -> Position {
        let step = grid.step_px();
        let (dx, dy) = self.heading.delta();
        let head = self.head();

        Position {
            x: head.x + dx * step,
            y: head.y + dy * step,
        }
    }

    #[must_use]
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Returns the segment at `index`, 0 being the head.
    #[must_use]
    pub fn segment(&self, index: usize) -> Option<Position> {
        self.body.get(index).copied()
    }

    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.body.contains(&position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    #[must_use]
    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = &Position> + ExactSizeIterator {
        self.body.iter()
    }
}

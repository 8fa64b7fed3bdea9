use rand::Rng;

/// Board position in pixel coordinates.
///
/// Live positions are multiples of the grid cell size. Positions outside the
/// board are legal transient values; they signal a wall collision.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Off-board marker used for freshly grown tail segments.
    pub const SENTINEL: Self = Self { x: -1, y: -1 };

    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Largest board edge, in pixels, that a [`Position`] can express.
pub const MAX_BOARD_SPAN_PX: u32 = i32::MAX.unsigned_abs();

/// Fixed-size board measured in cells of `cell_size` pixels.
///
/// Both pixel spans fit in `i32`, so every on-board position and the first
/// position past each edge are representable.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Grid {
    cell_size: u32,
    width: u32,
    height: u32,
}

impl Grid {
    /// Creates a grid of `width` x `height` cells.
    ///
    /// Panics when any dimension is zero or a pixel span exceeds
    /// [`MAX_BOARD_SPAN_PX`]; configuration validation rejects those values
    /// before they reach the core.
    #[must_use]
    pub fn new(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "grid cell size must be positive");
        assert!(
            width > 0 && height > 0,
            "grid must contain at least one cell ({width}x{height})"
        );

        let span = |cells: u32| u64::from(cells) * u64::from(cell_size);
        assert!(
            span(width) <= u64::from(MAX_BOARD_SPAN_PX)
                && span(height) <= u64::from(MAX_BOARD_SPAN_PX),
            "grid of {width}x{height} cells at {cell_size} px does not fit pixel coordinates"
        );

        Self {
            cell_size,
            width,
            height,
        }
    }

    /// Derives the cell grid from board pixel dimensions, dropping any
    /// partial trailing cell.
    #[must_use]
    pub fn from_pixels(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "grid cell size must be positive");
        Self::new(width_px / cell_size, height_px / cell_size, cell_size)
    }

    #[must_use]
    pub fn cell_size(self) -> u32 {
        self.cell_size
    }

    /// One cell step in pixel coordinates.
    #[must_use]
    pub fn step_px(self) -> i32 {
        to_coordinate(u64::from(self.cell_size))
    }

    /// Width in cells.
    #[must_use]
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[must_use]
    pub fn height(self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn width_px(self) -> i64 {
        i64::from(self.width) * i64::from(self.cell_size)
    }

    #[must_use]
    pub fn height_px(self) -> i64 {
        i64::from(self.height) * i64::from(self.cell_size)
    }

    #[must_use]
    pub fn total_cells(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true when `position` lies on the board.
    #[must_use]
    pub fn contains(self, position: Position) -> bool {
        let x = i64::from(position.x);
        let y = i64::from(position.y);
        x >= 0 && y >= 0 && x < self.width_px() && y < self.height_px()
    }

    /// Converts a pixel position to `(column, row)` cell indices.
    #[must_use]
    pub fn cell_of(self, position: Position) -> Option<(u32, u32)> {
        if !self.contains(position) {
            return None;
        }

        let column = u32::try_from(position.x).ok()? / self.cell_size;
        let row = u32::try_from(position.y).ok()? / self.cell_size;
        Some((column, row))
    }

    /// Returns the pixel position of cell `(column, row)`.
    ///
    /// Panics when the cell is off the grid.
    #[must_use]
    pub fn position_of(self, column: u32, row: u32) -> Position {
        assert!(
            column < self.width && row < self.height,
            "cell ({column}, {row}) is off the {}x{} grid",
            self.width,
            self.height
        );

        let cell_size = u64::from(self.cell_size);
        Position {
            x: to_coordinate(u64::from(column) * cell_size),
            y: to_coordinate(u64::from(row) * cell_size),
        }
    }

    /// Draws a uniformly random cell, each axis independently.
    #[must_use]
    pub fn random_cell<R: Rng + ?Sized>(self, rng: &mut R) -> Position {
        let column = rng.gen_range(0..self.width);
        let row = rng.gen_range(0..self.height);
        self.position_of(column, row)
    }
}

/// Pixel offsets inside a grid never exceed [`MAX_BOARD_SPAN_PX`].
fn to_coordinate(px: u64) -> i32 {
    i32::try_from(px).unwrap_or(i32::MAX)
}

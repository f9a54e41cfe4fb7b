use rand::{SeedableRng, rngs::StdRng};

mod recur_backtrack;

use crate::maze::{Cell, DirectionSource, Grid};
use recur_backtrack::recursive_backtrack;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Rejected construction parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeGenerationError {
    EvenSize { size: u16 },
    EvenStart { x: u16, y: u16 },
    StartOutOfBounds { x: u16, y: u16, size: u16 },
}

impl std::fmt::Display for MazeGenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MazeGenerationError::EvenSize { .. } => write!(f, "size must be odd."),
            MazeGenerationError::EvenStart { .. } => {
                write!(f, "start coordinates must be odd.")
            }
            MazeGenerationError::StartOutOfBounds { .. } => {
                write!(f, "start coordinate out of bounds.")
            }
        }
    }
}

impl std::error::Error for MazeGenerationError {}

/// A perfect maze carved by recursive backtracking.
///
/// The grid is fully carved by the time any constructor returns and is never mutated again.
#[derive(Debug, Clone)]
pub struct MazeGenerator {
    grid: Grid,
    start: (u16, u16),
    passages: usize,
}

impl Default for MazeGenerator {
    /// A 35x35 maze carved from `(1, 1)`.
    fn default() -> Self {
        // Known-valid parameters, no validation needed
        MazeGenerator::generate(
            Self::DEFAULT_SIZE,
            Self::DEFAULT_START,
            &mut get_rng(None),
        )
    }
}

impl MazeGenerator {
    pub const DEFAULT_SIZE: u16 = 35;
    pub const DEFAULT_START: (u16, u16) = (1, 1);

    /// Carves a `size` x `size` maze from `(start_x, start_y)` with an OS-seeded random
    /// source.
    pub fn new(size: u16, start_x: u16, start_y: u16) -> Result<Self, MazeGenerationError> {
        Self::with_source(size, start_x, start_y, &mut get_rng(None))
    }

    /// Like [`MazeGenerator::new`], but reproducible: the same seed always carves the same
    /// maze.
    pub fn with_seed(
        size: u16,
        start_x: u16,
        start_y: u16,
        seed: u64,
    ) -> Result<Self, MazeGenerationError> {
        Self::with_source(size, start_x, start_y, &mut get_rng(Some(seed)))
    }

    /// Carves with direction orders drawn from `source`.
    pub fn with_source<S: DirectionSource + ?Sized>(
        size: u16,
        start_x: u16,
        start_y: u16,
        source: &mut S,
    ) -> Result<Self, MazeGenerationError> {
        Self::validate(size, start_x, start_y)?;
        Ok(Self::generate(size, (start_x, start_y), source))
    }

    /// Checks the construction parameters, in order: odd size, odd start, start in bounds.
    pub fn validate(size: u16, start_x: u16, start_y: u16) -> Result<(), MazeGenerationError> {
        if size % 2 == 0 {
            return Err(MazeGenerationError::EvenSize { size });
        }
        if start_x % 2 == 0 || start_y % 2 == 0 {
            return Err(MazeGenerationError::EvenStart {
                x: start_x,
                y: start_y,
            });
        }
        // size is odd here, so size - 1 cannot underflow
        if start_x > size - 1 || start_y > size - 1 {
            return Err(MazeGenerationError::StartOutOfBounds {
                x: start_x,
                y: start_y,
                size,
            });
        }
        Ok(())
    }

    fn generate<S: DirectionSource + ?Sized>(
        size: u16,
        start: (u16, u16),
        source: &mut S,
    ) -> Self {
        tracing::debug!("[generator] carving {}x{} maze from {:?}", size, size, start);
        let mut grid = Grid::new(size);
        let passages = recursive_backtrack(&mut grid, start, source);
        tracing::debug!(
            "[generator] finished with {} passages, {} open cells",
            passages,
            grid.count(Cell::Open)
        );
        MazeGenerator {
            grid,
            start,
            passages,
        }
    }

    /// The carved grid. Test cells against [`Cell::Wall`] to find passable space.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> u16 {
        self.grid.size()
    }

    pub fn start(&self) -> (u16, u16) {
        self.start
    }

    /// Number of wall segments opened to connect neighboring rooms.
    pub fn passages(&self) -> usize {
        self.passages
    }

    /// Text dump of the maze, highest row first, walls as `[#]` and everything else blank.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for MazeGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.rows().rev() {
            for cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

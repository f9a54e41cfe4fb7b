pub mod cell;
pub mod grid;

use rand::{Rng, seq::SliceRandom};

pub use cell::Cell;
pub use grid::Grid;

/// One of the four orthogonal carving steps.
///
/// Only the set of steps matters for correctness; which compass name maps to which sign is
/// a labelling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// `(dx, dy)` for each direction, indexed by discriminant. One step spans a room and the
/// wall behind it.
const STEPS: [(i16, i16); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Coordinate offset of this direction.
    pub fn step(self) -> (i16, i16) {
        STEPS[self as usize]
    }

    /// The position one step away from `coord`, or `None` if it would leave the `u16` range.
    pub fn apply(self, coord: (u16, u16)) -> Option<(u16, u16)> {
        let (dx, dy) = self.step();
        Some((
            coord.0.checked_add_signed(dx)?,
            coord.1.checked_add_signed(dy)?,
        ))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::North => write!(f, "North"),
            Direction::South => write!(f, "South"),
            Direction::East => write!(f, "East"),
            Direction::West => write!(f, "West"),
        }
    }
}

/// Supplies the order in which directions are tried at each carved position.
///
/// Every call must return a permutation of [`Direction::ALL`]. Any random number generator
/// is a source; tests can script the orders to make a carve fully predictable.
pub trait DirectionSource {
    fn order(&mut self) -> [Direction; 4];
}

impl<R: Rng + ?Sized> DirectionSource for R {
    fn order(&mut self) -> [Direction; 4] {
        let mut directions = Direction::ALL;
        directions.shuffle(self);
        directions
    }
}

/// Whether carving may advance into `coord`: strictly inside the border and not yet visited.
pub fn is_carve_target(grid: &Grid, coord: (u16, u16)) -> bool {
    grid.is_interior(coord) && grid[coord] == Cell::Unvisited
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_steps_have_magnitude_two() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.step();
            assert_eq!(dx.abs() + dy.abs(), 2, "{direction} should move by two");
            assert!(dx == 0 || dy == 0, "{direction} should be orthogonal");
        }
    }

    #[test]
    fn test_apply() {
        assert_eq!(Direction::North.apply((3, 3)), Some((3, 5)));
        assert_eq!(Direction::South.apply((3, 3)), Some((3, 1)));
        assert_eq!(Direction::East.apply((3, 3)), Some((5, 3)));
        assert_eq!(Direction::West.apply((3, 3)), Some((1, 3)));
        // Underflow is reported rather than wrapped
        assert_eq!(Direction::West.apply((1, 1)), None);
        assert_eq!(Direction::North.apply((1, u16::MAX)), None);
    }

    #[test]
    fn test_rng_order_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut order = rng.order().to_vec();
            order.sort_by_key(|&d| d as usize);
            assert_eq!(order, Direction::ALL.to_vec());
        }
    }

    #[test]
    fn test_rng_order_varies() {
        let mut rng = StdRng::seed_from_u64(42);
        let first = rng.order();
        assert!((0..50).any(|_| rng.order() != first));
    }

    #[test]
    fn test_carve_targets() {
        let mut grid = Grid::new(7);
        assert!(is_carve_target(&grid, (3, 5)));
        // Border and wall lattice are never targets
        assert!(!is_carve_target(&grid, (3, 6)));
        assert!(!is_carve_target(&grid, (0, 0)));
        assert!(!is_carve_target(&grid, (2, 3)));

        grid.open_segment((1, 1), (1, 3));
        assert!(!is_carve_target(&grid, (1, 3)));
        assert!(is_carve_target(&grid, (3, 1)));
    }
}

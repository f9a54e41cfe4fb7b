use crate::maze::{Cell, Direction, DirectionSource, Grid, is_carve_target};

/// A position on the carving path with the directions it still has to try.
struct Frame {
    at: (u16, u16),
    order: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new<S: DirectionSource + ?Sized>(at: (u16, u16), source: &mut S) -> Self {
        Frame {
            at,
            order: source.order(),
            next: 0,
        }
    }
}

/// Carves a perfect maze into `grid` by randomized depth-first search from `start`.
///
/// Each position draws a fresh direction order from `source` when it is first entered and
/// tries the directions in that order, descending into every unvisited room it finds before
/// moving on to the next direction. Returns the number of connecting passages carved.
pub fn recursive_backtrack<S: DirectionSource + ?Sized>(
    grid: &mut Grid,
    start: (u16, u16),
    source: &mut S,
) -> usize {
    grid.set(start, Cell::Open);

    let mut passages = 0;
    // The stack holds the current path from the start; its depth is bounded by the room count
    let mut stack = vec![Frame::new(start, source)];

    while let Some(frame) = stack.last_mut() {
        let Some(&direction) = frame.order.get(frame.next) else {
            // Every direction tried, backtrack
            stack.pop();
            continue;
        };
        frame.next += 1;
        let at = frame.at;

        let Some(neighbor) = direction
            .apply(at)
            .filter(|&coord| is_carve_target(grid, coord))
        else {
            continue;
        };

        // Clears the wall between the rooms as well as the neighbor room itself
        grid.open_segment(at, neighbor);
        passages += 1;
        tracing::trace!("[walk] carved {} from {:?} to {:?}", direction, at, neighbor);

        stack.push(Frame::new(neighbor, source));
    }

    passages
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    /// Replays the same direction order at every position.
    struct Fixed([Direction; 4]);

    impl DirectionSource for Fixed {
        fn order(&mut self) -> [Direction; 4] {
            self.0
        }
    }

    #[test]
    fn test_fixed_order_carve() {
        use Direction::*;
        let mut grid = Grid::new(5);
        let mut source = Fixed([North, South, East, West]);
        let passages = recursive_backtrack(&mut grid, (1, 1), &mut source);
        assert_eq!(passages, 3);

        // North from (1, 1), then east along the top, then south back down
        for coord in [(1, 1), (1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (3, 1)] {
            assert_eq!(grid[coord], Cell::Open, "expected {coord:?} to be open");
        }
        assert_eq!(grid[(2, 1)], Cell::Wall);
        assert_eq!(grid[(2, 2)], Cell::Wall);
        assert_eq!(grid.count(Cell::Unvisited), 0);
    }

    #[test]
    fn test_isolated_start_is_opened() {
        let mut grid = Grid::new(3);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(recursive_backtrack(&mut grid, (1, 1), &mut rng), 0);
        assert_eq!(grid[(1, 1)], Cell::Open);
        assert_eq!(grid.count(Cell::Open), 1);
    }

    #[test]
    fn test_every_room_is_visited_once() {
        let mut grid = Grid::new(21);
        let rooms = grid.count(Cell::Unvisited);
        let mut rng = StdRng::seed_from_u64(3);
        let passages = recursive_backtrack(&mut grid, (9, 11), &mut rng);
        assert_eq!(grid.count(Cell::Unvisited), 0);
        // A spanning tree over the rooms has one fewer edge than it has rooms
        assert_eq!(passages, rooms - 1);
        assert_eq!(grid.count(Cell::Open), rooms + passages);
    }

    #[test]
    fn test_deep_carve_does_not_overflow_stack() {
        // Well past the depth a call-recursive walk would survive on a default thread stack
        let mut grid = Grid::new(1001);
        let mut rng = StdRng::seed_from_u64(11);
        let passages = recursive_backtrack(&mut grid, (1, 1), &mut rng);
        assert_eq!(passages, 500 * 500 - 1);
    }
}

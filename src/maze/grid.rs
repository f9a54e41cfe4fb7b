use super::cell::Cell;

/// Square lattice grid. Rooms sit at odd/odd positions, walls at every position with an
/// even coordinate, so one buffer holds both the rooms and the walls between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    size: u16,
}

impl Grid {
    /// Allocates a `size` x `size` grid with walls on the even lattice and unvisited rooms
    /// everywhere else.
    pub(crate) fn new(size: u16) -> Self {
        let data = (0..size)
            .flat_map(|y| (0..size).map(move |x| (x, y)))
            .map(|(x, y)| {
                if x % 2 == 0 || y % 2 == 0 {
                    Cell::Wall
                } else {
                    Cell::Unvisited
                }
            })
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid { data, size }
    }

    /// Number of rows, which is also the number of columns.
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Checks if the coordinate lies inside the grid.
    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.size && coord.1 < self.size
    }

    /// Checks if the coordinate lies strictly inside the outer border.
    pub fn is_interior(&self, coord: (u16, u16)) -> bool {
        let (x, y) = coord;
        let last = self.size.saturating_sub(1);
        x > 0 && y > 0 && x < last && y < last
    }

    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.size - 1 || y == self.size - 1
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.is_in_bounds((x, y)).then(|| self.data[self.ravel_index(x, y)])
    }

    /// Checks for a wall. Out of bounds positions count as walls.
    pub fn is_wall(&self, x: u16, y: u16) -> bool {
        self.get(x, y).is_none_or(|cell| cell == Cell::Wall)
    }

    /// All cells in row-major order, row 0 first.
    pub fn cells(&self) -> &[Cell] {
        &self.data
    }

    /// Rows as slices, row 0 first.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Cell]> + ExactSizeIterator {
        self.data.chunks_exact(self.size.max(1) as usize)
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since size is u16 (assuming usize is at least 32 bits)
        y as usize * self.size as usize + x as usize
    }

    pub(crate) fn set(&mut self, coord: (u16, u16), cell: Cell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Opens every cell on the straight segment between `from` and `to`, both included.
    ///
    /// # Panics
    /// If the two coordinates share neither a row nor a column.
    pub(crate) fn open_segment(&mut self, from: (u16, u16), to: (u16, u16)) {
        if from.0 == to.0 {
            let (start, end) = (from.1.min(to.1), from.1.max(to.1));
            (start..=end).for_each(|y| self.set((from.0, y), Cell::Open));
        } else if from.1 == to.1 {
            let (start, end) = (from.0.min(to.0), from.0.max(to.0));
            (start..=end).for_each(|x| self.set((x, from.1), Cell::Open));
        } else {
            panic!("Cannot open a segment between {:?} and {:?}", from, to);
        }
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

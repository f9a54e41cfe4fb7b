use std::fmt;

/// State of a single grid position.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Permanent, non-traversable lattice wall.
    #[default]
    Wall,
    /// A room (odd/odd position) not yet reached by carving.
    Unvisited,
    /// Carved, traversable space: a room or the wall segment joining two rooms.
    Open,
}

impl Cell {
    /// The width of each cell when rendered, in character widths.
    pub const WIDTH: u16 = 3;

    const WALL_GLYPH: &'static str = "[#]";
    const BLANK_GLYPH: &'static str = "   ";

    /// Whether the cell is anything other than a wall.
    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }

    /// The plain-text glyph for this cell.
    pub fn glyph(self) -> &'static str {
        match self {
            Cell::Wall => Self::WALL_GLYPH,
            Cell::Unvisited | Cell::Open => Self::BLANK_GLYPH,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let glyph = self.glyph();

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                glyph.width(),
                Cell::WIDTH as usize,
                "Each cell must occupy exactly three character widths."
            );
        }

        f.write_str(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_walls_are_impassable() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Unvisited.is_passable());
        assert!(Cell::Open.is_passable());
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Cell::Wall.to_string(), "[#]");
        assert_eq!(Cell::Open.to_string(), "   ");
        // Unvisited rooms render the same as open ones
        assert_eq!(Cell::Unvisited.to_string(), Cell::Open.to_string());
    }
}

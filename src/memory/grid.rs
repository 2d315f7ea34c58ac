//! Program grid storage
//!
//! The grid keeps the loaded program as a list of rows of characters. Rows can
//! have different lengths and every cell that was never written reads back as
//! [`BLANK`].
//!
//! # Addressing
//!
//! Coordinates inside `0..MAX_DENSE_EXTENT` on both axes live in the dense row
//! list, which grows on demand when `p` writes past its current extent. Any
//! other coordinate (negative, or absurdly far away) is kept in a sparse side
//! table so that self-modifying programs can still store and read it back.
//! Sparse cells never count toward the extents used for wrapping.

use super::vector::Vector;
use rustc_hash::FxHashMap;
use std::fmt;

/// The background cell
pub const BLANK: char = ' ';

/// Largest row count / row length the dense region grows to
pub const MAX_DENSE_EXTENT: i64 = 1 << 16;

#[derive(Debug, Clone, Default)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    sparse: FxHashMap<Vector, char>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            rows: Vec::new(),
            sparse: FxHashMap::default(),
        }
    }

    /// Build a grid from program rows
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut grid = Grid::new();
        grid.replace(lines);
        grid
    }

    /// Replace every cell with the given rows
    pub fn replace<S: AsRef<str>>(&mut self, lines: &[S]) {
        self.rows = lines
            .iter()
            .map(|line| line.as_ref().chars().collect())
            .collect();
        self.sparse.clear();
    }

    /// Read a cell, falling back to [`BLANK`]
    pub fn get(&self, position: Vector) -> char {
        match Self::dense_index(position) {
            Some((x, y)) => self
                .rows
                .get(y)
                .and_then(|row| row.get(x))
                .copied()
                .unwrap_or(BLANK),
            None => self.sparse.get(&position).copied().unwrap_or(BLANK),
        }
    }

    /// Write a cell, growing the dense region as needed
    pub fn set(&mut self, position: Vector, value: char) {
        let Some((x, y)) = Self::dense_index(position) else {
            self.sparse.insert(position, value);
            return;
        };

        if y >= self.rows.len() {
            self.rows.resize_with(y + 1, Vec::new);
        }
        let row = &mut self.rows[y];
        if x >= row.len() {
            row.resize(x + 1, BLANK);
        }
        row[x] = value;
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of row `y`, 0 for rows that do not exist
    pub fn width(&self, y: i64) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|y| self.rows.get(y))
            .map_or(0, Vec::len)
    }

    /// Iterate over the dense rows
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.rows.iter().map(Vec::as_slice)
    }

    fn dense_index(position: Vector) -> Option<(usize, usize)> {
        let in_range = |c: i64| (0..MAX_DENSE_EXTENT).contains(&c);
        if in_range(position.x) && in_range(position.y) {
            Some((position.x as usize, position.y as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_cells_are_blank() {
        let grid = Grid::from_lines(&["ab", "c"]);

        assert_eq!(grid.get(Vector::new(0, 0)), 'a');
        assert_eq!(grid.get(Vector::new(1, 0)), 'b');
        assert_eq!(grid.get(Vector::new(1, 1)), BLANK); // past the short row
        assert_eq!(grid.get(Vector::new(0, 5)), BLANK); // missing row
        assert_eq!(grid.get(Vector::new(-1, 0)), BLANK);
        assert_eq!(grid.get(Vector::new(0, -3)), BLANK);
    }

    #[test]
    fn test_ragged_rows() {
        let grid = Grid::from_lines(&["abc", "", "de"]);

        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(0), 3);
        assert_eq!(grid.width(1), 0);
        assert_eq!(grid.width(2), 2);
        assert_eq!(grid.width(3), 0);
        assert_eq!(grid.width(-1), 0);
    }

    #[test]
    fn test_set_pads_row_with_blanks() {
        let mut grid = Grid::from_lines(&["ab"]);
        grid.set(Vector::new(4, 0), 'x');

        assert_eq!(grid.width(0), 5);
        assert_eq!(grid.to_string(), "ab  x");
    }

    #[test]
    fn test_set_adds_rows() {
        let mut grid = Grid::from_lines(&["ab"]);
        grid.set(Vector::new(1, 3), 'z');

        assert_eq!(grid.height(), 4);
        assert_eq!(grid.width(1), 0);
        assert_eq!(grid.width(2), 0);
        assert_eq!(grid.width(3), 2);
        assert_eq!(grid.get(Vector::new(1, 3)), 'z');
        assert_eq!(grid.get(Vector::new(0, 3)), BLANK);
    }

    #[test]
    fn test_sparse_cells_do_not_change_extent() {
        let mut grid = Grid::from_lines(&["ab"]);
        grid.set(Vector::new(-2, -7), 'q');
        grid.set(Vector::new(MAX_DENSE_EXTENT, 0), 'r');

        assert_eq!(grid.get(Vector::new(-2, -7)), 'q');
        assert_eq!(grid.get(Vector::new(MAX_DENSE_EXTENT, 0)), 'r');
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.width(0), 2);
    }

    #[test]
    fn test_replace_clears_previous_program() {
        let mut grid = Grid::from_lines(&["abc", "def"]);
        grid.set(Vector::new(-1, -1), 'q');
        grid.replace(&["x"]);

        assert_eq!(grid.height(), 1);
        assert_eq!(grid.get(Vector::new(1, 1)), BLANK);
        assert_eq!(grid.get(Vector::new(-1, -1)), BLANK);
    }
}

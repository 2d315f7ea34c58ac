//! Memory unit
//!
//! This module owns everything the running program can address:
//! - [`grid`]: the 2D instruction grid, including cells written by `p`
//! - [`output`]: the append-only buffer filled by `.` and `,`
//! - [`vector`]: signed grid coordinates
//!
//! # Extents
//!
//! The controller wraps the instruction pointer against the grid's current
//! extents, read through the [`Bounds`] view:
//!
//! ```text
//! vertical    →  number of rows
//! horizontal  →  length of the row the pointer is on
//! ```
//!
//! Both are recomputed on every move, so a program that grows its own grid
//! with `p` also grows the torus it runs on.

pub mod grid;
pub mod output;
pub mod vector;

use grid::Grid;
use output::OutputBuffer;
use vector::Vector;

/// Read-only view of the grid dimensions used for wrapping
pub trait Bounds {
    /// Number of rows
    fn height(&self) -> usize;

    /// Length of row `y` (0 when the row does not exist)
    fn width(&self, y: i64) -> usize;
}

/// Storage operations the interpreter needs from a memory unit
pub trait Storage: Bounds {
    /// Replace the grid with the given rows; output is kept
    fn load_program(&mut self, lines: &[&str]);

    /// Character at `position`, a blank if it was never set
    fn cell(&self, position: Vector) -> char;

    /// Overwrite the character at `position`
    fn set(&mut self, position: Vector, value: char);

    /// Append text to the output buffer
    fn write(&mut self, text: &str);

    /// Everything written so far
    fn output(&self) -> &str;
}

/// Default memory unit: a [`Grid`] plus an [`OutputBuffer`]
#[derive(Debug, Clone, Default)]
pub struct Memory {
    grid: Grid,
    terminal: OutputBuffer,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            grid: Grid::new(),
            terminal: OutputBuffer::new(),
        }
    }

    /// The program grid (for inspection after a run)
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The output buffer
    pub fn terminal(&self) -> &OutputBuffer {
        &self.terminal
    }
}

impl Bounds for Memory {
    fn height(&self) -> usize {
        self.grid.height()
    }

    fn width(&self, y: i64) -> usize {
        self.grid.width(y)
    }
}

impl Storage for Memory {
    fn load_program(&mut self, lines: &[&str]) {
        self.grid.replace(lines);
    }

    fn cell(&self, position: Vector) -> char {
        self.grid.get(position)
    }

    fn set(&mut self, position: Vector, value: char) {
        self.grid.set(position, value);
    }

    fn write(&mut self, text: &str) {
        self.terminal.print(text);
    }

    fn output(&self) -> &str {
        self.terminal.as_str()
    }
}

//! Grid coordinates
//!
//! A [`Vector`] is both a cell address (x = column, y = row) and a unit step
//! along one of the four cardinal directions.

use std::fmt;
use std::ops::Add;

/// Signed 2D coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vector {
    pub x: i64,
    pub y: i64,
}

impl Vector {
    pub const ORIGIN: Vector = Vector { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Vector { x, y }
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(
            self.x.wrapping_add(other.x),
            self.y.wrapping_add(other.y),
        )
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

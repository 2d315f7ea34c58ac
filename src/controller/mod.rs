//! Instruction pointer controller
//!
//! The controller owns the pointer's position and direction and implements
//! every opcode that steers it: the arrows, `?`, the two branches and `#`.
//!
//! # Wrapping
//!
//! Movement is toroidal per axis. A vertical step wraps against the number of
//! rows; a horizontal step wraps against the length of the row the pointer is
//! on. Extents come from a [`Bounds`] view passed in on every move, so they
//! always reflect the grid as it is now:
//!
//! ```text
//! "abc"  east from x = 2   →  x = 0
//!        west from x = 0   →  x = 2
//! ```
//!
//! # Randomness
//!
//! `?` draws from the controller's own random source. [`Controller::seeded`]
//! gives a reproducible sequence; [`Controller::with_rng`] accepts any
//! [`rand::Rng`].

pub mod direction;

pub use direction::Direction;

use crate::alu::Value;
use crate::memory::vector::Vector;
use crate::memory::Bounds;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Pointer operations the interpreter needs from a controller
pub trait Navigator {
    fn position(&self) -> Vector;

    fn direction(&self) -> Direction;

    fn set_direction(&mut self, direction: Direction);

    /// Step once along the current direction, wrapping at the grid edges
    fn advance(&mut self, bounds: &dyn Bounds);

    /// `?`: pick a direction uniformly at random
    fn randomize(&mut self);

    /// Back to the origin, heading east
    fn reset(&mut self);

    /// `_`: west on zero, east otherwise
    fn branch_horizontal(&mut self, value: Value) {
        let direction = if value == 0 {
            Direction::West
        } else {
            Direction::East
        };
        self.set_direction(direction);
    }

    /// `|`: north on zero, south otherwise
    fn branch_vertical(&mut self, value: Value) {
        let direction = if value == 0 {
            Direction::North
        } else {
            Direction::South
        };
        self.set_direction(direction);
    }

    /// `#`: an extra step on top of the regular one, skipping a cell
    fn trampoline(&mut self, bounds: &dyn Bounds) {
        self.advance(bounds);
    }
}

/// Default controller, generic over its random source
#[derive(Debug, Clone)]
pub struct Controller<R = StdRng> {
    position: Vector,
    direction: Direction,
    rng: R,
}

impl Controller<StdRng> {
    /// Controller seeded from the operating system
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Controller with a reproducible `?` sequence
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for Controller<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Controller<R> {
    pub fn with_rng(rng: R) -> Self {
        Controller {
            position: Vector::ORIGIN,
            direction: Direction::East,
            rng,
        }
    }

    /// Place the pointer somewhere else without moving through the grid
    pub fn jump_to(&mut self, position: Vector) {
        self.position = position;
    }
}

impl<R: Rng> Navigator for Controller<R> {
    fn position(&self) -> Vector {
        self.position
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    fn advance(&mut self, bounds: &dyn Bounds) {
        let next = self.position + self.direction.delta();
        self.position = if self.direction.is_vertical() {
            Vector::new(next.x, wrap(next.y, bounds.height()))
        } else {
            Vector::new(wrap(next.x, bounds.width(next.y)), next.y)
        };
    }

    fn randomize(&mut self) {
        self.direction = self.rng.gen();
    }

    fn reset(&mut self) {
        self.position = Vector::ORIGIN;
        self.direction = Direction::East;
    }
}

/// Fold `coordinate` into `0..extent`; an empty axis pins it to 0
fn wrap(coordinate: i64, extent: usize) -> i64 {
    match i64::try_from(extent) {
        Ok(extent) if extent > 0 => coordinate.rem_euclid(extent),
        _ => 0,
    }
}

use crate::memory::vector::Vector;
use rand::distributions::{Distribution, Standard};
use rand::Rng;

/// One of the four directions the instruction pointer can travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    North,
    South,
    #[default]
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Map an arrow opcode (`^ v > <`) to its direction
    pub fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::North),
            'v' => Some(Direction::South),
            '>' => Some(Direction::East),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn arrow(self) -> char {
        match self {
            Direction::North => '^',
            Direction::South => 'v',
            Direction::East => '>',
            Direction::West => '<',
        }
    }

    /// Unit step; rows grow downward
    pub fn delta(self) -> Vector {
        match self {
            Direction::North => Vector::new(0, -1),
            Direction::South => Vector::new(0, 1),
            Direction::East => Vector::new(1, 0),
            Direction::West => Vector::new(-1, 0),
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::ALL[rng.gen_range(0..Direction::ALL.len())]
    }
}

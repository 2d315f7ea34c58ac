//! Opcode decoding
//!
//! Every grid character decodes to exactly one [`Opcode`]. Characters without a
//! meaning decode to [`Opcode::Nop`], so decoding never fails and the engine
//! can dispatch with a single exhaustive `match`.

use super::constants::{HALT, STRING_DELIMITER};
use crate::alu::BinaryOp;
use crate::controller::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    /// `` ` ``
    Compare,
    /// `:`
    Duplicate,
    /// `\`
    Swap,
    /// `$`
    Discard,
    /// `0`-`9`
    Digit(u8),
    /// `+ - * / %`
    Binary(BinaryOp),
    /// `!`
    Not,
    /// `< > ^ v`
    Steer(Direction),
    /// `?`
    Random,
    /// `_`
    BranchHorizontal,
    /// `|`
    BranchVertical,
    /// `#`
    Trampoline,
    /// `.`
    PrintNumber,
    /// `,`
    PrintChar,
    /// `"`
    ToggleString,
    /// `p`
    Put,
    /// `g`
    Get,
    /// `@`
    Halt,
    /// Space and anything unrecognised
    Nop,
}

impl Opcode {
    pub fn decode(c: char) -> Self {
        if let Some(op) = BinaryOp::from_char(c) {
            return Opcode::Binary(op);
        }
        if let Some(direction) = Direction::from_arrow(c) {
            return Opcode::Steer(direction);
        }

        match c {
            '`' => Opcode::Compare,
            ':' => Opcode::Duplicate,
            '\\' => Opcode::Swap,
            '$' => Opcode::Discard,
            '0'..='9' => Opcode::Digit(c as u8 - b'0'),
            '!' => Opcode::Not,
            '?' => Opcode::Random,
            '_' => Opcode::BranchHorizontal,
            '|' => Opcode::BranchVertical,
            '#' => Opcode::Trampoline,
            '.' => Opcode::PrintNumber,
            ',' => Opcode::PrintChar,
            STRING_DELIMITER => Opcode::ToggleString,
            'p' => Opcode::Put,
            'g' => Opcode::Get,
            HALT => Opcode::Halt,
            _ => Opcode::Nop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_opcodes() {
        assert_eq!(Opcode::decode('`'), Opcode::Compare);
        assert_eq!(Opcode::decode(':'), Opcode::Duplicate);
        assert_eq!(Opcode::decode('\\'), Opcode::Swap);
        assert_eq!(Opcode::decode('$'), Opcode::Discard);
        assert_eq!(Opcode::decode('!'), Opcode::Not);
        assert_eq!(Opcode::decode('-'), Opcode::Binary(BinaryOp::Subtract));
        assert_eq!(Opcode::decode('%'), Opcode::Binary(BinaryOp::Modulo));
    }

    #[test]
    fn test_digits() {
        for (i, c) in ('0'..='9').enumerate() {
            assert_eq!(Opcode::decode(c), Opcode::Digit(i as u8));
        }
    }

    #[test]
    fn test_flow_opcodes() {
        assert_eq!(Opcode::decode('<'), Opcode::Steer(Direction::West));
        assert_eq!(Opcode::decode('>'), Opcode::Steer(Direction::East));
        assert_eq!(Opcode::decode('^'), Opcode::Steer(Direction::North));
        assert_eq!(Opcode::decode('v'), Opcode::Steer(Direction::South));
        assert_eq!(Opcode::decode('?'), Opcode::Random);
        assert_eq!(Opcode::decode('_'), Opcode::BranchHorizontal);
        assert_eq!(Opcode::decode('|'), Opcode::BranchVertical);
        assert_eq!(Opcode::decode('#'), Opcode::Trampoline);
        assert_eq!(Opcode::decode('@'), Opcode::Halt);
    }

    #[test]
    fn test_io_and_memory_opcodes() {
        assert_eq!(Opcode::decode('.'), Opcode::PrintNumber);
        assert_eq!(Opcode::decode(','), Opcode::PrintChar);
        assert_eq!(Opcode::decode('"'), Opcode::ToggleString);
        assert_eq!(Opcode::decode('p'), Opcode::Put);
        assert_eq!(Opcode::decode('g'), Opcode::Get);
    }

    #[test]
    fn test_unknown_is_nop() {
        for c in [' ', 'x', 'V', 'P', '&', '~', ';', 'é', '\t'] {
            assert_eq!(Opcode::decode(c), Opcode::Nop, "{:?}", c);
        }
    }
}

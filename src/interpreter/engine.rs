// Execution engine for the Befunge interpreter

use super::constants::HALT;
use super::errors::RuntimeError;
use super::opcode::Opcode;
use crate::alu::{Alu, Arithmetic, Value};
use crate::controller::{Controller, Navigator};
use crate::memory::vector::Vector;
use crate::memory::{Memory, Storage};

/// Dispatch mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Cells are executed as opcodes
    #[default]
    Normal,
    /// Cells are pushed as character codes until the next `"`
    String,
}

/// Result of a single [`Interpreter::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Halted,
}

/// The interpreter that wires an ALU, a controller and a memory unit together
pub struct Interpreter<A = Alu, C = Controller, M = Memory> {
    /// Value stack and arithmetic
    alu: A,

    /// Instruction pointer
    controller: C,

    /// Program grid and output buffer
    memory: M,

    /// Normal or string mode
    mode: Mode,

    /// Cells dispatched since the last load
    steps: u64,
}

impl Interpreter {
    /// Create an interpreter with the default units and an OS-seeded `?`
    pub fn new() -> Self {
        Self::with_parts(Alu::new(), Controller::new(), Memory::new())
    }

    /// Create an interpreter with the default units and a reproducible `?`
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(Alu::new(), Controller::seeded(seed), Memory::new())
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Arithmetic, C: Navigator, M: Storage> Interpreter<A, C, M> {
    /// Create an interpreter from caller-supplied units
    pub fn with_parts(alu: A, controller: C, memory: M) -> Self {
        Interpreter {
            alu,
            controller,
            memory,
            mode: Mode::Normal,
            steps: 0,
        }
    }

    /// Run the program until the pointer lands on `@`
    ///
    /// A program that never reaches `@` runs forever; use
    /// [`run_bounded`](Self::run_bounded) to cap it.
    pub fn run(&mut self, program: &str) {
        self.load(program);
        while self.step() == Status::Running {}
    }

    /// Run the program with a budget of `max_steps` dispatched cells
    ///
    /// Returns the number of steps taken on halt.
    pub fn run_bounded(&mut self, program: &str, max_steps: u64) -> Result<u64, RuntimeError> {
        self.load(program);
        while !self.is_halted() {
            if self.steps >= max_steps {
                return Err(RuntimeError::StepLimitExceeded {
                    limit: max_steps,
                    position: self.controller.position(),
                });
            }
            self.step();
        }
        Ok(self.steps)
    }

    /// Load a program and reset the stack, pointer and mode
    ///
    /// Trailing empty lines are dropped. Output already written is kept.
    pub fn load(&mut self, program: &str) {
        let mut lines: Vec<&str> = program.lines().collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        self.memory.load_program(&lines);
        self.alu.reset();
        self.controller.reset();
        self.mode = Mode::Normal;
        self.steps = 0;
    }

    /// Execute the cell under the pointer and advance
    ///
    /// Returns [`Status::Halted`] without moving when the cell is `@`.
    pub fn step(&mut self) -> Status {
        if self.is_halted() {
            return Status::Halted;
        }

        let cell = self.current_cell();
        self.dispatch(cell);
        self.controller.advance(&self.memory);
        self.steps += 1;
        Status::Running
    }

    /// Whether the pointer is on `@`
    pub fn is_halted(&self) -> bool {
        self.current_cell() == HALT
    }

    /// Everything written by `.` and `,` so far
    pub fn output(&self) -> &str {
        self.memory.output()
    }

    pub fn alu(&self) -> &A {
        &self.alu
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    fn current_cell(&self) -> char {
        self.memory.cell(self.controller.position())
    }

    fn dispatch(&mut self, cell: char) {
        let opcode = Opcode::decode(cell);

        if self.mode == Mode::String && opcode != Opcode::ToggleString {
            self.alu.push(char_code(cell));
            return;
        }

        match opcode {
            Opcode::Compare => self.alu.compare(),
            Opcode::Duplicate => self.alu.dupl(),
            Opcode::Swap => self.alu.swap(),
            Opcode::Discard => {
                self.alu.pop();
            }
            Opcode::Digit(d) => self.alu.digit(d),
            Opcode::Binary(op) => self.alu.binary(op),
            Opcode::Not => self.alu.not(),
            Opcode::Steer(direction) => self.controller.set_direction(direction),
            Opcode::Random => self.controller.randomize(),
            Opcode::BranchHorizontal => {
                let value = self.alu.pop();
                self.controller.branch_horizontal(value);
            }
            Opcode::BranchVertical => {
                let value = self.alu.pop();
                self.controller.branch_vertical(value);
            }
            Opcode::Trampoline => self.controller.trampoline(&self.memory),
            Opcode::PrintNumber => {
                let value = self.alu.pop();
                self.memory.write(&value.to_string());
            }
            Opcode::PrintChar => {
                let value = self.alu.pop();
                let mut buf = [0u8; 4];
                self.memory.write(char_from_value(value).encode_utf8(&mut buf));
            }
            Opcode::ToggleString => {
                self.mode = match self.mode {
                    Mode::Normal => Mode::String,
                    Mode::String => Mode::Normal,
                };
            }
            Opcode::Put => self.put(),
            Opcode::Get => self.get(),
            // `@` is caught by `step` before dispatch
            Opcode::Halt | Opcode::Nop => {}
        }
    }

    /// `p`: pop y, x, v and store v as a character at (x, y)
    fn put(&mut self) {
        let y = self.alu.pop();
        let x = self.alu.pop();
        let v = self.alu.pop();
        self.memory.set(Vector::new(x, y), char_from_value(v));
    }

    /// `g`: pop y, x and push the character code at (x, y)
    fn get(&mut self) {
        let y = self.alu.pop();
        let x = self.alu.pop();
        let cell = self.memory.cell(Vector::new(x, y));
        self.alu.push(char_code(cell));
    }
}

fn char_code(c: char) -> Value {
    Value::from(u32::from(c))
}

/// Values outside the Unicode scalar range become U+FFFD
fn char_from_value(value: Value) -> char {
    u32::try_from(value)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

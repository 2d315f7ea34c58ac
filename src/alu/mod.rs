//! Arithmetic/logic unit
//!
//! The ALU owns the value stack and implements every opcode that only touches
//! it: digit literals, arithmetic, comparison, logical not and the stack
//! shuffles.
//!
//! # Underflow
//!
//! Popping an empty stack is not an error; it yields 0. Every derived operation
//! inherits this, so `:` on an empty stack pushes two zeros and `+` on a stack
//! holding one value adds 0 to it.
//!
//! # Operand order
//!
//! Two-operand opcodes pop `b` first, then `a`, and push `a op b`:
//!
//! ```text
//! push a, push b, `  →  a > b
//! push a, push b, -  →  a - b
//! ```

pub mod binary;

pub use binary::BinaryOp;

/// Stack cell type
pub type Value = i64;

/// Stack operations the interpreter needs from an ALU
///
/// Only [`push`](Arithmetic::push), [`pop`](Arithmetic::pop) and
/// [`reset`](Arithmetic::reset) are required; the opcode operations are
/// expressed in terms of them.
pub trait Arithmetic {
    fn push(&mut self, value: Value);

    /// Remove the top value, 0 if the stack is empty
    fn pop(&mut self) -> Value;

    /// Drop every value
    fn reset(&mut self);

    /// `` ` ``: pop b, pop a, push 1 if a > b else 0
    fn compare(&mut self) {
        let b = self.pop();
        let a = self.pop();
        self.push(Value::from(a > b));
    }

    /// `:`
    fn dupl(&mut self) {
        let top = self.pop();
        self.push(top);
        self.push(top);
    }

    /// `\`
    fn swap(&mut self) {
        let b = self.pop();
        let a = self.pop();
        self.push(b);
        self.push(a);
    }

    /// `0`-`9`
    fn digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9, "not a decimal digit: {}", digit);
        self.push(Value::from(digit));
    }

    /// `+ - * / %`
    fn binary(&mut self, op: BinaryOp) {
        let b = self.pop();
        let a = self.pop();
        self.push(op.apply(a, b));
    }

    /// `!`
    fn not(&mut self) {
        let a = self.pop();
        self.push(Value::from(a == 0));
    }
}

/// Default ALU backed by a `Vec`
#[derive(Debug, Clone, Default)]
pub struct Alu {
    stack: Vec<Value>,
}

impl Alu {
    pub fn new() -> Self {
        Alu { stack: Vec::new() }
    }

    /// Stack contents, bottom first
    pub fn stack(&self) -> &[Value] {
        &self.stack
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Top value without popping
    pub fn peek(&self) -> Option<Value> {
        self.stack.last().copied()
    }
}

impl Arithmetic for Alu {
    fn push(&mut self, value: Value) {
        self.stack.push(value);
    }

    fn pop(&mut self) -> Value {
        self.stack.pop().unwrap_or(0)
    }

    fn reset(&mut self) {
        self.stack.clear();
    }
}

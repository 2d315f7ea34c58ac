//! # Introduction
//!
//! A Befunge interpreter. A program is a grid of single-character opcodes; an
//! instruction pointer walks the grid in one of four directions, executing each
//! cell it lands on against a shared integer stack.
//!
//! ## Execution pipeline
//!
//! ```text
//! Source → Memory (grid) → Interpreter → ALU / Controller / Memory → Output
//! ```
//!
//! 1. [`memory`] holds the program grid, its wrap extents and the output buffer.
//! 2. [`alu`] holds the value stack with arithmetic, comparison and stack shuffles.
//! 3. [`controller`] holds the instruction pointer: position, direction, movement.
//! 4. [`interpreter`] decodes cells into opcodes and drives the loop.
//!
//! Each unit sits behind a trait ([`alu::Arithmetic`],
//! [`controller::Navigator`], [`memory::Storage`]) so an interpreter can be
//! assembled from replacement parts with
//! [`Interpreter::with_parts`](interpreter::engine::Interpreter::with_parts).
//!
//! ## Semantics
//!
//! Popping an empty stack yields 0, blank and unknown cells are no-ops,
//! division and modulo by zero yield 0, and the grid is a torus that grows when
//! `p` writes past its edge.
//!
//! ```
//! use befunge::interpreter::engine::Interpreter;
//!
//! let mut interpreter = Interpreter::seeded(0);
//! interpreter.run("91+.@");
//! assert_eq!(interpreter.output(), "10");
//! ```

pub mod alu;
pub mod controller;
pub mod interpreter;
pub mod memory;

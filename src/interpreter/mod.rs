//! Befunge execution engine
//!
//! This module ties the three units together:
//! - [`engine`]: the [`Interpreter`](engine::Interpreter) and its
//!   fetch-dispatch-advance loop
//! - [`opcode`]: character to [`Opcode`](opcode::Opcode) decoding
//! - [`errors`]: runtime error types
//!
//! # Execution Model
//!
//! Each step reads the cell under the pointer. `@` halts the run before
//! anything else happens, even inside a string literal. Otherwise the cell is
//! dispatched (or pushed as a character code in string mode) and the pointer
//! advances one cell.

pub mod constants;
pub mod engine;
pub mod errors;
pub mod opcode;

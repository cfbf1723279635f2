//! SLANG execution engine: runs parsed counter-machine programs.
//!
//! The engine is a fetch-decode-execute loop over a [`Program`]:
//! - a register file where unset registers read as zero
//! - a program counter; reaching `program.len()` halts the run
//! - an optional step budget that kills runaway programs
//!
//! # Usage
//!
//! ```
//! use slang_vm::{run, Limits};
//!
//! let program = slang_parser::parse("\
//! [A] X1 <- X1 - 1
//! Y <- Y + 1
//! IF X1 != 0 GOTO A
//! ");
//!
//! let result = run(&program, &[4], Limits::unbounded()).unwrap();
//! assert_eq!(result, 4);
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use execute::Step;
pub use machine::{Limits, Registers, VM};

use slang_common::{Program, Value};

/// Execute a program and return the final value of `Y`.
///
/// `inputs` seed `X1, X2, …` by position; every other register starts at
/// zero.
///
/// # Errors
///
/// Returns [`RuntimeError`] if execution reaches a line that is not a
/// valid instruction, or if the step budget in `limits` runs out first.
pub fn run(program: &Program, inputs: &[Value], limits: Limits) -> Result<Value, RuntimeError> {
    let mut vm = VM::new(program, inputs, limits);
    vm.execute()
}

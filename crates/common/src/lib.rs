//! SLANG common types.
//!
//! This crate provides the data structures shared by the parser and the
//! execution engine:
//!
//! - [`Register`]: a validated register name (`X1`, `Y`, `Z3`, …)
//! - [`Label`]: a validated jump label
//! - [`Instruction`]: the three instruction forms
//! - [`Line`]: one instruction slot, keeping its source text
//! - [`Program`]: instruction slots plus the label index
//! - [`Value`]: the non-negative integer held by a register
//! - [`NameError`]: errors from validating names

pub mod error;
pub mod instruction;
pub mod label;
pub mod program;
pub mod register;
pub mod value;

// Re-export commonly used types at the crate root.
pub use error::NameError;
pub use instruction::{Instruction, Line};
pub use label::Label;
pub use program::Program;
pub use register::Register;
pub use value::Value;

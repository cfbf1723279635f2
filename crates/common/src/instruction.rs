//! The three SLANG instruction forms.
//!
//! ```text
//! R <- R + 1            Increment
//! R <- R - 1            DecrementFloor
//! IF R != 0 GOTO L      BranchIfNonZero
//! ```
//!
//! The `Display` impl produces the canonical spelling above, which the
//! parser accepts back unchanged.

use std::fmt;

use crate::label::Label;
use crate::register::Register;

/// A decoded SLANG instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `R <- R + 1`
    Increment(Register),
    /// `R <- R - 1`, never taking `R` below zero.
    DecrementFloor(Register),
    /// `IF R != 0 GOTO L`
    BranchIfNonZero(Register, Label),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Increment(reg) => write!(f, "{reg} <- {reg} + 1"),
            Instruction::DecrementFloor(reg) => write!(f, "{reg} <- {reg} - 1"),
            Instruction::BranchIfNonZero(reg, label) => write!(f, "IF {reg} != 0 GOTO {label}"),
        }
    }
}

/// One instruction slot of a parsed program.
///
/// `text` is the normalized source (trimmed, uppercased, label removed).
/// `instruction` is `None` when the text matches none of the three forms;
/// such a slot only becomes an error if execution reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// 1-based line number in the source text.
    pub number: usize,
    /// Normalized instruction text.
    pub text: String,
    /// Decoded instruction, if the text is well-formed.
    pub instruction: Option<Instruction>,
}

impl Line {
    /// Create a new line.
    pub fn new(number: usize, text: impl Into<String>, instruction: Option<Instruction>) -> Self {
        Self {
            number,
            text: text.into(),
            instruction,
        }
    }

    /// Returns true if the text decoded to one of the instruction forms.
    pub fn is_valid(&self) -> bool {
        self.instruction.is_some()
    }
}

//! Runtime errors for the SLANG engine.
//!
//! There are exactly two ways a run can fail. Undefined labels, reads of
//! unset registers and decrements at zero are all well-defined and never
//! produce an error.

use thiserror::Error;

/// Errors that stop a run before it halts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The executed line matches none of the instruction forms.
    #[error("invalid instruction '{text}' at line {line}")]
    InvalidInstruction {
        /// Position of the line in the instruction list.
        at: usize,
        /// 1-based source line number.
        line: usize,
        /// Normalized instruction text.
        text: String,
    },

    /// The step budget ran out before the program halted.
    #[error("max steps ({limit}) executed, program killed")]
    StepLimitExceeded { limit: u64 },
}

//! Main execution loop and instruction dispatch for the SLANG engine.

use crate::error::RuntimeError;
use crate::machine::VM;
use slang_common::{Instruction, Value};
use tracing::{debug, trace, warn};

/// Outcome of a single [`VM::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One instruction was executed; the program has not halted yet.
    Running,
    /// The program counter is at the halt position. Carries the value of `Y`.
    Halted(Value),
}

impl<'a> VM<'a> {
    /// Execute the program until it halts or fails.
    ///
    /// Returns the final value of register `Y`.
    pub fn execute(&mut self) -> Result<Value, RuntimeError> {
        debug!(
            instructions = self.program.len(),
            max_steps = self.limits.max_steps.map(|n| n.get()),
            "starting run"
        );

        loop {
            if let Step::Halted(result) = self.step()? {
                debug!(steps = self.steps, result, "program halted");
                return Ok(result);
            }
        }
    }

    /// Execute at most one instruction.
    ///
    /// At the halt position this reports [`Step::Halted`] without consuming
    /// any of the step budget, so halting always wins over the budget.
    pub fn step(&mut self) -> Result<Step, RuntimeError> {
        if self.is_halted() {
            return Ok(Step::Halted(self.registers.output()));
        }
        let program = self.program;
        let line = &program.lines[self.pc];

        if let Some(limit) = self.limits.max_steps {
            if self.steps >= limit.get() {
                warn!(limit = limit.get(), pc = self.pc, "step budget exhausted");
                return Err(RuntimeError::StepLimitExceeded { limit: limit.get() });
            }
        }

        let at = self.pc;
        // Advance before dispatch: a taken branch overwrites this.
        self.pc += 1;
        self.steps += 1;
        trace!(pc = at, line = line.number, text = %line.text, "step");

        match &line.instruction {
            Some(Instruction::Increment(reg)) => self.registers.increment(reg),
            Some(Instruction::DecrementFloor(reg)) => self.registers.decrement(reg),
            Some(Instruction::BranchIfNonZero(reg, label)) => {
                if self.registers.get(reg) != 0 {
                    self.pc = self.program.resolve(label);
                }
            }
            None => {
                return Err(RuntimeError::InvalidInstruction {
                    at,
                    line: line.number,
                    text: line.text.clone(),
                })
            }
        }

        Ok(Step::Running)
    }
}

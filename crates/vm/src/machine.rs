//! VM state management: registers, step budget, program counter.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use slang_common::value::ZERO;
use slang_common::{Program, Register, Value};

/// The register file for one run.
///
/// Reading a register that was never written yields zero. Values never go
/// below zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registers {
    values: BTreeMap<Register, Value>,
}

impl Registers {
    /// An empty register file: every register reads as zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A register file with `X1, X2, …` seeded from `inputs` by position.
    pub fn with_inputs(inputs: &[Value]) -> Self {
        let mut registers = Self::new();
        for (i, &value) in inputs.iter().enumerate() {
            registers.set(Register::input(i + 1), value);
        }
        registers
    }

    /// Current value of `reg`, zero if it was never written.
    pub fn get(&self, reg: &Register) -> Value {
        self.values.get(reg).copied().unwrap_or(ZERO)
    }

    /// Overwrite `reg`.
    pub fn set(&mut self, reg: Register, value: Value) {
        self.values.insert(reg, value);
    }

    /// Value of the output register `Y`.
    pub fn output(&self) -> Value {
        self.get(&Register::output())
    }

    /// `reg += 1`, saturating at `Value::MAX`.
    pub(crate) fn increment(&mut self, reg: &Register) {
        match self.values.get_mut(reg) {
            Some(value) => *value = value.saturating_add(1),
            None => {
                self.values.insert(reg.clone(), 1);
            }
        }
    }

    /// `reg -= 1` unless it is already zero.
    pub(crate) fn decrement(&mut self, reg: &Register) {
        if let Some(value) = self.values.get_mut(reg) {
            *value = value.saturating_sub(1);
        }
    }

    /// All registers that have been written, in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Register, Value)> {
        self.values.iter().map(|(reg, &value)| (reg, value))
    }
}

/// Resource limits for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of executed instructions. `None` runs until halt.
    pub max_steps: Option<NonZeroU64>,
}

impl Limits {
    /// No step budget: the run ends only when the program halts.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Stop after `max_steps` executed instructions. Zero means unbounded.
    pub fn with_max_steps(max_steps: u64) -> Self {
        Self {
            max_steps: NonZeroU64::new(max_steps),
        }
    }
}

/// The SLANG execution engine for one run of one program.
pub struct VM<'a> {
    /// The program being executed.
    pub(crate) program: &'a Program,
    /// Register file.
    pub(crate) registers: Registers,
    /// Position of the next instruction. `program.len()` means halted.
    pub(crate) pc: usize,
    /// Instructions executed so far.
    pub(crate) steps: u64,
    pub(crate) limits: Limits,
}

impl<'a> VM<'a> {
    /// Create a VM with `X1, X2, …` seeded from `inputs`.
    pub fn new(program: &'a Program, inputs: &[Value], limits: Limits) -> Self {
        Self {
            program,
            registers: Registers::with_inputs(inputs),
            pc: 0,
            steps: 0,
            limits,
        }
    }

    /// Current register file.
    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    /// Position of the next instruction.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Instructions executed so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns true once the program counter reaches the halt position.
    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }
}

//! Register values.

/// The value held by a register. Registers never go below zero.
pub type Value = u64;

/// Value of any register that has never been written.
pub const ZERO: Value = 0;

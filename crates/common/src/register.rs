//! Register names.
//!
//! A register name is one of the letters `X`, `Y`, `Z` followed by an
//! optional run of decimal digits. By convention `X1, X2, …` hold the
//! program inputs, `Y` holds the output and `Z*` are scratch registers.
//! Names are stored uppercase; the language is case-insensitive.

use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// Letters that may start a register name.
pub const REGISTER_FAMILIES: [char; 3] = ['X', 'Y', 'Z'];

/// A validated, uppercase register name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(String);

impl Register {
    /// The input register `X{n}` (1-based).
    pub fn input(n: usize) -> Self {
        Self(format!("X{n}"))
    }

    /// The output register `Y`.
    pub fn output() -> Self {
        Self("Y".to_string())
    }

    /// The register name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `name` (already uppercase) is a well-formed register name.
    pub fn is_valid(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if REGISTER_FAMILIES.contains(&c) => chars.all(|c| c.is_ascii_digit()),
            _ => false,
        }
    }
}

impl FromStr for Register {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(NameError::InvalidRegister(s.to_string()))
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

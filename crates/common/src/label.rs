//! Jump labels.

use std::fmt;
use std::str::FromStr;

use crate::error::NameError;

/// A validated, uppercase label name: one or more ASCII letters or digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(String);

impl Label {
    /// The label name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `name` (already uppercase) is a well-formed label name.
    pub fn is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

impl FromStr for Label {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_uppercase();
        if Self::is_valid(&name) {
            Ok(Self(name))
        } else {
            Err(NameError::InvalidLabel(s.to_string()))
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letters_and_digits() {
        assert_eq!("loop".parse::<Label>().unwrap().as_str(), "LOOP");
        assert_eq!("A1".parse::<Label>().unwrap().as_str(), "A1");
        assert_eq!("42".parse::<Label>().unwrap().as_str(), "42");
    }

    #[test]
    fn rejects_empty_and_punctuation() {
        assert!("".parse::<Label>().is_err());
        assert!("END!".parse::<Label>().is_err());
        assert!("A B".parse::<Label>().is_err());
    }
}

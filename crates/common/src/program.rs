//! Parsed SLANG programs: instruction slots plus the label index.

use std::collections::BTreeMap;

use crate::instruction::Line;
use crate::label::Label;

/// A parsed program.
///
/// Positions run from `0` to `len()`; `len()` itself is the halt position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// Instruction slots in source order.
    pub lines: Vec<Line>,
    /// Label name → position of the first instruction after the label.
    pub labels: BTreeMap<Label, usize>,
}

impl Program {
    /// Create a program from its lines and label index.
    pub fn new(lines: Vec<Line>, labels: BTreeMap<Label, usize>) -> Self {
        Self { lines, labels }
    }

    /// Number of instruction slots. Also the halt position.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no instructions.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Position a label was bound to, if it was defined.
    pub fn label_position(&self, label: &Label) -> Option<usize> {
        self.labels.get(label).copied()
    }

    /// Jump target for `label`. Undefined labels resolve to the halt position.
    pub fn resolve(&self, label: &Label) -> usize {
        self.label_position(label).unwrap_or(self.len())
    }
}

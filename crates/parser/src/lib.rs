//! SLANG parser: source text → instruction list and label index.
//!
//! Parsing only resolves structure: which lines are instructions, in what
//! order, and where each label points. It never fails. Lines that match
//! none of the instruction forms are kept (with their text) and only
//! become an error if the engine executes them.
//!
//! # Usage
//!
//! ```
//! use slang_parser::parse;
//!
//! let program = parse("[LOOP] x1 <- x1 - 1\nIF X1 != 0 GOTO LOOP\n");
//! assert_eq!(program.len(), 2);
//! assert_eq!(program.resolve(&"LOOP".parse().unwrap()), 0);
//! ```
//!
//! # Source format
//!
//! One instruction per line, case-insensitive, surrounding whitespace
//! ignored. Blank lines and lines starting with `#` are skipped. A line may
//! start with a `[LABEL]`; a label on a line of its own points at the next
//! instruction (or at the halt position if none follows). Only the first
//! definition of a label counts.

mod lexer;
mod listing;
mod parser;

pub use listing::listing;

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use lexer::{is_blank_or_comment, split_label};
use parser::decode_instruction;
use slang_common::{Label, Line, Program};
use tracing::{debug, trace};

/// Parse source text into a program.
pub fn parse(text: &str) -> Program {
    let mut lines = Vec::new();
    let mut labels: BTreeMap<Label, usize> = BTreeMap::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim().to_uppercase();
        if is_blank_or_comment(&line) {
            continue;
        }

        let (name, body) = split_label(&line);
        if let Some(label) = name.and_then(|n| n.parse::<Label>().ok()) {
            match labels.entry(label) {
                Entry::Vacant(slot) => {
                    slot.insert(lines.len());
                }
                Entry::Occupied(first) => {
                    trace!(
                        label = %first.key(),
                        line = line_num,
                        "duplicate label ignored"
                    );
                }
            }
        }

        if body.is_empty() {
            continue;
        }
        lines.push(Line::new(line_num, body, decode_instruction(body)));
    }

    let program = Program::new(lines, labels);
    debug!(
        instructions = program.len(),
        labels = program.labels.len(),
        "parsed program"
    );
    program
}

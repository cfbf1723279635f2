//! Listing: parsed program → canonical source text.
//!
//! One instruction per line, no comments, no blank lines. Each label is
//! re-attached to the instruction it points at; when several labels share
//! a position, all but the last go on label-only lines of their own.
//! Labels bound to the halt position close the listing.

use std::collections::BTreeMap;

use slang_common::{Label, Line, Program};

/// Render a program as canonical source text.
///
/// Recognized instructions use the canonical spelling; unrecognized text
/// is written back verbatim so it still faults at the same position.
/// Unrecognized text that would re-parse as a label or a comment is put
/// behind a label that is already bound earlier in the program; the
/// re-parser ignores that repeat definition and keeps the text intact.
pub fn listing(program: &Program) -> String {
    let mut by_position: BTreeMap<usize, Vec<&Label>> = BTreeMap::new();
    for (label, &pos) in &program.labels {
        by_position.entry(pos).or_default().push(label);
    }

    let mut out = String::new();

    for (pc, line) in program.lines.iter().enumerate() {
        let prefix = match by_position.get(&pc).map(Vec::as_slice) {
            Some([leading @ .., last]) => {
                for label in leading {
                    out.push_str(&format!("[{label}]\n"));
                }
                format!("[{last}] ")
            }
            _ if needs_shield(line) => match by_position.range(..pc).next() {
                Some((_, labels)) => format!("[{}] ", labels[0]),
                None => String::new(),
            },
            _ => String::new(),
        };

        let body = match &line.instruction {
            Some(instr) => instr.to_string(),
            None => line.text.clone(),
        };
        out.push_str(&prefix);
        out.push_str(&body);
        out.push('\n');
    }

    if let Some(labels) = by_position.get(&program.len()) {
        for label in labels {
            out.push_str(&format!("[{label}]\n"));
        }
    }

    out
}

/// Unrecognized text that would not survive a re-parse on a line of its own.
fn needs_shield(line: &Line) -> bool {
    !line.is_valid() && (line.text.starts_with('[') || line.text.starts_with('#'))
}

//! Instruction decoding: normalized line text → [`Instruction`].
//!
//! Three closed grammars, matched against uppercased text:
//!
//! ```text
//! R <- R + 1
//! R <- R - 1
//! IF R != 0 GOTO L
//! ```
//!
//! The register on both sides of `<-` must be spelled identically.

use crate::lexer::Cursor;
use slang_common::{Instruction, Label, Register};

/// Decode one line of instruction text.
///
/// Returns `None` if the text matches none of the grammars. This is not an
/// error at parse time: the engine reports it only if the line is executed.
pub(crate) fn decode_instruction(text: &str) -> Option<Instruction> {
    let mut cursor = Cursor::new(text);
    cursor.skip_ws();
    if cursor.eat("IF") {
        decode_branch(&mut cursor)
    } else {
        decode_assignment(&mut cursor)
    }
}

/// `R != 0 GOTO L`, after the leading `IF`.
fn decode_branch(cursor: &mut Cursor<'_>) -> Option<Instruction> {
    let reg: Register = cursor.register()?.parse().ok()?;
    if !(cursor.eat_ws("!=") && cursor.eat_ws("0") && cursor.eat_ws("GOTO")) {
        return None;
    }
    let label: Label = cursor.label()?.parse().ok()?;
    cursor
        .at_end()
        .then_some(Instruction::BranchIfNonZero(reg, label))
}

/// `R <- R + 1` or `R <- R - 1`.
fn decode_assignment(cursor: &mut Cursor<'_>) -> Option<Instruction> {
    let dst = cursor.register()?;
    if !cursor.eat_ws("<-") {
        return None;
    }
    let src = cursor.register()?;
    if dst != src {
        return None;
    }
    let reg: Register = dst.parse().ok()?;

    cursor.skip_ws();
    let instr = if cursor.eat("+") {
        Instruction::Increment(reg)
    } else if cursor.eat("-") {
        Instruction::DecrementFloor(reg)
    } else {
        return None;
    };

    (cursor.eat_ws("1") && cursor.at_end()).then_some(instr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(name: &str) -> Register {
        name.parse().unwrap()
    }

    fn label(name: &str) -> Label {
        name.parse().unwrap()
    }

    #[test]
    fn increment() {
        assert_eq!(
            decode_instruction("X1 <- X1 + 1"),
            Some(Instruction::Increment(reg("X1")))
        );
    }

    #[test]
    fn decrement() {
        assert_eq!(
            decode_instruction("Z3 <- Z3 - 1"),
            Some(Instruction::DecrementFloor(reg("Z3")))
        );
    }

    #[test]
    fn branch() {
        assert_eq!(
            decode_instruction("IF X1 != 0 GOTO BODY"),
            Some(Instruction::BranchIfNonZero(reg("X1"), label("BODY")))
        );
    }

    #[test]
    fn whitespace_is_optional() {
        assert_eq!(
            decode_instruction("Y<-Y+1"),
            Some(Instruction::Increment(reg("Y")))
        );
        assert_eq!(
            decode_instruction("IFX2!=0GOTOA1"),
            Some(Instruction::BranchIfNonZero(reg("X2"), label("A1")))
        );
    }

    #[test]
    fn extra_whitespace_is_allowed() {
        assert_eq!(
            decode_instruction("  Y   <-   Y   -   1  "),
            Some(Instruction::DecrementFloor(reg("Y")))
        );
    }

    #[test]
    fn mismatched_registers_rejected() {
        assert_eq!(decode_instruction("X1 <- X2 + 1"), None);
        assert_eq!(decode_instruction("X1 <- X12 + 1"), None);
        assert_eq!(decode_instruction("X12 <- X1 + 1"), None);
    }

    #[test]
    fn only_unit_steps() {
        assert_eq!(decode_instruction("Y <- Y + 2"), None);
        assert_eq!(decode_instruction("Y <- Y + 10"), None);
        assert_eq!(decode_instruction("Y <- Y - 0"), None);
    }

    #[test]
    fn branch_requires_zero_comparison() {
        assert_eq!(decode_instruction("IF X1 != 1 GOTO A"), None);
        assert_eq!(decode_instruction("IF X1 != 00 GOTO A"), None);
        assert_eq!(decode_instruction("IF X1 == 0 GOTO A"), None);
    }

    #[test]
    fn branch_rejects_trailing_text() {
        assert_eq!(decode_instruction("IF X1 != 0 GOTO A B"), None);
        assert_eq!(decode_instruction("IF X1 != 0 GOTO"), None);
    }

    #[test]
    fn unknown_registers_rejected() {
        assert_eq!(decode_instruction("A <- A + 1"), None);
        assert_eq!(decode_instruction("IF W != 0 GOTO L"), None);
    }

    #[test]
    fn bare_goto_rejected() {
        assert_eq!(decode_instruction("GOTO END"), None);
        assert_eq!(decode_instruction(""), None);
    }
}

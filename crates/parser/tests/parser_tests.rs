//! Integration tests for the SLANG parser.
//!
//! Tests cover:
//! - The counting loop program with label-only lines
//! - Label semantics (first definition wins, label-only lines)
//! - Lines that only fault at runtime
//! - Listing output for a full program

use slang_common::{Instruction, Label, Register};
use slang_parser::{listing, parse};

// ---- Test helpers ----

fn reg(name: &str) -> Register {
    name.parse().unwrap()
}

fn label(name: &str) -> Label {
    name.parse().unwrap()
}

const COUNT_LOOP: &str = "\
[LOOP] IF X1 != 0 GOTO BODY
GOTO END
[BODY] X1 <- X1 - 1
Y <- Y + 1
IF X1 != 0 GOTO LOOP
[END]
";

// ---- Structure ----

#[test]
fn count_loop_structure() {
    let program = parse(COUNT_LOOP);
    assert_eq!(program.len(), 5);
    assert_eq!(program.label_position(&label("LOOP")), Some(0));
    assert_eq!(program.label_position(&label("BODY")), Some(2));
    assert_eq!(program.label_position(&label("END")), Some(5));
    assert_eq!(program.resolve(&label("END")), program.len());
}

#[test]
fn count_loop_instructions() {
    let program = parse(COUNT_LOOP);
    let instrs: Vec<_> = program.lines.iter().map(|l| l.instruction.clone()).collect();
    assert_eq!(
        instrs,
        vec![
            Some(Instruction::BranchIfNonZero(reg("X1"), label("BODY"))),
            None,
            Some(Instruction::DecrementFloor(reg("X1"))),
            Some(Instruction::Increment(reg("Y"))),
            Some(Instruction::BranchIfNonZero(reg("X1"), label("LOOP"))),
        ]
    );
}

#[test]
fn source_line_numbers_are_kept() {
    let program = parse("# header\n\nY <- Y + 1\n\n[A] Y <- Y - 1\n");
    let numbers: Vec<_> = program.lines.iter().map(|l| l.number).collect();
    assert_eq!(numbers, vec![3, 5]);
}

// ---- Labels ----

#[test]
fn mixed_case_labels_alias() {
    let program = parse("[loop] Y <- Y + 1\nIF Y != 0 GOTO Loop\n");
    assert_eq!(
        program.lines[1].instruction,
        Some(Instruction::BranchIfNonZero(reg("Y"), label("LOOP")))
    );
    assert_eq!(program.resolve(&label("LOOP")), 0);
}

#[test]
fn numeric_labels() {
    let program = parse("[1] Y <- Y + 1\nIF Y != 0 GOTO 1\n");
    assert_eq!(program.label_position(&label("1")), Some(0));
    assert!(program.lines[1].is_valid());
}

#[test]
fn undefined_label_is_not_a_parse_error() {
    let program = parse("IF X1 != 0 GOTO NOWHERE\n");
    assert_eq!(program.len(), 1);
    assert!(program.labels.is_empty());
    assert_eq!(program.resolve(&label("NOWHERE")), 1);
}

#[test]
fn duplicate_label_on_label_only_line() {
    let program = parse("[A] Y <- Y + 1\n[A]\nY <- Y + 1\n");
    assert_eq!(program.label_position(&label("A")), Some(0));
}

// ---- Deferred errors ----

#[test]
fn unsupported_step_kept_as_text() {
    let program = parse("Y <- Y + 2\n");
    assert_eq!(program.len(), 1);
    assert_eq!(program.lines[0].text, "Y <- Y + 2");
    assert!(!program.lines[0].is_valid());
}

#[test]
fn labelled_invalid_line_strips_label() {
    let program = parse("[X] MOV Y, 1\n");
    assert_eq!(program.lines[0].text, "MOV Y, 1");
    assert_eq!(program.label_position(&label("X")), Some(0));
}

// ---- Listing ----

#[test]
fn count_loop_listing() {
    let program = parse(COUNT_LOOP);
    assert_eq!(listing(&program), COUNT_LOOP);
}

#[test]
fn duplicate_label_listing_keeps_fault() {
    let program = parse("[A] Y <- Y + 1\n[A] # X\n");
    let reparsed = parse(&listing(&program));
    assert_eq!(reparsed.len(), 2);
    assert_eq!(reparsed.lines[1].text, "# X");
    assert!(reparsed.lines[1].instruction.is_none());
}

#[test]
fn listing_is_stable() {
    let text = "[a]x1<-x1-1\n  if x1 != 0 goto a\n[done]";
    let first = listing(&parse(text));
    let second = listing(&parse(&first));
    assert_eq!(first, second);
    assert_eq!(first, "[A] X1 <- X1 - 1\nIF X1 != 0 GOTO A\n[DONE]\n");
}

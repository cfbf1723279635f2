//! CLI command implementations.

use std::fs;
use std::io;

use slang_vm::{Limits, RuntimeError, VM};
use tracing::{debug, info};

use crate::{Cli, EXIT_INPUT, EXIT_INVALID, EXIT_STEP_LIMIT};

/// Load, parse and either list or execute a program.
pub(crate) fn run(cli: &Cli) -> Result<(), i32> {
    let text = read_source(&cli.src)?;
    let program = slang_parser::parse(&text);
    info!(src = %cli.src, instructions = program.len(), "loaded program");

    if cli.listing {
        print!("{}", slang_parser::listing(&program));
        return Ok(());
    }

    let limits = Limits::with_max_steps(cli.max_steps);
    let mut vm = VM::new(&program, &cli.inputs, limits);
    let result = vm.execute();

    for (reg, value) in vm.registers().iter() {
        debug!(register = %reg, value, "final register");
    }

    match result {
        Ok(value) => {
            println!("{value}");
            Ok(())
        }
        Err(e) => {
            eprintln!("error: {e}");
            Err(exit_code(&e))
        }
    }
}

/// Read program text from a file, or from stdin for `-`.
fn read_source(src: &str) -> Result<String, i32> {
    let text = if src == "-" {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(src)
    };
    text.map_err(|e| {
        eprintln!("error: cannot read '{src}': {e}");
        EXIT_INPUT
    })
}

fn exit_code(err: &RuntimeError) -> i32 {
    match err {
        RuntimeError::InvalidInstruction { .. } => EXIT_INVALID,
        RuntimeError::StepLimitExceeded { .. } => EXIT_STEP_LIMIT,
    }
}

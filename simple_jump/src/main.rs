//! Two-way indirect dispatch fixture.
//!
//! Exits with the low byte of `primary(argv[0])` when run with no extra
//! arguments, or of `secondary(argv[0])` otherwise.

use anyhow::{Context, Result};
use simple_jump::exit_codes;
use simple_jump::invocation::Invocation;
use simple_jump::logging;

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let invocation = Invocation::from_env().context("read process arguments")?;
    Ok(invocation.run().exit_code)
}

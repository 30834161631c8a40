//! # GEORGE
//!
//! The GEORGE programming language as Charles Hamblin described it in
//! 1957: a terse symbolic stack language with counted loops, numbered
//! subroutines, and 32 letters of addressable memory.
//!
//! Programs compile to a flat action sequence and run on a small virtual
//! machine with bounded output and wall-clock limits, so unbounded
//! programs stop cooperatively instead of hanging the host.
//!
//! ```
//! let output = george::interpret_to_string("1,2+ (P)").unwrap();
//! assert_eq!(output, "3\n");
//! ```

pub mod lang;
pub mod mach;

pub use lang::ParseError;
pub use mach::{compile, run, Execution, Program, RunOptions, RuntimeError, StopReason};

/// Either way a program can fail: at compile time or while running.
#[derive(Debug, PartialEq, Clone)]
pub enum GeorgeError {
    Parse(ParseError),
    Runtime(RuntimeError),
}

impl From<ParseError> for GeorgeError {
    fn from(error: ParseError) -> GeorgeError {
        GeorgeError::Parse(error)
    }
}

impl From<RuntimeError> for GeorgeError {
    fn from(error: RuntimeError) -> GeorgeError {
        GeorgeError::Runtime(error)
    }
}

impl std::fmt::Display for GeorgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GeorgeError::Parse(e) => write!(f, "PARSE ERROR; {}", e),
            GeorgeError::Runtime(e) => write!(f, "RUNTIME ERROR; {}", e),
        }
    }
}

/// Compile and run a program in one step.
pub fn interpret(source: &str, options: RunOptions) -> Result<Execution, GeorgeError> {
    let program = compile(source)?;
    Ok(run(&program, options)?)
}

/// Compile and run with default limits, returning the captured output.
pub fn interpret_to_string(source: &str) -> Result<String, GeorgeError> {
    Ok(interpret(source, RunOptions::default())?.output)
}

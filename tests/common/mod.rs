use george::{interpret, Execution, GeorgeError, RunOptions, StopReason};
use std::time::Duration;

/// Run a program with default limits and return its captured output.
pub fn output(code: &str) -> String {
    match george::interpret_to_string(code) {
        Ok(s) => s,
        Err(e) => panic!("{:?} failed: {}", code, e),
    }
}

/// Run a program that is expected to terminate by itself.
#[allow(dead_code)]
pub fn completes(code: &str) -> Execution {
    let execution = interpret(code, RunOptions::default()).unwrap();
    assert_eq!(execution.reason, StopReason::Completed, "{:?}", code);
    execution
}

/// Run a program with a small output budget.
#[allow(dead_code)]
pub fn output_limited(code: &str, limit: usize) -> Execution {
    let options = RunOptions {
        output_limit: limit,
        ..RunOptions::default()
    };
    interpret(code, options).unwrap()
}

/// Run a program with a short time budget.
#[allow(dead_code)]
pub fn time_limited(code: &str, millis: u64) -> Execution {
    let options = RunOptions {
        time_limit: Duration::from_millis(millis),
        ..RunOptions::default()
    };
    interpret(code, options).unwrap()
}

/// Assert a program aborts with a runtime error, before any output.
#[allow(dead_code)]
pub fn fails(code: &str) -> GeorgeError {
    match interpret(code, RunOptions::default()) {
        Ok(_) => panic!("{:?} ran but should have failed", code),
        Err(e) => e,
    }
}

mod common;
use common::*;
use george::StopReason;

#[test]
fn test_add_and_print() {
    assert_eq!(output("1,2+ (P)"), "3\n");
}

#[test]
fn test_divide_and_print() {
    assert_eq!(output("3,4÷ (P)"), "0.75\n");
}

#[test]
fn test_sum_of_squares_via_subroutine() {
    assert_eq!(output("0, 1,10 rep (a) a 0↓ + ] (P) ] *0 dup× ]"), "385\n");
}

#[test]
fn test_jump_inside_a_loop() {
    // sum of 1..100 except multiples of 7
    assert_eq!(output("0, 1,100 rep (i) i7rem 0= 2↑ i+ *2 ] (P)"), "4315\n");
}

#[test]
fn test_loop_inside_a_subroutine() {
    // factorial
    assert_eq!(output("6, 0↓ (P) ] *0 1rev1rev rep (α) α× ] ]"), "720\n");
}

#[test]
fn test_jump_inside_a_subroutine() {
    // subroutine 0 squares, unless the top of the stack is a multiple of 7
    assert_eq!(
        output("14, 0↓ (P); 13, 0↓ (P);] *0 dup7rem 0= 2↑ dup× *2 ]"),
        "14\n169\n"
    );
}

#[test]
fn test_output_limit_is_a_stop_not_an_error() {
    let execution = output_limited("*0 1 (P) 0↑", 7);
    assert_eq!(execution.reason, StopReason::OutputLimitReached);
    // 2 bytes per line; the run stops at the first check at or past 7
    assert_eq!(execution.output, "1\n".repeat(4));
}

#[test]
fn test_time_limit_is_a_stop_not_an_error() {
    let execution = time_limited("*0 0↑", 50);
    assert_eq!(execution.reason, StopReason::TimeLimitReached);
    assert_eq!(execution.output, "");
}

#[test]
fn test_bad_rep_bounds_abort_before_any_output() {
    fails("5, 0 rep (i) i (P); ]");
}

#[test]
fn test_parse_and_runtime_errors_are_distinct() {
    use george::GeorgeError;
    match george::interpret_to_string("1 ]") {
        Err(GeorgeError::Parse(_)) => {}
        other => panic!("expected a parse error, got {:?}", other),
    }
    match george::interpret_to_string("9↑") {
        Err(GeorgeError::Runtime(_)) => {}
        other => panic!("expected a runtime error, got {:?}", other),
    }
}

#[test]
fn test_readme_worked_example() {
    // mean of two numbers, then an absolute difference
    assert_eq!(output("4.3, 1.7 + 2 ÷ (P); 5, 8 - mod (P)"), "3\n3\n");
}

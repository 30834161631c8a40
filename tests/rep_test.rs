mod common;
use common::*;

#[test]
fn test_print_in_a_loop() {
    assert_eq!(output("0,5 rep (i) i (P); ]"), "0\n1\n2\n3\n4\n5\n");
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        output("0,3 rep(i) 0,1 rep(j) i2× j+ (P);]]"),
        "0\n1\n2\n3\n4\n5\n6\n7\n"
    );
}

#[test]
fn test_loop_body_runs_max_minus_init_plus_one_times() {
    assert_eq!(output("0, 4,7 rep (i) 1+ ] (P)"), "4\n");
}

#[test]
fn test_loop_variable_ends_at_max() {
    assert_eq!(output("0,5 rep (i) ] i (P)"), "5\n");
}

#[test]
fn test_factorial() {
    assert_eq!(output("1, 1,6 rep (i) i× ] (P)"), "720\n");
}

#[test]
fn test_max_not_greater_than_init_fails_before_any_output() {
    fails("5, 0 rep (i) i (P); ]");
    fails("5, 5 rep (i) i (P); ]");
}

#[test]
fn test_non_integer_bounds_fail() {
    fails("2.5, 5 rep (i) ]");
    fails("2, 4.5 rep (i) ]");
}

mod common;
use common::*;

/// Evaluate an expression and compare the printed top of stack.
fn computes(code: &str, expected: &str) {
    assert_eq!(
        output(&format!("{}(P)", code)),
        format!("{}\n", expected),
        "program was {:?}",
        code
    );
}

#[test]
fn test_add() {
    computes("1,2+", "3");
    computes("7.3,4.9+", &(7.3f64 + 4.9).to_string());
}

#[test]
fn test_subtract() {
    computes("1,2-", "-1");
    computes("7.6,3.5-", &(7.6f64 - 3.5).to_string());
}

#[test]
fn test_multiply() {
    computes("3,4×", "12");
    computes("3.2,2.6×", &(3.2f64 * 2.6).to_string());
}

#[test]
fn test_divide() {
    computes("3,4÷", "0.75");
    computes("111,3÷", "37");
}

#[test]
fn test_square_root() {
    computes("7√", &7f64.sqrt().to_string());
    computes("81√", "9");
}

#[test]
fn test_negate() {
    computes("1 neg", "-1");
    computes("7.8neg", "-7.8");
}

#[test]
fn test_absolute_value_is_spelled_mod() {
    computes("7.3mod", "7.3");
    computes("5negmod", "5");
}

#[test]
fn test_max() {
    computes("2, 3 max", "3");
    computes("4.2, 3.14 max", "4.2");
}

#[test]
fn test_natural_log() {
    computes("10 log", &10f64.ln().to_string());
    computes("2 log", &2f64.ln().to_string());
}

#[test]
fn test_exp() {
    computes("1 exp", &1f64.exp().to_string());
}

#[test]
fn test_pow() {
    computes("2,5 pow", "32");
    computes("3.5,4.7 pow", &3.5f64.powf(4.7).to_string());
}

#[test]
fn test_modulus_is_spelled_rem() {
    computes("13,5 rem", "3");
    computes("13neg,5 rem", "2");
    computes("2.94,1 rem", &((2.94f64 % 1.0 + 1.0) % 1.0).to_string());
}

#[test]
fn test_sin_and_cos() {
    computes("3 sin", &3f64.sin().to_string());
    computes("3 cos", &3f64.cos().to_string());
}

#[test]
fn test_greater() {
    computes("2,2>", "0");
    computes("3,2>", "-1");
}

#[test]
fn test_equality() {
    computes("2,2=", "-1");
    computes("3,2=", "0");
}

#[test]
fn test_logical_negation() {
    computes("0~", "-1");
    computes("1neg ~", "0");
}

#[test]
fn test_logical_and() {
    computes("0,0&", "0");
    computes("1neg,0&", "0");
    computes("1negdup&", "-1");
}

#[test]
fn test_logical_or() {
    computes("0,0∨", "0");
    computes("1neg,0∨", "-1");
    computes("1negdup∨", "-1");
}

#[test]
fn test_drop() {
    assert_eq!(completes("1 ;").stack.len(), 0);
    assert_eq!(completes("1,2,3 ;").stack.len(), 2);
    computes("1,2,99 ; +", "3");
}

#[test]
fn test_dup() {
    assert_eq!(completes("1 dup").stack, vec![1.0, 1.0]);
    computes("3 dup ×", "9");
}

#[test]
fn test_rev_swaps() {
    computes("1,3 rev -", "2");
    computes("4,2 rev >", "0");
}

#[test]
fn test_stack_underflow_reports_counts() {
    let error = fails("+");
    assert_eq!(
        error.to_string(),
        "RUNTIME ERROR; STACK UNDERFLOW; `+` NEEDS 2 BUT THE STACK HOLDS 0"
    );
    fails("1 +");
    fails("dup");
    fails(";");
}

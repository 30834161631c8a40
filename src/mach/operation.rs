/// ## Operator tables
///
/// The pure numeric functions behind every GEORGE operator. Monadic
/// functions take the popped value; dyadic functions take `(a, b)` in push
/// order. Comparison results use the GEORGE convention of `-1` for true
/// and `0` for false. Nothing in here touches the stack or the machine.

pub struct Operation {}

impl Operation {
    // *** monadic

    pub fn square_root(a: f64) -> f64 {
        a.sqrt()
    }

    pub fn negate(a: f64) -> f64 {
        -a
    }

    /// The `mod` word: absolute value, not a modulus.
    pub fn absolute(a: f64) -> f64 {
        a.abs()
    }

    pub fn natural_log(a: f64) -> f64 {
        a.ln()
    }

    pub fn exponential(a: f64) -> f64 {
        a.exp()
    }

    pub fn sine(a: f64) -> f64 {
        a.sin()
    }

    pub fn cosine(a: f64) -> f64 {
        a.cos()
    }

    /// Bitwise complement through a 64-bit integer; `~0 → -1`, `~-1 → 0`.
    pub fn complement(a: f64) -> f64 {
        !(a as i64) as f64
    }

    // *** dyadic

    pub fn subtract(a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn sum(a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn multiply(a: f64, b: f64) -> f64 {
        a * b
    }

    pub fn divide(a: f64, b: f64) -> f64 {
        a / b
    }

    pub fn power(a: f64, b: f64) -> f64 {
        a.powf(b)
    }

    pub fn maximum(a: f64, b: f64) -> f64 {
        a.max(b)
    }

    /// The `rem` word: true mathematical modulus, result takes the sign of
    /// the divisor. `-5 rem 3 → 1`, unlike the truncating `%`.
    pub fn modulus(a: f64, b: f64) -> f64 {
        (a % b + b) % b
    }

    pub fn conjunction(a: f64, b: f64) -> f64 {
        ((a as i64) & (b as i64)) as f64
    }

    pub fn disjunction(a: f64, b: f64) -> f64 {
        ((a as i64) | (b as i64)) as f64
    }

    pub fn greater(a: f64, b: f64) -> f64 {
        if a > b {
            -1.0
        } else {
            0.0
        }
    }

    pub fn equal(a: f64, b: f64) -> f64 {
        if a == b {
            -1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulus_takes_sign_of_divisor() {
        assert_eq!(Operation::modulus(-5.0, 3.0), 1.0);
        assert_eq!(Operation::modulus(13.0, 5.0), 3.0);
        assert_eq!(Operation::modulus(-13.0, 5.0), 2.0);
        assert_eq!(Operation::modulus(5.0, -3.0), -1.0);
    }

    #[test]
    fn test_comparisons_use_minus_one_for_true() {
        assert_eq!(Operation::greater(3.0, 2.0), -1.0);
        assert_eq!(Operation::greater(2.0, 2.0), 0.0);
        assert_eq!(Operation::equal(2.0, 2.0), -1.0);
        assert_eq!(Operation::equal(3.0, 2.0), 0.0);
    }

    #[test]
    fn test_complement_and_bitwise() {
        assert_eq!(Operation::complement(0.0), -1.0);
        assert_eq!(Operation::complement(-1.0), 0.0);
        assert_eq!(Operation::conjunction(-1.0, 0.0), 0.0);
        assert_eq!(Operation::conjunction(-1.0, -1.0), -1.0);
        assert_eq!(Operation::disjunction(-1.0, 0.0), -1.0);
        assert_eq!(Operation::disjunction(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_absolute_is_not_a_modulus() {
        assert_eq!(Operation::absolute(-5.0), 5.0);
        assert_eq!(Operation::absolute(7.3), 7.3);
    }
}

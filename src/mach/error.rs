/// ## Runtime errors
///
/// Every way the engine can abort once it is executing. All of these are
/// unconditionally fatal: the engine never retries, recovers, or continues
/// past one. Stopping at a resource limit is a `StopReason`, not an error.
#[derive(Debug, PartialEq, Clone)]
pub enum RuntimeError {
    /// An operator or action needed more stack values than were present.
    /// Checked before anything is mutated.
    StackUnderflow {
        op: &'static str,
        needed: usize,
        depth: usize,
    },
    /// `rep` bounds must be exact integers with `max > init`.
    BadLoopBounds { init: f64, max: f64 },
    /// A jump destination with no `*label` registered for it.
    NoJumpTarget { label: f64 },
    /// A call destination naming no subroutine.
    NoSubroutine { label: f64 },
    /// Return with an empty call stack. The parser's bracket pairing makes
    /// this unreachable for programs it built; kept as an invariant check.
    ReturnWithoutCall,
    /// Loop end with no loop context open. Reachable only by jumping into
    /// a loop body from outside it.
    LoopEndWithoutLoop,
    /// A feature the grammar accepts but the engine does not yet support.
    NotImplemented { feature: &'static str },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use RuntimeError::*;
        match self {
            StackUnderflow { op, needed, depth } => write!(
                f,
                "STACK UNDERFLOW; `{}` NEEDS {} BUT THE STACK HOLDS {}",
                op, needed, depth
            ),
            BadLoopBounds { init, max } => {
                if init.fract() != 0.0 || max.fract() != 0.0 {
                    write!(f, "REP BOUNDS MUST BE INTEGERS; GOT {}, {}", init, max)
                } else {
                    write!(f, "REP MAX MUST EXCEED INIT; GOT {}, {}", init, max)
                }
            }
            NoJumpTarget { label } => {
                write!(f, "NO JUMP LOCATION FOR LABEL {}", label)
            }
            NoSubroutine { label } => {
                write!(f, "NO SUBROUTINE WITH LABEL {}", label)
            }
            ReturnWithoutCall => write!(f, "RETURN WITHOUT CALL"),
            LoopEndWithoutLoop => write!(f, "LOOP END WITHOUT AN OPEN LOOP"),
            NotImplemented { feature } => {
                write!(f, "{} IS NOT YET IMPLEMENTED", feature)
            }
        }
    }
}

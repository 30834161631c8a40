use super::Address;
use crate::lang::token::{Op, Suffix};
use crate::lang::Letter;

/// ## Virtual machine instruction set
///
/// The GEORGE virtual machine has no registers. Every operation works on
/// the value stack and the three letter-addressed memory regions.
///
/// For example: `1,2+ (P)` compiles to
/// `[Number(1), Number(2), Operator(+), Operator((P)), End]`

/// Memory shape selected by a suffix count: 0 pipes is a scalar cell,
/// one pipe a 32-cell vector, two pipes a 32×32 matrix.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Access {
    Scalar,
    Vector,
    Matrix,
}

impl From<Suffix> for Access {
    fn from(suffix: Suffix) -> Access {
        match suffix {
            Suffix::One => Access::Vector,
            Suffix::Two => Access::Matrix,
        }
    }
}

impl Access {
    fn marks(self) -> &'static str {
        match self {
            Access::Scalar => "",
            Access::Vector => "|",
            Access::Matrix => "‖",
        }
    }
}

#[derive(PartialEq, Clone, Copy)]
pub enum Action {
    /// Push a literal number.
    Number(f64),
    /// Apply an operator to the stack.
    Operator(Op),
    /// Push a memory cell. Vector and matrix reads pop their indices.
    MemoryRead(Letter, Access),
    /// Peek the stack value into a memory cell; indices are popped,
    /// the value stays on the stack.
    MemoryWrite(Letter, Access),
    /// Print a memory cell. Only the scalar form is implemented.
    Print(Letter, Access),
    /// Read into a memory cell. Parses, but not implemented.
    Read(Letter, Access),
    /// Pop `max` then `init`, seed the loop letter, open a loop context.
    LoopStart(Letter),
    /// Step the innermost loop: jump back to the reentry point or finish.
    LoopEnd(Address),
    /// Return from a subroutine to the saved call frame.
    SubReturn,
    /// Terminate the run.
    End,
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_string())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Action::*;
        match self {
            Number(n) => write!(f, "NUMBER({})", n),
            Operator(op) => write!(f, "OP({})", op),
            MemoryRead(l, a) => write!(f, "PUSH({}{})", l, a.marks()),
            MemoryWrite(l, a) => write!(f, "STORE({}{})", l, a.marks()),
            Print(l, a) => write!(f, "PRINT({}{})", l, a.marks()),
            Read(l, a) => write!(f, "READ({}{})", l, a.marks()),
            LoopStart(l) => write!(f, "REP({})", l),
            LoopEnd(a) => write!(f, "ENDREP({})", a),
            SubReturn => write!(f, "RETURN"),
            End => write!(f, "END"),
        }
    }
}

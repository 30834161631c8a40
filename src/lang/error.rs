use super::Column;

/// ## Parse errors
///
/// Every way a compilation attempt can fail before a single action
/// executes. Each variant carries enough context to point at the source;
/// no partial program survives any of these.
#[derive(Debug, PartialEq, Clone)]
pub enum ParseError {
    /// `*` followed by something other than a non-negative integer.
    MalformedLabel { column: Column },
    /// `)` with no name literal open.
    UnmatchedParen { column: Column },
    /// A name literal `(x)` that is missing a piece or contains whitespace.
    IncompleteName {
        column: Column,
        expected: &'static str,
    },
    /// Anything other than `*` while no routine is open.
    OutsideRoutine { column: Column, token: String },
    /// Two numeric literals with no comma between them.
    AdjacentNumbers { column: Column },
    /// A pipe mark followed by neither `(` nor a letter.
    ExpectedLetter { column: Column, token: String },
    /// A token the grammar has no use for here.
    UnexpectedToken { column: Column, token: String },
    /// End of input while a subroutine was still open.
    UnclosedSubroutine { label: u32 },
    /// End of input while a `rep` was still open.
    UnclosedLoop,
    /// `]` closed the main routine with nothing after it; a main routine
    /// ends at end of input, not with a bracket.
    UnnecessaryEnd { column: Column },
    /// Input ran out in the middle of a construct.
    UnexpectedEndOfInput { parsing: &'static str },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ParseError::*;
        match self {
            MalformedLabel { column } => {
                write!(f, "MALFORMED LABEL ({}..{})", column.start, column.end)
            }
            UnmatchedParen { column } => {
                write!(f, "UNMATCHED `)` ({}..{})", column.start, column.end)
            }
            IncompleteName { column, expected } => write!(
                f,
                "INCOMPLETE NAME ({}..{}); EXPECTED {}",
                column.start, column.end, expected
            ),
            OutsideRoutine { column, token } => write!(
                f,
                "SYMBOL OUTSIDE ROUTINE ({}..{}); `{}`",
                column.start, column.end, token
            ),
            AdjacentNumbers { column } => write!(
                f,
                "MISSING COMMA BETWEEN NUMBERS ({}..{})",
                column.start, column.end
            ),
            ExpectedLetter { column, token } => write!(
                f,
                "EXPECTED LETTER ({}..{}); FOUND `{}`",
                column.start, column.end, token
            ),
            UnexpectedToken { column, token } => write!(
                f,
                "UNEXPECTED TOKEN ({}..{}); `{}`",
                column.start, column.end, token
            ),
            UnclosedSubroutine { label } => {
                write!(f, "UNCLOSED SUBROUTINE *{}", label)
            }
            UnclosedLoop => write!(f, "UNCLOSED REP AT END OF INPUT"),
            UnnecessaryEnd { column } => write!(
                f,
                "UNNECESSARY `]` CLOSING THE MAIN ROUTINE ({}..{})",
                column.start, column.end
            ),
            UnexpectedEndOfInput { parsing } => {
                write!(f, "UNEXPECTED END OF INPUT WHILE PARSING {}", parsing)
            }
        }
    }
}

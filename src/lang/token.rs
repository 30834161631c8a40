pub use super::letter::Letter;

/// ## Operator identifiers
///
/// Every operator glyph and word is resolved to one of these identifiers
/// at lex time. The execution engine dispatches on the identifier with an
/// exhaustive match; an operator is never re-recognized by string
/// comparison after lexing.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Op {
    // dyadic numeric
    Sub,
    Add,
    Mul,
    Div,
    Pow,
    Max,
    Rem,
    And,
    Or,
    Gt,
    Eq,
    // monadic numeric
    Sqrt,
    Not,
    Neg,
    Abs,
    Log,
    Exp,
    Sin,
    Cos,
    // stack management
    Drop,
    Dup,
    Swap,
    // control
    Jump,
    Call,
    // recognized but not implemented at run time
    Wait,
    Read,
    // print the top of the stack
    Print,
}

impl Op {
    /// Surface spelling, as written in source programs.
    pub fn name(self) -> &'static str {
        use Op::*;
        match self {
            Sub => "-",
            Add => "+",
            Mul => "×",
            Div => "÷",
            Pow => "pow",
            Max => "max",
            Rem => "rem",
            And => "&",
            Or => "∨",
            Gt => ">",
            Eq => "=",
            Sqrt => "√",
            Not => "~",
            Neg => "neg",
            Abs => "mod",
            Log => "log",
            Exp => "exp",
            Sin => "sin",
            Cos => "cos",
            Drop => ";",
            Dup => "dup",
            Swap => "rev",
            Jump => "↑",
            Call => "↓",
            Wait => "wait",
            Read => "R",
            Print => "(P)",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Pipe mark width: `|` selects vector access, `‖` selects matrix access.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Suffix {
    One,
    Two,
}

impl Suffix {
    fn mark(self) -> &'static str {
        match self {
            Suffix::One => "|",
            Suffix::Two => "‖",
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// Unsigned decimal literal, source text preserved.
    Number(String),
    Operator(Op),
    Rep,
    Comma,
    RBracket,
    Asterisk,
    LParen,
    RParen,
    Pipe(Suffix),
    ReadPipe(Suffix),
    PrintPipe(Suffix),
    Letter(Letter),
    Whitespace(usize),
    Unknown(String),
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Token::*;
        match self {
            Number(s) => write!(f, "{}", s),
            Operator(op) => write!(f, "{}", op),
            Rep => write!(f, "rep"),
            Comma => write!(f, ","),
            RBracket => write!(f, "]"),
            Asterisk => write!(f, "*"),
            LParen => write!(f, "("),
            RParen => write!(f, ")"),
            Pipe(s) => write!(f, "{}", s.mark()),
            ReadPipe(s) => write!(f, "R{}", s.mark()),
            PrintPipe(s) => write!(f, "P{}", s.mark()),
            Letter(l) => write!(f, "{}", l),
            Whitespace(u) => write!(f, "{s:>w$}", s = "", w = u),
            Unknown(s) => write!(f, "{}", s),
        }
    }
}

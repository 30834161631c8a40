use super::{Access, Action, Address, Program, Routine};
use crate::lang::token::Token;
use crate::lang::{Column, Letter, Lexer, ParseError};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, ParseError>;

/// Compile GEORGE source into a flat `Program`.
///
/// One left-to-right pass over a lazy token stream, no backtracking.
/// Loop and routine structure is recognized as it goes: `rep` pushes a
/// reentry point, `]` closes the innermost open loop or else the current
/// routine, and `*label` either marks a jump target (inside a routine) or
/// opens a subroutine (between routines).
pub fn compile(source: &str) -> Result<Program> {
    Compiler::new(source).compile()
}

struct Compiler<'a> {
    lexer: std::iter::Peekable<Lexer<'a>>,
    peeked: Option<Token>,
    col: Column,
    actions: Vec<Action>,
    jmp_indices: HashMap<u32, Address>,
    sub_indices: HashMap<u32, Address>,
    /// `None` between routines, where only `*` is legal.
    current: Option<Routine>,
    /// Reentry points of the open `rep` loops, innermost last.
    reps: Vec<Address>,
    prev_comma: bool,
    prev_number: bool,
}

impl<'a> Compiler<'a> {
    fn new(source: &'a str) -> Compiler<'a> {
        Compiler {
            lexer: Lexer::new(source).peekable(),
            peeked: None,
            col: 0..0,
            actions: vec![],
            jmp_indices: HashMap::new(),
            sub_indices: HashMap::new(),
            current: Some(Routine::Main),
            reps: vec![],
            prev_comma: false,
            prev_number: false,
        }
    }

    fn compile(mut self) -> Result<Program> {
        while let Some(token) = self.next() {
            if self.current.is_none() && token != Token::Asterisk {
                return Err(ParseError::OutsideRoutine {
                    column: self.column(),
                    token: token.to_string(),
                });
            }
            let is_comma = token == Token::Comma;
            self.token(token)?;
            self.prev_comma = is_comma;
        }
        if !self.reps.is_empty() {
            return Err(ParseError::UnclosedLoop);
        }
        match self.current {
            Some(Routine::Main) => self.actions.push(Action::End),
            Some(Routine::Sub(label)) => {
                return Err(ParseError::UnclosedSubroutine { label })
            }
            None => {}
        }
        Ok(Program::new(
            self.actions,
            self.jmp_indices,
            self.sub_indices,
        ))
    }

    fn token(&mut self, token: Token) -> Result<()> {
        let mut numeric = false;
        match token {
            Token::Asterisk => {
                let label = self.label()?;
                match self.current {
                    None => {
                        self.current = Some(Routine::Sub(label));
                        self.sub_indices.insert(label, self.actions.len());
                    }
                    Some(_) => {
                        self.jmp_indices.insert(label, self.actions.len());
                    }
                }
            }
            Token::Number(text) => {
                if self.prev_number && !self.prev_comma {
                    return Err(ParseError::AdjacentNumbers {
                        column: self.column(),
                    });
                }
                let value: f64 = match text.parse() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(ParseError::UnexpectedToken {
                            column: self.column(),
                            token: text,
                        })
                    }
                };
                self.actions.push(Action::Number(value));
                numeric = true;
            }
            Token::Operator(op) => self.actions.push(Action::Operator(op)),
            Token::Comma => numeric = self.prev_number,
            Token::RBracket => self.close()?,
            Token::Rep => {
                let letter = self.name(false)?;
                self.actions.push(Action::LoopStart(letter));
                self.reps.push(self.actions.len());
            }
            Token::Letter(letter) => {
                self.actions.push(Action::MemoryRead(letter, Access::Scalar))
            }
            Token::LParen => {
                let letter = self.name(true)?;
                self.actions
                    .push(Action::MemoryWrite(letter, Access::Scalar));
            }
            Token::RParen => {
                return Err(ParseError::UnmatchedParen {
                    column: self.column(),
                })
            }
            Token::Pipe(suffix) => {
                let access = Access::from(suffix);
                if let Some(Token::LParen) = self.peek() {
                    let letter = self.name(false)?;
                    self.actions.push(Action::MemoryWrite(letter, access));
                } else {
                    match self.next() {
                        Some(Token::Letter(letter)) => {
                            self.actions.push(Action::MemoryRead(letter, access))
                        }
                        Some(other) => {
                            return Err(ParseError::ExpectedLetter {
                                column: self.column(),
                                token: other.to_string(),
                            })
                        }
                        None => {
                            return Err(ParseError::UnexpectedEndOfInput {
                                parsing: "A MEMORY ACCESS",
                            })
                        }
                    }
                }
            }
            Token::PrintPipe(suffix) => {
                let letter = self.name(false)?;
                self.actions.push(Action::Print(letter, Access::from(suffix)));
            }
            Token::ReadPipe(suffix) => {
                let letter = self.name(false)?;
                self.actions.push(Action::Read(letter, Access::from(suffix)));
            }
            Token::Unknown(text) => {
                return Err(ParseError::UnexpectedToken {
                    column: self.column(),
                    token: text,
                })
            }
            Token::Whitespace(_) => {}
        }
        self.prev_number = numeric;
        Ok(())
    }

    /// `]` closes the innermost open loop, else the current routine.
    fn close(&mut self) -> Result<()> {
        if let Some(reentry) = self.reps.pop() {
            self.actions.push(Action::LoopEnd(reentry));
            return Ok(());
        }
        match self.current {
            Some(Routine::Main) => {
                // a main routine ends at end of input; `]` here is only
                // meaningful with subroutines following
                if !self.input_remains() {
                    return Err(ParseError::UnnecessaryEnd {
                        column: self.column(),
                    });
                }
                self.actions.push(Action::End);
            }
            Some(Routine::Sub(_)) => self.actions.push(Action::SubReturn),
            None => {
                return Err(ParseError::OutsideRoutine {
                    column: self.column(),
                    token: Token::RBracket.to_string(),
                })
            }
        }
        self.current = None;
        Ok(())
    }

    /// A label is the non-negative integer number after `*`.
    fn label(&mut self) -> Result<u32> {
        match self.next() {
            Some(Token::Number(text)) => {
                let value: f64 = match text.parse() {
                    Ok(value) => value,
                    Err(_) => {
                        return Err(ParseError::MalformedLabel {
                            column: self.column(),
                        })
                    }
                };
                if value.fract() == 0.0 && value >= 0.0 && value <= u32::max_value() as f64 {
                    Ok(value as u32)
                } else {
                    Err(ParseError::MalformedLabel {
                        column: self.column(),
                    })
                }
            }
            Some(_) => Err(ParseError::MalformedLabel {
                column: self.column(),
            }),
            None => Err(ParseError::UnexpectedEndOfInput { parsing: "A LABEL" }),
        }
    }

    /// A name is a letter in parentheses with no interior whitespace.
    fn name(&mut self, skip_lparen: bool) -> Result<Letter> {
        if !skip_lparen {
            match self.next() {
                Some(Token::LParen) => {}
                Some(_) => {
                    return Err(ParseError::IncompleteName {
                        column: self.column(),
                        expected: "A NAME",
                    })
                }
                None => return Err(ParseError::UnexpectedEndOfInput { parsing: "A NAME" }),
            }
        }
        let letter = match self.next_raw() {
            Some(Token::Letter(letter)) => letter,
            Some(_) => {
                return Err(ParseError::IncompleteName {
                    column: self.column(),
                    expected: "A LETTER",
                })
            }
            None => return Err(ParseError::UnexpectedEndOfInput { parsing: "A NAME" }),
        };
        match self.next_raw() {
            Some(Token::RParen) => Ok(letter),
            Some(_) => Err(ParseError::IncompleteName {
                column: self.column(),
                expected: "A CLOSING PAREN",
            }),
            None => Err(ParseError::UnexpectedEndOfInput { parsing: "A NAME" }),
        }
    }

    fn column(&self) -> Column {
        self.col.clone()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.lexer.next()?;
        self.col.start = self.col.end;
        self.col.end += token.to_string().chars().count();
        Some(token)
    }

    /// Next token, whitespace included. Used inside name literals.
    fn next_raw(&mut self) -> Option<Token> {
        if self.peeked.is_some() {
            return self.peeked.take();
        }
        self.advance()
    }

    /// Next non-whitespace token.
    fn next(&mut self) -> Option<Token> {
        loop {
            let token = self.next_raw()?;
            if let Token::Whitespace(_) = token {
                continue;
            }
            return Some(token);
        }
    }

    /// Peek the next non-whitespace token.
    fn peek(&mut self) -> Option<&Token> {
        if self.peeked.is_none() {
            self.peeked = self.next();
        }
        self.peeked.as_ref()
    }

    /// Raw end-of-input test; trailing whitespace still counts as input.
    fn input_remains(&mut self) -> bool {
        self.peeked.is_some() || self.lexer.peek().is_some()
    }
}

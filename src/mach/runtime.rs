use super::{Access, Action, Address, Memory, Operation, Program, Routine, RuntimeError, Stack};
use crate::lang::token::Op;
use crate::lang::Letter;
use std::time::{Duration, Instant};

type Result<T> = std::result::Result<T, RuntimeError>;

/// Why a run stopped. Hitting a resource limit is cooperative cancellation
/// for unbounded programs, not an error.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StopReason {
    Completed,
    OutputLimitReached,
    TimeLimitReached,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Write each printed line to process stdout as it happens.
    pub emit_stdout: bool,
    /// Accumulate printed lines into the returned output string.
    pub capture: bool,
    /// Stop once this many output bytes have accumulated.
    pub output_limit: usize,
    /// Stop once this much wall-clock time has elapsed.
    pub time_limit: Duration,
}

impl Default for RunOptions {
    fn default() -> RunOptions {
        RunOptions {
            emit_stdout: false,
            capture: true,
            output_limit: 16384,
            time_limit: Duration::from_millis(2000),
        }
    }
}

impl RunOptions {
    /// Stream to stdout instead of capturing.
    pub fn stdout() -> RunOptions {
        RunOptions {
            emit_stdout: true,
            capture: false,
            ..RunOptions::default()
        }
    }
}

/// The result of a completed (not aborted) run.
#[derive(Debug, PartialEq)]
pub struct Execution {
    pub output: String,
    pub reason: StopReason,
    /// Final value stack, bottom first.
    pub stack: Vec<f64>,
}

/// Run a program to completion or to a resource limit.
pub fn run(program: &Program, options: RunOptions) -> Result<Execution> {
    let mut runtime = Runtime::new(program, options);
    let reason = runtime.run()?;
    Ok(Execution {
        reason,
        output: runtime.output,
        stack: runtime.stack.into_values(),
    })
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    routine: Routine,
    return_index: Address,
}

#[derive(Debug, Clone, Copy)]
struct Rep {
    letter: Letter,
    max: f64,
    reentry: Address,
}

/// ## Execution engine
///
/// A stack machine over the flat action sequence. The program counter is
/// advanced at fetch time; jumps, calls, and loop reentries overwrite it
/// with their exact target.
pub struct Runtime<'a> {
    program: &'a Program,
    options: RunOptions,
    stack: Stack,
    memory: Memory,
    routine: Routine,
    pc: Address,
    calls: Vec<Frame>,
    reps: Vec<Rep>,
    /// Armed by `>` and `=`; makes the next jump or call conditional.
    conditional: bool,
    output: String,
    output_len: usize,
    started: Instant,
}

impl<'a> Runtime<'a> {
    pub fn new(program: &'a Program, options: RunOptions) -> Runtime<'a> {
        Runtime {
            program,
            options,
            stack: Stack::new(),
            memory: Memory::new(),
            routine: Routine::Main,
            pc: 0,
            calls: vec![],
            reps: vec![],
            conditional: false,
            output: String::new(),
            output_len: 0,
            started: Instant::now(),
        }
    }

    pub fn run(&mut self) -> Result<StopReason> {
        loop {
            if self.output_len >= self.options.output_limit {
                return Ok(StopReason::OutputLimitReached);
            }
            if self.started.elapsed() >= self.options.time_limit {
                return Ok(StopReason::TimeLimitReached);
            }
            let action = self.program.action(self.pc);
            self.pc += 1;
            match action {
                Action::Number(value) => self.stack.push(value),
                Action::Operator(op) => self.operator(op)?,
                Action::MemoryRead(letter, access) => self.load(letter, access)?,
                Action::MemoryWrite(letter, access) => self.store(letter, access)?,
                Action::Print(letter, access) => self.print(letter, access)?,
                Action::Read(..) => {
                    return Err(RuntimeError::NotImplemented { feature: "READ" })
                }
                Action::LoopStart(letter) => self.loop_start(letter)?,
                Action::LoopEnd(_) => self.loop_end()?,
                Action::SubReturn => self.sub_return()?,
                Action::End => return Ok(StopReason::Completed),
            }
        }
    }

    pub fn stack(&self) -> &[f64] {
        self.stack.values()
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    fn operator(&mut self, op: Op) -> Result<()> {
        use Op::*;
        match op {
            Jump => {
                let label = self.destination(op)?;
                if self.should_act()? {
                    match self.jmp_target(label) {
                        Some(addr) => self.pc = addr,
                        None => return Err(RuntimeError::NoJumpTarget { label }),
                    }
                }
            }
            Call => {
                let label = self.destination(op)?;
                if self.should_act()? {
                    match self.sub_target(label) {
                        Some((id, addr)) => {
                            self.calls.push(Frame {
                                routine: self.routine,
                                return_index: self.pc,
                            });
                            self.routine = Routine::Sub(id);
                            self.pc = addr;
                        }
                        None => return Err(RuntimeError::NoSubroutine { label }),
                    }
                }
            }
            Drop => {
                self.stack.pop(op.name())?;
            }
            Dup => {
                let value = self.stack.peek(op.name())?;
                self.stack.push(value);
            }
            Swap => {
                let (a, b) = self.stack.pop_2(op.name())?;
                self.stack.push(b);
                self.stack.push(a);
            }
            Print => {
                let value = self.stack.peek(op.name())?;
                self.print_line(value);
            }
            Wait => return Err(RuntimeError::NotImplemented { feature: "WAIT" }),
            Read => return Err(RuntimeError::NotImplemented { feature: "READ" }),
            Gt | Eq => {
                let (a, b) = self.stack.pop_2(op.name())?;
                self.stack.push(match op {
                    Gt => Operation::greater(a, b),
                    _ => Operation::equal(a, b),
                });
                self.conditional = true;
            }
            Sqrt | Not | Neg | Abs | Log | Exp | Sin | Cos => {
                let a = self.stack.pop(op.name())?;
                self.stack.push(match op {
                    Sqrt => Operation::square_root(a),
                    Not => Operation::complement(a),
                    Neg => Operation::negate(a),
                    Abs => Operation::absolute(a),
                    Log => Operation::natural_log(a),
                    Exp => Operation::exponential(a),
                    Sin => Operation::sine(a),
                    _ => Operation::cosine(a),
                });
            }
            Sub | Add | Mul | Div | Pow | Max | Rem | And | Or => {
                let (a, b) = self.stack.pop_2(op.name())?;
                self.stack.push(match op {
                    Sub => Operation::subtract(a, b),
                    Add => Operation::sum(a, b),
                    Mul => Operation::multiply(a, b),
                    Div => Operation::divide(a, b),
                    Pow => Operation::power(a, b),
                    Max => Operation::maximum(a, b),
                    Rem => Operation::modulus(a, b),
                    And => Operation::conjunction(a, b),
                    _ => Operation::disjunction(a, b),
                });
            }
        }
        Ok(())
    }

    fn load(&mut self, letter: Letter, access: Access) -> Result<()> {
        let value = match access {
            Access::Scalar => self.memory.scalar(letter),
            Access::Vector => {
                let i = self.stack.pop("|")?;
                self.memory.vector(letter, i)
            }
            Access::Matrix => {
                self.stack.require("‖", 2)?;
                let j = self.stack.pop("‖")?;
                let i = self.stack.pop("‖")?;
                self.memory.matrix(letter, i, j)
            }
        };
        self.stack.push(value);
        Ok(())
    }

    /// Writes peek the assigned value; it stays on the stack. The index
    /// operands are popped, innermost last pushed.
    fn store(&mut self, letter: Letter, access: Access) -> Result<()> {
        match access {
            Access::Scalar => {
                let value = self.stack.peek("()")?;
                self.memory.set_scalar(letter, value);
            }
            Access::Vector => {
                self.stack.require("|()", 2)?;
                let i = self.stack.pop("|()")?;
                let value = self.stack.peek("|()")?;
                self.memory.set_vector(letter, i, value);
            }
            Access::Matrix => {
                self.stack.require("‖()", 3)?;
                let j = self.stack.pop("‖()")?;
                let i = self.stack.pop("‖()")?;
                let value = self.stack.peek("‖()")?;
                self.memory.set_matrix(letter, i, j, value);
            }
        }
        Ok(())
    }

    fn print(&mut self, letter: Letter, access: Access) -> Result<()> {
        match access {
            Access::Scalar => {
                let value = self.memory.scalar(letter);
                self.print_line(value);
                Ok(())
            }
            Access::Vector => Err(RuntimeError::NotImplemented {
                feature: "VECTOR PRINT",
            }),
            Access::Matrix => Err(RuntimeError::NotImplemented {
                feature: "MATRIX PRINT",
            }),
        }
    }

    fn loop_start(&mut self, letter: Letter) -> Result<()> {
        let (init, max) = self.stack.pop_2("rep")?;
        if init.fract() != 0.0 || max.fract() != 0.0 || max <= init {
            return Err(RuntimeError::BadLoopBounds { init, max });
        }
        self.memory.set_scalar(letter, init);
        // pc already points at the first body action
        self.reps.push(Rep {
            letter,
            max,
            reentry: self.pc,
        });
        Ok(())
    }

    fn loop_end(&mut self) -> Result<()> {
        let rep = match self.reps.last() {
            Some(rep) => *rep,
            None => return Err(RuntimeError::LoopEndWithoutLoop),
        };
        let count = self.memory.scalar(rep.letter);
        if count < rep.max {
            self.memory.set_scalar(rep.letter, count + 1.0);
            self.pc = rep.reentry;
        } else {
            self.reps.pop();
        }
        Ok(())
    }

    fn sub_return(&mut self) -> Result<()> {
        match self.calls.pop() {
            Some(frame) => {
                self.routine = frame.routine;
                self.pc = frame.return_index;
                Ok(())
            }
            None => Err(RuntimeError::ReturnWithoutCall),
        }
    }

    /// Skip destinations are taken modulo 32.
    fn destination(&mut self, op: Op) -> Result<f64> {
        let raw = self.stack.pop(op.name())?;
        Ok(Operation::modulus(raw, 32.0))
    }

    /// Unconditional unless a comparison armed the flag; then one more
    /// value is popped and any nonzero value means act. The flag is
    /// cleared either way.
    fn should_act(&mut self) -> Result<bool> {
        let act = if self.conditional {
            self.stack.pop("CONDITIONAL BRANCH")? != 0.0
        } else {
            true
        };
        self.conditional = false;
        Ok(act)
    }

    fn jmp_target(&self, label: f64) -> Option<Address> {
        if label.fract() != 0.0 {
            return None;
        }
        self.program.jmp_index(label as u32)
    }

    fn sub_target(&self, label: f64) -> Option<(u32, Address)> {
        if label.fract() != 0.0 {
            return None;
        }
        let id = label as u32;
        self.program.sub_index(id).map(|addr| (id, addr))
    }

    fn print_line(&mut self, value: f64) {
        let line = value.to_string();
        if self.options.capture {
            self.output.push_str(&line);
            self.output.push('\n');
        }
        if self.options.emit_stdout {
            println!("{}", line);
        }
        self.output_len += line.len() + 1;
    }
}

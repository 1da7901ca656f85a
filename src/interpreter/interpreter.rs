use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::lexer::Instruction;
use crate::parser::BraceMap;

use super::input::ByteSource;
use super::Machine;

/// Input byte that asks for the run to stop (CTRL+D).
const INTERRUPT_BYTE: u8 = 0x04;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Halt {
    /// The cursor ran off the end of the program
    Completed,
    /// The interrupt sentinel was read, or an external abort was requested
    Aborted,
}

/// Executes a resolved program one instruction at a time against its own
/// machine. Input comes from an injected [`ByteSource`], output goes to
/// an injected stream.
pub struct Interpreter<'a> {
    machine: Machine,
    input: Box<dyn ByteSource + 'a>,
    output: Box<dyn Write + 'a>,
    step_mode: bool,
    abort: Arc<AtomicBool>,
}

impl<'a> Interpreter<'a> {
    pub fn new(input: Box<dyn ByteSource + 'a>, output: Box<dyn Write + 'a>) -> Self {
        Self {
            machine: Machine::new(),
            input,
            output,
            step_mode: false,
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Pause after every instruction and display the machine state.
    pub fn with_step_mode(mut self, step_mode: bool) -> Self {
        self.step_mode = step_mode;
        self
    }

    /// Flag observed between instructions; setting it makes the run halt
    /// `Aborted` before the next instruction executes.
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    pub fn machine(&self) -> &Machine {
        &self.machine
    }

    /// Executes `program` to completion or abort. `braces` must have
    /// been resolved against this exact program.
    pub fn run(&mut self, program: &[Instruction], braces: &BraceMap) -> io::Result<Halt> {
        self.machine.reset();
        let mut cursor = 0;

        while cursor < program.len() {
            if self.abort.load(Ordering::Relaxed) {
                return Ok(Halt::Aborted);
            }

            let instruction = program[cursor];
            match instruction {
                Instruction::Increment => self.machine.increment(1),
                Instruction::Decrement => self.machine.decrement(1),
                Instruction::MoveLeft => self.machine.move_left(1),
                Instruction::MoveRight => self.machine.move_right(1),
                Instruction::Output => {
                    write!(self.output, "{}", char::from(self.machine.read()))?;
                    self.output.flush()?;
                }
                Instruction::Input => match self.input.next_byte() {
                    Some(INTERRUPT_BYTE) => return Ok(Halt::Aborted),
                    Some(byte) => self.machine.write(byte),
                    None => self.machine.write(0),
                },
                Instruction::LoopOpen => {
                    if self.machine.read() == 0 {
                        cursor = jump_target(braces.close_of(cursor), cursor);
                    }
                }
                Instruction::LoopClose => {
                    if self.machine.read() != 0 {
                        cursor = jump_target(braces.open_of(cursor), cursor);
                    }
                }
            }
            cursor += 1;

            if self.step_mode {
                self.pause(instruction, cursor)?;
            }
        }

        Ok(Halt::Completed)
    }

    fn pause(&mut self, instruction: Instruction, cursor: usize) -> io::Result<()> {
        writeln!(self.output, "\n{}", self.machine.snapshot(5))?;
        writeln!(self.output, "symbol: {} , cursor: {cursor}", instruction.to_char())?;
        self.output.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(())
    }
}

/// A jump without a boundary mapping means an earlier stage handed over
/// an unvalidated program; there is nothing sensible to recover to.
fn jump_target(target: Option<usize>, cursor: usize) -> usize {
    match target {
        Some(position) => position,
        None => panic!("no matching bracket recorded for position {cursor}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::input::{NoInput, Preloaded};
    use crate::lexer::lexer::Lexer;
    use crate::parser::parser::Parser;
    use pretty_assertions::assert_eq;

    fn execute(text: &str, input: Box<dyn ByteSource>) -> (Halt, Vec<u8>, Vec<u8>) {
        let program = Lexer::new(text).collect_program();
        let braces = Parser::new(&program).resolve_braces().unwrap();

        let mut output = Vec::new();
        let (halt, cells) = {
            let mut interpreter = Interpreter::new(input, Box::new(&mut output));
            let halt = interpreter.run(&program, &braces).unwrap();
            (halt, interpreter.machine().cells()[..8].to_vec())
        };
        (halt, output, cells)
    }

    #[test]
    fn outputs_the_cell_value_as_a_character() {
        let (halt, output, _) = execute("+++.", Box::new(NoInput));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(output, b"\x03");
    }

    #[test]
    fn loops_run_until_the_cell_is_zero() {
        // two iterations each adding 2 to the next cell
        let (halt, output, _) = execute("++[>++<-]>.", Box::new(NoInput));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(output, b"\x04");
    }

    #[test]
    fn zero_cell_skips_the_loop_without_touching_io() {
        let (halt, output, cells) = execute("[,.]", Box::new(Preloaded::new(vec![b'x'])));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(output, b"");
        assert_eq!(cells[0], 0);
    }

    #[test]
    fn empty_program_completes_immediately() {
        let (halt, output, _) = execute("", Box::new(NoInput));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(output, b"");
    }

    #[test]
    fn input_stores_bytes_in_order() {
        let (halt, output, _) = execute(",.,.", Box::new(Preloaded::new(vec![b'h', b'i'])));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(output, b"hi");
    }

    #[test]
    fn exhausted_input_stores_the_no_input_sentinel() {
        let (halt, _, cells) = execute("+,", Box::new(NoInput));
        assert_eq!(halt, Halt::Completed);
        assert_eq!(cells[0], 0);
    }

    #[test]
    fn interrupt_byte_aborts_without_writing() {
        let (halt, output, cells) = execute("++,.", Box::new(Preloaded::new(vec![0x04])));
        assert_eq!(halt, Halt::Aborted);
        assert_eq!(output, b"");
        assert_eq!(cells[0], 2);
    }

    #[test]
    fn abort_flag_stops_the_run_between_instructions() {
        let program = Lexer::new("+[]").collect_program();
        let braces = Parser::new(&program).resolve_braces().unwrap();

        let mut output = Vec::new();
        let mut interpreter = Interpreter::new(Box::new(NoInput), Box::new(&mut output));
        interpreter.abort_flag().store(true, Ordering::Relaxed);
        // `+[]` would spin forever; the flag is checked before each step
        let halt = interpreter.run(&program, &braces).unwrap();
        assert_eq!(halt, Halt::Aborted);
    }

    #[test]
    fn high_cell_values_come_out_as_one_character() {
        // 0xE9 prints as 'é', two bytes of UTF-8
        let mut text = String::new();
        for _ in 0..233 {
            text.push('+');
        }
        text.push('.');
        let (_, output, _) = execute(&text, Box::new(NoInput));
        assert_eq!(String::from_utf8(output).unwrap(), "é");
    }
}

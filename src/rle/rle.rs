use std::iter::Peekable;

use crate::lexer::Instruction;

use super::RleInst;

/// Merges runs of identical arithmetic/movement instructions into one
/// counted instruction each. Brackets and I/O terminate the current run
/// and are emitted on their own, even when textually repeated.
pub fn to_rle(program: &[Instruction]) -> Vec<RleInst> {
    let mut instructions = Vec::with_capacity(program.len());
    let mut iter = program.iter().peekable();

    while let Some(&instruction) = iter.next() {
        instructions.push(match instruction {
            Instruction::Increment => RleInst::Add(take_run(&mut iter, instruction)),
            Instruction::Decrement => RleInst::Sub(take_run(&mut iter, instruction)),
            Instruction::MoveLeft => RleInst::MoveLeft(take_run(&mut iter, instruction)),
            Instruction::MoveRight => RleInst::MoveRight(take_run(&mut iter, instruction)),
            Instruction::Output => RleInst::Output,
            Instruction::Input => RleInst::Input,
            Instruction::LoopOpen => RleInst::LoopOpen,
            Instruction::LoopClose => RleInst::LoopClose,
        });
    }

    instructions
}

/// Consumes instructions matching `current` and returns the run length,
/// the consumed instructions included plus the one already taken.
fn take_run(
    iter: &mut Peekable<std::slice::Iter<'_, Instruction>>,
    current: Instruction,
) -> usize {
    let mut count = 1;
    while iter.peek() == Some(&&current) {
        count += 1;
        iter.next();
    }
    count
}

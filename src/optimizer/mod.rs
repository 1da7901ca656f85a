pub mod dead_code;
pub mod leading_loop;

use crate::lexer::Instruction;

use self::dead_code::{cancel_adjacent_pairs, remove_empty_loops};
use self::leading_loop::strip_leading_loop;

/// Removes instructions that can never have an observable effect.
///
/// The pair and empty-loop rewrites run to a fixpoint; the leading-loop
/// strip runs exactly once, after the first fixpoint so that cancelled
/// pairs in front of a loop expose it as leading, and before the second
/// so that a body emptied by the strip still collapses.
///
/// Expects a balanced program; validation happens before minimization.
pub fn minimize(program: Vec<Instruction>) -> Vec<Instruction> {
    let program = fixpoint(program);
    let program = strip_leading_loop(program);
    fixpoint(program)
}

/// Repeats both rewrites until a full pass removes nothing. Every
/// productive pass shrinks the program by at least two instructions, so
/// this terminates within `len / 2` passes.
fn fixpoint(mut program: Vec<Instruction>) -> Vec<Instruction> {
    loop {
        let length_before = program.len();
        program = cancel_adjacent_pairs(program);
        program = remove_empty_loops(program);
        if program.len() == length_before {
            return program;
        }
    }
}

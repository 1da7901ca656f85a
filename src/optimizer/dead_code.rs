use crate::lexer::Instruction;

/// Deletes adjacent pairs whose net effect is nothing: `><`, `<>`, `+-`
/// and `-+`. Only those four kinds — I/O and brackets are observable and
/// never cancel.
///
/// Works like a stack: an instruction that cancels against the last kept
/// one pops it instead of being pushed, so pairs exposed by an earlier
/// deletion (`+<>-`) go in the same pass.
pub fn cancel_adjacent_pairs(program: Vec<Instruction>) -> Vec<Instruction> {
    let mut kept: Vec<Instruction> = Vec::with_capacity(program.len());
    for instruction in program {
        match kept.last() {
            Some(&previous) if cancels(previous, instruction) => {
                kept.pop();
            }
            _ => kept.push(instruction),
        }
    }
    kept
}

fn cancels(a: Instruction, b: Instruction) -> bool {
    use Instruction::*;
    matches!(
        (a, b),
        (MoveRight, MoveLeft) | (MoveLeft, MoveRight) | (Increment, Decrement) | (Decrement, Increment)
    )
}

/// Deletes `[]` loops with nothing between the brackets. A `]` directly
/// after a `[` is always its own match, so no boundary map is needed
/// here; removing one pair can expose another (`[[]]`), which the same
/// pass catches.
pub fn remove_empty_loops(program: Vec<Instruction>) -> Vec<Instruction> {
    let mut kept: Vec<Instruction> = Vec::with_capacity(program.len());
    for instruction in program {
        if instruction == Instruction::LoopClose && kept.last() == Some(&Instruction::LoopOpen) {
            kept.pop();
        } else {
            kept.push(instruction);
        }
    }
    kept
}

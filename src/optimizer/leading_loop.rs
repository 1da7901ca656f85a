use crate::lexer::Instruction;

/// A loop that is the program's very first instruction can never run:
/// every cell is zero before anything executes, so the `[` jumps straight
/// past its body. Such loops are conventionally used as comment blocks.
///
/// Only the outermost leading loop is stripped, and only once; a second
/// leading loop exposed by the strip is deliberately left in place.
pub fn strip_leading_loop(program: Vec<Instruction>) -> Vec<Instruction> {
    if program.first() != Some(&Instruction::LoopOpen) {
        return program;
    }

    let mut depth = 0usize;
    for (position, instruction) in program.iter().enumerate() {
        match instruction {
            Instruction::LoopOpen => depth += 1,
            Instruction::LoopClose => {
                depth -= 1;
                if depth == 0 {
                    return program[position + 1..].to_vec();
                }
            }
            _ => {}
        }
    }

    // unbalanced; left for the resolver to reject
    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn stripped(text: &str) -> String {
        strip_leading_loop(Lexer::new(text).collect_program())
            .iter()
            .map(|i| i.to_char())
            .collect()
    }

    #[test]
    fn strips_a_leading_loop_with_its_close() {
        assert_eq!(stripped("[+>.<]-"), "-");
    }

    #[test]
    fn strips_nested_leading_loops_whole() {
        assert_eq!(stripped("[[-][+]]>"), ">");
    }

    #[test]
    fn leaves_programs_not_starting_with_a_loop() {
        assert_eq!(stripped("+[-]"), "+[-]");
        assert_eq!(stripped(""), "");
    }

    #[test]
    fn strips_only_the_first_leading_loop() {
        assert_eq!(stripped("[.][.]"), "[.]");
    }
}

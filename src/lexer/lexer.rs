use super::Instruction;

/// Strips raw source text down to the eight instruction symbols, in
/// original order. Every other character is a comment.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(text: &'a str) -> Lexer<'a> {
        Lexer {
            chars: text.chars(),
        }
    }

    /// The next instruction symbol, or `None` once the text is exhausted.
    pub fn next_instruction(&mut self) -> Option<Instruction> {
        for c in self.chars.by_ref() {
            if let Some(instruction) = Instruction::from_char(c) {
                return Some(instruction);
            }
        }
        None
    }

    pub fn collect_program(&mut self) -> Vec<Instruction> {
        let mut program = vec![];
        while let Some(instruction) = self.next_instruction() {
            program.push(instruction);
        }
        program
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Instruction::*;
    use pretty_assertions::assert_eq;
    use quickcheck::quickcheck;

    #[test]
    fn keeps_instructions_in_order() {
        let program = Lexer::new("+-<>.,[]").collect_program();
        assert_eq!(
            program,
            vec![Increment, Decrement, MoveLeft, MoveRight, Output, Input, LoopOpen, LoopClose]
        );
    }

    #[test]
    fn skips_comment_characters() {
        let program = Lexer::new("add two + + then loop [ down - ]").collect_program();
        assert_eq!(program, vec![Increment, Increment, LoopOpen, Decrement, LoopClose]);
    }

    #[test]
    fn empty_text_is_an_empty_program() {
        assert_eq!(Lexer::new("").collect_program(), vec![]);
        assert_eq!(Lexer::new("no instructions here").collect_program(), vec![]);
    }

    quickcheck! {
        fn filtering_is_idempotent(text: String) -> bool {
            let once: String = Lexer::new(&text)
                .collect_program()
                .iter()
                .map(|i| i.to_char())
                .collect();
            let twice = Lexer::new(&once).collect_program();
            twice.iter().map(|i| i.to_char()).collect::<String>() == once
        }
    }
}

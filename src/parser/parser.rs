use crate::lexer::Instruction;

use super::{BraceMap, ParseError};

/// Resolves loop boundaries over a filtered program.
pub struct Parser<'a> {
    program: &'a [Instruction],
}

impl<'a> Parser<'a> {
    pub fn new(program: &'a [Instruction]) -> Parser<'a> {
        Parser { program }
    }

    /// Single left-to-right scan with a stack of open positions: push on
    /// `[`, pop-and-pair on `]`. A `]` with an empty stack or a leftover
    /// `[` at the end means the program is unbalanced.
    pub fn resolve_braces(&self) -> Result<BraceMap, ParseError> {
        let mut braces = BraceMap::default();
        let mut open_positions = vec![];

        for (position, instruction) in self.program.iter().enumerate() {
            match instruction {
                Instruction::LoopOpen => open_positions.push(position),
                Instruction::LoopClose => match open_positions.pop() {
                    Some(open) => braces.pair(open, position),
                    None => return Err(self.mismatch()),
                },
                _ => {}
            }
        }

        if open_positions.is_empty() {
            Ok(braces)
        } else {
            Err(self.mismatch())
        }
    }

    fn mismatch(&self) -> ParseError {
        let count = |wanted: Instruction| self.program.iter().filter(|&&i| i == wanted).count();
        ParseError::MismatchedBrackets {
            opens: count(Instruction::LoopOpen),
            closes: count(Instruction::LoopClose),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lexer::Lexer;
    use pretty_assertions::assert_eq;

    fn resolve(text: &str) -> Result<BraceMap, ParseError> {
        let program = Lexer::new(text).collect_program();
        Parser::new(&program).resolve_braces()
    }

    #[test]
    fn pairs_nested_loops() {
        // positions: 0 `[`, 2 `[`, 4 `]`, 6 `]`
        let braces = resolve("[+[-]+]").unwrap();
        assert_eq!(braces.close_of(0), Some(6));
        assert_eq!(braces.close_of(2), Some(4));
        assert_eq!(braces.len(), 2);
    }

    #[test]
    fn pairs_sequential_loops() {
        let braces = resolve("[-][-]").unwrap();
        assert_eq!(braces.close_of(0), Some(2));
        assert_eq!(braces.close_of(3), Some(5));
    }

    #[test]
    fn map_is_its_own_inverse() {
        let braces = resolve("[[[-]]][,]").unwrap();
        for open in [0, 1, 2, 7] {
            let close = braces.close_of(open).unwrap();
            assert!(close > open);
            assert_eq!(braces.open_of(close), Some(open));
        }
    }

    #[test]
    fn no_loops_yields_an_empty_map() {
        assert!(resolve("+-<>.,").unwrap().is_empty());
    }

    #[test]
    fn rejects_unbalanced_programs() {
        assert_eq!(
            resolve("[[-]"),
            Err(ParseError::MismatchedBrackets { opens: 2, closes: 1 })
        );
        assert_eq!(
            resolve("[-]]"),
            Err(ParseError::MismatchedBrackets { opens: 1, closes: 2 })
        );
        // equal counts, but the `]` comes first
        assert_eq!(
            resolve("]["),
            Err(ParseError::MismatchedBrackets { opens: 1, closes: 1 })
        );
    }
}

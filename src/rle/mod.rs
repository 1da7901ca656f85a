use std::fmt;

pub mod rle;

/// A run-length encoded instruction. The count is only meaningful for
/// the four arithmetic/movement kinds; brackets and I/O always stand for
/// exactly one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RleInst {
    /// `+` repeated `count` times
    Add(usize),

    /// `-` repeated `count` times
    Sub(usize),

    /// `<` repeated `count` times
    MoveLeft(usize),

    /// `>` repeated `count` times
    MoveRight(usize),

    /// A single `.`; every output is observable on its own
    Output,

    /// A single `,`; every read consumes distinct input
    Input,

    /// A single `[`; repeated brackets delimit distinct loop nests
    LoopOpen,

    /// A single `]`
    LoopClose,
}

impl fmt::Display for RleInst {
    /// Compact intermediate notation, one mnemonic per instruction with
    /// `=count` appended for counts above one: `a=3;ml;{;ptch;};`
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RleInst::Add(count) => counted(f, "a", count),
            RleInst::Sub(count) => counted(f, "s", count),
            RleInst::MoveLeft(count) => counted(f, "ml", count),
            RleInst::MoveRight(count) => counted(f, "mr", count),
            RleInst::Output => write!(f, "ptch;"),
            RleInst::Input => write!(f, "gtch;"),
            RleInst::LoopOpen => write!(f, "{{;"),
            RleInst::LoopClose => write!(f, "}};"),
        }
    }
}

fn counted(f: &mut fmt::Formatter, mnemonic: &str, count: usize) -> fmt::Result {
    if count <= 1 {
        write!(f, "{mnemonic};")
    } else {
        write!(f, "{mnemonic}={count};")
    }
}

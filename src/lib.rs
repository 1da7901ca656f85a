//! brainmill interprets Brainfuck programs and translates them to C.
//!
//! The pipeline is shared by both modes: filter the raw text down to the
//! eight instruction symbols, resolve loop boundaries (rejecting
//! unbalanced programs), minimize dead instructions, then either execute
//! the result directly or emit C source for it, optionally through a
//! run-length encoded intermediate form.

pub use codegen::c::{emit, emit_rle};
pub use interpreter::input::{ByteSource, Interactive, NoInput, Preloaded};
pub use interpreter::interpreter::{Halt, Interpreter};
pub use interpreter::{Machine, TAPE_LEN};
pub use lexer::lexer::Lexer;
pub use lexer::Instruction;
pub use optimizer::minimize;
pub use parser::{BraceMap, ParseError};
pub use rle::rle::to_rle;
pub use rle::RleInst;

pub mod codegen;
pub mod interpreter;
pub mod lexer;
pub mod optimizer;
pub mod parser;
pub mod rle;

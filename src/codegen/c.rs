use crate::lexer::Instruction;
use crate::rle::RleInst;

/// Fixed prologue: the cell buffer, the data pointer at its start,
/// unbuffered stdout, and a scratch variable for `getchar`.
const PROLOGUE: &str = "#include <stdio.h>\n\
                        char array[0xffff];\
                        int main(){\
                        char *ptr = array;\
                        setvbuf(stdout, NULL, _IONBF, 0);\
                        int c;\n";

/// Fixed epilogue: a trailing newline, current cell as the exit status.
const EPILOGUE: &str = "\nputchar('\\n');\nreturn *ptr;}";

/// Translates a minimized program, one statement per instruction.
pub fn emit(program: &[Instruction]) -> String {
    let mut source = String::from(PROLOGUE);
    for &instruction in program {
        source.push_str(statement(instruction));
    }
    source.push_str(EPILOGUE);
    source
}

/// Translates the run-length encoded form; a counted instruction becomes
/// one compound assignment instead of a repeated unit statement.
pub fn emit_rle(program: &[RleInst]) -> String {
    let mut source = String::from(PROLOGUE);
    for &instruction in program {
        match instruction {
            RleInst::Add(count) if count > 1 => source.push_str(&format!("*ptr+={count};")),
            RleInst::Add(_) => source.push_str(statement(Instruction::Increment)),
            RleInst::Sub(count) if count > 1 => source.push_str(&format!("*ptr-={count};")),
            RleInst::Sub(_) => source.push_str(statement(Instruction::Decrement)),
            RleInst::MoveLeft(count) if count > 1 => source.push_str(&format!("ptr-={count};")),
            RleInst::MoveLeft(_) => source.push_str(statement(Instruction::MoveLeft)),
            RleInst::MoveRight(count) if count > 1 => source.push_str(&format!("ptr+={count};")),
            RleInst::MoveRight(_) => source.push_str(statement(Instruction::MoveRight)),
            RleInst::Output => source.push_str(statement(Instruction::Output)),
            RleInst::Input => source.push_str(statement(Instruction::Input)),
            RleInst::LoopOpen => source.push_str(statement(Instruction::LoopOpen)),
            RleInst::LoopClose => source.push_str(statement(Instruction::LoopClose)),
        }
    }
    source.push_str(EPILOGUE);
    source
}

fn statement(instruction: Instruction) -> &'static str {
    match instruction {
        Instruction::Increment => "++*ptr;",
        Instruction::Decrement => "--*ptr;",
        Instruction::MoveLeft => "--ptr;",
        Instruction::MoveRight => "++ptr;",
        Instruction::Output => "putchar(*ptr);",
        Instruction::Input => "c=getchar();\nif (c >= 0) *ptr=c;",
        Instruction::LoopOpen => "\nwhile (*ptr) {",
        Instruction::LoopClose => "}\n",
    }
}

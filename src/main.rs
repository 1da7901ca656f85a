use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use clap::{Parser, Subcommand};
use colored::Colorize;

use brainmill::interpreter::input::{ByteSource, Interactive, NoInput, Preloaded};
use brainmill::interpreter::interpreter::{Halt, Interpreter};
use brainmill::{codegen, minimize, to_rle, Instruction, Lexer, Machine};

/// Brainfuck interpreter and Brainfuck-to-C translator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interpret the program
    Run {
        /// The file to operate on
        file: String,

        /// Pause and display the machine after every instruction
        #[arg(short, long)]
        step: bool,

        /// Always deliver the no-input sentinel instead of reading stdin
        #[arg(short, long)]
        no_input: bool,

        /// Read stdin to end before the run and serve it to `,`
        #[arg(short, long)]
        preinput: bool,

        /// Dump the tape to <file>.DMP after the run
        #[arg(short, long)]
        dump: bool,
    },
    /// Translate the program to C
    Translate {
        /// The file to operate on
        file: String,

        /// Route through the run-length optimizer
        #[arg(short, long)]
        optimize: bool,

        /// Save the minimized program text next to the input
        #[arg(short = 's', long)]
        save_minimized: bool,

        /// Save the run-length intermediate text; needs --optimize
        #[arg(long)]
        save_rle: bool,
    },
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    match args.command {
        Command::Run {
            file,
            step,
            no_input,
            preinput,
            dump,
        } => run(&file, step, no_input, preinput, dump),
        Command::Translate {
            file,
            optimize,
            save_minimized,
            save_rle,
        } => translate(&file, optimize, save_minimized, save_rle),
    }
}

fn run(file: &str, step: bool, no_input: bool, preinput: bool, dump: bool) -> io::Result<()> {
    let program = prepare(file);

    let input: Box<dyn ByteSource> = if preinput {
        println!("{}", "Reading preinput; finish with CTRL+D".blue());
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        Box::new(Preloaded::new(buffer))
    } else if no_input {
        Box::new(NoInput)
    } else {
        Box::new(Interactive)
    };

    let braces = brainmill::parser::parser::Parser::new(&program)
        .resolve_braces()
        .expect("minimization keeps brackets balanced");

    let mut interpreter = Interpreter::new(input, Box::new(io::stdout())).with_step_mode(step);

    println!("{}", "Starting execution".blue());
    let now = Instant::now();
    let halt = interpreter.run(&program, &braces)?;
    println!();
    match halt {
        Halt::Completed => println!("{} {:.2?}", "Finished execution in".green(), now.elapsed()),
        Halt::Aborted => println!("{} {:.2?}", "Execution aborted after".yellow(), now.elapsed()),
    }

    if dump {
        dump_tape(file, interpreter.machine())?;
    }
    Ok(())
}

fn translate(file: &str, optimize: bool, save_minimized: bool, save_rle: bool) -> io::Result<()> {
    let program = prepare(file);

    if save_minimized {
        let name = minimized_name(file);
        let text: String = program.iter().map(|i| i.to_char()).collect();
        fs::write(&name, text)?;
        println!("{} {name}", "Minimized program saved to".green());
    }

    println!("{}", "Starting translation".blue());
    let now = Instant::now();
    let source = if optimize {
        let rle = to_rle(&program);
        if save_rle {
            let name = format!("{file}o");
            let text: String = rle.iter().map(|i| i.to_string()).collect();
            fs::write(&name, text)?;
            println!("{} {name}", "Intermediate saved to".green());
        }
        codegen::c::emit_rle(&rle)
    } else {
        if save_rle {
            eprintln!("{}", "--save-rle needs --optimize; skipping".yellow());
        }
        codegen::c::emit(&program)
    };
    println!("{} {:.2?}", "Finished translation in".green(), now.elapsed());

    let output = c_name(file);
    fs::write(&output, source)?;
    println!("{} {output}", "C source saved to".green());
    Ok(())
}

/// Load, filter, validate and minimize one source file. Bracket errors
/// end the process before anything downstream runs.
fn prepare(file: &str) -> Vec<Instruction> {
    let text = match fs::read_to_string(file) {
        Ok(text) => text,
        Err(error) => {
            eprintln!("{} {file}: {error}", "Could not read".red());
            std::process::exit(2);
        }
    };
    println!("{} {file} ({} B)", "Loaded".green(), text.len());

    let program = Lexer::new(&text).collect_program();
    if let Err(error) = brainmill::parser::parser::Parser::new(&program).resolve_braces() {
        eprintln!("{} {error}", "Syntax error:".red());
        std::process::exit(5);
    }

    let now = Instant::now();
    let program = minimize(program);
    println!(
        "{} {} {} {:.2?}",
        "Minimized to".green(),
        program.len(),
        "instructions in".green(),
        now.elapsed()
    );
    program
}

/// First free dump name among `<file>.DMP`, `<file>.DMP1`, …
fn dump_tape(file: &str, machine: &Machine) -> io::Result<()> {
    let mut name = format!("{file}.DMP");
    let mut counter = 0;
    while Path::new(&name).exists() {
        counter += 1;
        if counter > 256 {
            eprintln!("{}", "Could not pick a dump name; delete old dumps".red());
            std::process::exit(1);
        }
        name = format!("{file}.DMP{counter}");
    }
    fs::write(&name, machine.dump())?;
    println!("{} {name}", "Tape dumped to".green());
    Ok(())
}

fn c_name(file: &str) -> String {
    for extension in [".bf", ".b"] {
        if let Some(stem) = file.strip_suffix(extension) {
            return format!("{stem}.c");
        }
    }
    format!("{file}.c")
}

fn minimized_name(file: &str) -> String {
    for extension in [".bf", ".b"] {
        if let Some(stem) = file.strip_suffix(extension) {
            return format!("{stem}_mini{extension}");
        }
    }
    format!("{file}_mini.bf")
}

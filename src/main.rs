use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use linecalc::interpreter::{dispatcher::Interpreter, environment::Environment};
use log::debug;
use rustyline::{DefaultEditor, error::ReadlineError};

/// linecalc is a line-oriented calculator. Each line is an assignment
/// (`x = 3 + 4`) or an expression to evaluate (`x * 2`).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Reads lines from a file instead of an interactive prompt.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Runs the given line and exits. May be repeated; lines run in order,
    /// after those of `--file`.
    #[arg(short, long, value_name = "LINE")]
    eval: Vec<String>,

    /// Registers the extended math builtins (min, abs, sqrt, ln, log, exp,
    /// sin, cos, tan, floor, ceil, round).
    #[arg(short, long)]
    math: bool,

    /// Prints the parsed tree of every line before executing it.
    #[arg(long)]
    ast: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut environment = Environment::new();
    if args.math {
        environment.register_math_builtins();
    }
    let mut shell = Shell { interpreter: Interpreter::with_environment(environment),
                            print_ast:   args.ast, };

    if args.file.is_none() && args.eval.is_empty() {
        return shell.interactive();
    }

    let mut succeeded = true;
    if let Some(path) = &args.file {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      path.display());
            return ExitCode::FAILURE;
        };
        for line in script.lines() {
            succeeded &= shell.run_line(line);
        }
    }
    for line in &args.eval {
        succeeded &= shell.run_line(line);
    }

    if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

struct Shell {
    interpreter: Interpreter,
    print_ast:   bool,
}

impl Shell {
    /// Runs one line and prints its outcome. Returns `false` if the line failed.
    fn run_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return true;
        }

        let statement = match self.interpreter.parse_line(line) {
            Ok(statement) => statement,
            Err(e) => {
                eprintln!("error: {e}");
                return false;
            },
        };
        if self.print_ast {
            println!("{statement:#?}");
        }

        match self.interpreter.execute(statement) {
            Ok(Some(value)) => {
                println!("{value:?}");
                true
            },
            Ok(None) => true,
            Err(e) => {
                eprintln!("error: {e}");
                false
            },
        }
    }

    fn interactive(&mut self) -> ExitCode {
        let mut editor = match DefaultEditor::new() {
            Ok(editor) => editor,
            Err(e) => {
                eprintln!("error: failed to start the line editor: {e}");
                return ExitCode::FAILURE;
            },
        };

        loop {
            match editor.readline(">>> ") {
                Ok(line) => {
                    if matches!(line.trim(), "exit()" | "quit()") {
                        break;
                    }
                    if !line.trim().is_empty()
                       && let Err(e) = editor.add_history_entry(line.as_str())
                    {
                        debug!("failed to record history entry: {e}");
                    }
                    self.run_line(&line);
                },
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(e) => {
                    eprintln!("error: {e}");
                    return ExitCode::FAILURE;
                },
            }
        }

        ExitCode::SUCCESS
    }
}

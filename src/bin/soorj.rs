//! Command-line driver: runs a file, or starts an interactive REPL.

use clap::Parser as ClapParser;
use rustyline::error::ReadlineError;
use rustyline::Editor;
use soorj::ast::Stmt;
use soorj::{parse_source, Engine, SoorjError};
use std::fs;
use std::process::ExitCode;

#[derive(ClapParser, Debug)]
#[clap(name = "soorj", version, about = "Run or explore the Soorj scripting language")]
struct Cli {
    /// Path to a Soorj source file. Omit to start the interactive REPL.
    file: Option<String>,

    /// Increase log verbosity (debug-level driver logging).
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    match &cli.file {
        Some(path) => run_file(path),
        None => {
            repl();
            ExitCode::SUCCESS
        }
    }
}

fn run_file(path: &str) -> ExitCode {
    log::debug!("loading {}", path);
    let source = match fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("Error: File '{}' not found.", path);
            return ExitCode::FAILURE;
        }
        Err(e) => {
            println!("Error reading file: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let engine = Engine::new();
    let env = engine.new_root_environment();
    if let Err(e) = engine.run_source(&source, &env) {
        log::error!("{}", e);
        println!("Error: {}", e);
    }
    ExitCode::SUCCESS
}

fn repl() {
    println!("Soorj REPL — type .help for commands, .exit to quit.");
    let engine = Engine::new();
    let env = engine.new_root_environment();
    let mut rl = Editor::<()>::new().expect("failed to start line editor");

    loop {
        match rl.readline("soorj> ") {
            Ok(line) => {
                let trimmed = line.trim();
                rl.add_history_entry(line.as_str());
                if trimmed.is_empty() {
                    continue;
                }
                match trimmed {
                    ".exit" => {
                        println!("Ցտեսություն! (Goodbye!)");
                        break;
                    }
                    ".help" => print_help(),
                    ".clear" => clear_screen(),
                    ".example" => print_example(),
                    _ => run_repl_line(&engine, &env, trimmed),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("ցտեսություն! (Goodbye!)");
                break;
            }
            Err(e) => {
                log::error!("readline error: {}", e);
                break;
            }
        }
    }
}

/// Runs one REPL line. When the line is exactly one bare expression statement, its
/// value is echoed back — the calculator convenience the original tool offers.
fn run_repl_line(engine: &Engine, env: &soorj::Environment, line: &str) {
    let program = match parse_source(line) {
        Ok(p) => p,
        Err(e) => {
            println!("Error: {}", e);
            return;
        }
    };

    let echo = program.len() == 1 && matches!(program[0], Stmt::Expr(_));

    for stmt in &program {
        match engine.run_statement(stmt, env) {
            Ok(Some(value)) if echo => println!("{}", value),
            Ok(_) => {}
            Err(e) => {
                let wrapped = SoorjError::from(e);
                log::error!("{}", wrapped);
                println!("Error: {}", wrapped);
                return;
            }
        }
    }
}

fn clear_screen() {
    print!("\x1B[2J\x1B[1;1H");
}

fn print_help() {
    println!("Soorj — a scripting language written in Armenian.");
    println!();
    println!("Meta-commands:");
    println!("  .help      Show this message");
    println!("  .exit      Quit the REPL");
    println!("  .clear     Clear the screen");
    println!("  .example   Show example programs");
    println!();
    println!("Keywords:");
    println!("  եթե (if)       հպ (else)       մինչև (while)");
    println!("  գործ (function) տուր (return)   այո (true)");
    println!("  ոչ (false)     հեչ (null)      և (and)");
    println!("  կամ (or)       չի (not)");
    println!();
    println!("Built-in functions:");
    println!("  գրէ(...)   write values to standard output");
    println!("  թիվ(ա)     convert to number");
    println!("  բառ(ա)     convert to string");
    println!();
    println!("Example: գրէ(\"Բարեւ, աշխարհ!\")");
}

fn print_example() {
    println!("# Hello World");
    println!("գրէ(\"Բարեւ, աշխարհ!\")");
    println!();
    println!("# Variables and arithmetic");
    println!("ա = 10");
    println!("բ = 20");
    println!("գրէ(\"Գումարը: \" + բառ(ա + բ))");
    println!();
    println!("# If / else");
    println!("եթե 5 > 3 {{");
    println!("  գրէ(\"Ա-ն մեծ է\")");
    println!("}} հպ {{");
    println!("  գրէ(\"Ա-ն փոքր է\")");
    println!("}}");
    println!();
    println!("# While loop");
    println!("ի = 1");
    println!("մինչև ի <= 3 {{");
    println!("  գրէ(\"Հաշվարկ: \" + բառ(ի))");
    println!("  ի = ի + 1");
    println!("}}");
    println!();
    println!("# Function definition");
    println!("գործ ողջունել(անուն) {{");
    println!("  տուր \"Բարեւ, \" + անուն");
    println!("}}");
    println!("գրէ(\"Ողջունեցի \" + ողջունել(\"Արամ\"))");
}

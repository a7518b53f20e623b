use std::{fs, process};

use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;
use minifun::{eval, parse_program, run, tokenize};

/// minifun is a small functional language with integers, booleans,
/// conditionals, let-bindings and top-level functions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increases log verbosity (`-v` for debug, `-vv` for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Prints the token stream, one token per line.
    Lex(Input),
    /// Prints the parsed program.
    Parse {
        /// Prints the syntax tree in its debug form.
        #[arg(long)]
        debug: bool,

        #[command(flatten)]
        input: Input,
    },
    /// Evaluates a free-standing expression.
    Eval(Input),
    /// Runs a program and prints the value of its main expression.
    Exec(Input),
}

#[derive(Args, Debug)]
struct Input {
    /// Tells minifun to read the contents from a file instead.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

impl Input {
    fn source(&self) -> Result<String, String> {
        if self.file {
            fs::read_to_string(&self.contents).map_err(|e| {
                                                   format!("failed to read the input file \
                                                            '{}': {e}",
                                                           self.contents)
                                               })
        } else {
            Ok(self.contents.clone())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level)
                              .parse_default_env()
                              .init();

    if let Err(message) = execute(&cli.command) {
        eprintln!("{} {message}", "error:".red().bold());
        process::exit(1);
    }
}

fn execute(command: &Command) -> Result<(), String> {
    match command {
        Command::Lex(input) => {
            let tokens = tokenize(&input.source()?).map_err(|e| e.to_string())?;
            for (token, position) in tokens {
                println!("{}:{}\t{token}", position.line, position.column);
            }
        },
        Command::Parse { debug, input } => {
            let program = parse_program(&input.source()?).map_err(|e| e.to_string())?;
            if *debug {
                println!("{program:#?}");
            } else {
                println!("{program}");
            }
        },
        Command::Eval(input) => {
            let value = eval(&input.source()?).map_err(|e| e.to_string())?;
            println!("{value}");
        },
        Command::Exec(input) => {
            let value = run(&input.source()?).map_err(|e| e.to_string())?;
            println!("{value}");
        },
    }

    Ok(())
}

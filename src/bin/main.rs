use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use crossterm::style::Stylize;
use interpreter_core::shell::Shell;
use interpreter_core::{Direction, InterpreterEngine, InterpreterError, Settings};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "interpreter")]
#[command(about = "Word-for-word translator backed by an editable dictionary", long_about = None)]
struct Args {
    /// Settings file (default: interpreter.json in the current directory, if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dictionary table to use instead of the one named in the settings
    #[arg(long, value_name = "FILE")]
    dictionary: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate a text file line by line
    Translate {
        input: PathBuf,
        output: PathBuf,
        /// Translate from the target language back to the source language
        #[arg(short, long)]
        reverse: bool,
    },
    /// Append a word pair to the dictionary
    Add { source: String, target: String },
    /// Print the translation of a single word
    Lookup {
        word: String,
        #[arg(short, long)]
        reverse: bool,
    },
    /// Interactive menu (the default)
    Menu,
}

fn direction(reverse: bool) -> Direction {
    if reverse {
        Direction::TargetToSource
    } else {
        Direction::SourceToTarget
    }
}

fn run(args: Args) -> Result<(), InterpreterError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let mut settings = Settings::discover(args.config.as_deref(), &cwd)?;
    if let Some(path) = args.dictionary {
        settings.dictionary_path = path;
    }
    tracing::debug!(dictionary = %settings.dictionary_path.display(), "settings resolved");

    let engine = InterpreterEngine::new(settings.dictionary_path.clone());
    let stdout = io::stdout();

    match args.command.unwrap_or(Command::Menu) {
        Command::Translate {
            input,
            output,
            reverse,
        } => {
            let report = engine.request_translation(&input, &output, direction(reverse))?;
            println!(
                "{}",
                format!(
                    "Translation complete! Output saved to '{}'",
                    output.display()
                )
                .green()
            );
            if report.unknown > 0 {
                println!(
                    "{} word(s) had no dictionary entry and were marked <word?>.",
                    report.unknown
                );
            }
        }
        Command::Add { source, target } => {
            let entry = engine.request_add_word(&source, &target)?;
            println!(
                "{}",
                format!(
                    "Success! Added '{}' -> '{}' to the dictionary.",
                    entry.source, entry.target
                )
                .green()
            );
        }
        Command::Lookup { word, reverse } => {
            let mut out = stdout.lock();
            let line = match engine.lookup(&word, direction(reverse))? {
                Some(translation) => translation,
                None => interpreter_core::core::translator::placeholder(word.trim()),
            };
            writeln!(out, "{}", line).map_err(|e| InterpreterError::Io {
                context: "Could not write to stdout".to_string(),
                source: e,
            })?;
        }
        Command::Menu => {
            let stdin = io::stdin();
            Shell::new(&engine, &settings, stdin.lock(), stdout.lock())
                .run()
                .map_err(|e| InterpreterError::Io {
                    context: "Console I/O failed".to_string(),
                    source: e,
                })?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format!("Error: {}", e).red());
            ExitCode::FAILURE
        }
    }
}

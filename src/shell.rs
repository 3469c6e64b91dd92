// File: src/shell.rs
//! The numbered menu loop.
//!
//! Reads choices and file names from any `BufRead` and writes prompts to any
//! `Write`, so the binary hands it stdin/stdout and tests hand it buffers.
//! A failed request is reported and the loop asks again.

use crate::config::Settings;
use crate::core::engine::InterpreterEngine;
use crate::core::types::Direction;
use crate::error::InterpreterError;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};
use std::path::Path;

pub struct Shell<'a, R, W> {
    engine: &'a InterpreterEngine,
    settings: &'a Settings,
    input: R,
    output: W,
}

enum Choice {
    Translate(Direction),
    AddWord,
    Exit,
    Invalid,
}

impl Choice {
    fn parse(raw: &str) -> Self {
        match raw.trim() {
            "1" => Choice::Translate(Direction::SourceToTarget),
            "2" => Choice::Translate(Direction::TargetToSource),
            "3" => Choice::AddWord,
            "4" => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(engine: &'a InterpreterEngine, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            engine,
            settings,
            input,
            output,
        }
    }

    /// Runs until the user picks exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice (1-4): ")? else {
                break;
            };

            match Choice::parse(&choice) {
                Choice::Translate(direction) => {
                    if !self.translate(direction)? {
                        break;
                    }
                }
                Choice::AddWord => {
                    if !self.add_word()? {
                        break;
                    }
                }
                Choice::Exit => break,
                Choice::Invalid => writeln!(
                    self.output,
                    "{}",
                    "Invalid choice. Please enter a number between 1 and 4.".yellow()
                )?,
            }
        }

        writeln!(self.output, "Goodbye! Yalla!")?;
        self.output.flush()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let (source, target) = self.languages(Direction::SourceToTarget);
        writeln!(self.output)?;
        writeln!(
            self.output,
            "{}",
            format!("===== {}-{} Interpreter =====", target, source).bold()
        )?;
        writeln!(self.output, "1. Translate {} to {}", source, target)?;
        writeln!(self.output, "2. Translate {} to {}", target, source)?;
        writeln!(self.output, "3. Add a new word to the dictionary")?;
        writeln!(self.output, "4. Exit")
    }

    /// Returns `false` when the input ended mid-request.
    fn translate(&mut self, direction: Direction) -> io::Result<bool> {
        let Some(input) = self.prompt("Enter the name of the input text file (e.g., input.txt): ")?
        else {
            return Ok(false);
        };
        let Some(output) =
            self.prompt("Enter the name for the output translated file (e.g., output.txt): ")?
        else {
            return Ok(false);
        };

        let (from, to) = self.languages(direction);
        writeln!(self.output, "Translating from {} to {}...", from, to)?;

        let (input, output) = (input.trim(), output.trim());
        match self
            .engine
            .request_translation(Path::new(input), Path::new(output), direction)
        {
            Ok(report) => {
                let message = format!("Translation complete! Output saved to '{}'", output);
                writeln!(self.output, "{}", message.green())?;
                if report.unknown > 0 {
                    writeln!(
                        self.output,
                        "{} word(s) had no dictionary entry and were marked <word?>.",
                        report.unknown
                    )?;
                }
            }
            Err(e @ InterpreterError::MissingInputFile { .. }) => {
                writeln!(self.output, "{}", format!("Error: {}", e).red())?;
            }
            Err(e) => {
                writeln!(
                    self.output,
                    "{}",
                    format!("An unexpected error occurred: {}", e).red()
                )?;
            }
        }
        Ok(true)
    }

    /// Returns `false` when the input ended mid-request.
    fn add_word(&mut self) -> io::Result<bool> {
        let (source, target) = self.languages(Direction::SourceToTarget);
        writeln!(self.output, "\n--- Add a New Word ---")?;

        let Some(source_word) = self.prompt(&format!("Enter the {} word: ", source))? else {
            return Ok(false);
        };
        let source_word = source_word.trim().to_lowercase();
        let Some(target_word) = self.prompt(&format!(
            "Enter the {} translation for '{}': ",
            target, source_word
        ))?
        else {
            return Ok(false);
        };

        match self.engine.request_add_word(&source_word, &target_word) {
            Ok(entry) => {
                let message = format!(
                    "Success! Added '{}' -> '{}' to the dictionary.",
                    entry.source, entry.target
                );
                writeln!(self.output, "{}", message.green())?;
            }
            Err(e) => {
                writeln!(
                    self.output,
                    "{}",
                    format!("Could not add the word: {}", e).red()
                )?;
            }
        }
        Ok(true)
    }

    /// Labels for the language read and the language written.
    fn languages(&self, direction: Direction) -> (String, String) {
        (self.label(direction), self.label(direction.reversed()))
    }

    fn label(&self, direction: Direction) -> String {
        match direction {
            Direction::SourceToTarget => self.settings.source_language.clone(),
            Direction::TargetToSource => self.settings.target_language.clone(),
        }
    }

    /// Prints `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

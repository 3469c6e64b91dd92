// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod shell;

pub use crate::config::Settings;
pub use crate::core::engine::InterpreterEngine;
pub use crate::core::types::{DictionaryEntry, Direction, TranslationReport, WordMap, WordMaps};
pub use crate::error::{InterpreterError, Result};

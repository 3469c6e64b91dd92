// src/core/types.rs
use std::collections::HashMap;
use std::fmt;

/// A lookup structure for one translation direction.
/// Keys and values are both normalized (trimmed, lower-cased).
pub type WordMap = HashMap<String, String>;

/// One record of the backing table, normalized on the way in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub source: String,
    pub target: String,
}

impl DictionaryEntry {
    /// Builds an entry, trimming and lower-casing both words.
    pub fn new(source: &str, target: &str) -> Self {
        Self {
            source: normalize(source),
            target: normalize(target),
        }
    }
}

/// Which of the two derived maps a request reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    SourceToTarget,
    TargetToSource,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::SourceToTarget => Direction::TargetToSource,
            Direction::TargetToSource => Direction::SourceToTarget,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::SourceToTarget => f.write_str("source->target"),
            Direction::TargetToSource => f.write_str("target->source"),
        }
    }
}

/// Both directional maps, derived from the same entry list.
#[derive(Debug, Clone, Default)]
pub struct WordMaps {
    pub forward: WordMap,
    pub reverse: WordMap,
}

impl WordMaps {
    /// Later entries overwrite earlier ones with the same key.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DictionaryEntry>,
    {
        let mut maps = Self::default();
        for entry in entries {
            maps.reverse.insert(entry.target.clone(), entry.source.clone());
            maps.forward.insert(entry.source, entry.target);
        }
        maps
    }

    pub fn for_direction(&self, direction: Direction) -> &WordMap {
        match direction {
            Direction::SourceToTarget => &self.forward,
            Direction::TargetToSource => &self.reverse,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty() && self.reverse.is_empty()
    }
}

/// Counts gathered while streaming one translation request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationReport {
    pub lines: usize,
    pub translated: usize,
    pub unknown: usize,
}

pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

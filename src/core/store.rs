// File: src/core/store.rs
use crate::core::record::{format_record, has_open_quote, parse_record};
use crate::core::types::{DictionaryEntry, WordMaps};
use crate::error::{IoContext, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The backing table: a two-column comma-separated file, one entry per line.
///
/// Nothing is cached. Every `load` reads the table again, so callers always
/// see entries appended by earlier `add_entry` calls.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    path: PathBuf,
}

impl DictionaryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every well-formed entry in table order.
    ///
    /// Lines that do not hold exactly two fields are skipped. A missing
    /// table is created empty.
    pub fn entries(&self) -> Result<Vec<DictionaryEntry>> {
        if !self.path.exists() {
            self.create_empty()?;
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .io_context(|| format!("Could not open dictionary '{}'", self.path.display()))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        let mut skipped = 0usize;
        // A quoted field may hold a line break; keep reading until it closes.
        let mut pending: Option<(usize, String)> = None;
        for (index, line) in reader.lines().enumerate() {
            let line = line
                .io_context(|| format!("Could not read dictionary '{}'", self.path.display()))?;
            let (start, record) = match pending.take() {
                Some((start, mut record)) => {
                    record.push('\n');
                    record.push_str(&line);
                    (start, record)
                }
                None => (index + 1, line),
            };
            if has_open_quote(&record) {
                pending = Some((start, record));
                continue;
            }
            if !push_record(&record, start, &mut entries) {
                skipped += 1;
            }
        }
        if let Some((start, record)) = pending {
            debug!(line = start, "dictionary ends inside a quoted field");
            if !push_record(&record, start, &mut entries) {
                skipped += 1;
            }
        }

        if skipped > 0 {
            warn!(
                path = %self.path.display(),
                skipped,
                "dictionary contains records without exactly two fields"
            );
        }
        debug!(path = %self.path.display(), entries = entries.len(), "dictionary loaded");
        Ok(entries)
    }

    /// Builds the forward and reverse maps from scratch.
    pub fn load(&self) -> Result<WordMaps> {
        Ok(WordMaps::from_entries(self.entries()?))
    }

    /// Normalizes both words and appends them as a new record.
    /// Duplicate keys are written as-is; `load` keeps the last one.
    pub fn add_entry(&self, source: &str, target: &str) -> Result<DictionaryEntry> {
        let entry = DictionaryEntry::new(source, target);
        self.ensure_parent_dir()?;

        let context = || format!("Could not append to dictionary '{}'", self.path.display());
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .io_context(context)?;
        let needs_newline = !ends_with_newline(&mut file).io_context(context)?;

        let mut writer = BufWriter::new(file);
        if needs_newline {
            writer.write_all(b"\n").io_context(context)?;
        }
        writeln!(writer, "{}", format_record(&[entry.source.as_str(), entry.target.as_str()]))
            .io_context(context)?;
        writer.flush().io_context(context)?;

        debug!(source = %entry.source, target = %entry.target, "dictionary entry appended");
        Ok(entry)
    }

    fn create_empty(&self) -> Result<()> {
        self.ensure_parent_dir()?;
        File::create(&self.path)
            .io_context(|| format!("Could not create dictionary '{}'", self.path.display()))?;
        debug!(path = %self.path.display(), "created empty dictionary");
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .io_context(|| format!("Could not create directory '{}'", parent.display())),
            _ => Ok(()),
        }
    }
}

/// Adds the entry held by `record`, or returns `false` when it does not
/// have exactly two fields.
fn push_record(record: &str, line: usize, entries: &mut Vec<DictionaryEntry>) -> bool {
    match parse_record(record).as_slice() {
        [source, target] => {
            entries.push(DictionaryEntry::new(source, target));
            true
        }
        fields => {
            debug!(
                line,
                fields = fields.len(),
                "skipping malformed dictionary record"
            );
            false
        }
    }
}

/// An empty file counts as ending with a newline.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

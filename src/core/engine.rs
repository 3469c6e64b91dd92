// File: src/core/engine.rs
use crate::core::store::DictionaryStore;
use crate::core::translator::{translate, translate_token};
use crate::core::types::{DictionaryEntry, Direction, TranslationReport};
use crate::error::{InterpreterError, IoContext, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The entry point the shell and the command line talk to.
///
/// The engine holds only the location of the backing table. The word maps
/// are rebuilt on every request so they always include the latest entries.
#[derive(Debug, Clone)]
pub struct InterpreterEngine {
    store: DictionaryStore,
}

impl InterpreterEngine {
    pub fn new(dictionary_path: impl Into<PathBuf>) -> Self {
        Self {
            store: DictionaryStore::new(dictionary_path),
        }
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Translates `input` into `output`, one line at a time.
    ///
    /// A missing input file is reported as [`InterpreterError::MissingInputFile`]
    /// before the output is created. Any later failure leaves whatever was
    /// already written in place.
    pub fn request_translation(
        &self,
        input: &Path,
        output: &Path,
        direction: Direction,
    ) -> Result<TranslationReport> {
        let maps = self.store.load()?;
        let map = maps.for_direction(direction);
        debug!(%direction, words = map.len(), "translation requested");

        let infile = File::open(input).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => InterpreterError::MissingInputFile {
                path: input.to_path_buf(),
            },
            _ => InterpreterError::io(format!("Could not open '{}'", input.display()), e),
        })?;
        let outfile = File::create(output)
            .io_context(|| format!("Could not create '{}'", output.display()))?;

        let mut writer = BufWriter::new(outfile);
        let mut lines = translate(map, BufReader::new(infile).lines());
        for line in lines.by_ref() {
            let line = line.io_context(|| format!("Could not read '{}'", input.display()))?;
            writer
                .write_all(line.as_bytes())
                .io_context(|| format!("Could not write '{}'", output.display()))?;
        }
        writer
            .flush()
            .io_context(|| format!("Could not write '{}'", output.display()))?;

        let report = lines.report();
        info!(
            %direction,
            input = %input.display(),
            output = %output.display(),
            lines = report.lines,
            unknown = report.unknown,
            "translation complete"
        );
        Ok(report)
    }

    /// Appends a new word pair and returns it as stored.
    pub fn request_add_word(&self, source: &str, target: &str) -> Result<DictionaryEntry> {
        let entry = self.store.add_entry(source, target)?;
        info!(source = %entry.source, target = %entry.target, "word added");
        Ok(entry)
    }

    /// Looks up one word against a freshly loaded map.
    pub fn lookup(&self, word: &str, direction: Direction) -> Result<Option<String>> {
        let maps = self.store.load()?;
        Ok(translate_token(maps.for_direction(direction), word.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs;
    use tempfile::TempDir;

    fn engine_in(dir: &TempDir, table: &str) -> InterpreterEngine {
        let path = dir.path().join("dictionary.csv");
        fs::write(&path, table).unwrap();
        InterpreterEngine::new(path)
    }

    #[rstest]
    #[case(Direction::SourceToTarget, "cat dog fish\n", "blerp worg <fish?>\n")]
    #[case(Direction::TargetToSource, "Worg blerp\n", "dog cat\n")]
    fn translates_file(
        #[case] direction: Direction,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, "cat,blerp\ndog,worg\n");
        let input_path = dir.path().join("input.txt");
        let output_path = dir.path().join("output.txt");
        fs::write(&input_path, input).unwrap();

        engine
            .request_translation(&input_path, &output_path, direction)
            .unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), expected);
    }

    #[rstest]
    fn missing_input_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, "cat,blerp\n");
        let output_path = dir.path().join("output.txt");

        let err = engine
            .request_translation(
                &dir.path().join("nope.txt"),
                &output_path,
                Direction::SourceToTarget,
            )
            .unwrap_err();

        assert!(matches!(err, InterpreterError::MissingInputFile { .. }));
        assert!(!output_path.exists());
    }

    #[rstest]
    fn unwritable_output_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, "cat,blerp\n");
        let input_path = dir.path().join("input.txt");
        fs::write(&input_path, "cat\n").unwrap();

        let err = engine
            .request_translation(
                &input_path,
                &dir.path().join("missing-dir").join("out.txt"),
                Direction::SourceToTarget,
            )
            .unwrap_err();

        assert!(matches!(err, InterpreterError::Io { .. }));
    }

    #[rstest]
    fn read_failure_keeps_lines_already_written() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, "cat,blerp\n");
        let input_path = dir.path().join("input.txt");
        let output_path = dir.path().join("output.txt");
        fs::write(&input_path, b"cat\ncat\n\xff\xfe\ncat\n").unwrap();

        let err = engine
            .request_translation(&input_path, &output_path, Direction::SourceToTarget)
            .unwrap_err();

        assert!(matches!(err, InterpreterError::Io { .. }));
        assert!(err.to_string().starts_with("Could not read"));
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "blerp\nblerp\n");
    }

    #[rstest]
    fn report_counts_lines_and_tokens() {
        let dir = TempDir::new().unwrap();
        let engine = engine_in(&dir, "cat,blerp\n");
        let input_path = dir.path().join("input.txt");
        fs::write(&input_path, "cat cat\nbird\n\n").unwrap();

        let report = engine
            .request_translation(
                &input_path,
                &dir.path().join("out.txt"),
                Direction::SourceToTarget,
            )
            .unwrap();

        assert_eq!(
            report,
            TranslationReport {
                lines: 3,
                translated: 2,
                unknown: 1
            }
        );
    }

    #[rstest]
    fn added_words_are_visible_to_the_next_request() {
        let dir = TempDir::new().unwrap();
        let engine = InterpreterEngine::new(dir.path().join("dictionary.csv"));

        assert_eq!(engine.lookup("hello", Direction::SourceToTarget).unwrap(), None);
        engine.request_add_word("Hello", "Zaru").unwrap();

        assert_eq!(
            engine.lookup("HELLO", Direction::SourceToTarget).unwrap(),
            Some("zaru".to_string())
        );
        assert_eq!(
            engine.lookup("zaru", Direction::TargetToSource).unwrap(),
            Some("hello".to_string())
        );
    }
}

// File: src/core/translator.rs
use crate::core::types::{TranslationReport, WordMap};
use std::io;

/// Output for a token with no dictionary entry. The token keeps its original
/// casing so the untranslated word stays readable in the output.
pub fn placeholder(token: &str) -> String {
    format!("<{}?>", token)
}

/// Looks up a single token by its lower-cased form.
pub fn translate_token(map: &WordMap, token: &str) -> Option<String> {
    map.get(&token.to_lowercase()).cloned()
}

/// Translates one line, without a terminator.
///
/// Runs of whitespace collapse to a single space; leading and trailing
/// whitespace is dropped.
pub fn translate_line(map: &WordMap, line: &str) -> String {
    translate_tokens(map, line, &mut TranslationReport::default())
}

fn translate_tokens(map: &WordMap, line: &str, report: &mut TranslationReport) -> String {
    line.split_whitespace()
        .map(|token| match translate_token(map, token) {
            Some(word) => {
                report.translated += 1;
                word
            }
            None => {
                report.unknown += 1;
                placeholder(token)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lazily translates a stream of lines, one line in, one line out.
///
/// Each produced line ends with `\n`. Read errors from the input are passed
/// through unchanged and do not stop the iterator by themselves.
pub fn translate<I>(map: &WordMap, lines: I) -> Translate<'_, I::IntoIter>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    Translate {
        map,
        lines: lines.into_iter(),
        report: TranslationReport::default(),
    }
}

/// Iterator returned by [`translate`].
#[derive(Debug)]
pub struct Translate<'a, I> {
    map: &'a WordMap,
    lines: I,
    report: TranslationReport,
}

impl<I> Translate<'_, I> {
    /// Counts for the lines produced so far.
    pub fn report(&self) -> TranslationReport {
        self.report
    }
}

impl<I> Iterator for Translate<'_, I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(e)),
        };
        let mut translated = translate_tokens(self.map, &line, &mut self.report);
        translated.push('\n');
        self.report.lines += 1;
        Some(Ok(translated))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.lines.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{DictionaryEntry, WordMaps};
    use rstest::{fixture, rstest};

    #[fixture]
    fn maps() -> WordMaps {
        WordMaps::from_entries(vec![
            DictionaryEntry::new("cat", "blerp"),
            DictionaryEntry::new("dog", "worg"),
            DictionaryEntry::new("hello", "zaru"),
        ])
    }

    fn lines(input: &[&str]) -> Vec<io::Result<String>> {
        input.iter().map(|l| Ok(l.to_string())).collect()
    }

    #[rstest]
    #[case("cat dog fish", "blerp worg <fish?>")]
    #[case("Cat DOG", "blerp worg")]
    #[case("Foo", "<Foo?>")]
    #[case("  hello \t  cat  ", "zaru blerp")]
    #[case("cat, dog.", "<cat,?> <dog.?>")]
    #[case("", "")]
    #[case("   ", "")]
    fn translates_line(maps: WordMaps, #[case] line: &str, #[case] expected: &str) {
        assert_eq!(translate_line(&maps.forward, line), expected);
    }

    #[rstest]
    fn fully_mapped_line_keeps_token_count(maps: WordMaps) {
        let out = translate_line(&maps.forward, "hello cat dog cat");

        assert_eq!(out.split(' ').count(), 4);
        assert_eq!(out, "zaru blerp worg blerp");
    }

    #[rstest]
    fn reverse_map_translates_back(maps: WordMaps) {
        assert_eq!(translate_line(&maps.reverse, "Blerp worg zaru"), "cat dog hello");
    }

    #[rstest]
    fn stream_yields_one_line_per_input(maps: WordMaps) {
        let out: Vec<String> = translate(&maps.forward, lines(&["cat dog fish", "", "Hello"]))
            .collect::<io::Result<_>>()
            .unwrap();

        assert_eq!(out, vec!["blerp worg <fish?>\n", "\n", "zaru\n"]);
    }

    #[rstest]
    fn stream_counts_tokens(maps: WordMaps) {
        let mut stream = translate(&maps.forward, lines(&["cat dog fish", "Hello Mars"]));
        for line in stream.by_ref() {
            line.unwrap();
        }

        let report = stream.report();
        assert_eq!(report.lines, 2);
        assert_eq!(report.translated, 3);
        assert_eq!(report.unknown, 2);
    }

    #[rstest]
    fn read_errors_pass_through(maps: WordMaps) {
        let input = vec![
            Ok("cat".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
        ];
        let mut stream = translate(&maps.forward, input);

        assert_eq!(stream.next().unwrap().unwrap(), "blerp\n");
        assert_eq!(
            stream.next().unwrap().unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
        assert!(stream.next().is_none());
    }

    #[rstest]
    fn stream_is_lazy(maps: WordMaps) {
        let endless = std::iter::repeat_with(|| -> io::Result<String> { Ok("dog".to_string()) });
        let first: Vec<String> = translate(&maps.forward, endless)
            .take(3)
            .map(Result::unwrap)
            .collect();

        assert_eq!(first, vec!["worg\n"; 3]);
    }
}

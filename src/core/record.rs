// File: src/core/record.rs
//! One record of the backing table.
//!
//! Fields are comma separated. A field is wrapped in double quotes only when
//! it contains a comma, a double quote or a line break, with inner quotes
//! doubled. Plain words therefore round-trip as `source,target`. A quoted
//! field holding a line break makes the record span several lines.

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Splits one line into its fields. An empty line has no fields.
pub fn parse_record(line: &str) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }

    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    field.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            DELIMITER => {
                fields.push(std::mem::take(&mut field));
                at_field_start = true;
                continue;
            }
            QUOTE if at_field_start => in_quotes = true,
            _ => field.push(c),
        }
        at_field_start = false;
    }

    fields.push(field);
    fields
}

/// True when `text` ends inside a quoted field, so the record carries on
/// past the line break.
pub fn has_open_quote(text: &str) -> bool {
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }

        match c {
            DELIMITER => {
                at_field_start = true;
                continue;
            }
            QUOTE if at_field_start => in_quotes = true,
            _ => {}
        }
        at_field_start = false;
    }

    in_quotes
}

/// Joins fields into one line, without a terminator.
pub fn format_record(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| quote_if_needed(field))
        .collect::<Vec<_>>()
        .join(",")
}

fn quote_if_needed(field: &str) -> String {
    let needs_quotes = field
        .chars()
        .any(|c| c == DELIMITER || c == QUOTE || c == '\n' || c == '\r');
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

//! Flat-file parser for the grammalecte thesaurus format.
//!
//! The `.dat` file is a line-oriented UTF-8 flat file:
//! - the first line is a header (entry count) and is skipped,
//! - a line that does not start with `(` opens a new entry: `word|meta`,
//! - a line that starts with `(` continues the current entry:
//!   `(tag)|syn1|syn2|...` where the leading tag field is discarded and the
//!   remaining fields are appended to the entry's synonym list.
//!
//! Entries appearing more than once have their synonym lists merged. An
//! entry with no continuation lines is a valid isolated word.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ahash::AHashMap;
use log::info;

use crate::error::{Result, SynographError};

/// Raw thesaurus mapping: word -> candidate synonym words, as parsed.
///
/// Candidate lists may still contain dangling references (words that are not
/// entries themselves) and self-references; see
/// [`filter_dangling`](crate::thesaurus::filter_dangling).
pub type RawMapping = AHashMap<String, Vec<String>>;

/// Parse a thesaurus `.dat` file from disk.
pub fn parse_dat_file<P: AsRef<Path>>(path: P) -> Result<RawMapping> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        SynographError::parse(format!(
            "Failed to open thesaurus file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_dat(BufReader::new(file))
}

/// Parse the thesaurus flat-file format from any buffered reader.
pub fn parse_dat<R: BufRead>(reader: R) -> Result<RawMapping> {
    let mut mapping = RawMapping::new();
    let mut current: Option<String> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line?;
        // First line is the entry-count header.
        if line_no == 0 {
            continue;
        }
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix('(') {
            let name = current.as_ref().ok_or_else(|| {
                SynographError::parse(format!(
                    "Line {}: synonym line before any entry line",
                    line_no + 1
                ))
            })?;
            // Drop the leading `(tag)` field, keep the synonym fields.
            let synonyms = rest.split('|').skip(1).map(str::to_string);
            mapping
                .get_mut(name)
                .expect("current entry is always present in the mapping")
                .extend(synonyms);
        } else {
            let (name, _meta) = line.split_once('|').ok_or_else(|| {
                SynographError::parse(format!(
                    "Line {}: entry line without '|' separator: '{}'",
                    line_no + 1,
                    line
                ))
            })?;
            mapping.entry(name.to_string()).or_default();
            current = Some(name.to_string());
        }
    }

    info!("Parsed {} thesaurus entries", mapping.len());
    Ok(mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "3\n\
        roi|1\n\
        (noun)|autocrate|monarque\n\
        chef|1\n\
        (noun)|patron\n\
        coq|1\n";

    #[test]
    fn test_parse_basic_entries() {
        let mapping = parse_dat(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(mapping.len(), 3);
        assert_eq!(
            mapping["roi"],
            vec!["autocrate".to_string(), "monarque".to_string()]
        );
        assert_eq!(mapping["chef"], vec!["patron".to_string()]);
        assert!(mapping["coq"].is_empty());
    }

    #[test]
    fn test_parse_skips_header_line() {
        // The header is a bare count with no '|' separator; it must not be
        // treated as an entry.
        let mapping = parse_dat(Cursor::new("1\nroi|1\n")).unwrap();
        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains_key("roi"));
    }

    #[test]
    fn test_parse_merges_duplicate_entries() {
        let input = "2\n\
            roi|1\n\
            (noun)|autocrate\n\
            roi|1\n\
            (noun)|monarque\n";
        let mapping = parse_dat(Cursor::new(input)).unwrap();

        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping["roi"],
            vec!["autocrate".to_string(), "monarque".to_string()]
        );
    }

    #[test]
    fn test_parse_multiple_synonym_lines_per_entry() {
        let input = "1\n\
            roi|2\n\
            (noun)|autocrate\n\
            (noun)|monarque|souverain\n";
        let mapping = parse_dat(Cursor::new(input)).unwrap();

        assert_eq!(mapping["roi"].len(), 3);
    }

    #[test]
    fn test_parse_synonym_line_before_entry_fails() {
        let result = parse_dat(Cursor::new("1\n(noun)|autocrate\n"));
        assert!(matches!(result, Err(SynographError::Parse(_))));
    }

    #[test]
    fn test_parse_entry_without_separator_fails() {
        let result = parse_dat(Cursor::new("1\nroi\n"));
        assert!(matches!(result, Err(SynographError::Parse(_))));
    }
}

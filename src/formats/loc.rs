//! Codec for the native `.loc` localization format.
//!
//! A `.loc` file is a sequence of blocks, one per entry:
//!
//! ```text
//! GREETING # shown on the title screen
//! {
//! Hello, world!
//! }
//! ```
//!
//! The key line carries one token plus an optional `# comment`; the value
//! is every line between a line containing only `{` and the next line
//! containing only `}`, verbatim. Blocks are separated by a blank line.

use std::path::Path;

use crate::{
    error::Error,
    formats::{BOM, ParseMode, decode_text},
    types::{Entry, LocFile},
};

/// File extension used by the loc format (without the dot).
pub const EXTENSION: &str = "loc";

/// Parses loc text into a [`LocFile`] tagged with the given filename and
/// language.
///
/// The text is expected to be pre-decoded (see
/// [`decode_text`](crate::formats::decode_text)); callers reading from
/// disk should prefer [`read_from`].
pub fn parse(
    text: &str,
    filename: impl Into<String>,
    language: impl Into<String>,
    mode: ParseMode,
) -> Result<LocFile, Error> {
    let mut file = LocFile::new(filename, language);
    let lines: Vec<&str> = text.lines().collect();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        if line.trim().is_empty() {
            i += 1;
            continue;
        }
        if lines.get(i + 1).copied() != Some("{") {
            if mode.is_strict() {
                return Err(Error::malformed(i + 1, "expected `{` after entry key"));
            }
            i += 1;
            continue;
        }
        let Some((key, comment)) = parse_header(line) else {
            if mode.is_strict() {
                return Err(Error::malformed(i + 1, "invalid entry header"));
            }
            i += 1;
            continue;
        };
        // The value ends at the first line that is exactly `}`; indented
        // braces belong to the value.
        match lines[i + 2..].iter().position(|l| *l == "}") {
            Some(offset) => {
                let end = i + 2 + offset;
                let value = lines[i + 2..end].join("\n");
                file.upsert_entry(Entry::new(key, value.clone(), value, comment));
                i = end + 1;
            }
            None => {
                if mode.is_strict() {
                    return Err(Error::malformed(i + 1, "unterminated value block"));
                }
                break;
            }
        }
    }

    Ok(file)
}

/// Serializes entries back to loc text: blocks joined by one blank line,
/// trailing newline included. The inverse of [`parse`].
pub fn to_string(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(|entry| {
            if entry.comment.is_empty() {
                format!("{}\n{{\n{}\n}}\n", entry.key, entry.value)
            } else {
                format!("{} # {}\n{{\n{}\n}}\n", entry.key, entry.comment, entry.value)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Reads and parses a loc file from disk.
pub fn read_from(
    path: impl AsRef<Path>,
    filename: impl Into<String>,
    language: impl Into<String>,
    mode: ParseMode,
) -> Result<LocFile, Error> {
    let bytes = std::fs::read(path)?;
    parse(&decode_text(&bytes), filename, language, mode)
}

/// Writes a loc file to disk, prefixed with the UTF-8 byte-order-mark.
pub fn write_to(path: impl AsRef<Path>, file: &LocFile) -> Result<(), Error> {
    std::fs::write(path, format!("{}{}", BOM, to_string(&file.entries)))?;
    Ok(())
}

/// Splits a header line into key and comment.
///
/// Returns `None` when the line is not a valid header: no key before the
/// comment marker, or more than one token where the key should be. A `#`
/// only starts a comment when it begins the line or follows whitespace;
/// a `#` glued to the key belongs to the key.
fn parse_header(line: &str) -> Option<(String, String)> {
    let (key_part, comment) = split_at_comment(line);
    let mut tokens = key_part.split_whitespace();
    let key = tokens.next()?;
    if tokens.next().is_some() {
        return None;
    }
    Some((
        key.to_string(),
        comment.map_or_else(String::new, |c| c.trim_start_matches(' ').to_string()),
    ))
}

fn split_at_comment(line: &str) -> (&str, Option<&str>) {
    let bytes = line.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && (i == 0 || bytes[i - 1] == b' ' || bytes[i - 1] == b'\t') {
            return (&line[..i], Some(&line[i + 1..]));
        }
    }
    (line, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_lenient(text: &str) -> LocFile {
        parse(text, "test.loc", "en", ParseMode::Lenient).unwrap()
    }

    #[test]
    fn test_parse_simple_entries() {
        let text = "GREETING\n{\nHello\n}\n\nFAREWELL # end screen\n{\nGoodbye\n}\n";
        let file = parse_lenient(text);

        assert_eq!(file.filename, "test.loc");
        assert_eq!(file.language, "en");
        assert_eq!(file.entries.len(), 2);
        assert_eq!(file.entries[0].key, "GREETING");
        assert_eq!(file.entries[0].value, "Hello");
        assert_eq!(file.entries[0].original, "Hello");
        assert_eq!(file.entries[0].comment, "");
        assert_eq!(file.entries[1].key, "FAREWELL");
        assert_eq!(file.entries[1].comment, "end screen");
    }

    #[test]
    fn test_parse_multiline_value() {
        let text = "STORY\n{\nLine one\n\nLine three\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries[0].value, "Line one\n\nLine three");
    }

    #[test]
    fn test_parse_empty_value() {
        let text = "EMPTY\n{\n\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries[0].value, "");
    }

    #[test]
    fn test_parse_comment_without_space_after_marker() {
        let file = parse_lenient("KEY #tight\n{\nv\n}\n");
        assert_eq!(file.entries[0].comment, "tight");
    }

    #[test]
    fn test_parse_hash_glued_to_key_belongs_to_key() {
        let file = parse_lenient("KEY#1\n{\nv\n}\n");
        assert_eq!(file.entries[0].key, "KEY#1");
        assert_eq!(file.entries[0].comment, "");
    }

    #[test]
    fn test_parse_indented_brace_stays_in_value() {
        let text = "KEY\n{\nif x:\n  }\ndone\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries[0].value, "if x:\n  }\ndone");
    }

    #[test]
    fn test_parse_duplicate_key_last_write_wins() {
        let text = "KEY\n{\nfirst\n}\n\nKEY\n{\nsecond\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries.len(), 1);
        assert_eq!(file.entries[0].value, "second");
    }

    #[test]
    fn test_parse_normalizes_punctuation_in_values() {
        let text = "KEY\n{\nit\u{2019}s a test \u{2013} really\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries[0].value, "it's a test - really");
    }

    #[test]
    fn test_lenient_skips_stray_lines() {
        let text = "stray junk line\nKEY\n{\nv\n}\n";
        let file = parse_lenient(text);
        assert_eq!(file.entries.len(), 1);
        assert_eq!(file.entries[0].key, "KEY");
    }

    #[test]
    fn test_lenient_skips_header_with_extra_tokens() {
        let text = "TWO TOKENS\n{\nv\n}\n\nGOOD\n{\nw\n}\n";
        let file = parse_lenient(text);
        // The bad header is dropped; its block lines are then strays.
        assert_eq!(file.entries.len(), 1);
        assert_eq!(file.entries[0].key, "GOOD");
    }

    #[test]
    fn test_strict_rejects_stray_line() {
        let err = parse("junk here\n", "t.loc", "en", ParseMode::Strict).unwrap_err();
        assert!(err.to_string().contains("line 1"));
        assert!(err.to_string().contains("expected `{`"));
    }

    #[test]
    fn test_strict_rejects_header_with_extra_tokens() {
        let err = parse("TWO TOKENS\n{\nv\n}\n", "t.loc", "en", ParseMode::Strict).unwrap_err();
        assert!(err.to_string().contains("invalid entry header"));
    }

    #[test]
    fn test_strict_rejects_unterminated_block() {
        let err = parse("KEY\n{\nno end\n", "t.loc", "en", ParseMode::Strict).unwrap_err();
        assert!(err.to_string().contains("unterminated value block"));
    }

    #[test]
    fn test_lenient_stops_at_unterminated_block() {
        let file = parse_lenient("KEY\n{\nno end\n");
        assert!(file.entries.is_empty());
    }

    #[test]
    fn test_comment_only_line_is_not_a_header() {
        let file = parse_lenient("# just a note\n{\nv\n}\n");
        assert!(file.entries.is_empty());
    }

    #[test]
    fn test_serialize_joins_blocks_with_blank_line() {
        let entries = vec![
            Entry::new("A", "one", "one", ""),
            Entry::new("B", "two", "two", "note"),
        ];
        assert_eq!(
            to_string(&entries),
            "A\n{\none\n}\n\nB # note\n{\ntwo\n}\n"
        );
    }

    #[test]
    fn test_round_trip() {
        let entries = vec![
            Entry::new("TITLE", "Main Menu", "Main Menu", "top of screen"),
            Entry::new("BODY", "First\nSecond line", "First\nSecond line", ""),
            Entry::new("EMPTY", "", "", "placeholder"),
        ];
        let text = to_string(&entries);
        let file = parse(&text, "menu.loc", "en", ParseMode::Strict).unwrap();
        assert_eq!(file.entries, entries);
    }

    #[test]
    fn test_parse_after_decode_matches_clean_input() {
        let clean = "KEY\n{\nvalue\n}\n";
        let mut polluted = vec![0xEF, 0xBB, 0xBF];
        polluted.extend_from_slice(clean.as_bytes());

        let from_clean = parse_lenient(clean);
        let from_polluted = parse_lenient(&decode_text(&polluted));
        assert_eq!(from_clean, from_polluted);
    }

    #[test]
    fn test_write_and_read_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.loc");
        let file = LocFile::with_entries(
            "menu.loc",
            "en",
            vec![Entry::new("KEY", "value", "value", "note")],
        );

        write_to(&path, &file).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..3], &[0xEF, 0xBB, 0xBF]);

        let reread = read_from(&path, "menu.loc", "en", ParseMode::Strict).unwrap();
        assert_eq!(reread, file);
    }
}

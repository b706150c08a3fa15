//! Core, format-agnostic types for lockit.
//! Codecs decode into these; the reconciliation engine transforms them.

use serde::{Deserialize, Serialize};

/// Normalizes look-alike punctuation to plain ASCII.
///
/// Translators routinely paste soft hyphens, en-dashes, and curly quotes
/// from word processors; downstream consumers of the `.loc` format expect
/// the ASCII forms. Applied to `value` and `original` whenever an [`Entry`]
/// is constructed.
pub fn normalize_punctuation(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{00AD}' | '\u{2013}' => '-',
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            other => other,
        })
        .collect()
}

/// A single translatable unit: one key and its text for one language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Entry {
    /// Unique-within-file identifier. Never contains whitespace.
    pub key: String,

    /// The translated text for this file's language. May span lines.
    pub value: String,

    /// The source-language text this value was translated from.
    /// Holds the current value when no distinct original is known.
    pub original: String,

    /// Free-text annotation for translators; empty means "no comment".
    #[serde(default)]
    pub comment: String,
}

impl Entry {
    /// Builds an entry, normalizing punctuation in `value` and `original`.
    pub fn new(
        key: impl Into<String>,
        value: impl Into<String>,
        original: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Entry {
            key: key.into(),
            value: normalize_punctuation(&value.into()),
            original: normalize_punctuation(&original.into()),
            comment: comment.into(),
        }
    }
}

/// An ordered set of entries for one language, identified across languages
/// by its [reference filename](LocFile::reference_filename).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocFile {
    /// Path-like identifier, usually root-relative and containing the
    /// language directory segment (e.g. `ui/de/menu.loc`).
    pub filename: String,

    /// Language code taken from the directory layout; empty string means
    /// "no specific language".
    pub language: String,

    /// Entries in file order.
    pub entries: Vec<Entry>,
}

impl LocFile {
    pub fn new(filename: impl Into<String>, language: impl Into<String>) -> Self {
        LocFile {
            filename: filename.into(),
            language: language.into(),
            entries: Vec::new(),
        }
    }

    pub fn with_entries(
        filename: impl Into<String>,
        language: impl Into<String>,
        entries: Vec<Entry>,
    ) -> Self {
        LocFile {
            filename: filename.into(),
            language: language.into(),
            entries,
        }
    }

    /// The filename with the language path segment removed.
    ///
    /// This is the identity key used to match the same logical file across
    /// languages: `ui/de/menu.loc` and `ui/en/menu.loc` share the
    /// reference filename `ui/menu.loc`. Root-relative filenames may start
    /// with the language segment (`de/menu.loc`), so a leading segment is
    /// stripped as well.
    pub fn reference_filename(&self) -> String {
        if self.language.is_empty() {
            return self.filename.clone();
        }
        let infix = format!("/{}/", self.language);
        if self.filename.contains(&infix) {
            return self.filename.replace(&infix, "/");
        }
        match self.filename.strip_prefix(&format!("{}/", self.language)) {
            Some(rest) => rest.to_string(),
            None => self.filename.clone(),
        }
    }

    /// Looks up an entry by key.
    pub fn find_entry(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Looks up an entry by key for in-place mutation.
    pub fn find_entry_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Appends an entry, replacing any existing entry with the same key.
    ///
    /// Duplicate keys in source text resolve to the last occurrence, kept
    /// at the first occurrence's position.
    pub fn upsert_entry(&mut self, entry: Entry) {
        match self.entries.iter_mut().find(|e| e.key == entry.key) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }
}

/// Inserts a language segment ahead of a reference filename's basename:
/// `ui/menu.loc` + `de` becomes `ui/de/menu.loc`. The inverse of
/// [`LocFile::reference_filename`]; an empty language returns the
/// reference unchanged.
pub fn qualified_filename(reference: &str, language: &str) -> String {
    if language.is_empty() {
        return reference.to_string();
    }
    match reference.rfind('/') {
        Some(pos) => format!(
            "{}/{}/{}",
            &reference[..pos],
            language,
            &reference[pos + 1..]
        ),
        None => format!("{}/{}", language, reference),
    }
}

/// A multi-language merged view of one logical file: one row per key, one
/// value column per language.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FullFile {
    /// Directory part of the reference filename; empty for bare filenames.
    pub path: String,

    /// Basename part of the reference filename.
    pub filename: String,

    /// Language order for all entries: base language first, the rest
    /// sorted ascending.
    pub languages: Vec<String>,

    /// Merged entries in first-seen key order.
    pub entries: Vec<FullEntry>,
}

impl FullFile {
    /// The reference filename this view was merged from.
    pub fn full_filename(&self) -> String {
        if self.path.is_empty() {
            self.filename.clone()
        } else {
            format!("{}/{}", self.path, self.filename)
        }
    }
}

/// One key with its value in every language of the enclosing [`FullFile`],
/// aligned by position to the file's language list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FullEntry {
    pub key: String,

    /// One value per language; an empty string marks a missing
    /// translation.
    pub values: Vec<String>,

    /// Comment from the base-language entry, empty when it has none.
    #[serde(default)]
    pub comment: String,
}

impl FullEntry {
    pub fn new(key: impl Into<String>, values: Vec<String>, comment: impl Into<String>) -> Self {
        FullEntry {
            key: key.into(),
            values,
            comment: comment.into(),
        }
    }
}
